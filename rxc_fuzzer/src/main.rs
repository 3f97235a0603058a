/**
 * Differential fuzzer: random regexes are compiled to minimal DFAs, and the
 * DFAs are checked against the backtracking matcher on random strings.
 */

extern crate rand;
extern crate rxc_dense_fsa;
extern crate rxc_regex_parse;

mod rnd;
mod str_gen;
mod regex_gen;

use clap::{App, Arg};
use log::{debug, info, LevelFilter};
use thiserror::Error;
use rxc_dense_fsa::{compile, compile_dfa, ParseError};
use rxc_regex_parse::backtrack;
use str_gen::*;
use regex_gen::*;

/// The backtracking matcher is exponential, longer inputs are skipped
const MAX_INPUT_LEN: usize = 10;

#[derive(Debug, Clone)]
struct Config {
    seed: u64,
    iterations: usize,
    depth: usize,
    charset: String,
    strings: usize,
}

#[derive(Debug, Error)]
enum FuzzError {
    #[error("generated regex {regex:?} does not parse: {source}")]
    Syntax { regex: String, source: ParseError },

    #[error("regex {regex:?} on {input:?}: the DFA says {dfa}, the backtracking matcher says {expected}")]
    Mismatch { regex: String, input: String, dfa: bool, expected: bool },

    #[error("regex {regex:?}: the minimal DFA has {minimal} states, more than the {raw} of the raw DFA")]
    Grown { regex: String, minimal: usize, raw: usize },
}

/// Runs `config.iterations` rounds, stopping at the first counterexample.
fn run(config: &Config) -> Result<(), FuzzError> {
    rnd::set_seed(config.seed);
    let regex_gen = RandomRegexGenerator::with_depth_and_charset(config.depth, &config.charset);
    let noise = RandomStringGenerator::with_len_and_charset(0..8, &config.charset);

    for iteration in 0..config.iterations {
        let node = regex_gen.generate();
        let regex = to_source(&node);
        debug!("Iteration {}: {}", iteration, regex);

        let min = compile(&regex)
            .map_err(|source| FuzzError::Syntax{ regex: regex.clone(), source })?;
        let raw = compile_dfa(&regex)
            .map_err(|source| FuzzError::Syntax{ regex: regex.clone(), source })?;
        if min.states().len() > raw.states().len() {
            return Err(FuzzError::Grown{
                regex,
                minimal: min.states().len(),
                raw: raw.states().len(),
            });
        }

        let matching = MatchingStringGenerator::with_regex(&node, 3);
        for i in 0..config.strings {
            // Alternate between likely rejected and surely accepted inputs
            let input = if i % 2 == 0 { noise.generate() } else { matching.generate() };
            if input.chars().count() > MAX_INPUT_LEN {
                continue;
            }
            let expected = backtrack::matches(&node, &input);
            let dfa = min.accepts(&input);
            if dfa != expected {
                return Err(FuzzError::Mismatch{ regex, input, dfa, expected });
            }
        }
    }

    Ok(())
}

fn parse_number<T: std::str::FromStr>(value: Option<&str>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn main() {
    let matches = App::new("rxc_fuzzer")
        .version("0.1")
        .about("Checks compiled DFAs against a backtracking matcher on random input")
        .arg(Arg::with_name("seed")
            .long("seed")
            .takes_value(true)
            .help("Seed of the generator, the system time by default"))
        .arg(Arg::with_name("iterations")
            .long("iterations")
            .short("n")
            .takes_value(true)
            .default_value("1000")
            .help("The number of regexes to try"))
        .arg(Arg::with_name("depth")
            .long("depth")
            .takes_value(true)
            .default_value("4")
            .help("Maximum nesting depth of the generated regexes"))
        .arg(Arg::with_name("charset")
            .long("charset")
            .takes_value(true)
            .default_value("ab")
            .help("Characters used for literals and inputs"))
        .arg(Arg::with_name("strings")
            .long("strings")
            .takes_value(true)
            .default_value("50")
            .help("The number of inputs tried on each regex"))
        .get_matches();

    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = Config{
        seed: matches.value_of("seed")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(rnd::seed_from_system_time),
        iterations: parse_number(matches.value_of("iterations"), 1000),
        depth: parse_number(matches.value_of("depth"), 4),
        charset: matches.value_of("charset").unwrap_or("ab").into(),
        strings: parse_number(matches.value_of("strings"), 50),
    };
    if config.charset.is_empty() {
        eprintln!("error: the charset must not be empty");
        std::process::exit(2);
    }
    info!("Fuzzing with seed {}", config.seed);

    match run(&config) {
        Ok(()) => println!("{} regexes passed (seed {})", config.iterations, rnd::current_seed()),
        Err(err) => {
            eprintln!("Counterexample (seed {}): {}", config.seed, err);
            std::process::exit(1);
        },
    }
}
