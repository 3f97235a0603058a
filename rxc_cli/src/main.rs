/**
 * Command-line driver printing the stages of the regex compilation pipeline.
 */

extern crate rxc_dense_fsa;
extern crate rxc_regex_parse;

use std::fmt::Write;
use clap::{App, Arg};
use log::{info, LevelFilter};
use rxc_dense_fsa::{dfa, minimize, nfa, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Ast,
    Nfa,
    Dfa,
    Min,
    All,
}

impl Stage {
    fn from_name(name: &str) -> Option<Stage> {
        match name {
            "ast" => Some(Stage::Ast),
            "nfa" => Some(Stage::Nfa),
            "dfa" => Some(Stage::Dfa),
            "min" => Some(Stage::Min),
            "all" => Some(Stage::All),
            _ => None,
        }
    }

    fn includes(self, other: Stage) -> bool {
        self == Stage::All || self == other
    }
}

/// Runs the pipeline on `regex`, rendering the requested stages and the
/// verdict of the minimal DFA on every test string.
fn render(regex: &str, stage: Stage, tests: &[&str]) -> Result<String, ParseError> {
    let mut out = String::new();

    let ast = rxc_regex_parse::parse(regex)?;
    let nf = nfa::thompson_construct(&ast);
    let df = dfa::determinize(&nf);
    let min = minimize::minimize(&df);
    info!("{} NFA states, {} DFA states, {} minimal DFA states",
        nf.states().len(), df.states().len(), min.states().len());

    // Writing into a String never fails
    if stage.includes(Stage::Ast) {
        let _ = writeln!(out, "AST:\n{}\n", ast);
    }
    if stage.includes(Stage::Nfa) {
        let _ = writeln!(out, "NFA:\n{}\n", nf);
    }
    if stage.includes(Stage::Dfa) {
        let _ = writeln!(out, "DFA:\n{}\n", df);
    }
    if stage.includes(Stage::Min) {
        let _ = writeln!(out, "Minimal DFA:\n{}\n", min);
    }
    for test in tests {
        let verdict = if min.accepts(test) { "accept" } else { "reject" };
        let _ = writeln!(out, "{:?}: {}", test, verdict);
    }

    Ok(out)
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, wins over the flags
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let matches = App::new("rxc")
        .version("0.1")
        .about("Compiles a regular expression into a minimal DFA")
        .arg(Arg::with_name("regex")
            .help("The regex to compile (literals, '\\', '|', '*' and parentheses)")
            .required(true)
            .index(1))
        .arg(Arg::with_name("stage")
            .long("stage")
            .short("s")
            .takes_value(true)
            .possible_values(&["ast", "nfa", "dfa", "min", "all"])
            .default_value("min")
            .help("The pipeline stage to print"))
        .arg(Arg::with_name("test")
            .long("test")
            .short("t")
            .takes_value(true)
            .multiple(true)
            .number_of_values(1)
            .help("A string to run through the minimal DFA, can be repeated"))
        .arg(Arg::with_name("verbose")
            .short("v")
            .multiple(true)
            .help("Raises the log level, can be repeated"))
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let regex = matches.value_of("regex").unwrap_or_default();
    let stage = matches.value_of("stage").and_then(Stage::from_name).unwrap_or(Stage::Min);
    let tests: Vec<&str> = matches.values_of("test").map(|v| v.collect()).unwrap_or_default();

    match render(regex, stage, &tests) {
        Ok(out) => print!("{}", out),
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        },
    }
}
