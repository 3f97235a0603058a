/**
 * Dense finite automata and the regex compilation pipeline built on them:
 * string -> AST -> NFA -> DFA -> minimal DFA.
 */

extern crate log;
extern crate rxc_regex_parse;

mod automaton;
pub mod nfa;
pub mod dfa;
pub mod minimize;

pub use automaton::{FiniteAutomaton, Label, State};
pub use rxc_regex_parse::{Node, ParseError};

/// The Thompson NFA of a regex.
pub fn compile_nfa(regex: &str) -> Result<FiniteAutomaton, ParseError> {
    let ast = rxc_regex_parse::parse(regex)?;
    Ok(nfa::thompson_construct(&ast))
}

/// The raw subset-construction DFA of a regex, before minimization.
pub fn compile_dfa(regex: &str) -> Result<FiniteAutomaton, ParseError> {
    let nf = compile_nfa(regex)?;
    Ok(dfa::determinize(&nf))
}

/// Compiles a regex into its minimal DFA, with the start state being 0 and the
/// other states numbered in breadth-first order.
pub fn compile(regex: &str) -> Result<FiniteAutomaton, ParseError> {
    let df = compile_dfa(regex)?;
    Ok(minimize::minimize(&df))
}

#[test]
fn compile_a_star_b() {
    let df = compile(r"a*b").unwrap();
    assert_eq!(df.to_string(), "Q: {0, 1}\nΣ: {a, b}\nΔ:\n    0: [(a, 0), (b, 1)]\nq0: 0\nF: {1}");
}
