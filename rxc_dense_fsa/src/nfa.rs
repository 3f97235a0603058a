/**
 * Thompson's-construction, turning a regex AST into an NFA.
 */

use log::debug;
use rxc_regex_parse as regex;
use crate::automaton::{FiniteAutomaton, Label, State};

/// Construction context: the automaton being built and the next free state.
struct Builder {
    nfa: FiniteAutomaton,
    state_counter: usize,
}

impl Builder {
    fn new() -> Self {
        Self{
            nfa: FiniteAutomaton::new(State::new(0)),
            state_counter: 0,
        }
    }

    fn unique_state(&mut self) -> State {
        let state = State::new(self.state_counter);
        self.state_counter += 1;
        state
    }
}

/// Builds an NFA for the given regex with a single accepting state.
pub fn thompson_construct(rx: &regex::Node) -> FiniteAutomaton {
    let mut builder = Builder::new();

    let start = builder.unique_state();
    let end = builder.unique_state();
    builder.nfa.start = start;
    builder.nfa.add_accepting(end);

    construct(&mut builder, rx, start, end);

    debug!("Thompson NFA: {} states for {}", builder.state_counter, rx);
    builder.nfa
}

/// Wires the automaton of `rx` between the existing `start` and `end` states.
fn construct(b: &mut Builder, rx: &regex::Node, start: State, end: State) {
    match rx {
        regex::Node::Empty =>
            b.nfa.add_epsilon_transition(start, end),

        regex::Node::Literal(ch) =>
            b.nfa.add_transition(start, Label::Symbol(*ch), end),

        regex::Node::Concat{ first, second } =>
            construct_concat(b, first, second, start, end),

        regex::Node::Alternation{ first, second } =>
            construct_alternation(b, first, second, start, end),

        regex::Node::Star{ subnode } =>
            construct_star(b, subnode, start, end),
    }
}

fn construct_concat(b: &mut Builder,
    first: &regex::Node, second: &regex::Node, start: State, end: State) {

    let junction = b.unique_state();
    construct(b, first, start, junction);
    construct(b, second, junction, end);
}

fn construct_alternation(b: &mut Builder,
    first: &regex::Node, second: &regex::Node, start: State, end: State) {

    let first_start = b.unique_state();
    let second_start = b.unique_state();

    b.nfa.add_epsilon_transition(start, first_start);
    b.nfa.add_epsilon_transition(start, second_start);

    construct(b, first, first_start, end);
    construct(b, second, second_start, end);
}

fn construct_star(b: &mut Builder, subnode: &regex::Node, start: State, end: State) {
    let body = b.unique_state();

    b.nfa.add_epsilon_transition(start, body);
    b.nfa.add_epsilon_transition(start, end);

    // The body finishes where it started, so it can go around again
    construct(b, subnode, body, start);
}
