/**
 * Determinization of an NFA by epsilon-closure and subset construction.
 */

use std::collections::{BTreeSet, HashMap, VecDeque};
use log::{debug, trace};
use crate::automaton::{FiniteAutomaton, Label, State};

impl FiniteAutomaton {
    /// Every state reachable from `states` using only epsilon transitions,
    /// including `states` themselves.
    pub fn epsilon_closure(&self, states: &BTreeSet<State>) -> BTreeSet<State> {
        let mut result = states.clone();
        let mut stk: Vec<State> = states.iter().cloned().collect();

        while let Some(top) = stk.pop() {
            for next in self.move_on(&top, Label::Epsilon) {
                if result.insert(next) {
                    stk.push(next);
                }
            }
        }

        result
    }
}

/// Builds a DFA with the same language as `nfa`. DFA states are numbered in
/// discovery order, starting with 0 for the closure of the NFA start state.
pub fn determinize(nfa: &FiniteAutomaton) -> FiniteAutomaton {
    let alphabet = nfa.alphabet();
    let mut dfa = FiniteAutomaton::new(State::new(0));
    // Sorted NFA state-sets identify the DFA states
    let mut nfa_set_to_dfa_state: HashMap<Vec<State>, State> = HashMap::new();
    let mut queue = VecDeque::new();

    {
        let start_states = nfa.epsilon_closure(&std::iter::once(nfa.start).collect());
        add_dfa_state(nfa, &mut dfa, &mut nfa_set_to_dfa_state, &start_states);
        queue.push_back((start_states, dfa.start));
    }

    while let Some((nfa_states, dfa_state)) = queue.pop_front() {
        for c in &alphabet {
            let moved: BTreeSet<State> = nfa_states.iter()
                .flat_map(|s| nfa.move_on(s, Label::Symbol(*c)))
                .collect();
            if moved.is_empty() {
                continue;
            }

            let to = nfa.epsilon_closure(&moved);
            let key: Vec<State> = to.iter().cloned().collect();
            let dfa_to = match nfa_set_to_dfa_state.get(&key) {
                Some(existing) => *existing,
                None => {
                    let fresh = add_dfa_state(nfa, &mut dfa, &mut nfa_set_to_dfa_state, &to);
                    queue.push_back((to, fresh));
                    fresh
                },
            };
            dfa.add_transition(dfa_state, Label::Symbol(*c), dfa_to);
        }
    }

    debug!("Subset construction: {} NFA states -> {} DFA states over {} symbols",
        nfa.states().len(), nfa_set_to_dfa_state.len(), alphabet.len());
    debug_assert!(dfa.is_deterministic());
    dfa
}

/// Registers a newly discovered NFA state-set as the next DFA state.
fn add_dfa_state(nfa: &FiniteAutomaton, dfa: &mut FiniteAutomaton,
    nfa_set_to_dfa_state: &mut HashMap<Vec<State>, State>, nfa_states: &BTreeSet<State>) -> State {

    let state = State::new(nfa_set_to_dfa_state.len());
    if nfa_states.iter().any(|s| nfa.is_accepting(s)) {
        dfa.add_accepting(state);
    }
    trace!("Add DFA state {}: {:?}", state, nfa_states);
    nfa_set_to_dfa_state.insert(nfa_states.iter().cloned().collect(), state);
    state
}
