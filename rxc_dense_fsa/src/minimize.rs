/**
 * DFA minimization by Moore-style partition refinement, and renumbering of
 * the states for presentation.
 */

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use log::{debug, trace};
use crate::automaton::{FiniteAutomaton, Label, State};

/// For each symbol (in alphabet order) the group index the transition leads
/// to. Symbols without a transition are left out.
type Signature = Vec<(char, usize)>;

type Partition = Vec<BTreeSet<State>>;

/// Computes the DFA with the fewest states accepting the same language as
/// `dfa`, renumbered so that the start state is 0.
pub fn minimize(dfa: &FiniteAutomaton) -> FiniteAutomaton {
    let alphabet: Vec<char> = dfa.alphabet().into_iter().collect();
    let mut groups = initial_partition(dfa);
    let mut group_of = group_index(&groups);
    trace_partition("initial", &groups);

    // Signatures depend on the indices of all groups, so after every split we
    // have to start over from the first one
    let mut i = 0;
    while i < groups.len() {
        if groups[i].len() > 1 {
            let mut split: BTreeMap<Signature, BTreeSet<State>> = BTreeMap::new();
            for state in &groups[i] {
                split.entry(signature(dfa, &alphabet, &group_of, state))
                    .or_insert_with(BTreeSet::new)
                    .insert(*state);
            }

            if split.len() > 1 {
                trace!("Split group {} into {} groups", i, split.len());
                let subgroups: Vec<_> = split.into_iter().map(|(_, states)| states).collect();
                groups.splice(i..=i, subgroups);
                group_of = group_index(&groups);
                trace_partition("refined", &groups);
                i = 0;
                continue;
            }
        }
        i += 1;
    }

    let mut result = FiniteAutomaton::new(State::new(group_of[&dfa.start]));
    for (index, group) in groups.iter().enumerate() {
        let state = State::new(index);
        // Members of a group agree on their signature, any of them will do
        if let Some(representative) = group.iter().next() {
            for (c, target) in signature(dfa, &alphabet, &group_of, representative) {
                result.add_transition(state, Label::Symbol(c), State::new(target));
            }
        }
        if group.iter().any(|s| dfa.is_accepting(s)) {
            debug_assert!(group.iter().all(|s| dfa.is_accepting(s)), "mixed group {:?}", group);
            result.add_accepting(state);
        }
    }

    debug!("Minimization: {} DFA states -> {} states", dfa.states().len(), groups.len());
    renumber(&result)
}

/// Accepting and non-accepting states, without empty groups.
fn initial_partition(dfa: &FiniteAutomaton) -> Partition {
    let (accepting, rest): (BTreeSet<State>, BTreeSet<State>) = dfa.states()
        .into_iter()
        .partition(|s| dfa.is_accepting(s));

    vec![accepting, rest].into_iter()
        .filter(|group| !group.is_empty())
        .collect()
}

fn group_index(groups: &Partition) -> HashMap<State, usize> {
    let mut result = HashMap::new();
    for (index, group) in groups.iter().enumerate() {
        for state in group {
            result.insert(*state, index);
        }
    }
    result
}

fn signature(dfa: &FiniteAutomaton, alphabet: &[char],
    group_of: &HashMap<State, usize>, state: &State) -> Signature {

    alphabet.iter()
        .filter_map(|c| {
            dfa.move_on(state, Label::Symbol(*c)).into_iter().next()
                .map(|to| (*c, group_of[&to]))
        })
        .collect()
}

fn trace_partition(context: &str, groups: &Partition) {
    trace!("Partition {}:", context);
    for (i, group) in groups.iter().enumerate() {
        trace!("Group {}: {:?}", i, group);
    }
}

/**
 * Renumbering.
 */

/// Relabels the states in breadth-first order from the start state, visiting
/// edges in label order. The start state becomes 0 and the ids are dense.
/// States unreachable from the start are dropped.
pub fn renumber(fa: &FiniteAutomaton) -> FiniteAutomaton {
    let mut mapping: HashMap<State, State> = HashMap::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    mapping.insert(fa.start, State::new(0));
    queue.push_back(fa.start);

    while let Some(old) = queue.pop_front() {
        order.push(old);
        for (_, to) in sorted_edges(fa, &old) {
            if !mapping.contains_key(&to) {
                mapping.insert(to, State::new(mapping.len()));
                queue.push_back(to);
            }
        }
    }

    let mut result = FiniteAutomaton::new(State::new(0));
    for old in &order {
        let from = mapping[old];
        for (on, to) in sorted_edges(fa, old) {
            result.add_transition(from, on, mapping[&to]);
        }
        if fa.is_accepting(old) {
            result.add_accepting(from);
        }
    }
    result
}

fn sorted_edges(fa: &FiniteAutomaton, state: &State) -> Vec<(Label, State)> {
    let mut edges = fa.transitions_from(state).to_vec();
    edges.sort();
    edges
}

#[cfg(test)]
mod minimize_tests {
    use super::*;

    fn s(id: usize) -> State {
        State::new(id)
    }

    fn sym(c: char) -> Label {
        Label::Symbol(c)
    }

    fn set(ids: &[usize]) -> BTreeSet<State> {
        ids.iter().map(|i| s(*i)).collect()
    }

    #[test]
    fn merges_equivalent_states() {
        // 1 and 2 both only lead to the accepting 3 on 'a'
        let mut df = FiniteAutomaton::new(s(0));
        df.add_transition(s(0), sym('a'), s(1));
        df.add_transition(s(0), sym('b'), s(2));
        df.add_transition(s(1), sym('a'), s(3));
        df.add_transition(s(2), sym('a'), s(3));
        df.add_accepting(s(3));

        let min = minimize(&df);
        assert_eq!(min.transitions().collect::<Vec<_>>(), vec![
            (s(0), sym('a'), s(1)),
            (s(0), sym('b'), s(1)),
            (s(1), sym('a'), s(2)),
        ]);
        assert_eq!(min.start, s(0));
        assert_eq!(min.accepting(), &set(&[2]));
    }

    #[test]
    fn chain_needs_several_rounds() {
        let mut df = FiniteAutomaton::new(s(0));
        df.add_transition(s(0), sym('a'), s(1));
        df.add_transition(s(1), sym('a'), s(2));
        df.add_transition(s(2), sym('a'), s(3));
        df.add_accepting(s(3));

        let min = minimize(&df);
        assert_eq!(min.states().len(), 4);
        assert!(min.accepts("aaa"));
        assert!(!min.accepts("aa"));
    }

    #[test]
    fn missing_transition_distinguishes() {
        // 1 accepts "b", 2 accepts nothing further: 1 and 2 differ
        let mut df = FiniteAutomaton::new(s(0));
        df.add_transition(s(0), sym('a'), s(1));
        df.add_transition(s(1), sym('b'), s(2));
        df.add_accepting(s(1));
        df.add_accepting(s(2));

        let min = minimize(&df);
        assert_eq!(min.states().len(), 3);
        assert_eq!(min.accepting(), &set(&[1, 2]));
    }

    #[test]
    fn collapses_accepting_loop() {
        // Every state accepts and loops: a single state is enough
        let mut df = FiniteAutomaton::new(s(0));
        df.add_transition(s(0), sym('a'), s(1));
        df.add_transition(s(1), sym('a'), s(2));
        df.add_transition(s(2), sym('a'), s(0));
        df.add_accepting(s(0));
        df.add_accepting(s(1));
        df.add_accepting(s(2));

        let min = minimize(&df);
        assert_eq!(min.transitions().collect::<Vec<_>>(), vec![(s(0), sym('a'), s(0))]);
        assert_eq!(min.accepting(), &set(&[0]));
    }

    #[test]
    fn no_accepting_states() {
        let mut df = FiniteAutomaton::new(s(0));
        df.add_transition(s(0), sym('a'), s(1));
        df.add_transition(s(1), sym('a'), s(0));

        let min = minimize(&df);
        assert_eq!(min.states(), set(&[0]));
        assert!(min.accepting().is_empty());
    }

    #[test]
    fn renumber_is_breadth_first() {
        let mut fa = FiniteAutomaton::new(s(7));
        fa.add_transition(s(7), sym('b'), s(3));
        fa.add_transition(s(7), sym('a'), s(5));
        fa.add_transition(s(5), sym('a'), s(9));
        fa.add_transition(s(3), sym('a'), s(7));
        fa.add_accepting(s(9));

        let re = renumber(&fa);
        assert_eq!(re.start, s(0));
        assert_eq!(re.states(), set(&[0, 1, 2, 3]));
        assert_eq!(re.transitions().collect::<Vec<_>>(), vec![
            (s(0), sym('a'), s(1)),
            (s(0), sym('b'), s(2)),
            (s(1), sym('a'), s(3)),
            (s(2), sym('a'), s(0)),
        ]);
        assert_eq!(re.accepting(), &set(&[3]));
    }

    #[test]
    fn renumber_keeps_language() {
        let mut fa = FiniteAutomaton::new(s(4));
        fa.add_transition(s(4), sym('x'), s(2));
        fa.add_transition(s(2), sym('y'), s(4));
        fa.add_accepting(s(2));

        let re = renumber(&fa);
        for input in &["", "x", "xy", "xyx", "y", "xx"] {
            assert_eq!(fa.accepts(input), re.accepts(input), "{:?}", input);
        }
    }
}
