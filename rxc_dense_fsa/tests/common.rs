#![allow(dead_code)]

use std::collections::HashMap;
use rxc_dense_fsa::{FiniteAutomaton, Label, Node, State};

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn assert_iter_eq<I1, I2>(mut i1: I1, mut i2: I2)
    where I1 : Iterator, I2 : Iterator,
    <I1 as Iterator>::Item : PartialEq<<I2 as Iterator>::Item> + std::fmt::Debug,
    <I2 as Iterator>::Item : std::fmt::Debug {
    loop {
        match (i1.next(), i2.next()) {
            (Some(a), Some(b)) => assert_eq!(a, b),
            (None, None) => return,
            (Some(a), None) => panic!("RHS terminates early ({:?})!", a),
            (None, Some(b)) => panic!("LHS terminates early ({:?})!", b),
        }
    }
}

/// Every string over `alphabet` with at most `max_len` characters, shortest
/// first.
pub fn strings_up_to(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut result = vec![String::new()];
    let mut last = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for prefix in &last {
            for c in alphabet {
                let mut s = prefix.clone();
                s.push(*c);
                next.push(s);
            }
        }
        result.extend(next.iter().cloned());
        last = next;
    }
    result
}

/// Every AST over `alphabet` with exactly `size` nodes.
pub fn regexes_of_size(alphabet: &[char], size: usize) -> Vec<Node> {
    let mut result = Vec::new();
    if size == 0 {
        return result;
    }
    if size == 1 {
        result.push(Node::Empty);
        result.extend(alphabet.iter().map(|c| Node::Literal(*c)));
        return result;
    }
    for sub in regexes_of_size(alphabet, size - 1) {
        result.push(Node::star(sub));
    }
    for left_size in 1..(size - 1) {
        let lefts = regexes_of_size(alphabet, left_size);
        let rights = regexes_of_size(alphabet, size - 1 - left_size);
        for l in &lefts {
            for r in &rights {
                result.push(Node::concat(l.clone(), r.clone()));
                result.push(Node::alternation(l.clone(), r.clone()));
            }
        }
    }
    result
}

/// Every AST over `alphabet` with at most `max_size` nodes.
pub fn regexes_up_to(alphabet: &[char], max_size: usize) -> Vec<Node> {
    (1..=max_size).flat_map(|n| regexes_of_size(alphabet, n)).collect()
}

/// Number of Myhill-Nerode classes of a partial DFA, by the table-filling
/// algorithm. A missing transition counts as a move to a dead state, so this
/// assumes every state can still reach an accepting one.
pub fn reference_min_state_count(dfa: &FiniteAutomaton) -> usize {
    let states: Vec<State> = dfa.states().into_iter().collect();
    let alphabet: Vec<char> = dfa.alphabet().into_iter().collect();
    let index: HashMap<State, usize> = states.iter().enumerate().map(|(i, s)| (*s, i)).collect();
    let n = states.len();

    let target: Vec<Vec<Option<usize>>> = states.iter()
        .map(|s| alphabet.iter()
            .map(|c| dfa.move_on(s, Label::Symbol(*c)).iter().next().map(|t| index[t]))
            .collect())
        .collect();

    let mut distinct = vec![vec![false; n]; n];
    for i in 0..n {
        for j in 0..n {
            distinct[i][j] = dfa.is_accepting(&states[i]) != dfa.is_accepting(&states[j]);
        }
    }

    let mut changed = true;
    while changed {
        changed = false;
        for i in 0..n {
            for j in (i + 1)..n {
                if distinct[i][j] {
                    continue;
                }
                let differs = (0..alphabet.len()).any(|c| match (target[i][c], target[j][c]) {
                    (Some(p), Some(q)) => distinct[p][q],
                    (None, None) => false,
                    _ => true,
                });
                if differs {
                    distinct[i][j] = true;
                    distinct[j][i] = true;
                    changed = true;
                }
            }
        }
    }

    (0..n).filter(|i| (0..*i).all(|j| distinct[j][*i])).count()
}

/// States are exactly 0..n and the start state is 0.
pub fn assert_dense_numbering(fa: &FiniteAutomaton) {
    assert_eq!(fa.start, State::new(0));
    assert_iter_eq(
        (0..fa.states().len()).map(State::new),
        fa.states().into_iter());
}
