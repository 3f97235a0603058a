/**
 * Generic dense finite automaton representation, shared by the NFA, the raw
 * DFA and the minimized DFA.
 */

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(usize);

impl State {
    pub fn new(id: usize) -> Self {
        State(id)
    }

    pub fn id(&self) -> usize {
        self.0
    }
}

/// What a transition consumes. Epsilon only ever appears in NFAs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    Epsilon,
    Symbol(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiniteAutomaton {
    pub start: State,
    accepting: BTreeSet<State>,
    transitions: BTreeMap<State, Vec<(Label, State)>>,
}

impl FiniteAutomaton {
    pub fn new(start: State) -> Self {
        Self{
            start,
            accepting: BTreeSet::new(),
            transitions: BTreeMap::new(),
        }
    }

    /// Adds the edge `from --on--> to`, unless it's already there.
    pub fn add_transition(&mut self, from: State, on: Label, to: State) {
        let edges = self.transitions.entry(from).or_insert_with(Vec::new);
        if !edges.contains(&(on, to)) {
            edges.push((on, to));
        }
    }

    pub fn add_epsilon_transition(&mut self, from: State, to: State) {
        self.add_transition(from, Label::Epsilon, to);
    }

    pub fn add_accepting(&mut self, state: State) {
        self.accepting.insert(state);
    }

    pub fn is_accepting(&self, state: &State) -> bool {
        self.accepting.contains(state)
    }

    pub fn accepting(&self) -> &BTreeSet<State> {
        &self.accepting
    }

    /// The outgoing edges of a state in insertion order, empty if it has none.
    pub fn transitions_from(&self, from: &State) -> &[(Label, State)] {
        match self.transitions.get(from) {
            Some(edges) => edges,
            None => &[],
        }
    }

    /// Every edge as `(from, on, to)`, ordered by source state.
    pub fn transitions(&self) -> impl Iterator<Item = (State, Label, State)> + '_ {
        self.transitions.iter()
            .flat_map(|(from, edges)| edges.iter().map(move |(on, to)| (*from, *on, *to)))
    }

    /// All states, derived from the transition relation and the start state.
    pub fn states(&self) -> BTreeSet<State> {
        let mut result = BTreeSet::new();
        result.insert(self.start);
        for (from, edges) in &self.transitions {
            result.insert(*from);
            result.extend(edges.iter().map(|(_, to)| *to));
        }
        result
    }

    /// Every symbol that appears on some edge, epsilon excluded.
    pub fn alphabet(&self) -> BTreeSet<char> {
        self.transitions.values()
            .flat_map(|edges| edges.iter())
            .filter_map(|(on, _)| match on {
                Label::Symbol(c) => Some(*c),
                Label::Epsilon => None,
            })
            .collect()
    }

    /// The states reachable from `state` with a single `on` edge. An empty set
    /// simply means there is no such transition.
    pub fn move_on(&self, state: &State, on: Label) -> BTreeSet<State> {
        self.transitions_from(state).iter()
            .filter(|(l, _)| *l == on)
            .map(|(_, to)| *to)
            .collect()
    }

    /// No epsilon edges and at most one edge per state and symbol.
    pub fn is_deterministic(&self) -> bool {
        self.transitions.values().all(|edges| {
            let mut seen = BTreeSet::new();
            edges.iter().all(|(on, _)| *on != Label::Epsilon && seen.insert(*on))
        })
    }

    /// Runs the automaton on `input`. Works for both NFAs and DFAs, as a DFA
    /// is just an NFA with singleton closures.
    pub fn accepts(&self, input: &str) -> bool {
        let mut current = self.epsilon_closure(&std::iter::once(self.start).collect());
        for c in input.chars() {
            let moved: BTreeSet<State> = current.iter()
                .flat_map(|s| self.move_on(s, Label::Symbol(c)))
                .collect();
            if moved.is_empty() {
                return false;
            }
            current = self.epsilon_closure(&moved);
        }
        current.iter().any(|s| self.is_accepting(s))
    }
}

/**
 * Diagnostic rendering.
 */

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Epsilon => write!(f, "ε"),
            Label::Symbol(c) => write!(f, "{}", c),
        }
    }
}

fn write_set<T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
    where I : IntoIterator<Item = T>, T : fmt::Display {

    write!(f, "{{")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "}}")
}

impl fmt::Display for FiniteAutomaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q: ")?;
        write_set(f, self.states())?;
        write!(f, "\nΣ: ")?;
        write_set(f, self.alphabet())?;
        writeln!(f, "\nΔ:")?;
        for (from, edges) in &self.transitions {
            write!(f, "    {}: [", from)?;
            for (i, (on, to)) in edges.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "({}, {})", on, to)?;
            }
            writeln!(f, "]")?;
        }
        writeln!(f, "q0: {}", self.start)?;
        write!(f, "F: ")?;
        write_set(f, &self.accepting)
    }
}
