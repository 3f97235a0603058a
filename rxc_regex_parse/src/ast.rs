/**
 * All of the regex syntax-tree (AST) data-structures.
 */

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Matches only the empty string.
    Empty,

    Literal(char),

    Concat{
        first: Box<Node>,
        second: Box<Node>,
    },

    Alternation{
        first: Box<Node>,
        second: Box<Node>,
    },

    Star{
        subnode: Box<Node>,
    },
}

impl Node {
    pub fn concat(first: Node, second: Node) -> Node {
        Node::Concat{ first: Box::new(first), second: Box::new(second) }
    }

    pub fn alternation(first: Node, second: Node) -> Node {
        Node::Alternation{ first: Box::new(first), second: Box::new(second) }
    }

    pub fn star(subnode: Node) -> Node {
        Node::Star{ subnode: Box::new(subnode) }
    }

    /// The number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Node::Empty | Node::Literal(_) => 1,
            Node::Concat{ first, second } | Node::Alternation{ first, second } =>
                1 + first.size() + second.size(),
            Node::Star{ subnode } => 1 + subnode.size(),
        }
    }
}

/// Prefix notation, mostly for debugging: `(|, 'a', (*, 'b'))`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Empty => write!(f, "''"),
            Node::Literal(c) => write!(f, "{:?}", c),
            Node::Concat{ first, second } => write!(f, "(&, {}, {})", first, second),
            Node::Alternation{ first, second } => write!(f, "(|, {}, {})", first, second),
            Node::Star{ subnode } => write!(f, "(*, {})", subnode),
        }
    }
}
