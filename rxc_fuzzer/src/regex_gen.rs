/**
 * Random regex generation, and printing regexes back to parseable source.
 */

use rxc_regex_parse::Node;
use crate::rnd::*;

pub struct RandomRegexGenerator {
    depth: usize,
    charset: Vec<char>,
}

impl RandomRegexGenerator {
    pub fn with_depth_and_charset(depth: usize, charset: &str) -> Self {
        Self{ depth, charset: charset.chars().collect() }
    }

    pub fn generate(&self) -> Node {
        self.generate_at(self.depth)
    }

    fn generate_at(&self, depth: usize) -> Node {
        // Leaves get more likely as we go deeper
        if depth == 0 || rand_range(&(0..(depth + 1))) == 0 {
            return self.generate_leaf();
        }
        match rand_range(&(0..3)) {
            0 => Node::concat(self.generate_at(depth - 1), self.generate_at(depth - 1)),
            1 => Node::alternation(self.generate_at(depth - 1), self.generate_at(depth - 1)),
            _ => Node::star(self.generate_at(depth - 1)),
        }
    }

    fn generate_leaf(&self) -> Node {
        // Mostly literals, the empty regex now and then
        if self.charset.is_empty() || rand_range(&(0..8)) == 0 {
            Node::Empty
        }
        else {
            Node::Literal(*sample(&self.charset))
        }
    }
}

/// Prints `node` as a regex that parses back to exactly `node`. Every
/// composite is parenthesized so the grouping survives.
pub fn to_source(node: &Node) -> String {
    match node {
        Node::Empty => "()".into(),
        Node::Literal(c) => {
            if "()|*\\".contains(*c) {
                format!("\\{}", c)
            }
            else {
                c.to_string()
            }
        },
        Node::Concat{ first, second } => format!("({}{})", to_source(first), to_source(second)),
        Node::Alternation{ first, second } => format!("({}|{})", to_source(first), to_source(second)),
        Node::Star{ subnode } => format!("{}*", to_source(subnode)),
    }
}
