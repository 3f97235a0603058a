/**
 * String generation strategies.
 */

use std::ops::Range;
use rxc_regex_parse::Node;
use crate::rnd::*;

pub trait StringGenStrategy {
    fn generate(&self) -> String;
}

/**
 * Random string from a charset.
 */

pub struct RandomStringGenerator {
    len: Range<usize>,
    charset: Vec<char>,
}

impl RandomStringGenerator {
    pub fn with_len_and_charset(len: Range<usize>, charset: &str) -> Self {
        Self{ len, charset: charset.chars().collect() }
    }
}

impl StringGenStrategy for RandomStringGenerator {
    fn generate(&self) -> String {
        rand_string(&self.len, &self.charset)
    }
}

/**
 * Random string from the language of a regex, so that accepting paths get
 * exercised too.
 */

pub struct MatchingStringGenerator<'a> {
    regex: &'a Node,
    max_repeat: usize,
}

impl <'a> MatchingStringGenerator<'a> {
    pub fn with_regex(regex: &'a Node, max_repeat: usize) -> Self {
        Self{ regex, max_repeat }
    }

    fn generate_into(&self, node: &Node, out: &mut String) {
        match node {
            Node::Empty => (),
            Node::Literal(c) => out.push(*c),
            Node::Concat{ first, second } => {
                self.generate_into(first, out);
                self.generate_into(second, out);
            },
            Node::Alternation{ first, second } => {
                if rand_range(&(0..2)) == 0 {
                    self.generate_into(first, out);
                }
                else {
                    self.generate_into(second, out);
                }
            },
            Node::Star{ subnode } => {
                for _ in 0..rand_range(&(0..(self.max_repeat + 1))) {
                    self.generate_into(subnode, out);
                }
            },
        }
    }
}

impl <'a> StringGenStrategy for MatchingStringGenerator<'a> {
    fn generate(&self) -> String {
        let mut out = String::new();
        self.generate_into(self.regex, &mut out);
        out
    }
}
