/**
 * A backtracking matcher that interprets the AST directly.
 *
 * It is exponential in the worst case and only meant as a reference to check
 * compiled automata against.
 */

use crate::ast::Node;

/// Returns true if the whole `input` is in the language of `node`.
pub fn matches(node: &Node, input: &str) -> bool {
    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();
    match_node(node, &chars, 0, &mut |end| end == len)
}

/// Tries to match `node` at `pos`, calling the continuation `k` with every
/// possible end position until one of them succeeds.
fn match_node(node: &Node, input: &[char], pos: usize, k: &mut dyn FnMut(usize) -> bool) -> bool {
    match node {
        Node::Empty => k(pos),

        Node::Literal(c) => pos < input.len() && input[pos] == *c && k(pos + 1),

        Node::Concat{ first, second } =>
            match_node(first, input, pos, &mut |mid| match_node(second, input, mid, &mut *k)),

        Node::Alternation{ first, second } =>
            match_node(first, input, pos, &mut *k) || match_node(second, input, pos, &mut *k),

        Node::Star{ subnode } => match_star(subnode, input, pos, k),
    }
}

fn match_star(subnode: &Node, input: &[char], pos: usize, k: &mut dyn FnMut(usize) -> bool) -> bool {
    if k(pos) {
        return true;
    }
    // Every further iteration has to consume something, or we would loop forever
    match_node(subnode, input, pos, &mut |next| next > pos && match_star(subnode, input, next, &mut *k))
}

#[cfg(test)]
mod backtrack_tests {
    use super::*;
    use crate::parse;

    fn check(rx: &str, accepted: &[&str], rejected: &[&str]) {
        let node = parse(rx).unwrap();
        for s in accepted {
            assert!(matches(&node, s), "{:?} should match {:?}", rx, s);
        }
        for s in rejected {
            assert!(!matches(&node, s), "{:?} should not match {:?}", rx, s);
        }
    }

    #[test]
    fn literal() {
        check("a", &["a"], &["", "b", "aa"]);
    }

    #[test]
    fn empty() {
        check("", &[""], &["a"]);
        check("()", &[""], &["a"]);
    }

    #[test]
    fn star_then_literal() {
        check("a*b", &["b", "ab", "aab", "aaab"], &["", "a", "ba", "abb"]);
    }

    #[test]
    fn star_of_alternation() {
        check("(a|b)*", &["", "a", "b", "abba", "bbbb"], &["c", "abc"]);
    }

    #[test]
    fn star_of_empty_terminates() {
        check("()*", &[""], &["a"]);
        check("(a*)*", &["", "a", "aaa"], &["b"]);
        check("(|a)*b", &["b", "ab", "aab"], &["", "a"]);
    }

    #[test]
    fn concat_backtracks_into_star() {
        check("a*a", &["a", "aa", "aaa"], &["", "b"]);
        check("(a|ab)(c|bcd)", &["ac", "abcd", "abc"], &["ab", "abcdd"]);
    }
}
