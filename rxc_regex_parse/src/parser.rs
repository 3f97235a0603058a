/**
 * A simple parser to parse a string into a regex AST.
 */

use crate::ast::Node;
use crate::error::ParseError;

/*
 * Reference grammar for the parser:
 *
 * regex  ::=
 *          | term '|' regex
 *          | term
 *          ;
 *
 * term   ::= factor* ;                 (empty term is the empty regex)
 *
 * factor ::= base '*'* ;
 *
 * base   ::=
 *          | '(' regex ')'
 *          | '\' ANY_CHAR
 *          | ANY_CHAR
 *          ;
 *
 * A term ends at ')', '|' or the end of input. Concatenation is
 * left-associative, alternation is right-associative.
 */

/// A small helper to ease the Chars interface a bit, also tracking the byte
/// offset for error reporting
#[derive(Clone, Copy)]
struct Chars<'a> {
    source: &'a str,
    offset: usize,
}

impl <'a> Chars<'a> {
    fn new(source: &'a str) -> Self {
        Self{ source, offset: 0 }
    }

    fn next(&self) -> Option<(char, Chars<'a>)> {
        match self.source[self.offset..].chars().next() {
            Some(c) => Some((c, Chars{ source: self.source, offset: self.offset + c.len_utf8() })),
            None => None,
        }
    }
}

/**
 * Actual parsing.
 */

pub fn parse(source: &str) -> Result<Node, ParseError> {
    let (node, it) = parse_regex(Chars::new(source))?;
    match it.next() {
        None => Ok(node),
        // The top-level regex only stops early on a ')' it can't close
        Some(_) => Err(ParseError::UnmatchedParen{ position: it.offset }),
    }
}

type ParseResult<'a, T> = Result<(T, Chars<'a>), ParseError>;

fn parse_regex(it: Chars<'_>) -> ParseResult<'_, Node> {
    let (first, it) = parse_term(it)?;
    if let Some(('|', it)) = it.next() {
        let (second, it) = parse_regex(it)?;
        Ok((Node::alternation(first, second), it))
    }
    else {
        Ok((first, it))
    }
}

fn parse_term(mut it: Chars<'_>) -> ParseResult<'_, Node> {
    let mut term = None;
    while let Some((c, rest)) = it.next() {
        if c == ')' || c == '|' {
            break;
        }
        let (factor, rest) = parse_factor(it, c, rest)?;
        it = rest;
        term = Some(match term {
            Some(prev) => Node::concat(prev, factor),
            None => factor,
        });
    }
    Ok((term.unwrap_or(Node::Empty), it))
}

fn parse_factor<'a>(at: Chars<'a>, c: char, rest: Chars<'a>) -> ParseResult<'a, Node> {
    let (mut node, mut it) = parse_base(at, c, rest)?;
    while let Some(('*', rest)) = it.next() {
        node = Node::star(node);
        it = rest;
    }
    Ok((node, it))
}

/// Parses the base starting with the already read character `c`, which sits
/// at the position of `at`.
fn parse_base<'a>(at: Chars<'a>, c: char, rest: Chars<'a>) -> ParseResult<'a, Node> {
    match c {
        '(' => {
            let (node, it) = parse_regex(rest)?;
            if let Some((')', it)) = it.next() {
                Ok((node, it))
            }
            else {
                Err(ParseError::UnexpectedEnd{ open: at.offset })
            }
        },

        '\\' => match rest.next() {
            Some((escaped, it)) => Ok((Node::Literal(escaped), it)),
            None => Err(ParseError::DanglingEscape{ position: at.offset }),
        },

        c => Ok((Node::Literal(c), rest)),
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
