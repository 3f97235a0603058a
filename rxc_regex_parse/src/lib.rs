/**
 * Regex syntax: the AST, the parser that builds it and a slow reference
 * matcher that interprets it directly.
 */

extern crate thiserror;

mod ast;
mod error;
mod parser;
pub mod backtrack;

pub use ast::Node;
pub use error::ParseError;
pub use parser::parse;
