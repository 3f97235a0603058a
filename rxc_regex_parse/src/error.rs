use thiserror::Error;

/// Syntax errors of the regex parser. Offsets are byte offsets into the
/// source string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected end of input, expected ')' to close the '(' at offset {open}")]
    UnexpectedEnd { open: usize },

    #[error("unmatched ')' at offset {position}")]
    UnmatchedParen { position: usize },

    #[error("dangling escape '\\' at offset {position}")]
    DanglingEscape { position: usize },
}

impl ParseError {
    /// The offset where the error was detected.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedEnd{ open } => *open,
            ParseError::UnmatchedParen{ position } => *position,
            ParseError::DanglingEscape{ position } => *position,
        }
    }
}
