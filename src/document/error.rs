//! Error types for turning YAML text into node trees.

use std::fmt;

/// Errors that can occur while parsing YAML into `Node`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The scanner rejected the input at a specific position.
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
    /// The stream contained no documents.
    EmptyStream,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax {
                line,
                column,
                message,
            } => write!(
                f,
                "Invalid YAML at line {}, column {}: {}",
                line, column, message
            ),
            ParseError::EmptyStream => write!(f, "YAML stream contains no documents"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<yaml_rust2::scanner::ScanError> for ParseError {
    fn from(err: yaml_rust2::scanner::ScanError) -> Self {
        ParseError::Syntax {
            line: err.marker().line(),
            column: err.marker().col(),
            message: err.info().to_string(),
        }
    }
}
