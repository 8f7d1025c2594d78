//! Decoder errors

use std::fmt;
use thiserror::Error;

/// Token class the decoder expected at the failing position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Mode,
    Submode,
    Argument,
    Label,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Mode => "mode",
            Category::Submode => "submode",
            Category::Argument => "argument",
            Category::Label => "label",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Syntax error at line {line}, column {column}: expected {expected} token but got '{token}'")]
    UnexpectedToken {
        line: usize,
        column: usize,
        token: String,
        expected: Category,
        source_line: String,
    },

    #[error("Syntax error at line {line}: expected {expected} token but reached end of line")]
    MissingToken {
        line: usize,
        expected: Category,
        source_line: String,
    },
}

impl SyntaxError {
    /// 1-based line number
    pub fn line(&self) -> usize {
        match self {
            SyntaxError::UnexpectedToken { line, .. } | SyntaxError::MissingToken { line, .. } => *line,
        }
    }

    pub fn expected(&self) -> Category {
        match self {
            SyntaxError::UnexpectedToken { expected, .. }
            | SyntaxError::MissingToken { expected, .. } => *expected,
        }
    }

    /// Offending token, if the line had one at the failing position
    pub fn token(&self) -> Option<&str> {
        match self {
            SyntaxError::UnexpectedToken { token, .. } => Some(token),
            SyntaxError::MissingToken { .. } => None,
        }
    }

    pub fn source_line(&self) -> &str {
        match self {
            SyntaxError::UnexpectedToken { source_line, .. }
            | SyntaxError::MissingToken { source_line, .. } => source_line,
        }
    }
}

pub type Result<T> = std::result::Result<T, SyntaxError>;
