//! Runtime error types for FizzBuzzLang

use fbl_decoder::SyntaxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("Jump attempt to undefined label '{label}' at line {line}")]
    UndefinedLabel { label: String, line: usize },

    #[error("Unexpected end of program before FIZZBUZZ FIZZBUZZ (ip {ip})")]
    UnexpectedEndOfProgram { ip: usize },

    #[error("Division by zero at line {line}")]
    DivisionByZero { line: usize },

    #[error("No divisor cell below the data pointer at line {line}")]
    MissingOperand { line: usize },

    #[error("Arithmetic overflow at line {line}")]
    ArithmeticOverflow { line: usize },

    #[error("Value {value} at line {line} is not a valid character")]
    InvalidCharacter { value: i64, line: usize },

    #[error("Input exhausted at line {line}")]
    InputExhausted { line: usize },

    /// Raised by `Tape::seek` and `Tape::get`. Programs cannot reach it:
    /// stored locations only hold past pointer positions and the tape never
    /// shrinks.
    #[error("Tape index {index} out of bounds")]
    OutOfBounds { index: usize },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RuntimeError {
    /// Whether the line could not be classified, as opposed to failing while running
    pub fn is_syntax(&self) -> bool {
        matches!(self, RuntimeError::Syntax(_))
    }

    /// 1-based source line the error is attributed to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            RuntimeError::Syntax(err) => Some(err.line()),
            RuntimeError::UndefinedLabel { line, .. }
            | RuntimeError::DivisionByZero { line }
            | RuntimeError::MissingOperand { line }
            | RuntimeError::ArithmeticOverflow { line }
            | RuntimeError::InvalidCharacter { line, .. }
            | RuntimeError::InputExhausted { line } => Some(*line),
            RuntimeError::UnexpectedEndOfProgram { .. }
            | RuntimeError::OutOfBounds { .. }
            | RuntimeError::IoError(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
