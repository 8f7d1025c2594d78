//! # FizzBuzzLang Language Definitions
//!
//! Core types shared by the decoder and the runtime.
//!
//! ## Key Features
//! - Three-token vocabulary: `FIZZ`, `BUZZ`, `FIZZBUZZ`
//! - Instructions are mode/submode/argument triples
//! - Two stored locations (A and B) usable as indirect operands
//! - Free-form label names as the only non-vocabulary tokens

pub mod keyword;
pub mod slot;
pub mod instruction;
pub mod program;

pub use keyword::{Keyword, Mode};
pub use slot::{Slot, NUM_SLOTS};
pub use instruction::Instruction;
pub use program::Program;

/// Line comment marker
pub const COMMENT_MARKER: &str = "//";

/// Tape cell type
pub type Cell = i64;
