//! FizzBuzzLang Decoder
//!
//! Tokenize source lines and classify them into instructions.
//!
//! ## Example
//!
//! ```rust
//! use fbl_decoder::decode;
//! use fbl_spec::{Instruction, Slot};
//!
//! let inst = decode("FIZZ BUZZ FIZZ BUZZ", 1).unwrap();
//! assert_eq!(inst, Some(Instruction::Add { from: Some(Slot::B) }));
//!
//! // Comments and blank lines decode to nothing
//! assert_eq!(decode("// a comment", 2).unwrap(), None);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{Category, Result, SyntaxError};
pub use lexer::{tokenize, Lexeme, Token};
pub use parser::{decode, decode_program};
