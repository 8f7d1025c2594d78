//! # FizzBuzzLang Runtime
//!
//! Execute FizzBuzzLang programs.
//!
//! The VM owns one integer tape addressed by a data pointer, two stored
//! locations, an instruction pointer over source lines and a label table.
//! Lines are decoded as the instruction pointer reaches them.
//!
//! ## Example
//!
//! ```rust
//! use fbl_spec::Program;
//!
//! let program = Program::from_source(
//!     "FIZZ FIZZ FIZZ\nFIZZ BUZZ FIZZ\nBUZZ FIZZ\nFIZZBUZZ FIZZBUZZ\n",
//! );
//! let output = fbl_runtime::run(program, "").unwrap();
//! assert_eq!(output, "1\n");
//! ```

pub mod error;
pub mod tape;
pub mod state;
pub mod io;
pub mod execute;
pub mod snapshot;
pub mod vm;

pub use error::{Result, RuntimeError};
pub use tape::Tape;
pub use state::{HaltReason, VMState};
pub use io::{IOHandler, InputValue};
pub use snapshot::Snapshot;
pub use vm::{ExecutionResult, VMConfig, VM};

use std::io::Cursor;

use fbl_spec::Program;

/// Simple execution helper
///
/// Runs a program against `input` and returns everything it printed.
pub fn run(program: Program, input: &str) -> Result<String> {
    let io = IOHandler::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let mut vm = VM::new(program, io, VMConfig::default());
    vm.run()?;
    Ok(String::from_utf8_lossy(&vm.into_io().into_output()).into_owned())
}
