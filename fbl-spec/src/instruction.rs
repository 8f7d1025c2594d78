//! FizzBuzzLang Instruction Set
//!
//! Every instruction is written as `MODE SUBMODE [ARGS...]`.
//!
//! ## Modes
//! - `FIZZ`:     data-space (pointer moves, arithmetic, stored locations)
//! - `BUZZ`:     I/O (print value, print character, input and binary literals)
//! - `FIZZBUZZ`: flow control (labels, jumps, halt)
//!
//! An optional trailing `FIZZ`/`BUZZ` selects stored location A/B as the
//! operand instead of the default.

use crate::keyword::{Keyword, Mode};
use crate::slot::Slot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// FizzBuzzLang instruction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    // ========== Data-space: pointer ==========
    /// FIZZ FIZZ FIZZ: dp += 1, growing the tape
    Forward,

    /// FIZZ FIZZ BUZZ: dp -= 1, clamped at 0
    Backward,

    /// FIZZ FIZZ FIZZBUZZ: advance and copy the previous cell
    Duplicate,

    // ========== Data-space: arithmetic ==========
    /// FIZZ BUZZ FIZZ [slot]: tape[dp] += 1 or the value at `from`
    Add { from: Option<Slot> },

    /// FIZZ BUZZ BUZZ [slot]: tape[dp] -= 1 or the value at `from`
    Subtract { from: Option<Slot> },

    /// FIZZ BUZZ FIZZBUZZ [slot]: advance, then tape[dp] = tape[dp-1] mod divisor.
    /// Skips the following line.
    Modulus { divisor: Option<Slot> },

    // ========== Data-space: stored locations ==========
    /// FIZZ FIZZBUZZ slot: slot = dp
    Store { slot: Slot },

    /// FIZZ FIZZBUZZ FIZZBUZZ slot: dp = slot
    Seek { slot: Slot },

    // ========== I/O ==========
    /// BUZZ FIZZ [slot]: print value followed by a newline
    PrintValue { from: Option<Slot> },

    /// BUZZ BUZZ [slot]: print value as a character
    PrintChar { from: Option<Slot> },

    /// BUZZ FIZZBUZZ: read a line into tape[dp]
    Read,

    /// BUZZ FIZZBUZZ FIZZBUZZ bits...: store a binary literal into tape[dp]
    StoreBinary { bits: Vec<bool> },

    // ========== Flow control ==========
    /// FIZZBUZZ FIZZ label: declare a label at this line
    Label { name: String },

    /// FIZZBUZZ BUZZ FIZZ label: jump if tape[dp] != 0
    JumpIfNonZero { label: String },

    /// FIZZBUZZ BUZZ BUZZ label: jump if tape[dp] == 0
    JumpIfZero { label: String },

    /// FIZZBUZZ BUZZ FIZZBUZZ label: jump unconditionally
    Jump { label: String },

    /// FIZZBUZZ FIZZBUZZ: stop execution
    Halt,
}

impl Instruction {
    /// Instruction family
    pub fn mode(&self) -> Mode {
        match self {
            Self::Forward
            | Self::Backward
            | Self::Duplicate
            | Self::Add { .. }
            | Self::Subtract { .. }
            | Self::Modulus { .. }
            | Self::Store { .. }
            | Self::Seek { .. } => Mode::DataSpace,

            Self::PrintValue { .. }
            | Self::PrintChar { .. }
            | Self::Read
            | Self::StoreBinary { .. } => Mode::Io,

            Self::Label { .. }
            | Self::JumpIfNonZero { .. }
            | Self::JumpIfZero { .. }
            | Self::Jump { .. }
            | Self::Halt => Mode::FlowControl,
        }
    }

    /// Submode token within the family
    pub fn submode(&self) -> Keyword {
        match self {
            Self::Forward | Self::Backward | Self::Duplicate => Keyword::Fizz,
            Self::Add { .. } | Self::Subtract { .. } | Self::Modulus { .. } => Keyword::Buzz,
            Self::Store { .. } | Self::Seek { .. } => Keyword::FizzBuzz,
            Self::PrintValue { .. } => Keyword::Fizz,
            Self::PrintChar { .. } => Keyword::Buzz,
            Self::Read | Self::StoreBinary { .. } => Keyword::FizzBuzz,
            Self::Label { .. } => Keyword::Fizz,
            Self::JumpIfNonZero { .. } | Self::JumpIfZero { .. } | Self::Jump { .. } => {
                Keyword::Buzz
            }
            Self::Halt => Keyword::FizzBuzz,
        }
    }

    /// Label referenced by a jump, if any
    pub fn jump_target(&self) -> Option<&str> {
        match self {
            Self::JumpIfNonZero { label } | Self::JumpIfZero { label } | Self::Jump { label } => {
                Some(label)
            }
            _ => None,
        }
    }

    /// Vocabulary arguments following the mode and submode tokens.
    ///
    /// Label names are not included; see [`Instruction::jump_target`].
    pub fn arguments(&self) -> Vec<Keyword> {
        let slot = |s: &Option<Slot>| s.map(Slot::keyword);
        match self {
            Self::Forward => vec![Keyword::Fizz],
            Self::Backward => vec![Keyword::Buzz],
            Self::Duplicate => vec![Keyword::FizzBuzz],
            Self::Add { from } => std::iter::once(Keyword::Fizz).chain(slot(from)).collect(),
            Self::Subtract { from } => std::iter::once(Keyword::Buzz).chain(slot(from)).collect(),
            Self::Modulus { divisor } => {
                std::iter::once(Keyword::FizzBuzz).chain(slot(divisor)).collect()
            }
            Self::Store { slot } => vec![slot.keyword()],
            Self::Seek { slot } => vec![Keyword::FizzBuzz, slot.keyword()],
            Self::PrintValue { from } | Self::PrintChar { from } => slot(from).into_iter().collect(),
            Self::Read | Self::Label { .. } | Self::Halt => Vec::new(),
            Self::StoreBinary { bits } => std::iter::once(Keyword::FizzBuzz)
                .chain(bits.iter().map(|&b| Keyword::from_bit(b)))
                .collect(),
            Self::JumpIfNonZero { .. } => vec![Keyword::Fizz],
            Self::JumpIfZero { .. } => vec![Keyword::Buzz],
            Self::Jump { .. } => vec![Keyword::FizzBuzz],
        }
    }
}

/// Renders the canonical token form, e.g. `FIZZ BUZZ FIZZ BUZZ`
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.mode().keyword(), self.submode())?;
        for arg in self.arguments() {
            write!(f, " {}", arg)?;
        }
        match self {
            Self::Label { name } => write!(f, " {}", name),
            _ => match self.jump_target() {
                Some(label) => write!(f, " {}", label),
                None => Ok(()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_data_space() {
        assert_eq!(Instruction::Forward.to_string(), "FIZZ FIZZ FIZZ");
        assert_eq!(Instruction::Duplicate.to_string(), "FIZZ FIZZ FIZZBUZZ");
        assert_eq!(Instruction::Add { from: None }.to_string(), "FIZZ BUZZ FIZZ");
        assert_eq!(
            Instruction::Subtract { from: Some(Slot::B) }.to_string(),
            "FIZZ BUZZ BUZZ BUZZ"
        );
        assert_eq!(
            Instruction::Modulus { divisor: Some(Slot::A) }.to_string(),
            "FIZZ BUZZ FIZZBUZZ FIZZ"
        );
        assert_eq!(Instruction::Store { slot: Slot::B }.to_string(), "FIZZ FIZZBUZZ BUZZ");
        assert_eq!(
            Instruction::Seek { slot: Slot::A }.to_string(),
            "FIZZ FIZZBUZZ FIZZBUZZ FIZZ"
        );
    }

    #[test]
    fn test_display_io() {
        assert_eq!(Instruction::PrintValue { from: None }.to_string(), "BUZZ FIZZ");
        assert_eq!(Instruction::PrintChar { from: Some(Slot::A) }.to_string(), "BUZZ BUZZ FIZZ");
        assert_eq!(Instruction::Read.to_string(), "BUZZ FIZZBUZZ");
        assert_eq!(
            Instruction::StoreBinary { bits: vec![true, false, true] }.to_string(),
            "BUZZ FIZZBUZZ FIZZBUZZ BUZZ FIZZ BUZZ"
        );
    }

    #[test]
    fn test_display_flow_control() {
        assert_eq!(
            Instruction::Label { name: "loop".into() }.to_string(),
            "FIZZBUZZ FIZZ loop"
        );
        assert_eq!(
            Instruction::JumpIfZero { label: "end".into() }.to_string(),
            "FIZZBUZZ BUZZ BUZZ end"
        );
        assert_eq!(
            Instruction::Jump { label: "top".into() }.to_string(),
            "FIZZBUZZ BUZZ FIZZBUZZ top"
        );
        assert_eq!(Instruction::Halt.to_string(), "FIZZBUZZ FIZZBUZZ");
    }

    #[test]
    fn test_mode_classification() {
        assert_eq!(Instruction::Seek { slot: Slot::B }.mode(), Mode::DataSpace);
        assert_eq!(Instruction::Read.mode(), Mode::Io);
        assert_eq!(Instruction::Halt.mode(), Mode::FlowControl);
    }
}
