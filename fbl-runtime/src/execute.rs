//! Instruction execution for FizzBuzzLang

use std::io::{BufRead, Write};

use fbl_spec::{Cell, Instruction};
use crate::error::{Result, RuntimeError};
use crate::io::{IOHandler, InputValue};
use crate::state::{HaltReason, VMState};

/// Execute a single instruction.
///
/// Moves `ip` to the next line unless the instruction jumps or halts.
/// Modulus moves it two lines, skipping the line that follows it.
pub fn execute<R: BufRead, W: Write>(
    instr: &Instruction,
    state: &mut VMState,
    io: &mut IOHandler<R, W>,
) -> Result<()> {
    match instr {
        // ========== Data-space ==========
        Instruction::Forward => state.tape.advance(),
        Instruction::Backward => state.tape.retreat(),
        Instruction::Duplicate => state.tape.duplicate(),

        Instruction::Add { from } => state.add(*from)?,
        Instruction::Subtract { from } => state.subtract(*from)?,
        Instruction::Modulus { divisor } => {
            state.modulus(*divisor)?;
            state.ip += 2;
            return Ok(());
        }

        Instruction::Store { slot } => state.store(*slot),
        Instruction::Seek { slot } => state.seek(*slot)?,

        // ========== I/O ==========
        Instruction::PrintValue { from } => {
            let value = state.load(*from)?;
            io.print_value(value)?;
        }

        Instruction::PrintChar { from } => {
            let value = state.load(*from)?;
            let c = u32::try_from(value)
                .ok()
                .and_then(char::from_u32)
                .ok_or(RuntimeError::InvalidCharacter {
                    value,
                    line: state.line(),
                })?;
            io.print_char(c)?;
        }

        Instruction::Read => {
            let text = io
                .read_line()?
                .ok_or(RuntimeError::InputExhausted { line: state.line() })?;
            let input = InputValue::parse(&text);
            tracing::debug!(?input, "read");
            let value = input
                .value()
                .ok_or(RuntimeError::ArithmeticOverflow { line: state.line() })?;
            state.tape.set_current(value);
        }

        Instruction::StoreBinary { bits } => {
            let value = binary_value(bits)
                .ok_or(RuntimeError::ArithmeticOverflow { line: state.line() })?;
            state.tape.set_current(value);
        }

        // ========== Flow control ==========
        Instruction::Label { name } => {
            if !state.declare_label(name) {
                tracing::trace!(label = %name, "label already declared");
            }
        }

        Instruction::Jump { label } => {
            state.ip = state.label_target(label)?;
            return Ok(());
        }

        Instruction::JumpIfNonZero { label } if state.tape.current() != 0 => {
            state.ip = state.label_target(label)?;
            return Ok(());
        }

        Instruction::JumpIfZero { label } if state.tape.current() == 0 => {
            state.ip = state.label_target(label)?;
            return Ok(());
        }

        Instruction::JumpIfNonZero { .. } | Instruction::JumpIfZero { .. } => {}

        Instruction::Halt => {
            state.halt(HaltReason::Halt);
            return Ok(());
        }
    }

    state.ip += 1;
    Ok(())
}

/// Big-endian binary digits as a cell value. `None` if it does not fit.
fn binary_value(bits: &[bool]) -> Option<Cell> {
    bits.iter()
        .try_fold(0 as Cell, |acc, &bit| acc.checked_mul(2)?.checked_add(Cell::from(bit)))
}
