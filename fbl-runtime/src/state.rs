//! VM state for FizzBuzzLang

use std::collections::BTreeMap;

use fbl_spec::{Cell, Slot, NUM_SLOTS};
use crate::error::{Result, RuntimeError};
use crate::tape::Tape;

/// VM state
#[derive(Debug, Clone)]
pub struct VMState {
    /// Memory tape and data pointer
    pub tape: Tape,

    /// Stored locations A and B (tape indices)
    pub slots: [usize; NUM_SLOTS],

    /// Instruction pointer (0-based line index)
    pub ip: usize,

    /// Label name -> line index of its declaration
    pub labels: BTreeMap<String, usize>,

    /// Lines executed so far, comments included
    pub steps: u64,

    /// Halted flag
    pub halted: bool,

    /// Halt reason
    pub halt_reason: Option<HaltReason>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// FIZZBUZZ FIZZBUZZ
    Halt,
    /// Configured step limit reached
    StepLimit,
}

impl Default for VMState {
    fn default() -> Self {
        Self::new()
    }
}

impl VMState {
    pub fn new() -> Self {
        VMState {
            tape: Tape::new(),
            slots: [0; NUM_SLOTS],
            ip: 0,
            labels: BTreeMap::new(),
            steps: 0,
            halted: false,
            halt_reason: None,
        }
    }

    /// 1-based source line of the instruction at `ip`
    #[inline]
    pub fn line(&self) -> usize {
        self.ip + 1
    }

    #[inline]
    pub fn slot(&self, slot: Slot) -> usize {
        self.slots[slot.index()]
    }

    /// Record the data pointer in a stored location
    pub fn store(&mut self, slot: Slot) {
        self.slots[slot.index()] = self.tape.dp();
    }

    /// Move the data pointer to a stored location
    pub fn seek(&mut self, slot: Slot) -> Result<()> {
        self.tape.seek(self.slot(slot))
    }

    /// Value of the cell a stored location points at
    pub fn stored_value(&self, slot: Slot) -> Result<Cell> {
        self.tape.get(self.slot(slot))
    }

    /// Value at the data pointer, or at a stored location
    pub fn load(&self, from: Option<Slot>) -> Result<Cell> {
        match from {
            Some(slot) => self.stored_value(slot),
            None => Ok(self.tape.current()),
        }
    }

    pub fn add(&mut self, from: Option<Slot>) -> Result<()> {
        let addend = match from {
            Some(slot) => self.stored_value(slot)?,
            None => 1,
        };
        let sum = self
            .tape
            .current()
            .checked_add(addend)
            .ok_or(RuntimeError::ArithmeticOverflow { line: self.line() })?;
        self.tape.set_current(sum);
        Ok(())
    }

    pub fn subtract(&mut self, from: Option<Slot>) -> Result<()> {
        let subtrahend = match from {
            Some(slot) => self.stored_value(slot)?,
            None => 1,
        };
        let difference = self
            .tape
            .current()
            .checked_sub(subtrahend)
            .ok_or(RuntimeError::ArithmeticOverflow { line: self.line() })?;
        self.tape.set_current(difference);
        Ok(())
    }

    /// Advance, then store `tape[dp-1] mod divisor` in the new cell.
    ///
    /// Without a stored location the divisor is the cell two below the new
    /// pointer. The pointer move is not undone if the division fails.
    pub fn modulus(&mut self, divisor: Option<Slot>) -> Result<()> {
        let line = self.line();
        self.tape.advance();
        let dp = self.tape.dp();

        let divisor = match divisor {
            Some(slot) => self.stored_value(slot)?,
            None => {
                let index = dp.checked_sub(2).ok_or(RuntimeError::MissingOperand { line })?;
                self.tape.get(index)?
            }
        };
        if divisor == 0 {
            return Err(RuntimeError::DivisionByZero { line });
        }

        let dividend = self.tape.get(dp - 1)?;
        self.tape.set_current(floor_mod(dividend, divisor));
        Ok(())
    }

    /// Bind `name` to the current line. Returns false if it was already bound.
    pub fn declare_label(&mut self, name: &str) -> bool {
        if self.labels.contains_key(name) {
            return false;
        }
        self.labels.insert(name.to_string(), self.ip);
        true
    }

    /// Line index a label was declared at
    pub fn label_target(&self, name: &str) -> Result<usize> {
        self.labels
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UndefinedLabel {
                label: name.to_string(),
                line: self.line(),
            })
    }

    /// Halt execution
    pub fn halt(&mut self, reason: HaltReason) {
        self.halted = true;
        self.halt_reason = Some(reason);
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halted
    }
}

/// Remainder with the sign of the divisor. `divisor` must be non-zero.
#[inline]
fn floor_mod(dividend: Cell, divisor: Cell) -> Cell {
    // wrapping_rem only wraps on MIN % -1, whose remainder is 0 anyway
    let r = dividend.wrapping_rem(divisor);
    if r != 0 && (r < 0) != (divisor < 0) {
        r + divisor
    } else {
        r
    }
}
