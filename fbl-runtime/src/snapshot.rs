//! Debug snapshots
//!
//! A snapshot is taken after every executed line when tracing is enabled.
//! It is purely observational and never feeds back into execution.

use std::collections::BTreeMap;
use std::fmt;

use fbl_spec::{Cell, Instruction, NUM_SLOTS};
use serde::{Deserialize, Serialize};
use crate::state::VMState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// 0-based step count
    pub step: u64,

    /// 1-based line that was executed
    pub line: usize,

    /// Decoded instruction (`None` for comments and blank lines)
    pub instruction: Option<Instruction>,

    pub labels: BTreeMap<String, usize>,

    /// Stored locations A and B
    pub slots: [usize; NUM_SLOTS],

    pub dp: usize,

    /// Instruction pointer after execution
    pub ip: usize,

    pub halted: bool,

    pub tape: Vec<Cell>,
}

impl Snapshot {
    pub fn capture(state: &VMState, step: u64, line: usize, instruction: Option<&Instruction>) -> Self {
        Snapshot {
            step,
            line,
            instruction: instruction.cloned(),
            labels: state.labels.clone(),
            slots: state.slots,
            dp: state.tape.dp(),
            ip: state.ip,
            halted: state.is_halted(),
            tape: state.tape.cells().to_vec(),
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.instruction {
            Some(inst) => writeln!(f, "Interpreting line {}: {} ({})", self.line, inst, inst.mode())?,
            None => writeln!(f, "Interpreting line {}: (no-op)", self.line)?,
        }

        write!(f, "  Labels: {{")?;
        for (i, (name, ip)) in self.labels.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, ip)?;
        }
        writeln!(f, "}}")?;

        writeln!(f, "  Stored locations: A={} B={}", self.slots[0], self.slots[1])?;

        write!(f, "  Tape (dp={}, ip={}): [", self.dp, self.ip)?;
        for (i, cell) in self.tape.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if i == self.dp {
                write!(f, ">{}<", cell)?;
            } else {
                write!(f, "{}", cell)?;
            }
        }
        write!(f, "]")?;
        if self.halted {
            write!(f, " halted")?;
        }
        Ok(())
    }
}
