//! Tape subsystem
//!
//! The tape starts as a single zero cell and only ever grows at its high
//! end. `dp` is always a valid index.

use crate::error::{Result, RuntimeError};
use fbl_spec::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<Cell>,
    dp: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    pub fn new() -> Self {
        Tape {
            cells: vec![0],
            dp: 0,
        }
    }

    /// Data pointer
    #[inline]
    pub fn dp(&self) -> usize {
        self.dp
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: the tape holds at least one cell
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Move forward one cell, appending a zero at the end
    pub fn advance(&mut self) {
        self.dp += 1;
        if self.dp == self.cells.len() {
            self.cells.push(0);
        }
    }

    /// Move back one cell, staying put at the start
    pub fn retreat(&mut self) {
        self.dp = self.dp.saturating_sub(1);
    }

    /// Advance and copy the previous cell into the new one
    pub fn duplicate(&mut self) {
        self.advance();
        self.cells[self.dp] = self.cells[self.dp - 1];
    }

    /// Jump to a previously recorded pointer position
    pub fn seek(&mut self, index: usize) -> Result<()> {
        if index >= self.cells.len() {
            return Err(RuntimeError::OutOfBounds { index });
        }
        self.dp = index;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<Cell> {
        self.cells
            .get(index)
            .copied()
            .ok_or(RuntimeError::OutOfBounds { index })
    }

    #[inline]
    pub fn current(&self) -> Cell {
        self.cells[self.dp]
    }

    #[inline]
    pub fn set_current(&mut self, value: Cell) {
        self.cells[self.dp] = value;
    }
}
