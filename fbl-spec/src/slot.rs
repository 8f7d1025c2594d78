//! Stored locations

use crate::keyword::Keyword;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of stored locations
pub const NUM_SLOTS: usize = 2;

/// Stored location (A or B), selected by `FIZZ` or `BUZZ`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Slot {
    A = 0,
    B = 1,
}

impl Slot {
    #[inline]
    pub fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Fizz => Some(Self::A),
            Keyword::Buzz => Some(Self::B),
            Keyword::FizzBuzz => None,
        }
    }

    #[inline]
    pub fn keyword(self) -> Keyword {
        match self {
            Self::A => Keyword::Fizz,
            Self::B => Keyword::Buzz,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_from_keyword() {
        assert_eq!(Slot::from_keyword(Keyword::Fizz), Some(Slot::A));
        assert_eq!(Slot::from_keyword(Keyword::Buzz), Some(Slot::B));
        assert_eq!(Slot::from_keyword(Keyword::FizzBuzz), None);
    }

    #[test]
    fn test_slot_index() {
        assert_eq!(Slot::A.index(), 0);
        assert_eq!(Slot::B.index(), 1);
        assert!(Slot::B.index() < NUM_SLOTS);
    }
}
