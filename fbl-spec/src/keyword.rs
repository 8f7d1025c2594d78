//! The FizzBuzzLang vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three vocabulary tokens
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    Fizz,
    Buzz,
    FizzBuzz,
}

impl Keyword {
    pub const ALL: [Keyword; 3] = [Keyword::Fizz, Keyword::Buzz, Keyword::FizzBuzz];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fizz => "FIZZ",
            Self::Buzz => "BUZZ",
            Self::FizzBuzz => "FIZZBUZZ",
        }
    }

    /// Binary digit encoded by this token inside a literal.
    ///
    /// `FIZZ` is 0 and `BUZZ` is 1; `FIZZBUZZ` is not a digit.
    #[inline]
    pub fn bit(self) -> Option<bool> {
        match self {
            Self::Fizz => Some(false),
            Self::Buzz => Some(true),
            Self::FizzBuzz => None,
        }
    }

    #[inline]
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            Self::Buzz
        } else {
            Self::Fizz
        }
    }
}

impl FromStr for Keyword {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIZZ" => Ok(Self::Fizz),
            "BUZZ" => Ok(Self::Buzz),
            "FIZZBUZZ" => Ok(Self::FizzBuzz),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Instruction family selected by the first token of a line
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// `FIZZ`: tape and pointer manipulation
    DataSpace,
    /// `BUZZ`: printing, reading and literals
    Io,
    /// `FIZZBUZZ`: labels, jumps and halt
    FlowControl,
}

impl Mode {
    pub fn keyword(self) -> Keyword {
        match self {
            Self::DataSpace => Keyword::Fizz,
            Self::Io => Keyword::Buzz,
            Self::FlowControl => Keyword::FizzBuzz,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::DataSpace => "data-space",
            Self::Io => "i/o",
            Self::FlowControl => "flow-control",
        }
    }
}

impl From<Keyword> for Mode {
    fn from(keyword: Keyword) -> Self {
        match keyword {
            Keyword::Fizz => Self::DataSpace,
            Keyword::Buzz => Self::Io,
            Keyword::FizzBuzz => Self::FlowControl,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
