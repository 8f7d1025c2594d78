//! # Program Structure
//!
//! A program is the ordered, immutable sequence of source lines handed to
//! the VM. Lines are decoded on demand as the instruction pointer reaches
//! them, so a program never fails to load because of its contents.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// FizzBuzzLang program
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    lines: Vec<String>,
}

impl Program {
    /// Create a program from already-split lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Split source text into lines (`\n` or `\r\n` terminated)
    pub fn from_source(source: &str) -> Self {
        Self::from_lines(source.lines())
    }

    /// Read a script from disk
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let source = fs::read_to_string(path)?;
        Ok(Self::from_source(&source))
    }

    /// Source line at `index` (0-based)
    #[inline]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_source_splits_lines() {
        let program = Program::from_source("FIZZ FIZZ FIZZ\r\n// note\n\nFIZZBUZZ FIZZBUZZ\n");
        assert_eq!(program.len(), 4);
        assert_eq!(program.line(0), Some("FIZZ FIZZ FIZZ"));
        assert_eq!(program.line(1), Some("// note"));
        assert_eq!(program.line(2), Some(""));
        assert_eq!(program.line(3), Some("FIZZBUZZ FIZZBUZZ"));
        assert_eq!(program.line(4), None);
    }

    #[test]
    fn test_empty_program() {
        let program = Program::from_source("");
        assert!(program.is_empty());
        assert_eq!(program, Program::default());
    }

    #[test]
    fn test_from_lines() {
        let program = Program::from_lines(vec!["BUZZ FIZZ", "FIZZBUZZ FIZZBUZZ"]);
        assert_eq!(program.lines(), &["BUZZ FIZZ".to_string(), "FIZZBUZZ FIZZBUZZ".to_string()]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Program::load("/nonexistent/path/script.fb");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_round_trips_lines() {
        let program = Program::from_lines(["FIZZ FIZZ FIZZ", "FIZZBUZZ FIZZBUZZ"]);
        assert_eq!(Program::from_source(&program.to_string()), program);
    }
}
