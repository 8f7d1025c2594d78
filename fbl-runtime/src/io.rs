//! I/O handling

use std::io::{self, BufRead, Stdout, Write};
use std::num::IntErrorKind;

use fbl_spec::Cell;

/// Console the VM prints to and reads from
#[derive(Debug)]
pub struct IOHandler<R, W> {
    input: R,
    output: W,
    prompt: Option<String>,
}

impl IOHandler<io::StdinLock<'static>, Stdout> {
    /// Process stdin and stdout
    pub fn stdio() -> Self {
        IOHandler::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> IOHandler<R, W> {
    pub fn new(input: R, output: W) -> Self {
        IOHandler {
            input,
            output,
            prompt: None,
        }
    }

    /// Text written (and flushed) before every read
    pub fn set_prompt(&mut self, prompt: Option<String>) {
        self.prompt = prompt;
    }

    /// Decimal value followed by a newline
    pub fn print_value(&mut self, value: Cell) -> io::Result<()> {
        writeln!(self.output, "{}", value)
    }

    /// Single character, no separator
    pub fn print_char(&mut self, c: char) -> io::Result<()> {
        write!(self.output, "{}", c)
    }

    /// Read one line without its terminator. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        if let Some(prompt) = &self.prompt {
            write!(self.output, "{}", prompt)?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// A line of user input, classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputValue {
    /// Text parsed as an integer
    Integer(Cell),
    /// Integer text that does not fit in a cell
    OutOfRange,
    /// Floating-point text, or anything longer than one character
    Zero,
    /// A single character, stored as its code point
    CharCode(Cell),
}

impl InputValue {
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        match trimmed.parse::<Cell>() {
            Ok(n) => return InputValue::Integer(n),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                return InputValue::OutOfRange;
            }
            Err(_) => {}
        }
        if trimmed.parse::<f64>().is_ok() {
            return InputValue::Zero;
        }

        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => InputValue::CharCode(Cell::from(u32::from(c))),
            _ => InputValue::Zero,
        }
    }

    /// Value written to the tape. `None` if it does not fit.
    pub fn value(self) -> Option<Cell> {
        match self {
            InputValue::Integer(n) | InputValue::CharCode(n) => Some(n),
            InputValue::Zero => Some(0),
            InputValue::OutOfRange => None,
        }
    }
}
