//! Line classifier
//!
//! A line decodes in three steps: the mode token, the submode token, then
//! the argument shape for that (mode, submode) pair. Every argument must be
//! a vocabulary token except the trailing label name of a label declaration
//! or a jump.

use fbl_spec::{Instruction, Keyword, Mode, Program, Slot, COMMENT_MARKER};
use crate::error::{Category, Result, SyntaxError};
use crate::lexer::{tokenize, Lexeme};

/// Decode one source line.
///
/// `line_number` is 1-based and only used for error reporting. Returns
/// `Ok(None)` for blank lines and `//` comments.
pub fn decode(line: &str, line_number: usize) -> Result<Option<Instruction>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
        return Ok(None);
    }

    let lexemes = tokenize(line);
    let mut args = Args {
        line,
        line_number,
        lexemes: &lexemes,
        pos: 0,
    };

    let mode = Mode::from(args.keyword(Category::Mode)?);
    let submode = args.keyword(Category::Submode)?;
    args.check_vocabulary(mode, submode)?;

    let inst = match mode {
        Mode::DataSpace => decode_data_space(submode, &mut args)?,
        Mode::Io => decode_io(submode, &mut args)?,
        Mode::FlowControl => decode_flow_control(submode, &mut args)?,
    };
    args.finish()?;

    tracing::trace!(line = line_number, instruction = %inst, "decoded");
    Ok(Some(inst))
}

/// Decode every line of a program without executing it.
///
/// Returns one entry per source line; stops at the first syntax error.
pub fn decode_program(program: &Program) -> Result<Vec<Option<Instruction>>> {
    program
        .lines()
        .iter()
        .enumerate()
        .map(|(i, line)| decode(line, i + 1))
        .collect()
}

fn decode_data_space(submode: Keyword, args: &mut Args<'_, '_>) -> Result<Instruction> {
    Ok(match submode {
        Keyword::Fizz => match args.keyword(Category::Argument)? {
            Keyword::Fizz => Instruction::Forward,
            Keyword::Buzz => Instruction::Backward,
            Keyword::FizzBuzz => Instruction::Duplicate,
        },
        Keyword::Buzz => {
            let op = args.keyword(Category::Argument)?;
            let from = args.optional_slot()?;
            match op {
                Keyword::Fizz => Instruction::Add { from },
                Keyword::Buzz => Instruction::Subtract { from },
                Keyword::FizzBuzz => Instruction::Modulus { divisor: from },
            }
        }
        Keyword::FizzBuzz => match args.keyword(Category::Argument)? {
            Keyword::Fizz => Instruction::Store { slot: Slot::A },
            Keyword::Buzz => Instruction::Store { slot: Slot::B },
            Keyword::FizzBuzz => Instruction::Seek { slot: args.slot()? },
        },
    })
}

fn decode_io(submode: Keyword, args: &mut Args<'_, '_>) -> Result<Instruction> {
    Ok(match submode {
        Keyword::Fizz => Instruction::PrintValue { from: args.optional_slot()? },
        Keyword::Buzz => Instruction::PrintChar { from: args.optional_slot()? },
        Keyword::FizzBuzz if args.is_empty() => Instruction::Read,
        Keyword::FizzBuzz => {
            args.marker(Keyword::FizzBuzz)?;
            let mut bits = vec![args.bit()?];
            while !args.is_empty() {
                bits.push(args.bit()?);
            }
            Instruction::StoreBinary { bits }
        }
    })
}

fn decode_flow_control(submode: Keyword, args: &mut Args<'_, '_>) -> Result<Instruction> {
    Ok(match submode {
        Keyword::Fizz => Instruction::Label { name: args.label()? },
        Keyword::Buzz => {
            let condition = args.keyword(Category::Argument)?;
            let label = args.label()?;
            match condition {
                Keyword::Fizz => Instruction::JumpIfNonZero { label },
                Keyword::Buzz => Instruction::JumpIfZero { label },
                Keyword::FizzBuzz => Instruction::Jump { label },
            }
        }
        Keyword::FizzBuzz => Instruction::Halt,
    })
}

/// Cursor over the lexemes of one line
struct Args<'l, 'a> {
    line: &'a str,
    line_number: usize,
    lexemes: &'l [Lexeme<'a>],
    pos: usize,
}

impl<'l, 'a> Args<'l, 'a> {
    fn is_empty(&self) -> bool {
        self.pos >= self.lexemes.len()
    }

    fn unexpected(&self, lexeme: &Lexeme<'_>, expected: Category) -> SyntaxError {
        SyntaxError::UnexpectedToken {
            line: self.line_number,
            column: lexeme.column(self.line),
            token: lexeme.token.text().to_string(),
            expected,
            source_line: self.line.to_string(),
        }
    }

    fn missing(&self, expected: Category) -> SyntaxError {
        SyntaxError::MissingToken {
            line: self.line_number,
            expected,
            source_line: self.line.to_string(),
        }
    }

    /// Reject non-vocabulary arguments, leaving the label position free
    fn check_vocabulary(&self, mode: Mode, submode: Keyword) -> Result<()> {
        let args = &self.lexemes[self.pos..];
        let takes_label = mode == Mode::FlowControl && submode != Keyword::FizzBuzz;
        for (i, lexeme) in args.iter().enumerate() {
            let is_label = takes_label && i + 1 == args.len();
            if !is_label && lexeme.token.keyword().is_none() {
                return Err(self.unexpected(lexeme, Category::Argument));
            }
        }
        Ok(())
    }

    fn next(&mut self, expected: Category) -> Result<&'l Lexeme<'a>> {
        let lexemes = self.lexemes;
        let lexeme = lexemes.get(self.pos).ok_or_else(|| self.missing(expected))?;
        self.pos += 1;
        Ok(lexeme)
    }

    fn keyword(&mut self, expected: Category) -> Result<Keyword> {
        let lexeme = self.next(expected)?;
        lexeme
            .token
            .keyword()
            .ok_or_else(|| self.unexpected(lexeme, expected))
    }

    fn slot(&mut self) -> Result<Slot> {
        let lexeme = self.next(Category::Argument)?;
        lexeme
            .token
            .keyword()
            .and_then(Slot::from_keyword)
            .ok_or_else(|| self.unexpected(lexeme, Category::Argument))
    }

    fn optional_slot(&mut self) -> Result<Option<Slot>> {
        if self.is_empty() {
            Ok(None)
        } else {
            self.slot().map(Some)
        }
    }

    fn marker(&mut self, keyword: Keyword) -> Result<()> {
        let lexeme = self.next(Category::Argument)?;
        if lexeme.token.keyword() == Some(keyword) {
            Ok(())
        } else {
            Err(self.unexpected(lexeme, Category::Argument))
        }
    }

    fn bit(&mut self) -> Result<bool> {
        let lexeme = self.next(Category::Argument)?;
        lexeme
            .token
            .keyword()
            .and_then(Keyword::bit)
            .ok_or_else(|| self.unexpected(lexeme, Category::Argument))
    }

    fn label(&mut self) -> Result<String> {
        Ok(self.next(Category::Label)?.token.text().to_string())
    }

    /// Fail on any token left after a complete instruction
    fn finish(&self) -> Result<()> {
        match self.lexemes.get(self.pos) {
            Some(lexeme) => Err(self.unexpected(lexeme, Category::Argument)),
            None => Ok(()),
        }
    }
}
