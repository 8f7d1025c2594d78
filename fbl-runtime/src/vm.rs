//! Virtual Machine for FizzBuzzLang

use std::io::{self, BufRead, Stdout, Write};

use fbl_spec::Program;
use crate::error::{Result, RuntimeError};
use crate::execute::execute;
use crate::io::IOHandler;
use crate::snapshot::Snapshot;
use crate::state::{HaltReason, VMState};

/// VM configuration
#[derive(Debug, Clone, Default)]
pub struct VMConfig {
    /// Collect a snapshot after every executed line
    pub trace: bool,

    /// Halt with `HaltReason::StepLimit` after this many lines
    pub max_steps: Option<u64>,

    /// Written before every read
    pub prompt: Option<String>,
}

/// Execution result
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Number of lines executed, comments included
    pub steps: u64,

    /// Reason for halting
    pub halt_reason: HaltReason,

    /// Snapshots (if tracing enabled)
    pub trace: Vec<Snapshot>,
}

/// FizzBuzzLang Virtual Machine
pub struct VM<R, W> {
    program: Program,
    state: VMState,
    io: IOHandler<R, W>,
    config: VMConfig,
    trace: Vec<Snapshot>,
}

impl VM<io::StdinLock<'static>, Stdout> {
    /// VM wired to the process console
    pub fn with_stdio(program: Program, config: VMConfig) -> Self {
        VM::new(program, IOHandler::stdio(), config)
    }
}

impl<R: BufRead, W: Write> VM<R, W> {
    pub fn new(program: Program, mut io: IOHandler<R, W>, config: VMConfig) -> Self {
        io.set_prompt(config.prompt.clone());
        Self {
            program,
            state: VMState::new(),
            io,
            config,
            trace: Vec::new(),
        }
    }

    /// Run until halt or error.
    ///
    /// Output is flushed either way. On error the state is left as the
    /// failing instruction mutated it.
    pub fn run(&mut self) -> Result<ExecutionResult> {
        let outcome = self.run_loop();
        let flushed = self.io.flush();
        let halt_reason = outcome?;
        flushed?;

        tracing::info!(steps = self.state.steps, ?halt_reason, "halted");
        Ok(ExecutionResult {
            steps: self.state.steps,
            halt_reason,
            trace: std::mem::take(&mut self.trace),
        })
    }

    fn run_loop(&mut self) -> Result<HaltReason> {
        while !self.state.is_halted() {
            if let Some(limit) = self.config.max_steps {
                if self.state.steps >= limit {
                    self.state.halt(HaltReason::StepLimit);
                    break;
                }
            }
            self.step()?;
        }
        Ok(self.state.halt_reason.unwrap_or(HaltReason::Halt))
    }

    /// Fetch, decode and execute the line at `ip`
    pub fn step(&mut self) -> Result<()> {
        if self.state.is_halted() {
            return Ok(());
        }

        let ip = self.state.ip;
        let line = self
            .program
            .line(ip)
            .ok_or(RuntimeError::UnexpectedEndOfProgram { ip })?;

        let inst = fbl_decoder::decode(line, ip + 1)?;
        match &inst {
            Some(inst) => execute(inst, &mut self.state, &mut self.io)?,
            None => self.state.ip += 1,
        }

        if self.config.trace {
            let snapshot = Snapshot::capture(&self.state, self.state.steps, ip + 1, inst.as_ref());
            tracing::debug!("{}", snapshot);
            self.trace.push(snapshot);
        }
        self.state.steps += 1;
        Ok(())
    }

    /// Get current state (for debugging)
    pub fn state(&self) -> &VMState {
        &self.state
    }

    pub fn into_io(self) -> IOHandler<R, W> {
        self.io
    }
}
