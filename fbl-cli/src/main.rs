//! FizzBuzzLang command-line runner

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use fbl_runtime::{HaltReason, VMConfig, VM};
use fbl_spec::Program;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fbl")]
#[command(version)]
#[command(about = "Run a FizzBuzzLang script", long_about = None)]
struct Cli {
    /// Script to run
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Log a snapshot of the VM after every line
    #[arg(short, long)]
    debug: bool,

    /// Stop after this many lines
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// Don't print "> " before reading input
    #[arg(long)]
    no_prompt: bool,

    /// Only decode the script and report syntax errors
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(&cli) {
        Ok(HaltReason::Halt) => ExitCode::SUCCESS,
        Ok(HaltReason::StepLimit) => {
            eprintln!("warning: step limit reached");
            ExitCode::from(3)
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> Result<HaltReason> {
    let program = Program::load(&cli.script)
        .with_context(|| format!("failed to read {}", cli.script.display()))?;

    if cli.check {
        let decoded = check_program(&program)?;
        println!("{}: {} instructions OK", cli.script.display(), decoded);
        return Ok(HaltReason::Halt);
    }

    let config = VMConfig {
        trace: cli.debug,
        max_steps: cli.max_steps,
        prompt: (!cli.no_prompt).then(|| "> ".to_string()),
    };

    let mut vm = VM::with_stdio(program, config);
    let result = vm
        .run()
        .with_context(|| format!("{} failed", cli.script.display()))?;
    tracing::debug!(steps = result.steps, "finished");
    Ok(result.halt_reason)
}

/// Number of instruction lines, or the first syntax error
fn check_program(program: &Program) -> Result<usize> {
    let decoded = fbl_decoder::decode_program(program)?;
    Ok(decoded.iter().flatten().count())
}
