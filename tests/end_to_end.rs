//! End-to-end tests for the FizzBuzzLang toolchain
//!
//! These tests verify the complete workflow:
//! 1. Load a script from `scripts/` into a Program
//! 2. Check it with the decoder
//! 3. Execute it in the VM and compare the printed output

use std::io::Cursor;
use std::path::PathBuf;

use fbl_decoder::{decode_program, Category, SyntaxError};
use fbl_runtime::{HaltReason, IOHandler, RuntimeError, VMConfig, VM};
use fbl_spec::Program;

fn script(name: &str) -> Program {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "scripts", name].iter().collect();
    Program::load(&path).expect("script should exist")
}

fn run_script(name: &str, input: &str) -> Result<String, RuntimeError> {
    let io = IOHandler::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let mut vm = VM::new(script(name), io, VMConfig::default());
    let result = vm.run()?;
    assert_eq!(result.halt_reason, HaltReason::Halt);
    Ok(String::from_utf8(vm.into_io().into_output()).expect("utf-8 output"))
}

// ============================================================================
// Valid Scripts
// ============================================================================

#[test]
fn test_valid_scripts() {
    let cases = [
        ("flow_example.fb", "2\n1\n"),
        ("hello.fb", "Hello World\n"),
        ("hello_short.fb", "Hello World\n"),
    ];

    for (name, expected) in cases {
        let output = run_script(name, "").unwrap_or_else(|e| panic!("{} failed: {}", name, e));
        assert_eq!(output, expected, "Unexpected output from script {}", name);
    }
}

#[test]
fn test_mul_script() {
    assert_eq!(run_script("mul.fb", "6\n7\n").unwrap(), "42\n");
    assert_eq!(run_script("mul.fb", "13\n1\n").unwrap(), "13\n");
}

#[test]
fn test_mul_script_without_input() {
    let err = run_script("mul.fb", "").unwrap_err();
    assert!(matches!(err, RuntimeError::InputExhausted { line: 5 }));
}

#[test]
fn test_valid_scripts_decode() {
    for name in ["flow_example.fb", "hello.fb", "hello_short.fb", "mul.fb"] {
        assert!(decode_program(&script(name)).is_ok(), "{} should decode", name);
    }
}

// ============================================================================
// Invalid Scripts
// ============================================================================

#[test]
fn test_invalid_scripts() {
    let cases = [
        ("invalid_mode.fb", 3, "FUZZ", Category::Mode),
        ("invalid_submode.fb", 1, "FOO", Category::Submode),
        ("invalid_arg.fb", 1, "BAR", Category::Argument),
    ];

    for (name, line, token, expected) in cases {
        let err = run_script(name, "").unwrap_err();
        match err {
            RuntimeError::Syntax(SyntaxError::UnexpectedToken {
                line: l,
                token: t,
                expected: e,
                ..
            }) => {
                assert_eq!(l, line, "{}", name);
                assert_eq!(t, token, "{}", name);
                assert_eq!(e, expected, "{}", name);
            }
            other => panic!("Expected syntax error from {}, got {:?}", name, other),
        }
    }
}

#[test]
fn test_invalid_mode_runs_preceding_lines() {
    let io = IOHandler::new(Cursor::new(Vec::new()), Vec::new());
    let mut vm = VM::new(script("invalid_mode.fb"), io, VMConfig::default());
    assert!(vm.run().unwrap_err().is_syntax());
    // The forward on line 2 executed before line 3 failed
    assert_eq!(vm.state().tape.dp(), 1);
}

// ============================================================================
// Tracing
// ============================================================================

#[test]
fn test_trace_follows_loop() {
    let io = IOHandler::new(Cursor::new(Vec::new()), Vec::new());
    let config = VMConfig {
        trace: true,
        ..VMConfig::default()
    };
    let mut vm = VM::new(script("flow_example.fb"), io, config);
    let result = vm.run().unwrap();

    assert_eq!(result.trace.len() as u64, result.steps);
    let jumps_taken = result
        .trace
        .windows(2)
        .filter(|w| w[1].line < w[0].line)
        .count();
    assert_eq!(jumps_taken, 1);
    assert!(result.trace.last().unwrap().halted);
}
