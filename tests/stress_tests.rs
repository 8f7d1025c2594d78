//! Stress tests for FizzBuzzLang
//!
//! Long loops, long tapes, many labels and the step limit.

use std::io::Cursor;

use fbl_runtime::{HaltReason, IOHandler, VMConfig, VM};
use fbl_spec::Program;

/// Binary literal line storing `value` at the data pointer
fn literal(value: u64) -> String {
    let bits: Vec<&str> = format!("{:b}", value)
        .chars()
        .map(|c| if c == '1' { "BUZZ" } else { "FIZZ" })
        .collect();
    format!("BUZZ FIZZBUZZ FIZZBUZZ {}", bits.join(" "))
}

fn vm_for(source: &str, config: VMConfig) -> VM<Cursor<Vec<u8>>, Vec<u8>> {
    let io = IOHandler::new(Cursor::new(Vec::new()), Vec::new());
    VM::new(Program::from_source(source), io, config)
}

// ============================================================================
// Long Running Tests
// ============================================================================

#[test]
fn test_countdown_10000() {
    let source = [
        literal(10_000).as_str(),
        "FIZZBUZZ FIZZ loop",
        "FIZZ BUZZ BUZZ",
        "FIZZBUZZ BUZZ FIZZ loop",
        "BUZZ FIZZ",
        "FIZZBUZZ FIZZBUZZ",
    ]
    .join("\n");

    let mut vm = vm_for(&source, VMConfig::default());
    let result = vm.run().unwrap();

    assert_eq!(result.halt_reason, HaltReason::Halt);
    // literal + 10000 * (label, sub, jump) + print + halt
    assert_eq!(result.steps, 1 + 30_000 + 2);
    assert_eq!(vm.into_io().into_output(), b"0\n".to_vec());
}

#[test]
fn test_step_limit_stops_infinite_loop() {
    let source = "FIZZBUZZ FIZZ spin\nFIZZBUZZ BUZZ FIZZBUZZ spin\n";
    let config = VMConfig {
        max_steps: Some(1000),
        ..VMConfig::default()
    };

    let mut vm = vm_for(source, config);
    let result = vm.run().unwrap();

    assert_eq!(result.halt_reason, HaltReason::StepLimit);
    assert_eq!(result.steps, 1000);
    assert_eq!(vm.state().labels.len(), 1);
}

// ============================================================================
// Large Program Tests
// ============================================================================

#[test]
fn test_long_tape() {
    let mut lines = vec!["FIZZ FIZZBUZZ FIZZ".to_string()];
    lines.extend(std::iter::repeat("FIZZ FIZZ FIZZ".to_string()).take(5000));
    lines.push("FIZZ BUZZ FIZZ".to_string());
    lines.push("FIZZ FIZZBUZZ FIZZBUZZ FIZZ".to_string());
    lines.push("FIZZBUZZ FIZZBUZZ".to_string());

    let mut vm = vm_for(&lines.join("\n"), VMConfig::default());
    vm.run().unwrap();

    let tape = &vm.state().tape;
    assert_eq!(tape.len(), 5001);
    assert_eq!(tape.dp(), 0);
    assert_eq!(tape.current(), 0);
    assert_eq!(tape.get(5000).unwrap(), 1);
}

#[test]
fn test_many_labels() {
    // Labels bind at the line index of their declaration
    let mut source = String::new();
    for i in 0..200 {
        source.push_str(&format!("FIZZBUZZ FIZZ l{}\n", i));
        source.push_str("FIZZ BUZZ FIZZ\n");
    }
    source.push_str("BUZZ FIZZ\n");
    source.push_str("FIZZBUZZ FIZZBUZZ\n");

    let mut vm = vm_for(&source, VMConfig::default());
    vm.run().unwrap();

    assert_eq!(vm.state().labels.len(), 200);
    assert_eq!(vm.state().labels["l199"], 398);
    assert_eq!(vm.into_io().into_output(), b"200\n".to_vec());
}

#[test]
fn test_large_literal_arithmetic() {
    let source = [
        literal(i64::MAX as u64).as_str(),
        "FIZZ BUZZ BUZZ",
        "FIZZ BUZZ FIZZ",
        "BUZZ FIZZ",
        "FIZZBUZZ FIZZBUZZ",
    ]
    .join("\n");

    let mut vm = vm_for(&source, VMConfig::default());
    vm.run().unwrap();
    assert_eq!(
        vm.into_io().into_output(),
        format!("{}\n", i64::MAX).into_bytes()
    );
}
