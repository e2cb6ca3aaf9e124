extern crate termcolor;

use crate::color::write_block;
use code_practice::{
    practice::{Coverage, Practice},
    types::ExecutionResult,
};
use std::{fmt::Display, io::Write};
use termcolor::{Color, StandardStream};

#[allow(unused_must_use)]
pub fn write_result<T, E: Display>(stdout: &mut StandardStream, result: Result<T, E>, success: &str) {
    match result {
        Ok(_) => write_ok!(stdout, "Success", "{}", success),
        Err(e) => write_error!(stdout, "Error", "{}", e),
    }
}

#[allow(unused_must_use)]
pub fn write_coverage(stdout: &mut StandardStream, coverage: Coverage) {
    match coverage {
        Coverage::Available => (),
        Coverage::Unsupported(lang) => write_warn!(
            stdout,
            "Warning",
            "No {} starter for this problem, editor holds a placeholder",
            lang
        ),
        Coverage::NoProblem => write_info!(stdout, "Info", "No problem loaded. Use \"next\""),
    }
}

/// Prints a run's output and, on success, how it compares to the expected
/// value of the selected case.
#[allow(unused_must_use)]
pub fn write_execution(stdout: &mut StandardStream, result: &ExecutionResult, expected: Option<&str>) {
    match result {
        ExecutionResult::Success { output } => {
            write_ok!(stdout, "Success", "Program exited normally");
            write_block(stdout, None, output);
            match expected {
                Some(e) if result.matches(e) => write_ok!(stdout, "Passed", "Output matches {}", e),
                Some(e) => write_warn!(stdout, "Differs", "Expected {}", e),
                None => (),
            }
        }
        ExecutionResult::Failure { message } => {
            write_error!(stdout, "Failed", "Execution failed");
            write_block(stdout, Some(Color::Red), message);
        }
    }
}

#[allow(unused_must_use)]
pub fn write_cases(stdout: &mut StandardStream, practice: &Practice) {
    if practice.cases().is_empty() {
        write_info!(stdout, "Info", "No example cases");
        return;
    }
    for (index, case) in practice.cases().iter().enumerate() {
        let marker = if index == practice.active_case() { "*" } else { " " };
        write_info!(stdout, format!("{}Case {}", marker, index + 1), "{}", case.args.join(", "));
        if let Some(e) = practice.expected_outputs().get(index) {
            writeln!(stdout, "{:>10}expected {}", "", e);
        }
    }
}
