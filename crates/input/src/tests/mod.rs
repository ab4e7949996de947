// Test module for console input
//
// Tests are organized by category: line parsing, console reads, and
// diagnostic reports.

mod values_tests;

use crate::{Console, ConsoleConfig};
use std::io::Cursor;

pub type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

// Helper: console over an in-memory input with colors off
pub fn console(input: &str) -> TestConsole {
    console_with_attempts(input, 3)
}

pub fn console_with_attempts(input: &str, max_attempts: u32) -> TestConsole {
    let config = ConsoleConfig {
        max_attempts,
        color: false,
        ..ConsoleConfig::default()
    };
    Console::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        Vec::new(),
        config,
    )
}

// Helper: (stdout, stderr) captured by the console
pub fn outputs(console: TestConsole) -> (String, String) {
    let (_, out, err) = console.into_parts();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}
