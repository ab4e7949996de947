// Exercise Test Modules

mod parity_tests;

use input::{Console, ConsoleConfig};
use std::io::Cursor;

pub type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

// Helper: console reading `input`, colors off
pub fn console(input: &str) -> TestConsole {
    console_bytes(input.as_bytes())
}

// Helper: console over raw bytes, which need not be valid UTF-8
pub fn console_bytes(input: &[u8]) -> TestConsole {
    let config = ConsoleConfig {
        color: false,
        ..ConsoleConfig::default()
    };
    Console::new(
        Cursor::new(input.to_vec()),
        Vec::new(),
        Vec::new(),
        config,
    )
}

// Helper: captured stdout
pub fn stdout(console: TestConsole) -> String {
    let (_, out, _) = console.into_parts();
    String::from_utf8(out).unwrap()
}
