pub mod console;
pub mod error;
pub mod error_report;
pub mod values;

pub use console::{Console, ConsoleConfig};
pub use error::{InputError, InputResult, Span};

#[cfg(test)]
mod tests;
