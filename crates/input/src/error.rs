// Error types for console input
//
// Reading values from the console can fail because the stream broke, because
// the user typed something that is not a number, or because input ended early.

use std::fmt;
use std::io;
use std::ops::Range;

/// Byte range inside a single input line
pub type Span = Range<usize>;

/// Console input error types
#[derive(Debug)]
pub enum InputError {
    /// Reading from or writing to a stream failed
    Io(io::Error),

    /// A line contained something other than whitespace-separated integers
    InvalidNumber {
        line: String,
        span: Span,
        found: String,
        reason: String,
    },

    /// Input ended before every requested value was read
    UnexpectedEof { expected: usize, found: usize },

    /// Every allowed attempt was rejected
    TooManyAttempts { attempts: u32 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Io(err) => write!(f, "I/O error: {}", err),
            InputError::InvalidNumber { found, reason, .. } => {
                write!(f, "Invalid number '{}': {}", found, reason)
            }
            InputError::UnexpectedEof { expected, found } => {
                write!(
                    f,
                    "Unexpected end of input: expected {} value(s), read {}",
                    expected, found
                )
            }
            InputError::TooManyAttempts { attempts } => {
                write!(f, "Input rejected {} time(s), giving up", attempts)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}

impl InputError {
    /// Get the exit code for this error type
    /// Used by main.rs to return specific exit codes
    pub fn exit_code(&self) -> i32 {
        match self {
            InputError::Io(_) => 10,
            InputError::InvalidNumber { .. } => 11,
            InputError::UnexpectedEof { .. } => 12,
            InputError::TooManyAttempts { .. } => 13,
        }
    }

    /// Diagnostic code shown in reports
    pub fn code(&self) -> &'static str {
        match self {
            InputError::Io(_) => "E000",
            InputError::InvalidNumber { .. } => "E001",
            InputError::UnexpectedEof { .. } => "E002",
            InputError::TooManyAttempts { .. } => "E003",
        }
    }
}

/// Convenient Result type for console input
pub type InputResult<T> = Result<T, InputError>;
