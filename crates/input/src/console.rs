// Console abstraction
//
// Every exercise talks to the user through a `Console`, never through the
// process-wide stdin/stdout handles directly. Prompts and results go to
// `output`, diagnostics go to `errors`.

use crate::error_report::report_input_error;
use crate::values::parse_integers;
use crate::{InputError, InputResult};
use std::fmt::Display;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Shown after a rejected line before reading the next one
const RETRY_PROMPT: &str = "Intente de nuevo: ";

/// Settings that shape how the console validates input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Consecutive rejected lines allowed before a numeric read gives up
    pub max_attempts: u32,
    /// Colored diagnostics
    pub color: bool,
    /// Name printed in diagnostic headers
    pub source_name: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            max_attempts: 3,
            color: true,
            source_name: "<stdin>".to_string(),
        }
    }
}

pub struct Console<R, W, E> {
    input: R,
    output: W,
    errors: E,
    config: ConsoleConfig,
    lines_read: usize,
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, output: W, errors: E, mut config: ConsoleConfig) -> Self {
        config.max_attempts = config.max_attempts.max(1);
        Console {
            input,
            output,
            errors,
            config,
            lines_read: 0,
        }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Number of lines consumed from the input so far
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Print a prompt on its own line
    pub fn prompt(&mut self, message: &str) -> InputResult<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(())
    }

    /// Print one result line
    pub fn say(&mut self, line: impl Display) -> InputResult<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line without its terminator. `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
    pub fn read_line(&mut self) -> InputResult<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            debug!(lines_read = self.lines_read, "end of input");
            return Ok(None);
        }
        self.lines_read += 1;

        if bytes.ends_with(b"\n") {
            bytes.pop();
            if bytes.ends_with(b"\r") {
                bytes.pop();
            }
        }
        let buf = String::from_utf8_lossy(&bytes).into_owned();

        debug!(line = self.lines_read, len = buf.len(), "read line");
        Ok(Some(buf))
    }

    /// Read one line of free text. End of input reads as an empty line.
    pub fn read_text(&mut self) -> InputResult<String> {
        Ok(self.read_line()?.unwrap_or_default())
    }

    /// Read a single integer
    pub fn read_integer(&mut self) -> InputResult<i64> {
        let values = self.read_integers(1)?;
        Ok(values[0])
    }

    /// Read exactly `N` integers into a fixed-size array
    pub fn read_integer_array<const N: usize>(&mut self) -> InputResult<[i64; N]> {
        let values = self.read_integers(N)?;
        let mut array = [0; N];
        array.copy_from_slice(&values);
        Ok(array)
    }

    /// Read exactly `count` integers, spread over as many lines as needed.
    ///
    /// A line holding anything other than integers is reported on the error
    /// stream and discarded as a whole; the user is asked again until
    /// `max_attempts` consecutive lines have been rejected. Values beyond
    /// `count` on the completing line are dropped.
    pub fn read_integers(&mut self, count: usize) -> InputResult<Vec<i64>> {
        let mut values = Vec::with_capacity(count);
        let mut rejected = 0u32;

        while values.len() < count {
            let Some(line) = self.read_line()? else {
                return Err(InputError::UnexpectedEof {
                    expected: count,
                    found: values.len(),
                });
            };

            match parse_integers(&line) {
                Ok(parsed) => {
                    rejected = 0;
                    let room = count - values.len();
                    if parsed.len() > room {
                        warn!(
                            discarded = parsed.len() - room,
                            "more values than requested, ignoring the rest"
                        );
                    }
                    values.extend(parsed.into_iter().take(room));
                }
                Err(err) => {
                    rejected += 1;
                    warn!(line = self.lines_read, attempt = rejected, "{}", err);
                    report_input_error(
                        &mut self.errors,
                        &self.config.source_name,
                        &err,
                        self.config.color,
                    )?;

                    if rejected >= self.config.max_attempts {
                        return Err(InputError::TooManyAttempts { attempts: rejected });
                    }
                    self.prompt(RETRY_PROMPT)?;
                }
            }
        }

        debug!(count, "read integers");
        Ok(values)
    }

    /// Write a report for an error that ended a routine
    pub fn report(&mut self, error: &InputError) -> InputResult<()> {
        report_input_error(
            &mut self.errors,
            &self.config.source_name,
            error,
            self.config.color,
        )?;
        Ok(())
    }

    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.output, self.errors)
    }
}
