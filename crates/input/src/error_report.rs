// Error reporting with Ariadne
//
// Rejected input lines are shown back to the user with the offending value
// underlined. Reports are written to a caller-provided stream so tests can
// capture them.

use crate::InputError;
use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use std::io::{self, Write};
use std::ops::Range;

/// Write an Ariadne report for `error` into `out`
pub fn report_input_error<W: Write>(
    out: &mut W,
    source_name: &str,
    error: &InputError,
    color: bool,
) -> io::Result<()> {
    let config = Config::default().with_color(color);

    match error {
        InputError::InvalidNumber { line, span, found, reason } => {
            Report::build(ReportKind::Error, source_name, span.start)
                .with_config(config)
                .with_code(error.code())
                .with_message("Invalid number")
                .with_label(
                    Label::new((source_name, span.clone()))
                        .with_message(format!("'{}' {}", found, reason))
                        .with_color(Color::Red),
                )
                .with_help("Enter whole numbers separated by spaces, e.g. 3 -1 42")
                .finish()
                .write((source_name, Source::from(line.as_str())), &mut *out)
        }

        other => Report::<(&str, Range<usize>)>::build(ReportKind::Error, source_name, 0)
            .with_config(config)
            .with_code(other.code())
            .with_message(other.to_string())
            .finish()
            .write((source_name, Source::from("")), &mut *out),
    }
}
