// Extremum scan over a fixed sequence of ten integers
//
// Both candidates start at index 0 and only move on a strict improvement,
// so ties always resolve to the earliest index.

use input::{Console, InputResult};
use std::io::{BufRead, Write};
use tracing::debug;

/// Length of every number sequence
pub const SEQUENCE_LEN: usize = 10;

/// Exactly `SEQUENCE_LEN` integers, in input order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSequence([i64; SEQUENCE_LEN]);

/// Position and value of the largest and smallest elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extrema {
    pub max_index: usize,
    pub max_value: i64,
    pub min_index: usize,
    pub min_value: i64,
}

impl NumberSequence {
    pub fn new(values: [i64; SEQUENCE_LEN]) -> Self {
        NumberSequence(values)
    }

    /// Linear scan for the first maximum and the first minimum
    pub fn extrema(&self) -> Extrema {
        let values = &self.0;
        let mut max_index = 0;
        let mut min_index = 0;

        for (i, &value) in values.iter().enumerate().skip(1) {
            if value > values[max_index] {
                max_index = i;
            }
            if value < values[min_index] {
                min_index = i;
            }
        }

        Extrema {
            max_index,
            max_value: values[max_index],
            min_index,
            min_value: values[min_index],
        }
    }
}

impl From<[i64; SEQUENCE_LEN]> for NumberSequence {
    fn from(values: [i64; SEQUENCE_LEN]) -> Self {
        NumberSequence::new(values)
    }
}

/// Ask for ten integers and print the largest and smallest
pub fn run<R: BufRead, W: Write, E: Write>(console: &mut Console<R, W, E>) -> InputResult<Extrema> {
    console.prompt("Ingrese sus numeros: ")?;
    let sequence = NumberSequence::new(console.read_integer_array()?);

    let extrema = sequence.extrema();
    debug!(
        max_index = extrema.max_index,
        min_index = extrema.min_index,
        "scanned sequence"
    );

    console.say(format_args!("El elemento mas grande es: {}", extrema.max_value))?;
    console.say(format_args!("El elemento mas pequeno es: {}", extrema.min_value))?;
    Ok(extrema)
}
