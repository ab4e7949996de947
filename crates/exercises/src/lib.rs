// Console exercises
//
// Four independent routines. Each one has a pure core that can be called
// directly and a `run` function that drives it through a `Console`.

pub mod extremum;
pub mod parity;
pub mod polynomial;
pub mod vowels;

pub use extremum::{Extrema, NumberSequence, SEQUENCE_LEN};
pub use parity::Parity;
pub use vowels::count_vowels;

use input::{Console, InputResult};
use std::fmt;
use std::io::{BufRead, Write};
use tracing::info;

/// The routines the dispatcher can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Exercise {
    Parity,
    Extremes,
    #[default]
    Vowels,
    Polynomial,
}

impl Exercise {
    pub const ALL: [Exercise; 4] = [
        Exercise::Parity,
        Exercise::Extremes,
        Exercise::Vowels,
        Exercise::Polynomial,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Exercise::Parity => "parity",
            Exercise::Extremes => "extremes",
            Exercise::Vowels => "vowels",
            Exercise::Polynomial => "polynomial",
        }
    }

    /// Run this exercise once against `console`
    pub fn run<R: BufRead, W: Write, E: Write>(
        self,
        console: &mut Console<R, W, E>,
    ) -> InputResult<()> {
        info!(exercise = self.name(), "running exercise");
        match self {
            Exercise::Parity => parity::run(console).map(|_| ()),
            Exercise::Extremes => extremum::run(console).map(|_| ()),
            Exercise::Vowels => vowels::run(console).map(|_| ()),
            Exercise::Polynomial => polynomial::run(console),
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
