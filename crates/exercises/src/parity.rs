// Parity check: is a number even or odd?

use input::{Console, InputResult};
use std::fmt;
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Classify `n` by its remainder against 2. Negative remainders count as odd.
    pub fn of(n: i64) -> Parity {
        if n % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    pub fn is_even(self) -> bool {
        self == Parity::Even
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => f.write_str("par"),
            Parity::Odd => f.write_str("impar"),
        }
    }
}

/// Ask for one integer and print whether it is even or odd
pub fn run<R: BufRead, W: Write, E: Write>(console: &mut Console<R, W, E>) -> InputResult<Parity> {
    console.prompt("Ingrese un numero: ")?;
    let number = console.read_integer()?;

    let parity = Parity::of(number);
    debug!(number, ?parity, "classified");

    console.say(format_args!("El numero: {} es {}", number, parity))?;
    Ok(parity)
}
