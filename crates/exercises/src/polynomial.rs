// Polynomial calculator
//
// Reads the polynomial but does not interpret it yet: the input format and
// the operations to support have not been decided.

use input::{Console, InputResult};
use std::io::{BufRead, Write};
use tracing::debug;

pub fn run<R: BufRead, W: Write, E: Write>(console: &mut Console<R, W, E>) -> InputResult<()> {
    console.prompt("Ingrese su polinomio: ")?;
    let polynomial = console.read_text()?;
    debug!(%polynomial, "polynomial read, evaluation not implemented");
    Ok(())
}
