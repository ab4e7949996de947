// Vowel counter
//
// Only ASCII letters are considered. Accented vowels such as 'é' are letters
// but are not part of the vowel set, so they never count.

use input::{Console, InputResult};
use std::io::{BufRead, Write};
use tracing::debug;

/// Vowels compared after lower-casing
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

pub fn is_vowel(c: char) -> bool {
    c.is_ascii_alphabetic() && VOWELS.contains(&c.to_ascii_lowercase())
}

/// Count the vowels in `text`, ignoring case
pub fn count_vowels(text: &str) -> usize {
    text.chars().filter(|&c| is_vowel(c)).count()
}

/// Ask for a phrase and print how many vowels it has
pub fn run<R: BufRead, W: Write, E: Write>(console: &mut Console<R, W, E>) -> InputResult<usize> {
    console.prompt("Ingrese su frase: ")?;
    let phrase = console.read_text()?;

    let total = count_vowels(&phrase);
    debug!(chars = phrase.chars().count(), total, "counted vowels");

    console.say(format_args!("El total de vocales es: {}", total))?;
    Ok(total)
}
