use crate::{InputError, InputResult};
use lexer::token::Token;

/// Parse every whitespace-separated integer in `line`.
///
/// The whole line is rejected on the first value that is not an integer or
/// does not fit in an `i64`. A blank line yields an empty vector.
pub fn parse_integers(line: &str) -> InputResult<Vec<i64>> {
    let mut values = Vec::new();

    for (token, span) in lexer::lex(line) {
        match token {
            Ok(Token::Int(n)) => values.push(n),
            Ok(Token::Word(word)) => {
                return Err(InputError::InvalidNumber {
                    line: line.to_string(),
                    span,
                    found: word,
                    reason: "is not an integer".to_string(),
                });
            }
            Err(()) => {
                return Err(InputError::InvalidNumber {
                    line: line.to_string(),
                    found: line[span.clone()].to_string(),
                    span,
                    reason: "does not fit in a 64-bit integer".to_string(),
                });
            }
        }
    }

    Ok(values)
}
