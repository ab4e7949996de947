pub mod token;

use logos::Logos;
use std::ops::Range;
use token::Token;

/// A lexed token (or lexer error) together with its byte range in the line
pub type Spanned = (Result<Token, ()>, Range<usize>);

/// Tokenize one line of console input, keeping spans for error reports
pub fn lex(source: &str) -> Vec<Spanned> {
    Token::lexer(source).spanned().collect()
}

#[cfg(test)]
mod tests;
