use logos::Logos;
use std::fmt;

#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")] // Whitespace separates values, as a stream extraction would
pub enum Token {
    // Signed integers (ex: 42, -7, +3). Literals that do not fit in i64 become lexer errors.
    #[regex(r"[+-]?[0-9]+", |lex| lex.slice().parse::<i64>().ok(), priority = 3)]
    Int(i64),

    // Anything else up to the next whitespace (ex: "abc", "4.5", "12x")
    #[regex(r"[^ \t\r\n\f]+", |lex| lex.slice().to_string(), priority = 1)]
    Word(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Int(n) => write!(f, "{}", n),
            Token::Word(w) => write!(f, "{}", w),
        }
    }
}
