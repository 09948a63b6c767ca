//! Tokenizer for the arithmetic grammar, built with logos.

use std::ops::Range;

use logos::Logos;

use crate::EvalError;

/// Arithmetic token.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum Token {
    #[regex(r"[0-9]+(\.[0-9]*)?|\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    #[token("**")]
    StarStar,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("!")]
    Bang,

    #[token("sqrt")]
    Sqrt,

    /// Any other name. Always rejected by the parser.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
}

/// A token with its byte range in the source.
pub(crate) type Spanned = (Token, Range<usize>);

/// Tokenize `source`, failing on the first character outside the grammar.
pub(crate) fn lex(source: &str) -> Result<Vec<Spanned>, EvalError> {
    let mut tokens = Vec::new();
    for (result, span) in Token::lexer(source).spanned() {
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                // report the whole character, the error span may end mid-codepoint
                let found = source
                    .get(span.start..)
                    .and_then(|rest| rest.chars().next())
                    .map(String::from)
                    .unwrap_or_default();
                return Err(EvalError::UnexpectedToken {
                    found,
                    offset: span.start,
                });
            }
        }
    }
    Ok(tokens)
}
