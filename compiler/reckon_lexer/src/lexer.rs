//! Lexer for arithmetic expressions built on the 'logos' crate.
//! Recognizes the five binary operators, parentheses, and floating-point literals.

use crate::error::LexError;
use crate::token::{Location, Token, TokenType};
use logos::Logos;

#[cfg(feature = "logging")]
use log::{debug, trace};

/// Raw token type used by the logos lexer
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f\v]+")]
pub enum RawToken {
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Multiply,
    #[token("/")]
    Divide,
    #[token("^")]
    Exponentiate,

    // Mantissa only; a complete exponent is taken by the callback so that
    // a dangling `e` is left for the next token instead of failing the literal.
    #[regex(r"[0-9]+\.?[0-9]*", literal)]
    #[regex(r"\.[0-9]+", literal)]
    Literal(f64),
}

fn literal(lex: &mut logos::Lexer<RawToken>) -> Option<f64> {
    let exponent = exponent_len(lex.remainder());
    lex.bump(exponent);
    lex.slice().parse().ok()
}

/// Length of a complete `e[+-]digits` suffix at the start of `rest`, or 0.
fn exponent_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return 0;
    }
    let mut len = 1;
    if matches!(bytes.get(len), Some(b'+' | b'-')) {
        len += 1;
    }
    let digits = bytes[len..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        0
    } else {
        len + digits
    }
}

impl From<RawToken> for TokenType {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::OpenParen => TokenType::OpenParen,
            RawToken::CloseParen => TokenType::CloseParen,
            RawToken::Plus => TokenType::Plus,
            RawToken::Minus => TokenType::Minus,
            RawToken::Multiply => TokenType::Multiply,
            RawToken::Divide => TokenType::Divide,
            RawToken::Exponentiate => TokenType::Exponentiate,
            RawToken::Literal(value) => TokenType::Literal(value),
        }
    }
}

/// Expression lexer.
///
/// Yields tokens in source order. The first invalid character ends the
/// stream: it is reported once as a [`LexError`] and nothing follows it.
pub struct Lexer<'source> {
    /// The logos lexer instance
    logos_lexer: logos::Lexer<'source, RawToken>,
    /// The text being lexed
    source: &'source str,
    /// Line, column and offset of everything consumed so far
    location: Location,
    /// Set once an error has been yielded
    failed: bool,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given source text
    pub fn new(source: &'source str) -> Self {
        Self {
            logos_lexer: RawToken::lexer(source),
            source,
            location: Location::default(),
            failed: false,
        }
    }

    /// Move the tracked location forward to `offset`, counting lines and columns
    fn advance_to(&mut self, offset: usize) {
        for c in self.source[self.location.offset..offset].chars() {
            if c == '\n' {
                self.location.line += 1;
                self.location.column = 1;
            } else {
                self.location.column += 1;
            }
        }
        self.location.offset = offset;
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let raw = self.logos_lexer.next()?;
        let span = self.logos_lexer.span();
        self.advance_to(span.start);

        match raw {
            Ok(raw) => {
                let token = Token::new(raw.into(), self.logos_lexer.slice(), self.location);
                #[cfg(feature = "logging")]
                trace!("lexed {:?} at {}", token.token_type, token.location);
                self.advance_to(span.end);
                Some(Ok(token))
            }
            Err(()) => {
                self.failed = true;
                let found = self.source[span.start..].chars().next().unwrap_or('\0');
                #[cfg(feature = "logging")]
                debug!("invalid character {found:?} at {}", self.location);
                Some(Err(LexError {
                    found,
                    location: self.location,
                }))
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Tokenize a whole expression, stopping at the first invalid character.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).collect()
}
