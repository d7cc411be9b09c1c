use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;

/// Represents a token's location in the source text.
///
/// This struct tracks the position of a token in the source text, including
/// line and column numbers (1-based) and the byte offset (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// The 1-based line number in the source text
    pub line: usize,
    /// The 1-based column number in the source text, counted in characters
    pub column: usize,
    /// The 0-based byte offset from the start of the source
    pub offset: usize,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

/// The kind of a token produced by the lexer.
///
/// Only `Literal` carries a value; every other kind is a single fixed character.
#[derive(Debug, Clone, Copy)]
pub enum TokenType {
    /// A floating-point literal such as `42`, `3.5`, `.5` or `1e-3`
    Literal(f64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Exponentiate,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
}

impl TokenType {
    /// The numeric value of a literal, `None` for every other kind.
    pub fn value(&self) -> Option<f64> {
        match self {
            TokenType::Literal(value) => Some(*value),
            _ => None,
        }
    }

    /// The fixed spelling of a punctuation kind. Literals have no fixed spelling.
    pub fn symbol(&self) -> Option<char> {
        match self {
            TokenType::Literal(_) => None,
            TokenType::Plus => Some('+'),
            TokenType::Minus => Some('-'),
            TokenType::Multiply => Some('*'),
            TokenType::Divide => Some('/'),
            TokenType::Exponentiate => Some('^'),
            TokenType::OpenParen => Some('('),
            TokenType::CloseParen => Some(')'),
        }
    }

    /// Returns true for the five binary operator kinds
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenType::Plus
                | TokenType::Minus
                | TokenType::Multiply
                | TokenType::Divide
                | TokenType::Exponentiate
        )
    }
}

// Literals compare by bit pattern so that token equality stays reflexive.
impl PartialEq for TokenType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TokenType::Literal(a), TokenType::Literal(b)) => a.to_bits() == b.to_bits(),
            (TokenType::Plus, TokenType::Plus) => true,
            (TokenType::Minus, TokenType::Minus) => true,
            (TokenType::Multiply, TokenType::Multiply) => true,
            (TokenType::Divide, TokenType::Divide) => true,
            (TokenType::Exponentiate, TokenType::Exponentiate) => true,
            (TokenType::OpenParen, TokenType::OpenParen) => true,
            (TokenType::CloseParen, TokenType::CloseParen) => true,
            _ => false,
        }
    }
}

impl Eq for TokenType {}

impl Hash for TokenType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        if let TokenType::Literal(value) = self {
            value.to_bits().hash(state);
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.symbol()) {
            (TokenType::Literal(value), _) => write!(f, "{value}"),
            (_, Some(symbol)) => write!(f, "{symbol}"),
            (_, None) => Ok(()),
        }
    }
}

/// A token in the source text: its kind, the exact text consumed, and where it starts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The kind of the token
    pub token_type: TokenType,
    /// The original source text of the token
    pub lexeme: String,
    /// The location of the token's first character
    pub location: Location,
}

impl Token {
    /// Creates a new token
    pub fn new<S: Into<String>>(token_type: TokenType, lexeme: S, location: Location) -> Self {
        Self {
            token_type,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// The byte range of this token in the source it was lexed from
    pub fn span(&self) -> Range<usize> {
        self.location.offset..self.location.offset + self.lexeme.len()
    }

    /// Returns true if this token is a binary operator
    pub fn is_operator(&self) -> bool {
        self.token_type.is_operator()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.lexeme, self.location)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.line, self.column, self.offset)
    }
}
