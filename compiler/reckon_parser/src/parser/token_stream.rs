use reckon_lexer::Token;

use crate::error::Position;

/// A cursor over a borrowed token sequence.
///
/// Cheap to copy, so parsers take it by value and hand back the advanced
/// cursor alongside their result, in the same shape as `nom` parsers.
#[derive(Debug, Clone, Copy)]
pub struct TokenSlice<'a> {
    /// The tokens being parsed
    tokens: &'a [Token],
    /// Index of the next unconsumed token
    position: usize,
    /// Number of enclosing open parentheses
    depth: usize,
}

impl<'a> TokenSlice<'a> {
    /// Create a new cursor at the start of `tokens`
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenSlice {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    /// Get the current token without advancing
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    /// A cursor one token further along (saturating at the end)
    pub fn advance(self) -> Self {
        TokenSlice {
            position: (self.position + 1).min(self.tokens.len()),
            ..self
        }
    }

    /// Number of enclosing open parentheses
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The same cursor one parenthesis level deeper
    pub fn nested(self) -> Self {
        TokenSlice {
            depth: self.depth + 1,
            ..self
        }
    }

    /// The same cursor one parenthesis level shallower
    pub fn unnested(self) -> Self {
        TokenSlice {
            depth: self.depth.saturating_sub(1),
            ..self
        }
    }

    /// Index of the next unconsumed token
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the remaining tokens as a slice
    pub fn remaining(&self) -> &'a [Token] {
        &self.tokens[self.position..]
    }

    /// Check if we're at the end of input
    pub fn is_empty(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Source position of the current token, for error reporting
    pub fn here(&self) -> Position {
        self.peek().map_or(Position::EndOfInput, Position::of)
    }
}

impl nom::InputLength for TokenSlice<'_> {
    fn input_len(&self) -> usize {
        self.tokens.len() - self.position
    }
}
