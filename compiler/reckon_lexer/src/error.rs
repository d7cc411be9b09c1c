use thiserror::Error;

use crate::token::Location;

/// Raised when a character is neither whitespace, an operator, a parenthesis,
/// nor the start of a floating-point literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid token '{found}' at {}:{}", .location.line, .location.column)]
pub struct LexError {
    /// The offending character
    pub found: char,
    /// Where the offending character starts
    pub location: Location,
}

impl LexError {
    /// The 0-based byte offset of the offending character
    pub fn offset(&self) -> usize {
        self.location.offset
    }
}
