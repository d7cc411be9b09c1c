use reckon_lexer::{LexError, Token};
use thiserror::Error;

/// The category of an evaluation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum ErrorKind {
    /// Unrecognized character or malformed literal start
    Lex,
    /// A required grammar construct is absent at the current position
    ExpectedSymbol,
    /// A `(` without its `)`, or a `)` without its `(`
    UnmatchedParen,
    /// Tokens remain after a complete top-level expression
    TrailingInput,
    /// A token kind that is not valid where it appears
    InvalidToken,
    /// An operator found fewer than two operands on the stack
    StackUnderflow,
    /// The operand stack did not end with exactly one value
    UnbalancedOperands,
    /// Parentheses nested past the recursive-descent limit
    NestingTooDeep,
}

/// Where in the source an error was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum Position {
    /// 0-based byte offset into the source text
    Offset(usize),
    /// Past the last token
    EndOfInput,
}

impl Position {
    /// Resolve to a byte offset; end of input maps to the source length.
    pub fn resolve(self, source_len: usize) -> usize {
        match self {
            Position::Offset(offset) => offset,
            Position::EndOfInput => source_len,
        }
    }

    /// The position of a token's first character
    pub fn of(token: &Token) -> Self {
        Position::Offset(token.location.offset)
    }
}

/// A terminal failure of a single evaluation.
///
/// `position` is `None` for whole-expression defects such as an unbalanced
/// operand stack, where no single token is to blame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{message}")]
pub struct EvalError {
    pub kind: ErrorKind,
    pub message: String,
    pub position: Option<Position>,
}

/// Result type for lexing, parsing and evaluation
pub type Result<T> = std::result::Result<T, EvalError>;

impl EvalError {
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S, position: Option<Position>) -> Self {
        Self {
            kind,
            message: message.into(),
            position,
        }
    }

    pub fn expected_symbol(what: &str, position: Position) -> Self {
        Self::new(
            ErrorKind::ExpectedSymbol,
            format!("expected {what}"),
            Some(position),
        )
    }

    pub fn missing_close_paren(position: Position) -> Self {
        Self::new(ErrorKind::UnmatchedParen, "expected ')'", Some(position))
    }

    pub fn unmatched_close_paren(token: &Token) -> Self {
        Self::new(
            ErrorKind::UnmatchedParen,
            "unmatched ')'",
            Some(Position::of(token)),
        )
    }

    pub fn trailing_input(token: &Token) -> Self {
        Self::new(
            ErrorKind::TrailingInput,
            "expected end of input",
            Some(Position::of(token)),
        )
    }

    pub fn invalid_token(token: &Token) -> Self {
        Self::new(
            ErrorKind::InvalidToken,
            format!("invalid token '{}'", token.lexeme),
            Some(Position::of(token)),
        )
    }

    pub fn stack_underflow(token: Option<&Token>) -> Self {
        match token {
            Some(token) => Self::new(
                ErrorKind::StackUnderflow,
                format!("stack underrun at token '{}'", token.lexeme),
                Some(Position::of(token)),
            ),
            None => Self::new(ErrorKind::StackUnderflow, "stack underrun", None),
        }
    }

    pub fn nesting_too_deep(token: &Token) -> Self {
        Self::new(
            ErrorKind::NestingTooDeep,
            "expression nested too deeply",
            Some(Position::of(token)),
        )
    }

    pub fn unbalanced_operands() -> Self {
        Self::new(
            ErrorKind::UnbalancedOperands,
            "unbalanced operand stack",
            None,
        )
    }

    pub fn empty_operand_stack() -> Self {
        Self::new(
            ErrorKind::UnbalancedOperands,
            "operand stack is empty",
            None,
        )
    }

    /// Byte offset into a source of length `source_len`, if the error is located
    pub fn offset(&self, source_len: usize) -> Option<usize> {
        self.position.map(|p| p.resolve(source_len))
    }
}

impl From<LexError> for EvalError {
    fn from(err: LexError) -> Self {
        Self::new(
            ErrorKind::Lex,
            "invalid token",
            Some(Position::Offset(err.offset())),
        )
    }
}
