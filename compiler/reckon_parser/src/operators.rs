//! Operator table: precedence, associativity and evaluation of the five binary operators.
//!
//! The table is a pure function of the operator kind, so it is shared freely
//! between evaluations running on different threads.

use reckon_lexer::TokenType;
use thiserror::Error;

/// The numeric type every expression evaluates to
pub type Value = f64;

/// Precedence level; higher binds tighter. 0 is reserved for non-operators.
pub type Precedence = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

impl Operator {
    /// The operator a token stands for, if it is one
    pub fn from_token(token_type: &TokenType) -> Option<Self> {
        match token_type {
            TokenType::Plus => Some(Operator::Add),
            TokenType::Minus => Some(Operator::Subtract),
            TokenType::Multiply => Some(Operator::Multiply),
            TokenType::Divide => Some(Operator::Divide),
            TokenType::Exponentiate => Some(Operator::Exponentiate),
            TokenType::Literal(_) | TokenType::OpenParen | TokenType::CloseParen => None,
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
            Operator::Exponentiate => 3,
        }
    }

    /// Conventional associativity. Neither evaluator consults this: the
    /// recursive-descent grammar folds every level right-to-left and the
    /// shunting-yard conversion pops on equal precedence for every operator.
    pub fn associativity(self) -> Associativity {
        match self {
            Operator::Exponentiate => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Apply the operator with IEEE semantics; division by zero yields an
    /// infinity or NaN rather than an error.
    pub fn apply(self, a: Value, b: Value) -> Value {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide => a / b,
            Operator::Exponentiate => a.powf(b),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Exponentiate => '^',
        }
    }
}

/// `apply` was handed a token kind that is not a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("'{0}' is not a binary operator")]
pub struct UnknownOperator(pub TokenType);

/// Precedence of a token kind; 0 for literals and parentheses so that
/// comparisons against them always stop a popping loop.
pub fn precedence(token_type: &TokenType) -> Precedence {
    Operator::from_token(token_type).map_or(0, Operator::precedence)
}

/// Apply the operator a token kind stands for.
pub fn apply(token_type: &TokenType, a: Value, b: Value) -> Result<Value, UnknownOperator> {
    Operator::from_token(token_type)
        .map(|op| op.apply(a, b))
        .ok_or(UnknownOperator(*token_type))
}
