//! Evaluators for tokenized arithmetic expressions.
//!
//! Recursive descent evaluates infix tokens directly. Shunting-yard converts
//! them to postfix order, which the RPN evaluator then reduces. Both share
//! the operator table in [`crate::operators`].

pub mod recursive_descent;
pub mod rpn;
pub mod shunting_yard;
pub mod strategy;
pub mod token_stream;

#[cfg(test)]
pub(crate) mod test_utils;

#[cfg(test)]
mod tests;

pub use recursive_descent::parse;
pub use shunting_yard::{format_postfix, to_postfix};
pub use strategy::{Strategy, UnknownStrategy};
pub use token_stream::TokenSlice;

use reckon_lexer::tokenize;

use crate::error::Result;
use crate::operators::Value;

/// Tokenize `source` and evaluate it with `strategy`.
pub fn evaluate(source: &str, strategy: Strategy) -> Result<Value> {
    let tokens = tokenize(source)?;
    strategy.evaluate(&tokens)
}
