//! Postfix (RPN) evaluation with an operand stack.

use log::trace;
use reckon_lexer::{tokenize, Token, TokenType};

use crate::error::{EvalError, Result};
use crate::operators::{Operator, Value};

/// Evaluate a postfix token sequence.
///
/// For each operator the most recently pushed value is the right operand and
/// the one beneath it the left, so `8 2 /` is `4`.
pub fn eval(tokens: &[Token]) -> Result<Value> {
    let mut stack: Vec<Value> = Vec::new();

    for token in tokens {
        match token.token_type {
            TokenType::Literal(value) => stack.push(value),
            TokenType::OpenParen | TokenType::CloseParen => {
                return Err(EvalError::invalid_token(token));
            }
            kind => {
                let op = Operator::from_token(&kind)
                    .ok_or_else(|| EvalError::invalid_token(token))?;
                let b = stack
                    .pop()
                    .ok_or_else(|| EvalError::stack_underflow(Some(token)))?;
                let a = stack
                    .pop()
                    .ok_or_else(|| EvalError::stack_underflow(Some(token)))?;
                let result = op.apply(a, b);
                trace!("{a} {} {b} = {result}", op.symbol());
                stack.push(result);
            }
        }
    }

    if stack.len() > 1 {
        return Err(EvalError::unbalanced_operands());
    }
    stack.pop().ok_or_else(EvalError::empty_operand_stack)
}

/// Tokenize postfix text such as `"3 2 - 1 +"` and evaluate it.
pub fn eval_str(text: &str) -> Result<Value> {
    let tokens = tokenize(text)?;
    eval(&tokens)
}
