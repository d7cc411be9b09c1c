//! Shunting-yard conversion from infix to postfix (RPN) order.
//!
//! An incoming operator pops every stacked operator of greater *or equal*
//! precedence, for `^` as well. Chained exponentiation therefore groups
//! left-to-right here (`2^3^2` becomes `2 3 ^ 2 ^`, i.e. 64) while the
//! recursive-descent evaluator groups it right-to-left (512).

use log::{debug, trace};
use reckon_lexer::{Token, TokenType};

use crate::error::{EvalError, Result};
use crate::operators::precedence;

/// Reorder infix tokens into postfix order.
///
/// An unclosed `(` is not reported here; it is flushed to the output with the
/// remaining operators and rejected by the postfix evaluator. A `)` with no
/// matching `(` is reported as [`ErrorKind::UnmatchedParen`](crate::error::ErrorKind).
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<&Token> = Vec::new();

    for token in tokens {
        match token.token_type {
            TokenType::Literal(_) => output.push(token.clone()),
            TokenType::Plus
            | TokenType::Minus
            | TokenType::Multiply
            | TokenType::Divide
            | TokenType::Exponentiate => {
                let incoming = precedence(&token.token_type);
                while let Some(top) = stack.pop() {
                    if precedence(&top.token_type) >= incoming {
                        output.push(top.clone());
                    } else {
                        stack.push(top);
                        break;
                    }
                }
                stack.push(token);
            }
            TokenType::OpenParen => stack.push(token),
            TokenType::CloseParen => loop {
                match stack.pop() {
                    Some(top) if top.token_type == TokenType::OpenParen => break,
                    Some(top) => output.push(top.clone()),
                    None => {
                        debug!("unmatched ')' at {}", token.location);
                        return Err(EvalError::unmatched_close_paren(token));
                    }
                }
            },
        }
    }

    output.extend(stack.into_iter().rev().cloned());
    trace!("postfix: {}", format_postfix(&output));
    Ok(output)
}

/// Space-separated lexemes, e.g. `1 2 3 - +`.
pub fn format_postfix(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.lexeme.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
