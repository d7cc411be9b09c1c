//! Recursive-descent evaluation: parses and folds values in a single pass.
//!
//! ```text
//! expression     := term EOF
//! term           := factor ( ('+'|'-') term )?
//! factor         := exponentiation ( ('*'|'/') factor )?
//! exponentiation := simple ( '^' exponentiation )?
//! simple         := literal | '(' term ')'
//! ```
//!
//! Every level folds right-to-left: `5 - 2 - 1` is `5 - (2 - 1) = 4` and
//! `8 / 4 / 2` is `8 / (4 / 2) = 4`. A same-level chain is collected and
//! folded in a loop, so only parentheses grow the call stack, and those are
//! capped at [`MAX_NESTING`] levels.

use log::trace;
use nom::{Err as NomErr, IResult, InputLength};
use reckon_lexer::{Token, TokenType};

use super::token_stream::TokenSlice;
use crate::error::{EvalError, Result};
use crate::operators::{Operator, Value};

/// Deepest parenthesis nesting accepted before failing with
/// [`ErrorKind::NestingTooDeep`](crate::error::ErrorKind)
pub const MAX_NESTING: usize = 128;

type ParseResult<'a> = IResult<TokenSlice<'a>, Value, EvalError>;
type Rule<'a> = fn(TokenSlice<'a>) -> ParseResult<'a>;

/// Evaluate an infix token sequence.
pub fn parse(tokens: &[Token]) -> Result<Value> {
    let input = TokenSlice::new(tokens);
    let (rest, value) = expect(term, input, "expression").map_err(into_eval_error)?;
    if let Some(token) = rest.peek() {
        return Err(EvalError::trailing_input(token));
    }
    trace!("recursive descent result {value}");
    Ok(value)
}

fn into_eval_error(err: NomErr<EvalError>) -> EvalError {
    match err {
        NomErr::Error(e) | NomErr::Failure(e) => e,
        NomErr::Incomplete(_) => {
            EvalError::expected_symbol("expression", crate::error::Position::EndOfInput)
        }
    }
}

/// Run `rule` and fail at the current token unless it consumed something.
fn expect<'a>(rule: Rule<'a>, input: TokenSlice<'a>, what: &str) -> ParseResult<'a> {
    let (rest, value) = rule(input)?;
    if rest.input_len() == input.input_len() {
        return Err(NomErr::Failure(EvalError::expected_symbol(
            what,
            input.here(),
        )));
    }
    Ok((rest, value))
}

/// `operand ( op operand )*` over `operators`, folded right-to-left.
fn fold_right<'a>(
    input: TokenSlice<'a>,
    operand: Rule<'a>,
    operators: &[Operator],
    what: &str,
) -> ParseResult<'a> {
    let (mut input, mut accum) = operand(input)?;
    let mut pending: Vec<(Value, Operator)> = Vec::new();

    while let Some(op) = input
        .peek()
        .and_then(|t| Operator::from_token(&t.token_type))
        .filter(|op| operators.contains(op))
    {
        let (rest, rhs) = expect(operand, input.advance(), what)?;
        pending.push((accum, op));
        accum = rhs;
        input = rest;
    }

    for (lhs, op) in pending.into_iter().rev() {
        accum = op.apply(lhs, accum);
    }
    Ok((input, accum))
}

fn term(input: TokenSlice<'_>) -> ParseResult<'_> {
    fold_right(input, factor, &[Operator::Add, Operator::Subtract], "term")
}

fn factor(input: TokenSlice<'_>) -> ParseResult<'_> {
    fold_right(
        input,
        exponentiation,
        &[Operator::Multiply, Operator::Divide],
        "factor",
    )
}

fn exponentiation(input: TokenSlice<'_>) -> ParseResult<'_> {
    fold_right(input, simple, &[Operator::Exponentiate], "exponentiation")
}

/// A literal or a parenthesized term. On anything else it consumes nothing
/// and returns NaN; the caller's `expect` turns that into an error.
fn simple(input: TokenSlice<'_>) -> ParseResult<'_> {
    let Some(token) = input.peek() else {
        return Ok((input, Value::NAN));
    };
    match token.token_type {
        TokenType::Literal(value) => Ok((input.advance(), value)),
        TokenType::OpenParen if input.depth() >= MAX_NESTING => {
            Err(NomErr::Failure(EvalError::nesting_too_deep(token)))
        }
        TokenType::OpenParen => {
            let (rest, value) = expect(term, input.advance().nested(), "sub expression")?;
            match rest.peek() {
                Some(close) if close.token_type == TokenType::CloseParen => {
                    Ok((rest.advance().unnested(), value))
                }
                _ => Err(NomErr::Failure(EvalError::missing_close_paren(rest.here()))),
            }
        }
        _ => Ok((input, Value::NAN)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, Position};
    use crate::parser::test_utils::tokenize;
    use pretty_assertions::assert_eq;

    fn eval(source: &str) -> Result<Value> {
        parse(&tokenize(source))
    }

    #[test]
    fn test_literal() {
        assert_eq!(eval("42"), Ok(42.0));
        assert_eq!(eval("((2.5))"), Ok(2.5));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("3+4*2"), Ok(11.0));
        assert_eq!(eval("(3+4)*2"), Ok(14.0));
        assert_eq!(eval("2*3^2"), Ok(18.0));
    }

    #[test]
    fn test_empty_input_expects_expression() {
        let err = eval("").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExpectedSymbol);
        assert_eq!(err.message, "expected expression");
        assert_eq!(err.position, Some(Position::EndOfInput));
    }

    #[test]
    fn test_nan_sentinel_never_escapes() {
        // `)` yields the sentinel from `simple`; the guard must fire
        let err = eval(")").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExpectedSymbol);
        assert_eq!(err.position, Some(Position::Offset(0)));
    }

    #[test]
    fn test_missing_right_operand() {
        let err = eval("1 *").unwrap_err();
        assert_eq!(err.message, "expected factor");
        assert_eq!(err.position, Some(Position::EndOfInput));

        let err = eval("2 ^ )").unwrap_err();
        assert_eq!(err.message, "expected exponentiation");
        assert_eq!(err.position, Some(Position::Offset(4)));
    }

    #[test]
    fn test_long_chains_do_not_recurse() {
        let sum = vec!["1"; 50_000].join("+");
        assert_eq!(eval(&sum), Ok(50_000.0));

        // still right-to-left: 1 - (1 - (1 - ...)) over an even count is 0
        let alternating = vec!["1"; 50_000].join("-");
        assert_eq!(eval(&alternating), Ok(0.0));

        let powers = vec!["1"; 20_000].join("^");
        assert_eq!(eval(&powers), Ok(1.0));
    }

    #[test]
    fn test_nesting_limit() {
        let at_limit = format!("{}1{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
        assert_eq!(eval(&at_limit), Ok(1.0));

        let deep = format!("{}1{}", "(".repeat(5_000), ")".repeat(5_000));
        let err = eval(&deep).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NestingTooDeep);
        assert_eq!(err.message, "expression nested too deeply");
        assert_eq!(err.position, Some(Position::Offset(MAX_NESTING)));
    }

    #[test]
    fn test_sibling_groups_do_not_accumulate_depth() {
        let siblings = vec!["(1)"; 1_000].join("+");
        assert_eq!(eval(&siblings), Ok(1_000.0));
    }
}
