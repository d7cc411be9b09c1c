use super::*;
use crate::parser::test_utils::create_token;
use pretty_assertions::assert_eq;
use reckon_lexer::TokenType;

#[test]
fn test_unclosed_paren() {
    let err = rd("(2").unwrap_err();
    assert_eq!(
        located(&err),
        (ErrorKind::UnmatchedParen, Some(Position::EndOfInput))
    );
    assert_eq!(err.message, "expected ')'");

    // The stray `(` survives conversion and is rejected by the postfix evaluator
    let err = sy("(2").unwrap_err();
    assert_eq!(
        located(&err),
        (ErrorKind::InvalidToken, Some(Position::Offset(0)))
    );
}

#[test]
fn test_operator_where_operand_expected() {
    let err = rd("(2+/").unwrap_err();
    assert_eq!(
        located(&err),
        (ErrorKind::ExpectedSymbol, Some(Position::Offset(3)))
    );
    assert_eq!(err.message, "expected term");

    // `2 / + (` underflows at the division
    let err = sy("(2+/").unwrap_err();
    assert_eq!(
        located(&err),
        (ErrorKind::StackUnderflow, Some(Position::Offset(3)))
    );
}

#[test]
fn test_empty_group() {
    let err = rd("42*()").unwrap_err();
    assert_eq!(
        located(&err),
        (ErrorKind::ExpectedSymbol, Some(Position::Offset(4)))
    );
    assert_eq!(err.message, "expected sub expression");

    let err = sy("42*()").unwrap_err();
    assert_eq!(
        located(&err),
        (ErrorKind::StackUnderflow, Some(Position::Offset(2)))
    );
}

#[test]
fn test_trailing_input() {
    let err = rd("42*(1) (8)").unwrap_err();
    assert_eq!(
        located(&err),
        (ErrorKind::TrailingInput, Some(Position::Offset(7)))
    );
    assert_eq!(err.message, "expected end of input");

    let err = sy("42*(1) (8)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnbalancedOperands);
    assert_eq!(err.position, None);
}

#[test]
fn test_unclosed_multiline_group() {
    let source = "(2*2* 2* 2  * 2\t*2\n*2";
    let err = rd(source).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnmatchedParen);
    assert_eq!(err.offset(source.len()), Some(source.len()));
}

#[test]
fn test_lex_error_in_both_strategies() {
    let source = "(2*2* a* 2  * 2\t*2\n*2";
    for strategy in Strategy::ALL {
        let err = eval_with(strategy, source).unwrap_err();
        assert_eq!(
            located(&err),
            (ErrorKind::Lex, Some(Position::Offset(6))),
            "{strategy}"
        );
    }
}

#[test]
fn test_empty_input() {
    let err = rd("").unwrap_err();
    assert_eq!(
        located(&err),
        (ErrorKind::ExpectedSymbol, Some(Position::EndOfInput))
    );

    let err = sy("   ").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnbalancedOperands);
}

#[test]
fn test_stray_close_paren() {
    let err = rd("1 + 2)").unwrap_err();
    assert_eq!(
        located(&err),
        (ErrorKind::TrailingInput, Some(Position::Offset(5)))
    );

    let err = sy("1 + 2)").unwrap_err();
    assert_eq!(
        located(&err),
        (ErrorKind::UnmatchedParen, Some(Position::Offset(5)))
    );
}

#[test]
fn test_rpn_rejects_hand_built_parens() {
    let tokens = vec![
        create_token(TokenType::Literal(1.0), "1"),
        create_token(TokenType::CloseParen, ")"),
    ];
    let err = rpn::eval(&tokens).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidToken);
    assert_eq!(err.message, "invalid token ')'");
}
