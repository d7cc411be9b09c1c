use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_reference_expressions() {
    let cases = [
        ("1 + ( 2 - 3 )", 0.0),
        ("( ( 1 + ( 2 - 3 ) + 5 ) / 2 ) ^ 2", 6.25),
        ("5 + ( ( 1 + 2 ) * 4 ) - 3", 14.0),
        ("3+4", 7.0),
        ("3+4*2", 11.0),
        ("3+(4*2)", 11.0),
        ("(3+4)*2", 14.0),
        ("2*2* 2* 2  * 2\t*2\n*2", 128.0),
        ("3^2^1", 9.0),
    ];

    for (source, expected) in cases {
        assert_eq!(rd(source), Ok(expected), "recursive descent: {source:?}");
        assert_eq!(sy(source), Ok(expected), "shunting yard: {source:?}");
    }
}

// `+ -` and `* /` chains fold right-to-left in the recursive-descent
// evaluator and left-to-right in shunting-yard.
#[test]
fn test_recursive_descent_folds_right_to_left() {
    assert_eq!(rd("5 - 2 - 1"), Ok(4.0));
    assert_eq!(rd("8 / 4 / 2"), Ok(4.0));
    assert_eq!(rd("1 - 1 + 1"), Ok(-1.0));

    assert_eq!(sy("5 - 2 - 1"), Ok(2.0));
    assert_eq!(sy("8 / 4 / 2"), Ok(1.0));
    assert_eq!(sy("1 - 1 + 1"), Ok(1.0));
}

// Chained `^` diverges between the strategies: shunting-yard pops on equal
// precedence, so it groups left-to-right.
#[test]
fn test_exponent_chains_diverge() {
    assert_eq!(rd("2^3^2"), Ok(512.0));
    assert_eq!(sy("2^3^2"), Ok(64.0));

    assert_eq!(rd("4^3^2"), Ok(262144.0));
    assert_eq!(sy("4^3^2"), Ok(4096.0));
}

#[test]
fn test_division_by_zero_is_a_value() {
    for strategy in Strategy::ALL {
        assert_eq!(eval_with(strategy, "1/0"), Ok(f64::INFINITY));
        assert_eq!(eval_with(strategy, "(0-1)/0"), Ok(f64::NEG_INFINITY));
        let nan = eval_with(strategy, "0/0").expect("NaN is a result, not an error");
        assert!(nan.is_nan());
    }
}

#[test]
fn test_literal_forms_evaluate() {
    assert_eq!(rd(".5 * 4"), Ok(2.0));
    assert_eq!(rd("1e2 + 2.5E1"), Ok(125.0));
    assert_eq!(sy("7. / 2"), Ok(3.5));
}

#[test]
fn test_fractional_exponent() {
    for strategy in Strategy::ALL {
        let root = eval_with(strategy, "9 ^ .5").unwrap();
        assert!((root - 3.0).abs() < 1e-12, "{strategy}: {root}");
    }
}
