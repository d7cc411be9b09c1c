use super::*;
use crate::error::{ErrorKind, EvalError, Position};
use crate::operators::Value;

mod diagnostics;
mod expressions;

fn eval_with(strategy: Strategy, source: &str) -> Result<Value> {
    crate::tests::init_test_logger();
    evaluate(source, strategy)
}

fn rd(source: &str) -> Result<Value> {
    eval_with(Strategy::RecursiveDescent, source)
}

fn sy(source: &str) -> Result<Value> {
    eval_with(Strategy::ShuntingYardRpn, source)
}

fn located(err: &EvalError) -> (ErrorKind, Option<Position>) {
    (err.kind, err.position)
}
