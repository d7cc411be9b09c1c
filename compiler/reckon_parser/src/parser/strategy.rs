use std::fmt;
use std::str::FromStr;

use log::debug;
use reckon_lexer::Token;
use thiserror::Error;

use super::{recursive_descent, rpn, shunting_yard};
use crate::error::Result;
use crate::operators::Value;

/// The two ways of evaluating an infix token sequence.
///
/// Both agree on fully parenthesized input. They differ on chains of
/// equal-precedence operators: recursive descent folds right-to-left at
/// every level, shunting-yard left-to-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    RecursiveDescent,
    ShuntingYardRpn,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::RecursiveDescent, Strategy::ShuntingYardRpn];

    pub fn evaluate(self, tokens: &[Token]) -> Result<Value> {
        debug!("evaluating {} tokens with {self}", tokens.len());
        match self {
            Strategy::RecursiveDescent => recursive_descent::parse(tokens),
            Strategy::ShuntingYardRpn => {
                let postfix = shunting_yard::to_postfix(tokens)?;
                rpn::eval(&postfix)
            }
        }
    }

    /// Short label used in reports
    pub fn caption(self) -> &'static str {
        match self {
            Strategy::RecursiveDescent => "RecursiveDescent:",
            Strategy::ShuntingYardRpn => "SY+RPN:",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::RecursiveDescent => write!(f, "recursive-descent"),
            Strategy::ShuntingYardRpn => write!(f, "shunting-yard"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy '{0}' (expected recursive-descent or shunting-yard)")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "recursive-descent" | "rd" => Ok(Strategy::RecursiveDescent),
            "shunting-yard" | "sy" | "rpn" => Ok(Strategy::ShuntingYardRpn),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}
