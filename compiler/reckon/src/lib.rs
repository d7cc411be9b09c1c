//! Reckon driver library
//!
//! Runs the evaluators from `reckon_parser` over whole expressions and
//! captures each outcome as a serializable report. The `reckon` binary
//! prints these as text, with [`report::render_snippet`] for errors, or as
//! JSON.

pub mod report;

use reckon_lexer::tokenize;
use reckon_parser::parser::{format_postfix, rpn, to_postfix};
use reckon_parser::{evaluate, ErrorKind, EvalError, Strategy, Value};
use serde::Serialize;

/// A located error, ready for display or JSON output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
    /// Byte offset into the expression; absent for whole-expression defects
    pub offset: Option<usize>,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl ErrorReport {
    pub fn new(source: &str, err: &EvalError) -> Self {
        let offset = err.offset(source.len());
        let line_col = offset.map(|o| report::line_col(source, o));
        Self {
            kind: err.kind,
            message: err.message.clone(),
            offset,
            line: line_col.map(|(line, _)| line),
            column: line_col.map(|(_, column)| column),
        }
    }
}

/// Outcome of evaluating one expression with one strategy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub expression: String,
    pub strategy: String,
    /// JSON has no infinities or NaN; those serialize as `null` here and
    /// are spelled out in `display`.
    pub result: Option<Value>,
    pub display: Option<String>,
    pub error: Option<ErrorReport>,
}

impl EvaluationReport {
    fn from_result(source: &str, strategy: String, result: Result<Value, EvalError>) -> Self {
        match result {
            Ok(value) => Self {
                expression: source.to_string(),
                strategy,
                result: Some(value),
                display: Some(value.to_string()),
                error: None,
            },
            Err(err) => Self {
                expression: source.to_string(),
                strategy,
                result: None,
                display: None,
                error: Some(ErrorReport::new(source, &err)),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Evaluate an infix expression and capture the outcome.
pub fn analyze_expression(source: &str, strategy: Strategy) -> EvaluationReport {
    EvaluationReport::from_result(source, strategy.to_string(), evaluate(source, strategy))
}

/// Evaluate a postfix expression and capture the outcome.
pub fn analyze_postfix(source: &str) -> EvaluationReport {
    EvaluationReport::from_result(source, "rpn".to_string(), rpn::eval_str(source))
}

/// The shunting-yard conversion of an infix expression, as space-separated lexemes.
pub fn convert_to_postfix(source: &str) -> Result<String, EvalError> {
    let tokens = tokenize(source)?;
    Ok(format_postfix(&to_postfix(&tokens)?))
}
