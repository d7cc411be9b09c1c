//! Reckon expression evaluators
//!
//! Operator metadata, recursive-descent evaluation, shunting-yard conversion
//! and postfix evaluation over tokens produced by `reckon_lexer`.

pub mod error;
pub mod operators;
pub mod parser;

pub use error::{ErrorKind, EvalError, Position, Result};
pub use operators::{Operator, Value};
pub use parser::{evaluate, Strategy};
