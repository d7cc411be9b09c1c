//! Reckon lexical analyzer
//!
//! Converts arithmetic expression text into a fully materialized sequence of
//! located tokens for the evaluators in `reckon_parser`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod lexer;
pub mod token;

// Re-export the main types for convenience
pub use error::LexError;
pub use lexer::{tokenize, Lexer};
pub use token::{Location, Token, TokenType};
