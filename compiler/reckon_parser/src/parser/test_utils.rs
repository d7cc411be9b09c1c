//! Test utilities for the evaluators

use reckon_lexer::{Location, Token, TokenType};

/// Creates a token with default location for testing
pub fn create_token(token_type: TokenType, lexeme: &str) -> Token {
    Token::new(token_type, lexeme, Location::default())
}

/// Tokenizes a string for testing, panicking on invalid input
pub fn tokenize(input: &str) -> Vec<Token> {
    reckon_lexer::tokenize(input).unwrap_or_else(|e| panic!("failed to tokenize {input:?}: {e}"))
}
