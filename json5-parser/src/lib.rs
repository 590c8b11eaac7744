// SPDX-License-Identifier: Apache-2.0

//! JSON5 text to an in-memory value tree, in two passes.
//!
//! The [`Lexer`] turns the input into a flat list of [`Token`]s; the
//! [`Parser`] walks that list with one token of lookahead and builds a
//! [`Value`]. Object members keep the order in which their keys first
//! appeared.
//!
//! ```
//! use json5_parser::{parse, Value};
//!
//! let value = parse("{unquoted: 'and you can quote me on that', hex: 0xFF, list: [1, 2,],}")?;
//! assert_eq!(value["unquoted"].as_str(), Some("and you can quote me on that"));
//! assert_eq!(value["hex"], Value::Number(255.0));
//! assert_eq!(value["list"].as_array().map(Vec::len), Some(2));
//! # Ok::<(), json5_parser::Error>(())
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod escape_processor;
mod json_number;
mod lexer;
mod parse_error;
mod parser;
mod token;
mod value;

pub use lexer::Lexer;
pub use parse_error::{Error, LexErrKind, LexError, ParseErrKind, ParseError};
pub use parser::{Parser, ParserConfig, DEFAULT_MAX_DEPTH};
pub use token::{Token, TokenKind};
pub use value::{Map, Value};

/// Splits `input` into tokens, dropping whitespace and comments. The last
/// token is always [`TokenKind::Eof`].
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::new(input).tokenize()
}

/// Like [`tokenize`], but comments come through as [`TokenKind::Comment`].
pub fn tokenize_with_comments(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::new(input).with_comments().tokenize()
}

/// Builds a value from tokens produced by [`tokenize`] or by hand.
pub fn parse_tokens(tokens: &[Token<'_>]) -> Result<Value, ParseError> {
    Parser::new(tokens).parse()
}

/// Parses a complete JSON5 document.
pub fn parse(input: &str) -> Result<Value, Error> {
    parse_with_config(input, &ParserConfig::default())
}

/// Like [`parse`], with explicit parser settings such as the nesting limit.
pub fn parse_with_config(input: &str, config: &ParserConfig) -> Result<Value, Error> {
    let tokens = tokenize(input)?;
    let value = Parser::with_config(&tokens, *config).parse()?;
    Ok(value)
}
