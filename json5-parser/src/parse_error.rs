// SPDX-License-Identifier: Apache-2.0

use crate::token::{Token, TokenKind};

/// What went wrong while scanning characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrKind {
    /// A character that starts no token, including a lone `/`.
    InvalidCharacter,
    /// A number literal broke its sub-grammar (misplaced `.`, sign or exponent,
    /// missing digits, empty `0x`).
    InvalidNumber,
    /// End of input or a raw line break before the closing quote.
    UnterminatedString,
    /// `/*` without a matching `*/`.
    UnterminatedComment,
    /// A backslash followed by a character outside the escape table.
    InvalidEscape,
    /// `\u` not followed by four hex digits.
    InvalidUnicodeEscape,
    /// `\u` escapes forming a lone or mismatched UTF-16 surrogate.
    InvalidUnicodeCodepoint,
}

impl LexErrKind {
    const fn describe(&self) -> &'static str {
        match self {
            LexErrKind::InvalidCharacter => "invalid character",
            LexErrKind::InvalidNumber => "invalid number",
            LexErrKind::UnterminatedString => "unterminated string",
            LexErrKind::UnterminatedComment => "unterminated comment",
            LexErrKind::InvalidEscape => "invalid escape sequence",
            LexErrKind::InvalidUnicodeEscape => "invalid unicode escape",
            LexErrKind::InvalidUnicodeCodepoint => "invalid unicode codepoint",
        }
    }
}

/// Error raised by the [`Lexer`](crate::Lexer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    kind: LexErrKind,
    character: Option<char>,
    position: usize,
}

impl LexError {
    /// `character` is `None` when the input ended.
    pub fn new<T>(kind: LexErrKind, character: Option<char>, position: usize) -> Result<T, Self> {
        Err(Self {
            kind,
            character,
            position,
        })
    }

    pub fn kind(&self) -> LexErrKind {
        self.kind
    }

    /// The offending character, `None` at end of input.
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// Byte offset of the offending character.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl core::fmt::Display for LexError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.character {
            Some(c) => write!(
                f,
                "{}: unexpected {:?} at position {}",
                self.kind.describe(),
                c,
                self.position
            ),
            None => write!(
                f,
                "{}: unexpected end of input at position {}",
                self.kind.describe(),
                self.position
            ),
        }
    }
}

impl std::error::Error for LexError {}

/// What went wrong while assembling tokens into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrKind {
    /// No value at all: the token stream holds nothing but end of input.
    EmptyInput,
    /// A value was required but the current token cannot start one.
    ExpectedValue,
    /// A specific token was required.
    ExpectedToken(TokenKind),
    /// A complete value was followed by more tokens.
    TrailingInput,
    /// A number token whose text is not a number. Only reachable with
    /// hand-built token streams.
    InvalidNumber,
    /// Objects and arrays nested deeper than the configured limit.
    MaxDepthReached,
}

/// Error raised by the [`Parser`](crate::Parser).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrKind,
    found: TokenKind,
    text: String,
    position: usize,
}

impl ParseError {
    pub fn new<T>(kind: ParseErrKind, found: &Token<'_>) -> Result<T, Self> {
        Err(Self {
            kind,
            found: found.kind,
            text: found.text.to_string(),
            position: found.position,
        })
    }

    pub fn kind(&self) -> ParseErrKind {
        self.kind
    }

    /// Kind of the token the parser stopped at.
    pub fn found(&self) -> TokenKind {
        self.found
    }

    /// Text of the token the parser stopped at.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Input offset of the token the parser stopped at.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (found, text, position) = (self.found, &self.text, self.position);
        match self.kind {
            ParseErrKind::EmptyInput => {
                write!(f, "empty input: no value found at position {position}")
            }
            ParseErrKind::ExpectedValue => {
                write!(f, "unexpected {found} '{text}' at position {position}")
            }
            ParseErrKind::ExpectedToken(expected) => write!(
                f,
                "expected {expected}, found {found} '{text}' at position {position}"
            ),
            ParseErrKind::TrailingInput => write!(
                f,
                "trailing input: unexpected {found} '{text}' at position {position}"
            ),
            ParseErrKind::InvalidNumber => {
                write!(f, "invalid number '{text}' at position {position}")
            }
            ParseErrKind::MaxDepthReached => write!(
                f,
                "maximum nesting depth exceeded at {found} at position {position}"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Either stage of [`parse`](crate::parse) failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input could not be split into tokens.
    Lex(LexError),
    /// The tokens do not form a single JSON5 value.
    Parse(ParseError),
}

impl Error {
    /// Input offset of the failure, whichever stage raised it.
    pub fn position(&self) -> usize {
        match self {
            Error::Lex(e) => e.position(),
            Error::Parse(e) => e.position(),
        }
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Error::Lex(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Lex(e) => write!(f, "LexError: {e}"),
            Error::Parse(e) => write!(f, "ParseError: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(e) => Some(e),
            Error::Parse(e) => Some(e),
        }
    }
}
