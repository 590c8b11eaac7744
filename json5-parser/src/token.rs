// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

/// The closed set of token kinds produced by the [`Lexer`](crate::Lexer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// The `true` keyword.
    True,
    /// The `false` keyword.
    False,
    /// The `null` keyword.
    Null,
    /// Decimal, hexadecimal, `Infinity` or `NaN` literal, sign included.
    Number,
    /// Single or double quoted string; the text is already unescaped.
    String,
    /// Unquoted identifier, only meaningful as an object key.
    Identifier,
    /// `//` or `/* */` comment. Only emitted by
    /// [`tokenize_with_comments`](crate::tokenize_with_comments).
    Comment,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Short human readable name, used in error messages.
    pub const fn describe(&self) -> &'static str {
        match self {
            TokenKind::LeftBrace => "`{`",
            TokenKind::RightBrace => "`}`",
            TokenKind::LeftBracket => "`[`",
            TokenKind::RightBracket => "`]`",
            TokenKind::Comma => "`,`",
            TokenKind::Colon => "`:`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::Null => "`null`",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::Comment => "comment",
            TokenKind::Eof => "end of input",
        }
    }
}

impl core::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.describe())
    }
}

/// A single lexical unit.
///
/// `text` borrows from the input, except for strings that contained escape
/// sequences: those own their unescaped content. `position` is the byte
/// offset of the first character of the token (the opening quote for strings).
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: Cow<'a, str>,
    pub position: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: impl Into<Cow<'a, str>>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// The token text as a plain `&str`.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Detaches the token from the input it was scanned from.
    pub fn into_owned(self) -> Token<'static> {
        Token {
            kind: self.kind,
            text: Cow::Owned(self.text.into_owned()),
            position: self.position,
        }
    }
}
