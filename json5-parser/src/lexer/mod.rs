// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use log::{debug, trace};

use crate::escape_processor::{Escape, EscapeProcessor};
use crate::parse_error::{LexErrKind, LexError};
use crate::token::{Token, TokenKind};

mod chars;
mod number;

use chars::{
    is_identifier_part, is_identifier_start, is_line_break, is_number_start, is_whitespace,
};

/// Splits JSON5 text into tokens.
///
/// A lexer scans exactly one input: [`tokenize`](Lexer::tokenize) consumes it.
/// The cursor is a byte offset that only moves forward, one `char` at a time.
pub struct Lexer<'a> {
    input: &'a str,
    cursor: usize,
    tokens: Vec<Token<'a>>,
    keep_comments: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            cursor: 0,
            tokens: Vec::new(),
            keep_comments: false,
        }
    }

    /// Emit [`TokenKind::Comment`] tokens instead of discarding comments.
    pub fn with_comments(mut self) -> Self {
        self.keep_comments = true;
        self
    }

    /// Scans the whole input. On success the last token is always
    /// [`TokenKind::Eof`], positioned at the input length.
    pub fn tokenize(mut self) -> Result<Vec<Token<'a>>, LexError> {
        while let Some(current) = self.peek() {
            let start = self.cursor;
            match current {
                c if is_number_start(c) => {
                    self.scan_number()?;
                    self.push(TokenKind::Number, start);
                }
                c if is_identifier_start(c) => {
                    let kind = self.scan_identifier();
                    self.push(kind, start);
                }
                '{' => self.single(TokenKind::LeftBrace),
                '}' => self.single(TokenKind::RightBrace),
                '[' => self.single(TokenKind::LeftBracket),
                ']' => self.single(TokenKind::RightBracket),
                ',' => self.single(TokenKind::Comma),
                ':' => self.single(TokenKind::Colon),
                quote @ ('"' | '\'') => {
                    let text = self.scan_string(quote)?;
                    self.emit(Token::new(TokenKind::String, text, start));
                }
                '/' => {
                    self.scan_comment()?;
                    if self.keep_comments {
                        self.push(TokenKind::Comment, start);
                    }
                }
                c if is_whitespace(c) => {
                    self.bump();
                }
                _ => return self.error(LexErrKind::InvalidCharacter),
            }
        }

        let end = self.cursor;
        self.emit(Token::new(TokenKind::Eof, "", end));
        debug!("--finished-- {} tokens, {} bytes", self.tokens.len(), end);
        Ok(self.tokens)
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.cursor..)?.chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut rest = self.input.get(self.cursor..)?.chars();
        rest.next();
        rest.next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.cursor += c.len_utf8();
        Some(c)
    }

    /// Input consumed since `start`.
    fn slice(&self, start: usize) -> &'a str {
        self.input.get(start..self.cursor).unwrap_or_default()
    }

    /// Fails at the cursor, naming the character under it.
    fn error<T>(&self, kind: LexErrKind) -> Result<T, LexError> {
        LexError::new(kind, self.peek(), self.cursor)
    }

    fn emit(&mut self, token: Token<'a>) {
        trace!(
            "Token: {:?} {:?} at {}",
            token.kind,
            token.text,
            token.position
        );
        self.tokens.push(token);
    }

    /// Emits the lexeme consumed since `start` as-is.
    fn push(&mut self, kind: TokenKind, start: usize) {
        let text = self.slice(start);
        self.emit(Token::new(kind, text, start));
    }

    fn single(&mut self, kind: TokenKind) {
        let start = self.cursor;
        self.bump();
        self.push(kind, start);
    }

    fn scan_identifier(&mut self) -> TokenKind {
        let start = self.cursor;
        while self.peek().is_some_and(is_identifier_part) {
            self.bump();
        }
        match self.slice(start) {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            "Infinity" | "NaN" => TokenKind::Number,
            _ => TokenKind::Identifier,
        }
    }

    /// Scans a quoted string and returns its decoded content.
    ///
    /// Content borrows from the input until the first escape; from then on
    /// it is copied into an owned buffer.
    fn scan_string(&mut self, quote: char) -> Result<Cow<'a, str>, LexError> {
        self.bump();
        let content_start = self.cursor;
        let mut last_copied = content_start;
        let mut unescaped: Option<String> = None;
        let mut pending_high_surrogate: Option<u32> = None;

        loop {
            let backslash_pos = self.cursor;
            match self.peek() {
                None => return self.error(LexErrKind::UnterminatedString),
                Some(c) if is_line_break(c) => return self.error(LexErrKind::UnterminatedString),
                Some(c) if c == quote && pending_high_surrogate.is_none() => {
                    let tail = self.slice(last_copied);
                    self.bump();
                    return Ok(match unescaped {
                        Some(mut buffer) => {
                            buffer.push_str(tail);
                            Cow::Owned(buffer)
                        }
                        None => Cow::Borrowed(tail),
                    });
                }
                Some('\\') => {
                    let buffer = unescaped.get_or_insert_with(String::new);
                    let copied = self.input.get(last_copied..backslash_pos);
                    buffer.push_str(copied.unwrap_or_default());
                    self.bump();

                    let Some(escape_char) = self.peek() else {
                        return self.error(LexErrKind::UnterminatedString);
                    };
                    let Some(escape) = EscapeProcessor::classify(escape_char) else {
                        return self.error(LexErrKind::InvalidEscape);
                    };
                    if pending_high_surrogate.is_some() && escape != Escape::Unicode {
                        return LexError::new(
                            LexErrKind::InvalidUnicodeCodepoint,
                            Some('\\'),
                            backslash_pos,
                        );
                    }
                    self.bump();

                    match escape {
                        Escape::Char(ch) => buffer.push(ch),
                        Escape::LineContinuation => {
                            if escape_char == '\r' && self.peek() == Some('\n') {
                                self.bump();
                            }
                        }
                        Escape::Unicode => {
                            let unit = self.scan_hex_code_unit()?;
                            let pending = pending_high_surrogate.take();
                            let result = EscapeProcessor::process_code_unit(unit, pending);
                            let (decoded, high) = match result {
                                Ok(pair) => pair,
                                Err(kind) => return LexError::new(kind, Some('\\'), backslash_pos),
                            };
                            pending_high_surrogate = high;
                            if let Some(ch) = decoded {
                                buffer.push(ch);
                            }
                        }
                    }
                    last_copied = self.cursor;
                }
                // a high surrogate must be followed directly by its low half
                Some(_) if pending_high_surrogate.is_some() => {
                    return self.error(LexErrKind::InvalidUnicodeCodepoint);
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
    }

    /// The four hex digits after `\u`.
    fn scan_hex_code_unit(&mut self) -> Result<u32, LexError> {
        let mut unit = 0u32;
        for _ in 0..4 {
            let Some(digit) = self.peek().and_then(|c| c.to_digit(16)) else {
                return self.error(LexErrKind::InvalidUnicodeEscape);
            };
            unit = (unit << 4) | digit;
            self.bump();
        }
        Ok(unit)
    }

    /// Consumes a `//` or `/* */` comment starting at the cursor.
    fn scan_comment(&mut self) -> Result<(), LexError> {
        match self.peek_second() {
            Some('/') => {
                self.bump();
                self.bump();
                while self.peek().is_some_and(|c| !is_line_break(c)) {
                    self.bump();
                }
                Ok(())
            }
            Some('*') => {
                self.bump();
                self.bump();
                loop {
                    match self.peek() {
                        None => return self.error(LexErrKind::UnterminatedComment),
                        Some('*') if self.peek_second() == Some('/') => {
                            self.bump();
                            self.bump();
                            return Ok(());
                        }
                        Some(_) => {
                            self.bump();
                        }
                    }
                }
            }
            _ => self.error(LexErrKind::InvalidCharacter),
        }
    }
}
