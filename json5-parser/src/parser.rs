// SPDX-License-Identifier: Apache-2.0

use log::{debug, trace};

use crate::json_number::parse_number;
use crate::parse_error::{ParseErrKind, ParseError};
use crate::token::{Token, TokenKind};
use crate::value::{Map, Value};

/// Nesting limit used by [`ParserConfig::default`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum number of objects and arrays open at the same time.
    pub max_depth: usize,
}

impl ParserConfig {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a [`Value`] from a token sequence with one token of lookahead.
///
/// `Comment` tokens are skipped. A sequence that does not end in
/// [`TokenKind::Eof`] is treated as if it did.
pub struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    cursor: usize,
    depth: usize,
    config: ParserConfig,
}

impl<'t, 'a> Parser<'t, 'a> {
    pub fn new(tokens: &'t [Token<'a>]) -> Self {
        Self::with_config(tokens, ParserConfig::default())
    }

    pub fn with_config(tokens: &'t [Token<'a>], config: ParserConfig) -> Self {
        Parser {
            tokens,
            cursor: 0,
            depth: 0,
            config,
        }
    }

    /// Parses exactly one value and requires the tokens to end there.
    pub fn parse(mut self) -> Result<Value, ParseError> {
        if matches!(self.peek_kind(), TokenKind::Eof) {
            return self.fail(ParseErrKind::EmptyInput);
        }
        let value = self.parse_value()?;
        self.eat(TokenKind::Eof);
        if self.peek().is_some() {
            return self.fail(ParseErrKind::TrailingInput);
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let Some(token) = self.peek() else {
            return self.fail(ParseErrKind::ExpectedValue);
        };
        match token.kind {
            TokenKind::LeftBrace => self.parse_object(),
            TokenKind::LeftBracket => self.parse_array(),
            TokenKind::String => {
                self.cursor += 1;
                Ok(Value::String(token.text.to_string()))
            }
            TokenKind::Number => {
                self.cursor += 1;
                match parse_number(&token.text) {
                    Some(n) => Ok(Value::Number(n)),
                    None => ParseError::new(ParseErrKind::InvalidNumber, token),
                }
            }
            TokenKind::True => {
                self.cursor += 1;
                Ok(Value::Bool(true))
            }
            TokenKind::False => {
                self.cursor += 1;
                Ok(Value::Bool(false))
            }
            TokenKind::Null => {
                self.cursor += 1;
                Ok(Value::Null)
            }
            TokenKind::RightBrace
            | TokenKind::RightBracket
            | TokenKind::Comma
            | TokenKind::Colon
            | TokenKind::Identifier
            | TokenKind::Comment
            | TokenKind::Eof => self.fail(ParseErrKind::ExpectedValue),
        }
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        let open = self.expect(TokenKind::LeftBrace)?;
        self.enter(open)?;

        let mut map = Map::new();
        while let Some(key) = self.peek().filter(|token| is_object_key(token)) {
            self.cursor += 1;
            self.expect(TokenKind::Colon)?;
            let value = self.parse_value()?;
            map.insert(key.text.to_string(), value);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        self.expect(TokenKind::RightBrace)?;
        self.depth -= 1;
        Ok(Value::Object(map))
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        let open = self.expect(TokenKind::LeftBracket)?;
        self.enter(open)?;

        let mut items = Vec::new();
        while !matches!(self.peek_kind(), TokenKind::RightBracket | TokenKind::Eof) {
            items.push(self.parse_value()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        self.expect(TokenKind::RightBracket)?;
        self.depth -= 1;
        Ok(Value::Array(items))
    }

    fn enter(&mut self, open: &Token<'_>) -> Result<(), ParseError> {
        if self.depth >= self.config.max_depth {
            debug!("Parser: nesting limit {} hit", self.config.max_depth);
            return ParseError::new(ParseErrKind::MaxDepthReached, open);
        }
        self.depth += 1;
        trace!(
            "Parser: {} at {} opens depth {}",
            open.kind,
            open.position,
            self.depth
        );
        Ok(())
    }

    /// Current significant token, `None` once the slice is exhausted.
    fn peek(&mut self) -> Option<&'t Token<'a>> {
        let tokens = self.tokens;
        while tokens
            .get(self.cursor)
            .is_some_and(|token| token.kind == TokenKind::Comment)
        {
            self.cursor += 1;
        }
        tokens.get(self.cursor)
    }

    fn peek_kind(&mut self) -> TokenKind {
        self.peek().map_or(TokenKind::Eof, |token| token.kind)
    }

    /// Consumes the current token if it is of the given kind.
    fn eat(&mut self, kind: TokenKind) -> bool {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.cursor += 1;
                true
            }
            _ => false,
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&'t Token<'a>, ParseError> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.cursor += 1;
                Ok(token)
            }
            _ => self.fail(ParseErrKind::ExpectedToken(kind)),
        }
    }

    /// Fails at the current token, or just past the last one when the
    /// slice is exhausted.
    fn fail<T>(&self, kind: ParseErrKind) -> Result<T, ParseError> {
        debug!("Parser: {:?} at token {}", kind, self.cursor);
        match self.tokens.get(self.cursor) {
            Some(token) => ParseError::new(kind, token),
            None => {
                let position = self.tokens.last().map_or(0, source_end);
                ParseError::new(kind, &Token::new(TokenKind::Eof, "", position))
            }
        }
    }
}

/// Offset just past `token` in the source. A string token holds its
/// unescaped content, so for strings this counts the quotes and assumes
/// the literal had no escape sequences.
fn source_end(token: &Token<'_>) -> usize {
    let quotes = match token.kind {
        TokenKind::String => 2,
        _ => 0,
    };
    token.position + token.text.len() + quotes
}

/// Strings, identifiers and the bare `Infinity` / `NaN` literals may name
/// an object member.
fn is_object_key(token: &Token<'_>) -> bool {
    match token.kind {
        TokenKind::String | TokenKind::Identifier => true,
        TokenKind::Number => matches!(token.as_str(), "Infinity" | "NaN"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;
    use test_log::test;

    fn parse(input: &str) -> Result<Value, ParseError> {
        let tokens = tokenize(input).unwrap();
        Parser::new(&tokens).parse()
    }

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    #[test]
    fn test_scalars() {
        assert_eq!(parse("null"), Ok(Value::Null));
        assert_eq!(parse("true"), Ok(Value::Bool(true)));
        assert_eq!(parse("false"), Ok(Value::Bool(false)));
        assert_eq!(parse("'text'"), Ok(Value::String("text".into())));
        assert_eq!(parse("-0x1A"), Ok(num(-26.0)));
        assert_eq!(parse("+Infinity"), Ok(num(f64::INFINITY)));
    }

    #[test]
    fn test_object_keys() {
        let input = "{a: 1, 'b': 2, \"c\": 3, Infinity: 4, NaN: 5, 好: 6, true1: 7}";
        let value = parse(input).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["a", "b", "c", "Infinity", "NaN", "好", "true1"]);
        assert_eq!(value["NaN"], num(5.0));
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let value = parse("{a: 1, b: 2, a: 3}").unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 2);
        let (key, first) = map.get_index(0).unwrap();
        assert_eq!((key.as_str(), first), ("a", &num(3.0)));
        assert_eq!(value["b"], num(2.0));
    }

    #[test]
    fn test_trailing_commas() {
        assert_eq!(parse("{a:1,}"), parse("{a:1}"));
        assert_eq!(parse("[1,]"), parse("[1]"));
        let nested = Value::Array(vec![Value::Array(vec![]), Value::Object(Map::new())]);
        assert_eq!(parse("[[],{},]"), Ok(nested));
    }

    #[test]
    fn test_rejected_commas() {
        let err = parse("[,]").unwrap_err();
        assert_eq!(err.kind(), ParseErrKind::ExpectedValue);
        assert_eq!(err.found(), TokenKind::Comma);
        assert_eq!(err.position(), 1);

        let err = parse("{,}").unwrap_err();
        assert_eq!(
            err.kind(),
            ParseErrKind::ExpectedToken(TokenKind::RightBrace)
        );
        assert_eq!(err.found(), TokenKind::Comma);

        let err = parse("{a: 1,,}").unwrap_err();
        assert_eq!(
            err.kind(),
            ParseErrKind::ExpectedToken(TokenKind::RightBrace)
        );
        assert_eq!(err.position(), 6);

        let err = parse("[1,,]").unwrap_err();
        assert_eq!(err.kind(), ParseErrKind::ExpectedValue);
        assert_eq!(err.position(), 3);
    }

    #[test]
    fn test_keyword_keys_rejected() {
        for (input, found) in [
            ("{null: 1}", TokenKind::Null),
            ("{true: 1}", TokenKind::True),
            ("{false: 1}", TokenKind::False),
            ("{2: 1}", TokenKind::Number),
            ("{-Infinity: 1}", TokenKind::Number),
        ] {
            let err = parse(input).unwrap_err();
            assert_eq!(
                err.kind(),
                ParseErrKind::ExpectedToken(TokenKind::RightBrace),
                "{input}"
            );
            assert_eq!(err.found(), found, "{input}");
        }
    }

    #[test]
    fn test_missing_colon_and_value() {
        let err = parse("{a 1}").unwrap_err();
        assert_eq!(err.kind(), ParseErrKind::ExpectedToken(TokenKind::Colon));
        assert_eq!(err.position(), 3);

        let err = parse("{a:}").unwrap_err();
        assert_eq!(err.kind(), ParseErrKind::ExpectedValue);
        assert_eq!(err.found(), TokenKind::RightBrace);
    }

    #[test]
    fn test_unclosed_containers() {
        let err = parse("[1, 2").unwrap_err();
        assert_eq!(
            err.kind(),
            ParseErrKind::ExpectedToken(TokenKind::RightBracket)
        );
        assert_eq!(err.found(), TokenKind::Eof);
        assert_eq!(err.position(), 5);

        let err = parse("{a: 1").unwrap_err();
        assert_eq!(
            err.kind(),
            ParseErrKind::ExpectedToken(TokenKind::RightBrace)
        );
        assert_eq!(err.found(), TokenKind::Eof);
    }

    #[test]
    fn test_empty_and_trailing_input() {
        let err = parse("").unwrap_err();
        assert_eq!(err.kind(), ParseErrKind::EmptyInput);
        assert_eq!(err.position(), 0);

        let err = parse("  // nothing\n").unwrap_err();
        assert_eq!(err.kind(), ParseErrKind::EmptyInput);

        let err = parse("{a: 1},").unwrap_err();
        assert_eq!(err.kind(), ParseErrKind::TrailingInput);
        assert_eq!(err.found(), TokenKind::Comma);
        assert_eq!(err.position(), 6);

        let err = parse(r#""123""1""#).unwrap_err();
        assert_eq!(err.kind(), ParseErrKind::TrailingInput);
        assert_eq!(err.text(), "1");

        let err = parse("-0x12adf.6").unwrap_err();
        assert_eq!(err.kind(), ParseErrKind::TrailingInput);
        assert_eq!(err.text(), ".6");
    }

    #[test]
    fn test_depth_limit() {
        let tokens = tokenize("[[[1]]]").unwrap();
        let config = ParserConfig::new().with_max_depth(3);
        assert!(Parser::with_config(&tokens, config).parse().is_ok());

        let config = ParserConfig::new().with_max_depth(2);
        let err = Parser::with_config(&tokens, config).parse().unwrap_err();
        assert_eq!(err.kind(), ParseErrKind::MaxDepthReached);
        assert_eq!(err.position(), 2);

        let deep = "[".repeat(DEFAULT_MAX_DEPTH + 1) + &"]".repeat(DEFAULT_MAX_DEPTH + 1);
        let err = parse(&deep).unwrap_err();
        assert_eq!(err.kind(), ParseErrKind::MaxDepthReached);
        assert_eq!(err.position(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_comment_tokens_are_skipped() {
        let tokens = crate::tokenize_with_comments("/* head */ [1, // one\n 2] // tail").unwrap();
        let value = Parser::new(&tokens).parse().unwrap();
        assert_eq!(value, Value::Array(vec![num(1.0), num(2.0)]));
    }

    #[test]
    fn test_hand_built_tokens_without_eof() {
        let tokens = [
            Token::new(TokenKind::LeftBracket, "[", 0),
            Token::new(TokenKind::Number, "7", 1),
        ];
        let err = Parser::new(&tokens).parse().unwrap_err();
        assert_eq!(
            err.kind(),
            ParseErrKind::ExpectedToken(TokenKind::RightBracket)
        );
        assert_eq!(err.found(), TokenKind::Eof);
        assert_eq!(err.position(), 2);

        let tokens = [
            Token::new(TokenKind::LeftBracket, "[", 0),
            Token::new(TokenKind::String, "a", 1),
        ];
        let err = Parser::new(&tokens).parse().unwrap_err();
        assert_eq!(err.found(), TokenKind::Eof);
        assert_eq!(err.position(), 4);

        let tokens = [Token::new(TokenKind::Number, "7", 0)];
        assert_eq!(Parser::new(&tokens).parse(), Ok(num(7.0)));

        assert_eq!(
            Parser::new(&[]).parse().unwrap_err().kind(),
            ParseErrKind::EmptyInput
        );
    }

    #[test]
    fn test_hand_built_invalid_number() {
        let tokens = [Token::new(TokenKind::Number, "1.2.3", 4)];
        let err = Parser::new(&tokens).parse().unwrap_err();
        assert_eq!(err.kind(), ParseErrKind::InvalidNumber);
        assert_eq!(err.position(), 4);
    }

    #[test]
    fn test_tokens_after_eof_are_trailing() {
        let tokens = [
            Token::new(TokenKind::Null, "null", 0),
            Token::new(TokenKind::Eof, "", 4),
            Token::new(TokenKind::Null, "null", 5),
        ];
        let err = Parser::new(&tokens).parse().unwrap_err();
        assert_eq!(err.kind(), ParseErrKind::TrailingInput);
        assert_eq!(err.position(), 5);
    }
}
