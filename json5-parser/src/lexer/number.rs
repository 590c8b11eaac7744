// SPDX-License-Identifier: Apache-2.0

use super::chars::is_identifier_part;
use super::Lexer;
use crate::parse_error::{LexErrKind, LexError};

/// Number sub-grammar states. Each state records what has been consumed so
/// far; states that still owe a character (`Sign`, `Point`, `Exponent`,
/// `ExponentSign`, `HexPrefix`) cannot end the literal.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Num {
    Sign,
    LeadingZero,
    Integer,
    /// `.` with no digit before it
    Point,
    /// `.` right after integer digits
    TrailingPoint,
    Fraction,
    Exponent,
    ExponentSign,
    ExponentDigits,
    HexPrefix,
    HexDigits,
}

impl<'a> Lexer<'a> {
    /// Consumes a number literal starting at the cursor. The caller slices the
    /// lexeme out of the input once this returns.
    pub(super) fn scan_number(&mut self) -> Result<(), LexError> {
        let mut state = match self.peek() {
            Some('+' | '-') => Num::Sign,
            Some('0') => Num::LeadingZero,
            Some('1'..='9') => Num::Integer,
            Some('.') => Num::Point,
            _ => return self.error(LexErrKind::InvalidNumber),
        };
        self.bump();

        loop {
            state = match (state, self.peek()) {
                (Num::Sign, Some('0')) => Num::LeadingZero,
                (Num::Sign, Some('1'..='9')) => Num::Integer,
                (Num::Sign, Some('.')) => Num::Point,
                (Num::Sign, Some('I')) => return self.scan_numeric_keyword("Infinity"),
                (Num::Sign, Some('N')) => return self.scan_numeric_keyword("NaN"),
                (Num::LeadingZero, Some('x' | 'X')) => Num::HexPrefix,
                (Num::LeadingZero | Num::Integer, Some('0'..='9')) => Num::Integer,
                (Num::LeadingZero | Num::Integer, Some('.')) => Num::TrailingPoint,
                (Num::Point | Num::TrailingPoint | Num::Fraction, Some('0'..='9')) => Num::Fraction,
                (
                    Num::LeadingZero | Num::Integer | Num::TrailingPoint | Num::Fraction,
                    Some('e' | 'E'),
                ) => Num::Exponent,
                (Num::Exponent, Some('+' | '-')) => Num::ExponentSign,
                (Num::Exponent | Num::ExponentSign | Num::ExponentDigits, Some('0'..='9')) => {
                    Num::ExponentDigits
                }
                (Num::HexPrefix | Num::HexDigits, Some(c)) if c.is_ascii_hexdigit() => {
                    Num::HexDigits
                }
                (
                    Num::Sign | Num::Point | Num::Exponent | Num::ExponentSign | Num::HexPrefix,
                    _,
                ) => return self.error(LexErrKind::InvalidNumber),
                // second '.', '.' or marker after the exponent, sign mid-literal
                (
                    Num::LeadingZero
                    | Num::Integer
                    | Num::TrailingPoint
                    | Num::Fraction
                    | Num::ExponentDigits,
                    Some('.' | 'e' | 'E' | '+' | '-'),
                ) => return self.error(LexErrKind::InvalidNumber),
                _ => return Ok(()),
            };
            self.bump();
        }
    }

    /// `Infinity` / `NaN` after a sign. The whole identifier is consumed
    /// before comparing, so `-Infinit` fails at the end of the word.
    fn scan_numeric_keyword(&mut self, keyword: &str) -> Result<(), LexError> {
        let start = self.cursor;
        while self.peek().is_some_and(is_identifier_part) {
            self.bump();
        }
        if self.slice(start) == keyword {
            Ok(())
        } else {
            self.error(LexErrKind::InvalidNumber)
        }
    }
}
