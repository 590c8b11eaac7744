// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::LexErrKind;

/// Pure helpers for decoding JSON5 string escapes.
///
/// The lexer owns the cursor and the copy-on-escape buffer; this only maps
/// the characters after a backslash to what they stand for.
pub(crate) struct EscapeProcessor;

/// What a backslash sequence contributes to the decoded string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Escape {
    /// A single character, e.g. `\n`.
    Char(char),
    /// Backslash followed by a line terminator: contributes nothing.
    LineContinuation,
    /// `\u`, four hex digits follow.
    Unicode,
}

impl EscapeProcessor {
    /// Classifies the character following a backslash.
    ///
    /// Returns `None` for characters outside the escape table.
    ///
    /// # Examples
    /// ```ignore
    /// // Internal API - see unit tests for usage examples
    /// assert_eq!(EscapeProcessor::classify('n'), Some(Escape::Char('\n')));
    /// ```
    pub fn classify(escape_char: char) -> Option<Escape> {
        let escape = match escape_char {
            '"' => Escape::Char('"'),
            '\'' => Escape::Char('\''),
            '\\' => Escape::Char('\\'),
            '/' => Escape::Char('/'),
            'b' => Escape::Char('\u{08}'),
            'f' => Escape::Char('\u{0C}'),
            'n' => Escape::Char('\n'),
            'r' => Escape::Char('\r'),
            't' => Escape::Char('\t'),
            'v' => Escape::Char('\u{0B}'),
            '0' => Escape::Char('\0'),
            '\n' | '\r' | '\u{2028}' | '\u{2029}' => Escape::LineContinuation,
            'u' => Escape::Unicode,
            _ => return None,
        };
        Some(escape)
    }

    /// Check if a UTF-16 code unit is a high surrogate (0xD800-0xDBFF)
    pub fn is_high_surrogate(unit: u32) -> bool {
        (0xD800..=0xDBFF).contains(&unit)
    }

    /// Check if a UTF-16 code unit is a low surrogate (0xDC00-0xDFFF)
    pub fn is_low_surrogate(unit: u32) -> bool {
        (0xDC00..=0xDFFF).contains(&unit)
    }

    /// Combine a high and low surrogate pair into a single Unicode codepoint
    pub fn combine_surrogate_pair(high: u32, low: u32) -> Result<char, LexErrKind> {
        if !Self::is_high_surrogate(high) || !Self::is_low_surrogate(low) {
            return Err(LexErrKind::InvalidUnicodeCodepoint);
        }
        let codepoint = 0x10000 + ((high & 0x3FF) << 10) + (low & 0x3FF);
        char::from_u32(codepoint).ok_or(LexErrKind::InvalidUnicodeCodepoint)
    }

    /// Feeds one decoded `\uXXXX` code unit.
    ///
    /// # Returns
    /// A tuple containing:
    /// - The decoded character, `None` if this is a high surrogate waiting for its pair
    /// - The high surrogate to hold until the next escape
    pub fn process_code_unit(
        unit: u32,
        pending_high_surrogate: Option<u32>,
    ) -> Result<(Option<char>, Option<u32>), LexErrKind> {
        match pending_high_surrogate {
            Some(high) => Ok((Some(Self::combine_surrogate_pair(high, unit)?), None)),
            None if Self::is_high_surrogate(unit) => Ok((None, Some(unit))),
            None if Self::is_low_surrogate(unit) => Err(LexErrKind::InvalidUnicodeCodepoint),
            None => char::from_u32(unit)
                .map(|ch| (Some(ch), None))
                .ok_or(LexErrKind::InvalidUnicodeCodepoint),
        }
    }
}
