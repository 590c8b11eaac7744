// SPDX-License-Identifier: Apache-2.0

//! Character classes used by the lexer.

/// JSON5 whitespace: ASCII blanks and line breaks, NBSP, the line/paragraph
/// separators, BOM, and the Unicode space separators.
pub(crate) const fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'
            | '\u{2001}'
            | '\u{2002}'
            | '\u{2003}'
            | '\u{2004}'
            | '\u{2005}'
            | '\u{2006}'
            | '\u{2007}'
            | '\u{2008}'
            | '\u{2009}'
            | '\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Raw line breaks that may not appear inside a string literal and that end
/// a `//` comment.
pub(crate) const fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

pub(crate) fn is_identifier_start(c: char) -> bool {
    matches!(c, '_' | '$') || c.is_ascii_alphabetic() || unicode_ident::is_xid_start(c)
}

pub(crate) fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c)
        || c.is_ascii_digit()
        || matches!(c, '\u{200C}' | '\u{200D}')
        || unicode_ident::is_xid_continue(c)
}

/// Characters that open a number literal.
pub(crate) const fn is_number_start(c: char) -> bool {
    matches!(c, '0'..='9' | '+' | '-' | '.')
}
