// SPDX-License-Identifier: Apache-2.0

/// Converts the text of a number token to its value.
///
/// Accepts everything the lexer emits as [`TokenKind::Number`](crate::TokenKind::Number):
/// an optional sign followed by a `0x`/`0X` hex magnitude, `Infinity`, `NaN`,
/// or a decimal literal. The sign applies to every form, hex included.
/// Returns `None` for anything else, which only hand-built tokens can contain.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    let (is_negative, body) = match text.as_bytes() {
        [b'-', ..] => (true, text.get(1..)?),
        [b'+', ..] => (false, text.get(1..)?),
        _ => (false, text),
    };

    let magnitude = match body {
        "Infinity" => f64::INFINITY,
        "NaN" => f64::NAN,
        _ => match body.get(..2) {
            Some("0x" | "0X") => parse_hex(body.get(2..)?)?,
            _ => parse_decimal(body)?,
        },
    };

    Some(if is_negative { -magnitude } else { magnitude })
}

/// Hex digits without prefix or sign.
fn parse_hex(digits: &str) -> Option<f64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    // u128 keeps the conversion to f64 correctly rounded for up to 32 digits
    if let Ok(value) = u128::from_str_radix(digits, 16) {
        return Some(value as f64);
    }
    let mut value = 0f64;
    for c in digits.chars() {
        value = value * 16.0 + f64::from(c.to_digit(16)?);
    }
    Some(value)
}

/// Unsigned decimal literal: `5`, `5.`, `.5`, `1.5e+5`.
fn parse_decimal(body: &str) -> Option<f64> {
    // `str::parse::<f64>` also takes a sign, `inf` and `nan`, none of which
    // are valid here.
    if !body.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    body.parse::<f64>().ok()
}
