//! Numeric character references (`&#68;`, `&#x44;`).

use crate::unicode::table::MAX_CODE_POINT;

/// Longest digit run accepted, leading zeros included.
const MAX_DIGITS: usize = 16;

/// Parse a numeric character reference at the start of `s`.
///
/// Returns the referenced code point and the byte length of the reference.
/// The terminating `;` must follow the digits directly and the value must not
/// exceed U+10FFFF; anything else is not a reference. At most
/// `MAX_DIGITS + 1` digits are examined.
#[must_use]
pub fn parse_char_ref(s: &str) -> Option<(u32, usize)> {
    let body = s.strip_prefix("&#")?;
    let (digits_at, radix) = match body.as_bytes().first() {
        Some(b'x' | b'X') => (1, 16),
        _ => (0, 10),
    };
    let digits = &body[digits_at..];
    let run = digits
        .bytes()
        .take(MAX_DIGITS + 1)
        .take_while(|b| char::from(*b).is_digit(radix))
        .count();
    if run == 0 || run > MAX_DIGITS || digits.as_bytes().get(run) != Some(&b';') {
        return None;
    }
    let value = u32::from_str_radix(&digits[..run], radix).ok()?;
    (value <= MAX_CODE_POINT).then_some((value, 2 + digits_at + run + 1))
}
