//! UTF-16 code unit helpers.
//!
//! Raw text is a slice of UTF-16 code units. Surrogate pairs combine into one
//! code point; an unpaired surrogate stands for itself.

use crate::error::{Error, Result};
use super::table::MAX_CODE_POINT;

/// Check for a high (leading) surrogate.
#[inline]
#[must_use]
pub const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

/// Check for a low (trailing) surrogate.
#[inline]
#[must_use]
pub const fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

/// Decode the code point starting at `index`, returning it with its unit length.
///
/// Returns `None` when `index` is past the end.
#[inline]
#[must_use]
pub fn code_point_at(units: &[u16], index: usize) -> Option<(u32, usize)> {
    let first = *units.get(index)?;
    if is_high_surrogate(first) {
        if let Some(&second) = units.get(index + 1) {
            if is_low_surrogate(second) {
                let cp = 0x10000 + ((u32::from(first) - 0xD800) << 10) + (u32::from(second) - 0xDC00);
                return Some((cp, 2));
            }
        }
    }
    Some((u32::from(first), 1))
}

/// Iterator over `(raw_index, code_point)` pairs of a UTF-16 slice.
#[derive(Clone, Debug)]
pub struct CodePoints<'a> {
    units: &'a [u16],
    pos: usize,
}

impl Iterator for CodePoints<'_> {
    type Item = (usize, u32);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (cp, len) = code_point_at(self.units, self.pos)?;
        let at = self.pos;
        self.pos += len;
        Some((at, cp))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.units.len() - self.pos;
        (rest.div_ceil(2), Some(rest))
    }
}

/// Iterate over code points of UTF-16 text with their raw offsets.
#[must_use]
pub fn code_points(units: &[u16]) -> CodePoints<'_> {
    CodePoints { units, pos: 0 }
}

/// Number of UTF-16 units needed to encode a code point.
#[inline]
#[must_use]
pub const fn utf16_len(cp: u32) -> usize {
    if cp >= 0x10000 { 2 } else { 1 }
}

/// Append the UTF-16 encoding of a code point.
///
/// Values that are not Unicode scalar values (lone surrogates) are written
/// as a single unit, matching how they were decoded.
pub fn encode_code_point(cp: u32, out: &mut Vec<u16>) {
    if cp >= 0x10000 {
        let v = cp - 0x10000;
        out.push(0xD800 | (v >> 10) as u16);
        out.push(0xDC00 | (v & 0x3FF) as u16);
    } else {
        out.push(cp as u16);
    }
}

/// UTF-16 encoding of a single code point.
pub fn utf16_from_code_point(cp: u32) -> Result<Vec<u16>> {
    if cp > MAX_CODE_POINT {
        return Err(Error::InvalidCodePoint(cp));
    }
    let mut out = Vec::with_capacity(2);
    encode_code_point(cp, &mut out);
    Ok(out)
}

/// Convert a code point to `char`, replacing lone surrogates with U+FFFD.
#[inline]
#[must_use]
pub fn to_char(cp: u32) -> char {
    char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Convert UTF-16 text to a `String`, replacing lone surrogates with U+FFFD.
#[must_use]
pub fn to_string_lossy(units: &[u16]) -> String {
    String::from_utf16_lossy(units)
}

/// Encode a `&str` as UTF-16.
#[must_use]
pub fn from_str(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// Output format for [`code_point_string`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CodePointFormat {
    /// Bare hex, e.g. `0061`.
    #[default]
    Plain,
    /// Prefixed, e.g. `U+0061`.
    Unicode,
}

/// Format a code point as at least four upper-case hex digits.
#[must_use]
pub fn code_point_string(cp: u32, format: CodePointFormat) -> String {
    match format {
        CodePointFormat::Plain => format!("{cp:04X}"),
        CodePointFormat::Unicode => format!("U+{cp:04X}"),
    }
}

/// Parse a single `U+HHHH` (or bare hex) code point.
pub fn parse_code_point(s: &str) -> Result<u32> {
    let trimmed = s.trim();
    let hex = trimmed
        .strip_prefix("U+")
        .or_else(|| trimmed.strip_prefix("u+"))
        .unwrap_or(trimmed);
    let cp = u32::from_str_radix(hex, 16)
        .map_err(|_| Error::InvalidArgument(format!("not a code point: {s:?}")))?;
    if cp > MAX_CODE_POINT {
        return Err(Error::InvalidCodePoint(cp));
    }
    Ok(cp)
}

/// Parse a `U+HHHH[-U+HHHH][,...]` list into inclusive ranges.
pub fn parse_code_point_ranges(s: &str) -> Result<Vec<(u32, u32)>> {
    let mut ranges = Vec::new();
    for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (start, end) = match part.split_once('-') {
            Some((a, b)) => (parse_code_point(a)?, parse_code_point(b)?),
            None => {
                let cp = parse_code_point(part)?;
                (cp, cp)
            }
        };
        if start > end {
            return Err(Error::InvalidArgument(format!("reversed range: {part}")));
        }
        ranges.push((start, end));
    }
    if ranges.is_empty() {
        return Err(Error::InvalidArgument("empty code point list".to_string()));
    }
    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surrogate_pair_decoding() {
        let units = from_str("a😋b");
        let cps: Vec<_> = code_points(&units).collect();
        assert_eq!(cps, vec![(0, 0x61), (1, 0x1F60B), (3, 0x62)]);
    }

    #[test]
    fn test_unpaired_surrogates() {
        let units = [0xD83D, 0x61, 0xDE0B];
        let cps: Vec<_> = code_points(&units).map(|(_, cp)| cp).collect();
        assert_eq!(cps, vec![0xD83D, 0x61, 0xDE0B]);

        let mut out = Vec::new();
        for cp in cps {
            encode_code_point(cp, &mut out);
        }
        assert_eq!(out, units);
    }

    #[test]
    fn test_encode_supplementary() {
        assert_eq!(utf16_from_code_point(0x1F600).unwrap(), vec![0xD83D, 0xDE00]);
        assert_eq!(utf16_from_code_point(0x41).unwrap(), vec![0x41]);
        assert!(utf16_from_code_point(0x11_0000).is_err());
    }

    #[test]
    fn test_code_point_string() {
        assert_eq!(code_point_string(0x61, CodePointFormat::Plain), "0061");
        assert_eq!(code_point_string(0x1F600, CodePointFormat::Unicode), "U+1F600");
    }

    #[test]
    fn test_parse_code_point_ranges() {
        assert_eq!(
            parse_code_point_ranges("U+0041-U+0043, u+1f600").unwrap(),
            vec![(0x41, 0x43), (0x1F600, 0x1F600)]
        );
        assert!(parse_code_point_ranges("U+0043-U+0041").is_err());
        assert!(parse_code_point_ranges("U+ZZ").is_err());
        assert!(parse_code_point_ranges("").is_err());
    }
}
