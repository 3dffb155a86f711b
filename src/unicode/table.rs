//! Packed property range tables.
//!
//! Each table is a sequence of 5-byte units: one value byte followed by a
//! little-endian `u32` holding `length * 0x200000 + start`. Ranges are
//! sorted, disjoint and at most 2047 code points long; code points not
//! covered by any range have the default value 0.

use crate::error::{Error, Result};

/// Size of one packed range in bytes.
pub const UNIT_SIZE: usize = 5;

/// Largest valid code point.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

const START_MASK: u32 = 0x1F_FFFF;
const LENGTH_SHIFT: u32 = 21;
const MAX_RANGE_LENGTH: u32 = 2047;

/// One decoded range, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyRange {
    pub start: u32,
    pub end: u32,
    pub value: u8,
}

/// A decoded property table supporting `O(log n)` lookup.
#[derive(Clone, Debug, Default)]
pub struct PropertyTable {
    name: &'static str,
    starts: Vec<u32>,
    ranges: Vec<PropertyRange>,
}

impl PropertyTable {
    /// Decode a packed table.
    pub fn decode(name: &'static str, bytes: &[u8]) -> Result<Self> {
        let malformed = |reason: String| Error::MalformedTable {
            table: name,
            reason,
        };

        if bytes.len() % UNIT_SIZE != 0 {
            return Err(malformed(format!(
                "length {} is not a multiple of {UNIT_SIZE}",
                bytes.len()
            )));
        }

        let count = bytes.len() / UNIT_SIZE;
        let mut ranges = Vec::with_capacity(count);
        let mut starts = Vec::with_capacity(count);
        let mut next_free = 0u32;

        for (i, unit) in bytes.chunks_exact(UNIT_SIZE).enumerate() {
            let value = unit[0];
            let field = u32::from_le_bytes([unit[1], unit[2], unit[3], unit[4]]);
            let length = field >> LENGTH_SHIFT;
            let start = field & START_MASK;

            if length == 0 || length > MAX_RANGE_LENGTH {
                return Err(malformed(format!("range {i} has length {length}")));
            }
            let end = start + length - 1;
            if end > MAX_CODE_POINT {
                return Err(malformed(format!(
                    "range {i} ends beyond U+10FFFF (0x{end:X})"
                )));
            }
            if i > 0 && start < next_free {
                return Err(malformed(format!(
                    "range {i} at 0x{start:X} overlaps or precedes its predecessor"
                )));
            }
            next_free = end + 1;

            starts.push(start);
            ranges.push(PropertyRange { start, end, value });
        }

        Ok(Self {
            name,
            starts,
            ranges,
        })
    }

    /// Encode ranges back into the packed form, splitting long ranges.
    ///
    /// Used by tests and by callers building custom tables; the embedded
    /// tables are produced offline in the same layout.
    #[must_use]
    pub fn encode(ranges: &[PropertyRange]) -> Vec<u8> {
        let mut out = Vec::with_capacity(ranges.len() * UNIT_SIZE);
        for range in ranges {
            let mut start = range.start;
            while start <= range.end {
                let length = (range.end - start + 1).min(MAX_RANGE_LENGTH);
                let field = (length << LENGTH_SHIFT) | start;
                out.push(range.value);
                out.extend_from_slice(&field.to_le_bytes());
                start += length;
            }
        }
        out
    }

    /// Table name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of decoded ranges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check if the table has no ranges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Decoded ranges in ascending order.
    #[must_use]
    pub fn ranges(&self) -> &[PropertyRange] {
        &self.ranges
    }

    /// Look up the value for a code point, failing on values past U+10FFFF.
    pub fn lookup(&self, cp: u32) -> Result<u8> {
        if cp > MAX_CODE_POINT {
            return Err(Error::InvalidCodePoint(cp));
        }
        Ok(self.get(cp))
    }

    /// Look up the value for a code point; out-of-range input yields 0.
    #[inline]
    #[must_use]
    pub fn get(&self, cp: u32) -> u8 {
        let idx = self.starts.partition_point(|&start| start <= cp);
        if idx == 0 {
            return 0;
        }
        let range = &self.ranges[idx - 1];
        if cp <= range.end { range.value } else { 0 }
    }
}
