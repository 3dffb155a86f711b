//! Grapheme clusters over UTF-16 text.

use crate::unicode::grapheme::GraphemeBreaker;
use crate::unicode::props::{GraphemeBreak, grapheme_break_prop};
use crate::unicode::utf16::{self, CodePointFormat, code_point_string};
use crate::unicode::width::{AmbiguousWidth, cluster_width};
use std::fmt;

/// One extended grapheme cluster.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cluster {
    code_points: Vec<u32>,
    raw_index: usize,
    raw_len: usize,
}

impl Cluster {
    /// Create an empty cluster starting at `raw_index`.
    fn starting_at(raw_index: usize) -> Self {
        Self {
            code_points: Vec::with_capacity(2),
            raw_index,
            raw_len: 0,
        }
    }

    fn push(&mut self, cp: u32, units: usize) {
        self.code_points.push(cp);
        self.raw_len += units;
    }

    /// Code points making up the cluster.
    #[must_use]
    pub fn code_points(&self) -> &[u32] {
        &self.code_points
    }

    /// UTF-16 offset of the cluster start in its owning text.
    #[must_use]
    pub fn raw_index(&self) -> usize {
        self.raw_index
    }

    /// Length in UTF-16 code units.
    #[must_use]
    pub fn raw_len(&self) -> usize {
        self.raw_len
    }

    /// One past the last UTF-16 offset.
    #[must_use]
    pub fn raw_end(&self) -> usize {
        self.raw_index + self.raw_len
    }

    pub(crate) fn set_raw_index(&mut self, raw_index: usize) {
        self.raw_index = raw_index;
    }

    pub(crate) fn with_code_points(code_points: Vec<u32>, raw_index: usize) -> Self {
        let raw_len = code_points.iter().map(|&cp| utf16::utf16_len(cp)).sum();
        Self {
            code_points,
            raw_index,
            raw_len,
        }
    }

    /// First code point of the cluster.
    #[must_use]
    pub fn base(&self) -> u32 {
        self.code_points.first().copied().unwrap_or(0)
    }

    /// Grapheme break property of the first code point.
    #[must_use]
    pub fn grapheme_break(&self) -> GraphemeBreak {
        grapheme_break_prop(self.base())
    }

    /// Display width in columns.
    #[must_use]
    pub fn width(&self, ambiguous: AmbiguousWidth) -> usize {
        cluster_width(&self.code_points, ambiguous)
    }

    /// UTF-16 encoding of the cluster.
    #[must_use]
    pub fn to_utf16(&self) -> Vec<u16> {
        let mut out = Vec::with_capacity(self.raw_len);
        for &cp in &self.code_points {
            utf16::encode_code_point(cp, &mut out);
        }
        out
    }

    /// Check whether the cluster ends in a line terminator.
    #[must_use]
    pub fn is_newline(&self) -> bool {
        matches!(
            self.code_points.last(),
            Some(0x0A | 0x0B | 0x0C | 0x0D | 0x85 | 0x2028 | 0x2029)
        )
    }

    /// Boundary dump such as `0061 × 0301`.
    #[must_use]
    pub fn dump(&self) -> String {
        self.code_points
            .iter()
            .map(|&cp| code_point_string(cp, CodePointFormat::Plain))
            .collect::<Vec<_>>()
            .join(" × ")
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cp in &self.code_points {
            write!(f, "{}", utf16::to_char(cp))?;
        }
        Ok(())
    }
}

/// Split UTF-16 text into clusters.
///
/// `offset` is added to every recorded raw index, for scanning a tail of a
/// larger text.
#[must_use]
pub fn scan_clusters(units: &[u16], offset: usize) -> Vec<Cluster> {
    let mut breaker = GraphemeBreaker::new();
    let mut clusters: Vec<Cluster> = Vec::new();
    for (at, cp) in utf16::code_points(units) {
        if breaker.step(cp) {
            clusters.push(Cluster::starting_at(offset + at));
        }
        if let Some(current) = clusters.last_mut() {
            current.push(cp, utf16::utf16_len(cp));
        }
    }
    clusters
}

/// Rescan `raw` from `scan_from`, stopping early once a boundary at or past
/// `resync_from` coincides with the start of a cluster in `tail`.
///
/// Returns the freshly scanned clusters and the index into `tail` where the
/// old clusters remain valid (or `tail.len()` if the scan reached the end).
pub(crate) fn rescan_until_resync(
    raw: &[u16],
    scan_from: usize,
    resync_from: usize,
    tail: &[Cluster],
) -> (Vec<Cluster>, usize) {
    let mut breaker = GraphemeBreaker::new();
    let mut fresh: Vec<Cluster> = Vec::new();
    let mut k = 0;
    let mut pos = scan_from;

    while let Some((cp, units)) = utf16::code_point_at(raw, pos) {
        if breaker.step(cp) {
            // A boundary resets everything the breaker carries forward except
            // regional indicator parity, which is even at every boundary.
            if pos >= resync_from {
                while k < tail.len() && tail[k].raw_index < pos {
                    k += 1;
                }
                if k < tail.len() && tail[k].raw_index == pos {
                    return (fresh, k);
                }
            }
            fresh.push(Cluster::starting_at(pos));
        }
        if let Some(current) = fresh.last_mut() {
            current.push(cp, units);
        }
        pos += units;
    }
    (fresh, tail.len())
}
