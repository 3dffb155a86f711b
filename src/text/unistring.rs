//! Cluster-indexed string.
//!
//! [`Unistring`] owns UTF-16 text and its grapheme cluster sequence. Three
//! coordinate spaces coexist: raw UTF-16 offsets, code point offsets and
//! cluster offsets. Public indices are cluster indices unless a method name
//! says otherwise. Editing and slicing take negative indices counting from
//! the end; read accessors treat them as out of range.

use super::cluster::{Cluster, rescan_until_resync, scan_clusters};
use super::segment::{self, Segment};
use crate::error::{Error, Result};
use crate::unicode::props::{GraphemeBreak, SentenceBreak, WordBreak};
use crate::unicode::utf16::{self, CodePointFormat, code_point_string};
use crate::unicode::width::{AmbiguousWidth, ambiguous_width};
use std::fmt;

/// A string indexed by extended grapheme clusters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Unistring {
    raw: Vec<u16>,
    clusters: Vec<Cluster>,
}

/// Resolve a possibly negative index against `len`, clamping to `0..=len`.
fn resolve_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(len)
    }
}

impl Unistring {
    /// Create from a Rust string.
    #[must_use]
    pub fn new(s: &str) -> Self {
        Self::from_utf16(&utf16::from_str(s))
    }

    /// Create from UTF-16 code units; unpaired surrogates are kept as-is.
    #[must_use]
    pub fn from_utf16(units: &[u16]) -> Self {
        Self {
            raw: units.to_vec(),
            clusters: scan_clusters(units, 0),
        }
    }

    /// Create from a sequence of code points.
    pub fn from_code_points(code_points: &[u32]) -> Result<Self> {
        let mut raw = Vec::with_capacity(code_points.len());
        for &cp in code_points {
            raw.extend(utf16::utf16_from_code_point(cp)?);
        }
        Ok(Self::from_utf16(&raw))
    }

    /// Number of grapheme clusters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Check if the string is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Length in UTF-16 code units.
    #[must_use]
    pub fn raw_len(&self) -> usize {
        self.raw.len()
    }

    /// Number of code points.
    #[must_use]
    pub fn code_point_len(&self) -> usize {
        self.clusters.iter().map(|c| c.code_points().len()).sum()
    }

    /// Underlying UTF-16 code units.
    #[must_use]
    pub fn as_utf16(&self) -> &[u16] {
        &self.raw
    }

    /// Cluster sequence.
    #[must_use]
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Iterate over clusters.
    pub fn iter(&self) -> std::slice::Iter<'_, Cluster> {
        self.clusters.iter()
    }

    /// Accessors do not count from the end: a negative index is out of range.
    fn cluster_index(&self, index: isize) -> Option<usize> {
        let index = usize::try_from(index).ok()?;
        (index < self.clusters.len()).then_some(index)
    }

    fn raw_start_of(&self, cluster_index: usize) -> usize {
        self.clusters
            .get(cluster_index)
            .map_or(self.raw.len(), Cluster::raw_index)
    }

    // ------------------------------------------------------------------
    // Coordinate mapping
    // ------------------------------------------------------------------

    /// UTF-16 offset where a cluster starts.
    ///
    /// Indices past the end give the raw length; negative indices count from
    /// the end and clamp at 0.
    #[must_use]
    pub fn raw_index_at(&self, index: isize) -> usize {
        self.raw_start_of(resolve_index(index, self.clusters.len()))
    }

    /// Cluster containing a UTF-16 offset, if it lies inside the text.
    #[must_use]
    pub fn cluster_index_from_raw_index(&self, raw_index: usize) -> Option<usize> {
        if raw_index >= self.raw.len() {
            return None;
        }
        let idx = self.clusters.partition_point(|c| c.raw_index() <= raw_index);
        idx.checked_sub(1)
    }

    /// Cluster containing a code point offset, if it lies inside the text.
    #[must_use]
    pub fn cluster_index_from_code_point_index(&self, cp_index: usize) -> Option<usize> {
        let mut seen = 0;
        for (i, cluster) in self.clusters.iter().enumerate() {
            seen += cluster.code_points().len();
            if cp_index < seen {
                return Some(i);
            }
        }
        None
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Cluster at an index, or `None` when out of range (including negative).
    #[must_use]
    pub fn cluster_at(&self, index: isize) -> Option<&Cluster> {
        self.cluster_index(index).map(|i| &self.clusters[i])
    }

    /// Cluster at an index, failing with [`Error::IndexOutOfRange`].
    pub fn try_cluster_at(&self, index: isize) -> Result<&Cluster> {
        self.cluster_at(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.clusters.len(),
        })
    }

    /// Text of the cluster at an index; empty when out of range.
    #[must_use]
    pub fn raw_string_at(&self, index: isize) -> String {
        self.cluster_at(index).map(Cluster::to_string).unwrap_or_default()
    }

    /// Base character of the cluster at an index; empty when out of range.
    #[must_use]
    pub fn char_at(&self, index: isize) -> String {
        self.cluster_at(index)
            .map(|c| utf16::to_char(c.base()).to_string())
            .unwrap_or_default()
    }

    /// Base code point of the cluster at an index.
    #[must_use]
    pub fn char_code_at(&self, index: isize) -> Option<u32> {
        self.cluster_at(index).map(Cluster::base)
    }

    /// Code points of the cluster at an index; empty when out of range.
    #[must_use]
    pub fn code_points_at(&self, index: isize) -> Vec<u32> {
        self.cluster_at(index)
            .map(|c| c.code_points().to_vec())
            .unwrap_or_default()
    }

    /// First cluster index at or after `from` where `needle` matches whole clusters.
    #[must_use]
    pub fn index_of(&self, needle: &str, from: usize) -> Option<usize> {
        let needle = Self::new(needle);
        let n = needle.len();
        if n == 0 {
            return (from <= self.len()).then_some(from);
        }
        (from..=self.len().checked_sub(n)?).find(|&i| self.matches_at(i, &needle))
    }

    /// Last cluster index at or before `from` where `needle` matches whole clusters.
    #[must_use]
    pub fn last_index_of(&self, needle: &str, from: Option<usize>) -> Option<usize> {
        let needle = Self::new(needle);
        let n = needle.len();
        let last_start = self.len().checked_sub(n)?;
        let start = from.map_or(last_start, |f| f.min(last_start));
        (0..=start).rev().find(|&i| self.matches_at(i, &needle))
    }

    fn matches_at(&self, at: usize, needle: &Self) -> bool {
        self.clusters[at..at + needle.len()]
            .iter()
            .zip(&needle.clusters)
            .all(|(a, b)| a.code_points() == b.code_points())
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Replace clusters `start..end` with `units`, rescanning only the
    /// neighbourhood of the edit.
    fn splice(&mut self, start: usize, end: usize, units: &[u16]) {
        let raw_start = self.raw_start_of(start);
        let raw_end = self.raw_start_of(end);
        let edit_end = raw_start + units.len();

        self.raw.splice(raw_start..raw_end, units.iter().copied());
        self.clusters.drain(start..end);
        for cluster in &mut self.clusters[start..] {
            cluster.set_raw_index(cluster.raw_index() - raw_end + edit_end);
        }

        // The cluster before the edit may absorb the new units; with none,
        // scanning starts at the inserted text itself.
        match start.checked_sub(1) {
            Some(prev) => self.rescan(prev, self.clusters[prev].raw_index(), edit_end),
            None => self.rescan(0, 0, edit_end),
        }
    }

    /// Rescan from raw offset `scan_from`, replacing clusters from `first` on
    /// and keeping old ones once a boundary at or after `resync_from` lines
    /// up with one of them.
    fn rescan(&mut self, first: usize, scan_from: usize, resync_from: usize) {
        let (fresh, kept) =
            rescan_until_resync(&self.raw, scan_from, resync_from, &self.clusters[first..]);
        self.clusters.splice(first..first + kept, fresh);
    }

    /// Insert text before the cluster at `index` (negative counts from the end,
    /// past the end appends).
    pub fn insert(&mut self, text: &str, index: isize) {
        self.insert_utf16(&utf16::from_str(text), index);
    }

    /// Insert UTF-16 code units before the cluster at `index`.
    pub fn insert_utf16(&mut self, units: &[u16], index: isize) {
        let at = resolve_index(index, self.clusters.len());
        self.splice(at, at, units);
    }

    /// Delete `count` clusters starting at `index`, or everything from `index`
    /// when `count` is `None`.
    ///
    /// Negative indices count from the end and clamp at 0; ranges past the end
    /// are truncated.
    pub fn delete(&mut self, index: isize, count: Option<usize>) {
        let len = self.clusters.len();
        let start = resolve_index(index, len);
        let end = count.map_or(len, |c| start.saturating_add(c).min(len));
        if start < end {
            self.splice(start, end, &[]);
        }
    }

    /// Delete every cluster.
    pub fn delete_all(&mut self) {
        self.raw.clear();
        self.clusters.clear();
    }

    /// Append another string, rescanning only around the join.
    pub fn concat(&mut self, other: &Self) {
        let join_cluster = self.clusters.len();
        let join_raw = self.raw.len();
        self.raw.extend_from_slice(&other.raw);
        self.clusters.extend(other.clusters.iter().map(|c| {
            let mut c = c.clone();
            c.set_raw_index(c.raw_index() + join_raw);
            c
        }));
        match join_cluster.checked_sub(1) {
            Some(prev) => self.rescan(prev, self.clusters[prev].raw_index(), join_raw),
            None => self.rescan(0, 0, join_raw),
        }
    }

    /// Append text.
    pub fn append(&mut self, text: &str) {
        self.concat(&Self::new(text));
    }

    /// Return a new string made of this one followed by `others`.
    #[must_use]
    pub fn concatenated(&self, others: &[&Self]) -> Self {
        let mut out = self.clone();
        for other in others {
            out.concat(other);
        }
        out
    }

    // ------------------------------------------------------------------
    // Substrings
    // ------------------------------------------------------------------

    fn sub_range(&self, start: usize, end: usize) -> Self {
        if start >= end {
            return Self::default();
        }
        let raw_start = self.raw_start_of(start);
        let raw_end = self.raw_start_of(end);
        let clusters = self.clusters[start..end]
            .iter()
            .map(|c| {
                let mut c = c.clone();
                c.set_raw_index(c.raw_index() - raw_start);
                c
            })
            .collect();
        Self {
            raw: self.raw[raw_start..raw_end].to_vec(),
            clusters,
        }
    }

    /// Clusters between two indices; negative values clamp to 0 and the
    /// bounds are swapped when reversed.
    #[must_use]
    pub fn substring(&self, start: isize, end: Option<isize>) -> Self {
        let len = self.clusters.len();
        let clamp = |i: isize| i.max(0).unsigned_abs().min(len);
        let a = clamp(start);
        let b = end.map_or(len, clamp);
        self.sub_range(a.min(b), a.max(b))
    }

    /// `length` clusters from `start`; a negative start counts from the end.
    #[must_use]
    pub fn substr(&self, start: isize, length: Option<isize>) -> Self {
        let len = self.clusters.len();
        let a = resolve_index(start, len);
        let count = length.map_or(len, |l| l.max(0).unsigned_abs());
        self.sub_range(a, a.saturating_add(count).min(len))
    }

    /// Clusters from `start` up to `end`; negative values count from the end.
    #[must_use]
    pub fn slice(&self, start: isize, end: Option<isize>) -> Self {
        let len = self.clusters.len();
        let a = resolve_index(start, len);
        let b = end.map_or(len, |e| resolve_index(e, len));
        self.sub_range(a, b)
    }

    // ------------------------------------------------------------------
    // Case mapping
    // ------------------------------------------------------------------

    fn map_bases(&self, map: impl Fn(u32) -> u32) -> Self {
        let mut raw = Vec::with_capacity(self.raw.len());
        let mut clusters = Vec::with_capacity(self.clusters.len());
        for cluster in &self.clusters {
            let mut cps = cluster.code_points().to_vec();
            if let Some(base) = cps.first_mut() {
                *base = map(*base);
            }
            let mapped = Cluster::with_code_points(cps, raw.len());
            raw.extend(mapped.to_utf16());
            clusters.push(mapped);
        }
        Self { raw, clusters }
    }

    /// Lower-case the base of every cluster, keeping marks and cluster count.
    #[must_use]
    pub fn to_lowercase(&self) -> Self {
        self.map_bases(|cp| single_mapping(cp, char::to_lowercase))
    }

    /// Upper-case the base of every cluster, keeping marks and cluster count.
    #[must_use]
    pub fn to_uppercase(&self) -> Self {
        self.map_bases(|cp| single_mapping(cp, char::to_uppercase))
    }

    /// Locale-aware lower-casing (Turkic dotted and dotless i).
    #[must_use]
    pub fn to_lowercase_locale(&self, lang: &str) -> Self {
        if !is_turkic(lang) {
            return self.to_lowercase();
        }
        self.map_bases(|cp| match cp {
            0x49 => 0x131,
            0x130 => 0x69,
            _ => single_mapping(cp, char::to_lowercase),
        })
    }

    /// Locale-aware upper-casing (Turkic dotted and dotless i).
    #[must_use]
    pub fn to_uppercase_locale(&self, lang: &str) -> Self {
        if !is_turkic(lang) {
            return self.to_uppercase();
        }
        self.map_bases(|cp| match cp {
            0x69 => 0x130,
            0x131 => 0x49,
            _ => single_mapping(cp, char::to_uppercase),
        })
    }

    // ------------------------------------------------------------------
    // Segmentation and measurement
    // ------------------------------------------------------------------

    /// Grapheme segments.
    #[must_use]
    pub fn graphemes(&self) -> Vec<Segment<GraphemeBreak>> {
        segment::graphemes_of(self)
    }

    /// Word segments, optionally grouping same-script runs.
    #[must_use]
    pub fn words(&self, extended: bool) -> Vec<Segment<WordBreak>> {
        segment::words_of(self, extended)
    }

    /// Sentence segments.
    #[must_use]
    pub fn sentences(&self) -> Vec<Segment<SentenceBreak>> {
        segment::sentences_of(self)
    }

    /// Display width in columns using the global ambiguous width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width_with(ambiguous_width())
    }

    /// Display width in columns.
    #[must_use]
    pub fn width_with(&self, ambiguous: AmbiguousWidth) -> usize {
        self.clusters.iter().map(|c| c.width(ambiguous)).sum()
    }

    /// Boundary dump such as `÷ 0061 × 0301 ÷ 0062 ÷`.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::from("÷");
        for cluster in &self.clusters {
            out.push(' ');
            out.push_str(&cluster.dump());
            out.push_str(" ÷");
        }
        out
    }

    /// Code points as `U+XXXX` strings, space separated.
    #[must_use]
    pub fn code_point_dump(&self) -> String {
        self.clusters
            .iter()
            .flat_map(|c| c.code_points().iter())
            .map(|&cp| code_point_string(cp, CodePointFormat::Unicode))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn is_turkic(lang: &str) -> bool {
    let primary = lang.split(['-', '_']).next().unwrap_or("");
    primary.eq_ignore_ascii_case("tr") || primary.eq_ignore_ascii_case("az")
}

/// Apply a case mapping only when it yields exactly one character.
fn single_mapping<I>(cp: u32, map: fn(char) -> I) -> u32
where
    I: Iterator<Item = char>,
{
    let Some(c) = char::from_u32(cp) else {
        return cp;
    };
    let mut mapped = map(c);
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => u32::from(single),
        _ => cp,
    }
}

impl fmt::Display for Unistring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&utf16::to_string_lossy(&self.raw))
    }
}

impl From<&str> for Unistring {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Unistring {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl<'a> IntoIterator for &'a Unistring {
    type Item = &'a Cluster;
    type IntoIter = std::slice::Iter<'a, Cluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}
