//! Grapheme, word and sentence segments of a [`Unistring`].

use super::unistring::Unistring;
use crate::unicode::grapheme::grapheme_boundaries;
use crate::unicode::props::{
    GraphemeBreak, SentenceBreak, WordBreak, grapheme_break_prop, sentence_break_prop,
    word_break_prop,
};
use crate::unicode::sentence::sentence_boundaries;
use crate::unicode::utf16;
use crate::unicode::word::word_boundaries;

/// A run of text between two boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment<K> {
    /// Segment text.
    pub text: String,
    /// Offset of the first code point, in code points.
    pub index: usize,
    /// Offset of the first code point, in UTF-16 code units.
    pub raw_index: usize,
    /// Number of code points.
    pub length: usize,
    /// Cluster containing the first code point.
    pub cluster_index: usize,
    /// Break property of the first code point.
    pub kind: K,
}

pub type GraphemeSegment = Segment<GraphemeBreak>;
pub type WordSegment = Segment<WordBreak>;
pub type SentenceSegment = Segment<SentenceBreak>;

/// Flattened code points with their raw offsets and owning clusters.
struct Atoms {
    code_points: Vec<u32>,
    raw_indices: Vec<usize>,
    cluster_indices: Vec<usize>,
}

impl Atoms {
    fn of(text: &Unistring) -> Self {
        let n = text.code_point_len();
        let mut atoms = Self {
            code_points: Vec::with_capacity(n),
            raw_indices: Vec::with_capacity(n),
            cluster_indices: Vec::with_capacity(n),
        };
        for (ci, cluster) in text.iter().enumerate() {
            let mut raw = cluster.raw_index();
            for &cp in cluster.code_points() {
                atoms.code_points.push(cp);
                atoms.raw_indices.push(raw);
                atoms.cluster_indices.push(ci);
                raw += utf16::utf16_len(cp);
            }
        }
        atoms
    }

    /// Build segments from boundary starts (beginning with 0).
    fn segments<K>(&self, starts: &[usize], kind_of: impl Fn(u32) -> K) -> Vec<Segment<K>> {
        let n = self.code_points.len();
        starts
            .iter()
            .enumerate()
            .map(|(k, &start)| {
                let end = starts.get(k + 1).copied().unwrap_or(n);
                let cps = &self.code_points[start..end];
                Segment {
                    text: cps.iter().map(|&cp| utf16::to_char(cp)).collect(),
                    index: start,
                    raw_index: self.raw_indices[start],
                    length: end - start,
                    cluster_index: self.cluster_indices[start],
                    kind: kind_of(cps[0]),
                }
            })
            .collect()
    }
}

pub(crate) fn graphemes_of(text: &Unistring) -> Vec<GraphemeSegment> {
    let atoms = Atoms::of(text);
    atoms.segments(&grapheme_boundaries(&atoms.code_points), grapheme_break_prop)
}

pub(crate) fn words_of(text: &Unistring, extended: bool) -> Vec<WordSegment> {
    let atoms = Atoms::of(text);
    atoms.segments(
        &word_boundaries(&atoms.code_points, extended),
        word_break_prop,
    )
}

pub(crate) fn sentences_of(text: &Unistring) -> Vec<SentenceSegment> {
    let atoms = Atoms::of(text);
    atoms.segments(&sentence_boundaries(&atoms.code_points), sentence_break_prop)
}

/// Split text into grapheme clusters.
#[must_use]
pub fn get_graphemes(text: &str) -> Vec<GraphemeSegment> {
    graphemes_of(&Unistring::new(text))
}

/// Split text into words; `extended` joins same-script runs.
#[must_use]
pub fn get_words(text: &str, extended: bool) -> Vec<WordSegment> {
    words_of(&Unistring::new(text), extended)
}

/// Split UTF-16 text into words.
#[must_use]
pub fn get_words_utf16(units: &[u16], extended: bool) -> Vec<WordSegment> {
    words_of(&Unistring::from_utf16(units), extended)
}

/// Split text into sentences.
#[must_use]
pub fn get_sentences(text: &str) -> Vec<SentenceSegment> {
    sentences_of(&Unistring::new(text))
}

/// Index of the word containing a UTF-16 offset.
///
/// Negative offsets and offsets at or past the end give `None`.
#[must_use]
pub fn word_index_of(text: &str, raw_index: isize, extended: bool) -> Option<usize> {
    let raw_index = usize::try_from(raw_index).ok()?;
    let text = Unistring::new(text);
    if raw_index >= text.raw_len() {
        return None;
    }
    let words = words_of(&text, extended);
    words
        .partition_point(|w| w.raw_index <= raw_index)
        .checked_sub(1)
}
