//! Extended grapheme cluster boundaries (UAX #29 GB rules).

use super::props::{
    GraphemeBreak, IndicConjunctBreak, grapheme_break_prop, indic_conjunct_break_prop,
};

/// Emoji ZWJ tracking: `ExtPict Extend*` then `ExtPict Extend* ZWJ`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum EmojiState {
    #[default]
    None,
    Pictographic,
    PictographicZwj,
}

/// Indic conjunct tracking: `Consonant [Extend Linker]*` then a Linker seen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ConjunctState {
    #[default]
    None,
    Consonant,
    Linked,
}

/// Incremental grapheme boundary detector.
///
/// Feed code points one at a time; [`GraphemeBreaker::step`] reports whether
/// a boundary precedes the code point. The first code point always starts a
/// cluster.
#[derive(Clone, Debug)]
pub struct GraphemeBreaker {
    prev: GraphemeBreak,
    ri_count: usize,
    emoji: EmojiState,
    conjunct: ConjunctState,
}

impl Default for GraphemeBreaker {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphemeBreaker {
    /// Create a breaker positioned at start of text.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prev: GraphemeBreak::Sot,
            ri_count: 0,
            emoji: EmojiState::None,
            conjunct: ConjunctState::None,
        }
    }

    /// Consume the next code point; returns `true` if a boundary precedes it.
    pub fn step(&mut self, cp: u32) -> bool {
        let prop = grapheme_break_prop(cp);
        let incb = indic_conjunct_break_prop(cp);
        let is_break = self.is_boundary(prop, incb);
        self.advance(prop, incb);
        is_break
    }

    /// Whether the detector is still at start of text.
    #[must_use]
    pub fn at_start(&self) -> bool {
        self.prev == GraphemeBreak::Sot
    }

    fn is_boundary(&self, next: GraphemeBreak, incb: IndicConjunctBreak) -> bool {
        use GraphemeBreak as G;

        let prev = self.prev;
        match (prev, next) {
            // GB1
            (G::Sot, _) => true,
            // GB3
            (G::Cr, G::Lf) => false,
            // GB4, GB5
            (G::Control | G::Cr | G::Lf, _) | (_, G::Control | G::Cr | G::Lf) => true,
            // GB6
            (G::L, G::L | G::V | G::Lv | G::Lvt) => false,
            // GB7
            (G::Lv | G::V, G::V | G::T) => false,
            // GB8
            (G::Lvt | G::T, G::T) => false,
            // GB9, GB9a
            (_, G::Extend | G::Zwj | G::SpacingMark) => false,
            // GB9b
            (G::Prepend, _) => false,
            // GB9c
            _ if self.conjunct == ConjunctState::Linked
                && incb == IndicConjunctBreak::Consonant =>
            {
                false
            }
            // GB11
            (_, G::ExtendedPictographic) if self.emoji == EmojiState::PictographicZwj => false,
            // GB12, GB13
            (G::RegionalIndicator, G::RegionalIndicator) => self.ri_count % 2 == 0,
            // GB999
            _ => true,
        }
    }

    fn advance(&mut self, prop: GraphemeBreak, incb: IndicConjunctBreak) {
        self.ri_count = if prop == GraphemeBreak::RegionalIndicator {
            self.ri_count + 1
        } else {
            0
        };

        self.emoji = match (prop, self.emoji) {
            (GraphemeBreak::ExtendedPictographic, _)
            | (GraphemeBreak::Extend, EmojiState::Pictographic) => EmojiState::Pictographic,
            (GraphemeBreak::Zwj, EmojiState::Pictographic) => EmojiState::PictographicZwj,
            _ => EmojiState::None,
        };

        self.conjunct = match (incb, self.conjunct) {
            (IndicConjunctBreak::Consonant, _) => ConjunctState::Consonant,
            (IndicConjunctBreak::Linker, ConjunctState::Consonant | ConjunctState::Linked) => {
                ConjunctState::Linked
            }
            (IndicConjunctBreak::Extend, state) => state,
            _ => ConjunctState::None,
        };

        self.prev = prop;
    }
}

/// Split code points into grapheme clusters, returning cluster start indices.
///
/// The returned vector holds the code point index where each cluster begins.
#[must_use]
pub fn grapheme_boundaries(code_points: &[u32]) -> Vec<usize> {
    let mut breaker = GraphemeBreaker::new();
    code_points
        .iter()
        .enumerate()
        .filter_map(|(i, &cp)| breaker.step(cp).then_some(i))
        .collect()
}
