//! Display width from the East Asian Width property (UAX #11).

use super::grapheme::GraphemeBreaker;
use super::props::{EastAsianWidth, GraphemeBreak, east_asian_width_prop, grapheme_break_prop};
use std::sync::atomic::{AtomicU8, Ordering};

/// Column width given to East Asian Ambiguous characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AmbiguousWidth {
    /// One column (western terminals).
    #[default]
    Narrow,
    /// Two columns (CJK legacy terminals).
    Wide,
}

impl AmbiguousWidth {
    /// Column count for an Ambiguous character.
    #[must_use]
    pub const fn columns(self) -> usize {
        match self {
            Self::Narrow => 1,
            Self::Wide => 2,
        }
    }
}

const AMBIGUOUS_NARROW: u8 = 0;
const AMBIGUOUS_WIDE: u8 = 1;

static AMBIGUOUS_WIDTH: AtomicU8 = AtomicU8::new(AMBIGUOUS_NARROW);

/// Set the process-wide ambiguous width used when none is given explicitly.
pub fn set_ambiguous_width(width: AmbiguousWidth) {
    let value = match width {
        AmbiguousWidth::Narrow => AMBIGUOUS_NARROW,
        AmbiguousWidth::Wide => AMBIGUOUS_WIDE,
    };
    AMBIGUOUS_WIDTH.store(value, Ordering::Relaxed);
}

/// Get the process-wide ambiguous width.
#[must_use]
pub fn ambiguous_width() -> AmbiguousWidth {
    match AMBIGUOUS_WIDTH.load(Ordering::Relaxed) {
        AMBIGUOUS_WIDE => AmbiguousWidth::Wide,
        _ => AmbiguousWidth::Narrow,
    }
}

const VARIATION_SELECTOR_16: u32 = 0xFE0F;

/// Width of a single code point ignoring cluster context.
///
/// Controls and combining marks are 0; everything else follows its East
/// Asian Width class.
#[must_use]
pub fn code_point_width(cp: u32, ambiguous: AmbiguousWidth) -> usize {
    // Fast path: printable ASCII is always one column
    if (0x20..0x7F).contains(&cp) {
        return 1;
    }
    match grapheme_break_prop(cp) {
        GraphemeBreak::Control
        | GraphemeBreak::Cr
        | GraphemeBreak::Lf
        | GraphemeBreak::Extend
        | GraphemeBreak::Zwj => 0,
        _ => east_asian_width_columns(cp, ambiguous),
    }
}

fn east_asian_width_columns(cp: u32, ambiguous: AmbiguousWidth) -> usize {
    match east_asian_width_prop(cp) {
        EastAsianWidth::Wide | EastAsianWidth::Fullwidth => 2,
        EastAsianWidth::Ambiguous => ambiguous.columns(),
        EastAsianWidth::Halfwidth | EastAsianWidth::Narrow | EastAsianWidth::Neutral => 1,
    }
}

/// Width of one grapheme cluster given as code points.
///
/// Marks never add width. A leading Prepend is skipped to find the base;
/// an emoji presentation selector or a regional indicator pair makes the
/// cluster two columns wide.
#[must_use]
pub fn cluster_width(code_points: &[u32], ambiguous: AmbiguousWidth) -> usize {
    let Some(&first) = code_points.first() else {
        return 0;
    };
    if code_points.len() == 1 {
        return code_point_width(first, ambiguous);
    }

    let base_at = code_points
        .iter()
        .position(|&cp| grapheme_break_prop(cp) != GraphemeBreak::Prepend)
        .unwrap_or(code_points.len() - 1);
    let base = code_points[base_at];
    let rest = &code_points[base_at + 1..];

    match grapheme_break_prop(base) {
        GraphemeBreak::Control
        | GraphemeBreak::Cr
        | GraphemeBreak::Lf
        | GraphemeBreak::Extend
        | GraphemeBreak::Zwj => 0,
        GraphemeBreak::RegionalIndicator
            if rest
                .first()
                .is_some_and(|&cp| grapheme_break_prop(cp) == GraphemeBreak::RegionalIndicator) =>
        {
            2
        }
        GraphemeBreak::ExtendedPictographic if rest.contains(&VARIATION_SELECTOR_16) => 2,
        _ => east_asian_width_columns(base, ambiguous),
    }
}

/// Display width of a string in columns, using the global ambiguous width.
#[must_use]
pub fn display_width(s: &str) -> usize {
    display_width_with(s, ambiguous_width())
}

/// Display width of a string in columns.
#[must_use]
pub fn display_width_with(s: &str, ambiguous: AmbiguousWidth) -> usize {
    let mut breaker = GraphemeBreaker::new();
    let mut total = 0;
    let mut cluster: Vec<u32> = Vec::with_capacity(4);
    for c in s.chars() {
        let cp = u32::from(c);
        if breaker.step(cp) && !cluster.is_empty() {
            total += cluster_width(&cluster, ambiguous);
            cluster.clear();
        }
        cluster.push(cp);
    }
    total + cluster_width(&cluster, ambiguous)
}

/// Check if a code point occupies two columns regardless of ambiguity.
#[must_use]
pub fn is_wide(cp: u32) -> bool {
    matches!(
        east_asian_width_prop(cp),
        EastAsianWidth::Wide | EastAsianWidth::Fullwidth
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cps(s: &str) -> Vec<u32> {
        s.chars().map(u32::from).collect()
    }

    #[test]
    fn test_ascii_width() {
        assert_eq!(display_width_with("ABC", AmbiguousWidth::Narrow), 3);
        assert_eq!(code_point_width(u32::from('a'), AmbiguousWidth::Narrow), 1);
    }

    #[test]
    fn test_cjk_width() {
        assert_eq!(display_width_with("あいうえお", AmbiguousWidth::Narrow), 10);
        assert_eq!(display_width_with("漢字", AmbiguousWidth::Narrow), 4);
        assert!(is_wide(u32::from('漢')));
        assert_eq!(display_width_with("ｱｲｳ", AmbiguousWidth::Narrow), 3);
        assert_eq!(display_width_with("ＡＢ", AmbiguousWidth::Narrow), 4);
    }

    #[test]
    fn test_marks_add_no_width() {
        assert_eq!(cluster_width(&cps("e\u{0301}"), AmbiguousWidth::Narrow), 1);
        assert_eq!(cluster_width(&cps("か\u{3099}"), AmbiguousWidth::Narrow), 2);
        assert_eq!(cluster_width(&cps("\u{0301}"), AmbiguousWidth::Narrow), 0);
        assert_eq!(display_width_with("de\u{0301}licieux", AmbiguousWidth::Narrow), 9);
    }

    #[test]
    fn test_controls_are_zero_width() {
        assert_eq!(cluster_width(&[0x0D, 0x0A], AmbiguousWidth::Narrow), 0);
        assert_eq!(code_point_width(0x07, AmbiguousWidth::Narrow), 0);
        assert_eq!(code_point_width(0x200D, AmbiguousWidth::Narrow), 0);
    }

    #[test]
    fn test_emoji_width() {
        assert_eq!(display_width_with("\u{1F600}", AmbiguousWidth::Narrow), 2);
        assert_eq!(cluster_width(&cps("\u{2764}\u{FE0F}"), AmbiguousWidth::Narrow), 2);
        assert_eq!(cluster_width(&cps("\u{1F1EF}\u{1F1F5}"), AmbiguousWidth::Narrow), 2);
        assert_eq!(
            cluster_width(
                &[0x1F468, 0x200D, 0x1F468, 0x200D, 0x1F466],
                AmbiguousWidth::Narrow
            ),
            2
        );
    }

    #[test]
    fn test_ambiguous_width() {
        // CIRCLED DIGIT ONE is Ambiguous
        let ch = 0x2460;
        assert_eq!(code_point_width(ch, AmbiguousWidth::Narrow), 1);
        assert_eq!(code_point_width(ch, AmbiguousWidth::Wide), 2);
        assert_eq!(AmbiguousWidth::default(), AmbiguousWidth::Narrow);
    }

    #[test]
    fn test_prepend_skipped_for_base() {
        // ARABIC NUMBER SIGN + ARABIC-INDIC DIGIT ONE
        assert_eq!(cluster_width(&[0x0600, 0x0661], AmbiguousWidth::Narrow), 1);
    }
}
