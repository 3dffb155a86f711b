//! Property-based tests for the cluster-indexed string and folding.
//!
//! Uses proptest to verify invariants that must hold across all valid inputs.

use proptest::prelude::*;
use unistring::{
    FoldOptions, Unistring, columns_for, divide_by_columns, folded_lines, get_sentences,
    get_words,
};

// ============================================================================
// Strategies
// ============================================================================

/// Generate arbitrary UTF-8 strings (proptest default).
fn utf8_string() -> impl Strategy<Value = String> {
    "\\PC{0,60}"
}

/// Generate strings dense in joiners, marks and regional indicators, where
/// cluster boundaries move under edits.
fn cluster_heavy_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "a", "e", " ", "\u{301}", "\u{200D}", "\u{1F1EF}", "\u{1F1F5}", "👨", "👩", "\u{1F3FD}",
            "\u{FE0F}", "か", "\u{3099}", "\r", "\n", "。", "\u{1100}", "\u{1161}", "\u{11A8}",
            "\u{915}", "\u{94D}", "\u{600}",
        ]),
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

/// Generate foldable text mixing narrow and wide words.
fn prose_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "the ", "quick ", "fox", "、", "。", "日本語", "かな", "e\u{301}", "supercalifragilistic",
            "\n", "(x) ", "1,000 ", "👍",
        ]),
        0..16,
    )
    .prop_map(|parts| parts.concat())
}

// ============================================================================
// Text model properties
// ============================================================================

proptest! {
    /// Clusters reconstruct the raw text exactly.
    #[test]
    fn clusters_are_lossless(s in utf8_string()) {
        let text = Unistring::new(&s);
        let units: Vec<u16> = text.iter().flat_map(|c| c.to_utf16()).collect();
        prop_assert_eq!(units.as_slice(), text.as_utf16());
        prop_assert_eq!(text.to_string(), s);
    }

    /// Every cluster start maps back to its own cluster.
    #[test]
    fn raw_index_round_trips(s in cluster_heavy_string()) {
        let text = Unistring::new(&s);
        for i in 0..text.len() {
            let raw = text.raw_index_at(i as isize);
            prop_assert_eq!(text.cluster_index_from_raw_index(raw), Some(i));
        }
    }

    /// Cluster count never exceeds the code unit count.
    #[test]
    fn cluster_count_bounded(s in utf8_string()) {
        let text = Unistring::new(&s);
        prop_assert!(text.len() <= text.code_point_len());
        prop_assert!(text.code_point_len() <= text.raw_len());
    }

    /// Inserting rescans to the same clusters as building from scratch.
    #[test]
    fn insert_matches_fresh_scan(
        s in cluster_heavy_string(),
        insert in cluster_heavy_string(),
        at in -30isize..30,
    ) {
        let mut text = Unistring::new(&s);
        text.insert(&insert, at);
        let fresh = Unistring::from_utf16(text.as_utf16());
        prop_assert_eq!(text, fresh);
    }

    /// Deleting rescans to the same clusters as building from scratch.
    #[test]
    fn delete_matches_fresh_scan(
        s in cluster_heavy_string(),
        at in -30isize..30,
        count in prop::option::of(0usize..8),
    ) {
        let mut text = Unistring::new(&s);
        let before = text.len();
        text.delete(at, count);
        prop_assert!(text.len() <= before);
        let fresh = Unistring::from_utf16(text.as_utf16());
        prop_assert_eq!(text, fresh);
    }

    /// Concatenation rescans the seam.
    #[test]
    fn concat_matches_fresh_scan(a in cluster_heavy_string(), b in cluster_heavy_string()) {
        let mut text = Unistring::new(&a);
        text.concat(&Unistring::new(&b));
        prop_assert_eq!(text, Unistring::new(&(a + &b)));
    }

    /// Slices are consistent with the clusters they cover.
    #[test]
    fn slice_preserves_clusters(s in cluster_heavy_string(), a in 0isize..25, b in 0isize..25) {
        let text = Unistring::new(&s);
        let sliced = text.slice(a, Some(b));
        let (lo, hi) = (a.min(text.len() as isize) as usize, b.min(text.len() as isize) as usize);
        prop_assert_eq!(sliced.len(), hi.saturating_sub(lo));
        for (i, cluster) in sliced.iter().enumerate() {
            let expected = text.code_points_at((lo + i) as isize);
            prop_assert_eq!(cluster.code_points(), expected.as_slice());
        }
    }
}

// ============================================================================
// Segmentation properties
// ============================================================================

proptest! {
    /// Words partition the text with no gaps or overlaps.
    #[test]
    fn words_partition_text(s in utf8_string(), extended in any::<bool>()) {
        let words = get_words(&s, extended);
        let joined: String = words.iter().map(|w| w.text.as_str()).collect();
        prop_assert_eq!(&joined, &s);
        let mut next = 0;
        for w in &words {
            prop_assert_eq!(w.index, next);
            prop_assert!(w.length > 0);
            next += w.length;
        }
    }

    /// Sentences partition the text with no gaps or overlaps.
    #[test]
    fn sentences_partition_text(s in utf8_string()) {
        let joined: String = get_sentences(&s).into_iter().map(|seg| seg.text).collect();
        prop_assert_eq!(joined, s);
    }
}

// ============================================================================
// Folding properties
// ============================================================================

proptest! {
    /// Folding loses nothing and respects the budget.
    #[test]
    fn folded_lines_fit(s in prose_string(), columns in 1usize..24) {
        let opts = FoldOptions::new().columns(columns);
        let lines = folded_lines(&s, &opts);
        prop_assert_eq!(lines.concat(), s.clone());
        for line in &lines {
            let width = columns_for(line, &opts);
            prop_assert!(
                width <= columns || Unistring::new(line.trim_end_matches('\n')).len() == 1,
                "line {:?} is {} wide at {} columns", line, width, columns
            );
        }
    }

    /// A line that already fits folds to itself.
    #[test]
    fn folding_is_idempotent(s in prose_string(), columns in 1usize..24) {
        let opts = FoldOptions::new().columns(columns);
        for line in folded_lines(&s, &opts) {
            let width = columns_for(&line, &opts);
            if width <= columns {
                prop_assert_eq!(folded_lines(&line, &opts), vec![line.clone()]);
            }
        }
    }

    /// Dividing keeps both halves and the left half within the budget.
    #[test]
    fn divide_halves_concatenate(s in prose_string(), columns in -2isize..30) {
        let opts = FoldOptions::new();
        let (left, right) = divide_by_columns(&s, columns, &opts);
        prop_assert_eq!(format!("{left}{right}"), s);
        prop_assert!(columns_for(&left, &opts) as isize <= columns.max(0));
    }
}
