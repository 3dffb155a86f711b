//! Grapheme, word and sentence segmentation through the public API.

use unistring::unicode::{GraphemeBreak, SentenceBreak, WordBreak, word_decisions};
use unistring::{Unistring, get_graphemes, get_sentences, get_words, text::word_index_of};

fn texts<K>(segments: &[unistring::Segment<K>]) -> Vec<&str> {
    segments.iter().map(|s| s.text.as_str()).collect()
}

// ============================================================================
// Graphemes
// ============================================================================

#[test]
fn test_grapheme_dump_snapshot() {
    let s = Unistring::new("a\u{301}b\u{1F1EF}\u{1F1F5}\u{1F1FA}\r\n");
    insta::assert_snapshot!(s.dump(), @"÷ 0061 × 0301 ÷ 0062 ÷ 1F1EF × 1F1F5 ÷ 1F1FA ÷ 000D × 000A ÷");
}

#[test]
fn test_grapheme_segments_carry_offsets() {
    let graphemes = get_graphemes("de\u{301}😋");
    assert_eq!(texts(&graphemes), vec!["d", "e\u{301}", "😋"]);
    let offsets: Vec<(usize, usize, usize)> = graphemes
        .iter()
        .map(|g| (g.index, g.raw_index, g.length))
        .collect();
    assert_eq!(offsets, vec![(0, 0, 1), (1, 1, 2), (3, 3, 1)]);
    assert_eq!(graphemes[2].kind, GraphemeBreak::ExtendedPictographic);
}

#[test]
fn test_zwj_family_is_one_cluster() {
    let family = Unistring::new("👨\u{200D}👩\u{200D}👧\u{200D}👦");
    assert_eq!(family.len(), 1);
    assert_eq!(family.width(), 2);
}

#[test]
fn test_indic_conjunct_is_one_cluster() {
    // KA + VIRAMA + SSA
    let conjunct = Unistring::new("\u{915}\u{94D}\u{937}");
    assert_eq!(conjunct.len(), 1);
}

// ============================================================================
// Words
// ============================================================================

#[test]
fn test_words_across_regional_indicators_and_zwj() {
    let words = get_words("a\u{1F1E6}\u{200D}\u{1F1E7}\u{1F1E8}b", false);
    let summary: Vec<(&str, usize, usize, WordBreak)> = words
        .iter()
        .map(|w| (w.text.as_str(), w.index, w.length, w.kind))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("a", 0, 1, WordBreak::ALetter),
            ("\u{1F1E6}\u{200D}\u{1F1E7}", 1, 3, WordBreak::RegionalIndicator),
            ("\u{1F1E8}", 4, 1, WordBreak::RegionalIndicator),
            ("b", 5, 1, WordBreak::ALetter),
        ]
    );
}

#[test]
fn test_extended_words_split_mixed_scripts() {
    let words = get_words("漢字かな交じりの文", true);
    assert_eq!(texts(&words), vec!["漢字", "かな", "交", "じりの", "文"]);
}

#[test]
fn test_extended_words_group_symbols() {
    let words = get_words("!@#   #+.   &*_", true);
    assert_eq!(texts(&words), vec!["!@#", "   ", "#+.", "   ", "&*_"]);
    let kinds: Vec<WordBreak> = words.iter().map(|w| w.kind).collect();
    assert_eq!(
        kinds,
        vec![
            WordBreak::Other,
            WordBreak::WSegSpace,
            WordBreak::Other,
            WordBreak::WSegSpace,
            WordBreak::Other,
        ]
    );
}

#[test]
fn test_plain_words_split_symbols() {
    let words = get_words("!@#", false);
    assert_eq!(texts(&words), vec!["!", "@", "#"]);
}

#[test]
fn test_words_keep_numbers_and_apostrophes() {
    let words = get_words("can't 3.14", false);
    assert_eq!(texts(&words), vec!["can't", " ", "3.14"]);
}

#[test]
fn test_extended_decisions_name_script_rule() {
    let cps: Vec<u32> = "日本".chars().map(u32::from).collect();
    let decisions = word_decisions(&cps, true);
    assert_eq!(decisions.len(), 1);
    assert!(!decisions[0].is_break);
    assert_eq!(decisions[0].rule, "WBscript");

    let plain = word_decisions(&cps, false);
    assert!(plain[0].is_break);
}

#[test]
fn test_word_index_of_raw_offsets() {
    let text = "🍔@#   #+.   &*_";
    assert_eq!(word_index_of(text, 0, true), Some(0));
    assert_eq!(word_index_of(text, 1, true), Some(0));
    assert_eq!(word_index_of(text, 2, true), Some(0));
    assert_eq!(word_index_of(text, 12, true), Some(3));
    assert_eq!(word_index_of(text, 13, true), Some(4));
    assert_eq!(word_index_of(text, 14, true), Some(4));
    assert_eq!(word_index_of(text, -1, true), None);
    assert_eq!(word_index_of(text, 16, true), None);
    assert_eq!(word_index_of(text, -1000, true), None);
    assert_eq!(word_index_of(text, 1000, true), None);
}

// ============================================================================
// Sentences
// ============================================================================

#[test]
fn test_sentences_after_terminators() {
    let sentences = get_sentences("Is it? Yes! ok");
    assert_eq!(texts(&sentences), vec!["Is it? ", "Yes! ", "ok"]);
    assert_eq!(sentences[1].index, 7);
    assert_eq!(sentences[1].kind, SentenceBreak::Upper);
}

#[test]
fn test_sentences_do_not_break_on_abbreviation_or_number() {
    assert_eq!(get_sentences("e.g. the cat").len(), 1);
    assert_eq!(get_sentences("Pi is 3.14 exactly.").len(), 1);
}

#[test]
fn test_sentences_break_after_paragraph_separator() {
    let sentences = get_sentences("one\ntwo");
    assert_eq!(texts(&sentences), vec!["one\n", "two"]);
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_empty_input_has_no_segments() {
    assert!(get_graphemes("").is_empty());
    assert!(get_words("", true).is_empty());
    assert!(get_sentences("").is_empty());
    assert_eq!(Unistring::new("").dump(), "÷");
}

#[test]
fn test_segments_cover_text() {
    let text = "Hello, 世界! 👋🏽 Fine.";
    for extended in [false, true] {
        let joined: String = get_words(text, extended).into_iter().map(|w| w.text).collect();
        assert_eq!(joined, text);
    }
    let joined: String = get_sentences(text).into_iter().map(|s| s.text).collect();
    assert_eq!(joined, text);
}
