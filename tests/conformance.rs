//! Conformance tests based on the UCD boundary test files.
//!
//! Each fixture line lists code points in hex with `÷` at boundaries and `×`
//! between code points of the same segment. The grapheme, word and sentence
//! engines must reproduce every line exactly.

#![allow(clippy::uninlined_format_args, clippy::cast_possible_truncation)]

use unistring::unicode::{GraphemeBreak, grapheme_break_prop};
use unistring::{Unistring, get_sentences, get_words};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{name}")).expect("read conformance fixture")
}

/// Non-comment lines with any trailing `#` note removed.
fn fixture_lines(data: &str) -> impl Iterator<Item = (usize, &str)> {
    data.lines()
        .enumerate()
        .map(|(n, line)| (n + 1, line.split('#').next().unwrap_or("").trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Text spelled by a boundary line.
fn text_of(line: &str) -> String {
    line.split_whitespace()
        .filter(|t| *t != "÷" && *t != "×")
        .map(|hex| {
            let cp = u32::from_str_radix(hex, 16).expect("hex code point");
            char::from_u32(cp).expect("scalar value")
        })
        .collect()
}

/// Boundary line for a list of segments.
fn boundary_line<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::from("÷");
    for segment in segments {
        let hex: Vec<String> = segment.chars().map(|c| format!("{:04X}", c as u32)).collect();
        out.push(' ');
        out.push_str(&hex.join(" × "));
        out.push_str(" ÷");
    }
    out
}

fn run_cases(name: &str, segment: impl Fn(&str) -> String) {
    let data = load_fixture(name);
    let mut passed = 0;
    let mut failed = Vec::new();

    for (line_no, expected) in fixture_lines(&data) {
        let actual = segment(&text_of(expected));
        if actual == expected {
            passed += 1;
        } else {
            failed.push(format!("{name}:{line_no}\n  expected {expected}\n  actual   {actual}"));
        }
    }

    eprintln!("{name}: {passed} passed, {} failed", failed.len());
    assert!(passed > 0, "{name} has no cases");
    assert!(
        failed.is_empty(),
        "{} of {} cases failed:\n{}",
        failed.len(),
        passed + failed.len(),
        failed.iter().take(10).cloned().collect::<Vec<_>>().join("\n")
    );
}

#[test]
fn test_fixture_line_round_trip() {
    let line = "÷ 0061 × 0301 ÷ 1F1EF × 1F1F5 ÷";
    let text = text_of(line);
    assert_eq!(text, "a\u{301}\u{1F1EF}\u{1F1F5}");
    assert_eq!(boundary_line(["a\u{301}", "\u{1F1EF}\u{1F1F5}"]), line);
    assert_eq!(Unistring::new(&text).dump(), line);
}

#[test]
fn test_grapheme_break_conformance() {
    run_cases("GraphemeBreakTest.txt", |text| Unistring::new(text).dump());
}

#[test]
fn test_word_break_conformance() {
    run_cases("WordBreakTest.txt", |text| {
        let words = get_words(text, false);
        boundary_line(words.iter().map(|w| w.text.as_str()))
    });
}

#[test]
fn test_sentence_break_conformance() {
    run_cases("SentenceBreakTest.txt", |text| {
        let sentences = get_sentences(text);
        boundary_line(sentences.iter().map(|s| s.text.as_str()))
    });
}

#[test]
fn test_grapheme_break_property_ranges() {
    let data = load_fixture("GraphemeBreakProperty.txt");
    let mut checked = 0;
    let mut mismatches = Vec::new();

    for (line_no, line) in fixture_lines(&data) {
        let (range, value) = line.split_once(';').expect("range ; value");
        let expected = GraphemeBreak::from_name(value.trim())
            .unwrap_or_else(|| panic!("line {line_no}: unknown value {value:?}"));
        let (first, last) = match range.trim().split_once("..") {
            Some((a, b)) => (a, b),
            None => (range.trim(), range.trim()),
        };
        let first = u32::from_str_radix(first, 16).expect("hex");
        let last = u32::from_str_radix(last, 16).expect("hex");

        // Both ends and the middle of every range.
        for cp in [first, first + (last - first) / 2, last] {
            checked += 1;
            let actual = grapheme_break_prop(cp);
            if actual != expected {
                mismatches.push(format!("U+{cp:04X}: expected {expected}, got {actual}"));
            }
        }
    }

    assert!(checked > 1000, "only {checked} code points checked");
    assert!(
        mismatches.is_empty(),
        "{} mismatches:\n{}",
        mismatches.len(),
        mismatches.iter().take(10).cloned().collect::<Vec<_>>().join("\n")
    );
}

#[test]
fn test_unlisted_code_points_are_other() {
    for cp in [0x0041, 0x00E9, 0x4E00, 0xABFF, 0x1F200, 0x10FFFF] {
        assert_eq!(grapheme_break_prop(cp), GraphemeBreak::Other, "U+{cp:04X}");
    }
}
