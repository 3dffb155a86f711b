//! Tokenizing text into visible clusters, escapes and breakable groups.

use super::FoldOptions;
use super::charref::parse_char_ref;
use crate::ansi::{self, ESC, EscapeKind, scan_escape};
use crate::unicode::grapheme::GraphemeBreaker;
use crate::unicode::linebreak::{BreakOpportunity, break_opportunities, cluster_line_break_class};
use crate::unicode::props::LineBreak;
use crate::unicode::width::cluster_width;
use std::ops::Range;

/// One piece of the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Token {
    Escape {
        range: Range<usize>,
        kind: EscapeKind,
    },
    Visible(Visible),
}

/// A grapheme cluster (or the part of one after an escape).
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Visible {
    pub range: Range<usize>,
    /// Code points used for classification, with references expanded.
    pub code_points: Vec<u32>,
    pub width: usize,
    /// Continues the cluster of the previous visible token.
    pub joins_previous: bool,
    pub is_newline: bool,
}

impl Token {
    pub fn range(&self) -> Range<usize> {
        match self {
            Self::Escape { range, .. } => range.clone(),
            Self::Visible(v) => v.range.clone(),
        }
    }

    pub fn visible(&self) -> Option<&Visible> {
        match self {
            Self::Visible(v) => Some(v),
            Self::Escape { .. } => None,
        }
    }

    pub fn width(&self) -> usize {
        self.visible().map_or(0, |v| v.width)
    }
}

/// A run of tokens that may not be broken inside.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Group {
    pub tokens: Range<usize>,
    pub width: usize,
    pub has_visible: bool,
    /// A line must end after this group.
    pub mandatory_end: bool,
}

/// Split `text` into tokens per `options`.
pub(crate) fn tokenize(text: &str, options: &FoldOptions) -> Vec<Token> {
    let ambiguous = options.resolved_ambiguous_width();
    let mut breaker = GraphemeBreaker::new();
    let mut tokens: Vec<Token> = Vec::new();
    let mut extendable = false;
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];

        if options.is_ansi() && rest.starts_with(ESC) {
            if let Some(esc) = scan_escape(rest) {
                if !esc.terminated {
                    ansi::report_unterminated(i);
                }
                tokens.push(Token::Escape {
                    range: i..i + esc.len,
                    kind: esc.kind,
                });
                i += esc.len;
                extendable = false;
                continue;
            }
        }

        let reference = if options.is_character_reference() {
            parse_char_ref(rest)
        } else {
            None
        };
        let (cp, len) = reference.unwrap_or_else(|| {
            let c = rest.chars().next().unwrap_or('\u{FFFD}');
            (u32::from(c), c.len_utf8())
        });

        let boundary = breaker.step(cp);
        match tokens.last_mut() {
            Some(Token::Visible(v)) if extendable && !boundary => {
                v.range.end = i + len;
                v.code_points.push(cp);
            }
            _ => tokens.push(Token::Visible(Visible {
                range: i..i + len,
                code_points: vec![cp],
                width: 0,
                joins_previous: !boundary,
                is_newline: false,
            })),
        }
        extendable = true;
        i += len;
    }

    for token in &mut tokens {
        if let Token::Visible(v) = token {
            v.width = cluster_width(&v.code_points, ambiguous);
            // Only a literal newline ends a line; `&#10;` is ordinary text.
            v.is_newline = text[v.range.clone()]
                .chars()
                .next_back()
                .is_some_and(is_newline_char);
        }
    }
    tokens
}

/// Group tokens at line break opportunities.
///
/// Escapes between two groups belong to the following group; trailing
/// escapes belong to the last one.
pub(crate) fn group(tokens: &[Token]) -> Vec<Group> {
    let visible: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter_map(|(i, t)| t.visible().map(|_| i))
        .collect();

    let mut classes: Vec<LineBreak> = Vec::with_capacity(visible.len());
    for &i in &visible {
        let v = tokens[i].visible().map_or(&[][..], |v| v.code_points.as_slice());
        let joins = tokens[i].visible().is_some_and(|v| v.joins_previous);
        let class = match classes.last() {
            Some(&prev) if joins => prev,
            _ => literal_class(cluster_line_break_class(v), &tokens[i]),
        };
        classes.push(class);
    }
    let mut opportunities = break_opportunities(&classes);
    for (k, op) in opportunities.iter_mut().enumerate() {
        if tokens[visible[k + 1]].visible().is_some_and(|v| v.joins_previous) {
            *op = BreakOpportunity::Prohibited;
        }
    }

    let mut groups = Vec::new();
    let mut start = 0;
    for (k, op) in opportunities.iter().enumerate() {
        if *op == BreakOpportunity::Prohibited {
            continue;
        }
        let end = visible[k] + 1;
        groups.push(make_group(tokens, start..end, *op == BreakOpportunity::Mandatory));
        start = end;
    }
    if start < tokens.len() {
        let ends_in_newline = visible
            .last()
            .is_some_and(|&i| tokens[i].visible().is_some_and(|v| v.is_newline));
        groups.push(make_group(tokens, start..tokens.len(), ends_in_newline));
    }
    groups
}

fn is_newline_char(c: char) -> bool {
    matches!(
        c,
        '\n' | '\u{b}' | '\u{c}' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Keep mandatory break classes for literal newlines only.
fn literal_class(class: LineBreak, token: &Token) -> LineBreak {
    let is_newline = token.visible().is_some_and(|v| v.is_newline);
    match class {
        LineBreak::BK | LineBreak::CR | LineBreak::LF | LineBreak::NL if !is_newline => {
            LineBreak::AL
        }
        other => other,
    }
}

fn make_group(tokens: &[Token], range: Range<usize>, mandatory_end: bool) -> Group {
    let slice = &tokens[range.clone()];
    Group {
        width: slice.iter().map(Token::width).sum(),
        has_visible: slice.iter().any(|t| t.visible().is_some()),
        tokens: range,
        mandatory_end,
    }
}
