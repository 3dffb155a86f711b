//! Column measurement and line folding.
//!
//! Text is split into visible grapheme clusters and, in ANSI mode, escape
//! sequences. Clusters are grouped at line break opportunities and groups
//! are packed greedily into lines of at most the configured width.
//!
//! # Example
//!
//! ```
//! use unistring::fold::{FoldOptions, folded_lines};
//!
//! let lines = folded_lines("the quick brown fox", &FoldOptions::new().columns(10));
//! assert_eq!(lines, ["the quick ", "brown fox"]);
//! ```

mod charref;
mod tokens;

pub use charref::parse_char_ref;

use crate::ansi::EscapeState;
use crate::link::parse_osc8;
use crate::text::{Cluster, Unistring};
use crate::unicode::linebreak::{BreakOpportunity, break_opportunities, cluster_line_break_class};
use crate::unicode::width::{AmbiguousWidth, ambiguous_width};
use bitflags::bitflags;
use std::ops::Range;
use tokens::{Token, group, tokenize};

/// Default line width when none is configured.
pub const DEFAULT_COLUMNS: usize = 80;

bitflags! {
    /// Input syntaxes recognized while measuring and folding.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct FoldFlags: u8 {
        /// Skip ANSI escape sequences and carry their state across lines.
        const ANSI                = 0x01;
        /// Measure `&#NNN;` and `&#xHHH;` as the referenced character.
        const CHARACTER_REFERENCE = 0x02;
    }
}

/// Options for [`columns_for`], [`folded_lines`] and [`divide_by_columns`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoldOptions {
    columns: Vec<usize>,
    flags: FoldFlags,
    ambiguous_width: Option<AmbiguousWidth>,
}

impl Default for FoldOptions {
    fn default() -> Self {
        Self {
            columns: vec![DEFAULT_COLUMNS],
            flags: FoldFlags::empty(),
            ambiguous_width: None,
        }
    }
}

impl FoldOptions {
    /// Create options with the default width and no escape handling.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use one width for every line.
    #[must_use]
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = vec![columns];
        self
    }

    /// Use a width per line; the last one repeats. An empty list is ignored.
    #[must_use]
    pub fn column_list(mut self, columns: impl IntoIterator<Item = usize>) -> Self {
        let columns: Vec<usize> = columns.into_iter().collect();
        if !columns.is_empty() {
            self.columns = columns;
        }
        self
    }

    /// Enable or disable ANSI escape handling.
    #[must_use]
    pub fn ansi(mut self, enabled: bool) -> Self {
        self.flags.set(FoldFlags::ANSI, enabled);
        self
    }

    /// Enable or disable character reference expansion.
    #[must_use]
    pub fn character_reference(mut self, enabled: bool) -> Self {
        self.flags.set(FoldFlags::CHARACTER_REFERENCE, enabled);
        self
    }

    /// Replace all flags.
    #[must_use]
    pub fn flags(mut self, flags: FoldFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Width of East Asian Ambiguous characters; defaults to the global setting.
    #[must_use]
    pub fn ambiguous_width(mut self, width: AmbiguousWidth) -> Self {
        self.ambiguous_width = Some(width);
        self
    }

    /// Width budget of line `index`.
    #[must_use]
    pub fn columns_for_line(&self, index: usize) -> usize {
        self.columns
            .get(index)
            .or_else(|| self.columns.last())
            .copied()
            .unwrap_or(DEFAULT_COLUMNS)
    }

    #[must_use]
    pub fn is_ansi(&self) -> bool {
        self.flags.contains(FoldFlags::ANSI)
    }

    #[must_use]
    pub fn is_character_reference(&self) -> bool {
        self.flags.contains(FoldFlags::CHARACTER_REFERENCE)
    }

    #[must_use]
    pub fn resolved_ambiguous_width(&self) -> AmbiguousWidth {
        self.ambiguous_width.unwrap_or_else(ambiguous_width)
    }
}

/// Total display width of `text` in columns.
#[must_use]
pub fn columns_for(text: &str, options: &FoldOptions) -> usize {
    tokenize(text, options).iter().map(Token::width).sum()
}

/// Group clusters that must stay on the same line.
#[must_use]
pub fn line_breakable_clusters(text: &str) -> Vec<Vec<Cluster>> {
    let text = Unistring::new(text);
    let classes: Vec<_> = text
        .iter()
        .map(|c| cluster_line_break_class(c.code_points()))
        .collect();
    let opportunities = break_opportunities(&classes);

    let mut groups: Vec<Vec<Cluster>> = Vec::new();
    let mut current: Vec<Cluster> = Vec::new();
    for (i, cluster) in text.iter().enumerate() {
        let breaks_before = i > 0 && opportunities[i - 1] != BreakOpportunity::Prohibited;
        if breaks_before && !current.is_empty() {
            groups.push(std::mem::take(&mut current));
        }
        current.push(cluster.clone());
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

/// Fold `text` into lines no wider than the configured columns.
///
/// A line exceeds its budget only when it holds a single cluster that is
/// wider on its own. Newlines end a line and stay at its end.
#[must_use]
pub fn folded_lines(text: &str, options: &FoldOptions) -> Vec<String> {
    let tokens = tokenize(text, options);
    let spans = fold_spans(&tokens, options);
    let mut renderer = Renderer::new(text, &tokens, options.is_ansi());
    spans.into_iter().map(|span| renderer.render(span)).collect()
}

/// Split `text` at the last cluster boundary within `columns`.
///
/// Zero-width clusters at the cut stay on the left; escapes at the cut go
/// to the right. In ANSI mode each half is closed and reopened so that both
/// render on their own.
#[must_use]
pub fn divide_by_columns(text: &str, columns: isize, options: &FoldOptions) -> (String, String) {
    let Ok(columns) = usize::try_from(columns) else {
        return (String::new(), text.to_string());
    };
    let tokens = tokenize(text, options);
    let total: usize = tokens.iter().map(Token::width).sum();
    if total <= columns {
        return (text.to_string(), String::new());
    }

    let mut width = 0;
    let mut cut = 0;
    for (i, token) in tokens.iter().enumerate() {
        let Some(v) = token.visible() else {
            continue;
        };
        if v.width > 0 && width + v.width > columns {
            break;
        }
        width += v.width;
        cut = i + 1;
    }

    let mut renderer = Renderer::new(text, &tokens, options.is_ansi());
    let left = renderer.render(0..cut);
    let right = renderer.render(cut..tokens.len());
    (left, right)
}

fn flush(spans: &mut Vec<Range<usize>>, at: usize, start: &mut usize) {
    spans.push(*start..at);
    *start = at;
}

/// Pack token groups into lines, returning token ranges.
fn fold_spans(tokens: &[Token], options: &FoldOptions) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut line_start = 0;
    let mut width = 0;
    let mut has_content = false;

    for g in group(tokens) {
        let budget = options.columns_for_line(spans.len());
        if has_content && g.width > 0 && width + g.width > budget {
            flush(&mut spans, g.tokens.start, &mut line_start);
            width = 0;
            has_content = false;
        }

        let budget = options.columns_for_line(spans.len());
        if g.width == 0 || width + g.width <= budget {
            width += g.width;
            has_content |= g.has_visible;
        } else {
            // Oversized group: split between clusters
            let mut after_visible = g.tokens.start;
            for i in g.tokens.clone() {
                let Some(v) = tokens[i].visible() else {
                    continue;
                };
                let budget = options.columns_for_line(spans.len());
                if has_content && v.width > 0 && width + v.width > budget && !v.joins_previous {
                    flush(&mut spans, after_visible, &mut line_start);
                    width = 0;
                }
                width += v.width;
                has_content = true;
                after_visible = i + 1;
            }
        }

        if g.mandatory_end {
            flush(&mut spans, g.tokens.end, &mut line_start);
            width = 0;
            has_content = false;
        }
    }
    if line_start < tokens.len() {
        spans.push(line_start..tokens.len());
    }
    spans
}

/// Writes token spans, closing and reopening escape state at the edges.
struct Renderer<'a> {
    text: &'a str,
    tokens: &'a [Token],
    ansi: bool,
    state: EscapeState,
}

impl<'a> Renderer<'a> {
    fn new(text: &'a str, tokens: &'a [Token], ansi: bool) -> Self {
        Self {
            text,
            tokens,
            ansi,
            state: EscapeState::default(),
        }
    }

    fn slice(&self, i: usize) -> &'a str {
        &self.text[self.tokens[i].range()]
    }

    /// Check whether visible text comes before any link change or line end.
    fn link_body_visible(&self, span: &Range<usize>) -> bool {
        for i in span.clone() {
            match &self.tokens[i] {
                Token::Escape { .. } if parse_osc8(self.slice(i)).is_some() => return false,
                Token::Escape { .. } => {}
                Token::Visible(v) if v.is_newline => return false,
                Token::Visible(v) if v.width > 0 => return true,
                Token::Visible(_) => {}
            }
        }
        false
    }

    fn render(&mut self, span: Range<usize>) -> String {
        if !self.ansi {
            return span.map(|i| self.slice(i)).collect();
        }

        let mut out = String::new();
        let reopen_link = self.state.link().is_some() && self.link_body_visible(&span);
        out.push_str(&self.state.reopen_sequence(reopen_link));
        let mut link_open = reopen_link;

        // The close goes before a trailing newline cluster
        let newline_at = span
            .clone()
            .rev()
            .find_map(|i| self.tokens[i].visible().map(|v| (i, v.is_newline)))
            .and_then(|(i, is_newline)| is_newline.then_some(i));

        for i in span {
            if Some(i) == newline_at {
                out.push_str(&self.state.close_sequence(link_open));
                link_open = false;
            }
            let piece = self.slice(i);
            if let Token::Escape { kind, .. } = &self.tokens[i] {
                self.state.apply(*kind, piece);
                if parse_osc8(piece).is_some() {
                    link_open = self.state.link().is_some();
                }
            }
            out.push_str(piece);
        }
        if newline_at.is_none() {
            out.push_str(&self.state.close_sequence(link_open));
        }
        out
    }
}
