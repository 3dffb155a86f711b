//! Sentence boundaries (UAX #29 SB rules).
//!
//! Like the word scan, this runs over code points with Extend and Format
//! absorbed into the preceding atom (SB5). The terminator context
//! `SATerm Close* Sp* ParaSep?` is tracked forward as a small state, and the
//! SB8 lookahead uses a precomputed "next strong class" array, keeping the
//! whole scan linear.

use super::props::{SentenceBreak, sentence_break_prop};
use super::rules::{Action, Rule, evaluate};

/// Progress through `SATerm Close* Sp* ParaSep?`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Phase {
    Term,
    Close,
    Space,
    Para,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct TermState {
    /// The run started with ATerm (not STerm).
    aterm: bool,
    phase: Phase,
}

#[derive(Clone, Copy, Debug)]
struct SentenceContext {
    raw_prev: SentenceBreak,
    raw_next: SentenceBreak,
    absorbed: bool,
    b2: SentenceBreak,
    b: SentenceBreak,
    a: SentenceBreak,
    /// Terminator state after the significant atom before the position.
    term: Option<TermState>,
    /// First of OLetter/Upper/Lower/ParaSep/SATerm at or after the position.
    strong: SentenceBreak,
}

fn is_para_sep(p: SentenceBreak) -> bool {
    matches!(p, SentenceBreak::Sep | SentenceBreak::Cr | SentenceBreak::Lf)
}

fn is_saterm(p: SentenceBreak) -> bool {
    matches!(p, SentenceBreak::ATerm | SentenceBreak::STerm)
}

fn is_strong(p: SentenceBreak) -> bool {
    matches!(
        p,
        SentenceBreak::OLetter
            | SentenceBreak::Upper
            | SentenceBreak::Lower
            | SentenceBreak::Sep
            | SentenceBreak::Cr
            | SentenceBreak::Lf
            | SentenceBreak::STerm
            | SentenceBreak::ATerm
    )
}

fn term_within(c: &SentenceContext, phase: Phase) -> bool {
    c.term.is_some_and(|t| t.phase <= phase)
}

const SENTENCE_RULES: &[Rule<SentenceContext>] = &[
    Rule {
        name: "SB3",
        applies: |c| c.raw_prev == SentenceBreak::Cr && c.raw_next == SentenceBreak::Lf,
        action: Action::NoBreak,
    },
    Rule {
        name: "SB4",
        applies: |c| is_para_sep(c.raw_prev),
        action: Action::Break,
    },
    Rule {
        name: "SB5",
        applies: |c| c.absorbed,
        action: Action::NoBreak,
    },
    Rule {
        name: "SB6",
        applies: |c| c.b == SentenceBreak::ATerm && c.a == SentenceBreak::Numeric,
        action: Action::NoBreak,
    },
    Rule {
        name: "SB7",
        applies: |c| {
            matches!(c.b2, SentenceBreak::Upper | SentenceBreak::Lower)
                && c.b == SentenceBreak::ATerm
                && c.a == SentenceBreak::Upper
        },
        action: Action::NoBreak,
    },
    Rule {
        name: "SB8",
        applies: |c| {
            c.term.is_some_and(|t| t.aterm && t.phase <= Phase::Space)
                && c.strong == SentenceBreak::Lower
        },
        action: Action::NoBreak,
    },
    Rule {
        name: "SB8a",
        applies: |c| {
            term_within(c, Phase::Space) && (c.a == SentenceBreak::SContinue || is_saterm(c.a))
        },
        action: Action::NoBreak,
    },
    Rule {
        name: "SB9",
        applies: |c| {
            term_within(c, Phase::Close)
                && (matches!(c.a, SentenceBreak::Close | SentenceBreak::Sp) || is_para_sep(c.a))
        },
        action: Action::NoBreak,
    },
    Rule {
        name: "SB10",
        applies: |c| {
            term_within(c, Phase::Space) && (c.a == SentenceBreak::Sp || is_para_sep(c.a))
        },
        action: Action::NoBreak,
    },
    Rule {
        name: "SB11",
        applies: |c| c.term.is_some(),
        action: Action::Break,
    },
];

/// Boundary decision before one code point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SentenceDecision {
    pub index: usize,
    /// Deciding rule; `"SB998"` when no rule applied.
    pub rule: &'static str,
    pub is_break: bool,
}

/// Decide every interior sentence boundary of a code point sequence.
#[must_use]
pub fn sentence_decisions(code_points: &[u32]) -> Vec<SentenceDecision> {
    let n = code_points.len();
    if n < 2 {
        return Vec::new();
    }

    let props: Vec<SentenceBreak> = code_points.iter().map(|&cp| sentence_break_prop(cp)).collect();

    let mut owner = vec![0usize; n];
    let mut significant = Vec::with_capacity(n);
    let mut sig_pos = vec![0usize; n];
    for i in 0..n {
        let absorbed = i > 0
            && matches!(props[i], SentenceBreak::Extend | SentenceBreak::Format)
            && !is_para_sep(props[owner[i - 1]]);
        if absorbed {
            owner[i] = owner[i - 1];
        } else {
            owner[i] = i;
            sig_pos[i] = significant.len();
            significant.push(i);
        }
    }

    // terminator state after each significant atom
    let mut states: Vec<Option<TermState>> = Vec::with_capacity(significant.len());
    let mut state: Option<TermState> = None;
    for &atom in &significant {
        let p = props[atom];
        state = if is_saterm(p) {
            Some(TermState {
                aterm: p == SentenceBreak::ATerm,
                phase: Phase::Term,
            })
        } else {
            match state {
                Some(t) if p == SentenceBreak::Close && t.phase <= Phase::Close => {
                    Some(TermState { phase: Phase::Close, ..t })
                }
                Some(t) if p == SentenceBreak::Sp && t.phase <= Phase::Space => {
                    Some(TermState { phase: Phase::Space, ..t })
                }
                Some(t) if is_para_sep(p) && t.phase <= Phase::Space => {
                    Some(TermState { phase: Phase::Para, ..t })
                }
                _ => None,
            }
        };
        states.push(state);
    }

    // strong[k]: first strong class at or after significant atom k
    let mut strong = vec![SentenceBreak::Eot; significant.len() + 1];
    for k in (0..significant.len()).rev() {
        let p = props[significant[k]];
        strong[k] = if is_strong(p) { p } else { strong[k + 1] };
    }

    let mut decisions = Vec::with_capacity(n - 1);
    for i in 1..n {
        let absorbed = owner[i] != i;
        let k = sig_pos[i];
        let mut ctx = SentenceContext {
            raw_prev: props[i - 1],
            raw_next: props[i],
            absorbed,
            b2: SentenceBreak::Other,
            b: SentenceBreak::Other,
            a: props[i],
            term: None,
            strong: SentenceBreak::Eot,
        };
        if !absorbed {
            ctx.b = props[significant[k - 1]];
            ctx.b2 = k
                .checked_sub(2)
                .map_or(SentenceBreak::Sot, |j| props[significant[j]]);
            ctx.term = states[k - 1];
            ctx.strong = strong[k];
        }

        let (rule, is_break) = match evaluate(SENTENCE_RULES, &ctx) {
            Some((name, action)) => (name, action == Action::Break),
            None => ("SB998", false),
        };
        decisions.push(SentenceDecision {
            index: i,
            rule,
            is_break,
        });
    }
    decisions
}

/// Compute sentence start offsets (code point indices).
///
/// The result is empty for empty input and otherwise begins with 0.
#[must_use]
pub fn sentence_boundaries(code_points: &[u32]) -> Vec<usize> {
    if code_points.is_empty() {
        return Vec::new();
    }
    let mut starts = vec![0];
    starts.extend(
        sentence_decisions(code_points)
            .into_iter()
            .filter(|d| d.is_break)
            .map(|d| d.index),
    );
    starts
}
