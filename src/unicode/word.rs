//! Word boundaries (UAX #29 WB rules) with an optional script extension.
//!
//! The scan runs over code points. Extend, Format and ZWJ attach to the atom
//! before them (WB4) unless that atom is a line break or start of text, so
//! the context rules see only the significant atoms around each position.
//!
//! In extended mode, two adjacent significant atoms that would otherwise be
//! separated by WB999 stay together when they share a script and neither is
//! white space. Standard rules always take precedence.

use super::props::{Script, WordBreak, is_extended_pictographic, script_prop, word_break_prop};
use super::rules::{Action, Rule, evaluate};
use super::utf16::to_char;

/// Context for deciding the boundary before atom `i`.
#[derive(Clone, Copy, Debug)]
struct WordContext {
    /// Rule classes of the raw code points at `i - 1` and `i`.
    raw_prev: WordBreak,
    raw_next: WordBreak,
    /// Atom `i` is Extended_Pictographic (per the grapheme table).
    next_pictographic: bool,
    /// Atom `i` is absorbed into the previous atom by WB4.
    absorbed: bool,
    /// Significant atoms: two before, one before, at, and after the position.
    b2: WordBreak,
    b: WordBreak,
    a: WordBreak,
    a2: WordBreak,
    /// Length of the Regional_Indicator run ending at `b`.
    ri_run: usize,
}

/// Hiragana and Extended_Pictographic are reporting classes only.
fn rule_class(prop: WordBreak) -> WordBreak {
    match prop {
        WordBreak::Hiragana | WordBreak::ExtendedPictographic => WordBreak::Other,
        other => other,
    }
}

fn is_newline(p: WordBreak) -> bool {
    matches!(p, WordBreak::Cr | WordBreak::Lf | WordBreak::Newline)
}

fn is_ignorable(p: WordBreak) -> bool {
    matches!(p, WordBreak::Extend | WordBreak::Format | WordBreak::Zwj)
}

fn is_ahletter(p: WordBreak) -> bool {
    matches!(p, WordBreak::ALetter | WordBreak::HebrewLetter)
}

fn is_mid_num_let_q(p: WordBreak) -> bool {
    matches!(p, WordBreak::MidNumLet | WordBreak::SingleQuote)
}

const WORD_RULES: &[Rule<WordContext>] = &[
    Rule {
        name: "WB3",
        applies: |c| c.raw_prev == WordBreak::Cr && c.raw_next == WordBreak::Lf,
        action: Action::NoBreak,
    },
    Rule {
        name: "WB3a",
        applies: |c| is_newline(c.raw_prev),
        action: Action::Break,
    },
    Rule {
        name: "WB3b",
        applies: |c| is_newline(c.raw_next),
        action: Action::Break,
    },
    Rule {
        name: "WB3c",
        applies: |c| c.raw_prev == WordBreak::Zwj && c.next_pictographic,
        action: Action::NoBreak,
    },
    Rule {
        name: "WB3d",
        applies: |c| c.raw_prev == WordBreak::WSegSpace && c.raw_next == WordBreak::WSegSpace,
        action: Action::NoBreak,
    },
    Rule {
        name: "WB4",
        applies: |c| c.absorbed,
        action: Action::NoBreak,
    },
    Rule {
        name: "WB5",
        applies: |c| is_ahletter(c.b) && is_ahletter(c.a),
        action: Action::NoBreak,
    },
    Rule {
        name: "WB6",
        applies: |c| {
            is_ahletter(c.b)
                && (c.a == WordBreak::MidLetter || is_mid_num_let_q(c.a))
                && is_ahletter(c.a2)
        },
        action: Action::NoBreak,
    },
    Rule {
        name: "WB7",
        applies: |c| {
            is_ahletter(c.b2)
                && (c.b == WordBreak::MidLetter || is_mid_num_let_q(c.b))
                && is_ahletter(c.a)
        },
        action: Action::NoBreak,
    },
    Rule {
        name: "WB7a",
        applies: |c| c.b == WordBreak::HebrewLetter && c.a == WordBreak::SingleQuote,
        action: Action::NoBreak,
    },
    Rule {
        name: "WB7b",
        applies: |c| {
            c.b == WordBreak::HebrewLetter
                && c.a == WordBreak::DoubleQuote
                && c.a2 == WordBreak::HebrewLetter
        },
        action: Action::NoBreak,
    },
    Rule {
        name: "WB7c",
        applies: |c| {
            c.b2 == WordBreak::HebrewLetter
                && c.b == WordBreak::DoubleQuote
                && c.a == WordBreak::HebrewLetter
        },
        action: Action::NoBreak,
    },
    Rule {
        name: "WB8",
        applies: |c| c.b == WordBreak::Numeric && c.a == WordBreak::Numeric,
        action: Action::NoBreak,
    },
    Rule {
        name: "WB9",
        applies: |c| is_ahletter(c.b) && c.a == WordBreak::Numeric,
        action: Action::NoBreak,
    },
    Rule {
        name: "WB10",
        applies: |c| c.b == WordBreak::Numeric && is_ahletter(c.a),
        action: Action::NoBreak,
    },
    Rule {
        name: "WB11",
        applies: |c| {
            c.b2 == WordBreak::Numeric
                && (c.b == WordBreak::MidNum || is_mid_num_let_q(c.b))
                && c.a == WordBreak::Numeric
        },
        action: Action::NoBreak,
    },
    Rule {
        name: "WB12",
        applies: |c| {
            c.b == WordBreak::Numeric
                && (c.a == WordBreak::MidNum || is_mid_num_let_q(c.a))
                && c.a2 == WordBreak::Numeric
        },
        action: Action::NoBreak,
    },
    Rule {
        name: "WB13",
        applies: |c| c.b == WordBreak::Katakana && c.a == WordBreak::Katakana,
        action: Action::NoBreak,
    },
    Rule {
        name: "WB13a",
        applies: |c| {
            (is_ahletter(c.b)
                || matches!(
                    c.b,
                    WordBreak::Numeric | WordBreak::Katakana | WordBreak::ExtendNumLet
                ))
                && c.a == WordBreak::ExtendNumLet
        },
        action: Action::NoBreak,
    },
    Rule {
        name: "WB13b",
        applies: |c| {
            c.b == WordBreak::ExtendNumLet
                && (is_ahletter(c.a) || matches!(c.a, WordBreak::Numeric | WordBreak::Katakana))
        },
        action: Action::NoBreak,
    },
    Rule {
        name: "WB15",
        applies: |c| {
            c.b == WordBreak::RegionalIndicator
                && c.a == WordBreak::RegionalIndicator
                && c.ri_run % 2 == 1
        },
        action: Action::NoBreak,
    },
];

fn is_space(prop: WordBreak, cp: u32) -> bool {
    prop == WordBreak::WSegSpace || is_newline(prop) || to_char(cp).is_whitespace()
}

/// Boundary decision before one code point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordDecision {
    /// Code point index the decision applies to.
    pub index: usize,
    /// Deciding rule (`"WB999"` when none applied, `"WBscript"` for the
    /// script extension).
    pub rule: &'static str,
    pub is_break: bool,
}

/// Decide every interior word boundary of a code point sequence.
#[must_use]
pub fn word_decisions(code_points: &[u32], extended: bool) -> Vec<WordDecision> {
    let n = code_points.len();
    if n < 2 {
        return Vec::new();
    }

    let classes: Vec<WordBreak> = code_points
        .iter()
        .map(|&cp| rule_class(word_break_prop(cp)))
        .collect();

    // owner[i]: the significant atom that atom i belongs to
    let mut owner = vec![0usize; n];
    let mut significant = Vec::with_capacity(n);
    let mut sig_pos = vec![0usize; n];
    for i in 0..n {
        let absorbed = i > 0
            && is_ignorable(classes[i])
            && !is_newline(classes[i - 1])
            && !is_newline(classes[owner[i - 1]]);
        if absorbed {
            owner[i] = owner[i - 1];
        } else {
            owner[i] = i;
            sig_pos[i] = significant.len();
            significant.push(i);
        }
    }

    let mut ri_runs = Vec::with_capacity(significant.len());
    let mut run = 0usize;
    for &atom in &significant {
        run = if classes[atom] == WordBreak::RegionalIndicator {
            run + 1
        } else {
            0
        };
        ri_runs.push(run);
    }

    let class_at = |k: Option<usize>, fallback: WordBreak| {
        k.and_then(|k| significant.get(k))
            .map_or(fallback, |&atom| classes[atom])
    };

    let mut decisions = Vec::with_capacity(n - 1);
    for i in 1..n {
        let absorbed = owner[i] != i;
        let k = sig_pos[i];
        let mut ctx = WordContext {
            raw_prev: classes[i - 1],
            raw_next: classes[i],
            next_pictographic: is_extended_pictographic(code_points[i]),
            absorbed,
            b2: WordBreak::Other,
            b: WordBreak::Other,
            a: classes[i],
            a2: WordBreak::Other,
            ri_run: 0,
        };
        if !absorbed {
            ctx.b2 = class_at(k.checked_sub(2), WordBreak::Sot);
            ctx.b = class_at(k.checked_sub(1), WordBreak::Sot);
            ctx.a2 = class_at(Some(k + 1), WordBreak::Eot);
            ctx.ri_run = k.checked_sub(1).map_or(0, |p| ri_runs[p]);
        }

        let (rule, is_break) = match evaluate(WORD_RULES, &ctx) {
            Some((name, action)) => (name, action == Action::Break),
            None if extended => {
                let prev_atom = significant[k - 1];
                if same_script_run((ctx.b, code_points[prev_atom]), (ctx.a, code_points[i])) {
                    ("WBscript", false)
                } else {
                    ("WB999", true)
                }
            }
            None => ("WB999", true),
        };
        decisions.push(WordDecision {
            index: i,
            rule,
            is_break,
        });
    }
    decisions
}

/// Compute word start offsets (code point indices) for a code point sequence.
///
/// The result is empty for empty input and otherwise begins with 0.
#[must_use]
pub fn word_boundaries(code_points: &[u32], extended: bool) -> Vec<usize> {
    if code_points.is_empty() {
        return Vec::new();
    }
    let mut starts = vec![0];
    starts.extend(
        word_decisions(code_points, extended)
            .into_iter()
            .filter(|d| d.is_break)
            .map(|d| d.index),
    );
    starts
}

fn same_script_run(prev: (WordBreak, u32), next: (WordBreak, u32)) -> bool {
    if is_space(prev.0, prev.1) || is_space(next.0, next.1) {
        return false;
    }
    let (sp, sn): (Script, Script) = (script_prop(prev.1), script_prop(next.1));
    sp == sn
}
