//! Line break opportunities between grapheme clusters (UAX #14 subset).
//!
//! Clusters already absorb combining marks and ZWJ (LB9, LB8a), so the pair
//! rules here run over one resolved class per cluster. Numeric context
//! (LB25) and quotation context (LB15) are simplified to pair rules.

use super::props::{GraphemeBreak, LineBreak, grapheme_break_prop, line_break_prop};

/// Kind of boundary before a cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreakOpportunity {
    /// A line must end here (after BK, CR, LF, NL).
    Mandatory,
    /// A line may end here.
    Allowed,
    /// The clusters must stay on the same line.
    Prohibited,
}

/// Resolve the line break class of a cluster from its base code point (LB1, LB10).
#[must_use]
pub fn cluster_line_break_class(code_points: &[u32]) -> LineBreak {
    let base = code_points
        .iter()
        .copied()
        .find(|&cp| grapheme_break_prop(cp) != GraphemeBreak::Prepend)
        .or_else(|| code_points.first().copied());
    base.map_or(LineBreak::AL, resolve_class)
}

/// Resolve the line break class of a single code point.
#[must_use]
pub fn resolve_class(cp: u32) -> LineBreak {
    use LineBreak as L;
    match line_break_prop(cp) {
        L::AI | L::SG | L::XX | L::SA | L::AK | L::AP | L::AS | L::VF | L::VI | L::CM | L::ZWJ => {
            L::AL
        }
        L::CJ => L::NS,
        other => other,
    }
}

fn is_alphabetic(c: LineBreak) -> bool {
    matches!(c, LineBreak::AL | LineBreak::HL)
}

fn is_hangul(c: LineBreak) -> bool {
    matches!(
        c,
        LineBreak::JL | LineBreak::JV | LineBreak::JT | LineBreak::H2 | LineBreak::H3
    )
}

/// Decide the boundary between two adjacent clusters.
///
/// `before_spaces` is the class of the last non-space cluster before `next`
/// and `spaces` tells whether spaces separate it from `next`.
#[must_use]
pub fn pair_opportunity(
    prev: LineBreak,
    next: LineBreak,
    before_spaces: LineBreak,
    spaces: bool,
) -> BreakOpportunity {
    use BreakOpportunity::{Allowed, Mandatory, Prohibited};
    use LineBreak as L;

    match (prev, next) {
        // LB4, LB5
        (L::CR, L::LF) => return Prohibited,
        (L::BK | L::CR | L::LF | L::NL, _) => return Mandatory,
        // LB6, LB7
        (_, L::BK | L::CR | L::LF | L::NL | L::SP | L::ZW) => return Prohibited,
        _ => {}
    }

    // LB8
    if before_spaces == L::ZW {
        return Allowed;
    }
    // LB11
    if next == L::WJ || prev == L::WJ {
        return Prohibited;
    }
    // LB12
    if prev == L::GL {
        return Prohibited;
    }
    // LB12a
    if next == L::GL && !matches!(prev, L::SP | L::BA | L::HY) {
        return Prohibited;
    }
    // LB13
    if matches!(next, L::CL | L::CP | L::EX | L::IS | L::SY) {
        return Prohibited;
    }
    // LB14
    if before_spaces == L::OP {
        return Prohibited;
    }
    // LB16
    if spaces && matches!(before_spaces, L::CL | L::CP) && next == L::NS {
        return Prohibited;
    }
    // LB17
    if before_spaces == L::B2 && next == L::B2 {
        return Prohibited;
    }
    // LB18
    if prev == L::SP {
        return Allowed;
    }
    // LB19
    if next == L::QU || prev == L::QU {
        return Prohibited;
    }
    // LB20
    if next == L::CB || prev == L::CB {
        return Allowed;
    }

    let prohibited = match (prev, next) {
        // LB21, LB21b, LB22
        (_, L::BA | L::HY | L::NS | L::IN) | (L::BB, _) => true,
        (L::SY, L::HL) => true,
        // LB23, LB23a
        (a, L::NU) | (L::NU, a) if is_alphabetic(a) => true,
        (L::PR, L::ID | L::EB | L::EM) | (L::ID | L::EB | L::EM, L::PO) => true,
        // LB24
        (L::PR | L::PO, a) | (a, L::PR | L::PO) if is_alphabetic(a) => true,
        // LB25
        (L::PR | L::PO, L::NU)
        | (L::OP | L::HY, L::NU)
        | (L::NU, L::NU | L::PO | L::PR)
        | (L::SY | L::IS, L::NU) => true,
        // LB26
        (L::JL, L::JL | L::JV | L::H2 | L::H3)
        | (L::JV | L::H2, L::JV | L::JT)
        | (L::JT | L::H3, L::JT) => true,
        // LB27
        (h, L::PO) | (L::PR, h) if is_hangul(h) => true,
        // LB28, LB29
        (a, b) if is_alphabetic(a) && is_alphabetic(b) => true,
        (L::IS, b) if is_alphabetic(b) => true,
        // LB30
        (a, L::OP) if is_alphabetic(a) || a == L::NU => true,
        (L::CP, b) if is_alphabetic(b) || b == L::NU => true,
        // LB30b
        (L::EB, L::EM) => true,
        _ => false,
    };

    // LB31
    if prohibited { Prohibited } else { Allowed }
}

/// Break opportunities before each cluster after the first.
///
/// `classes[i]` is the resolved class of cluster `i`; the result has
/// `classes.len() - 1` entries (or none for empty input).
#[must_use]
pub fn break_opportunities(classes: &[LineBreak]) -> Vec<BreakOpportunity> {
    let mut out = Vec::with_capacity(classes.len().saturating_sub(1));
    let Some(&first) = classes.first() else {
        return out;
    };
    let mut before_spaces = first;
    let mut spaces = first == LineBreak::SP;
    for pair in classes.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        out.push(pair_opportunity(prev, next, before_spaces, spaces));
        if next == LineBreak::SP {
            spaces = true;
        } else {
            before_spaces = next;
            spaces = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use BreakOpportunity::{Allowed, Mandatory, Prohibited};

    fn classes(s: &str) -> Vec<LineBreak> {
        s.chars().map(|c| resolve_class(u32::from(c))).collect()
    }

    #[test]
    fn test_latin_words_break_after_spaces() {
        let ops = break_opportunities(&classes("ab cd"));
        assert_eq!(ops, vec![Prohibited, Prohibited, Allowed, Prohibited]);
    }

    #[test]
    fn test_east_asian_breaks_anywhere() {
        let ops = break_opportunities(&classes("あいう"));
        assert_eq!(ops, vec![Allowed, Allowed]);
    }

    #[test]
    fn test_no_break_before_closing_punctuation() {
        let ops = break_opportunities(&classes("あ。い"));
        assert_eq!(ops, vec![Prohibited, Allowed]);
        let ops = break_opportunities(&classes("(a)"));
        assert_eq!(ops, vec![Prohibited, Prohibited]);
    }

    #[test]
    fn test_mandatory_breaks() {
        let ops = break_opportunities(&classes("a\nb"));
        assert_eq!(ops, vec![Prohibited, Mandatory]);
        let ops = break_opportunities(&classes("a\r\nb"));
        assert_eq!(ops, vec![Prohibited, Prohibited, Mandatory]);
    }

    #[test]
    fn test_numbers_stay_together() {
        let ops = break_opportunities(&classes("$12.50"));
        assert!(ops.iter().all(|&op| op == Prohibited));
    }

    #[test]
    fn test_hyphen_allows_break_after() {
        let ops = break_opportunities(&classes("well-known"));
        assert_eq!(ops[3], Prohibited); // before '-'
        assert_eq!(ops[4], Allowed); // after '-'
    }

    #[test]
    fn test_opening_punctuation_binds_forward() {
        let ops = break_opportunities(&classes("「あ」"));
        assert_eq!(ops, vec![Prohibited, Prohibited]);
    }

    #[test]
    fn test_cluster_class_resolution() {
        assert_eq!(cluster_line_break_class(&[0x0301]), LineBreak::AL);
        assert_eq!(cluster_line_break_class(&[u32::from('あ'), 0x3099]), LineBreak::ID);
        assert_eq!(cluster_line_break_class(&[]), LineBreak::AL);
        assert_eq!(resolve_class(u32::from('ー')), LineBreak::NS);
    }
}
