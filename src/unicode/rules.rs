//! Ordered boundary rule tables.
//!
//! Word and sentence boundaries are decided by walking a table of
//! `(predicate, action)` pairs; the first rule whose predicate holds wins.

/// Outcome of a matching rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Break,
    NoBreak,
}

/// One numbered boundary rule.
pub struct Rule<C> {
    /// Rule identifier as numbered in UAX #29 (e.g. `"WB6"`).
    pub name: &'static str,
    pub applies: fn(&C) -> bool,
    pub action: Action,
}

/// Evaluate a rule table, returning the winning rule's name and action.
pub fn evaluate<C>(rules: &[Rule<C>], ctx: &C) -> Option<(&'static str, Action)> {
    rules
        .iter()
        .find(|r| (r.applies)(ctx))
        .map(|r| (r.name, r.action))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &[Rule<(u8, u8)>] = &[
        Rule {
            name: "R1",
            applies: |c| c.0 == c.1,
            action: Action::NoBreak,
        },
        Rule {
            name: "R2",
            applies: |c| c.0 == 0,
            action: Action::Break,
        },
    ];

    #[test]
    fn test_first_rule_wins() {
        assert_eq!(evaluate(RULES, &(0, 0)), Some(("R1", Action::NoBreak)));
        assert_eq!(evaluate(RULES, &(0, 1)), Some(("R2", Action::Break)));
        assert_eq!(evaluate(RULES, &(1, 2)), None);
    }
}
