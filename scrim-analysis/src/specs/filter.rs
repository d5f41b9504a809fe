//! Spec-visibility filter, the only gate between the full fact pool and
//! a handler.
//!
//! Filtering is pure and deterministic: same spec and pool, same result.
//! Search-space reduction happens here; the mining loop never sees a fact
//! this filter dropped.

use scrim_core::Fact;

use super::types::Spec;

/// Facts a spec allows a handler to see, grouped by type in the spec's
/// declared priority order (primaries first, then optionals).
pub struct FilteredFacts<'a> {
    groups: Vec<(&'static str, Vec<&'a Fact>)>,
}

/// Applies a spec's visibility rules to the full fact pool.
///
/// Each group keeps at most `max_facts_per_type` facts, in stable pool
/// order. Fact types the spec does not declare are dropped entirely;
/// empty groups are valid and simply contribute no candidates.
pub fn filter_facts<'a>(spec: &Spec, all_facts: &'a [Fact]) -> FilteredFacts<'a> {
    let per_type_cap = spec.budget.max_facts_per_type as usize;
    let mut groups: Vec<(&'static str, Vec<&'a Fact>)> = spec
        .required_evidence
        .allowed_types()
        .map(|fact_type| (fact_type, Vec::new()))
        .collect();

    for fact in all_facts {
        if let Some((_, group)) = groups
            .iter_mut()
            .find(|(fact_type, _)| *fact_type == fact.fact_type)
        {
            if group.len() < per_type_cap {
                group.push(fact);
            }
        }
    }

    FilteredFacts { groups }
}

impl<'a> FilteredFacts<'a> {
    /// Candidates in mining priority order: group by group, pool order
    /// within each group.
    pub fn candidates(&self) -> impl Iterator<Item = (&'static str, &'a Fact)> + '_ {
        self.groups
            .iter()
            .flat_map(|(fact_type, group)| group.iter().map(move |fact| (*fact_type, *fact)))
    }

    pub fn group(&self, fact_type: &str) -> &[&'a Fact] {
        self.groups
            .iter()
            .find(|(t, _)| *t == fact_type)
            .map(|(_, group)| group.as_slice())
            .unwrap_or(&[])
    }

    pub fn total_candidates(&self) -> usize {
        self.groups.iter().map(|(_, group)| group.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_candidates() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::registry::{momentum_spec, risk_spec};
    use scrim_core::facts::kinds;

    fn pool() -> Vec<Fact> {
        vec![
            Fact::new(kinds::ROUND_SWING).with_rounds(3, 4),
            Fact::new(kinds::PLAYER_IMPACT_STAT).with_note("opening duels 7-2"),
            Fact::new(kinds::HIGH_RISK_SEQUENCE).with_rounds(8, 10),
            Fact::new(kinds::ROUND_SWING).with_rounds(12, 13),
            Fact::new(kinds::FORCE_BUY_ROUND).with_rounds(2, 2),
            Fact::new(kinds::HIGH_RISK_SEQUENCE).with_rounds(15, 17),
            Fact::new(kinds::ROUND_SWING).with_rounds(19, 20),
            Fact::new(kinds::ROUND_SWING).with_rounds(22, 23),
        ]
    }

    #[test]
    fn test_invisible_types_are_dropped() {
        let facts = pool();
        let filtered = filter_facts(&risk_spec(), &facts);
        assert!(filtered.group(kinds::PLAYER_IMPACT_STAT).is_empty());
        assert!(filtered.group(kinds::FORCE_BUY_ROUND).is_empty());
        // Unknown to the spec entirely: not even an empty group.
        assert!(filtered.group("CLUTCH_STREAK").is_empty());
    }

    #[test]
    fn test_per_type_cap_in_stable_order() {
        let facts = pool();
        let filtered = filter_facts(&risk_spec(), &facts);
        let swings = filtered.group(kinds::ROUND_SWING);
        // 4 swings in the pool, capped at 3, first three in pool order.
        assert_eq!(swings.len(), 3);
        assert_eq!(swings[0].round_range, Some((3, 4)));
        assert_eq!(swings[1].round_range, Some((12, 13)));
        assert_eq!(swings[2].round_range, Some((19, 20)));
    }

    #[test]
    fn test_candidates_prioritize_primaries() {
        let facts = pool();
        let filtered = filter_facts(&risk_spec(), &facts);
        let order: Vec<&str> = filtered.candidates().map(|(t, _)| t).collect();
        assert_eq!(
            order,
            vec![
                kinds::HIGH_RISK_SEQUENCE,
                kinds::HIGH_RISK_SEQUENCE,
                kinds::ROUND_SWING,
                kinds::ROUND_SWING,
                kinds::ROUND_SWING,
            ]
        );
    }

    #[test]
    fn test_empty_pool_yields_empty_groups() {
        let filtered = filter_facts(&momentum_spec(), &[]);
        assert!(filtered.is_empty());
        assert_eq!(filtered.total_candidates(), 0);
    }

    #[test]
    fn test_filter_is_deterministic() {
        let facts = pool();
        let a: Vec<_> = filter_facts(&risk_spec(), &facts)
            .candidates()
            .map(|(t, f)| (t, f.round_range))
            .collect();
        let b: Vec<_> = filter_facts(&risk_spec(), &facts)
            .candidates()
            .map(|(t, f)| (t, f.round_range))
            .collect();
        assert_eq!(a, b);
    }
}
