//! SpecRegistry: built-in evidence specs and intent resolution.
//!
//! The registry is built once at engine startup and read-only afterwards.
//! Resolution is a total function: intents without a spec of their own
//! fall back to the summary spec, the most permissive one.

use rustc_hash::FxHashMap;
use scrim_core::facts::kinds;

use super::types::{Intent, OutputContract, RequiredEvidence, Spec, SpecBudget, SpecFocus};

/// Registry of evidence specs keyed by the intents they answer.
pub struct SpecRegistry {
    specs: Vec<Spec>,
    by_intent: FxHashMap<Intent, usize>,
    fallback_idx: usize,
}

impl SpecRegistry {
    /// Builds a registry from the given specs, using the spec with
    /// `fallback_focus` as the resolution fallback.
    ///
    /// Panics if two specs claim the same intent, if a spec lists a fact
    /// type as both primary and optional, or if no spec carries the
    /// fallback focus. These are construction-time programmer errors.
    pub fn new(specs: Vec<Spec>, fallback_focus: SpecFocus) -> Self {
        let mut by_intent = FxHashMap::default();
        for (idx, spec) in specs.iter().enumerate() {
            for primary in &spec.required_evidence.primary_fact_types {
                assert!(
                    !spec.required_evidence.optional_fact_types.contains(primary),
                    "spec {} lists {} as both primary and optional",
                    spec.focus,
                    primary
                );
            }
            for intent in &spec.intents {
                let previous = by_intent.insert(*intent, idx);
                assert!(
                    previous.is_none(),
                    "intent {} is claimed by more than one spec",
                    intent
                );
            }
        }
        let fallback_idx = specs
            .iter()
            .position(|spec| spec.focus == fallback_focus)
            .unwrap_or_else(|| panic!("no spec registered for fallback focus {fallback_focus}"));
        Self {
            specs,
            by_intent,
            fallback_idx,
        }
    }

    /// Resolves an intent to its spec; unmapped intents get the fallback.
    pub fn resolve(&self, intent: Intent) -> &Spec {
        let idx = self
            .by_intent
            .get(&intent)
            .copied()
            .unwrap_or(self.fallback_idx);
        &self.specs[idx]
    }

    /// Resolves a raw classifier string. Strings that parse to no known
    /// intent are answered as summary questions.
    pub fn resolve_str(&self, raw: &str) -> (Intent, &Spec) {
        match Intent::parse(raw) {
            Some(intent) => (intent, self.resolve(intent)),
            None => {
                tracing::debug!(intent = raw, "unrecognized intent, using fallback spec");
                (Intent::MatchSummary, &self.specs[self.fallback_idx])
            }
        }
    }

    pub fn specs(&self) -> &[Spec] {
        &self.specs
    }

    pub fn count(&self) -> usize {
        self.specs.len()
    }
}

/// Economy spec: force-buys, saves, and collapse chains.
pub fn economy_spec() -> Spec {
    Spec {
        focus: SpecFocus::Economy,
        required_evidence: RequiredEvidence {
            primary_fact_types: vec![
                kinds::FORCE_BUY_ROUND,
                kinds::ECO_COLLAPSE_SEQUENCE,
                kinds::ECONOMIC_PATTERN,
            ],
            optional_fact_types: vec![kinds::FULL_BUY_ROUND, kinds::ROUND_SWING],
            required_schema_fields: vec![],
            allowed_missing_fields: vec!["Series.winner", "teams.score", "result"],
        },
        budget: SpecBudget {
            max_facts_total: 5,
            max_facts_per_type: 3,
            max_events_window: Some(500),
            max_analysis_methods: 2,
        },
        output_contract: OutputContract {
            standard_min_confidence: 0.75,
            standard_min_facts: 2,
            degraded_max_uncertainty: 0.7,
            degraded_min_facts: 1,
            ..OutputContract::default()
        },
        intents: vec![
            Intent::EconomicCounterfactual,
            Intent::EconomicFailure,
            Intent::TacticalEval,
        ],
        followups: vec![
            "Pull economy detail for the flagged force-buy rounds",
            "Check how lost rounds line up with force-buy calls",
            "Evaluate force-buy timing against payout",
        ],
    }
}

/// Risk spec: high-risk sequences and momentum swings.
pub fn risk_spec() -> Spec {
    Spec {
        focus: SpecFocus::Risk,
        required_evidence: RequiredEvidence {
            primary_fact_types: vec![kinds::HIGH_RISK_SEQUENCE, kinds::ROUND_SWING],
            optional_fact_types: vec![kinds::ECO_COLLAPSE_SEQUENCE, kinds::OBJECTIVE_LOSS_CHAIN],
            required_schema_fields: vec![],
            allowed_missing_fields: vec!["Series.winner", "teams.score"],
        },
        budget: SpecBudget {
            max_facts_total: 5,
            max_facts_per_type: 3,
            max_events_window: Some(1000),
            max_analysis_methods: 2,
        },
        output_contract: OutputContract {
            standard_min_confidence: 0.7,
            standard_min_facts: 2,
            degraded_max_uncertainty: 0.6,
            degraded_min_facts: 1,
            ..OutputContract::default()
        },
        intents: vec![
            Intent::RiskAssessment,
            Intent::StabilityAnalysis,
            Intent::CollapseOnsetAnalysis,
        ],
        followups: vec![
            "Collect risk segments from more games",
            "Review why the flagged rounds were lost",
            "Drill the economy calls inside high-risk stretches",
        ],
    }
}

/// Map spec: objective-loss chains and site weak points.
pub fn map_spec() -> Spec {
    Spec {
        focus: SpecFocus::Map,
        required_evidence: RequiredEvidence {
            primary_fact_types: vec![kinds::OBJECTIVE_LOSS_CHAIN, kinds::HIGH_RISK_SEQUENCE],
            optional_fact_types: vec![kinds::ROUND_SWING],
            required_schema_fields: vec![],
            allowed_missing_fields: vec!["Series.winner", "teams.score"],
        },
        budget: SpecBudget {
            max_facts_total: 4,
            max_facts_per_type: 2,
            max_events_window: Some(800),
            max_analysis_methods: 2,
        },
        output_contract: OutputContract {
            standard_min_confidence: 0.7,
            standard_min_facts: 2,
            degraded_max_uncertainty: 0.7,
            degraded_min_facts: 1,
            ..OutputContract::default()
        },
        intents: vec![Intent::MapWeakPoint, Intent::ExecutionVsStrategy],
        followups: vec![
            "Review site setups for the repeated objective losses",
            "Collect position traces for the weak-point rounds",
            "Compare executes on the problem site across games",
        ],
    }
}

/// Player spec: individual impact stats.
pub fn player_spec() -> Spec {
    Spec {
        focus: SpecFocus::Player,
        required_evidence: RequiredEvidence {
            primary_fact_types: vec![kinds::PLAYER_IMPACT_STAT, kinds::ROUND_SWING],
            optional_fact_types: vec![kinds::HIGH_RISK_SEQUENCE],
            required_schema_fields: vec![],
            allowed_missing_fields: vec!["Series.winner", "teams.score"],
        },
        budget: SpecBudget {
            max_facts_total: 4,
            max_facts_per_type: 2,
            max_events_window: Some(1000),
            max_analysis_methods: 2,
        },
        output_contract: OutputContract {
            standard_min_confidence: 0.7,
            standard_min_facts: 2,
            degraded_max_uncertainty: 0.75,
            degraded_min_facts: 1,
            ..OutputContract::default()
        },
        intents: vec![Intent::PlayerReview, Intent::CounterfactualPlayerImpact],
        followups: vec![
            "Pull opening-duel and clutch detail for the key player",
            "Compare the player's impact across maps",
            "Review role assignments in the swing rounds",
        ],
    }
}

/// Summary spec: whole-match review. The most permissive spec and the
/// resolution fallback for unmapped intents.
pub fn summary_spec() -> Spec {
    Spec {
        focus: SpecFocus::Summary,
        required_evidence: RequiredEvidence {
            primary_fact_types: vec![kinds::CONTEXT_ONLY],
            optional_fact_types: vec![
                kinds::ROUND_SWING,
                kinds::HIGH_RISK_SEQUENCE,
                kinds::ECO_COLLAPSE_SEQUENCE,
            ],
            required_schema_fields: vec![],
            allowed_missing_fields: vec!["Series.winner", "teams.score", "result"],
        },
        budget: SpecBudget {
            max_facts_total: 3,
            max_facts_per_type: 1,
            max_events_window: Some(2000),
            max_analysis_methods: 1,
        },
        output_contract: OutputContract {
            standard_min_confidence: 0.6,
            standard_min_facts: 1,
            degraded_max_uncertainty: 0.8,
            degraded_min_facts: 1,
            ..OutputContract::default()
        },
        intents: vec![Intent::MatchSummary, Intent::MatchReview],
        followups: vec![
            "Ask a focused follow-up on economy, risk, or momentum",
            "Supply the final scoreline to firm up the review",
            "Add more matches to widen the comparison pool",
        ],
    }
}

/// Momentum spec: swings and phase shifts.
pub fn momentum_spec() -> Spec {
    Spec {
        focus: SpecFocus::Momentum,
        required_evidence: RequiredEvidence {
            primary_fact_types: vec![kinds::ROUND_SWING],
            optional_fact_types: vec![kinds::HIGH_RISK_SEQUENCE],
            required_schema_fields: vec![],
            allowed_missing_fields: vec!["Series.winner", "teams.score"],
        },
        budget: SpecBudget {
            max_facts_total: 5,
            max_facts_per_type: 3,
            max_events_window: Some(1500),
            max_analysis_methods: 2,
        },
        output_contract: OutputContract {
            standard_min_confidence: 0.7,
            standard_min_facts: 2,
            degraded_max_uncertainty: 0.7,
            degraded_min_facts: 1,
            ..OutputContract::default()
        },
        intents: vec![Intent::MomentumAnalysis, Intent::PhaseComparison],
        followups: vec![
            "Check opening and closing play around the swing rounds",
            "Compare momentum across halves",
            "Collect swing events from other maps",
        ],
    }
}

/// Create the registry with all six built-in specs.
pub fn create_default_registry() -> SpecRegistry {
    SpecRegistry::new(
        vec![
            economy_spec(),
            risk_spec(),
            map_spec(),
            player_spec(),
            summary_spec(),
            momentum_spec(),
        ],
        SpecFocus::Summary,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_intent_resolves() {
        let registry = create_default_registry();
        for intent in Intent::ALL {
            // Resolution is total; this must not fall back for known intents.
            let spec = registry.resolve(*intent);
            assert!(spec.intents.contains(intent), "intent {intent} fell back");
        }
    }

    #[test]
    fn test_intent_to_focus_mapping() {
        let registry = create_default_registry();
        let cases = [
            (Intent::EconomicCounterfactual, SpecFocus::Economy),
            (Intent::TacticalEval, SpecFocus::Economy),
            (Intent::RiskAssessment, SpecFocus::Risk),
            (Intent::CollapseOnsetAnalysis, SpecFocus::Risk),
            (Intent::MapWeakPoint, SpecFocus::Map),
            (Intent::PlayerReview, SpecFocus::Player),
            (Intent::MatchSummary, SpecFocus::Summary),
            (Intent::PhaseComparison, SpecFocus::Momentum),
        ];
        for (intent, focus) in cases {
            assert_eq!(registry.resolve(intent).focus, focus);
        }
    }

    #[test]
    fn test_unknown_string_falls_back_to_summary() {
        let registry = create_default_registry();
        let (intent, spec) = registry.resolve_str("WEATHER_FORECAST");
        assert_eq!(intent, Intent::MatchSummary);
        assert_eq!(spec.focus, SpecFocus::Summary);
    }

    #[test]
    fn test_builtin_budgets_match_contract() {
        let registry = create_default_registry();
        for spec in registry.specs() {
            assert!(spec.budget.max_facts_total >= 1);
            assert!(spec.budget.max_facts_per_type >= 1);
            assert_eq!(spec.output_contract.small_sample_floor, 20);
            assert_eq!(
                spec.output_contract.required_fields,
                vec!["claim", "verdict", "confidence", "support_facts"]
            );
            assert!(!spec.followups.is_empty());
        }
        assert_eq!(registry.count(), 6);
    }

    #[test]
    #[should_panic(expected = "claimed by more than one spec")]
    fn test_duplicate_intent_panics() {
        let mut duplicate = risk_spec();
        duplicate.intents = vec![Intent::MatchSummary];
        SpecRegistry::new(vec![summary_spec(), duplicate], SpecFocus::Summary);
    }

    #[test]
    #[should_panic(expected = "both primary and optional")]
    fn test_overlapping_visibility_panics() {
        let mut broken = momentum_spec();
        broken.required_evidence.optional_fact_types =
            vec![scrim_core::facts::kinds::ROUND_SWING];
        SpecRegistry::new(vec![broken], SpecFocus::Momentum);
    }
}
