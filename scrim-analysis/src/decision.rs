//! Decision mapping: uncertainty pricing, path selection, assembly.
//!
//! The mapper is the only place where context completeness, mined
//! evidence, and the handler's answer meet. It prices uncertainty from
//! the context summary alone, picks a decision path from fixed
//! thresholds, and assembles the final `CoachingDecision`. Handlers
//! never see uncertainty; the mapper never re-reads fact content.

use scrim_core::{CoachingDecision, ContextCompleteness, DecisionPath, Verdict};
use serde::{Deserialize, Serialize};

use crate::handlers::{MinedFacts, MiningOutcome, StandardAnswer};
use crate::specs::{Intent, Spec};

/// Uncertainty contributed by a missing match outcome.
pub const MISSING_OUTCOME_WEIGHT: f64 = 0.4;
/// Maximum uncertainty contributed by an undersized sample.
pub const SMALL_SAMPLE_WEIGHT: f64 = 0.3;
/// Uncertainty contributed by a missing comparison baseline.
pub const NO_COMPARISON_WEIGHT: f64 = 0.2;

/// Total uncertainty at or above which the engine refuses to answer.
pub const REJECT_THRESHOLD: f64 = 0.8;
/// Total uncertainty at or above which answers degrade to hedged form.
pub const DEGRADE_THRESHOLD: f64 = 0.4;

/// Confidence reported when evidence exists but context is unusable.
const REJECT_CONFIDENCE: f64 = 0.1;

const NO_EVIDENCE_CLAIM: &str = "No usable evidence is available for this question.";
const UNCERTAIN_CONTEXT_CLAIM: &str =
    "Evidence exists but the context is too uncertain to answer.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UncertaintySeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl UncertaintySeverity {
    pub const ALL: [UncertaintySeverity; 4] = [
        UncertaintySeverity::Low,
        UncertaintySeverity::Medium,
        UncertaintySeverity::High,
        UncertaintySeverity::Critical,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            UncertaintySeverity::Low => "LOW",
            UncertaintySeverity::Medium => "MEDIUM",
            UncertaintySeverity::High => "HIGH",
            UncertaintySeverity::Critical => "CRITICAL",
        }
    }

    fn from_total(total: f64) -> Self {
        if total < 0.3 {
            UncertaintySeverity::Low
        } else if total < 0.5 {
            UncertaintySeverity::Medium
        } else if total < 0.8 {
            UncertaintySeverity::High
        } else {
            UncertaintySeverity::Critical
        }
    }
}

impl std::fmt::Display for UncertaintySeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Priced uncertainty for one query. Depends only on the context
/// summary and the spec's sample floor, never on mined facts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UncertaintyMetrics {
    pub missing_outcome: f64,
    pub small_sample: f64,
    pub no_comparison: f64,
    /// Component sum, capped at 1.0.
    pub total: f64,
    pub severity: UncertaintySeverity,
}

impl UncertaintyMetrics {
    pub fn price(context: &ContextCompleteness, small_sample_floor: u32) -> Self {
        let missing_outcome = if context.has_outcome {
            0.0
        } else {
            MISSING_OUTCOME_WEIGHT
        };
        let small_sample = if context.sample_size < small_sample_floor {
            let floor = f64::from(small_sample_floor);
            (floor - f64::from(context.sample_size)) / floor * SMALL_SAMPLE_WEIGHT
        } else {
            0.0
        };
        let no_comparison = if context.has_comparison_baseline {
            0.0
        } else {
            NO_COMPARISON_WEIGHT
        };
        let total = (missing_outcome + small_sample + no_comparison).min(1.0);
        Self {
            missing_outcome,
            small_sample,
            no_comparison,
            total,
            severity: UncertaintySeverity::from_total(total),
        }
    }

    /// One fixed caveat string per non-zero component, in pricing
    /// order. Attached to every decision regardless of path.
    pub fn caveats(&self) -> Vec<String> {
        let mut caveats = Vec::new();
        if self.missing_outcome > 0.0 {
            caveats.push("missing outcome data".to_string());
        }
        if self.small_sample > 0.0 {
            caveats.push("small sample".to_string());
        }
        if self.no_comparison > 0.0 {
            caveats.push("no comparison baseline".to_string());
        }
        caveats
    }
}

/// Maps one mining run to the final decision.
///
/// Path selection: no mined facts rejects outright; total uncertainty
/// at or past `REJECT_THRESHOLD` rejects; at or past
/// `DEGRADE_THRESHOLD` degrades; otherwise the handler's answer stands.
/// Contract minimums on the standard path are advisory and only logged.
pub fn map_decision(
    intent: Intent,
    spec: &Spec,
    answer: StandardAnswer,
    outcome: &MiningOutcome<'_>,
    context: &ContextCompleteness,
) -> CoachingDecision {
    let metrics = UncertaintyMetrics::price(context, spec.output_contract.small_sample_floor);
    let caveats = metrics.caveats();
    let followups: Vec<String> = spec.followups.iter().map(|s| (*s).to_string()).collect();
    let facts_mined = outcome.state.facts_mined;
    let contract = &spec.output_contract;

    let decision = if facts_mined == 0 {
        CoachingDecision {
            claim: NO_EVIDENCE_CLAIM.to_string(),
            verdict: Verdict::Insufficient,
            confidence: 0.0,
            decision_path: DecisionPath::Reject,
            support_facts: Vec::new(),
            counter_facts: Vec::new(),
            caveats,
            followups,
        }
    } else if metrics.total >= REJECT_THRESHOLD {
        CoachingDecision {
            claim: UNCERTAIN_CONTEXT_CLAIM.to_string(),
            verdict: Verdict::Insufficient,
            confidence: REJECT_CONFIDENCE,
            decision_path: DecisionPath::Reject,
            support_facts: Vec::new(),
            counter_facts: vec![format!("facts mined: {facts_mined}")],
            caveats,
            followups,
        }
    } else if metrics.total >= DEGRADE_THRESHOLD {
        if metrics.total > contract.degraded_max_uncertainty {
            tracing::debug!(
                intent = %intent,
                uncertainty = metrics.total,
                allowed = contract.degraded_max_uncertainty,
                "degraded answer exceeds contract uncertainty ceiling"
            );
        }
        CoachingDecision {
            claim: format!(
                "Preliminary analysis from {facts_mined} facts: {}",
                summarize(&outcome.mined)
            ),
            verdict: Verdict::LowConfidence,
            confidence: 0.5 * (1.0 - metrics.total),
            decision_path: DecisionPath::Degraded,
            support_facts: outcome.mined.all_labels(),
            counter_facts: Vec::new(),
            caveats,
            followups,
        }
    } else {
        let confidence = outcome.confidence();
        if confidence < contract.standard_min_confidence {
            tracing::debug!(
                intent = %intent,
                confidence,
                floor = contract.standard_min_confidence,
                "standard answer below contract confidence floor"
            );
        }
        if facts_mined < contract.standard_min_facts {
            tracing::debug!(
                intent = %intent,
                facts_mined,
                floor = contract.standard_min_facts,
                "standard answer below contract fact floor"
            );
        }
        CoachingDecision {
            claim: answer.claim,
            verdict: answer.verdict,
            confidence,
            decision_path: DecisionPath::Standard,
            support_facts: answer.support,
            counter_facts: answer.counter,
            caveats,
            followups,
        }
    };

    tracing::debug!(
        intent = %intent,
        path = %decision.decision_path,
        uncertainty = metrics.total,
        severity = %metrics.severity,
        facts_mined,
        "decision mapped"
    );
    decision
}

/// Type-count digest for degraded claims, dominant types first. The
/// sort is stable, so equal counts keep admission order.
fn summarize(mined: &MinedFacts<'_>) -> String {
    let mut counts: Vec<(&'static str, u32)> = mined.counts().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    match counts.as_slice() {
        [] => String::from("no typed findings"),
        [(fact_type, count)] => format!("detected {count} {fact_type}"),
        [(first_type, first_count), (second_type, second_count), ..] => {
            format!("detected {first_count} {first_type}, {second_count} {second_type}")
        }
    }
}
