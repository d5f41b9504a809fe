//! Risk-focus handler: volatility, stability, and collapse onset.

use scrim_core::facts::kinds;
use scrim_core::{Fact, FxHashSet, Verdict};

use super::mine::MinedFacts;
use super::{IntentHandler, StandardAnswer};
use crate::budget::{ConfidenceModel, ConfidenceTier, FactCounts};
use crate::specs::{Intent, SpecFocus};

const TIERS: &[ConfidenceTier] = &[
    ConfidenceTier {
        requires: &[(kinds::HIGH_RISK_SEQUENCE, 2)],
        min_total: 0,
        confidence: 0.9,
    },
    ConfidenceTier {
        requires: &[(kinds::HIGH_RISK_SEQUENCE, 1)],
        min_total: 0,
        confidence: 0.6,
    },
    ConfidenceTier {
        requires: &[(kinds::ROUND_SWING, 5)],
        min_total: 0,
        confidence: 0.75,
    },
    ConfidenceTier {
        requires: &[(kinds::ROUND_SWING, 3)],
        min_total: 0,
        confidence: 0.55,
    },
    ConfidenceTier {
        requires: &[(kinds::ROUND_SWING, 1)],
        min_total: 0,
        confidence: 0.35,
    },
];

pub struct RiskHandler;

impl IntentHandler for RiskHandler {
    fn focus(&self) -> Option<SpecFocus> {
        Some(SpecFocus::Risk)
    }

    fn confidence_model(&self) -> ConfidenceModel {
        ConfidenceModel { tiers: TIERS }
    }

    fn standard_answer(&self, intent: Intent, mined: &MinedFacts<'_>) -> StandardAnswer {
        match intent {
            Intent::StabilityAnalysis => stability_answer(mined),
            Intent::CollapseOnsetAnalysis => collapse_onset_answer(mined),
            _ => risk_read(mined),
        }
    }
}

fn risk_read(mined: &MinedFacts<'_>) -> StandardAnswer {
    let sequences = mined.count(kinds::HIGH_RISK_SEQUENCE);
    let swings = mined.count(kinds::ROUND_SWING);
    let mut support = mined.labels(kinds::HIGH_RISK_SEQUENCE);
    support.extend(mined.labels(kinds::ROUND_SWING));

    if sequences >= 2 || swings >= 5 {
        StandardAnswer {
            claim: format!(
                "High-risk match: {sequences} high-risk sequences and {swings} major round swings."
            ),
            verdict: Verdict::Yes,
            support,
            counter: Vec::new(),
        }
    } else {
        StandardAnswer {
            claim: format!(
                "Risk stayed manageable: {sequences} high-risk sequences and {swings} major round swings."
            ),
            verdict: Verdict::No,
            support,
            counter: Vec::new(),
        }
    }
}

fn stability_answer(mined: &MinedFacts<'_>) -> StandardAnswer {
    let swings = mined.group(kinds::ROUND_SWING);
    if swings.is_empty() {
        return StandardAnswer {
            claim: "No recurring reversal pattern: no round swings were flagged.".to_string(),
            verdict: Verdict::No,
            support: Vec::new(),
            counter: vec!["ROUND_SWING=0".to_string()],
        };
    }
    if swings_across_segments(swings) {
        StandardAnswer {
            claim: "Round-swing reversals recur across separate segments of the match."
                .to_string(),
            verdict: Verdict::Yes,
            support: mined.labels(kinds::ROUND_SWING),
            counter: Vec::new(),
        }
    } else {
        StandardAnswer {
            claim: "Reversals cluster in a single stretch rather than recurring.".to_string(),
            verdict: Verdict::No,
            support: mined.labels(kinds::ROUND_SWING),
            counter: vec!["swings concentrate in a single segment".to_string()],
        }
    }
}

fn collapse_onset_answer(mined: &MinedFacts<'_>) -> StandardAnswer {
    let collapses = mined.labels(kinds::ECO_COLLAPSE_SEQUENCE);
    if collapses.is_empty() {
        StandardAnswer {
            claim: "No economic collapse onset found in the flagged stretches.".to_string(),
            verdict: Verdict::No,
            support: Vec::new(),
            counter: vec!["ECO_COLLAPSE_SEQUENCE=0".to_string()],
        }
    } else {
        StandardAnswer {
            claim: "Collapse onset traces to an economic break.".to_string(),
            verdict: Verdict::Yes,
            support: collapses,
            counter: mined.labels(kinds::ROUND_SWING),
        }
    }
}

/// Whether flagged swings spread across the match rather than piling
/// into one stretch: two distinct game indices, or a round spread of
/// at least 3 across at least 3 round-scoped swings.
fn swings_across_segments(swings: &[&Fact]) -> bool {
    if swings.is_empty() {
        return false;
    }

    let mut games: FxHashSet<u64> = FxHashSet::default();
    for swing in swings {
        if let Some(game) = swing.game_index() {
            games.insert(game);
        }
    }
    if games.len() >= 2 {
        return true;
    }

    let spans: Vec<(u32, u32)> = swings.iter().filter_map(|swing| swing.round_range).collect();
    let Some(span_min) = spans.iter().map(|(start, _)| *start).min() else {
        return false;
    };
    let span_max = spans.iter().map(|(_, end)| *end).max().unwrap_or(span_min);
    span_max.saturating_sub(span_min) >= 3 && spans.len() >= 3
}
