//! Map-focus handler: objective-loss chains and territorial weak points.

use scrim_core::facts::kinds;
use scrim_core::Verdict;

use super::mine::MinedFacts;
use super::{IntentHandler, StandardAnswer};
use crate::budget::{ConfidenceModel, ConfidenceTier};
use crate::specs::{Intent, SpecFocus};

const TIERS: &[ConfidenceTier] = &[
    ConfidenceTier {
        requires: &[(kinds::OBJECTIVE_LOSS_CHAIN, 2)],
        min_total: 0,
        confidence: 0.85,
    },
    ConfidenceTier {
        requires: &[(kinds::OBJECTIVE_LOSS_CHAIN, 1), (kinds::HIGH_RISK_SEQUENCE, 1)],
        min_total: 0,
        confidence: 0.78,
    },
    ConfidenceTier {
        requires: &[(kinds::OBJECTIVE_LOSS_CHAIN, 1)],
        min_total: 0,
        confidence: 0.55,
    },
    ConfidenceTier {
        requires: &[(kinds::HIGH_RISK_SEQUENCE, 1)],
        min_total: 0,
        confidence: 0.4,
    },
    ConfidenceTier {
        requires: &[(kinds::ROUND_SWING, 1)],
        min_total: 0,
        confidence: 0.3,
    },
];

pub struct MapControlHandler;

impl IntentHandler for MapControlHandler {
    fn focus(&self) -> Option<SpecFocus> {
        Some(SpecFocus::Map)
    }

    fn confidence_model(&self) -> ConfidenceModel {
        ConfidenceModel { tiers: TIERS }
    }

    fn standard_answer(&self, intent: Intent, mined: &MinedFacts<'_>) -> StandardAnswer {
        match intent {
            Intent::ExecutionVsStrategy => execution_answer(mined),
            _ => weak_point_answer(mined),
        }
    }
}

fn weak_point_answer(mined: &MinedFacts<'_>) -> StandardAnswer {
    let chains = mined.labels(kinds::OBJECTIVE_LOSS_CHAIN);
    if !chains.is_empty() {
        return StandardAnswer {
            claim: "Objective losses chain around a recurring map weak point.".to_string(),
            verdict: Verdict::Yes,
            support: chains,
            counter: mined.labels(kinds::ROUND_SWING),
        };
    }
    let sequences = mined.labels(kinds::HIGH_RISK_SEQUENCE);
    if !sequences.is_empty() {
        return StandardAnswer {
            claim: "No objective-loss chain: map pressure shows up as high-risk stretches instead."
                .to_string(),
            verdict: Verdict::No,
            support: sequences,
            counter: Vec::new(),
        };
    }
    StandardAnswer {
        claim: "No map weak point emerges from the mined evidence.".to_string(),
        verdict: Verdict::No,
        support: mined.all_labels(),
        counter: vec!["OBJECTIVE_LOSS_CHAIN=0".to_string()],
    }
}

fn execution_answer(mined: &MinedFacts<'_>) -> StandardAnswer {
    let chains = mined.labels(kinds::OBJECTIVE_LOSS_CHAIN);
    let sequences = mined.labels(kinds::HIGH_RISK_SEQUENCE);

    if chains.len() > sequences.len() {
        StandardAnswer {
            claim: format!(
                "Losses look strategic: objective chains outnumber execution flags {} to {}.",
                chains.len(),
                sequences.len()
            ),
            verdict: Verdict::Yes,
            support: chains,
            counter: sequences,
        }
    } else if !sequences.is_empty() {
        StandardAnswer {
            claim: format!(
                "Losses look executional: {} high-risk stretches against {} objective chains.",
                sequences.len(),
                chains.len()
            ),
            verdict: Verdict::No,
            support: sequences,
            counter: chains,
        }
    } else {
        StandardAnswer {
            claim: "Not enough signal to separate execution from strategy.".to_string(),
            verdict: Verdict::No,
            support: mined.all_labels(),
            counter: vec!["OBJECTIVE_LOSS_CHAIN=0".to_string()],
        }
    }
}
