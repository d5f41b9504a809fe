//! Momentum-focus handler: swings and phase structure.

use scrim_core::facts::kinds;
use scrim_core::Verdict;

use super::mine::MinedFacts;
use super::{IntentHandler, StandardAnswer};
use crate::budget::{ConfidenceModel, ConfidenceTier};
use crate::specs::{Intent, SpecFocus};

const TIERS: &[ConfidenceTier] = &[
    ConfidenceTier {
        requires: &[(kinds::ROUND_SWING, 4)],
        min_total: 0,
        confidence: 0.85,
    },
    ConfidenceTier {
        requires: &[(kinds::ROUND_SWING, 1)],
        min_total: 0,
        confidence: 0.78,
    },
    ConfidenceTier {
        requires: &[(kinds::HIGH_RISK_SEQUENCE, 1)],
        min_total: 0,
        confidence: 0.3,
    },
];

pub struct MomentumHandler;

impl IntentHandler for MomentumHandler {
    fn focus(&self) -> Option<SpecFocus> {
        Some(SpecFocus::Momentum)
    }

    fn confidence_model(&self) -> ConfidenceModel {
        ConfidenceModel { tiers: TIERS }
    }

    fn standard_answer(&self, intent: Intent, mined: &MinedFacts<'_>) -> StandardAnswer {
        match intent {
            Intent::PhaseComparison => phase_answer(mined),
            _ => momentum_answer(mined),
        }
    }
}

fn momentum_answer(mined: &MinedFacts<'_>) -> StandardAnswer {
    let swings = mined.labels(kinds::ROUND_SWING);
    if swings.is_empty() {
        StandardAnswer {
            claim: "No decisive momentum swings were flagged in this match.".to_string(),
            verdict: Verdict::No,
            support: mined.labels(kinds::HIGH_RISK_SEQUENCE),
            counter: vec!["ROUND_SWING=0".to_string()],
        }
    } else {
        StandardAnswer {
            claim: format!(
                "The match turned on decisive momentum swings: {} flagged.",
                swings.len()
            ),
            verdict: Verdict::Yes,
            support: swings,
            counter: Vec::new(),
        }
    }
}

fn phase_answer(mined: &MinedFacts<'_>) -> StandardAnswer {
    let swings = mined.labels(kinds::ROUND_SWING);
    match swings.len() {
        0 => StandardAnswer {
            claim: "No phase boundaries: no round swings were flagged.".to_string(),
            verdict: Verdict::No,
            support: Vec::new(),
            counter: vec!["ROUND_SWING=0".to_string()],
        },
        1 => StandardAnswer {
            claim: "A single swing is not enough to separate match phases.".to_string(),
            verdict: Verdict::No,
            support: swings,
            counter: Vec::new(),
        },
        count => StandardAnswer {
            claim: format!(
                "The phases played out differently: {count} swings mark the turns."
            ),
            verdict: Verdict::Yes,
            support: swings,
            counter: Vec::new(),
        },
    }
}
