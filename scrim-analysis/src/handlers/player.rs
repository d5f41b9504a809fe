//! Player-focus handler: individual impact against match swings.

use scrim_core::facts::kinds;
use scrim_core::Verdict;

use super::mine::MinedFacts;
use super::{IntentHandler, StandardAnswer};
use crate::budget::{ConfidenceModel, ConfidenceTier};
use crate::specs::{Intent, SpecFocus};

const TIERS: &[ConfidenceTier] = &[
    ConfidenceTier {
        requires: &[(kinds::PLAYER_IMPACT_STAT, 2)],
        min_total: 0,
        confidence: 0.85,
    },
    ConfidenceTier {
        requires: &[(kinds::PLAYER_IMPACT_STAT, 1), (kinds::ROUND_SWING, 1)],
        min_total: 0,
        confidence: 0.75,
    },
    ConfidenceTier {
        requires: &[(kinds::PLAYER_IMPACT_STAT, 1)],
        min_total: 0,
        confidence: 0.55,
    },
    ConfidenceTier {
        requires: &[(kinds::ROUND_SWING, 1)],
        min_total: 0,
        confidence: 0.3,
    },
];

pub struct PlayerHandler;

impl IntentHandler for PlayerHandler {
    fn focus(&self) -> Option<SpecFocus> {
        Some(SpecFocus::Player)
    }

    fn confidence_model(&self) -> ConfidenceModel {
        ConfidenceModel { tiers: TIERS }
    }

    fn standard_answer(&self, intent: Intent, mined: &MinedFacts<'_>) -> StandardAnswer {
        match intent {
            Intent::CounterfactualPlayerImpact => counterfactual_answer(mined),
            _ => review_answer(mined),
        }
    }
}

fn review_answer(mined: &MinedFacts<'_>) -> StandardAnswer {
    let stats = mined.labels(kinds::PLAYER_IMPACT_STAT);
    if stats.is_empty() {
        StandardAnswer {
            claim: "No player impact stats were mined for this match.".to_string(),
            verdict: Verdict::No,
            support: mined.all_labels(),
            counter: vec!["PLAYER_IMPACT_STAT=0".to_string()],
        }
    } else {
        StandardAnswer {
            claim: format!("Player impact is measurable across {} stat lines.", stats.len()),
            verdict: Verdict::Yes,
            support: stats,
            counter: Vec::new(),
        }
    }
}

fn counterfactual_answer(mined: &MinedFacts<'_>) -> StandardAnswer {
    let stats = mined.labels(kinds::PLAYER_IMPACT_STAT);
    let swings = mined.labels(kinds::ROUND_SWING);

    if !stats.is_empty() && !swings.is_empty() {
        let mut support = stats;
        support.extend(swings);
        StandardAnswer {
            claim: "Swing rounds track the flagged player performances.".to_string(),
            verdict: Verdict::Yes,
            support,
            counter: Vec::new(),
        }
    } else if !stats.is_empty() {
        StandardAnswer {
            claim: "Impact stats exist but no swings anchor a counterfactual.".to_string(),
            verdict: Verdict::No,
            support: stats,
            counter: vec!["ROUND_SWING=0".to_string()],
        }
    } else {
        StandardAnswer {
            claim: "No player stats to ground a counterfactual.".to_string(),
            verdict: Verdict::No,
            support: Vec::new(),
            counter: vec!["PLAYER_IMPACT_STAT=0".to_string()],
        }
    }
}
