//! Summary-focus handler: the digest answer for broad questions.
//!
//! Summary is also the spec the registry falls back to for unmapped
//! intents, so this handler sees the widest spread of questions.

use scrim_core::facts::kinds;
use scrim_core::Verdict;

use super::mine::MinedFacts;
use super::{IntentHandler, StandardAnswer};
use crate::budget::{ConfidenceModel, ConfidenceTier, FactCounts};
use crate::specs::{Intent, SpecFocus};

const TIERS: &[ConfidenceTier] = &[
    ConfidenceTier {
        requires: &[(kinds::CONTEXT_ONLY, 1)],
        min_total: 2,
        confidence: 0.72,
    },
    ConfidenceTier {
        requires: &[(kinds::CONTEXT_ONLY, 1)],
        min_total: 0,
        confidence: 0.62,
    },
    ConfidenceTier {
        requires: &[],
        min_total: 1,
        confidence: 0.3,
    },
];

pub struct SummaryHandler;

impl IntentHandler for SummaryHandler {
    fn focus(&self) -> Option<SpecFocus> {
        Some(SpecFocus::Summary)
    }

    fn confidence_model(&self) -> ConfidenceModel {
        ConfidenceModel { tiers: TIERS }
    }

    fn standard_answer(&self, _intent: Intent, mined: &MinedFacts<'_>) -> StandardAnswer {
        let total = mined.total();
        let types = mined.counts().count();

        if mined.count(kinds::CONTEXT_ONLY) > 0 {
            StandardAnswer {
                claim: format!(
                    "Match digest assembled from {total} facts across {types} signal types."
                ),
                verdict: Verdict::Yes,
                support: mined.all_labels(),
                counter: Vec::new(),
            }
        } else {
            StandardAnswer {
                claim: "No context digest is available for this match.".to_string(),
                verdict: Verdict::No,
                support: mined.all_labels(),
                counter: vec!["CONTEXT_ONLY=0".to_string()],
            }
        }
    }
}
