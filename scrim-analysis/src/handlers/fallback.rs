//! Focus-less fallback handler.
//!
//! Answers for any spec whose focus has no registered handler. It
//! knows nothing about the domain, so it hedges: a generic count-based
//! model and the mined labels cited as-is.

use scrim_core::Verdict;

use super::mine::MinedFacts;
use super::{IntentHandler, StandardAnswer};
use crate::budget::{ConfidenceModel, ConfidenceTier, FactCounts};
use crate::specs::{Intent, SpecFocus};

const TIERS: &[ConfidenceTier] = &[ConfidenceTier {
    requires: &[],
    min_total: 1,
    confidence: 0.35,
}];

pub struct FallbackHandler;

impl IntentHandler for FallbackHandler {
    fn focus(&self) -> Option<SpecFocus> {
        None
    }

    fn confidence_model(&self) -> ConfidenceModel {
        ConfidenceModel { tiers: TIERS }
    }

    fn standard_answer(&self, intent: Intent, mined: &MinedFacts<'_>) -> StandardAnswer {
        if mined.is_empty() {
            return StandardAnswer {
                claim: format!("No evidence was mined for {}.", intent.name()),
                verdict: Verdict::Insufficient,
                support: Vec::new(),
                counter: Vec::new(),
            };
        }
        StandardAnswer {
            claim: format!(
                "General read only: no specialized analysis covers {}; citing {} mined facts.",
                intent.name(),
                mined.total()
            ),
            verdict: Verdict::LowConfidence,
            support: mined.all_labels(),
            counter: Vec::new(),
        }
    }
}
