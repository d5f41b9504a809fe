//! Economy-focus handler: buy decisions and economic collapse.

use scrim_core::facts::kinds;
use scrim_core::Verdict;

use super::mine::MinedFacts;
use super::{IntentHandler, StandardAnswer};
use crate::budget::{ConfidenceModel, ConfidenceTier};
use crate::specs::{Intent, SpecFocus};

const TIERS: &[ConfidenceTier] = &[
    ConfidenceTier {
        requires: &[(kinds::FORCE_BUY_ROUND, 1), (kinds::ECO_COLLAPSE_SEQUENCE, 1)],
        min_total: 0,
        confidence: 0.82,
    },
    ConfidenceTier {
        requires: &[(kinds::FULL_BUY_ROUND, 1), (kinds::FORCE_BUY_ROUND, 1)],
        min_total: 0,
        confidence: 0.55,
    },
    ConfidenceTier {
        requires: &[(kinds::ECO_COLLAPSE_SEQUENCE, 1)],
        min_total: 0,
        confidence: 0.45,
    },
    ConfidenceTier {
        requires: &[(kinds::FORCE_BUY_ROUND, 1)],
        min_total: 0,
        confidence: 0.4,
    },
    ConfidenceTier {
        requires: &[(kinds::ECONOMIC_PATTERN, 1)],
        min_total: 0,
        confidence: 0.35,
    },
    ConfidenceTier {
        requires: &[(kinds::FULL_BUY_ROUND, 1)],
        min_total: 0,
        confidence: 0.35,
    },
];

pub struct EconomyHandler;

impl IntentHandler for EconomyHandler {
    fn focus(&self) -> Option<SpecFocus> {
        Some(SpecFocus::Economy)
    }

    fn confidence_model(&self) -> ConfidenceModel {
        ConfidenceModel { tiers: TIERS }
    }

    fn standard_answer(&self, intent: Intent, mined: &MinedFacts<'_>) -> StandardAnswer {
        match intent {
            Intent::EconomicFailure => failure_answer(mined),
            Intent::TacticalEval => tactical_answer(mined),
            _ => counterfactual_answer(mined),
        }
    }
}

fn counterfactual_answer(mined: &MinedFacts<'_>) -> StandardAnswer {
    let force_buys = mined.labels(kinds::FORCE_BUY_ROUND);
    let collapses = mined.labels(kinds::ECO_COLLAPSE_SEQUENCE);
    let full_buys = mined.labels(kinds::FULL_BUY_ROUND);

    if !force_buys.is_empty() && !collapses.is_empty() {
        let mut support = Vec::with_capacity(2);
        support.push(force_buys[0].clone());
        support.push(collapses[0].clone());
        return StandardAnswer {
            claim: "Force-buy decisions amplified the economic collapse.".to_string(),
            verdict: Verdict::Yes,
            support,
            counter: Vec::new(),
        };
    }
    if full_buys.len() > force_buys.len() {
        return StandardAnswer {
            claim: "Economy management held: full-buy conversion outweighed forced rounds."
                .to_string(),
            verdict: Verdict::No,
            support: full_buys,
            counter: force_buys,
        };
    }
    StandardAnswer {
        claim: "Evidence does not tie the outcome to buy decisions.".to_string(),
        verdict: Verdict::No,
        support: mined.all_labels(),
        counter: Vec::new(),
    }
}

fn failure_answer(mined: &MinedFacts<'_>) -> StandardAnswer {
    let collapses = mined.labels(kinds::ECO_COLLAPSE_SEQUENCE);
    if collapses.is_empty() {
        StandardAnswer {
            claim: "No economic failure signature in the mined evidence.".to_string(),
            verdict: Verdict::No,
            support: mined.all_labels(),
            counter: vec!["ECO_COLLAPSE_SEQUENCE=0".to_string()],
        }
    } else {
        StandardAnswer {
            claim: "The loss traces to an economic collapse sequence.".to_string(),
            verdict: Verdict::Yes,
            support: collapses,
            counter: Vec::new(),
        }
    }
}

fn tactical_answer(mined: &MinedFacts<'_>) -> StandardAnswer {
    let force_buys = mined.labels(kinds::FORCE_BUY_ROUND);
    let full_buys = mined.labels(kinds::FULL_BUY_ROUND);
    let force = force_buys.len();
    let full = full_buys.len();

    if full >= force && full > 0 {
        StandardAnswer {
            claim: format!(
                "Buy discipline held: {full} full-buy rounds against {force} force-buys."
            ),
            verdict: Verdict::Yes,
            support: full_buys,
            counter: force_buys,
        }
    } else if force > 0 {
        StandardAnswer {
            claim: format!(
                "Buy discipline slipped: {force} force-buys against {full} full-buy rounds."
            ),
            verdict: Verdict::No,
            support: force_buys,
            counter: full_buys,
        }
    } else {
        StandardAnswer {
            claim: "No buy-round evidence to evaluate the tactical approach.".to_string(),
            verdict: Verdict::No,
            support: mined.all_labels(),
            counter: vec!["FORCE_BUY_ROUND=0".to_string(), "FULL_BUY_ROUND=0".to_string()],
        }
    }
}
