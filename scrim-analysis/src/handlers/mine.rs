//! The mining loop: pull candidates through the budget gate.
//!
//! Mining consumes the filtered candidate list in its fixed order,
//! asking the controller before every pull. Handlers never see facts
//! the loop did not admit.

use scrim_core::Fact;

use crate::budget::{BudgetController, BudgetState, ConfidenceModel, ConfidenceTarget, FactCounts};
use crate::specs::{filter_facts, Spec};

/// Evidence admitted by one mining run, grouped by fact type in
/// admission order.
#[derive(Debug, Default)]
pub struct MinedFacts<'a> {
    groups: Vec<(&'static str, Vec<&'a Fact>)>,
}

impl<'a> MinedFacts<'a> {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    pub fn push(&mut self, fact_type: &'static str, fact: &'a Fact) {
        match self.groups.iter_mut().find(|(key, _)| *key == fact_type) {
            Some((_, group)) => group.push(fact),
            None => self.groups.push((fact_type, vec![fact])),
        }
    }

    /// Facts of one type, empty when none were admitted.
    pub fn group(&self, fact_type: &str) -> &[&'a Fact] {
        self.groups
            .iter()
            .find(|(key, _)| *key == fact_type)
            .map(|(_, group)| group.as_slice())
            .unwrap_or(&[])
    }

    /// Human-readable labels for one fact type, in admission order.
    pub fn labels(&self, fact_type: &str) -> Vec<String> {
        self.group(fact_type).iter().map(|fact| fact.label()).collect()
    }

    /// Labels for every admitted fact, grouped by type in admission
    /// order.
    pub fn all_labels(&self) -> Vec<String> {
        self.groups
            .iter()
            .flat_map(|(_, group)| group.iter().map(|fact| fact.label()))
            .collect()
    }

    /// `(fact_type, count)` pairs in admission order.
    pub fn counts(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.groups
            .iter()
            .map(|(fact_type, group)| (*fact_type, group.len() as u32))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FactCounts for MinedFacts<'_> {
    fn count(&self, fact_type: &str) -> u32 {
        self.group(fact_type).len() as u32
    }

    fn total(&self) -> u32 {
        self.groups.iter().map(|(_, group)| group.len() as u32).sum()
    }
}

/// What one mining run produced: the admitted evidence and the final
/// budget ledger.
#[derive(Debug)]
pub struct MiningOutcome<'a> {
    pub mined: MinedFacts<'a>,
    pub state: BudgetState,
}

impl MiningOutcome<'_> {
    pub fn confidence(&self) -> f64 {
        self.state.current_confidence
    }
}

/// Runs one budget-gated mining pass over the fact pool.
///
/// Candidate order comes from the spec's visibility filter and is
/// deterministic, so identical inputs always admit the same facts.
pub fn mine<'a>(
    spec: &Spec,
    facts: &'a [Fact],
    model: ConfidenceModel,
    target: &ConfidenceTarget,
) -> MiningOutcome<'a> {
    let filtered = filter_facts(spec, facts);
    let mut state = BudgetState::new(spec.budget.max_facts_total);
    let mut mined = MinedFacts::new();
    let controller = BudgetController;

    for (fact_type, fact) in filtered.candidates() {
        if !controller.should_continue(&state, target) {
            break;
        }
        mined.push(fact_type, fact);
        let confidence = model.confidence(&mined);
        state.update(confidence);
    }

    tracing::debug!(
        focus = %spec.focus,
        candidates = filtered.total_candidates(),
        facts_mined = state.facts_mined,
        confidence = state.current_confidence,
        remaining_budget = state.remaining_budget,
        "mining pass complete"
    );

    MiningOutcome { mined, state }
}
