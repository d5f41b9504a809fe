//! Budget-gated mining control.
//!
//! The controller answers exactly one question, before every mine: is it
//! worth continuing? It never judges fact content and never selects
//! facts. Stopping is the union of three rules: target confidence
//! reached, budget exhausted, or confidence converged.

use smallvec::SmallVec;

use scrim_core::config::TargetConfig;

/// Mutable bookkeeping for one mining loop. Created fresh per query,
/// discarded when the handler returns.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetState {
    /// Confidence after the most recent mine, 0.0 before the first.
    pub current_confidence: f64,
    /// Mining steps left.
    pub remaining_budget: u32,
    /// Confidence after each mined fact. Starts empty.
    pub confidence_history: SmallVec<[f64; 8]>,
    /// Facts mined so far.
    pub facts_mined: u32,
}

impl BudgetState {
    pub fn new(budget: u32) -> Self {
        Self {
            current_confidence: 0.0,
            remaining_budget: budget,
            confidence_history: SmallVec::new(),
            facts_mined: 0,
        }
    }

    /// Records the outcome of mining one fact. This is the only mutation
    /// point: appends to history, overwrites confidence, spends one
    /// budget unit, counts the fact.
    pub fn update(&mut self, new_confidence: f64) {
        self.confidence_history.push(new_confidence);
        self.current_confidence = new_confidence;
        self.remaining_budget = self.remaining_budget.saturating_sub(1);
        self.facts_mined += 1;
    }
}

/// Caller-supplied stopping criteria. The target comes from the coach or
/// engine config, never from model inference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceTarget {
    /// Mining stops once confidence reaches this.
    pub target_confidence: f64,
    /// Convergence may not stop the loop before this many facts.
    pub min_steps: u32,
    /// History entries the convergence check inspects.
    pub convergence_window: usize,
    /// Step-to-step change below which confidence counts as settled.
    pub convergence_epsilon: f64,
}

impl Default for ConfidenceTarget {
    fn default() -> Self {
        Self::from(&TargetConfig::default())
    }
}

impl From<&TargetConfig> for ConfidenceTarget {
    fn from(config: &TargetConfig) -> Self {
        Self {
            target_confidence: config.target_confidence,
            min_steps: config.min_steps,
            convergence_window: config.convergence_window,
            convergence_epsilon: config.convergence_epsilon,
        }
    }
}

/// CONTINUE / STOP decisions for the mining loop.
pub struct BudgetController;

impl BudgetController {
    /// Decides whether mining should continue. Checked before every
    /// mine, so a loop over the candidate list runs at most
    /// `remaining_budget` iterations past any confidence plateau.
    pub fn should_continue(&self, state: &BudgetState, target: &ConfidenceTarget) -> bool {
        if self.target_achieved(state, target) {
            tracing::trace!(
                confidence = state.current_confidence,
                facts_mined = state.facts_mined,
                "mining stop: target achieved"
            );
            return false;
        }
        if self.budget_exhausted(state) {
            tracing::trace!(facts_mined = state.facts_mined, "mining stop: budget exhausted");
            return false;
        }
        if state.facts_mined >= target.min_steps && self.converged(state, target) {
            tracing::trace!(
                confidence = state.current_confidence,
                facts_mined = state.facts_mined,
                "mining stop: confidence converged"
            );
            return false;
        }
        true
    }

    fn target_achieved(&self, state: &BudgetState, target: &ConfidenceTarget) -> bool {
        state.current_confidence >= target.target_confidence
    }

    fn budget_exhausted(&self, state: &BudgetState) -> bool {
        state.remaining_budget == 0
    }

    /// Converged when the history holds a full window and every
    /// consecutive change inside it is below epsilon.
    fn converged(&self, state: &BudgetState, target: &ConfidenceTarget) -> bool {
        let history = &state.confidence_history;
        if history.len() < target.convergence_window {
            return false;
        }
        let recent = &history[history.len() - target.convergence_window..];
        recent
            .windows(2)
            .all(|pair| (pair[1] - pair[0]).abs() < target.convergence_epsilon)
    }
}

/// Count view over mined evidence, fed to confidence models.
pub trait FactCounts {
    fn count(&self, fact_type: &str) -> u32;
    fn total(&self) -> u32;
}

/// One row of a confidence table: requirements and the confidence they
/// grant.
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceTier {
    /// Typed requirements; every `(fact_type, min_count)` must be met.
    pub requires: &'static [(&'static str, u32)],
    /// Total mined facts required regardless of type. Tiers should keep
    /// this at 1 or higher when `requires` is empty, otherwise they
    /// grant confidence to an empty mine.
    pub min_total: u32,
    pub confidence: f64,
}

impl ConfidenceTier {
    pub fn satisfied<C: FactCounts>(&self, counts: &C) -> bool {
        counts.total() >= self.min_total
            && self
                .requires
                .iter()
                .all(|(fact_type, min_count)| counts.count(fact_type) >= *min_count)
    }
}

/// A handler's confidence table. The model's value is the highest
/// confidence among satisfied tiers, 0.0 when none is satisfied.
///
/// Tier satisfaction only ever flips from false to true as counts grow,
/// so the value is non-decreasing over a mining run.
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceModel {
    pub tiers: &'static [ConfidenceTier],
}

impl ConfidenceModel {
    pub const EMPTY: ConfidenceModel = ConfidenceModel { tiers: &[] };

    pub fn confidence<C: FactCounts>(&self, counts: &C) -> f64 {
        self.tiers
            .iter()
            .filter(|tier| tier.satisfied(counts))
            .map(|tier| tier.confidence)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(confidence: f64, min_steps: u32) -> ConfidenceTarget {
        ConfidenceTarget {
            target_confidence: confidence,
            min_steps,
            convergence_window: 3,
            convergence_epsilon: 0.05,
        }
    }

    #[test]
    fn test_fresh_state_continues() {
        let state = BudgetState::new(5);
        assert!(state.confidence_history.is_empty());
        assert!(BudgetController.should_continue(&state, &target(0.7, 1)));
    }

    #[test]
    fn test_target_achieved_stops_with_budget_left() {
        let mut state = BudgetState::new(5);
        state.update(0.9);
        assert_eq!(state.remaining_budget, 4);
        assert!(!BudgetController.should_continue(&state, &target(0.7, 1)));
    }

    #[test]
    fn test_target_rule_ignores_min_steps() {
        // One mine that clears the bar stops the loop even with
        // min_steps far above the mined count.
        let mut state = BudgetState::new(5);
        state.update(0.95);
        assert!(!BudgetController.should_continue(&state, &target(0.7, 4)));
    }

    #[test]
    fn test_budget_exhausted_stops() {
        let mut state = BudgetState::new(2);
        state.update(0.1);
        state.update(0.2);
        assert_eq!(state.remaining_budget, 0);
        assert!(!BudgetController.should_continue(&state, &target(0.9, 1)));
    }

    #[test]
    fn test_convergence_stops_after_min_steps() {
        let mut state = BudgetState::new(10);
        for confidence in [0.50, 0.52, 0.53] {
            state.update(confidence);
        }
        // Window of 3 with diffs 0.02 and 0.01, both under epsilon.
        assert!(!BudgetController.should_continue(&state, &target(0.9, 1)));
    }

    #[test]
    fn test_convergence_gated_by_min_steps() {
        let mut state = BudgetState::new(10);
        for confidence in [0.50, 0.52, 0.53] {
            state.update(confidence);
        }
        let demanding = target(0.9, 5);
        assert!(BudgetController.should_continue(&state, &demanding));
    }

    #[test]
    fn test_short_history_never_converges() {
        let mut state = BudgetState::new(10);
        state.update(0.5);
        state.update(0.5);
        assert!(BudgetController.should_continue(&state, &target(0.9, 1)));
    }

    #[test]
    fn test_large_swing_blocks_convergence() {
        let mut state = BudgetState::new(10);
        for confidence in [0.30, 0.32, 0.60] {
            state.update(confidence);
        }
        assert!(BudgetController.should_continue(&state, &target(0.9, 1)));
    }

    #[test]
    fn test_update_bookkeeping() {
        let mut state = BudgetState::new(3);
        state.update(0.4);
        state.update(0.6);
        assert_eq!(state.current_confidence, 0.6);
        assert_eq!(state.remaining_budget, 1);
        assert_eq!(state.facts_mined, 2);
        assert_eq!(state.confidence_history.as_slice(), &[0.4, 0.6]);
    }

    struct Counts(Vec<(&'static str, u32)>);

    impl FactCounts for Counts {
        fn count(&self, fact_type: &str) -> u32 {
            self.0
                .iter()
                .find(|(t, _)| *t == fact_type)
                .map(|(_, n)| *n)
                .unwrap_or(0)
        }
        fn total(&self) -> u32 {
            self.0.iter().map(|(_, n)| n).sum()
        }
    }

    const TIERS: &[ConfidenceTier] = &[
        ConfidenceTier {
            requires: &[("A", 2)],
            min_total: 0,
            confidence: 0.9,
        },
        ConfidenceTier {
            requires: &[("A", 1)],
            min_total: 0,
            confidence: 0.6,
        },
        ConfidenceTier {
            requires: &[("A", 1), ("B", 1)],
            min_total: 0,
            confidence: 0.82,
        },
        ConfidenceTier {
            requires: &[],
            min_total: 1,
            confidence: 0.2,
        },
    ];

    #[test]
    fn test_model_takes_max_of_satisfied_tiers() {
        let model = ConfidenceModel { tiers: TIERS };
        assert_eq!(model.confidence(&Counts(vec![])), 0.0);
        assert_eq!(model.confidence(&Counts(vec![("A", 1)])), 0.6);
        assert_eq!(model.confidence(&Counts(vec![("A", 1), ("B", 1)])), 0.82);
        assert_eq!(model.confidence(&Counts(vec![("A", 2)])), 0.9);
        assert_eq!(model.confidence(&Counts(vec![("B", 3)])), 0.2);
    }

    #[test]
    fn test_model_is_monotone_in_counts() {
        let model = ConfidenceModel { tiers: TIERS };
        let mut previous = 0.0;
        for a in 0..4 {
            for b in 0..4 {
                let value = model.confidence(&Counts(vec![("A", a), ("B", b)]));
                if b == 0 {
                    // Walking A upward with B fixed must never decrease.
                    assert!(value >= previous);
                    previous = value;
                }
                assert!(value >= model.confidence(&Counts(vec![("A", a.saturating_sub(1)), ("B", b)])));
            }
        }
    }

    #[test]
    fn test_empty_model_is_flat_zero() {
        assert_eq!(ConfidenceModel::EMPTY.confidence(&Counts(vec![("A", 9)])), 0.0);
    }
}
