//! Hard output caps applied across the engine.
//!
//! Bounds are loaded once at startup and treated as read-only for the
//! process lifetime. They cap output sizes only; they never change
//! verdicts, confidence, or path selection.

use serde::{Deserialize, Serialize};

/// System-wide size caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemBounds {
    /// Maximum sub-intents the upstream planner may fan a question into.
    pub max_sub_intents: usize,
    /// Maximum findings any single intent may contribute.
    pub max_findings_per_intent: usize,
    /// Maximum findings across all intents of one question.
    pub max_findings_total: usize,
    /// Maximum support citations in a decision.
    pub max_support_facts: usize,
    /// Maximum counter citations in a decision.
    pub max_counter_facts: usize,
    /// Maximum follow-up suggestions in a decision.
    pub max_followup_questions: usize,
}

impl Default for SystemBounds {
    fn default() -> Self {
        Self {
            max_sub_intents: 3,
            max_findings_per_intent: 2,
            max_findings_total: 5,
            max_support_facts: 3,
            max_counter_facts: 3,
            max_followup_questions: 3,
        }
    }
}

impl SystemBounds {
    /// Fair per-intent finding quota when a question fans out into
    /// `num_intents` sub-intents: an even split of the total, never above
    /// the per-intent cap. Intents beyond the total budget get quota 0.
    pub fn finding_quota(&self, num_intents: usize) -> usize {
        if num_intents == 0 {
            return 0;
        }
        (self.max_findings_total / num_intents).min(self.max_findings_per_intent)
    }
}
