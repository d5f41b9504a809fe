//! Decision output model: verdicts, decision paths, and the final
//! coaching decision handed back to the delivery layer.

use serde::{Deserialize, Serialize};

/// Categorical answer to the caller's question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Yes,
    No,
    LowConfidence,
    Insufficient,
}

impl Verdict {
    pub const ALL: &'static [Verdict] = &[
        Self::Yes,
        Self::No,
        Self::LowConfidence,
        Self::Insufficient,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Yes => "YES",
            Self::No => "NO",
            Self::LowConfidence => "LOW_CONFIDENCE",
            Self::Insufficient => "INSUFFICIENT",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which quality tier the decision mapper placed the answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionPath {
    /// Full-quality answer backed by sufficient evidence.
    Standard,
    /// Partial answer produced under elevated uncertainty.
    Degraded,
    /// Honest refusal: no evidence, or uncertainty too high to answer.
    Reject,
}

impl DecisionPath {
    pub const ALL: &'static [DecisionPath] = &[Self::Standard, Self::Degraded, Self::Reject];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Degraded => "DEGRADED",
            Self::Reject => "REJECT",
        }
    }
}

impl std::fmt::Display for DecisionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Final engine output for one analytical question.
///
/// Every decision cites the facts behind it; the support and counter
/// lists hold citation labels (see `Fact::label`), already capped by the
/// router before this value leaves the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachingDecision {
    /// One-sentence answer to the question.
    pub claim: String,
    pub verdict: Verdict,
    /// Confidence in the claim, in `[0, 1]`.
    pub confidence: f64,
    pub decision_path: DecisionPath,
    /// Citations supporting the claim.
    pub support_facts: Vec<String>,
    /// Citations cutting against the claim.
    pub counter_facts: Vec<String>,
    /// Known gaps in the underlying context, one per priced component.
    pub caveats: Vec<String>,
    /// Suggested follow-up questions for the caller.
    pub followups: Vec<String>,
}
