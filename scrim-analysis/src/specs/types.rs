//! Evidence-spec types: focus, intent, visibility, budget, output contract.

use serde::{Deserialize, Serialize};

/// Analytical focus a spec narrows a question to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpecFocus {
    Economy,
    Risk,
    Map,
    Player,
    Summary,
    Momentum,
}

impl SpecFocus {
    pub const ALL: &'static [SpecFocus] = &[
        Self::Economy,
        Self::Risk,
        Self::Map,
        Self::Player,
        Self::Summary,
        Self::Momentum,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Economy => "ECONOMY",
            Self::Risk => "RISK",
            Self::Map => "MAP",
            Self::Player => "PLAYER",
            Self::Summary => "SUMMARY",
            Self::Momentum => "MOMENTUM",
        }
    }
}

impl std::fmt::Display for SpecFocus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Question intents produced by the upstream classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    EconomicCounterfactual,
    EconomicFailure,
    TacticalEval,
    RiskAssessment,
    StabilityAnalysis,
    CollapseOnsetAnalysis,
    MapWeakPoint,
    ExecutionVsStrategy,
    PlayerReview,
    CounterfactualPlayerImpact,
    MatchSummary,
    MatchReview,
    MomentumAnalysis,
    PhaseComparison,
}

impl Intent {
    pub const ALL: &'static [Intent] = &[
        Self::EconomicCounterfactual,
        Self::EconomicFailure,
        Self::TacticalEval,
        Self::RiskAssessment,
        Self::StabilityAnalysis,
        Self::CollapseOnsetAnalysis,
        Self::MapWeakPoint,
        Self::ExecutionVsStrategy,
        Self::PlayerReview,
        Self::CounterfactualPlayerImpact,
        Self::MatchSummary,
        Self::MatchReview,
        Self::MomentumAnalysis,
        Self::PhaseComparison,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::EconomicCounterfactual => "ECONOMIC_COUNTERFACTUAL",
            Self::EconomicFailure => "ECONOMIC_FAILURE",
            Self::TacticalEval => "TACTICAL_EVAL",
            Self::RiskAssessment => "RISK_ASSESSMENT",
            Self::StabilityAnalysis => "STABILITY_ANALYSIS",
            Self::CollapseOnsetAnalysis => "COLLAPSE_ONSET_ANALYSIS",
            Self::MapWeakPoint => "MAP_WEAK_POINT",
            Self::ExecutionVsStrategy => "EXECUTION_VS_STRATEGY",
            Self::PlayerReview => "PLAYER_REVIEW",
            Self::CounterfactualPlayerImpact => "COUNTERFACTUAL_PLAYER_IMPACT",
            Self::MatchSummary => "MATCH_SUMMARY",
            Self::MatchReview => "MATCH_REVIEW",
            Self::MomentumAnalysis => "MOMENTUM_ANALYSIS",
            Self::PhaseComparison => "PHASE_COMPARISON",
        }
    }

    /// Parses a classifier intent string, tolerating case and whitespace.
    ///
    /// Unknown strings return `None`; the registry treats those as
    /// summary questions rather than errors.
    pub fn parse(raw: &str) -> Option<Intent> {
        let normalized = raw.trim().to_ascii_uppercase();
        Intent::ALL
            .iter()
            .copied()
            .find(|intent| intent.name() == normalized)
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Minimum sufficient evidence for a spec, plus what may be absent.
#[derive(Debug, Clone)]
pub struct RequiredEvidence {
    /// Fact types that answer the question directly, in priority order.
    pub primary_fact_types: Vec<&'static str>,
    /// Fact types that sharpen the answer when budget remains.
    pub optional_fact_types: Vec<&'static str>,
    /// Match-schema fields the mining layer must have resolved.
    pub required_schema_fields: Vec<&'static str>,
    /// Schema fields whose absence is priced, not fatal.
    pub allowed_missing_fields: Vec<&'static str>,
}

impl RequiredEvidence {
    /// All visible fact types, primaries first.
    pub fn allowed_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.primary_fact_types
            .iter()
            .chain(self.optional_fact_types.iter())
            .copied()
    }

    pub fn is_visible(&self, fact_type: &str) -> bool {
        self.allowed_types().any(|t| t == fact_type)
    }
}

/// Hard per-spec mining caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecBudget {
    /// Total facts a handler may mine for one question.
    pub max_facts_total: u32,
    /// Facts of any single type the filter will surface.
    pub max_facts_per_type: u32,
    /// Event-window ceiling honored by the upstream mining planner.
    pub max_events_window: Option<u32>,
    /// Analysis-method ceiling honored by the upstream mining planner.
    pub max_analysis_methods: u32,
}

/// Output-quality contract: when each decision path is considered on-spec.
///
/// The mapper selects paths from uncertainty alone; these thresholds are
/// advisory and undershoots are logged, never enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputContract {
    pub standard_min_confidence: f64,
    pub standard_min_facts: u32,
    pub degraded_max_uncertainty: f64,
    pub degraded_min_facts: u32,
    /// Decision fields the delivery layer relies on.
    pub required_fields: Vec<&'static str>,
    /// Sample sizes below this floor are priced as small-sample
    /// uncertainty.
    pub small_sample_floor: u32,
}

impl Default for OutputContract {
    fn default() -> Self {
        Self {
            standard_min_confidence: 0.7,
            standard_min_facts: 2,
            degraded_max_uncertainty: 0.8,
            degraded_min_facts: 1,
            required_fields: vec!["claim", "verdict", "confidence", "support_facts"],
            small_sample_floor: 20,
        }
    }
}

/// A complete evidence spec: what a question may see, how much of it, and
/// what shape the answer must take.
#[derive(Debug, Clone)]
pub struct Spec {
    pub focus: SpecFocus,
    pub required_evidence: RequiredEvidence,
    pub budget: SpecBudget,
    pub output_contract: OutputContract,
    /// Intents this spec answers.
    pub intents: Vec<Intent>,
    /// Fixed follow-up suggestions attached to every decision.
    pub followups: Vec<&'static str>,
}
