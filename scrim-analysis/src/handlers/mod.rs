//! Intent handlers.
//!
//! A handler owns the analytical judgment for one focus area: its
//! confidence table and the rule that turns mined evidence into a
//! claim with a verdict. Handlers never see context completeness and
//! never pick decision paths; that belongs to the decision mapper.

pub mod economy;
pub mod fallback;
pub mod map_control;
pub mod mine;
pub mod momentum;
pub mod player;
pub mod risk;
pub mod summary;

pub use economy::EconomyHandler;
pub use fallback::FallbackHandler;
pub use map_control::MapControlHandler;
pub use mine::{mine, MinedFacts, MiningOutcome};
pub use momentum::MomentumHandler;
pub use player::PlayerHandler;
pub use risk::RiskHandler;
pub use summary::SummaryHandler;

use scrim_core::Verdict;

use crate::budget::ConfidenceModel;
use crate::specs::{Intent, SpecFocus};

/// A handler's raw answer, before path mapping. The mapper may replace
/// it wholesale on degraded and reject paths.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardAnswer {
    pub claim: String,
    pub verdict: Verdict,
    pub support: Vec<String>,
    pub counter: Vec<String>,
}

/// Analytical judgment for one focus area.
pub trait IntentHandler: Send + Sync {
    /// Focus this handler claims. `None` marks the fallback, which
    /// answers for any spec left without a registered handler.
    fn focus(&self) -> Option<SpecFocus>;

    /// Confidence table driving the mining loop for this focus.
    fn confidence_model(&self) -> ConfidenceModel;

    /// Answers from mined evidence alone. Called on every route; the
    /// answer only survives when the decision path stays standard.
    fn standard_answer(&self, intent: Intent, mined: &MinedFacts<'_>) -> StandardAnswer;
}
