//! # scrim-analysis
//!
//! The decision engine over mined match facts: evidence specs, the
//! budget-gated mining loop, per-focus intent handlers, uncertainty
//! pricing, and the router that assembles final coaching decisions.
//!
//! The flow for one question:
//!
//! ```text
//! intent string → SpecRegistry → Spec → filter → budget-gated mining
//!     → handler answer → decision mapper → truncation → CoachingDecision
//! ```
//!
//! Everything is synchronous and deterministic; the engine holds no
//! per-query state and is safe to share across threads.

pub mod budget;
pub mod decision;
pub mod handlers;
pub mod router;
pub mod specs;

pub use budget::{
    BudgetController, BudgetState, ConfidenceModel, ConfidenceTarget, ConfidenceTier, FactCounts,
};
pub use decision::{map_decision, UncertaintyMetrics, UncertaintySeverity};
pub use handlers::{IntentHandler, MinedFacts, MiningOutcome, StandardAnswer};
pub use router::DecisionEngine;
pub use specs::{create_default_registry, Intent, Spec, SpecFocus, SpecRegistry};
