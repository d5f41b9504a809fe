//! # scrim-core
//!
//! Foundation crate for the Scrim match-review decision engine.
//! Defines facts, context ingestion, decision outputs, errors, config,
//! and output bounds. The analysis crate builds on top of this.

pub mod collections;
pub mod config;
pub mod context;
pub mod decision;
pub mod errors;
pub mod facts;

// Re-export the most commonly used types at the crate root.
pub use collections::{FxHashMap, FxHashSet};
pub use config::{EngineConfig, SystemBounds, TargetConfig};
pub use context::ContextCompleteness;
pub use decision::{CoachingDecision, DecisionPath, Verdict};
pub use errors::{AnalysisError, ScrimErrorCode};
pub use facts::Fact;
