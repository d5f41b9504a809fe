//! Evidence specs: per-intent visibility, budgets, and output contracts.

pub mod filter;
pub mod registry;
pub mod types;

pub use filter::{filter_facts, FilteredFacts};
pub use registry::{create_default_registry, SpecRegistry};
pub use types::{Intent, OutputContract, RequiredEvidence, Spec, SpecBudget, SpecFocus};
