//! Engine configuration: output bounds and budget-target settings.

pub mod bounds;
pub mod engine_config;

pub use bounds::SystemBounds;
pub use engine_config::{EngineConfig, TargetConfig};
