//! Top-level engine configuration, loadable from TOML.

use serde::{Deserialize, Serialize};

use crate::config::SystemBounds;
use crate::errors::AnalysisError;

/// Budget-controller target settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Confidence at which mining stops early. Must be in `(0, 1]`.
    pub target_confidence: f64,
    /// Facts that must be mined before convergence may stop the loop.
    pub min_steps: u32,
    /// History entries inspected by the convergence check.
    pub convergence_window: usize,
    /// Largest step-to-step confidence change still counted as "settled".
    pub convergence_epsilon: f64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            target_confidence: 0.7,
            min_steps: 1,
            convergence_window: 3,
            convergence_epsilon: 0.05,
        }
    }
}

/// Engine configuration: output bounds plus budget-target settings.
///
/// Every section is optional in the TOML source; omitted sections take
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub bounds: SystemBounds,
    pub target: TargetConfig,
}

impl EngineConfig {
    /// Parses and validates a TOML configuration document.
    pub fn from_toml_str(raw: &str) -> Result<Self, AnalysisError> {
        let config: EngineConfig =
            toml::from_str(raw).map_err(|e| AnalysisError::InvalidConfig {
                reason: e.to_string(),
            })?;
        config.validate()?;
        tracing::debug!(
            target_confidence = config.target.target_confidence,
            max_support_facts = config.bounds.max_support_facts,
            "engine config loaded"
        );
        Ok(config)
    }

    /// Checks the numeric invariants the budget controller relies on.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let target = &self.target;
        if !(target.target_confidence > 0.0 && target.target_confidence <= 1.0) {
            return Err(AnalysisError::InvalidConfig {
                reason: format!(
                    "target_confidence must be in (0, 1], got {}",
                    target.target_confidence
                ),
            });
        }
        if !(target.convergence_epsilon > 0.0) {
            return Err(AnalysisError::InvalidConfig {
                reason: format!(
                    "convergence_epsilon must be positive, got {}",
                    target.convergence_epsilon
                ),
            });
        }
        if target.convergence_window == 0 {
            return Err(AnalysisError::InvalidConfig {
                reason: "convergence_window must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.target.target_confidence, 0.7);
        assert_eq!(config.bounds.max_support_facts, 3);
    }

    #[test]
    fn test_partial_override() {
        let config = EngineConfig::from_toml_str(
            r#"
            [target]
            target_confidence = 0.85

            [bounds]
            max_support_facts = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.target.target_confidence, 0.85);
        // Untouched fields keep their defaults.
        assert_eq!(config.target.convergence_window, 3);
        assert_eq!(config.bounds.max_support_facts, 5);
        assert_eq!(config.bounds.max_counter_facts, 3);
    }

    #[test]
    fn test_target_out_of_range_is_rejected() {
        let result = EngineConfig::from_toml_str(
            r#"
            [target]
            target_confidence = 1.5
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_window_is_rejected() {
        let result = EngineConfig::from_toml_str(
            r#"
            [target]
            convergence_window = 0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_nan_epsilon_is_rejected() {
        let mut config = EngineConfig::default();
        config.target.convergence_epsilon = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        assert!(EngineConfig::from_toml_str("bounds = 3").is_err());
    }
}
