//! Decision-engine errors.
//!
//! Evidentiary gaps are not errors. Missing facts, unmapped intents, and
//! all-reject outcomes flow through the normal decision paths; only
//! structurally invalid input fails.

/// Maps every error variant to a stable SCREAMING_SNAKE code for
/// downstream consumers.
pub trait ScrimErrorCode {
    fn error_code(&self) -> &'static str;
}

/// Errors that can occur while assembling engine inputs.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Invalid context summary: {reason}")]
    InvalidContext { reason: String },

    #[error("Invalid engine config: {reason}")]
    InvalidConfig { reason: String },
}

impl ScrimErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidContext { .. } => "ANALYSIS_INVALID_CONTEXT",
            Self::InvalidConfig { .. } => "ANALYSIS_INVALID_CONFIG",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let err = AnalysisError::InvalidContext {
            reason: "missing hasOutcome".into(),
        };
        assert_eq!(err.error_code(), "ANALYSIS_INVALID_CONTEXT");

        let err = AnalysisError::InvalidConfig {
            reason: "target out of range".into(),
        };
        assert_eq!(err.error_code(), "ANALYSIS_INVALID_CONFIG");
    }

    #[test]
    fn test_display_includes_reason() {
        let err = AnalysisError::InvalidContext {
            reason: "sampleSize must be an integer".into(),
        };
        assert!(err.to_string().contains("sampleSize must be an integer"));
    }
}
