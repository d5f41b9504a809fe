//! Context-completeness summary for a match query.
//!
//! Captures what the caller actually knows about the match under review.
//! The decision mapper prices every gap recorded here; a structurally
//! malformed summary is the one input the engine refuses outright.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AnalysisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextCompleteness {
    /// Whether the final match outcome is known.
    pub has_outcome: bool,
    /// Number of rounds (or games) backing the analysis.
    pub sample_size: u32,
    /// Whether a comparison baseline (prior matches, opponent history)
    /// is available.
    pub has_comparison_baseline: bool,
}

impl ContextCompleteness {
    pub fn new(has_outcome: bool, sample_size: u32, has_comparison_baseline: bool) -> Self {
        ContextCompleteness {
            has_outcome,
            sample_size,
            has_comparison_baseline,
        }
    }

    /// Strict ingestion from an untyped JSON summary.
    ///
    /// Accepts both snake_case and the upstream adapter's camelCase field
    /// spellings. Missing fields, wrong types, and negative or fractional
    /// sample sizes are rejected, never defaulted.
    pub fn from_value(value: &Value) -> Result<Self, AnalysisError> {
        let obj = value
            .as_object()
            .ok_or_else(|| invalid("context summary must be a JSON object"))?;

        Ok(ContextCompleteness {
            has_outcome: require_bool(obj, "has_outcome", "hasOutcome")?,
            sample_size: require_u32(obj, "sample_size", "sampleSize")?,
            has_comparison_baseline: require_bool(
                obj,
                "has_comparison_baseline",
                "hasComparisonBaseline",
            )?,
        })
    }
}

fn invalid(reason: impl Into<String>) -> AnalysisError {
    AnalysisError::InvalidContext {
        reason: reason.into(),
    }
}

fn field<'a>(obj: &'a Map<String, Value>, snake: &str, camel: &str) -> Option<&'a Value> {
    obj.get(snake).or_else(|| obj.get(camel))
}

fn require_bool(obj: &Map<String, Value>, snake: &str, camel: &str) -> Result<bool, AnalysisError> {
    match field(obj, snake, camel) {
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(invalid(format!("field `{snake}` must be a boolean"))),
        None => Err(invalid(format!("missing required field `{snake}`"))),
    }
}

fn require_u32(obj: &Map<String, Value>, snake: &str, camel: &str) -> Result<u32, AnalysisError> {
    match field(obj, snake, camel) {
        Some(value) => {
            let n = value.as_u64().ok_or_else(|| {
                invalid(format!("field `{snake}` must be a non-negative integer"))
            })?;
            u32::try_from(n)
                .map_err(|_| invalid(format!("field `{snake}` exceeds the supported range")))
        }
        None => Err(invalid(format!("missing required field `{snake}`"))),
    }
}
