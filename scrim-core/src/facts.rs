//! Match facts: the immutable evidence records the engine selects from.
//!
//! Facts are produced by the upstream mining layer over finished match
//! data. The engine cites them verbatim; it never creates, revises, or
//! infers facts.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical fact-type names emitted by the evidence-mining layer.
pub mod kinds {
    pub const HIGH_RISK_SEQUENCE: &str = "HIGH_RISK_SEQUENCE";
    pub const ROUND_SWING: &str = "ROUND_SWING";
    pub const ECO_COLLAPSE_SEQUENCE: &str = "ECO_COLLAPSE_SEQUENCE";
    pub const FORCE_BUY_ROUND: &str = "FORCE_BUY_ROUND";
    pub const FULL_BUY_ROUND: &str = "FULL_BUY_ROUND";
    pub const ECONOMIC_PATTERN: &str = "ECONOMIC_PATTERN";
    pub const OBJECTIVE_LOSS_CHAIN: &str = "OBJECTIVE_LOSS_CHAIN";
    pub const PLAYER_IMPACT_STAT: &str = "PLAYER_IMPACT_STAT";
    pub const CONTEXT_ONLY: &str = "CONTEXT_ONLY";

    pub const ALL: [&str; 9] = [
        HIGH_RISK_SEQUENCE,
        ROUND_SWING,
        ECO_COLLAPSE_SEQUENCE,
        FORCE_BUY_ROUND,
        FULL_BUY_ROUND,
        ECONOMIC_PATTERN,
        OBJECTIVE_LOSS_CHAIN,
        PLAYER_IMPACT_STAT,
        CONTEXT_ONLY,
    ];
}

/// A single derived observation about a finished match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    /// Open fact-type string. Unknown types are representable; they are
    /// simply invisible to every built-in evidence spec.
    pub fact_type: String,
    /// Free-form payload from the mining layer (notes, indices, stats).
    #[serde(default)]
    pub content: serde_json::Map<String, Value>,
    /// Inclusive round interval the fact covers, when round-scoped.
    #[serde(default)]
    pub round_range: Option<(u32, u32)>,
    /// Miner-assigned confidence in the fact itself, when available.
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl Fact {
    pub fn new(fact_type: impl Into<String>) -> Self {
        Fact {
            fact_type: fact_type.into(),
            content: serde_json::Map::new(),
            round_range: None,
            confidence: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.content.insert("note".into(), Value::String(note.into()));
        self
    }

    pub fn with_rounds(mut self, start: u32, end: u32) -> Self {
        self.round_range = Some((start, end));
        self
    }

    pub fn with_game(mut self, game_index: u64) -> Self {
        self.content
            .insert("game_index".into(), Value::Number(game_index.into()));
        self
    }

    /// The `note` payload field, when present and textual.
    pub fn note(&self) -> Option<&str> {
        self.content.get("note").and_then(Value::as_str)
    }

    /// The `game_index` payload field, when present and integral.
    pub fn game_index(&self) -> Option<u64> {
        self.content.get("game_index").and_then(Value::as_u64)
    }

    /// Short citation label, e.g. `"G2 | R7-R9 | lost three pistol conversions"`.
    ///
    /// Segments are included for whichever pieces the fact carries; the
    /// note falls back to the fact type so a label is never empty.
    pub fn label(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(3);
        if let Some(gi) = self.game_index() {
            parts.push(format!("G{gi}"));
        }
        if let Some((start, end)) = self.round_range {
            parts.push(format!("R{start}-R{end}"));
        }
        match self.note() {
            Some(note) => parts.push(note.to_string()),
            None => parts.push(self.fact_type.clone()),
        }
        parts.join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_with_all_segments() {
        let fact = Fact::new(kinds::ROUND_SWING)
            .with_game(2)
            .with_rounds(7, 9)
            .with_note("lost three pistol conversions");
        assert_eq!(fact.label(), "G2 | R7-R9 | lost three pistol conversions");
    }

    #[test]
    fn test_label_falls_back_to_fact_type() {
        let fact = Fact::new(kinds::HIGH_RISK_SEQUENCE);
        assert_eq!(fact.label(), "HIGH_RISK_SEQUENCE");
    }

    #[test]
    fn test_label_rounds_only() {
        let fact = Fact::new(kinds::ECO_COLLAPSE_SEQUENCE).with_rounds(3, 5);
        assert_eq!(fact.label(), "R3-R5 | ECO_COLLAPSE_SEQUENCE");
    }

    #[test]
    fn test_unknown_fact_type_is_representable() {
        let fact = Fact::new("CLUTCH_STREAK").with_note("3 clutches in a half");
        assert_eq!(fact.fact_type, "CLUTCH_STREAK");
        assert_eq!(fact.note(), Some("3 clutches in a half"));
    }

    #[test]
    fn test_serde_round_trip_preserves_content() {
        let fact = Fact::new(kinds::PLAYER_IMPACT_STAT)
            .with_game(1)
            .with_note("opening duels 7-2");
        let json = serde_json::to_string(&fact).unwrap();
        let back: Fact = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fact);
    }
}
