//! The decision engine: registry, handler dispatch, final truncation.
//!
//! One `DecisionEngine` serves many queries. It owns no per-query
//! state; everything mutable lives on the stack of `route`, so a
//! shared reference is safe across threads.

use scrim_core::{
    AnalysisError, CoachingDecision, ContextCompleteness, EngineConfig, Fact, SystemBounds,
};

use crate::budget::ConfidenceTarget;
use crate::decision::map_decision;
use crate::handlers::{
    mine, EconomyHandler, FallbackHandler, IntentHandler, MapControlHandler, MomentumHandler,
    PlayerHandler, RiskHandler, SummaryHandler,
};
use crate::specs::{create_default_registry, SpecFocus, SpecRegistry};

pub struct DecisionEngine {
    registry: SpecRegistry,
    handlers: Vec<Box<dyn IntentHandler>>,
    fallback: FallbackHandler,
    target: ConfidenceTarget,
    bounds: SystemBounds,
}

impl DecisionEngine {
    /// Engine with the built-in specs and all six focus handlers.
    pub fn new(config: EngineConfig) -> Self {
        let mut engine = Self {
            registry: create_default_registry(),
            handlers: Vec::new(),
            fallback: FallbackHandler,
            target: ConfidenceTarget::from(&config.target),
            bounds: config.bounds,
        };
        engine.register(Box::new(EconomyHandler));
        engine.register(Box::new(RiskHandler));
        engine.register(Box::new(MapControlHandler));
        engine.register(Box::new(PlayerHandler));
        engine.register(Box::new(SummaryHandler));
        engine.register(Box::new(MomentumHandler));
        engine
    }

    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Registers a handler. Dispatch takes the first handler claiming
    /// a focus, so built-ins keep priority over later registrations.
    pub fn register(&mut self, handler: Box<dyn IntentHandler>) {
        self.handlers.push(handler);
    }

    pub fn registry(&self) -> &SpecRegistry {
        &self.registry
    }

    fn handler_for(&self, focus: SpecFocus) -> &dyn IntentHandler {
        self.handlers
            .iter()
            .find(|handler| handler.focus() == Some(focus))
            .map(|handler| handler.as_ref())
            .unwrap_or(&self.fallback)
    }

    /// Answers one question. Total: resolves any intent string, never
    /// errors, and inability to answer comes back as a Reject-path
    /// decision.
    pub fn route(
        &self,
        raw_intent: &str,
        facts: &[Fact],
        context: &ContextCompleteness,
    ) -> CoachingDecision {
        let span = tracing::debug_span!("route", intent = raw_intent);
        let _guard = span.enter();

        let (intent, spec) = self.registry.resolve_str(raw_intent);
        let handler = self.handler_for(spec.focus);
        let outcome = mine(spec, facts, handler.confidence_model(), &self.target);
        let answer = handler.standard_answer(intent, &outcome.mined);
        let mut decision = map_decision(intent, spec, answer, &outcome, context);
        self.truncate(&mut decision);

        tracing::info!(
            intent = %intent,
            focus = %spec.focus,
            path = %decision.decision_path,
            verdict = %decision.verdict,
            confidence = decision.confidence,
            "decision routed"
        );
        decision
    }

    /// Variant taking the raw JSON context summary. The one fallible
    /// entry point: a malformed summary is refused, not defaulted.
    pub fn route_value(
        &self,
        raw_intent: &str,
        facts: &[Fact],
        context: &serde_json::Value,
    ) -> Result<CoachingDecision, AnalysisError> {
        let context = ContextCompleteness::from_value(context)?;
        Ok(self.route(raw_intent, facts, &context))
    }

    /// Answers a question that fanned out into several intents. At
    /// most `max_sub_intents` are served, and each decision's support
    /// citations share the finding budget fairly via the quota.
    pub fn route_many(
        &self,
        raw_intents: &[&str],
        facts: &[Fact],
        context: &ContextCompleteness,
    ) -> Vec<CoachingDecision> {
        let served = raw_intents.len().min(self.bounds.max_sub_intents);
        let quota = self.bounds.finding_quota(served);
        raw_intents[..served]
            .iter()
            .map(|raw_intent| {
                let mut decision = self.route(raw_intent, facts, context);
                decision.support_facts.truncate(quota);
                decision
            })
            .collect()
    }

    /// Output caps, the only mutation after mapping. Idempotent.
    fn truncate(&self, decision: &mut CoachingDecision) {
        decision.support_facts.truncate(self.bounds.max_support_facts);
        decision.counter_facts.truncate(self.bounds.max_counter_facts);
        decision.followups.truncate(self.bounds.max_followup_questions);
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
