//! Beginner-oriented design assistant.
//!
//! Suggestions come from independent [`Suggester`]s run in registration
//! order. They only read the design and never block saving or validation,
//! so a different suggester (for example a learned model) can be added
//! alongside or instead of the pattern-based rules without touching callers.

pub mod coach;
pub mod rules;

use std::sync::Arc;

use crate::models::{Design, Suggestion};

pub use coach::{explain_error, next_action};
pub use rules::{
    FloatingInputRule, LedResistorRule, MissingDecouplingRule, PlacementGroupingRule,
    PowerGroundNetRule, PowerTraceWidthRule,
};

pub trait Suggester: Send + Sync {
    fn name(&self) -> &'static str;
    fn suggest(&self, design: &Design) -> Vec<Suggestion>;
}

pub struct SuggestionEngine {
    suggesters: Vec<Arc<dyn Suggester>>,
}

impl SuggestionEngine {
    pub fn new() -> Self {
        Self {
            suggesters: Vec::new(),
        }
    }

    pub fn with_default_rules() -> Self {
        let mut engine = Self::new();
        engine.add_suggester(Arc::new(FloatingInputRule));
        engine.add_suggester(Arc::new(MissingDecouplingRule));
        engine.add_suggester(Arc::new(PowerTraceWidthRule));
        engine.add_suggester(Arc::new(PowerGroundNetRule));
        engine.add_suggester(Arc::new(LedResistorRule));
        engine.add_suggester(Arc::new(PlacementGroupingRule));
        engine
    }

    pub fn add_suggester(&mut self, suggester: Arc<dyn Suggester>) {
        self.suggesters.push(suggester);
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.suggesters.iter().map(|s| s.name()).collect()
    }

    pub fn suggest(&self, design: &Design) -> Vec<Suggestion> {
        let suggestions: Vec<Suggestion> = self
            .suggesters
            .iter()
            .flat_map(|s| s.suggest(design))
            .collect();
        tracing::debug!(
            design_id = %design.id,
            count = suggestions.len(),
            "Suggestions generated"
        );
        suggestions
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
