//! Scoring rules, one per quality dimension

pub mod clarity;
pub mod context;
pub mod specificity;
pub mod structure;

pub use clarity::ClarityRule;
pub use context::ContextRule;
pub use specificity::SpecificityRule;
pub use structure::StructureRule;

use crate::lexicon::Lexicon;
use crate::parser::ParsedPrompt;
use crate::{Dimension, Suggestion};

/// Trait for scoring rules
pub trait ScoringRule {
    /// Dimension this rule scores
    fn dimension(&self) -> Dimension;

    /// Calculate score for this dimension (0-25)
    fn calculate_score(&self, prompt: &ParsedPrompt, lexicon: &Lexicon) -> u8;

    /// Suggestions for this dimension. Only consulted when the score is
    /// below the improvement threshold.
    fn suggestions(&self, prompt: &ParsedPrompt, lexicon: &Lexicon) -> Vec<Suggestion>;
}

/// The four rules in reporting order
pub fn default_rules() -> Vec<Box<dyn ScoringRule + Send + Sync>> {
    vec![
        Box::new(ClarityRule::new()),
        Box::new(SpecificityRule::new()),
        Box::new(ContextRule::new()),
        Box::new(StructureRule::new()),
    ]
}
