//! Enhancement passes, one per weak dimension

pub mod clarity;
pub mod context;
pub mod specificity;
pub mod structure;
pub mod template;

pub use clarity::ClarityPass;
pub use context::ContextPass;
pub use specificity::SpecificityPass;
pub use structure::StructurePass;
pub use template::apply_template;

use super::Picker;
use crate::lexicon::Lexicon;
use crate::Dimension;

/// Text after a pass plus one entry per change it made
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassOutcome {
    pub text: String,
    pub improvements: Vec<String>,
}

impl PassOutcome {
    pub fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            improvements: Vec::new(),
        }
    }
}

/// Trait for enhancement passes
pub trait EnhancementPass {
    /// Dimension whose sub-score gates this pass
    fn dimension(&self) -> Dimension;

    /// Rewrite `text`. Conditions are checked against `text` as given.
    fn apply(&self, text: &str, lexicon: &Lexicon, picker: &mut dyn Picker) -> PassOutcome;
}

/// The four passes in application order
pub fn default_passes() -> Vec<Box<dyn EnhancementPass + Send + Sync>> {
    vec![
        Box::new(ClarityPass::new()),
        Box::new(SpecificityPass::new()),
        Box::new(ContextPass::new()),
        Box::new(StructurePass::new()),
    ]
}
