//! Specificity pass - output format and quantifier clauses

use super::{EnhancementPass, PassOutcome};
use crate::enhancer::{pick, Picker};
use crate::lexicon::Lexicon;
use crate::parser::contains_any_ci;
use crate::Dimension;

pub struct SpecificityPass;

impl SpecificityPass {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpecificityPass {
    fn default() -> Self {
        Self::new()
    }
}

impl EnhancementPass for SpecificityPass {
    fn dimension(&self) -> Dimension {
        Dimension::Specificity
    }

    fn apply(&self, text: &str, lexicon: &Lexicon, picker: &mut dyn Picker) -> PassOutcome {
        let lower = text.to_lowercase();
        let mut out = PassOutcome::unchanged(text);

        if !contains_any_ci(&lower, &lexicon.format_markers) {
            if let Some(format) = pick(picker, &lexicon.output_formats) {
                out.text.push_str(&format!(" Present the response {}.", format));
                out.improvements
                    .push(format!("Added format specification: \"{}\"", format));
            }
        }

        if !text.chars().any(|c| c.is_ascii_digit()) {
            if let Some(quantifier) = pick(picker, &lexicon.quantifiers) {
                out.text.push_str(&format!(" Include {}.", quantifier));
                out.improvements
                    .push(format!("Added quantifier: \"{}\"", quantifier));
            }
        }

        out
    }
}
