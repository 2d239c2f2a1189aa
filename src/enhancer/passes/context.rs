//! Context pass - audience and purpose clauses

use super::{EnhancementPass, PassOutcome};
use crate::enhancer::{pick, Picker};
use crate::lexicon::Lexicon;
use crate::parser::contains_any_ci;
use crate::Dimension;

pub struct ContextPass;

impl ContextPass {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ContextPass {
    fn default() -> Self {
        Self::new()
    }
}

impl EnhancementPass for ContextPass {
    fn dimension(&self) -> Dimension {
        Dimension::Context
    }

    fn apply(&self, text: &str, lexicon: &Lexicon, picker: &mut dyn Picker) -> PassOutcome {
        let lower = text.to_lowercase();
        let mut out = PassOutcome::unchanged(text);

        if !contains_any_ci(&lower, &lexicon.audience_markers) {
            if let Some(audience) = pick(picker, &lexicon.audiences) {
                out.text.push_str(&format!(" Write this {}.", audience));
                out.improvements
                    .push(format!("Added audience context: \"{}\"", audience));
            }
        }

        if !contains_any_ci(&lower, &lexicon.purpose_markers) {
            if let Some(purpose) = pick(picker, &lexicon.purposes) {
                out.text
                    .push_str(&format!(" This content is intended {}.", purpose));
                out.improvements.push(format!("Added purpose: \"{}\"", purpose));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enhancer::FixedPicker;

    fn apply(text: &str, index: usize) -> PassOutcome {
        ContextPass::new().apply(text, &Lexicon::default(), &mut FixedPicker(index))
    }

    #[test]
    fn test_appends_audience_and_purpose() {
        let out = apply("Describe the moon", 3);
        assert_eq!(
            out.text,
            "Describe the moon Write this for a general audience. This content is intended for practical application."
        );
        assert_eq!(out.improvements.len(), 2);
        assert_eq!(out.improvements[0], "Added audience context: \"for a general audience\"");
        assert_eq!(out.improvements[1], "Added purpose: \"for practical application\"");
    }

    #[test]
    fn test_purpose_check_ignores_appended_audience() {
        // The audience clause adds "for" but not a purpose marker
        let out = apply("Describe the moon", 0);
        assert!(out.text.contains("intended for educational purposes"));
    }

    #[test]
    fn test_existing_markers_leave_text_alone() {
        let out = apply("Describe the moon for students because of the exam", 0);
        assert_eq!(out.text, "Describe the moon for students because of the exam");
        assert!(out.improvements.is_empty());
    }

    #[test]
    fn test_audience_marker_substring() {
        // "information" contains "for"; only purpose is added
        let out = apply("Summarize the information", 0);
        assert_eq!(out.improvements, vec!["Added purpose: \"for educational purposes\""]);
    }
}
