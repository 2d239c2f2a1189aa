//! Template step

use super::PassOutcome;
use crate::lexicon::Lexicon;
use crate::Category;

/// Category templates are slot skeletons meant for display. Filling the
/// slots needs entity extraction, which the enhancer does not do, so this
/// step never changes the text and never records an improvement.
pub fn apply_template(text: &str, category: Category, lexicon: &Lexicon) -> PassOutcome {
    let _skeleton = lexicon.template_for(category);
    PassOutcome::unchanged(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_is_identity() {
        let lexicon = Lexicon::default();
        for category in [Category::Creative, Category::Instructional, Category::General] {
            let out = apply_template("write a poem", category, &lexicon);
            assert_eq!(out.text, "write a poem");
            assert!(out.improvements.is_empty());
        }
    }
}
