//! Category detection

use crate::lexicon::Lexicon;
use crate::parser::contains_any_ci;
use crate::Category;

/// Classify a prompt by its lexicon category patterns.
///
/// Primary patterns are tried per category in lexicon order, then the
/// fallback keywords in the same order. Anything else is `General`.
pub fn detect_category(text: &str, lexicon: &Lexicon) -> Category {
    let lower = text.to_lowercase();

    if let Some(rule) = lexicon
        .categories
        .iter()
        .find(|rule| contains_any_ci(&lower, &rule.patterns))
    {
        return rule.category;
    }

    lexicon
        .categories
        .iter()
        .find(|rule| contains_any_ci(&lower, &rule.fallback_keywords))
        .map(|rule| rule.category)
        .unwrap_or(Category::General)
}

/// True if any category's primary pattern occurs in `text`
pub fn matches_any_pattern(text: &str, lexicon: &Lexicon) -> bool {
    let lower = text.to_lowercase();
    lexicon
        .categories
        .iter()
        .any(|rule| contains_any_ci(&lower, &rule.patterns))
}
