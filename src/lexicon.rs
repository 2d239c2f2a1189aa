//! Vocabulary tables that drive the analyzer and the enhancer
//!
//! The tables are plain data: the scoring rules and enhancement passes read
//! them but never change them. A `.promptgraderc.json` may replace any table
//! through its `lexicon` key; tables it leaves out keep their defaults.

use crate::Category;
use serde::{Deserialize, Serialize};

/// Version of the built-in tables. Bump when any default list changes.
pub const LEXICON_VERSION: u32 = 1;

/// A vague word and the specific phrase that replaces it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub vague: String,
    pub specific: String,
}

/// Detection patterns and template skeleton for one prompt category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRule {
    pub category: Category,
    /// Primary patterns (case-insensitive substrings)
    pub patterns: Vec<String>,
    /// Keywords for the second, looser detection pass
    #[serde(default)]
    pub fallback_keywords: Vec<String>,
    /// Slot skeleton shown alongside enhancements
    #[serde(default)]
    pub template: Option<String>,
}

/// All vocabulary used by scoring rules and enhancement passes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Lexicon {
    pub version: u32,

    // Analyzer tables
    pub action_words: Vec<String>,
    pub vague_words: Vec<String>,
    pub context_indicators: Vec<String>,
    pub format_indicators: Vec<String>,
    pub quantifier_phrases: Vec<String>,
    pub detail_words: Vec<String>,
    pub audience_words: Vec<String>,
    pub purpose_words: Vec<String>,
    pub transition_words: Vec<String>,

    // Enhancer tables
    pub categories: Vec<CategoryRule>,
    pub added_action_words: Vec<String>,
    pub vague_replacements: Vec<Replacement>,
    pub output_formats: Vec<String>,
    pub quantifiers: Vec<String>,
    pub audiences: Vec<String>,
    pub purposes: Vec<String>,
    pub format_markers: Vec<String>,
    pub audience_markers: Vec<String>,
    pub purpose_markers: Vec<String>,
    pub structure_markers: Vec<String>,
    pub conjunctions: Vec<String>,
    pub organization_clause: String,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn replacement(vague: &str, specific: &str) -> Replacement {
    Replacement {
        vague: vague.to_string(),
        specific: specific.to_string(),
    }
}

fn category_rule(
    category: Category,
    patterns: &[&str],
    fallback_keywords: &[&str],
    template: &str,
) -> CategoryRule {
    CategoryRule {
        category,
        patterns: words(patterns),
        fallback_keywords: words(fallback_keywords),
        template: Some(template.to_string()),
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            version: LEXICON_VERSION,
            action_words: words(&[
                "analyze", "explain", "create", "write", "generate", "describe", "compare",
                "summarize", "evaluate", "design", "develop", "build", "implement", "calculate",
                "solve", "identify", "list", "outline", "define", "classify",
            ]),
            vague_words: words(&[
                "good", "bad", "nice", "great", "awesome", "terrible", "amazing", "fine", "okay",
                "decent", "pretty", "quite", "very", "really", "something", "anything", "stuff",
                "things", "some", "maybe",
            ]),
            context_indicators: words(&[
                "for",
                "audience",
                "target",
                "purpose",
                "goal",
                "background",
                "context",
                "situation",
                "scenario",
                "use case",
                "intended",
                "aimed at",
                "designed for",
            ]),
            format_indicators: words(&[
                "format",
                "structure",
                "style",
                "length",
                "words",
                "paragraphs",
                "list",
                "bullet",
                "numbered",
                "table",
                "report",
                "essay",
                "summary",
            ]),
            quantifier_phrases: words(&["how many", "how much", "specific", "exactly", "precisely"]),
            detail_words: words(&["include", "must", "should", "need", "require", "ensure"]),
            audience_words: words(&["audience", "for", "student", "beginner", "expert", "professional"]),
            purpose_words: words(&["purpose", "goal", "objective", "aim", "intend", "because"]),
            transition_words: words(&["first", "then", "next", "finally", "also", "additionally"]),

            categories: vec![
                category_rule(
                    Category::Creative,
                    &["write", "create", "generate", "compose"],
                    &["write", "create"],
                    "Create a [LENGTH] [FORMAT] about [TOPIC]. [REQUIREMENTS]. [AUDIENCE]. [STYLE].",
                ),
                category_rule(
                    Category::Analytical,
                    &["analyze", "examine", "evaluate", "assess", "compare"],
                    &["analyze", "compare"],
                    "Analyze [TOPIC] by [METHOD]. Provide: 1) [REQUIREMENT1], 2) [REQUIREMENT2], 3) [REQUIREMENT3]. [AUDIENCE]. [FORMAT].",
                ),
                category_rule(
                    Category::Explanatory,
                    &["explain", "describe", "define", "clarify"],
                    &["explain", "describe"],
                    "Explain [TOPIC] to [AUDIENCE]. Cover: [KEYPOINTS]. Use [STYLE] and provide [EXAMPLES]. [LENGTH].",
                ),
                category_rule(
                    Category::Instructional,
                    &["how to", "steps", "guide", "tutorial"],
                    &["how", "step"],
                    "Provide a step-by-step guide on [TOPIC]. Include: [REQUIREMENTS]. [AUDIENCE]. [FORMAT].",
                ),
            ],
            added_action_words: words(&[
                "Analyze", "Explain", "Create", "Describe", "Compare", "Evaluate",
            ]),
            vague_replacements: vec![
                replacement("good", "high-quality"),
                replacement("bad", "poor-quality"),
                replacement("nice", "well-designed"),
                replacement("great", "excellent"),
                replacement("stuff", "content"),
                replacement("things", "elements"),
                replacement("something", "a specific example"),
            ],
            output_formats: words(&[
                "in 200-300 words",
                "as a bulleted list",
                "in table format",
                "as a structured report",
                "with numbered steps",
                "in paragraph form",
            ]),
            quantifiers: words(&[
                "exactly 3 examples",
                "at least 5 key points",
                "no more than 500 words",
                "between 3-5 paragraphs",
            ]),
            audiences: words(&[
                "for beginners with no prior knowledge",
                "for professionals in the field",
                "for high school students",
                "for a general audience",
                "for technical experts",
            ]),
            purposes: words(&[
                "for educational purposes",
                "for business presentation",
                "for academic research",
                "for practical application",
                "for decision-making",
            ]),
            format_markers: words(&["format", "length", "words", "style", "structure"]),
            audience_markers: words(&["audience", "for", "student", "beginner", "expert", "professional"]),
            purpose_markers: words(&["purpose", "goal", "because"]),
            structure_markers: words(&["first", "then", "next", "finally", "1.", "2.", "3.", "•", "-"]),
            conjunctions: words(&["and", "but", "or", "also", "additionally", "furthermore"]),
            organization_clause: "Please organize your response with: 1) Main points, 2) Supporting details, and 3) Conclusion."
                .to_string(),
        }
    }
}

impl Lexicon {
    /// Template skeleton for a category, if the lexicon defines one
    pub fn template_for(&self, category: Category) -> Option<&str> {
        self.categories
            .iter()
            .find(|rule| rule.category == category)
            .and_then(|rule| rule.template.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_sizes() {
        let lex = Lexicon::default();
        assert_eq!(lex.version, LEXICON_VERSION);
        assert_eq!(lex.action_words.len(), 20);
        assert_eq!(lex.vague_words.len(), 20);
        assert_eq!(lex.added_action_words.len(), 6);
        assert_eq!(lex.vague_replacements.len(), 7);
        assert_eq!(lex.output_formats.len(), 6);
        assert_eq!(lex.quantifiers.len(), 4);
        assert_eq!(lex.audiences.len(), 5);
        assert_eq!(lex.purposes.len(), 5);
    }

    #[test]
    fn test_category_priority_order() {
        let lex = Lexicon::default();
        let order: Vec<Category> = lex.categories.iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![
                Category::Creative,
                Category::Analytical,
                Category::Explanatory,
                Category::Instructional
            ]
        );
    }

    #[test]
    fn test_template_for_general_is_none() {
        let lex = Lexicon::default();
        assert!(lex.template_for(Category::General).is_none());
        assert!(lex
            .template_for(Category::Explanatory)
            .unwrap()
            .starts_with("Explain [TOPIC]"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let lex: Lexicon =
            serde_json::from_str(r#"{ "actionWords": ["draft", "refactor"] }"#).unwrap();
        assert_eq!(lex.action_words, vec!["draft", "refactor"]);
        assert_eq!(lex.vague_words, Lexicon::default().vague_words);
        assert_eq!(lex.categories.len(), 4);
    }

    #[test]
    fn test_replacement_pairs_deserialize() {
        let lex: Lexicon = serde_json::from_str(
            r#"{ "vagueReplacements": [{ "vague": "cool", "specific": "innovative" }] }"#,
        )
        .unwrap();
        assert_eq!(lex.vague_replacements, vec![replacement("cool", "innovative")]);
    }
}
