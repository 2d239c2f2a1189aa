//! Clarity pass - action word and vague-term substitution

use super::{EnhancementPass, PassOutcome};
use crate::enhancer::category::matches_any_pattern;
use crate::enhancer::{pick, Picker};
use crate::lexicon::{Lexicon, Replacement};
use crate::Dimension;
use regex::{NoExpand, Regex, RegexBuilder};

pub struct ClarityPass;

impl ClarityPass {
    pub fn new() -> Self {
        Self
    }

    /// Case-insensitive whole-word matcher for one vague term
    fn word_matcher(vague: &str) -> Option<Regex> {
        RegexBuilder::new(&format!(r"\b{}\b", regex::escape(vague)))
            .case_insensitive(true)
            .build()
            .ok()
    }

    /// Replace every pair in order; returns the text and the pairs that matched
    pub fn replace_vague<'a>(
        text: &str,
        replacements: &'a [Replacement],
    ) -> (String, Vec<&'a Replacement>) {
        let mut out = text.to_string();
        let mut applied = Vec::new();

        for pair in replacements.iter().filter(|p| !p.vague.trim().is_empty()) {
            let Some(re) = Self::word_matcher(&pair.vague) else {
                continue;
            };
            if re.is_match(&out) {
                out = re
                    .replace_all(&out, NoExpand(pair.specific.as_str()))
                    .into_owned();
                applied.push(pair);
            }
        }

        (out, applied)
    }
}

impl Default for ClarityPass {
    fn default() -> Self {
        Self::new()
    }
}

impl EnhancementPass for ClarityPass {
    fn dimension(&self) -> Dimension {
        Dimension::Clarity
    }

    fn apply(&self, text: &str, lexicon: &Lexicon, picker: &mut dyn Picker) -> PassOutcome {
        let mut improvements = Vec::new();
        let mut current = text.to_string();

        if !matches_any_pattern(text, lexicon) {
            if let Some(action) = pick(picker, &lexicon.added_action_words) {
                current = format!("{} {}", action, current.to_lowercase());
                improvements.push("Added clear action word".to_string());
            }
        }

        let (replaced, applied) = Self::replace_vague(&current, &lexicon.vague_replacements);
        improvements.extend(applied.iter().map(|pair| {
            format!(
                "Replaced vague term \"{}\" with \"{}\"",
                pair.vague, pair.specific
            )
        }));

        PassOutcome {
            text: replaced,
            improvements,
        }
    }
}
