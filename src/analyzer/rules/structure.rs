//! Structure rule - lists, multiple sentences, transitions and questions

use super::ScoringRule;
use crate::lexicon::Lexicon;
use crate::parser::ParsedPrompt;
use crate::{Dimension, Priority, Suggestion, MAX_DIMENSION_SCORE};
use regex::Regex;
use std::sync::OnceLock;

const LIST_POINTS: u32 = 8;
const MULTI_SENTENCE_POINTS: u32 = 7;
const TRANSITION_POINTS: u32 = 5;
const QUESTION_POINTS: u32 = 5;

/// A numbered item ("1."), an asterisk or a hyphen anywhere in the text
fn list_marker() -> &'static Regex {
    static LIST_MARKER: OnceLock<Regex> = OnceLock::new();
    LIST_MARKER.get_or_init(|| Regex::new(r"[0-9]+\.|\*|-").expect("list marker pattern is valid"))
}

/// Rule for scoring how the prompt is organized
pub struct StructureRule;

impl StructureRule {
    pub fn new() -> Self {
        Self
    }

    fn has_list(&self, prompt: &ParsedPrompt) -> bool {
        list_marker().is_match(prompt.raw)
    }
}

impl Default for StructureRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringRule for StructureRule {
    fn dimension(&self) -> Dimension {
        Dimension::Structure
    }

    fn calculate_score(&self, prompt: &ParsedPrompt, lexicon: &Lexicon) -> u8 {
        let mut score = 0;

        if self.has_list(prompt) {
            score += LIST_POINTS;
        }
        if prompt.sentences.len() > 1 {
            score += MULTI_SENTENCE_POINTS;
        }
        if prompt.contains_any(&lexicon.transition_words) {
            score += TRANSITION_POINTS;
        }
        if prompt.raw.contains('?') {
            score += QUESTION_POINTS;
        }

        score.min(MAX_DIMENSION_SCORE as u32) as u8
    }

    fn suggestions(&self, prompt: &ParsedPrompt, _lexicon: &Lexicon) -> Vec<Suggestion> {
        let mut out = Vec::new();
        if prompt.sentences.len() <= 1 {
            out.push(Suggestion::new(
                Dimension::Structure,
                Priority::Medium,
                "Break your prompt into multiple sentences for better clarity",
            ));
        }
        out.push(Suggestion::new(
            Dimension::Structure,
            Priority::Low,
            "Consider organizing your requirements in a numbered list",
        ));
        out
    }
}
