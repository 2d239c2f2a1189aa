//! Context rule - audience, purpose and background indicators

use super::ScoringRule;
use crate::lexicon::Lexicon;
use crate::parser::ParsedPrompt;
use crate::{Dimension, Priority, Suggestion, MAX_DIMENSION_SCORE};

const AUDIENCE_POINTS: u32 = 10;
const PURPOSE_POINTS: u32 = 10;
const POINTS_PER_CONTEXT_WORD: u32 = 2;
const MAX_CONTEXT_POINTS: u32 = 5;

/// Rule for scoring who the output is for and why it is needed
pub struct ContextRule;

impl ContextRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ContextRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringRule for ContextRule {
    fn dimension(&self) -> Dimension {
        Dimension::Context
    }

    fn calculate_score(&self, prompt: &ParsedPrompt, lexicon: &Lexicon) -> u8 {
        let mut score = 0;

        if prompt.contains_any(&lexicon.audience_words) {
            score += AUDIENCE_POINTS;
        }
        if prompt.contains_any(&lexicon.purpose_words) {
            score += PURPOSE_POINTS;
        }

        // Extra words past the cap add nothing, so clamp before narrowing
        let context_count = prompt
            .count_tokens_in(&lexicon.context_indicators)
            .min(MAX_CONTEXT_POINTS as usize) as u32;
        score += (context_count * POINTS_PER_CONTEXT_WORD).min(MAX_CONTEXT_POINTS);

        score.min(MAX_DIMENSION_SCORE as u32) as u8
    }

    fn suggestions(&self, prompt: &ParsedPrompt, lexicon: &Lexicon) -> Vec<Suggestion> {
        let mut out = Vec::new();
        if !prompt.has_token_in(&lexicon.context_indicators) {
            out.push(Suggestion::new(
                Dimension::Context,
                Priority::High,
                "Add context about your audience (e.g., \"for beginners\", \"for professionals\")",
            ));
        }
        out.push(Suggestion::new(
            Dimension::Context,
            Priority::Medium,
            "Explain the purpose or goal of your request",
        ));
        out
    }
}
