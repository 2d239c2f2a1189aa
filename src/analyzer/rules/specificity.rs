//! Specificity rule - numbers, quantifiers, format and detailed requirements

use super::ScoringRule;
use crate::lexicon::Lexicon;
use crate::parser::ParsedPrompt;
use crate::{Dimension, Priority, Suggestion, MAX_DIMENSION_SCORE};

const NUMBER_POINTS: u32 = 5;
const QUANTIFIER_POINTS: u32 = 5;
const POINTS_PER_FORMAT_WORD: u32 = 3;
const MAX_FORMAT_POINTS: u32 = 10;
const DETAIL_POINTS: u32 = 5;

/// Rule for scoring concrete, measurable requirements
pub struct SpecificityRule;

impl SpecificityRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpecificityRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringRule for SpecificityRule {
    fn dimension(&self) -> Dimension {
        Dimension::Specificity
    }

    fn calculate_score(&self, prompt: &ParsedPrompt, lexicon: &Lexicon) -> u8 {
        let mut score = 0;

        if prompt.has_digit() {
            score += NUMBER_POINTS;
        }
        if prompt.contains_any(&lexicon.quantifier_phrases) {
            score += QUANTIFIER_POINTS;
        }

        let format_count = prompt
            .count_tokens_in(&lexicon.format_indicators)
            .min(MAX_FORMAT_POINTS as usize) as u32;
        score += (format_count * POINTS_PER_FORMAT_WORD).min(MAX_FORMAT_POINTS);

        if prompt.contains_any(&lexicon.detail_words) {
            score += DETAIL_POINTS;
        }

        score.min(MAX_DIMENSION_SCORE as u32) as u8
    }

    fn suggestions(&self, prompt: &ParsedPrompt, lexicon: &Lexicon) -> Vec<Suggestion> {
        let mut out = Vec::new();
        if !prompt.has_token_in(&lexicon.format_indicators) {
            out.push(Suggestion::new(
                Dimension::Specificity,
                Priority::High,
                "Specify the desired output format (e.g., \"in 200 words\", \"as a list\", \"in table format\")",
            ));
        }
        if !prompt.has_digit() {
            out.push(Suggestion::new(
                Dimension::Specificity,
                Priority::Medium,
                "Include specific numbers or quantities for better results",
            ));
        }
        out
    }
}
