//! Clarity rule - action words present, vague words absent

use super::ScoringRule;
use crate::lexicon::Lexicon;
use crate::parser::ParsedPrompt;
use crate::{Dimension, Priority, Suggestion, MAX_DIMENSION_SCORE};

const POINTS_PER_ACTION_WORD: i32 = 5;
const MAX_ACTION_POINTS: i32 = 15;
const PENALTY_PER_VAGUE_WORD: i32 = 2;
const MAX_VAGUE_PENALTY: i32 = 10;
const BONUS: i32 = 5;

/// Rule for scoring how clearly a prompt states what it wants
pub struct ClarityRule;

impl ClarityRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClarityRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringRule for ClarityRule {
    fn dimension(&self) -> Dimension {
        Dimension::Clarity
    }

    fn calculate_score(&self, prompt: &ParsedPrompt, lexicon: &Lexicon) -> u8 {
        let action_count = prompt
            .count_tokens_in(&lexicon.action_words)
            .min(MAX_ACTION_POINTS as usize) as i32;
        let vague_count = prompt
            .count_tokens_in(&lexicon.vague_words)
            .min(MAX_VAGUE_PENALTY as usize) as i32;

        let mut score: i32 = 0;
        score += (action_count * POINTS_PER_ACTION_WORD).min(MAX_ACTION_POINTS);
        // Can go negative here; clamped below
        score -= (vague_count * PENALTY_PER_VAGUE_WORD).min(MAX_VAGUE_PENALTY);

        if prompt.char_len > 10 && action_count > 0 {
            score += BONUS;
        }
        if prompt.tokens.len() > 5 && vague_count == 0 {
            score += BONUS;
        }

        score.clamp(0, MAX_DIMENSION_SCORE as i32) as u8
    }

    fn suggestions(&self, prompt: &ParsedPrompt, lexicon: &Lexicon) -> Vec<Suggestion> {
        let mut out = Vec::new();
        if !prompt.has_token_in(&lexicon.action_words) {
            out.push(Suggestion::new(
                Dimension::Clarity,
                Priority::High,
                "Add a clear action word like \"explain\", \"analyze\", \"create\", or \"describe\"",
            ));
        }
        if prompt.has_token_in(&lexicon.vague_words) {
            out.push(Suggestion::new(
                Dimension::Clarity,
                Priority::Medium,
                "Replace vague words like \"good\", \"nice\", or \"something\" with specific terms",
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> u8 {
        ClarityRule::new().calculate_score(&ParsedPrompt::new(text), &Lexicon::default())
    }

    #[test]
    fn test_empty_prompt_scores_zero() {
        assert_eq!(score(""), 0);
    }

    #[test]
    fn test_single_action_word_with_bonuses() {
        // 5 (action) + 5 (length > 10 with action) + 5 (> 5 tokens, no vague)
        assert_eq!(score("Explain how photosynthesis works in plants"), 15);
    }

    #[test]
    fn test_action_points_capped_at_fifteen() {
        // 4 action words = 20 capped to 15, +5 +5 = 25
        assert_eq!(score("Analyze, explain, compare and summarize the results"), 25);
    }

    #[test]
    fn test_many_action_and_vague_words_stay_at_cap() {
        assert_eq!(score(&"explain ".repeat(200_000)), 25);
        assert_eq!(score(&"explain nice ".repeat(200_000)), 10);
    }

    #[test]
    fn test_vague_words_floor_at_zero() {
        // 0 action, 6 vague words -> -10, clamped to 0
        assert_eq!(score("good nice great stuff things maybe"), 0);
    }

    #[test]
    fn test_vague_penalty_reduces_action_score() {
        // 5 (action) - 2 (one vague) + 5 (length) = 8; vague word blocks the last bonus
        assert_eq!(score("Write a really short poem about autumn"), 8);
    }

    #[test]
    fn test_short_prompt_gets_no_length_bonus() {
        // "list" is 4 characters: 5 points, no bonuses
        assert_eq!(score("list"), 5);
    }

    #[test]
    fn test_suggestions_for_missing_action_and_vague() {
        let rule = ClarityRule::new();
        let lex = Lexicon::default();
        let s = rule.suggestions(&ParsedPrompt::new("some nice stuff"), &lex);
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].priority, Priority::High);
        assert!(s[0].message.contains("action word"));
        assert_eq!(s[1].priority, Priority::Medium);
        assert!(s[1].message.contains("vague"));
    }

    #[test]
    fn test_no_suggestions_when_clear() {
        let rule = ClarityRule::new();
        let s = rule.suggestions(
            &ParsedPrompt::new("Explain the water cycle"),
            &Lexicon::default(),
        );
        assert!(s.is_empty());
    }
}
