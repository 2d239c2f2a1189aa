//! Analysis engine - runs every scoring rule over a prompt

use crate::input::validate_prompt;
use crate::lexicon::Lexicon;
use crate::parser::ParsedPrompt;
use crate::{FileReport, Grade, PromptStats, ScoreBreakdown, ScoreReport, IMPROVEMENT_THRESHOLD};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::rules::{default_rules, ScoringRule};
use super::ScoreCalculator;

/// Read a prompt file.
///
/// Leading and trailing whitespace (such as the final newline) is not
/// part of the prompt.
pub fn read_prompt_file(path: &Path) -> Result<String> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read prompt file: {}", path.display()))?;
    Ok(source.trim().to_string())
}

/// Main analysis engine that orchestrates all rules
pub struct PromptAnalyzer {
    lexicon: Lexicon,
    rules: Vec<Box<dyn ScoringRule + Send + Sync>>,
}

impl PromptAnalyzer {
    /// Create an analyzer over the given vocabulary
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            rules: default_rules(),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score a prompt. Total over any string.
    pub fn analyze(&self, prompt: &str) -> ScoreReport {
        let parsed = ParsedPrompt::new(prompt);

        let mut scores = ScoreBreakdown::default();
        let mut suggestions = Vec::new();
        for rule in &self.rules {
            let score = rule.calculate_score(&parsed, &self.lexicon);
            scores.set(rule.dimension(), score);
            if score < IMPROVEMENT_THRESHOLD {
                suggestions.extend(rule.suggestions(&parsed, &self.lexicon));
            }
        }

        ScoreCalculator::build_report(scores, suggestions, self.stats(&parsed))
    }

    fn stats(&self, parsed: &ParsedPrompt) -> PromptStats {
        PromptStats {
            word_count: parsed.tokens.len(),
            sentence_count: parsed.sentences.len(),
            has_action_words: parsed.has_token_in(&self.lexicon.action_words),
            has_vague_words: parsed.has_token_in(&self.lexicon.vague_words),
            has_context: parsed.has_token_in(&self.lexicon.context_indicators),
            has_format: parsed.has_token_in(&self.lexicon.format_indicators),
        }
    }

    /// Read, validate and score a prompt file.
    pub fn analyze_file(&self, path: &Path, max_length: usize) -> Result<FileReport> {
        let prompt = read_prompt_file(path)?;
        self.analyze_text(path, &prompt, max_length)
    }

    /// Validate and score prompt text that came from somewhere other than a file
    pub fn analyze_text(
        &self,
        label: impl Into<PathBuf>,
        text: &str,
        max_length: usize,
    ) -> Result<FileReport> {
        let label = label.into();
        validate_prompt(text, max_length)
            .with_context(|| format!("Invalid prompt in {}", label.display()))?;

        Ok(FileReport {
            file_path: label,
            report: self.analyze(text),
            enhancement: None,
        })
    }

    /// Get aggregate stats from multiple results
    pub fn aggregate_stats(results: &[FileReport]) -> AggregateStats {
        if results.is_empty() {
            return AggregateStats::default();
        }

        let total_score: u32 = results.iter().map(|r| r.report.total_score as u32).sum();
        let avg_score = (total_score / results.len() as u32) as u8;

        let total_suggestions: usize = results.iter().map(|r| r.report.suggestions.len()).sum();
        let lowest = results
            .iter()
            .min_by_key(|r| r.report.total_score)
            .map(|r| (r.file_path.clone(), r.report.total_score));

        AggregateStats {
            files_analyzed: results.len(),
            average_score: avg_score,
            average_grade: Grade::from_score(avg_score),
            total_suggestions,
            lowest,
        }
    }
}

impl Default for PromptAnalyzer {
    fn default() -> Self {
        Self::new(Lexicon::default())
    }
}

/// Aggregate statistics from multiple prompt analyses
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateStats {
    /// Number of prompts analyzed
    pub files_analyzed: usize,
    /// Average total score (integer division)
    pub average_score: u8,
    pub average_grade: Grade,
    /// Total number of suggestions across all prompts
    pub total_suggestions: usize,
    /// Lowest-scoring prompt and its score
    pub lowest: Option<(PathBuf, u8)>,
}

impl Default for AggregateStats {
    fn default() -> Self {
        Self {
            files_analyzed: 0,
            average_score: 0,
            average_grade: Grade::F,
            total_suggestions: 0,
            lowest: None,
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::MAX_DIMENSION_SCORE;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn total_is_sum_of_clamped_scores(ref prompt in ".{0,400}") {
            let report = PromptAnalyzer::default().analyze(prompt);
            let s = report.scores;

            prop_assert!(s.clarity <= MAX_DIMENSION_SCORE);
            prop_assert!(s.specificity <= MAX_DIMENSION_SCORE);
            prop_assert!(s.context <= MAX_DIMENSION_SCORE);
            prop_assert!(s.structure <= MAX_DIMENSION_SCORE);
            prop_assert_eq!(
                report.total_score as u32,
                s.clarity as u32 + s.specificity as u32 + s.context as u32 + s.structure as u32
            );
            prop_assert_eq!(report.percentage, report.total_score);
            prop_assert_eq!(report.grade, Grade::from_score(report.total_score));
        }

        #[test]
        fn suggestions_only_for_weak_dimensions(ref prompt in "[a-zA-Z0-9 .,?!-]{0,200}") {
            let report = PromptAnalyzer::default().analyze(prompt);
            for s in &report.suggestions {
                prop_assert!(report.scores.get(s.dimension) < IMPROVEMENT_THRESHOLD);
            }
        }
    }
}
