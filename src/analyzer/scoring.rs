//! Score calculation for prompt quality

use crate::{
    DimensionBreakdown, Grade, PromptStats, ScoreBreakdown, ScoreReport, Suggestion,
    MAX_DIMENSION_SCORE, MAX_TOTAL_SCORE,
};

/// Calculator for prompt quality scores
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Clamp every sub-score into the dimension range
    pub fn clamp(scores: ScoreBreakdown) -> ScoreBreakdown {
        ScoreBreakdown {
            clarity: scores.clarity.min(MAX_DIMENSION_SCORE),
            specificity: scores.specificity.min(MAX_DIMENSION_SCORE),
            context: scores.context.min(MAX_DIMENSION_SCORE),
            structure: scores.structure.min(MAX_DIMENSION_SCORE),
        }
    }

    /// Total as a rounded percentage of the maximum score
    pub fn percentage(total: u8) -> u8 {
        let pct = (total as f64 / MAX_TOTAL_SCORE as f64) * 100.0;
        pct.round().clamp(0.0, 100.0) as u8
    }

    /// Assemble the full report from already-computed parts
    pub fn build_report(
        scores: ScoreBreakdown,
        suggestions: Vec<Suggestion>,
        analysis: PromptStats,
    ) -> ScoreReport {
        let scores = Self::clamp(scores);
        let total = scores.total();

        ScoreReport {
            total_score: total,
            max_score: MAX_TOTAL_SCORE,
            percentage: Self::percentage(total),
            grade: Grade::from_score(total),
            scores,
            breakdown: DimensionBreakdown::from_scores(&scores),
            suggestions,
            analysis,
        }
    }

    /// Get a description of the grade
    pub fn grade_description(grade: Grade) -> &'static str {
        match grade {
            Grade::A => "Excellent - The prompt is clear, specific and well organized",
            Grade::B => "Good - The prompt is solid but has room for improvement",
            Grade::C => "Fair - The prompt works but leaves important details out",
            Grade::D => "Poor - The prompt is missing several key elements",
            Grade::F => "Failing - The prompt needs major improvements",
        }
    }
}
