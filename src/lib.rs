//! Promptgrade: Prompt Quality Analyzer and Enhancer
//!
//! Scores free-text prompts on clarity, specificity, context and structure,
//! suggests improvements, and rewrites weak prompts with deterministic passes.

pub mod analyzer;
pub mod config;
pub mod enhancer;
pub mod input;
pub mod lexicon;
pub mod mcp;
pub mod parser;
pub mod reporter;
pub mod showcase;
pub mod watcher;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Maximum points per dimension
pub const MAX_DIMENSION_SCORE: u8 = 25;
/// Maximum total score (four dimensions)
pub const MAX_TOTAL_SCORE: u8 = 100;
/// Sub-scores below this trigger suggestions and enhancement passes
pub const IMPROVEMENT_THRESHOLD: u8 = 15;

/// Result of scoring a single prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    /// Sum of the four sub-scores (0-100)
    pub total_score: u8,
    /// Always 100
    pub max_score: u8,
    /// Total as a percentage of `max_score`
    pub percentage: u8,
    /// Letter grade (A-F)
    pub grade: Grade,
    /// The four clamped sub-scores
    pub scores: ScoreBreakdown,
    /// Sub-scores with their maximum and a description
    pub breakdown: DimensionBreakdown,
    /// Ranked improvement suggestions
    pub suggestions: Vec<Suggestion>,
    /// Counts and flags the rules were computed from
    pub analysis: PromptStats,
}

/// Sub-scores per dimension (each 0-25)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub clarity: u8,
    pub specificity: u8,
    pub context: u8,
    pub structure: u8,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u8 {
        self.clarity
            .saturating_add(self.specificity)
            .saturating_add(self.context)
            .saturating_add(self.structure)
    }

    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Clarity => self.clarity,
            Dimension::Specificity => self.specificity,
            Dimension::Context => self.context,
            Dimension::Structure => self.structure,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: u8) {
        match dimension {
            Dimension::Clarity => self.clarity = value,
            Dimension::Specificity => self.specificity = value,
            Dimension::Context => self.context = value,
            Dimension::Structure => self.structure = value,
        }
    }
}

/// One dimension's entry in the report breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionDetail {
    pub score: u8,
    pub max_score: u8,
    pub description: String,
}

/// Per-dimension details in report order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionBreakdown {
    pub clarity: DimensionDetail,
    pub specificity: DimensionDetail,
    pub context: DimensionDetail,
    pub structure: DimensionDetail,
}

impl DimensionBreakdown {
    pub fn from_scores(scores: &ScoreBreakdown) -> Self {
        let detail = |dimension: Dimension| DimensionDetail {
            score: scores.get(dimension),
            max_score: MAX_DIMENSION_SCORE,
            description: dimension.description().to_string(),
        };
        Self {
            clarity: detail(Dimension::Clarity),
            specificity: detail(Dimension::Specificity),
            context: detail(Dimension::Context),
            structure: detail(Dimension::Structure),
        }
    }
}

/// Scoring dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Clarity,
    Specificity,
    Context,
    Structure,
}

impl Dimension {
    /// All dimensions in report order
    pub const ALL: [Dimension; 4] = [
        Dimension::Clarity,
        Dimension::Specificity,
        Dimension::Context,
        Dimension::Structure,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Dimension::Clarity => {
                "Measures the presence of clear action words and absence of vague terms"
            }
            Dimension::Specificity => {
                "Evaluates concrete details, format specifications, and measurable requirements"
            }
            Dimension::Context => {
                "Assesses background information, audience definition, and situational context"
            }
            Dimension::Structure => "Examines prompt organization, logical flow, and formatting",
        }
    }

    /// Display name used by the console reporter
    pub fn title(&self) -> &'static str {
        match self {
            Dimension::Clarity => "Clarity",
            Dimension::Specificity => "Specificity",
            Dimension::Context => "Context",
            Dimension::Structure => "Structure",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Clarity => write!(f, "clarity"),
            Dimension::Specificity => write!(f, "specificity"),
            Dimension::Context => write!(f, "context"),
            Dimension::Structure => write!(f, "structure"),
        }
    }
}

/// An improvement suggestion for one dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub dimension: Dimension,
    pub message: String,
    pub priority: Priority,
}

impl Suggestion {
    pub fn new(dimension: Dimension, priority: Priority, message: &str) -> Self {
        Self {
            dimension,
            message: message.to_string(),
            priority,
        }
    }
}

/// Suggestion priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// Counts and flags extracted from a prompt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptStats {
    pub word_count: usize,
    pub sentence_count: usize,
    pub has_action_words: bool,
    pub has_vague_words: bool,
    /// At least one context indicator token
    pub has_context: bool,
    /// At least one format indicator token
    pub has_format: bool,
}

/// Letter grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=100 => Grade::A,
            80..=89 => Grade::B,
            70..=79 => Grade::C,
            60..=69 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
            Grade::F => write!(f, "F"),
        }
    }
}

/// Detected rhetorical type of a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Creative,
    Analytical,
    Explanatory,
    Instructional,
    General,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Creative => write!(f, "creative"),
            Category::Analytical => write!(f, "analytical"),
            Category::Explanatory => write!(f, "explanatory"),
            Category::Instructional => write!(f, "instructional"),
            Category::General => write!(f, "general"),
        }
    }
}

/// Scores an enhancement run is gated on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorScores {
    pub clarity: u8,
    pub specificity: u8,
    pub context: u8,
    pub structure: u8,
    /// Defaults to the sum of the four sub-scores when absent
    #[serde(default)]
    pub total_score: Option<u8>,
}

impl PriorScores {
    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Clarity => self.clarity,
            Dimension::Specificity => self.specificity,
            Dimension::Context => self.context,
            Dimension::Structure => self.structure,
        }
    }

    pub fn total(&self) -> u8 {
        self.total_score.unwrap_or_else(|| {
            self.clarity
                .saturating_add(self.specificity)
                .saturating_add(self.context)
                .saturating_add(self.structure)
        })
    }
}

impl From<&ScoreReport> for PriorScores {
    fn from(report: &ScoreReport) -> Self {
        Self {
            clarity: report.scores.clarity,
            specificity: report.scores.specificity,
            context: report.scores.context,
            structure: report.scores.structure,
            total_score: Some(report.total_score),
        }
    }
}

/// Rewritten prompt and what changed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementResult {
    pub original: String,
    pub enhanced: String,
    pub category: Category,
    /// One entry per applied change, in pass order
    pub improvements: Vec<String>,
    pub comparison: Comparison,
}

/// Word-count comparison between original and enhanced prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub original_word_count: usize,
    pub enhanced_word_count: usize,
    pub delta: i64,
    /// enhanced / original; `None` when the original has no words
    pub ratio: Option<f64>,
}

/// Report for a prompt read from a file (or stdin / inline text)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    /// Where the prompt came from (`-` for stdin, `<text>` for inline)
    pub file_path: PathBuf,
    #[serde(flatten)]
    pub report: ScoreReport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhancement: Option<EnhancementResult>,
}

/// Score a prompt with the built-in lexicon.
pub fn analyze(prompt: &str) -> ScoreReport {
    analyzer::PromptAnalyzer::default().analyze(prompt)
}

/// Enhance a prompt with the built-in lexicon and a time-seeded picker.
/// Without `prior` scores no pass runs and the text is returned unchanged.
pub fn enhance(prompt: &str, prior: Option<&PriorScores>) -> EnhancementResult {
    let mut picker = enhancer::SeededPicker::from_entropy();
    enhancer::PromptEnhancer::default().enhance(prompt, prior, &mut picker)
}

/// Public API: analyze a prompt file with the config found from `work_dir`.
///
/// * `path` - path to the prompt file
/// * `work_dir` - directory to start the config search from
/// * `config_path` - optional explicit config; if None, searches from work_dir
pub fn analyze_file(
    path: &std::path::Path,
    work_dir: &std::path::Path,
    config_path: Option<&std::path::Path>,
) -> anyhow::Result<FileReport> {
    let config = crate::config::load_config(work_dir, config_path)?;
    let engine = analyzer::PromptAnalyzer::new(config.lexicon());
    engine.analyze_file(path, config.effective_max_length())
}
