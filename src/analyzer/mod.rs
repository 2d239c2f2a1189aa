//! Analyzer module - prompt quality scoring engine

pub mod engine;
pub mod rules;
pub mod scoring;

pub use engine::{read_prompt_file, AggregateStats, PromptAnalyzer};
pub use scoring::ScoreCalculator;
