//! Edge case tests: degenerate inputs must not panic.

use promptgrade::analyzer::PromptAnalyzer;
use promptgrade::enhancer::{FixedPicker, PromptEnhancer};
use promptgrade::{analyze, Dimension, PriorScores};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn analyze_path(path: &Path) -> Result<promptgrade::FileReport, anyhow::Error> {
    PromptAnalyzer::default().analyze_file(path, promptgrade::input::DEFAULT_MAX_LENGTH)
}

fn all_low() -> PriorScores {
    PriorScores {
        clarity: 0,
        specificity: 0,
        context: 0,
        structure: 0,
        total_score: None,
    }
}

fn assert_in_range(report: &promptgrade::ScoreReport) {
    assert!(report.total_score <= 100);
    for dim in Dimension::ALL {
        assert!(report.scores.get(dim) <= 25, "{} out of range", dim);
    }
}

#[test]
fn empty_prompt_no_panic() {
    let r = analyze("");
    assert_eq!(r.total_score, 0);
    assert_eq!(r.analysis.word_count, 0);
    assert_eq!(r.analysis.sentence_count, 0);
}

#[test]
fn punctuation_only_no_panic() {
    let r = analyze("?!?... --- ***");
    assert_in_range(&r);
    assert_eq!(r.analysis.word_count, 0);
    // '?' and the list markers still count toward structure
    assert_eq!(r.scores.structure, 13);
}

#[test]
fn vague_only_prompt_clamps_to_zero() {
    let r = analyze("good bad nice great awesome terrible amazing stuff things");
    assert_eq!(r.scores.clarity, 0);
    assert!(r.analysis.has_vague_words);
}

#[test]
fn keyword_stuffing_caps_each_dimension() {
    let text = "Explain analyze create write generate describe. \
                Use a numbered list, bullet table, report format. \
                Must include exactly 5 points for a student audience; the goal and purpose \
                is context because. First, then, next, finally? 1. 2. 3.";
    let r = analyze(text);
    assert_in_range(&r);
    assert_eq!(r.scores.clarity, 25);
    assert_eq!(r.scores.specificity, 25);
    assert_eq!(r.scores.context, 25);
    assert_eq!(r.scores.structure, 25);
    assert_eq!(r.total_score, 100);
}

#[test]
fn non_ascii_text_no_panic() {
    let r = analyze("Explique la photosynthèse 🌱 pour des élèves. これは何ですか？");
    assert_in_range(&r);
}

#[test]
fn very_long_prompt_completes() {
    let text = "Explain the idea and also the context. ".repeat(2000);
    let r = analyze(&text);
    assert_in_range(&r);
    assert_eq!(r.analysis.sentence_count, 2000);
}

#[test]
fn enhance_empty_prompt_with_low_scores() {
    let result = PromptEnhancer::default().enhance("", Some(&all_low()), &mut FixedPicker(0));
    assert!(result.enhanced.starts_with("Analyze "));
    assert_eq!(result.comparison.original_word_count, 0);
    assert_eq!(result.comparison.ratio, None);
}

#[test]
fn enhance_non_ascii_prompt_no_panic() {
    let prompt = "Écris quelque chose de bien sur les chats 🐈 et les chiens";
    let result = PromptEnhancer::default().enhance(prompt, Some(&all_low()), &mut FixedPicker(3));
    assert!(result.enhanced.len() > prompt.len());
}

#[test]
fn blank_file_rejected() {
    let mut file = NamedTempFile::with_suffix(".prompt").unwrap();
    file.write_all(b"  \n\t\n").unwrap();
    file.flush().unwrap();
    let err = analyze_path(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("non-empty"));
}

#[test]
fn file_with_bom_scores_like_plain_text() {
    let mut file = NamedTempFile::with_suffix(".prompt").unwrap();
    file.write_all(b"\xEF\xBB\xBFExplain tides for students").unwrap();
    file.flush().unwrap();
    let r = analyze_path(file.path()).unwrap();
    assert_eq!(r.report.scores, analyze("Explain tides for students").scores);
}

#[test]
fn non_utf8_file_is_an_error() {
    let mut file = NamedTempFile::with_suffix(".prompt").unwrap();
    file.write_all(&[0xff, 0xfe, 0x00, 0x41]).unwrap();
    file.flush().unwrap();
    assert!(analyze_path(file.path()).is_err());
}

#[test]
fn file_at_length_limit_accepted() {
    let mut file = NamedTempFile::with_suffix(".prompt").unwrap();
    file.write_all("a".repeat(5000).as_bytes()).unwrap();
    file.flush().unwrap();
    assert!(analyze_path(file.path()).is_ok());

    let mut file = NamedTempFile::with_suffix(".prompt").unwrap();
    file.write_all("a".repeat(5001).as_bytes()).unwrap();
    file.flush().unwrap();
    assert!(analyze_path(file.path()).is_err());
}
