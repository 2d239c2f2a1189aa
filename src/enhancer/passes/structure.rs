//! Structure pass - split long run-on sentences, add an organization clause

use super::{EnhancementPass, PassOutcome};
use crate::enhancer::Picker;
use crate::lexicon::Lexicon;
use crate::parser::split_sentences;
use crate::Dimension;
use regex::RegexBuilder;

/// A single sentence longer than this is split on conjunctions
const LONG_SENTENCE_CHARS: usize = 100;
/// The organization clause is only added to text longer than this
const MIN_ORGANIZE_CHARS: usize = 50;
/// Fragments at or below this trimmed length are dropped
const MIN_FRAGMENT_CHARS: usize = 10;

pub struct StructurePass;

impl StructurePass {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StructurePass {
    fn default() -> Self {
        Self::new()
    }
}

/// Split `text` on each conjunction in turn (whitespace on both sides,
/// case-insensitive) and keep the fragments longer than ten characters.
///
/// Fragments come back trimmed with trailing sentence punctuation removed.
pub fn break_into_logical_parts(text: &str, conjunctions: &[String]) -> Vec<String> {
    let mut parts = vec![text.to_string()];

    for conjunction in conjunctions.iter().filter(|c| !c.trim().is_empty()) {
        let Ok(splitter) = RegexBuilder::new(&format!(r"\s+{}\s+", regex::escape(conjunction)))
            .case_insensitive(true)
            .build()
        else {
            continue;
        };
        parts = parts
            .iter()
            .flat_map(|part| splitter.split(part).map(str::to_string).collect::<Vec<_>>())
            .collect();
    }

    parts
        .iter()
        .map(|part| {
            part.trim()
                .trim_end_matches(|c: char| matches!(c, '.' | '!' | '?'))
                .trim_end()
                .to_string()
        })
        .filter(|part| part.chars().count() > MIN_FRAGMENT_CHARS)
        .collect()
}

/// True if `text` already shows structure.
///
/// Word and numbering markers ("first", "1.") match as case-insensitive
/// substrings. Punctuation-only markers ("-", "•") count only as list
/// bullets: at the start of the text or after whitespace, and followed by
/// whitespace. A hyphen inside "200-300" or "decision-making" is not a bullet.
fn has_structure_marker(text: &str, markers: &[String]) -> bool {
    let lower = text.to_lowercase();

    markers.iter().filter(|m| !m.is_empty()).any(|marker| {
        let marker = marker.to_lowercase();
        if marker.chars().any(char::is_alphanumeric) {
            return lower.contains(&marker);
        }
        lower.match_indices(marker.as_str()).any(|(start, found)| {
            let opens_item = lower[..start]
                .chars()
                .next_back()
                .map_or(true, char::is_whitespace);
            let followed_by_space = lower[start + found.len()..]
                .chars()
                .next()
                .is_some_and(char::is_whitespace);
            opens_item && followed_by_space
        })
    })
}

impl EnhancementPass for StructurePass {
    fn dimension(&self) -> Dimension {
        Dimension::Structure
    }

    fn apply(&self, text: &str, lexicon: &Lexicon, _picker: &mut dyn Picker) -> PassOutcome {
        let mut out = PassOutcome::unchanged(text);

        if split_sentences(text).len() == 1 && text.chars().count() > LONG_SENTENCE_CHARS {
            let parts = break_into_logical_parts(text, &lexicon.conjunctions);
            if parts.len() > 1 {
                out.text = format!("{}.", parts.join(". "));
                out.improvements
                    .push("Broke long sentence into structured parts".to_string());
            }
        }

        if !has_structure_marker(text, &lexicon.structure_markers)
            && out.text.chars().count() > MIN_ORGANIZE_CHARS
            && !lexicon.organization_clause.is_empty()
        {
            out.text.push(' ');
            out.text.push_str(&lexicon.organization_clause);
            out.improvements
                .push("Added structural organization".to_string());
        }

        out
    }
}
