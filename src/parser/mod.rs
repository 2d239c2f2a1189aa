//! Prompt text parsing

mod prompt;

pub use prompt::{contains_any_ci, split_sentences, tokenize, ParsedPrompt};
