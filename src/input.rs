//! Caller-side prompt validation
//!
//! The analyzer and enhancer accept any string. The CLI and the tool server
//! reject blank or oversized prompts before calling them.

use thiserror::Error;

/// Default maximum prompt length in characters
pub const DEFAULT_MAX_LENGTH: usize = 5000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptInputError {
    #[error("Invalid prompt provided. Please provide a non-empty prompt.")]
    Empty,
    #[error("Prompt too long: {length} characters (maximum is {max})")]
    TooLong { length: usize, max: usize },
}

/// Reject blank prompts and prompts longer than `max_length` characters.
pub fn validate_prompt(prompt: &str, max_length: usize) -> Result<(), PromptInputError> {
    if prompt.trim().is_empty() {
        return Err(PromptInputError::Empty);
    }
    let length = prompt.chars().count();
    if length > max_length {
        return Err(PromptInputError::TooLong {
            length,
            max: max_length,
        });
    }
    Ok(())
}
