//! Enhancer module - rewrites weak prompts with deterministic passes

pub mod category;
pub mod compare;
pub mod engine;
pub mod passes;
pub mod picker;

pub use category::{detect_category, matches_any_pattern};
pub use compare::compare_prompts;
pub use engine::PromptEnhancer;
pub use picker::{pick, FixedPicker, Picker, SeededPicker};
