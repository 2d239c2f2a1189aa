//! Word-count comparison between original and enhanced prompts

use crate::Comparison;

/// Whitespace-delimited word counts, their difference and ratio
pub fn compare_prompts(original: &str, enhanced: &str) -> Comparison {
    let original_word_count = original.split_whitespace().count();
    let enhanced_word_count = enhanced.split_whitespace().count();

    let ratio = if original_word_count == 0 {
        None
    } else {
        Some(enhanced_word_count as f64 / original_word_count as f64)
    };

    Comparison {
        original_word_count,
        enhanced_word_count,
        delta: enhanced_word_count as i64 - original_word_count as i64,
        ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_growth() {
        let c = compare_prompts("write a poem", "Write a poem in 200-300 words");
        assert_eq!(c.original_word_count, 3);
        assert_eq!(c.enhanced_word_count, 6);
        assert_eq!(c.delta, 3);
        assert_eq!(c.ratio, Some(2.0));
    }

    #[test]
    fn test_compare_empty_original() {
        let c = compare_prompts("", "Analyze ");
        assert_eq!(c.original_word_count, 0);
        assert_eq!(c.enhanced_word_count, 1);
        assert_eq!(c.ratio, None);
    }

    #[test]
    fn test_compare_shrink() {
        let c = compare_prompts("a b c d", "a b");
        assert_eq!(c.delta, -2);
        assert_eq!(c.ratio, Some(0.5));
    }
}
