//! Enhancement engine - runs the passes a prior score breakdown calls for

use crate::lexicon::Lexicon;
use crate::{EnhancementResult, PriorScores, ScoreReport, IMPROVEMENT_THRESHOLD};

use super::passes::{apply_template, default_passes, EnhancementPass};
use super::{compare_prompts, detect_category, Picker};

/// The template step only runs for prompts scoring below this total
pub const TEMPLATE_THRESHOLD: u8 = 50;

/// Rewrites prompts according to their weakest dimensions
pub struct PromptEnhancer {
    lexicon: Lexicon,
    passes: Vec<Box<dyn EnhancementPass + Send + Sync>>,
}

impl PromptEnhancer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            passes: default_passes(),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Enhance a prompt.
    ///
    /// Without `prior` no pass runs: the result carries the original text,
    /// its category and an empty improvement list. With `prior`, each pass
    /// whose dimension scored below the improvement threshold runs in order
    /// clarity, specificity, context, structure, each seeing the text the
    /// previous one produced.
    pub fn enhance(
        &self,
        prompt: &str,
        prior: Option<&PriorScores>,
        picker: &mut dyn Picker,
    ) -> EnhancementResult {
        let category = detect_category(prompt, &self.lexicon);
        let mut enhanced = prompt.to_string();
        let mut improvements = Vec::new();

        if let Some(prior) = prior {
            for pass in &self.passes {
                if prior.get(pass.dimension()) >= IMPROVEMENT_THRESHOLD {
                    continue;
                }
                let outcome = pass.apply(&enhanced, &self.lexicon, picker);
                enhanced = outcome.text;
                improvements.extend(outcome.improvements);
            }

            if prior.total() < TEMPLATE_THRESHOLD && self.lexicon.template_for(category).is_some() {
                let outcome = apply_template(&enhanced, category, &self.lexicon);
                enhanced = outcome.text;
                improvements.extend(outcome.improvements);
            }
        }

        EnhancementResult {
            comparison: compare_prompts(prompt, &enhanced),
            original: prompt.to_string(),
            enhanced,
            category,
            improvements,
        }
    }

    /// Enhance using the scores from a report the caller already computed
    pub fn enhance_report(
        &self,
        prompt: &str,
        report: &ScoreReport,
        picker: &mut dyn Picker,
    ) -> EnhancementResult {
        self.enhance(prompt, Some(&PriorScores::from(report)), picker)
    }
}

impl Default for PromptEnhancer {
    fn default() -> Self {
        Self::new(Lexicon::default())
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::enhancer::SeededPicker;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn no_prior_is_identity(ref prompt in ".{0,200}", seed in any::<u64>()) {
            let result = PromptEnhancer::default().enhance(prompt, None, &mut SeededPicker::new(seed));
            prop_assert_eq!(&result.enhanced, prompt);
            prop_assert!(result.improvements.is_empty());
        }

        #[test]
        fn category_depends_only_on_original(ref prompt in "[a-zA-Z .]{0,120}", seed in any::<u64>()) {
            let enhancer = PromptEnhancer::default();
            let prior = PriorScores { clarity: 0, specificity: 0, context: 0, structure: 0, total_score: None };
            let result = enhancer.enhance(prompt, Some(&prior), &mut SeededPicker::new(seed));
            prop_assert_eq!(result.category, detect_category(prompt, enhancer.lexicon()));
        }

        #[test]
        fn enhanced_never_contains_replaced_vague_words(ref prompt in "(good|bad|nice|great|stuff|things|something|dogs| )+") {
            let enhancer = PromptEnhancer::default();
            let prior = PriorScores { clarity: 0, specificity: 25, context: 25, structure: 25, total_score: Some(100) };
            let result = enhancer.enhance(prompt, Some(&prior), &mut SeededPicker::new(1));
            let tokens = crate::parser::tokenize(&result.enhanced);
            for pair in &enhancer.lexicon().vague_replacements {
                prop_assert!(!tokens.contains(&pair.vague));
            }
        }
    }
}
