//! Config schema and deserialization

use crate::input::DEFAULT_MAX_LENGTH;
use crate::lexicon::Lexicon;
use serde::Deserialize;

/// Default prompt file suffixes
pub const DEFAULT_PROMPT_PATTERNS: [&str; 3] = [".prompt", ".prompt.txt", ".prompt.md"];

/// Root config structure for .promptgraderc.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default)]
    pub extends: Option<String>,

    /// Minimum score threshold (exit 1 if below). Default: 0
    #[serde(default)]
    pub threshold: Option<u8>,

    /// Maximum prompt length in characters. Default: 5000
    #[serde(default)]
    pub max_length: Option<usize>,

    /// Seed for the enhancer's random choices. Unset means a fresh seed per run.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Glob patterns for files/directories to exclude from analysis
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Custom prompt file suffixes (default: .prompt, .prompt.txt, .prompt.md)
    #[serde(default)]
    pub prompt_patterns: Vec<String>,

    /// Vocabulary overrides. Tables left out keep their built-in values.
    #[serde(default)]
    pub lexicon: Option<Lexicon>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(
        mut self,
        cli_threshold: Option<u8>,
        cli_max_length: Option<usize>,
        cli_seed: Option<u64>,
    ) -> Self {
        if cli_threshold.is_some() {
            self.threshold = cli_threshold;
        }
        if cli_max_length.is_some() {
            self.max_length = cli_max_length;
        }
        if cli_seed.is_some() {
            self.seed = cli_seed;
        }
        self
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        // Base values are overridden by this config's values
        if self.threshold.is_none() {
            self.threshold = base.threshold;
        }
        if self.max_length.is_none() {
            self.max_length = base.max_length;
        }
        if self.seed.is_none() {
            self.seed = base.seed;
        }
        if self.extends.is_none() {
            self.extends = base.extends;
        }

        // Merge ignore patterns
        let mut all_ignores = base.ignore;
        all_ignores.append(&mut self.ignore);
        self.ignore = all_ignores;

        if self.prompt_patterns.is_empty() {
            self.prompt_patterns = base.prompt_patterns;
        }

        // A child lexicon replaces the base one as a whole
        if self.lexicon.is_none() {
            self.lexicon = base.lexicon;
        }
    }

    pub fn effective_max_length(&self) -> usize {
        self.max_length.unwrap_or(DEFAULT_MAX_LENGTH)
    }

    /// Lexicon to build the analyzer and enhancer from
    pub fn lexicon(&self) -> Lexicon {
        self.lexicon.clone().unwrap_or_default()
    }

    /// Get prompt file suffixes
    pub fn get_prompt_patterns(&self) -> Vec<&str> {
        if self.prompt_patterns.is_empty() {
            DEFAULT_PROMPT_PATTERNS.to_vec()
        } else {
            self.prompt_patterns.iter().map(|s| s.as_str()).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.effective_max_length(), 5000);
        assert_eq!(config.threshold, None);
        assert_eq!(
            config.get_prompt_patterns(),
            vec![".prompt", ".prompt.txt", ".prompt.md"]
        );
        assert_eq!(config.lexicon(), Lexicon::default());
    }

    #[test]
    fn test_cli_overrides_win() {
        let config: Config =
            serde_json::from_str(r#"{ "threshold": 60, "maxLength": 100, "seed": 1 }"#).unwrap();
        let merged = config.merge_with_cli(Some(80), None, Some(7));
        assert_eq!(merged.threshold, Some(80));
        assert_eq!(merged.max_length, Some(100));
        assert_eq!(merged.seed, Some(7));
    }

    #[test]
    fn test_partial_lexicon() {
        let config: Config =
            serde_json::from_str(r#"{ "lexicon": { "audiences": ["for pirates"] } }"#).unwrap();
        let lexicon = config.lexicon();
        assert_eq!(lexicon.audiences, vec!["for pirates"]);
        assert_eq!(lexicon.purposes, Lexicon::default().purposes);
    }

    #[test]
    fn test_custom_prompt_patterns() {
        let config: Config = serde_json::from_str(r#"{ "promptPatterns": [".txt"] }"#).unwrap();
        assert_eq!(config.get_prompt_patterns(), vec![".txt"]);
    }

    #[test]
    fn test_merge_from_base() {
        let mut child: Config =
            serde_json::from_str(r#"{ "threshold": 80, "ignore": ["drafts/**"] }"#).unwrap();
        let base: Config = serde_json::from_str(
            r#"{ "threshold": 50, "maxLength": 200, "ignore": ["**/archive/**"], "lexicon": {} }"#,
        )
        .unwrap();
        child.merge_from(base);

        assert_eq!(child.threshold, Some(80));
        assert_eq!(child.max_length, Some(200));
        assert_eq!(child.ignore, vec!["**/archive/**", "drafts/**"]);
        assert!(child.lexicon.is_some());
    }
}
