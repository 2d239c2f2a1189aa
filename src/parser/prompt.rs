//! Tokenizer and sentence splitter for prompt text

/// Lowercase words with punctuation stripped, in input order.
///
/// Every character that is neither an ASCII word character (`[A-Za-z0-9_]`)
/// nor whitespace becomes a word boundary.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Trimmed, non-empty sentences delimited by runs of `.`, `!` or `?`.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(|c: char| matches!(c, '.' | '!' | '?'))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Precomputed view of a prompt shared by every scoring rule
#[derive(Debug, Clone)]
pub struct ParsedPrompt<'a> {
    /// Raw prompt text as given by the caller
    pub raw: &'a str,
    /// Lowercased copy used for substring checks
    pub lower: String,
    /// Tokens from [`tokenize`]
    pub tokens: Vec<String>,
    /// Sentences from [`split_sentences`]
    pub sentences: Vec<String>,
    /// Length in characters (not bytes)
    pub char_len: usize,
}

impl<'a> ParsedPrompt<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lower: raw.to_lowercase(),
            tokens: tokenize(raw),
            sentences: split_sentences(raw),
            char_len: raw.chars().count(),
        }
    }

    /// Number of tokens that appear in `words`
    pub fn count_tokens_in(&self, words: &[String]) -> usize {
        self.tokens
            .iter()
            .filter(|t| words.iter().any(|w| w == *t))
            .count()
    }

    /// True if any token appears in `words`
    pub fn has_token_in(&self, words: &[String]) -> bool {
        self.tokens.iter().any(|t| words.iter().any(|w| w == t))
    }

    /// Case-insensitive substring check against any of `phrases`
    pub fn contains_any(&self, phrases: &[String]) -> bool {
        contains_any_ci(&self.lower, phrases)
    }

    pub fn has_digit(&self) -> bool {
        self.raw.chars().any(|c| c.is_ascii_digit())
    }
}

/// `lower` must already be lowercased; phrases are lowercased here.
pub fn contains_any_ci(lower: &str, phrases: &[String]) -> bool {
    phrases
        .iter()
        .filter(|p| !p.is_empty())
        .any(|p| lower.contains(&p.to_lowercase()))
}
