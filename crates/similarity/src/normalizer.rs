//! Text cleaning and tokenization
//!
//! Apostrophes are deleted so contractions stay one token ("don't" -> "dont").
//! Any other run of characters that are not letters, marks or digits becomes a
//! word boundary. Tokens are lower-cased, then stop words are optionally dropped.

use docsim_common::{DocSimError, Result, SimilarityConfig, StopWordList, StopWords};
use regex::Regex;
use std::collections::HashSet;

/// Stop words removed by the `minimal` list
pub const MINIMAL_STOP_WORDS: &[&str] = &["a", "an", "the", "of", "for", "and", "or"];

/// Straight and typographic apostrophes
const APOSTROPHES: &str = "['\u{2019}]";

/// Anything that cannot be part of a word
const SEPARATORS: &str = r"[^\p{L}\p{M}\p{N}]+";

/// Turns raw text into a canonical token sequence
#[derive(Debug, Clone)]
pub struct Normalizer {
    apostrophes: Regex,
    separators: Regex,
    stop_words: HashSet<String>,
}

impl Normalizer {
    /// Create normalizer for the given configuration
    pub fn new(config: &SimilarityConfig) -> Result<Self> {
        let apostrophes = Regex::new(APOSTROPHES)
            .map_err(|e| DocSimError::internal(format!("Invalid apostrophe pattern: {}", e)))?;
        let separators = Regex::new(SEPARATORS)
            .map_err(|e| DocSimError::internal(format!("Invalid separator pattern: {}", e)))?;

        let mut normalizer = Self {
            apostrophes,
            separators,
            stop_words: HashSet::new(),
        };

        if config.stop_words == StopWords::Enabled {
            let words: Vec<String> = match config.stop_word_list {
                StopWordList::Minimal => MINIMAL_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
                StopWordList::English => stop_words::get(stop_words::LANGUAGE::English)
                    .iter()
                    .map(|w| w.to_string())
                    .collect(),
            };

            // Stop words go through the same folding as document text,
            // so "don't" in a list matches the token "dont".
            let folded: HashSet<String> = words
                .iter()
                .flat_map(|word| normalizer.tokens(word))
                .collect();
            normalizer.stop_words = folded;
        }

        Ok(normalizer)
    }

    /// Normalize text into tokens
    ///
    /// Empty or whitespace-only text yields no tokens.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        self.tokens(text)
            .into_iter()
            .filter(|token| !self.stop_words.contains(token))
            .collect()
    }

    fn tokens(&self, text: &str) -> Vec<String> {
        let joined = self.apostrophes.replace_all(text, "");
        let spaced = self.separators.replace_all(&joined, " ");

        spaced
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer(stop_words: StopWords, list: StopWordList) -> Normalizer {
        let config = SimilarityConfig {
            stop_words,
            stop_word_list: list,
            ..SimilarityConfig::default()
        };
        Normalizer::new(&config).unwrap()
    }

    fn default_normalizer() -> Normalizer {
        Normalizer::new(&SimilarityConfig::default()).unwrap()
    }

    #[test]
    fn test_empty_and_whitespace_yield_nothing() {
        let n = default_normalizer();
        assert!(n.normalize("").is_empty());
        assert!(n.normalize("   \t\n  ").is_empty());
        assert!(n.normalize("?!... --").is_empty());
    }

    #[test]
    fn test_case_and_punctuation_folded() {
        let n = default_normalizer();
        assert_eq!(n.normalize("Hello, World!"), vec!["hello", "world"]);
        assert_eq!(n.normalize("hello world"), vec!["hello", "world"]);
    }

    #[test]
    fn test_contractions_stay_one_token() {
        let n = default_normalizer();
        assert_eq!(n.normalize("Don't stop"), vec!["dont", "stop"]);
        assert_eq!(n.normalize("it\u{2019}s fine"), vec!["its", "fine"]);
    }

    #[test]
    fn test_separators_keep_word_boundaries() {
        let n = default_normalizer();
        assert_eq!(n.normalize("line\nbreak"), vec!["line", "break"]);
        assert_eq!(n.normalize("well-known_fact"), vec!["well", "known", "fact"]);
        assert_eq!(n.normalize("route 66"), vec!["route", "66"]);
    }

    #[test]
    fn test_unicode_letters_survive() {
        let n = default_normalizer();
        assert_eq!(n.normalize("Café ÜBER Straße"), vec!["café", "über", "straße"]);
    }

    #[test]
    fn test_minimal_stop_words_removed_by_default() {
        let n = default_normalizer();
        assert_eq!(n.normalize("The cat and a dog"), vec!["cat", "dog"]);
        assert_eq!(n.normalize("OF FOR OR an"), Vec::<String>::new());
    }

    #[test]
    fn test_stop_words_disabled_keeps_everything() {
        let n = normalizer(StopWords::Disabled, StopWordList::Minimal);
        assert_eq!(n.normalize("The cat and a dog"), vec!["the", "cat", "and", "a", "dog"]);
    }

    #[test]
    fn test_english_list_is_broader() {
        let n = normalizer(StopWords::Enabled, StopWordList::English);
        let tokens = n.normalize("They were walking to the river because it was warm");
        assert!(!tokens.contains(&"they".to_string()));
        assert!(!tokens.contains(&"were".to_string()));
        assert!(tokens.contains(&"river".to_string()));
    }

    #[test]
    fn test_deterministic() {
        let n = default_normalizer();
        let text = "Some text, with; punctuation -- and REPEATS repeats.";
        assert_eq!(n.normalize(text), n.normalize(text));
    }
}
