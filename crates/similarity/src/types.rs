use ndarray::Array1;
use serde::Serialize;
use std::fmt;

/// Weighted term frequencies over a shared vocabulary
pub type FeatureVector = Array1<f64>;

/// Sorted, deduplicated terms of one document pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    /// Build vocabulary from any term iterator (duplicates are dropped, order is lexicographic)
    pub fn from_terms<'a, I>(terms: I) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut terms: Vec<String> = terms.into_iter().cloned().collect();
        terms.sort_unstable();
        terms.dedup();
        Self { terms }
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when neither document produced a term
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Index of a term in the shared vector space
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms
            .binary_search_by(|probe| probe.as_str().cmp(term))
            .ok()
    }

    /// Terms in index order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

/// Both documents' vectors in one vocabulary space
///
/// A zero-length vocabulary is the degenerate case where neither
/// document produced any term; both vectors are then empty.
#[derive(Debug, Clone)]
pub struct FeatureSpace {
    pub vocabulary: Vocabulary,
    pub first: FeatureVector,
    pub second: FeatureVector,
}

impl FeatureSpace {
    /// True when both documents normalized to nothing
    pub fn is_degenerate(&self) -> bool {
        self.vocabulary.is_empty()
    }
}

/// Cosine similarity in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct SimilarityScore(f64);

impl SimilarityScore {
    /// No shared weighted content
    pub const ZERO: Self = Self(0.0);

    /// Identical weighted content
    pub const ONE: Self = Self(1.0);

    /// Wrap a cosine value, clamping rounding noise into [0, 1]
    pub fn new(value: f64) -> Self {
        debug_assert!(value.is_finite(), "similarity must be finite, got {}", value);
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self::ZERO
        }
    }

    /// Raw value
    pub fn value(self) -> f64 {
        self.0
    }

    /// Value rounded to `decimals` places for display
    pub fn rounded(self, decimals: u32) -> f64 {
        let factor = 10f64.powi(decimals as i32);
        (self.0 * factor).round() / factor
    }
}

impl fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

impl From<SimilarityScore> for f64 {
    fn from(score: SimilarityScore) -> Self {
        score.0
    }
}

/// Score plus the counts behind it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    /// Similarity score
    pub score: SimilarityScore,

    /// Tokens left in document 1 after normalization
    pub first_tokens: usize,

    /// Tokens left in document 2 after normalization
    pub second_tokens: usize,

    /// Distinct terms across both documents
    pub vocabulary_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_is_sorted_and_deduplicated() {
        let terms: Vec<String> = ["pear", "apple", "pear", "fig"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let vocabulary = Vocabulary::from_terms(&terms);

        assert_eq!(vocabulary.iter().collect::<Vec<_>>(), vec!["apple", "fig", "pear"]);
        assert_eq!(vocabulary.index_of("fig"), Some(1));
        assert_eq!(vocabulary.index_of("kiwi"), None);
    }

    #[test]
    fn test_score_clamps_rounding_noise() {
        assert_eq!(SimilarityScore::new(1.0000000000000002).value(), 1.0);
        assert_eq!(SimilarityScore::new(-1e-17).value(), 0.0);
    }

    #[test]
    fn test_score_rounding() {
        let score = SimilarityScore::new(0.50314);
        assert_eq!(score.rounded(2), 0.5);
        assert_eq!(score.rounded(3), 0.503);
        assert_eq!(format!("{:.2}", score), "0.50");
    }

    #[test]
    fn test_score_serializes_as_number() {
        let json = serde_json::to_string(&SimilarityScore::ONE).unwrap();
        assert_eq!(json, "1.0");
    }
}
