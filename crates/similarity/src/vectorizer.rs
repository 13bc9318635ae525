//! Term counting and TF-IDF weighting over a two-document corpus

use docsim_common::{SimilarityConfig, Weighting};
use ndarray::Array1;
use std::collections::BTreeMap;

use crate::types::{FeatureSpace, Vocabulary};

/// Documents in every comparison
const CORPUS_SIZE: f64 = 2.0;

/// Builds a shared vocabulary and weighted vectors for a document pair
#[derive(Debug, Clone)]
pub struct Vectorizer {
    weighting: Weighting,
    max_ngram: usize,
}

impl Vectorizer {
    /// Create vectorizer for the given configuration
    pub fn new(config: &SimilarityConfig) -> Self {
        Self {
            weighting: config.weighting,
            max_ngram: config.max_ngram.max(1),
        }
    }

    /// Vectorize two token sequences into one vocabulary space
    pub fn vectorize(&self, first: &[String], second: &[String]) -> FeatureSpace {
        let first_counts = self.term_counts(first);
        let second_counts = self.term_counts(second);

        let vocabulary = Vocabulary::from_terms(first_counts.keys().chain(second_counts.keys()));

        let mut first_vector = Array1::zeros(vocabulary.len());
        let mut second_vector = Array1::zeros(vocabulary.len());

        for (index, term) in vocabulary.iter().enumerate() {
            let first_count = first_counts.get(term).copied().unwrap_or(0);
            let second_count = second_counts.get(term).copied().unwrap_or(0);

            let document_frequency = usize::from(first_count > 0) + usize::from(second_count > 0);
            let idf = self.inverse_document_frequency(document_frequency);

            first_vector[index] = self.term_frequency(first_count) * idf;
            second_vector[index] = self.term_frequency(second_count) * idf;
        }

        FeatureSpace {
            vocabulary,
            first: first_vector,
            second: second_vector,
        }
    }

    /// Count every n-gram of length 1..=max_ngram, joined by single spaces
    fn term_counts(&self, tokens: &[String]) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();

        for length in 1..=self.max_ngram {
            for window in tokens.windows(length) {
                *counts.entry(window.join(" ")).or_insert(0) += 1;
            }
        }

        counts
    }

    fn term_frequency(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }

        match self.weighting {
            Weighting::TfIdf | Weighting::Count => count as f64,
            Weighting::SublinearTfIdf => 1.0 + (count as f64).ln(),
        }
    }

    /// Smoothed idf: ln((1 + N) / (1 + df)) + 1
    ///
    /// Terms in both documents get 1.0, so shared terms always carry weight.
    fn inverse_document_frequency(&self, document_frequency: usize) -> f64 {
        match self.weighting {
            Weighting::Count => 1.0,
            Weighting::TfIdf | Weighting::SublinearTfIdf => {
                ((1.0 + CORPUS_SIZE) / (1.0 + document_frequency as f64)).ln() + 1.0
            }
        }
    }
}
