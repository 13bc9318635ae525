use docsim_common::{DocSimError, Document, Result, SimilarityConfig};
use tracing::debug;

use crate::normalizer::Normalizer;
use crate::similarity::cosine_similarity;
use crate::types::{Comparison, SimilarityScore};
use crate::vectorizer::Vectorizer;

/// Normalize, vectorize and score a pair of documents
///
/// Holds only immutable configuration, so one pipeline can serve
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct SimilarityPipeline {
    config: SimilarityConfig,
    normalizer: Normalizer,
    vectorizer: Vectorizer,
}

impl SimilarityPipeline {
    /// Create pipeline from a validated configuration
    pub fn new(config: SimilarityConfig) -> Result<Self> {
        config.validate()?;

        let normalizer = Normalizer::new(&config)?;
        let vectorizer = Vectorizer::new(&config);

        Ok(Self {
            config,
            normalizer,
            vectorizer,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    /// Similarity of two texts in [0.0, 1.0]
    pub fn score(&self, first: &str, second: &str) -> SimilarityScore {
        self.compare(first, second).score
    }

    /// Similarity of two raw byte buffers, decoded as UTF-8
    pub fn score_bytes(&self, first: &[u8], second: &[u8]) -> Result<SimilarityScore> {
        Ok(self.compare_bytes(first, second)?.score)
    }

    /// `compare` over raw byte buffers, decoded as UTF-8
    pub fn compare_bytes(&self, first: &[u8], second: &[u8]) -> Result<Comparison> {
        let first = decode(first, Document::First)?;
        let second = decode(second, Document::Second)?;
        Ok(self.compare(first, second))
    }

    /// Score together with token and vocabulary counts
    pub fn compare(&self, first: &str, second: &str) -> Comparison {
        let first_tokens = self.normalizer.normalize(first);
        let second_tokens = self.normalizer.normalize(second);

        let space = self.vectorizer.vectorize(&first_tokens, &second_tokens);
        let score = cosine_similarity(&space.first, &space.second);

        debug!(
            "Compared documents: tokens=({}, {}), vocabulary={}, degenerate={}, score={}",
            first_tokens.len(),
            second_tokens.len(),
            space.vocabulary.len(),
            space.is_degenerate(),
            score
        );

        Comparison {
            score,
            first_tokens: first_tokens.len(),
            second_tokens: second_tokens.len(),
            vocabulary_size: space.vocabulary.len(),
        }
    }
}

/// Decode raw input as UTF-8 text
pub fn decode(bytes: &[u8], document: Document) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| DocSimError::input_decode(document, e))
}

/// Similarity of two texts under the default configuration
pub fn similarity(first: &str, second: &str) -> Result<SimilarityScore> {
    let pipeline = SimilarityPipeline::new(SimilarityConfig::default())?;
    Ok(pipeline.score(first, second))
}
