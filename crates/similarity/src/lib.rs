//! docsim similarity core
//!
//! Scores a pair of free-text documents: normalization into tokens,
//! TF-IDF vectorization over a shared vocabulary, then cosine similarity.
//! Everything is rebuilt per call; nothing is cached between comparisons.

pub mod normalizer;
pub mod pipeline;
pub mod similarity;
pub mod types;
pub mod vectorizer;

pub use normalizer::Normalizer;
pub use pipeline::{decode, similarity, SimilarityPipeline};
pub use similarity::cosine_similarity;
pub use types::{Comparison, FeatureSpace, FeatureVector, SimilarityScore, Vocabulary};
pub use vectorizer::Vectorizer;
