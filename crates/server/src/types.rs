use docsim_common::SimilarityConfig;
use serde::{Deserialize, Serialize};

/// Similarity request, accepted as JSON or as a urlencoded form
#[derive(Debug, Deserialize)]
pub struct SimilarityRequest {
    /// First document text
    pub doc1: String,

    /// Second document text
    pub doc2: String,
}

/// Similarity response
#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarityResponse {
    /// Score rounded to the configured precision
    pub similarity: f64,

    /// Tokens in document 1 after normalization
    pub doc1_tokens: usize,

    /// Tokens in document 2 after normalization
    pub doc2_tokens: usize,

    /// Distinct terms across both documents
    pub vocabulary_size: usize,
}

/// Error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub similarity: SimilarityConfig,
}
