use docsim_common::{AppConfig, Result};
use docsim_similarity::SimilarityPipeline;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Scoring pipeline, fixed at start-up
    pub pipeline: SimilarityPipeline,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig) -> Result<Self> {
        let pipeline = SimilarityPipeline::new(config.similarity.clone())?;

        Ok(Self { config, pipeline })
    }
}
