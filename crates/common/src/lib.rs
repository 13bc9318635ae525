pub mod config;
pub mod error;
pub mod logger;

// Re-export commonly used types
pub use config::{AppConfig, SimilarityConfig, StopWordList, StopWords, Weighting};
pub use error::{DocSimError, Document};
pub type Result<T> = std::result::Result<T, DocSimError>;
