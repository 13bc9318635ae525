use crate::error::DocSimError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Longest term n-gram the vectorizer accepts
pub const MAX_NGRAM_LIMIT: usize = 5;

/// Highest number of decimals a rendered score may carry
pub const MAX_PRECISION: u32 = 15;

/// Stop-word removal toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWords {
    Enabled,
    Disabled,
}

impl FromStr for StopWords {
    type Err = DocSimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "enabled" | "on" | "true" => Ok(Self::Enabled),
            "disabled" | "off" | "false" => Ok(Self::Disabled),
            other => Err(DocSimError::config(format!(
                "unknown stop-word setting '{}' (expected enabled or disabled)",
                other
            ))),
        }
    }
}

impl fmt::Display for StopWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enabled => write!(f, "enabled"),
            Self::Disabled => write!(f, "disabled"),
        }
    }
}

/// Which stop-word list is removed when stop words are enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWordList {
    /// Articles and a handful of conjunctions: a, an, the, of, for, and, or
    Minimal,
    /// Full English list from the `stop-words` crate
    English,
}

impl FromStr for StopWordList {
    type Err = DocSimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "english" => Ok(Self::English),
            other => Err(DocSimError::config(format!(
                "unknown stop-word list '{}' (expected minimal or english)",
                other
            ))),
        }
    }
}

impl fmt::Display for StopWordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minimal => write!(f, "minimal"),
            Self::English => write!(f, "english"),
        }
    }
}

/// Term weighting scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weighting {
    /// Raw term count times smoothed inverse document frequency
    #[serde(rename = "tfidf")]
    TfIdf,
    /// `1 + ln(count)` times smoothed inverse document frequency
    #[serde(rename = "sublinear-tfidf")]
    SublinearTfIdf,
    /// Raw term count only
    #[serde(rename = "count")]
    Count,
}

impl FromStr for Weighting {
    type Err = DocSimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tfidf" | "tf-idf" => Ok(Self::TfIdf),
            "sublinear-tfidf" | "sublinear" => Ok(Self::SublinearTfIdf),
            "count" | "tf" => Ok(Self::Count),
            other => Err(DocSimError::config(format!(
                "unknown weighting '{}' (expected tfidf, sublinear-tfidf or count)",
                other
            ))),
        }
    }
}

impl fmt::Display for Weighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TfIdf => write!(f, "tfidf"),
            Self::SublinearTfIdf => write!(f, "sublinear-tfidf"),
            Self::Count => write!(f, "count"),
        }
    }
}

/// Settings that change how scores are computed
///
/// Fixed at start-up and passed to the pipeline at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityConfig {
    /// Stop-word removal (default: enabled)
    pub stop_words: StopWords,

    /// Stop-word list used when removal is enabled
    pub stop_word_list: StopWordList,

    /// Term weighting scheme
    pub weighting: Weighting,

    /// Longest token n-gram counted as a term (1 = single words)
    pub max_ngram: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            stop_words: StopWords::Enabled,
            stop_word_list: StopWordList::Minimal,
            weighting: Weighting::TfIdf,
            max_ngram: 1,
        }
    }
}

impl SimilarityConfig {
    /// Validate similarity settings
    pub fn validate(&self) -> Result<(), DocSimError> {
        if self.max_ngram == 0 || self.max_ngram > MAX_NGRAM_LIMIT {
            return Err(DocSimError::config(format!(
                "max_ngram must be between 1 and {}, got {}",
                MAX_NGRAM_LIMIT, self.max_ngram
            )));
        }

        Ok(())
    }
}

/// docsim application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,

    /// Largest accepted request body in bytes
    pub max_payload_bytes: usize,

    /// Decimals shown when a score is rendered
    pub score_precision: u32,

    /// Scoring settings
    pub similarity: SimilarityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 8000,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
            max_payload_bytes: 2 * 1024 * 1024,
            score_precision: 2,
            similarity: SimilarityConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, DocSimError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DocSimError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_or(&lookup, "SERVER_PORT", defaults.server_port)?,
            log_dir: lookup("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            max_payload_bytes: parse_or(&lookup, "MAX_PAYLOAD_BYTES", defaults.max_payload_bytes)?,
            score_precision: parse_or(&lookup, "SCORE_PRECISION", defaults.score_precision)?,
            similarity: SimilarityConfig {
                stop_words: parse_or(&lookup, "STOP_WORDS", defaults.similarity.stop_words)?,
                stop_word_list: parse_or(
                    &lookup,
                    "STOP_WORD_LIST",
                    defaults.similarity.stop_word_list,
                )?,
                weighting: parse_or(&lookup, "WEIGHTING", defaults.similarity.weighting)?,
                max_ngram: parse_or(&lookup, "MAX_NGRAM", defaults.similarity.max_ngram)?,
            },
        };

        config.validate()?;

        Ok(config)
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), DocSimError> {
        // Validate port range
        if self.server_port == 0 {
            return Err(DocSimError::config("Server port cannot be 0"));
        }

        if self.log_level.trim().is_empty() {
            return Err(DocSimError::config("Log level cannot be empty"));
        }

        if self.score_precision > MAX_PRECISION {
            return Err(DocSimError::config(format!(
                "Score precision cannot exceed {} decimals",
                MAX_PRECISION
            )));
        }

        if self.max_payload_bytes == 0 {
            return Err(DocSimError::config("Max payload size cannot be 0"));
        }

        self.similarity.validate()
    }
}

/// Parse an optional variable, keeping the default when it is unset
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, DocSimError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| {
            DocSimError::config(format!("Invalid value for {}: '{}' ({})", key, raw, e))
        }),
        None => Ok(default),
    }
}
