use std::fmt;

/// Which side of a comparison an input belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    First,
    Second,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "document 1"),
            Self::Second => write!(f, "document 2"),
        }
    }
}

/// docsim error types
#[derive(Debug, thiserror::Error)]
pub enum DocSimError {
    /// Raw input is not valid UTF-8 text
    #[error("Input decode error: {document} is not valid UTF-8: {source}")]
    InputDecode {
        document: Document,
        #[source]
        source: std::str::Utf8Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DocSimError {
    /// Create input decode error
    pub fn input_decode(document: Document, source: std::str::Utf8Error) -> Self {
        Self::InputDecode { document, source }
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }
}

// HTTP response conversion (used by the web adapter)
impl DocSimError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InputDecode { .. } => 400,
            Self::InvalidInput(_) => 400,
            Self::Config(_) => 500,
            Self::Internal(_) => 500,
            Self::Io(_) => 500,
        }
    }
}
