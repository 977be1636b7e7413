//! Error types for the formatter

pub type Result<T> = std::result::Result<T, FormatterError>;

#[derive(Debug, thiserror::Error)]
pub enum FormatterError {
    /// Timestamp pattern rejected by the strftime parser
    #[error("Invalid timestamp pattern '{pattern}': {message}")]
    InvalidTimestampPattern { pattern: String, message: String },

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl FormatterError {
    /// Create an invalid timestamp pattern error
    pub fn timestamp_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        FormatterError::InvalidTimestampPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        FormatterError::Other(msg.into())
    }
}
