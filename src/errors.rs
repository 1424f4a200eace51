//! Error types for keyword extraction.

use thiserror::Error;

use crate::pipeline::errors::ConfigErrors;

/// Top-level error type for RAKE operations.
///
/// Extraction itself never fails; every variant is raised while building or
/// configuring an extractor.
#[derive(Debug, Error)]
pub enum RakeError {
    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(ConfigErrors),

    /// A ranking metric name that is not one of the supported metrics.
    #[error("unknown ranking metric \"{0}\" (expected degree_to_frequency_ratio, word_degree or word_frequency)")]
    UnknownMetric(String),

    /// No stopword table is available for the requested language.
    #[error("unsupported language \"{0}\": no stopword table available")]
    UnsupportedLanguage(String),

    /// Malformed JSON configuration.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for RAKE operations.
pub type Result<T> = std::result::Result<T, RakeError>;
