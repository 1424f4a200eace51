//! Stable error codes for configuration diagnostics.

use serde::Serialize;
use std::fmt;

/// Machine-readable code attached to every [`ConfigError`](super::errors::ConfigError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// `min_length` / `max_length` cannot select any phrase.
    InvalidLengthRange,
    /// A value is accepted but will not behave the way it reads.
    SuspiciousValue,
    /// A field not recognized by the schema.
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidLengthRange => "invalid_length_range",
            Self::SuspiciousValue => "suspicious_value",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
