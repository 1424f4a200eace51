//! Configuration checks run before an extractor is built.
//!
//! Every registered [`ValidationRule`] sees the whole [`RakeConfig`]; their
//! findings are gathered into one [`ValidationReport`], so a config with
//! several problems reports all of them in a single pass.
//!
//! ```rust
//! use rapid_rake::pipeline::validation::ValidationEngine;
//! use rapid_rake::RakeConfig;
//!
//! let config = RakeConfig { min_length: 4, max_length: 2, ..RakeConfig::default() };
//! let report = ValidationEngine::with_defaults().validate(&config);
//! assert!(report.has_errors());
//! ```

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::{ConfigError, ConfigErrors};
use crate::types::RakeConfig;

/// Errors abort the build; warnings are logged and the build proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// One finding: a [`ConfigError`] tagged with its severity
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: ConfigError,
}

impl ValidationDiagnostic {
    pub fn error(error: ConfigError) -> Self {
        Self { severity: Severity::Error, error }
    }

    pub fn warning(error: ConfigError) -> Self {
        Self { severity: Severity::Warning, error }
    }
}

/// Every diagnostic produced by one [`ValidationEngine::validate`] run, in
/// rule order
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &ConfigError> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
            .map(|d| &d.error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConfigError> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConfigError> {
        self.with_severity(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// A report with only warnings is still valid.
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// `Err` with every error if any rule failed, otherwise `Ok` with the
    /// warnings to log.
    pub fn into_result(self) -> Result<Vec<ConfigError>, ConfigErrors> {
        if self.has_errors() {
            Err(ConfigErrors(self.errors().cloned().collect()))
        } else {
            Ok(self.warnings().cloned().collect())
        }
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// A check over a [`RakeConfig`]
pub trait ValidationRule: Send + Sync {
    /// Stable rule identifier, e.g. `"length_range"`
    fn name(&self) -> &str;

    fn validate(&self, config: &RakeConfig) -> Vec<ValidationDiagnostic>;
}

/// Ordered collection of [`ValidationRule`]s
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// An engine without rules; every config passes
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The rules [`RakeBuilder::build`](crate::RakeBuilder::build) runs
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(LengthRangeRule));
        engine.add_rule(Box::new(PunctuationWidthRule));
        engine.add_rule(Box::new(EmptyStopwordsRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Rule names in run order
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn validate(&self, config: &RakeConfig) -> ValidationReport {
        ValidationReport {
            diagnostics: self
                .rules
                .iter()
                .flat_map(|rule| rule.validate(config))
                .collect(),
        }
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// Rules

// ─── 1. The length window must be able to select a phrase ───────────────────

struct LengthRangeRule;

impl ValidationRule for LengthRangeRule {
    fn name(&self) -> &str {
        "length_range"
    }

    fn validate(&self, config: &RakeConfig) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();

        if config.max_length == 0 {
            out.push(ValidationDiagnostic::error(
                ConfigError::new(
                    ErrorCode::InvalidLengthRange,
                    "/max_length",
                    "max_length must be greater than 0",
                )
                .with_hint("Phrases always contain at least one word"),
            ));
        } else if config.min_length > config.max_length {
            out.push(ValidationDiagnostic::error(
                ConfigError::new(
                    ErrorCode::InvalidLengthRange,
                    "/min_length",
                    format!(
                        "min_length ({}) is greater than max_length ({})",
                        config.min_length, config.max_length
                    ),
                )
                .with_hint("Lower min_length or raise max_length"),
            ));
        }

        if config.min_length == 0 {
            out.push(ValidationDiagnostic::warning(
                ConfigError::new(
                    ErrorCode::SuspiciousValue,
                    "/min_length",
                    "min_length 0 behaves like 1",
                )
                .with_hint("Set min_length to 1"),
            ));
        }

        out
    }
}

// ─── 2. Punctuation entries are single characters ───────────────────────────

struct PunctuationWidthRule;

impl ValidationRule for PunctuationWidthRule {
    fn name(&self) -> &str {
        "punctuation_width"
    }

    fn validate(&self, config: &RakeConfig) -> Vec<ValidationDiagnostic> {
        let Some(marks) = &config.punctuations else {
            return vec![];
        };

        marks
            .iter()
            .enumerate()
            .filter(|(_, mark)| mark.chars().count() != 1)
            .map(|(i, mark)| {
                ValidationDiagnostic::warning(
                    ConfigError::new(
                        ErrorCode::SuspiciousValue,
                        format!("/punctuations/{i}"),
                        format!("punctuation \"{mark}\" is not a single character"),
                    )
                    .with_hint("It only matches tokens that are exactly this string"),
                )
            })
            .collect()
    }
}

// ─── 3. An explicit empty stopword list disables stopword splitting ─────────

struct EmptyStopwordsRule;

impl ValidationRule for EmptyStopwordsRule {
    fn name(&self) -> &str {
        "empty_stopwords"
    }

    fn validate(&self, config: &RakeConfig) -> Vec<ValidationDiagnostic> {
        match &config.stopwords {
            Some(words) if words.is_empty() => vec![ValidationDiagnostic::warning(
                ConfigError::new(
                    ErrorCode::SuspiciousValue,
                    "/stopwords",
                    format!(
                        "empty stopword list; only punctuation splits phrases and the \"{}\" table is ignored",
                        config.language
                    ),
                )
                .with_hint("Remove stopwords to use the language table"),
            )],
            _ => vec![],
        }
    }
}

// ─── 4. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, config: &RakeConfig) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
        keys.sort();

        keys.into_iter()
            .map(|key| {
                let diag_fn = if config.strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    ConfigError::new(
                        ErrorCode::UnknownField,
                        format!("/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}
