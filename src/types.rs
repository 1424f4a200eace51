//! Core types for keyword extraction
//!
//! Words, phrases, ranking metrics, and the extraction configuration.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{RakeError, Result};

/// A normalized (lowercased) token
pub type Word = String;

/// A candidate keyword phrase: a maximal run of content words within one sentence
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phrase {
    words: Vec<Word>,
}

impl Phrase {
    /// Create a phrase from already-normalized words
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// The words of this phrase, in order
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in the phrase
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the phrase has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words joined by single spaces, e.g. `"ancient city ruins"`
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl<S: Into<String>> FromIterator<S> for Phrase {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Word scoring metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// d(w) / f(w)
    #[default]
    DegreeToFrequencyRatio,
    /// d(w)
    WordDegree,
    /// f(w)
    WordFrequency,
}

impl Metric {
    /// Returns the name used in JSON and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DegreeToFrequencyRatio => "degree_to_frequency_ratio",
            Self::WordDegree => "word_degree",
            Self::WordFrequency => "word_frequency",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = RakeError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().replace('-', "_").as_str() {
            "degree_to_frequency_ratio" | "ratio" => Ok(Self::DegreeToFrequencyRatio),
            "word_degree" | "degree" => Ok(Self::WordDegree),
            "word_frequency" | "frequency" => Ok(Self::WordFrequency),
            _ => Err(RakeError::UnknownMetric(value.to_string())),
        }
    }
}

pub const DEFAULT_LANGUAGE: &str = "english";
pub const DEFAULT_MIN_LENGTH: usize = 1;
pub const DEFAULT_MAX_LENGTH: usize = 100_000;

/// Configuration for a RAKE extractor
///
/// # JSON shape
///
/// ```json
/// {
///   "stopwords": ["of", "a"],
///   "punctuations": [".", ","],
///   "punctuation_runs": true,
///   "language": "english",
///   "ranking_metric": "word_degree",
///   "min_length": 1,
///   "max_length": 3,
///   "include_repeated_phrases": false,
///   "strict": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RakeConfig {
    /// Explicit stopwords; when unset the `language` table is used
    pub stopwords: Option<Vec<String>>,
    /// Explicit punctuation delimiters; when unset ASCII punctuation is used
    pub punctuations: Option<Vec<String>>,
    /// Treat tokens made only of punctuation marks (e.g. `"),"`) as delimiters
    pub punctuation_runs: bool,
    /// Stopword table to load when `stopwords` is unset
    pub language: String,
    /// Word scoring metric
    pub ranking_metric: Metric,
    /// Maximum words per phrase (inclusive)
    pub max_length: usize,
    /// Minimum words per phrase (inclusive)
    pub min_length: usize,
    /// Keep every occurrence of a repeated phrase in the computation
    pub include_repeated_phrases: bool,
    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    pub strict: bool,
    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for RakeConfig {
    fn default() -> Self {
        Self {
            stopwords: None,
            punctuations: None,
            punctuation_runs: false,
            language: DEFAULT_LANGUAGE.to_string(),
            ranking_metric: Metric::default(),
            max_length: DEFAULT_MAX_LENGTH,
            min_length: DEFAULT_MIN_LENGTH,
            include_repeated_phrases: true,
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl RakeConfig {
    /// Parse a configuration from JSON.
    ///
    /// Parsing only checks the shape; semantic checks run when an extractor
    /// is built from the config.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A phrase together with its RAKE score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPhrase {
    pub phrase: Phrase,
    pub score: f64,
}

impl RankedPhrase {
    pub fn new(phrase: Phrase, score: f64) -> Self {
        Self { phrase, score }
    }

    /// The phrase text, words joined by spaces
    pub fn text(&self) -> String {
        self.phrase.text()
    }
}
