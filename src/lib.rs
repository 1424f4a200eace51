//! # rapid-rake
//!
//! Rapid Automatic Keyword Extraction (RAKE) for Rust.
//!
//! RAKE splits text into candidate phrases at stopwords and punctuation,
//! counts how often each word occurs (frequency) and how many words it
//! co-occurs with inside its phrases (degree), scores each word from those
//! counters, and ranks phrases by the sum of their word scores.
//!
//! ```rust
//! use rapid_rake::{Metric, Rake};
//!
//! let rake = Rake::builder()
//!     .stopwords(["of", "a"])
//!     .ranking_metric(Metric::DegreeToFrequencyRatio)
//!     .build()
//!     .unwrap();
//!
//! let result = rake.extract("Criteria of compatibility of a system of linear constraints");
//! assert_eq!(result.ranked_phrases()[0], "linear constraints");
//! ```
//!
//! ## Modules
//!
//! - [`nlp`]: tokenizers, stopword tables, punctuation sets
//! - [`phrase`]: candidate phrase segmentation and filtering
//! - [`graph`]: word degree/frequency counters
//! - [`scoring`]: per-word scores under a [`Metric`]
//! - [`rank`]: phrase scoring and ranking
//! - [`pipeline`]: stage runner, observers, configuration validation

pub mod errors;
pub mod extractor;
pub mod graph;
pub mod nlp;
pub mod phrase;
pub mod pipeline;
pub mod rank;
pub mod scoring;
pub mod types;

pub use errors::{RakeError, Result};
pub use extractor::{Rake, RakeBuilder};
pub use nlp::punctuation::PunctuationSet;
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tokenizer::Tokenizer;
pub use pipeline::artifacts::Extraction;
pub use types::{Metric, Phrase, RakeConfig, RankedPhrase, Word};

/// Extract ranked keyword phrases from `text` with the default configuration
/// (English stopwords, ASCII punctuation, degree/frequency ratio).
pub fn extract_keywords(text: &str) -> Result<Vec<RankedPhrase>> {
    Ok(Rake::new()?.extract(text).ranked)
}
