//! Phrase list filtering
//!
//! Applies the repetition policy and the length window to the raw output of
//! the segmenter. Both run before co-occurrence counting, so dropped phrases
//! never contribute to word degree or frequency.

use rustc_hash::FxHashSet;

use crate::types::{Phrase, RakeConfig};

/// Filter applied between segmentation and counting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseFilter {
    /// Minimum number of words (inclusive)
    pub min_length: usize,
    /// Maximum number of words (inclusive)
    pub max_length: usize,
    /// Keep every occurrence of repeated phrases
    pub include_repeated_phrases: bool,
}

impl Default for PhraseFilter {
    fn default() -> Self {
        Self::from_config(&RakeConfig::default())
    }
}

impl PhraseFilter {
    pub fn from_config(config: &RakeConfig) -> Self {
        Self {
            min_length: config.min_length,
            max_length: config.max_length,
            include_repeated_phrases: config.include_repeated_phrases,
        }
    }

    /// Set the inclusive length window
    pub fn with_length(mut self, min_length: usize, max_length: usize) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    /// Set the repetition policy
    pub fn with_repeated_phrases(mut self, include: bool) -> Self {
        self.include_repeated_phrases = include;
        self
    }

    /// Whether a phrase of `len` words is inside the length window
    #[inline]
    pub fn accepts_length(&self, len: usize) -> bool {
        self.min_length <= len && len <= self.max_length
    }

    /// Filter phrases, preserving input order
    ///
    /// With repetition disabled only the first occurrence of each distinct
    /// phrase is kept.
    pub fn apply<I>(&self, phrases: I) -> Vec<Phrase>
    where
        I: IntoIterator<Item = Phrase>,
    {
        let in_range = phrases
            .into_iter()
            .filter(|phrase| self.accepts_length(phrase.len()));

        if self.include_repeated_phrases {
            return in_range.collect();
        }

        let mut seen: FxHashSet<Phrase> = FxHashSet::default();
        in_range
            .filter(|phrase| seen.insert(phrase.clone()))
            .collect()
    }
}
