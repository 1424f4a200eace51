//! Word scoring
//!
//! Turns fully-built co-occurrence counters into a score per word:
//!
//! | Metric | score(w) |
//! |--------|----------|
//! | [`Metric::DegreeToFrequencyRatio`] | `deg(w) / freq(w)` |
//! | [`Metric::WordDegree`] | `deg(w)` |
//! | [`Metric::WordFrequency`] | `freq(w)` |

use rustc_hash::FxHashMap;

use crate::graph::cooccurrence::CooccurrenceCounts;
use crate::types::{Metric, Word};

/// Scores for every counted word
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordScores {
    scores: FxHashMap<Word, f64>,
}

impl WordScores {
    /// Score of `word`, zero if it was never counted
    pub fn score(&self, word: &str) -> f64 {
        self.scores.get(word).copied().unwrap_or(0.0)
    }

    /// `word -> score`
    pub fn as_map(&self) -> &FxHashMap<Word, f64> {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Scores words under a fixed metric
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordScorer {
    metric: Metric,
}

impl WordScorer {
    pub fn new(metric: Metric) -> Self {
        Self { metric }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Score a single word from its counters
    #[inline]
    pub fn score(&self, degree: usize, frequency: usize) -> f64 {
        match self.metric {
            // frequency >= 1 for every counted word
            Metric::DegreeToFrequencyRatio => degree as f64 / frequency as f64,
            Metric::WordDegree => degree as f64,
            Metric::WordFrequency => frequency as f64,
        }
    }

    /// Score every word in `counts`
    pub fn score_all(&self, counts: &CooccurrenceCounts) -> WordScores {
        let scores = counts
            .iter()
            .map(|(word, degree, freq)| (word.to_string(), self.score(degree, freq)))
            .collect();
        WordScores { scores }
    }
}
