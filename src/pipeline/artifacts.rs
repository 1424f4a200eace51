//! Pipeline artifacts.
//!
//! An [`Extraction`] holds everything one extraction call produced. It is
//! created fresh per call and never merged with a previous result.

use rustc_hash::FxHashMap;

use crate::graph::cooccurrence::CooccurrenceCounts;
use crate::rank::{ranked_pairs, ranked_texts};
use crate::scoring::WordScores;
use crate::types::{Phrase, RankedPhrase, Word};

/// The result of one extraction call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Phrase instances that reached counting, in input order
    pub phrases: Vec<Phrase>,
    /// Degree/frequency counters built from `phrases`
    pub counts: CooccurrenceCounts,
    /// Per-word scores under the configured metric
    pub scores: WordScores,
    /// Phrases sorted by descending score
    pub ranked: Vec<RankedPhrase>,
}

impl Extraction {
    /// Phrase texts, highest score first
    pub fn ranked_phrases(&self) -> Vec<String> {
        ranked_texts(&self.ranked)
    }

    /// `(score, phrase)` pairs, highest score first
    pub fn ranked_phrases_with_scores(&self) -> Vec<(f64, String)> {
        ranked_pairs(&self.ranked)
    }

    /// `word -> degree`
    pub fn word_degrees(&self) -> &FxHashMap<Word, usize> {
        self.counts.degrees()
    }

    /// `word -> frequency`
    pub fn word_frequency_distribution(&self) -> &FxHashMap<Word, usize> {
        self.counts.frequencies()
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}
