//! Word co-occurrence counters
//!
//! The RAKE co-occurrence graph only ever feeds node-local aggregates into
//! scoring, so it is stored as two counters per word instead of an adjacency
//! structure:
//!
//! - `frequency(w)`: occurrences of `w` over all phrase instances
//! - `degree(w)`: for every occurrence of `w` in a phrase of length `L`, `+L`
//!
//! which gives `degree(w) >= frequency(w)` for every counted word.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::types::{Phrase, Word};

/// Phrase lists shorter than this are counted sequentially
const PARALLEL_THRESHOLD: usize = 1000;

/// Per-word frequency and degree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CooccurrenceCounts {
    frequency: FxHashMap<Word, usize>,
    degree: FxHashMap<Word, usize>,
}

impl CooccurrenceCounts {
    /// Create empty counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create counters with pre-allocated capacity
    pub fn with_capacity(word_capacity: usize) -> Self {
        Self {
            frequency: FxHashMap::with_capacity_and_hasher(word_capacity, Default::default()),
            degree: FxHashMap::with_capacity_and_hasher(word_capacity, Default::default()),
        }
    }

    /// Count a single phrase instance
    pub fn add_phrase(&mut self, phrase: &Phrase) {
        let len = phrase.len();
        for word in phrase.words() {
            // Both counters move together for the same instance
            if let Some(freq) = self.frequency.get_mut(word) {
                *freq += 1;
                *self.degree.entry(word.clone()).or_insert(0) += len;
            } else {
                self.frequency.insert(word.clone(), 1);
                self.degree.insert(word.clone(), len);
            }
        }
    }

    /// Build counters from phrase instances in one pass
    pub fn from_phrases(phrases: &[Phrase]) -> Self {
        let mut counts = Self::with_capacity(phrases.len());
        for phrase in phrases {
            counts.add_phrase(phrase);
        }
        counts
    }

    /// Merge another set of counters into this one
    pub fn merge(&mut self, other: CooccurrenceCounts) {
        for (word, freq) in other.frequency {
            *self.frequency.entry(word).or_insert(0) += freq;
        }
        for (word, degree) in other.degree {
            *self.degree.entry(word).or_insert(0) += degree;
        }
    }

    /// Frequency of `word`, zero if it was never counted
    pub fn frequency(&self, word: &str) -> usize {
        self.frequency.get(word).copied().unwrap_or(0)
    }

    /// Degree of `word`, zero if it was never counted
    pub fn degree(&self, word: &str) -> usize {
        self.degree.get(word).copied().unwrap_or(0)
    }

    /// `word -> frequency`
    pub fn frequencies(&self) -> &FxHashMap<Word, usize> {
        &self.frequency
    }

    /// `word -> degree`
    pub fn degrees(&self) -> &FxHashMap<Word, usize> {
        &self.degree
    }

    /// Iterate `(word, degree, frequency)` for every counted word
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize, usize)> {
        self.frequency
            .iter()
            .map(|(word, &freq)| (word.as_str(), self.degree(word), freq))
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.frequency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequency.is_empty()
    }
}

/// Build counters in parallel (for large documents)
///
/// Splits the phrase list into chunks, counts each chunk independently and
/// merges the partial counters. Counting is commutative, so the result is
/// identical to [`CooccurrenceCounts::from_phrases`].
pub fn build_counts_parallel(phrases: &[Phrase]) -> CooccurrenceCounts {
    // For small documents, sequential is faster
    if phrases.len() < PARALLEL_THRESHOLD {
        return CooccurrenceCounts::from_phrases(phrases);
    }

    phrases
        .par_chunks(PARALLEL_THRESHOLD / 4)
        .map(CooccurrenceCounts::from_phrases)
        .reduce(CooccurrenceCounts::new, |mut acc, partial| {
            acc.merge(partial);
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase(words: &[&str]) -> Phrase {
        words.iter().copied().collect()
    }

    fn apples() -> Vec<Phrase> {
        vec![
            phrase(&["red", "apples"]),
            phrase(&["good"]),
            phrase(&["red"]),
            phrase(&["flavour"]),
        ]
    }

    #[test]
    fn test_frequency() {
        let counts = CooccurrenceCounts::from_phrases(&apples());

        assert_eq!(counts.len(), 4);
        assert_eq!(counts.frequency("red"), 2);
        assert_eq!(counts.frequency("apples"), 1);
        assert_eq!(counts.frequency("good"), 1);
        assert_eq!(counts.frequency("flavour"), 1);
        assert_eq!(counts.frequency("missing"), 0);
    }

    #[test]
    fn test_degree() {
        let counts = CooccurrenceCounts::from_phrases(&apples());

        assert_eq!(counts.degree("red"), 3);
        assert_eq!(counts.degree("apples"), 2);
        assert_eq!(counts.degree("good"), 1);
        assert_eq!(counts.degree("flavour"), 1);
    }

    #[test]
    fn test_repeated_word_inside_phrase() {
        let counts = CooccurrenceCounts::from_phrases(&[phrase(&["new", "new", "york"])]);

        assert_eq!(counts.frequency("new"), 2);
        assert_eq!(counts.degree("new"), 6);
        assert_eq!(counts.degree("york"), 3);
    }

    #[test]
    fn test_degree_at_least_frequency() {
        let counts = CooccurrenceCounts::from_phrases(&apples());
        for (word, degree, freq) in counts.iter() {
            assert!(freq >= 1, "{word}");
            assert!(degree >= freq, "{word}");
        }
    }

    #[test]
    fn test_empty() {
        let counts = CooccurrenceCounts::from_phrases(&[]);
        assert!(counts.is_empty());
        assert!(counts.degrees().is_empty());
    }

    #[test]
    fn test_merge() {
        let mut left = CooccurrenceCounts::from_phrases(&apples()[..2]);
        left.merge(CooccurrenceCounts::from_phrases(&apples()[2..]));
        assert_eq!(left, CooccurrenceCounts::from_phrases(&apples()));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let vocab = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta"];
        let phrases: Vec<Phrase> = (0..5000)
            .map(|i| {
                let len = 1 + i % 4;
                (0..len)
                    .map(|j| vocab[(i * 3 + j) % vocab.len()])
                    .collect::<Phrase>()
            })
            .collect();

        let sequential = CooccurrenceCounts::from_phrases(&phrases);
        let parallel = build_counts_parallel(&phrases);
        assert_eq!(sequential, parallel);
    }
}
