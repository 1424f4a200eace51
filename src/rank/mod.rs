//! Phrase ranking
//!
//! A phrase scores the sum of its words' scores, counted once per
//! occurrence. Ranking is a stable sort by descending score, so phrases with
//! equal scores keep their first-seen input order.

use crate::scoring::WordScores;
use crate::types::{Phrase, RankedPhrase};

/// Score a single phrase
pub fn phrase_score(phrase: &Phrase, scores: &WordScores) -> f64 {
    phrase.words().iter().map(|w| scores.score(w)).sum()
}

/// Score and sort phrases, highest first
///
/// `phrases` must already be filtered; every instance becomes one entry.
pub fn rank_phrases<'p, I>(phrases: I, scores: &WordScores) -> Vec<RankedPhrase>
where
    I: IntoIterator<Item = &'p Phrase>,
{
    let mut ranked: Vec<RankedPhrase> = phrases
        .into_iter()
        .map(|phrase| RankedPhrase::new(phrase.clone(), phrase_score(phrase, scores)))
        .collect();
    // sort_by is stable: ties keep input order
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Phrase texts in rank order
pub fn ranked_texts(ranked: &[RankedPhrase]) -> Vec<String> {
    ranked.iter().map(RankedPhrase::text).collect()
}

/// `(score, phrase text)` pairs in rank order
pub fn ranked_pairs(ranked: &[RankedPhrase]) -> Vec<(f64, String)> {
    ranked.iter().map(|r| (r.score, r.text())).collect()
}
