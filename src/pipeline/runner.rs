//! Pipeline runner: executes the RAKE stages in order.
//!
//! ```text
//! tokenized sentences ─▶ phrases ─▶ counts ─▶ scores ─▶ rank ─▶ Extraction
//! ```
//!
//! Each stage runs to completion before the next starts: scoring only ever
//! sees fully-built counters. An optional [`PipelineObserver`] is notified at
//! every stage boundary.

use crate::graph::cooccurrence::build_counts_parallel;
use crate::nlp::punctuation::PunctuationSet;
use crate::nlp::stopwords::StopwordFilter;
use crate::phrase::filter::PhraseFilter;
use crate::phrase::segmenter::PhraseSegmenter;
use crate::pipeline::artifacts::Extraction;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, STAGE_COUNTS, STAGE_PHRASES,
    STAGE_RANK, STAGE_SCORES,
};
use crate::rank::rank_phrases;
use crate::scoring::WordScorer;
use crate::types::RakeConfig;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// The RAKE stages, borrowing the boundary sets they split on
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'a> {
    pub segmenter: PhraseSegmenter<'a>,
    pub filter: PhraseFilter,
    pub scorer: WordScorer,
}

impl<'a> Pipeline<'a> {
    pub fn new(segmenter: PhraseSegmenter<'a>, filter: PhraseFilter, scorer: WordScorer) -> Self {
        Self {
            segmenter,
            filter,
            scorer,
        }
    }

    /// Build a pipeline from a configuration and resolved boundary sets
    pub fn from_config(
        config: &RakeConfig,
        stopwords: &'a StopwordFilter,
        punctuations: &'a PunctuationSet,
    ) -> Self {
        Self::new(
            PhraseSegmenter::new(stopwords, punctuations),
            PhraseFilter::from_config(config),
            WordScorer::new(config.ranking_metric),
        )
    }

    /// Execute the pipeline without an observer
    pub fn run<I>(&self, sentences: I) -> Extraction
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: AsRef<str>,
    {
        self.run_observed(sentences, &mut NoopObserver)
    }

    /// Execute the pipeline over tokenized sentences.
    ///
    /// Stages run in order:
    /// 1. Segment into phrases, then apply the repetition policy and length window
    /// 2. Count word degree and frequency
    /// 3. Score words
    /// 4. Score and rank phrases
    pub fn run_observed<I>(&self, sentences: I, observer: &mut impl PipelineObserver) -> Extraction
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: AsRef<str>,
    {
        // Stage 1: Phrases
        let phrases = {
            trace_stage!(STAGE_PHRASES);
            observer.on_stage_start(STAGE_PHRASES);
            let clock = StageClock::start();
            let phrases = self.filter.apply(self.segmenter.phrases(sentences));
            observer.on_stage_end(STAGE_PHRASES, &StageReport::new(clock.elapsed(), phrases.len()));
            observer.on_phrases(&phrases);
            phrases
        };

        // Stage 2: Counts
        let counts = {
            trace_stage!(STAGE_COUNTS);
            observer.on_stage_start(STAGE_COUNTS);
            let clock = StageClock::start();
            let counts = build_counts_parallel(&phrases);
            observer.on_stage_end(STAGE_COUNTS, &StageReport::new(clock.elapsed(), counts.len()));
            observer.on_counts(&counts);
            counts
        };

        // Stage 3: Scores
        let scores = {
            trace_stage!(STAGE_SCORES);
            observer.on_stage_start(STAGE_SCORES);
            let clock = StageClock::start();
            let scores = self.scorer.score_all(&counts);
            observer.on_stage_end(STAGE_SCORES, &StageReport::new(clock.elapsed(), scores.len()));
            observer.on_scores(&scores);
            scores
        };

        // Stage 4: Rank
        let ranked = {
            trace_stage!(STAGE_RANK);
            observer.on_stage_start(STAGE_RANK);
            let clock = StageClock::start();
            let ranked = rank_phrases(&phrases, &scores);
            observer.on_stage_end(STAGE_RANK, &StageReport::new(clock.elapsed(), ranked.len()));
            observer.on_ranked(&ranked);
            ranked
        };

        Extraction {
            phrases,
            counts,
            scores,
            ranked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::observer::{StageTimingObserver, STAGES};
    use crate::types::{Metric, Phrase};

    fn tokenized(text: &str) -> Vec<Vec<String>> {
        text.split('|')
            .map(|s| s.split_whitespace().map(str::to_string).collect())
            .collect()
    }

    fn magic_sentences() -> Vec<Vec<String>> {
        tokenized("Magic systems is a company . | Magic systems was founded in a garage .")
    }

    fn magic_boundaries() -> (StopwordFilter, PunctuationSet) {
        (
            StopwordFilter::from_list(&["is", "a", "was", "in"]),
            PunctuationSet::from_list(&["."]),
        )
    }

    #[test]
    fn test_run_with_repeated_phrases() {
        let (stopwords, punctuations) = magic_boundaries();
        let config = RakeConfig::default();
        let result = Pipeline::from_config(&config, &stopwords, &punctuations).run(magic_sentences());

        assert_eq!(
            result.phrases,
            vec![
                Phrase::from_iter(["magic", "systems"]),
                Phrase::from_iter(["company"]),
                Phrase::from_iter(["magic", "systems"]),
                Phrase::from_iter(["founded"]),
                Phrase::from_iter(["garage"]),
            ]
        );
        assert_eq!(result.counts.frequency("magic"), 2);
        assert_eq!(result.counts.degree("magic"), 4);
        assert_eq!(
            result.ranked_phrases(),
            vec!["magic systems", "magic systems", "company", "founded", "garage"]
        );
    }

    #[test]
    fn test_run_without_repeated_phrases() {
        let (stopwords, punctuations) = magic_boundaries();
        let config = RakeConfig {
            include_repeated_phrases: false,
            ..RakeConfig::default()
        };
        let result = Pipeline::from_config(&config, &stopwords, &punctuations).run(magic_sentences());

        assert_eq!(result.counts.frequency("magic"), 1);
        assert_eq!(result.counts.degree("magic"), 2);
        assert_eq!(
            result.ranked_phrases(),
            vec!["magic systems", "company", "founded", "garage"]
        );
    }

    #[test]
    fn test_length_filter_applies_before_counting() {
        let (stopwords, punctuations) = magic_boundaries();
        let config = RakeConfig {
            min_length: 2,
            ranking_metric: Metric::WordDegree,
            ..RakeConfig::default()
        };
        let result = Pipeline::from_config(&config, &stopwords, &punctuations).run(magic_sentences());

        assert_eq!(result.ranked_phrases(), vec!["magic systems", "magic systems"]);
        assert_eq!(result.counts.frequency("company"), 0);
        assert!(!result.word_degrees().contains_key("garage"));
    }

    #[test]
    fn test_observer_sees_every_stage() {
        let (stopwords, punctuations) = magic_boundaries();
        let config = RakeConfig::default();
        let mut observer = StageTimingObserver::new();
        Pipeline::from_config(&config, &stopwords, &punctuations)
            .run_observed(magic_sentences(), &mut observer);

        let stages: Vec<_> = observer.reports().iter().map(|(name, _)| *name).collect();
        assert_eq!(stages, STAGES.to_vec());
        assert_eq!(observer.report(STAGE_PHRASES).map(|r| r.items), Some(5));
        assert_eq!(observer.report(STAGE_COUNTS).map(|r| r.items), Some(5));
        assert_eq!(observer.report(STAGE_RANK).map(|r| r.items), Some(5));
    }

    #[test]
    fn test_custom_observer_receives_artifacts() {
        #[derive(Default)]
        struct Capture {
            phrases: usize,
            words: usize,
            top: Option<String>,
        }

        impl PipelineObserver for Capture {
            fn on_phrases(&mut self, phrases: &[Phrase]) {
                self.phrases = phrases.len();
            }

            fn on_scores(&mut self, scores: &crate::scoring::WordScores) {
                self.words = scores.len();
            }

            fn on_ranked(&mut self, ranked: &[crate::types::RankedPhrase]) {
                self.top = ranked.first().map(|r| r.text());
            }
        }

        let (stopwords, punctuations) = magic_boundaries();
        let config = RakeConfig::default();
        let mut capture = Capture::default();
        Pipeline::from_config(&config, &stopwords, &punctuations)
            .run_observed(magic_sentences(), &mut capture);

        assert_eq!(capture.phrases, 5);
        assert_eq!(capture.words, 5);
        assert_eq!(capture.top.as_deref(), Some("magic systems"));
    }

    #[test]
    fn test_only_boundaries_yields_empty_result() {
        let (stopwords, punctuations) = magic_boundaries();
        let config = RakeConfig::default();
        let result = Pipeline::from_config(&config, &stopwords, &punctuations)
            .run(tokenized("is a . | was in a"));

        assert!(result.is_empty());
        assert!(result.counts.is_empty());
    }
}
