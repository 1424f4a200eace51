//! Pipeline observers: stage hooks for profiling and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Every hook has an empty default body, so an observer only
//! implements what it cares about.

use std::time::{Duration, Instant};

use crate::graph::cooccurrence::CooccurrenceCounts;
use crate::scoring::WordScores;
use crate::types::{Phrase, RankedPhrase};

pub const STAGE_PHRASES: &str = "phrases";
pub const STAGE_COUNTS: &str = "counts";
pub const STAGE_SCORES: &str = "scores";
pub const STAGE_RANK: &str = "rank";

/// Stage names in execution order
pub const STAGES: [&str; 4] = [STAGE_PHRASES, STAGE_COUNTS, STAGE_SCORES, STAGE_RANK];

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// Summary of one finished stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    pub elapsed: Duration,
    /// Number of items the stage produced (phrases, words, ...)
    pub items: usize,
}

impl StageReport {
    pub fn new(elapsed: Duration, items: usize) -> Self {
        Self { elapsed, items }
    }
}

/// Receives callbacks as the pipeline runs
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Filtered phrase instances, before counting
    fn on_phrases(&mut self, _phrases: &[Phrase]) {}

    fn on_counts(&mut self, _counts: &CooccurrenceCounts) {}

    fn on_scores(&mut self, _scores: &WordScores) {}

    fn on_ranked(&mut self, _ranked: &[RankedPhrase]) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records every stage report in order
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(stage, report)` pairs in execution order
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report for `stage`, if it ran
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Sum of all recorded stage durations
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, *report));
    }
}
