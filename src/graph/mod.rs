//! Co-occurrence graph construction
//!
//! This module builds the per-word degree and frequency counters that stand
//! in for the RAKE word co-occurrence graph.

pub mod cooccurrence;
