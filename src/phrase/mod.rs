//! Phrase extraction components
//!
//! This module provides candidate phrase segmentation and the filters
//! (repetition policy, length window) applied before counting.

pub mod filter;
pub mod segmenter;
