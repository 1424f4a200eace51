//! Extraction pipeline
//!
//! Stage runner, observers, per-call artifacts, and configuration
//! validation.

pub mod artifacts;
pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod validation;
