//! Natural Language Processing components
//!
//! This module provides tokenization, stopword tables and punctuation sets.

pub mod punctuation;
pub mod stopwords;
pub mod tokenizer;
