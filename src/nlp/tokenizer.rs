//! Tokenization
//!
//! Sentence and word splitting are pluggable: anything implementing
//! [`Tokenizer`] (including plain closures) can be injected into an
//! extractor. The defaults here split sentences on Unicode sentence
//! boundaries and words on alphanumeric/punctuation runs.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Splits a piece of text into an ordered sequence of strings
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Default sentence tokenizer (UAX #29 sentence boundaries)
///
/// Whitespace runs, including line breaks, are collapsed to a single space
/// first so that hard-wrapped text is not cut mid-sentence.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceTokenizer;

impl Tokenizer for SentenceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        normalized
            .unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Default word tokenizer: runs of word characters or runs of punctuation
///
/// `"document's"` becomes `["document", "'", "s"]` and `":-)"` stays one token.
#[derive(Clone, Copy, Default)]
pub struct WordPunctTokenizer;

impl WordPunctTokenizer {
    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| Regex::new(r"\w+|[^\w\s]+").expect("static pattern is valid"))
    }
}

impl fmt::Debug for WordPunctTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WordPunctTokenizer")
    }
}

impl Tokenizer for WordPunctTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        Self::pattern()
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Whitespace-only word tokenizer, mostly useful for pre-tokenized input
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}
