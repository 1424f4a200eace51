//! Stopword tables
//!
//! Language-indexed stopword lists come from the `stop-words` crate, whose
//! tables are static and read-only. A [`StopwordFilter`] is resolved once when
//! an extractor is built and then shared by every extraction it runs.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::errors::{RakeError, Result};

/// Language identifiers accepted by [`StopwordFilter::for_language`], as
/// `(iso code, english name)` pairs.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "arabic"),
    ("da", "danish"),
    ("de", "german"),
    ("en", "english"),
    ("es", "spanish"),
    ("fi", "finnish"),
    ("fr", "french"),
    ("hu", "hungarian"),
    ("it", "italian"),
    ("nl", "dutch"),
    ("no", "norwegian"),
    ("pt", "portuguese"),
    ("ru", "russian"),
    ("sv", "swedish"),
    ("tr", "turkish"),
];

/// A set of lowercase stopwords that act as phrase delimiters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Load the stopword table for `language`
    ///
    /// Accepts ISO codes (`"en"`) and English names (`"english"`), case
    /// insensitively. Fails with [`RakeError::UnsupportedLanguage`] instead of
    /// silently returning an empty filter.
    pub fn for_language(language: &str) -> Result<Self> {
        let lang = Self::resolve_language(language)
            .ok_or_else(|| RakeError::UnsupportedLanguage(language.to_string()))?;
        let stopwords = get(lang).iter().map(|s| s.to_lowercase()).collect();
        Ok(Self { stopwords })
    }

    /// A filter that matches nothing; only punctuation splits phrases
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a filter from explicit words, lowercased on the way in
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let mut filter = Self::empty();
        filter.add_stopwords(words);
        filter
    }

    /// Whether a stopword table exists for `language`
    pub fn is_supported(language: &str) -> bool {
        Self::resolve_language(language).is_some()
    }

    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        self.stopwords
            .extend(words.iter().map(|w| w.as_ref().to_lowercase()));
    }

    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Membership test for a word the caller already lowercased
    #[inline]
    pub fn contains(&self, lowercase_word: &str) -> bool {
        self.stopwords.contains(lowercase_word)
    }

    /// Case-insensitive membership test
    pub fn is_stopword(&self, word: &str) -> bool {
        self.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Map an ISO code or English name onto a `stop-words` table
    fn resolve_language(language: &str) -> Option<LANGUAGE> {
        let key = language.trim().to_lowercase();
        let (_, name) = SUPPORTED_LANGUAGES
            .iter()
            .find(|(code, name)| *code == key || *name == key)?;

        Some(match *name {
            "arabic" => LANGUAGE::Arabic,
            "danish" => LANGUAGE::Danish,
            "german" => LANGUAGE::German,
            "english" => LANGUAGE::English,
            "spanish" => LANGUAGE::Spanish,
            "finnish" => LANGUAGE::Finnish,
            "french" => LANGUAGE::French,
            "hungarian" => LANGUAGE::Hungarian,
            "italian" => LANGUAGE::Italian,
            "dutch" => LANGUAGE::Dutch,
            "norwegian" => LANGUAGE::Norwegian,
            "portuguese" => LANGUAGE::Portuguese,
            "russian" => LANGUAGE::Russian,
            "swedish" => LANGUAGE::Swedish,
            "turkish" => LANGUAGE::Turkish,
            _ => return None,
        })
    }
}
