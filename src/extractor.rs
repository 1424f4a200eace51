//! RAKE keyword extractor
//!
//! [`Rake`] wires the tokenizers, boundary sets and pipeline together. It is
//! built once through [`RakeBuilder`], which validates the configuration and
//! resolves the stopword table, and can then run any number of extractions.
//!
//! ```rust
//! use rapid_rake::Rake;
//!
//! let mut rake = Rake::builder()
//!     .stopwords(["is", "a", "was", "in"])
//!     .build()
//!     .unwrap();
//! rake.extract_keywords_from_text("Magic systems is a company. Magic systems was founded in a garage.");
//! assert_eq!(rake.get_ranked_phrases()[0], "magic systems");
//! ```

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::errors::{RakeError, Result};
use crate::nlp::punctuation::PunctuationSet;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{SentenceTokenizer, Tokenizer, WordPunctTokenizer};
use crate::pipeline::artifacts::Extraction;
use crate::pipeline::errors::ConfigError;
use crate::pipeline::observer::{NoopObserver, PipelineObserver};
use crate::pipeline::runner::Pipeline;
use crate::pipeline::validation::ValidationEngine;
use crate::types::{Metric, RakeConfig, Word};

/// Rapid Automatic Keyword Extraction
///
/// Two calling styles are supported:
///
/// - [`Rake::extract`] / [`Rake::extract_from_sentences`] take `&self` and
///   return a call-scoped [`Extraction`]; one extractor can be shared across
///   threads this way.
/// - [`Rake::extract_keywords_from_text`] /
///   [`Rake::extract_keywords_from_sentences`] store the result on the
///   extractor for the `get_*` accessors. Each call replaces the previous
///   result.
#[derive(Clone)]
pub struct Rake {
    config: RakeConfig,
    stopwords: StopwordFilter,
    punctuations: PunctuationSet,
    sentence_tokenizer: Arc<dyn Tokenizer>,
    word_tokenizer: Arc<dyn Tokenizer>,
    last: Extraction,
}

impl fmt::Debug for Rake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rake")
            .field("config", &self.config)
            .field("stopwords", &self.stopwords.len())
            .field("punctuations", &self.punctuations.len())
            .field("ranked", &self.last.len())
            .finish_non_exhaustive()
    }
}

impl Rake {
    /// Start building an extractor from the default configuration
    pub fn builder() -> RakeBuilder {
        RakeBuilder::new()
    }

    /// Build an extractor with the default configuration (English stopwords)
    pub fn new() -> Result<Self> {
        RakeBuilder::new().build()
    }

    /// Build an extractor from a configuration with the default tokenizers
    pub fn from_config(config: RakeConfig) -> Result<Self> {
        RakeBuilder::from_config(config).build()
    }

    // ------------------------------------------------------------------
    // Call-scoped extraction
    // ------------------------------------------------------------------

    /// Extract keywords from raw text
    pub fn extract(&self, text: &str) -> Extraction {
        let sentences = self.sentence_tokenizer.tokenize(text);
        self.extract_from_sentences(&sentences)
    }

    /// Extract keywords from pre-split sentences
    pub fn extract_from_sentences<S: AsRef<str>>(&self, sentences: &[S]) -> Extraction {
        self.extract_from_sentences_observed(sentences, &mut NoopObserver)
    }

    /// Extract keywords from pre-split sentences, reporting stage boundaries
    /// to `observer`
    pub fn extract_from_sentences_observed<S: AsRef<str>>(
        &self,
        sentences: &[S],
        observer: &mut impl PipelineObserver,
    ) -> Extraction {
        let pipeline = Pipeline::from_config(&self.config, &self.stopwords, &self.punctuations);
        let tokenized = sentences
            .iter()
            .map(|sentence| self.word_tokenizer.tokenize(sentence.as_ref()));
        let extraction = pipeline.run_observed(tokenized, observer);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = sentences.len(),
            phrases = extraction.phrases.len(),
            words = extraction.counts.len(),
            ranked = extraction.ranked.len(),
            metric = %self.config.ranking_metric,
            "extracted keywords"
        );

        extraction
    }

    // ------------------------------------------------------------------
    // Stateful extraction
    // ------------------------------------------------------------------

    /// Extract keywords from raw text and keep the result on the extractor
    pub fn extract_keywords_from_text(&mut self, text: &str) -> &Extraction {
        self.last = self.extract(text);
        &self.last
    }

    /// Extract keywords from pre-split sentences and keep the result on the
    /// extractor
    pub fn extract_keywords_from_sentences<S: AsRef<str>>(&mut self, sentences: &[S]) -> &Extraction {
        self.last = self.extract_from_sentences(sentences);
        &self.last
    }

    /// Ranked phrase texts from the last stored extraction
    pub fn get_ranked_phrases(&self) -> Vec<String> {
        self.last.ranked_phrases()
    }

    /// Ranked `(score, phrase)` pairs from the last stored extraction
    pub fn get_ranked_phrases_with_scores(&self) -> Vec<(f64, String)> {
        self.last.ranked_phrases_with_scores()
    }

    /// `word -> degree` from the last stored extraction
    pub fn get_word_degrees(&self) -> &FxHashMap<Word, usize> {
        self.last.word_degrees()
    }

    /// `word -> frequency` from the last stored extraction
    pub fn get_word_frequency_distribution(&self) -> &FxHashMap<Word, usize> {
        self.last.word_frequency_distribution()
    }

    /// The last stored extraction (empty before the first call)
    pub fn extraction(&self) -> &Extraction {
        &self.last
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn config(&self) -> &RakeConfig {
        &self.config
    }

    pub fn metric(&self) -> Metric {
        self.config.ranking_metric
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    pub fn punctuations(&self) -> &PunctuationSet {
        &self.punctuations
    }

    /// Split text with the configured sentence tokenizer
    pub fn tokenize_sentences(&self, text: &str) -> Vec<String> {
        self.sentence_tokenizer.tokenize(text)
    }

    /// Split a sentence with the configured word tokenizer
    pub fn tokenize_words(&self, sentence: &str) -> Vec<String> {
        self.word_tokenizer.tokenize(sentence)
    }
}

/// Fluent builder for [`Rake`]
#[derive(Clone)]
pub struct RakeBuilder {
    config: RakeConfig,
    stopword_filter: Option<StopwordFilter>,
    sentence_tokenizer: Arc<dyn Tokenizer>,
    word_tokenizer: Arc<dyn Tokenizer>,
}

impl Default for RakeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RakeBuilder {
    pub fn new() -> Self {
        Self::from_config(RakeConfig::default())
    }

    /// Start from an existing configuration
    pub fn from_config(config: RakeConfig) -> Self {
        Self {
            config,
            stopword_filter: None,
            sentence_tokenizer: Arc::new(SentenceTokenizer),
            word_tokenizer: Arc::new(WordPunctTokenizer),
        }
    }

    /// Use explicit stopwords instead of a language table
    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.stopwords = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Use an already-resolved stopword filter; overrides `stopwords` and
    /// `language`
    pub fn stopword_filter(mut self, filter: StopwordFilter) -> Self {
        self.stopword_filter = Some(filter);
        self
    }

    /// Use explicit punctuation delimiters instead of ASCII punctuation
    pub fn punctuations<I, S>(mut self, marks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.punctuations = Some(marks.into_iter().map(Into::into).collect());
        self
    }

    /// Split phrases at tokens made only of punctuation marks, such as `"),"`
    pub fn punctuation_runs(mut self, enabled: bool) -> Self {
        self.config.punctuation_runs = enabled;
        self
    }

    /// Stopword table to load when no explicit stopwords are given
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    pub fn ranking_metric(mut self, metric: Metric) -> Self {
        self.config.ranking_metric = metric;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.config.max_length = max_length;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.config.min_length = min_length;
        self
    }

    pub fn include_repeated_phrases(mut self, include: bool) -> Self {
        self.config.include_repeated_phrases = include;
        self
    }

    /// Replace the sentence tokenizer
    pub fn sentence_tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.sentence_tokenizer = Arc::new(tokenizer);
        self
    }

    /// Replace the word tokenizer
    pub fn word_tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.word_tokenizer = Arc::new(tokenizer);
        self
    }

    /// Validate the configuration, resolve boundary sets and build the
    /// extractor
    ///
    /// # Errors
    ///
    /// - [`RakeError::InvalidConfig`] if any validation rule reports an error
    /// - [`RakeError::UnsupportedLanguage`] if no explicit stopwords are given
    ///   and `language` has no stopword table
    pub fn build(self) -> Result<Rake> {
        let report = ValidationEngine::with_defaults().validate(&self.config);
        let warnings = report.into_result().map_err(RakeError::InvalidConfig)?;
        log_warnings(&warnings);

        let stopwords = match (self.stopword_filter, &self.config.stopwords) {
            (Some(filter), _) => filter,
            (None, Some(words)) => StopwordFilter::from_list(words),
            (None, None) => StopwordFilter::for_language(&self.config.language)?,
        };

        let punctuations = match &self.config.punctuations {
            Some(marks) => PunctuationSet::from_list(marks),
            None => PunctuationSet::ascii(),
        }
        .with_runs(self.config.punctuation_runs);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            stopwords = stopwords.len(),
            punctuations = punctuations.len(),
            metric = %self.config.ranking_metric,
            min_length = self.config.min_length,
            max_length = self.config.max_length,
            "built rake extractor"
        );

        Ok(Rake {
            config: self.config,
            stopwords,
            punctuations,
            sentence_tokenizer: self.sentence_tokenizer,
            word_tokenizer: self.word_tokenizer,
            last: Extraction::default(),
        })
    }
}

#[cfg(feature = "tracing")]
fn log_warnings(warnings: &[ConfigError]) {
    for warning in warnings {
        tracing::warn!(code = %warning.code, path = %warning.path, "{}", warning.message);
    }
}

#[cfg(not(feature = "tracing"))]
fn log_warnings(_warnings: &[ConfigError]) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::observer::{StageTimingObserver, STAGES};

    const MAGIC: &str = "Magic systems is a company. Magic systems was founded in a garage.";

    fn magic_rake(include_repeated_phrases: bool) -> Rake {
        Rake::builder()
            .stopwords(["is", "a", "was", "in"])
            .punctuations(["."])
            .include_repeated_phrases(include_repeated_phrases)
            .build()
            .unwrap()
    }

    #[test]
    fn test_default_extractor_uses_english() {
        let rake = Rake::new().unwrap();
        assert!(rake.stopwords().is_stopword("the"));
        assert_eq!(rake.punctuations().len(), 32);
        assert_eq!(rake.metric(), Metric::DegreeToFrequencyRatio);
    }

    #[test]
    fn test_repeated_phrases_inflate_counts() {
        let mut rake = magic_rake(true);
        rake.extract_keywords_from_text(MAGIC);

        assert_eq!(rake.get_word_frequency_distribution()["magic"], 2);
        assert_eq!(rake.get_word_degrees()["magic"], 4);
        assert_eq!(rake.get_word_degrees()["systems"], 4);
        assert_eq!(
            rake.get_ranked_phrases(),
            vec!["magic systems", "magic systems", "company", "founded", "garage"]
        );
    }

    #[test]
    fn test_deduplicated_phrases() {
        let mut rake = magic_rake(false);
        rake.extract_keywords_from_text(MAGIC);

        assert_eq!(rake.get_word_frequency_distribution()["magic"], 1);
        assert_eq!(rake.get_word_degrees()["magic"], 2);
        assert_eq!(
            rake.get_ranked_phrases(),
            vec!["magic systems", "company", "founded", "garage"]
        );
    }

    #[test]
    fn test_scores_view_matches_phrases_view() {
        let mut rake = magic_rake(true);
        rake.extract_keywords_from_text(MAGIC);

        let with_scores = rake.get_ranked_phrases_with_scores();
        assert_eq!(with_scores[0], (4.0, "magic systems".to_string()));
        let phrases: Vec<String> = with_scores.into_iter().map(|(_, p)| p).collect();
        assert_eq!(phrases, rake.get_ranked_phrases());
    }

    #[test]
    fn test_from_sentences() {
        let mut rake = Rake::builder()
            .stopwords(["of", "a"])
            .build()
            .unwrap();
        rake.extract_keywords_from_sentences(&[
            "Criteria of compatibility of a system of linear constraints",
        ]);

        assert_eq!(
            rake.get_ranked_phrases(),
            vec!["linear constraints", "criteria", "compatibility", "system"]
        );
    }

    #[test]
    fn test_new_call_replaces_previous_result() {
        let mut rake = magic_rake(true);
        rake.extract_keywords_from_text(MAGIC);
        rake.extract_keywords_from_text("Ancient city ruins.");

        assert_eq!(rake.get_ranked_phrases(), vec!["ancient city ruins"]);
        assert!(!rake.get_word_degrees().contains_key("magic"));
        assert_eq!(rake.get_word_frequency_distribution().len(), 3);
    }

    #[test]
    fn test_empty_input_clears_result() {
        let mut rake = magic_rake(true);
        rake.extract_keywords_from_text(MAGIC);
        rake.extract_keywords_from_text("");

        assert!(rake.get_ranked_phrases().is_empty());
        assert!(rake.get_word_degrees().is_empty());
    }

    #[test]
    fn test_accessors_before_any_extraction() {
        let rake = magic_rake(true);
        assert!(rake.get_ranked_phrases().is_empty());
        assert!(rake.get_ranked_phrases_with_scores().is_empty());
        assert!(rake.get_word_frequency_distribution().is_empty());
    }

    #[test]
    fn test_call_scoped_extract_leaves_state_untouched() {
        let rake = magic_rake(true);
        let result = rake.extract(MAGIC);
        assert_eq!(result.len(), 5);
        assert!(rake.extraction().is_empty());
    }

    #[test]
    fn test_invalid_length_range_rejected() {
        let err = Rake::builder().min_length(3).max_length(2).build().unwrap_err();
        match err {
            RakeError::InvalidConfig(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors.0[0].path, "/min_length");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_punctuation_runs() {
        const TEXT: &str = "Rapid automatic keyword extraction (RAKE), works well";
        let build = |runs| {
            Rake::builder()
                .stopwords(["rake"])
                .punctuation_runs(runs)
                .build()
                .unwrap()
        };

        assert_eq!(
            build(false).extract(TEXT).ranked_phrases(),
            vec!["rapid automatic keyword extraction", "), works well"]
        );
        assert_eq!(
            build(true).extract(TEXT).ranked_phrases(),
            vec!["rapid automatic keyword extraction", "works well"]
        );
    }

    #[test]
    fn test_default_extractor_keeps_content_words() {
        let rake = Rake::new().unwrap();
        assert!(!rake.stopwords().is_stopword("system"));
        assert!(!rake.stopwords().is_stopword("numbers"));

        let phrases = rake
            .extract(
                "Compatibility of systems of linear constraints over the set of natural numbers. \
                 A system of research information.",
            )
            .ranked_phrases();
        assert!(phrases.contains(&"natural numbers".to_string()));
        assert!(phrases.contains(&"research information".to_string()));
        assert!(phrases.contains(&"system".to_string()));
    }

    #[test]
    fn test_unsupported_language_rejected() {
        let err = Rake::builder().language("elvish").build().unwrap_err();
        assert!(matches!(err, RakeError::UnsupportedLanguage(lang) if lang == "elvish"));
    }

    #[test]
    fn test_explicit_stopwords_skip_language_lookup() {
        let rake = Rake::builder()
            .language("elvish")
            .stopwords(["of"])
            .build()
            .unwrap();
        assert!(rake.stopwords().is_stopword("of"));
        assert!(!rake.stopwords().is_stopword("the"));
    }

    #[test]
    fn test_portuguese_stopwords() {
        let rake = Rake::builder().language("portuguese").build().unwrap();
        assert!(!rake.stopwords().is_empty());
    }

    #[test]
    fn test_stopword_filter_override() {
        let mut filter = StopwordFilter::for_language("en").unwrap();
        filter.add_stopwords(&["systems"]);
        let mut rake = Rake::builder().stopword_filter(filter).build().unwrap();
        rake.extract_keywords_from_text(MAGIC);

        assert!(rake.get_ranked_phrases().iter().all(|p| !p.contains("systems")));
    }

    #[test]
    fn test_custom_sentence_tokenizer() {
        let rake = Rake::builder()
            .sentence_tokenizer(|text: &str| -> Vec<String> {
                text.split("with").map(str::to_string).collect()
            })
            .build()
            .unwrap();
        assert_eq!(
            rake.tokenize_sentences("a sentence with a hashtag"),
            vec!["a sentence ", " a hashtag"]
        );
    }

    #[test]
    fn test_custom_word_tokenizer() {
        let rake = Rake::builder()
            .stopwords(["and"])
            .word_tokenizer(|sentence: &str| -> Vec<String> {
                sentence.split('_').map(str::to_string).collect()
            })
            .build()
            .unwrap();
        let result = rake.extract_from_sentences(&["salt_and_pepper"]);
        assert_eq!(result.ranked_phrases(), vec!["salt", "pepper"]);
    }

    #[test]
    fn test_from_json_config() {
        let config = RakeConfig::from_json(
            r#"{ "stopwords": ["is", "a", "was", "in"], "ranking_metric": "word_degree" }"#,
        )
        .unwrap();
        let rake = Rake::from_config(config).unwrap();
        let result = rake.extract(MAGIC);

        assert_eq!(result.ranked_phrases_with_scores()[0], (8.0, "magic systems".to_string()));
    }

    #[test]
    fn test_observed_extraction() {
        let rake = magic_rake(true);
        let mut observer = StageTimingObserver::new();
        let sentences = rake.tokenize_sentences(MAGIC);
        rake.extract_from_sentences_observed(&sentences, &mut observer);

        assert_eq!(observer.reports().len(), STAGES.len());
    }

    #[test]
    fn test_extractor_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Rake>();
    }
}
