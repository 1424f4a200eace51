//! Candidate phrase segmentation
//!
//! Splits tokenized sentences into candidate phrases. Stopwords and
//! punctuation act as delimiters and never appear inside a phrase; phrases
//! never span a sentence boundary.

use crate::nlp::punctuation::PunctuationSet;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{Phrase, Word};

/// Splits token streams at stopword/punctuation boundaries
#[derive(Debug, Clone, Copy)]
pub struct PhraseSegmenter<'a> {
    stopwords: &'a StopwordFilter,
    punctuations: &'a PunctuationSet,
}

impl<'a> PhraseSegmenter<'a> {
    pub fn new(stopwords: &'a StopwordFilter, punctuations: &'a PunctuationSet) -> Self {
        Self {
            stopwords,
            punctuations,
        }
    }

    /// Whether `token` ends the current phrase
    ///
    /// Punctuation is matched on the raw token, stopwords on its lowercase form.
    #[inline]
    pub fn is_delimiter(&self, token: &str, lowercase: &str) -> bool {
        self.punctuations.contains(token) || self.stopwords.contains(lowercase)
    }

    /// Lazily segment a sequence of tokenized sentences
    ///
    /// The returned iterator is single-pass; call again to restart.
    pub fn phrases<I>(&self, sentences: I) -> Phrases<'a, I::IntoIter, <I::Item as IntoIterator>::IntoIter>
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: AsRef<str>,
    {
        Phrases {
            segmenter: *self,
            sentences: sentences.into_iter(),
            current: None,
        }
    }

    /// Segment a single tokenized sentence
    pub fn sentence_phrases<T: AsRef<str>>(&self, tokens: &[T]) -> Vec<Phrase> {
        self.phrases(std::iter::once(tokens)).collect()
    }
}

/// Iterator over the phrases of a sequence of tokenized sentences
pub struct Phrases<'a, I, S> {
    segmenter: PhraseSegmenter<'a>,
    sentences: I,
    current: Option<S>,
}

impl<'a, I, S> Iterator for Phrases<'a, I, S>
where
    I: Iterator,
    I::Item: IntoIterator<IntoIter = S>,
    S: Iterator,
    S::Item: AsRef<str>,
{
    type Item = Phrase;

    fn next(&mut self) -> Option<Phrase> {
        let mut words: Vec<Word> = Vec::new();
        loop {
            let Some(tokens) = self.current.as_mut() else {
                // Sentence boundary: a fresh sentence always starts a fresh phrase
                self.current = Some(self.sentences.next()?.into_iter());
                continue;
            };

            match tokens.next() {
                Some(token) => {
                    let token = token.as_ref();
                    let lowercase = token.to_lowercase();
                    if self.segmenter.is_delimiter(token, &lowercase) {
                        if !words.is_empty() {
                            return Some(Phrase::new(words));
                        }
                    } else {
                        words.push(lowercase);
                    }
                }
                None => {
                    self.current = None;
                    if !words.is_empty() {
                        return Some(Phrase::new(words));
                    }
                }
            }
        }
    }
}
