//! Punctuation delimiters
//!
//! Punctuation tokens are matched exactly as the word tokenizer produced
//! them: no lowercasing, no trimming. The wordpunct tokenizer emits runs such
//! as `"),"` or `":-)"` as one token; those only split phrases when listed
//! verbatim, or when run matching is enabled with
//! [`PunctuationSet::with_runs`].

use rustc_hash::FxHashSet;

/// The ASCII punctuation characters, in code point order.
pub const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A set of tokens that act as phrase delimiters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunctuationSet {
    marks: FxHashSet<String>,
    match_runs: bool,
}

impl Default for PunctuationSet {
    fn default() -> Self {
        Self::ascii()
    }
}

impl PunctuationSet {
    /// Every ASCII punctuation character as a single-character token
    ///
    /// Multi-character runs like `"),"` are not members unless
    /// [`with_runs`](Self::with_runs) is enabled.
    pub fn ascii() -> Self {
        Self::from_list(&ASCII_PUNCTUATION.chars().map(String::from).collect::<Vec<_>>())
    }

    /// Create a set from custom marks
    pub fn from_list<S: AsRef<str>>(marks: &[S]) -> Self {
        Self {
            marks: marks.iter().map(|m| m.as_ref().to_string()).collect(),
            match_runs: false,
        }
    }

    /// An empty set (nothing splits on punctuation)
    pub fn empty() -> Self {
        Self::from_list::<&str>(&[])
    }

    /// Also treat a token as a delimiter when every character of it is a
    /// single-character mark of this set
    pub fn with_runs(mut self, match_runs: bool) -> Self {
        self.match_runs = match_runs;
        self
    }

    pub fn matches_runs(&self) -> bool {
        self.match_runs
    }

    /// Check if a raw token is a punctuation delimiter
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.marks.contains(token) || (self.match_runs && self.is_run(token))
    }

    fn is_run(&self, token: &str) -> bool {
        let mut buf = [0u8; 4];
        !token.is_empty()
            && token
                .chars()
                .all(|c| self.marks.contains(&*c.encode_utf8(&mut buf)))
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
