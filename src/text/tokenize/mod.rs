//! Tokenization algorithms for text preprocessing.
//!
//! - Whitespace tokenization (splits on Unicode whitespace)
//! - Term tokenization (runs of word characters, with a minimum length)
//!
//! All tokenizers implement the [`Tokenizer`] trait and never panic.

use crate::error::Result;
use crate::text::Tokenizer;

/// Whitespace tokenizer that splits text on Unicode whitespace characters.
///
/// Punctuation attached to words is preserved.
///
/// # Examples
///
/// ```
/// use movierec::text::{Tokenizer, tokenize::WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
///
/// let tokens = tokenizer.tokenize("Hello, world!").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["Hello,", "world!"]);
///
/// let tokens = tokenizer.tokenize("line1\nline2\ttab").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["line1", "line2", "tab"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(ToString::to_string).collect())
    }
}

/// Term tokenizer: maximal runs of word characters (alphanumeric or `_`).
///
/// Everything else (whitespace, punctuation, hyphens) separates terms, and
/// terms shorter than `min_len` characters are dropped. With the default
/// `min_len` of 2, single letters such as "a" or the "I" in "I'm" never
/// become vocabulary terms.
///
/// # Examples
///
/// ```
/// use movierec::text::{Tokenizer, tokenize::TermTokenizer};
///
/// let tokenizer = TermTokenizer::new();
///
/// let tokens = tokenizer.tokenize("Sci-Fi Action, a thief!").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["Sci", "Fi", "Action", "thief"]);
/// ```
#[derive(Debug, Clone)]
pub struct TermTokenizer {
    min_len: usize,
}

impl TermTokenizer {
    /// Create a term tokenizer keeping terms of two or more characters.
    #[must_use]
    pub fn new() -> Self {
        Self { min_len: 2 }
    }

    /// Set the minimum number of characters a term must have.
    #[must_use]
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len.max(1);
        self
    }

    /// Minimum term length in characters.
    #[must_use]
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    fn is_term_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }
}

impl Default for TermTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for TermTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text
            .split(|c: char| !Self::is_term_char(c))
            .filter(|term| term.chars().count() >= self.min_len)
            .map(ToString::to_string)
            .collect())
    }
}
