//! Stop words filtering for text preprocessing.
//!
//! Stop words ("the", "of", "over") carry no signal about what a movie is
//! about. Leaving them in would make every pair of synopses look alike, so
//! they are removed before TF-IDF weighting.
//!
//! # Examples
//!
//! ```
//! use movierec::text::stopwords::StopWordsFilter;
//!
//! let filter = StopWordsFilter::english();
//! let tokens = vec!["two", "imprisoned", "men", "bond", "over", "the", "years"];
//! let filtered = filter.filter(&tokens).expect("filter should succeed");
//! assert_eq!(filtered, vec!["imprisoned", "men", "bond", "years"]);
//! ```

use crate::error::Result;
use std::collections::HashSet;

/// Case-insensitive stop word set.
#[derive(Debug, Clone)]
pub struct StopWordsFilter {
    /// Stored lowercase
    stop_words: HashSet<String>,
    /// Also match [`ENGLISH_STOP_WORDS`]
    english: bool,
}

impl StopWordsFilter {
    /// Create a filter from custom stop words (case-folded on insertion).
    ///
    /// # Examples
    ///
    /// ```
    /// use movierec::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::new(vec!["movie", "film"]);
    /// assert!(filter.is_stop_word("Movie"));
    /// assert!(!filter.is_stop_word("heist"));
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stop_words: words
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
            english: false,
        }
    }

    /// Filter with the built-in [`ENGLISH_STOP_WORDS`] list.
    #[must_use]
    pub fn english() -> Self {
        Self {
            stop_words: HashSet::new(),
            english: true,
        }
    }

    /// Remove stop words from `tokens`, preserving order and original case.
    ///
    /// # Errors
    ///
    /// Never fails today; the `Result` keeps the signature in line with the
    /// tokenizers it is chained with.
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<String>> {
        Ok(tokens
            .iter()
            .map(AsRef::as_ref)
            .filter(|t| !self.is_stop_word(t))
            .map(ToString::to_string)
            .collect())
    }

    /// Check whether `word` is a stop word (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use movierec::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::english();
    /// assert!(filter.is_stop_word("The"));
    /// assert!(!filter.is_stop_word("drama"));
    /// ```
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        (self.english && is_english_stop_word(&word)) || self.stop_words.contains(&word)
    }

    /// Number of distinct stop words.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.english {
            ENGLISH_STOP_WORDS.len()
        } else {
            self.stop_words.len()
        }
    }

    /// Whether the filter has no stop words at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Default English stop words (183 words, all lowercase).
///
/// Function words plus small number words and filler verbs, sorted so a
/// membership test can binary search.
///
/// This is a shorter list than scikit-learn's 318-word English list, so
/// words such as "number" or "various" are kept as content terms.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "again", "against", "all", "along",
    "also", "am", "among", "an", "and", "another", "any", "are", "around", "as",
    "at",
    "back", "be", "because", "been", "before", "behind", "being", "below",
    "beneath", "beside", "between", "beyond", "both", "but", "by",
    "can", "could",
    "did", "do", "does", "doing", "down", "during",
    "each", "eight", "even", "ever", "every",
    "few", "first", "five", "for", "four", "from",
    "get", "give", "go", "got",
    "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how",
    "i", "if", "in", "inside", "into", "is", "it", "its", "itself",
    "just",
    "made", "make", "may", "me", "might", "more", "most", "much", "must", "my",
    "myself",
    "near", "neither", "nine", "no", "none", "not", "now",
    "of", "off", "on", "one", "only", "onto", "or", "other", "ought", "our", "ours",
    "ourselves", "out", "outside", "over", "own",
    "same", "say", "second", "see", "seven", "several", "shall", "she", "should",
    "since", "six", "so", "some", "such",
    "take", "ten", "than", "that", "the", "their", "theirs", "them", "themselves",
    "then", "there", "these", "they", "third", "this", "those", "though", "three",
    "through", "throughout", "to", "too", "toward", "two",
    "under", "underneath", "unless", "until", "up", "upon",
    "very",
    "was", "way", "we", "were", "what", "when", "where", "which", "while", "who",
    "whom", "whose", "why", "will", "with", "within", "without", "would",
    "you", "your", "yours", "yourself", "yourselves",
];

/// Whether `word` (already lowercase) is in [`ENGLISH_STOP_WORDS`].
#[must_use]
pub fn is_english_stop_word(word: &str) -> bool {
    ENGLISH_STOP_WORDS.binary_search(&word).is_ok()
}

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;
