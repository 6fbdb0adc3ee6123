//! Text processing for content-based recommendation.
//!
//! Movie metadata (title, genre, description) is turned into TF-IDF feature
//! vectors in three steps:
//!
//! - [`tokenize`]: split raw text into terms
//! - [`stopwords`]: drop common English words
//! - [`vectorize`]: count terms and apply TF-IDF weighting
//!
//! # Quick Start
//!
//! ```
//! use movierec::text::vectorize::TfidfVectorizer;
//!
//! let docs = vec![
//!     "The Shawshank Redemption Drama",
//!     "Fight Club Drama",
//!     "The Dark Knight Action",
//! ];
//!
//! let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
//! let features = vectorizer.fit_transform(&docs).expect("vocabulary is not empty");
//! assert_eq!(features.n_rows(), 3);
//! ```

pub mod stopwords;
pub mod tokenize;
pub mod vectorize;

use crate::error::Result;

/// Splits text into tokens.
///
/// Implementations must be deterministic: the same input always yields the
/// same token sequence.
pub trait Tokenizer: Send + Sync {
    /// Tokenize `text` into a sequence of owned tokens.
    ///
    /// # Errors
    ///
    /// Implementations may fail on malformed input.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}
