//! Text vectorization: bag-of-words counts and TF-IDF weighting.
//!
//! Both vectorizers learn a vocabulary with `fit` and map documents onto it
//! with `transform`. Vocabulary terms are kept in alphabetical order, so the
//! column layout depends only on the set of documents and never on hash
//! iteration order.

mod tfidf_vectorizer;

pub use tfidf_vectorizer::TfidfVectorizer;

use crate::error::{RecommendError, Result};
use crate::primitives::Matrix;
use crate::text::stopwords::StopWordsFilter;
use crate::text::tokenize::TermTokenizer;
use crate::text::Tokenizer;
use std::collections::{HashMap, HashSet};

/// Converts documents to a term-count matrix (`n_documents` × `vocabulary_size`).
///
/// # Examples
///
/// ```
/// use movierec::text::vectorize::CountVectorizer;
///
/// let docs = vec!["crime drama", "crime crime action"];
///
/// let mut vectorizer = CountVectorizer::new();
/// let counts = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
///
/// assert_eq!(vectorizer.vocabulary(), &["action", "crime", "drama"]);
/// assert_eq!(counts.row(1), &[1.0, 2.0, 0.0]);
/// ```
#[allow(missing_debug_implementations)]
pub struct CountVectorizer {
    tokenizer: Box<dyn Tokenizer>,
    /// Terms in column order (alphabetical)
    vocabulary: Vec<String>,
    /// Term -> column
    term_index: HashMap<String, usize>,
    lowercase: bool,
    min_df: usize,
    max_df: f64,
    stop_words: Option<StopWordsFilter>,
}

impl CountVectorizer {
    /// Create a vectorizer with a [`TermTokenizer`], lowercasing and no stop words.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(TermTokenizer::new()),
            vocabulary: Vec::new(),
            term_index: HashMap::new(),
            lowercase: true,
            min_df: 1,
            max_df: 1.0,
            stop_words: None,
        }
    }

    /// Remove English stop words.
    #[must_use]
    pub fn with_stop_words_english(mut self) -> Self {
        self.stop_words = Some(StopWordsFilter::english());
        self
    }

    /// Remove a custom set of stop words.
    #[must_use]
    pub fn with_stop_words(mut self, words: &[&str]) -> Self {
        self.stop_words = Some(StopWordsFilter::new(words));
        self
    }

    /// Replace the tokenizer.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set whether tokens are case-folded before counting.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Ignore terms appearing in fewer than `min_df` documents.
    #[must_use]
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df.max(1);
        self
    }

    /// Ignore terms appearing in more than `max_df` (fraction, 0.0-1.0) of documents.
    #[must_use]
    pub fn with_max_df(mut self, max_df: f64) -> Self {
        self.max_df = max_df.clamp(0.0, 1.0);
        self
    }

    /// Tokenize, case-fold and drop stop words.
    fn analyze(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.tokenizer.tokenize(text)?;
        Ok(tokens
            .into_iter()
            .map(|t| if self.lowercase { t.to_lowercase() } else { t })
            .filter(|t| {
                self.stop_words
                    .as_ref()
                    .map_or(true, |sw| !sw.is_stop_word(t))
            })
            .collect())
    }

    /// Learn the vocabulary from `documents`.
    ///
    /// # Errors
    ///
    /// [`RecommendError::EmptyInput`] when `documents` is empty and
    /// [`RecommendError::EmptyVocabulary`] when no term survives filtering
    /// (every document empty or made only of stop words).
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        if documents.is_empty() {
            return Err(RecommendError::EmptyInput(
                "cannot fit on an empty document set".to_string(),
            ));
        }

        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            let unique: HashSet<String> = self.analyze(doc.as_ref())?.into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let max_df_count = self.max_df * documents.len() as f64;
        let mut terms: Vec<String> = doc_freq
            .into_iter()
            .filter(|(_, df)| *df >= self.min_df && *df as f64 <= max_df_count)
            .map(|(term, _)| term)
            .collect();
        terms.sort_unstable();

        self.term_index = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();
        self.vocabulary = terms;

        if self.vocabulary.is_empty() {
            return Err(RecommendError::EmptyVocabulary);
        }
        Ok(())
    }

    /// Map `documents` onto the learned vocabulary as raw term counts.
    ///
    /// Terms outside the vocabulary are ignored.
    ///
    /// # Errors
    ///
    /// [`RecommendError::EmptyVocabulary`] if called before a successful `fit`.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Matrix<f64>> {
        if self.vocabulary.is_empty() {
            return Err(RecommendError::EmptyVocabulary);
        }

        let mut counts = Matrix::zeros(documents.len(), self.vocabulary.len());
        for (doc_idx, doc) in documents.iter().enumerate() {
            for term in self.analyze(doc.as_ref())? {
                if let Some(&col) = self.term_index.get(&term) {
                    counts.set(doc_idx, col, counts.get(doc_idx, col) + 1.0);
                }
            }
        }
        Ok(counts)
    }

    /// `fit` followed by `transform` on the same documents.
    ///
    /// # Errors
    ///
    /// See [`CountVectorizer::fit`].
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Matrix<f64>> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// Learned terms in column order.
    #[must_use]
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Number of learned terms.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Column of `term`, if it is in the vocabulary.
    #[must_use]
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.term_index.get(term).copied()
    }
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self::new()
    }
}
