use super::CountVectorizer;
use crate::error::{RecommendError, Result};
use crate::primitives::Matrix;
use crate::text::Tokenizer;

/// TF-IDF vectorizer that converts text to an L2-normalized TF-IDF matrix.
///
/// **TF-IDF Formula:**
/// ```text
/// tfidf(t, d) = tf(t, d) × idf(t)
/// tf(t, d)    = count of t in d            (1 + ln(count) with sublinear tf)
/// idf(t)      = ln((1 + N) / (1 + df(t))) + 1   (smooth, default)
/// idf(t)      = ln(N / df(t)) + 1               (smooth_idf = false)
/// ```
/// where N is the number of documents and df(t) the number containing t.
/// Each document row is then scaled to unit Euclidean length; a document
/// with no vocabulary terms stays an all-zero row.
///
/// # Examples
///
/// ```
/// use movierec::text::vectorize::TfidfVectorizer;
///
/// let docs = vec![
///     "Fight Club Drama",
///     "The Godfather Crime Drama",
///     "The Dark Knight Action",
/// ];
///
/// let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
/// let features = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
///
/// assert_eq!(features.n_rows(), 3);
/// assert_eq!(features.n_cols(), vectorizer.vocabulary_size());
/// ```
#[allow(missing_debug_implementations)]
pub struct TfidfVectorizer {
    count_vectorizer: CountVectorizer,
    idf_values: Vec<f64>,
    sublinear_tf: bool,
    smooth_idf: bool,
}

impl TfidfVectorizer {
    /// Create a TF-IDF vectorizer with smooth idf and raw term counts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            count_vectorizer: CountVectorizer::new(),
            idf_values: Vec::new(),
            sublinear_tf: false,
            smooth_idf: true,
        }
    }

    /// Remove English stop words.
    #[must_use]
    pub fn with_stop_words_english(mut self) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_stop_words_english();
        self
    }

    /// Remove a custom set of stop words.
    #[must_use]
    pub fn with_stop_words(mut self, words: &[&str]) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_stop_words(words);
        self
    }

    /// Replace the tokenizer.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_tokenizer(tokenizer);
        self
    }

    /// Set whether tokens are case-folded.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_lowercase(lowercase);
        self
    }

    /// Ignore terms appearing in fewer than `min_df` documents.
    #[must_use]
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_min_df(min_df);
        self
    }

    /// Ignore terms appearing in more than `max_df` of documents.
    #[must_use]
    pub fn with_max_df(mut self, max_df: f64) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_max_df(max_df);
        self
    }

    /// Use `1 + ln(tf)` instead of the raw count.
    #[must_use]
    pub fn with_sublinear_tf(mut self, sublinear: bool) -> Self {
        self.sublinear_tf = sublinear;
        self
    }

    /// Toggle idf smoothing (adds one to N and every df).
    #[must_use]
    pub fn with_smooth_idf(mut self, smooth: bool) -> Self {
        self.smooth_idf = smooth;
        self
    }

    /// Learn vocabulary and idf weights.
    ///
    /// # Errors
    ///
    /// Propagates [`CountVectorizer::fit`] failures, notably
    /// [`RecommendError::EmptyVocabulary`].
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        self.idf_values.clear();
        let counts = self.count_vectorizer.fit_transform(documents)?;
        self.idf_values = self.compute_idf(&counts);
        Ok(())
    }

    fn compute_idf(&self, counts: &Matrix<f64>) -> Vec<f64> {
        let n_docs = counts.n_rows() as f64;
        let mut doc_freq = vec![0usize; counts.n_cols()];
        for row in counts.rows() {
            for (df, &count) in doc_freq.iter_mut().zip(row) {
                if count > 0.0 {
                    *df += 1;
                }
            }
        }

        doc_freq
            .into_iter()
            .map(|df| {
                let df = df as f64;
                if self.smooth_idf {
                    ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
                } else {
                    (n_docs / df).ln() + 1.0
                }
            })
            .collect()
    }

    /// Map documents onto the learned vocabulary as TF-IDF rows.
    ///
    /// # Errors
    ///
    /// [`RecommendError::EmptyVocabulary`] if called before a successful `fit`.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Matrix<f64>> {
        let mut weights = self.count_vectorizer.transform(documents)?;
        if weights.n_cols() != self.idf_values.len() {
            return Err(RecommendError::DimensionMismatch {
                expected: format!("{} idf weights", weights.n_cols()),
                actual: self.idf_values.len().to_string(),
            });
        }

        for row_idx in 0..weights.n_rows() {
            for (x, idf) in weights.row_mut(row_idx).iter_mut().zip(&self.idf_values) {
                if *x > 0.0 {
                    let tf = if self.sublinear_tf { 1.0 + x.ln() } else { *x };
                    *x = tf * idf;
                }
            }
        }
        weights.normalize_rows_l2();
        Ok(weights)
    }

    /// `fit` followed by `transform` on the same documents.
    ///
    /// # Errors
    ///
    /// See [`TfidfVectorizer::fit`].
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Matrix<f64>> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// Learned terms in column order.
    #[must_use]
    pub fn vocabulary(&self) -> &[String] {
        self.count_vectorizer.vocabulary()
    }

    /// Number of learned terms.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.count_vectorizer.vocabulary_size()
    }

    /// Column of `term`, if it is in the vocabulary.
    #[must_use]
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.count_vectorizer.term_index(term)
    }

    /// Learned idf weight per column.
    #[must_use]
    pub fn idf(&self) -> &[f64] {
        &self.idf_values
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}
