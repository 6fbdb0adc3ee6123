//! Recommender configuration.
//!
//! All fields have defaults, so partial JSON documents are accepted:
//!
//! ```
//! use movierec::recommend::{MergeKey, RecommenderConfig};
//!
//! let config = RecommenderConfig::from_json(r#"{ "neighbors": 3, "merge_key": "title" }"#)
//!     .expect("valid config");
//! assert_eq!(config.neighbors, 3);
//! assert_eq!(config.merge_key, MergeKey::Title);
//! assert_eq!(config.collaborative_weight, 0.7);
//! ```

use crate::error::{RecommendError, Result};
use crate::text::tokenize::TermTokenizer;
use crate::text::vectorize::TfidfVectorizer;
use serde::{Deserialize, Serialize};

/// Default neighbour count for collaborative scoring.
pub const DEFAULT_NEIGHBORS: usize = 5;

/// Default weight of collaborative scores in the hybrid blend.
pub const DEFAULT_COLLABORATIVE_WEIGHT: f64 = 0.7;

/// Default weight of content scores in the hybrid blend.
pub const DEFAULT_CONTENT_WEIGHT: f64 = 0.3;

/// What identifies "the same movie" when blending the two lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeKey {
    /// Merge by movie id; distinct movies sharing a title stay distinct.
    #[default]
    MovieId,
    /// Merge by title string; distinct movies sharing a title collapse
    /// into one entry carrying the first id seen.
    Title,
}

/// TF-IDF settings for movie text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Case-fold terms
    pub lowercase: bool,
    /// Drop English stop words
    pub english_stop_words: bool,
    /// Shortest term kept, in characters
    pub min_token_len: usize,
    /// Use `1 + ln(tf)` instead of raw counts
    pub sublinear_tf: bool,
    /// Smooth idf by adding one to N and every df
    pub smooth_idf: bool,
    /// Minimum number of movies a term must appear in
    pub min_df: usize,
    /// Maximum fraction of movies a term may appear in
    pub max_df: f64,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            english_stop_words: true,
            min_token_len: 2,
            sublinear_tf: false,
            smooth_idf: true,
            min_df: 1,
            max_df: 1.0,
        }
    }
}

impl TextConfig {
    /// An unfitted vectorizer with these settings.
    #[must_use]
    pub fn vectorizer(&self) -> TfidfVectorizer {
        let vectorizer = TfidfVectorizer::new()
            .with_tokenizer(Box::new(
                TermTokenizer::new().with_min_len(self.min_token_len),
            ))
            .with_lowercase(self.lowercase)
            .with_sublinear_tf(self.sublinear_tf)
            .with_smooth_idf(self.smooth_idf)
            .with_min_df(self.min_df)
            .with_max_df(self.max_df);

        if self.english_stop_words {
            vectorizer.with_stop_words_english()
        } else {
            vectorizer
        }
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// [`RecommendError::InvalidHyperparameter`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        if self.min_token_len == 0 {
            return Err(invalid("text.min_token_len", self.min_token_len, ">= 1"));
        }
        if self.min_df == 0 {
            return Err(invalid("text.min_df", self.min_df, ">= 1"));
        }
        if !(self.max_df > 0.0 && self.max_df <= 1.0) {
            return Err(invalid("text.max_df", self.max_df, "in (0, 1]"));
        }
        Ok(())
    }
}

/// Top-level recommender settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Most similar users consulted for collaborative scoring
    pub neighbors: usize,
    /// Multiplier for collaborative scores in the hybrid blend
    pub collaborative_weight: f64,
    /// Multiplier for content scores in the hybrid blend
    pub content_weight: f64,
    /// Identity used when blending
    pub merge_key: MergeKey,
    /// Content vectorization
    pub text: TextConfig,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            neighbors: DEFAULT_NEIGHBORS,
            collaborative_weight: DEFAULT_COLLABORATIVE_WEIGHT,
            content_weight: DEFAULT_CONTENT_WEIGHT,
            merge_key: MergeKey::default(),
            text: TextConfig::default(),
        }
    }
}

impl RecommenderConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the neighbour count.
    #[must_use]
    pub fn with_neighbors(mut self, neighbors: usize) -> Self {
        self.neighbors = neighbors;
        self
    }

    /// Set both blend weights.
    #[must_use]
    pub fn with_weights(mut self, collaborative: f64, content: f64) -> Self {
        self.collaborative_weight = collaborative;
        self.content_weight = content;
        self
    }

    /// Set the blend identity.
    #[must_use]
    pub fn with_merge_key(mut self, merge_key: MergeKey) -> Self {
        self.merge_key = merge_key;
        self
    }

    /// Replace the text settings.
    #[must_use]
    pub fn with_text(mut self, text: TextConfig) -> Self {
        self.text = text;
        self
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// [`RecommendError::InvalidHyperparameter`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        if self.neighbors == 0 {
            return Err(invalid("neighbors", self.neighbors, ">= 1"));
        }
        for (param, weight) in [
            ("collaborative_weight", self.collaborative_weight),
            ("content_weight", self.content_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(invalid(param, weight, "finite and >= 0"));
            }
        }
        self.text.validate()
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// [`RecommendError::Config`] for malformed JSON, otherwise see
    /// [`RecommenderConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// [`RecommendError::Config`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn invalid(param: &str, value: impl ToString, constraint: &str) -> RecommendError {
    RecommendError::InvalidHyperparameter {
        param: param.to_string(),
        value: value.to_string(),
        constraint: constraint.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RecommenderConfig::default();
        assert_eq!(config.neighbors, 5);
        assert_eq!(config.collaborative_weight, 0.7);
        assert_eq!(config.content_weight, 0.3);
        assert_eq!(config.merge_key, MergeKey::MovieId);
        assert!(config.text.english_stop_words);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = RecommenderConfig::new()
            .with_neighbors(2)
            .with_weights(0.5, 0.5)
            .with_merge_key(MergeKey::Title)
            .with_text(TextConfig {
                sublinear_tf: true,
                ..TextConfig::default()
            });
        assert_eq!(config.neighbors, 2);
        assert_eq!(config.content_weight, 0.5);
        assert_eq!(config.merge_key, MergeKey::Title);
        assert!(config.text.sublinear_tf);
    }

    #[test]
    fn test_validate_rejects_zero_neighbors() {
        let err = RecommenderConfig::new()
            .with_neighbors(0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("neighbors"));
    }

    #[test]
    fn test_validate_rejects_bad_weights() {
        assert!(RecommenderConfig::new()
            .with_weights(-0.1, 0.3)
            .validate()
            .is_err());
        assert!(RecommenderConfig::new()
            .with_weights(0.7, f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_bad_text_settings() {
        let mut config = RecommenderConfig::new();
        config.text.max_df = 0.0;
        assert!(config.validate().is_err());

        let mut config = RecommenderConfig::new();
        config.text.min_df = 0;
        assert!(config.validate().is_err());

        let mut config = RecommenderConfig::new();
        config.text.min_token_len = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = RecommenderConfig::new()
            .with_neighbors(3)
            .with_merge_key(MergeKey::Title);
        let json = config.to_json().expect("serializes");
        assert!(json.contains("\"merge_key\": \"title\""));
        let parsed = RecommenderConfig::from_json(&json).expect("parses");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_from_json_partial_text_section() {
        let config = RecommenderConfig::from_json(r#"{ "text": { "sublinear_tf": true } }"#)
            .expect("valid config");
        assert!(config.text.sublinear_tf);
        assert!(config.text.smooth_idf);
        assert_eq!(config.neighbors, DEFAULT_NEIGHBORS);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            RecommenderConfig::from_json("{ not json"),
            Err(RecommendError::Config(_))
        ));
        assert!(matches!(
            RecommenderConfig::from_json(r#"{ "neighbors": 0 }"#),
            Err(RecommendError::InvalidHyperparameter { .. })
        ));
    }

    #[test]
    fn test_text_vectorizer_respects_stop_word_flag() {
        let docs = ["the crime drama"];

        let mut with_stop = TextConfig::default().vectorizer();
        with_stop.fit(&docs).expect("fit should succeed");
        assert!(with_stop.term_index("the").is_none());

        let mut without_stop = TextConfig {
            english_stop_words: false,
            ..TextConfig::default()
        }
        .vectorizer();
        without_stop.fit(&docs).expect("fit should succeed");
        assert!(without_stop.term_index("the").is_some());
    }
}
