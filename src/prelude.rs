//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use movierec::prelude::*;
//! ```

pub use crate::error::{RecommendError, Result};
pub use crate::primitives::Matrix;
pub use crate::recommend::{
    Catalog, CollaborativeRecommender, ContentRecommender, HybridRecommender, MergeKey, Movie,
    MovieId, MovieRecommender, RatingStore, Recommendation, RecommenderConfig, TextConfig,
    UserId, DEFAULT_RECOMMENDATIONS,
};
pub use crate::similarity::{cosine_similarity, pairwise_cosine_similarity};
pub use crate::text::vectorize::{CountVectorizer, TfidfVectorizer};
