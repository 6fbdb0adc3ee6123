//! Recommendation systems.
//!
//! Hybrid movie recommendation over an in-memory catalog and rating store:
//!
//! - **Collaborative**: user-user cosine similarity over rating vectors;
//!   unseen movies are scored by the ratings of the most similar users.
//! - **Content-Based**: movie-movie cosine similarity over TF-IDF vectors of
//!   title, genre and description.
//! - **Hybrid**: weighted, additive blend of both lists.
//!
//! Similarity matrices are derived state. Each is cached together with the
//! id ↔ row maps it was built with and the data version it reflects, and is
//! rebuilt on the next query after any accepted mutation.
//!
//! # Quick Start
//!
//! ```
//! use movierec::recommend::{MovieRecommender, DEFAULT_RECOMMENDATIONS};
//!
//! let mut recommender = MovieRecommender::new();
//! recommender.add_movie(0, "The Shawshank Redemption", "Drama", "Two imprisoned men bond over a number of years.");
//! recommender.add_movie(1, "Fight Club", "Drama", "An insomniac office worker forms an underground fight club.");
//! recommender.add_movie(2, "The Dark Knight", "Action", "Batman fights against the Joker.");
//!
//! recommender.add_rating(1, 0, 5.0);
//! recommender.add_rating(2, 0, 4.0);
//! recommender.add_rating(2, 1, 4.5);
//!
//! let similar = recommender.content_recommendations(0, DEFAULT_RECOMMENDATIONS);
//! assert_eq!(similar[0].title, "Fight Club");
//!
//! let for_user = recommender.collaborative_recommendations(1, DEFAULT_RECOMMENDATIONS);
//! assert_eq!(for_user[0].title, "Fight Club");
//! ```

pub mod cache;
pub mod catalog;
pub mod collaborative;
pub mod config;
pub mod content_based;
pub mod engine;
pub mod hybrid;
pub mod index;
pub mod ratings;

pub use cache::{DataVersion, VersionedCache};
pub use catalog::{Catalog, Movie};
pub use collaborative::{CollaborativeRecommender, UserSimilarity};
pub use config::{MergeKey, RecommenderConfig, TextConfig};
pub use content_based::{ContentRecommender, ContentSimilarity};
pub use engine::MovieRecommender;
pub use hybrid::HybridRecommender;
pub use index::EntityIndex;
pub use ratings::{RatingStore, UserRatings};

use crate::similarity::by_score_desc;
use serde::{Deserialize, Serialize};

/// Movie identifier, assigned by the caller.
pub type MovieId = u32;

/// User identifier.
pub type UserId = u32;

/// Conventional number of results per query.
pub const DEFAULT_RECOMMENDATIONS: usize = 5;

/// One ranked result.
///
/// The score is a weighted rating sum (collaborative), a cosine similarity
/// (content-based) or the weighted blend of both (hybrid).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Recommended movie
    pub movie_id: MovieId,
    /// Its catalog title
    pub title: String,
    /// Ranking score, higher is better
    pub score: f64,
}

impl Recommendation {
    /// Create a recommendation.
    pub fn new(movie_id: MovieId, title: impl Into<String>, score: f64) -> Self {
        Self {
            movie_id,
            title: title.into(),
            score,
        }
    }

    /// The `(title, score)` pair view.
    #[must_use]
    pub fn as_pair(&self) -> (&str, f64) {
        (&self.title, self.score)
    }
}

/// Keep the `n` best candidates by descending score.
///
/// Candidates arrive in first-appearance order; equal scores keep that order.
pub(crate) fn top_n<I>(candidates: I, n: usize) -> Vec<Recommendation>
where
    I: IntoIterator<Item = Recommendation>,
{
    let mut ranked: Vec<(usize, Recommendation)> = candidates.into_iter().enumerate().collect();
    ranked.sort_by(|a, b| by_score_desc(a.1.score, b.1.score).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter().take(n).map(|(_, rec)| rec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n_orders_by_score_then_arrival() {
        let candidates = vec![
            Recommendation::new(4, "Pulp Fiction", 1.0),
            Recommendation::new(3, "Inception", 2.0),
            Recommendation::new(5, "Fight Club", 1.0),
            Recommendation::new(1, "The Godfather", 0.5),
        ];

        let ranked = top_n(candidates, 3);
        let ids: Vec<MovieId> = ranked.iter().map(|r| r.movie_id).collect();
        assert_eq!(ids, vec![3, 4, 5]);
    }

    #[test]
    fn test_top_n_clamps() {
        let ranked = top_n(vec![Recommendation::new(0, "Only", 1.0)], 5);
        assert_eq!(ranked.len(), 1);
        assert!(top_n(Vec::new(), 5).is_empty());
        assert!(top_n(vec![Recommendation::new(0, "Only", 1.0)], 0).is_empty());
    }

    #[test]
    fn test_as_pair() {
        let rec = Recommendation::new(3, "Inception", 0.25);
        assert_eq!(rec.as_pair(), ("Inception", 0.25));
    }
}
