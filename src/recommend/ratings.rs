//! Sparse per-user ratings.

use super::catalog::Catalog;
use super::{MovieId, UserId};
use indexmap::IndexMap;
use tracing::trace;

/// One user's ratings, in the order the movies were first rated.
pub type UserRatings = IndexMap<MovieId, f64>;

/// Source of truth for ratings: user id → (movie id → score).
///
/// Users are kept in the order they first rated something, and each
/// user's movies in the order they were first rated. Re-rating a movie
/// replaces the score without moving it.
#[derive(Debug, Clone, Default)]
pub struct RatingStore {
    ratings: IndexMap<UserId, UserRatings>,
    empty: UserRatings,
    version: u64,
}

impl RatingStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or overwrite `score` for (`user_id`, `movie_id`).
    ///
    /// Ratings for movies missing from `catalog` are ignored and leave the
    /// store untouched. Returns whether the rating was stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use movierec::recommend::{Catalog, RatingStore};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.add_movie(0, "The Shawshank Redemption", "Drama", "");
    ///
    /// let mut ratings = RatingStore::new();
    /// assert!(ratings.add_rating(&catalog, 1, 0, 5.0));
    /// assert!(!ratings.add_rating(&catalog, 1, 42, 3.0));
    /// assert_eq!(ratings.ratings_for(1).len(), 1);
    /// ```
    pub fn add_rating(
        &mut self,
        catalog: &Catalog,
        user_id: UserId,
        movie_id: MovieId,
        score: f64,
    ) -> bool {
        if !catalog.has(movie_id) {
            trace!(user_id, movie_id, "ignoring rating for unknown movie");
            return false;
        }
        self.ratings
            .entry(user_id)
            .or_default()
            .insert(movie_id, score);
        self.version += 1;
        true
    }

    /// Ratings of `user_id`; empty for unknown users.
    #[must_use]
    pub fn ratings_for(&self, user_id: UserId) -> &UserRatings {
        self.ratings.get(&user_id).unwrap_or(&self.empty)
    }

    /// Whether `user_id` has rated anything.
    #[must_use]
    pub fn contains_user(&self, user_id: UserId) -> bool {
        self.ratings.contains_key(&user_id)
    }

    /// Score `user_id` gave `movie_id`, if any.
    #[must_use]
    pub fn rating(&self, user_id: UserId, movie_id: MovieId) -> Option<f64> {
        self.ratings_for(user_id).get(&movie_id).copied()
    }

    /// User ids in the order they first appeared.
    #[must_use]
    pub fn known_users_in_insertion_order(&self) -> Vec<UserId> {
        self.ratings.keys().copied().collect()
    }

    /// The movie most recently added to `user_id`'s ratings.
    ///
    /// Insertion order, not time: overwriting an older rating does not make
    /// it the most recent.
    #[must_use]
    pub fn last_rated(&self, user_id: UserId) -> Option<MovieId> {
        self.ratings
            .get(&user_id)
            .and_then(|r| r.last())
            .map(|(&movie_id, _)| movie_id)
    }

    /// Number of known users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    /// Whether no ratings have been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Mutation counter, bumped by every stored rating.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }
}
