//! User-user collaborative filtering.
//!
//! Each user is a vector of ratings over every catalog movie (0 where
//! unrated). Unseen movies are scored by the ratings of the users whose
//! vectors point the most in the same direction:
//!
//! ```text
//! score(m) = Σ over the k nearest users v of  sim(u, v) × rating(v, m)
//! ```

use super::cache::{DataVersion, VersionedCache};
use super::catalog::Catalog;
use super::config::{RecommenderConfig, DEFAULT_NEIGHBORS};
use super::index::EntityIndex;
use super::ratings::RatingStore;
use super::{top_n, MovieId, Recommendation, UserId};
use crate::primitives::Matrix;
use crate::similarity::{cosine_similarity_matrix, most_similar};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::debug;

/// Snapshot of the user rating space and its similarity matrix.
///
/// Row order is the user order of the [`RatingStore`] at build time and is
/// carried in `users`; columns of the rating matrix follow ascending movie id.
#[derive(Debug, Clone)]
pub struct UserSimilarity {
    users: EntityIndex<UserId>,
    movies: EntityIndex<MovieId>,
    ratings: Matrix<f64>,
    similarity: Matrix<f64>,
    version: DataVersion,
}

impl UserSimilarity {
    /// Build the users × movies rating matrix and its user × user cosine similarity.
    #[must_use]
    pub fn build(catalog: &Catalog, store: &RatingStore) -> Self {
        let users = EntityIndex::from_ids(store.known_users_in_insertion_order());
        let movies = EntityIndex::from_ids(catalog.all_ids_sorted());

        let mut ratings = Matrix::zeros(users.len(), movies.len());
        for (row, &user_id) in users.ids().iter().enumerate() {
            for (&movie_id, &score) in store.ratings_for(user_id) {
                if let Some(col) = movies.position(movie_id) {
                    ratings.set(row, col, score);
                }
            }
        }

        let similarity = cosine_similarity_matrix(&ratings);
        let version = DataVersion::new(catalog.version(), store.version());
        debug!(
            users = users.len(),
            movies = movies.len(),
            catalog_version = version.catalog,
            ratings_version = version.ratings,
            "built user similarity matrix"
        );

        Self {
            users,
            movies,
            ratings,
            similarity,
            version,
        }
    }

    /// User ↔ row map.
    #[must_use]
    pub fn users(&self) -> &EntityIndex<UserId> {
        &self.users
    }

    /// Movie ↔ column map of the rating matrix.
    #[must_use]
    pub fn movies(&self) -> &EntityIndex<MovieId> {
        &self.movies
    }

    /// Dense users × movies ratings.
    #[must_use]
    pub fn ratings(&self) -> &Matrix<f64> {
        &self.ratings
    }

    /// Users × users cosine similarity.
    #[must_use]
    pub fn similarity(&self) -> &Matrix<f64> {
        &self.similarity
    }

    /// Similarity between two users, if both were known at build time.
    #[must_use]
    pub fn between(&self, a: UserId, b: UserId) -> Option<f64> {
        Some(
            self.similarity
                .get(self.users.position(a)?, self.users.position(b)?),
        )
    }

    /// Source versions this snapshot reflects.
    #[must_use]
    pub fn version(&self) -> DataVersion {
        self.version
    }
}

/// Recommends unseen movies from the ratings of similar users.
///
/// The similarity snapshot is cached and rebuilt whenever the catalog or
/// rating store version moves. One recommender should be paired with a
/// single catalog and store.
#[derive(Debug)]
pub struct CollaborativeRecommender {
    neighbors: usize,
    cache: VersionedCache<UserSimilarity>,
}

impl CollaborativeRecommender {
    /// Create a recommender consulting `neighbors` similar users (at least one).
    #[must_use]
    pub fn new(neighbors: usize) -> Self {
        Self {
            neighbors: neighbors.max(1),
            cache: VersionedCache::new(),
        }
    }

    /// Create a recommender from configuration.
    #[must_use]
    pub fn from_config(config: &RecommenderConfig) -> Self {
        Self::new(config.neighbors)
    }

    /// Neighbour count.
    #[must_use]
    pub fn neighbors(&self) -> usize {
        self.neighbors
    }

    /// Current similarity snapshot, rebuilt if the sources changed.
    pub fn similarity(&self, catalog: &Catalog, store: &RatingStore) -> Arc<UserSimilarity> {
        let version = DataVersion::new(catalog.version(), store.version());
        self.cache
            .get_or_build(version, || UserSimilarity::build(catalog, store))
    }

    /// The most similar other users of `user_id`, best first.
    ///
    /// Ties keep first-rating order of the users. Empty for unknown users.
    pub fn nearest_users(
        &self,
        catalog: &Catalog,
        store: &RatingStore,
        user_id: UserId,
    ) -> Vec<(UserId, f64)> {
        let snapshot = self.similarity(catalog, store);
        Self::nearest_in(&snapshot, user_id, self.neighbors)
    }

    fn nearest_in(snapshot: &UserSimilarity, user_id: UserId, k: usize) -> Vec<(UserId, f64)> {
        let Some(row) = snapshot.users.position(user_id) else {
            return Vec::new();
        };
        most_similar(&snapshot.similarity, row, k)
            .into_iter()
            .filter_map(|(j, sim)| snapshot.users.id(j).map(|id| (id, sim)))
            .collect()
    }

    /// Top `n` movies `user_id` has not rated, by neighbour-weighted score.
    ///
    /// Empty for unknown users. Equal scores keep the order in which the
    /// movies were first reached while walking neighbours best-first.
    pub fn recommend(
        &self,
        catalog: &Catalog,
        store: &RatingStore,
        user_id: UserId,
        n: usize,
    ) -> Vec<Recommendation> {
        if !store.contains_user(user_id) {
            debug!(user_id, "no collaborative recommendations for unknown user");
            return Vec::new();
        }

        let snapshot = self.similarity(catalog, store);
        let seen = store.ratings_for(user_id);

        let mut scores: IndexMap<MovieId, f64> = IndexMap::new();
        for (neighbor, sim) in Self::nearest_in(&snapshot, user_id, self.neighbors) {
            for (&movie_id, &rating) in store.ratings_for(neighbor) {
                if !seen.contains_key(&movie_id) {
                    *scores.entry(movie_id).or_insert(0.0) += sim * rating;
                }
            }
        }

        top_n(
            scores.into_iter().filter_map(|(movie_id, score)| {
                catalog
                    .title(movie_id)
                    .map(|title| Recommendation::new(movie_id, title, score))
            }),
            n,
        )
    }
}

impl Default for CollaborativeRecommender {
    fn default() -> Self {
        Self::new(DEFAULT_NEIGHBORS)
    }
}

#[cfg(test)]
#[path = "collaborative_tests.rs"]
mod tests;
