//! The recommender facade: one catalog, one rating store, three queries.

use super::cache::DataVersion;
use super::catalog::{Catalog, Movie};
use super::collaborative::{CollaborativeRecommender, UserSimilarity};
use super::config::RecommenderConfig;
use super::content_based::{ContentRecommender, ContentSimilarity};
use super::hybrid::HybridRecommender;
use super::ratings::RatingStore;
use super::{MovieId, Recommendation, UserId};
use crate::error::Result;
use std::sync::Arc;

/// Hybrid movie recommender over an in-memory catalog and rating store.
///
/// Queries never fail: unknown users and movies produce empty lists.
/// Similarity matrices are built on the first query after a mutation and
/// reused until the next one.
///
/// # Examples
///
/// ```
/// use movierec::recommend::{MovieRecommender, RecommenderConfig};
///
/// let config = RecommenderConfig::new().with_neighbors(3);
/// let mut recommender = MovieRecommender::with_config(config).expect("valid config");
///
/// recommender.add_movie(3, "Inception", "Sci-Fi Action", "A thief steals secrets through dreams.");
/// recommender.add_movie(2, "The Dark Knight", "Action", "Batman fights the Joker.");
/// assert!(recommender.add_rating(1, 2, 4.0));
/// assert!(!recommender.add_rating(1, 99, 4.0));
///
/// let recs = recommender.hybrid_recommendations(1, 5);
/// assert_eq!(recs[0].title, "Inception");
/// ```
#[derive(Debug)]
pub struct MovieRecommender {
    catalog: Catalog,
    ratings: RatingStore,
    config: RecommenderConfig,
    collaborative: CollaborativeRecommender,
    content: ContentRecommender,
    hybrid: HybridRecommender,
}

impl MovieRecommender {
    /// Create an empty recommender with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::build(RecommenderConfig::default())
    }

    /// Create an empty recommender with `config`.
    ///
    /// # Errors
    ///
    /// [`RecommendError::InvalidHyperparameter`](crate::RecommendError::InvalidHyperparameter)
    /// if `config` fails validation.
    pub fn with_config(config: RecommenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: RecommenderConfig) -> Self {
        Self {
            catalog: Catalog::new(),
            ratings: RatingStore::new(),
            collaborative: CollaborativeRecommender::from_config(&config),
            content: ContentRecommender::from_config(&config),
            hybrid: HybridRecommender::from_config(&config),
            config,
        }
    }

    /// Insert or overwrite a movie, returning the previous entry.
    pub fn add_movie(
        &mut self,
        id: MovieId,
        title: impl Into<String>,
        genre: impl Into<String>,
        description: impl Into<String>,
    ) -> Option<Movie> {
        self.catalog.add_movie(id, title, genre, description)
    }

    /// Store or overwrite a rating. Ratings for unknown movies are ignored.
    ///
    /// Returns whether the rating was stored.
    pub fn add_rating(&mut self, user_id: UserId, movie_id: MovieId, score: f64) -> bool {
        self.ratings.add_rating(&self.catalog, user_id, movie_id, score)
    }

    /// Top `n` unseen movies for `user_id` from similar users' ratings.
    pub fn collaborative_recommendations(&self, user_id: UserId, n: usize) -> Vec<Recommendation> {
        self.collaborative
            .recommend(&self.catalog, &self.ratings, user_id, n)
    }

    /// Top `n` movies most similar in text to `movie_id`.
    pub fn content_recommendations(&self, movie_id: MovieId, n: usize) -> Vec<Recommendation> {
        self.content.recommend(&self.catalog, movie_id, n)
    }

    /// Top `n` movies for `user_id` by weighted blend of both signals.
    pub fn hybrid_recommendations(&self, user_id: UserId, n: usize) -> Vec<Recommendation> {
        self.hybrid.recommend(
            &self.collaborative,
            &self.content,
            &self.catalog,
            &self.ratings,
            user_id,
            n,
        )
    }

    /// Current user similarity snapshot.
    pub fn user_similarity(&self) -> Arc<UserSimilarity> {
        self.collaborative.similarity(&self.catalog, &self.ratings)
    }

    /// Current movie content similarity snapshot.
    pub fn content_similarity(&self) -> Arc<ContentSimilarity> {
        self.content.similarity(&self.catalog)
    }

    /// The movie catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The rating store.
    #[must_use]
    pub fn ratings(&self) -> &RatingStore {
        &self.ratings
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Versions of the catalog and rating store.
    #[must_use]
    pub fn data_version(&self) -> DataVersion {
        DataVersion::new(self.catalog.version(), self.ratings.version())
    }
}

impl Default for MovieRecommender {
    fn default() -> Self {
        Self::new()
    }
}
