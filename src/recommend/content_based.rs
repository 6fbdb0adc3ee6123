//! Content-based recommendation.
//!
//! Movies are compared through TF-IDF vectors of their title, genre and
//! description. Two movies sharing rare terms (a genre word, a character
//! name) score higher than two sharing only common ones.

use super::cache::{DataVersion, VersionedCache};
use super::catalog::Catalog;
use super::config::{RecommenderConfig, TextConfig};
use super::index::EntityIndex;
use super::{MovieId, Recommendation};
use crate::primitives::Matrix;
use crate::similarity::{cosine_similarity_matrix, most_similar};
use std::sync::Arc;
use tracing::debug;

/// Snapshot of the movie feature space and its similarity matrix.
///
/// Rows follow ascending movie id.
#[derive(Debug, Clone)]
pub struct ContentSimilarity {
    movies: EntityIndex<MovieId>,
    features: Matrix<f64>,
    vocabulary: Vec<String>,
    similarity: Matrix<f64>,
    version: DataVersion,
}

impl ContentSimilarity {
    /// Vectorize every catalog movie and compute movie × movie similarity.
    ///
    /// A catalog whose text yields no vocabulary terms at all produces a
    /// zero-width feature matrix and an all-zero similarity matrix.
    #[must_use]
    pub fn build(catalog: &Catalog, text: &TextConfig) -> Self {
        let movies = EntityIndex::from_ids(catalog.all_ids_sorted());
        let documents: Vec<String> = catalog.iter().map(|m| m.document()).collect();

        let mut vectorizer = text.vectorizer();
        let (features, vocabulary) = if documents.is_empty() {
            (Matrix::zeros(0, 0), Vec::new())
        } else {
            match vectorizer.fit_transform(&documents) {
                Ok(features) => (features, vectorizer.vocabulary().to_vec()),
                Err(err) => {
                    debug!(movies = movies.len(), error = %err, "no content features, similarity degrades to zero");
                    (Matrix::zeros(movies.len(), 0), Vec::new())
                }
            }
        };

        let similarity = cosine_similarity_matrix(&features);
        let version = DataVersion::catalog_only(catalog.version());
        debug!(
            movies = movies.len(),
            vocabulary = vocabulary.len(),
            catalog_version = version.catalog,
            "built content similarity matrix"
        );

        Self {
            movies,
            features,
            vocabulary,
            similarity,
            version,
        }
    }

    /// Movie ↔ row map.
    #[must_use]
    pub fn movies(&self) -> &EntityIndex<MovieId> {
        &self.movies
    }

    /// Movies × vocabulary TF-IDF weights, rows L2-normalized.
    #[must_use]
    pub fn features(&self) -> &Matrix<f64> {
        &self.features
    }

    /// Feature column terms.
    #[must_use]
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Movies × movies cosine similarity.
    #[must_use]
    pub fn similarity(&self) -> &Matrix<f64> {
        &self.similarity
    }

    /// Similarity between two movies, if both were in the catalog at build time.
    #[must_use]
    pub fn between(&self, a: MovieId, b: MovieId) -> Option<f64> {
        Some(
            self.similarity
                .get(self.movies.position(a)?, self.movies.position(b)?),
        )
    }

    /// Source version this snapshot reflects.
    #[must_use]
    pub fn version(&self) -> DataVersion {
        self.version
    }
}

/// Recommends movies whose text resembles a reference movie.
///
/// The similarity snapshot is cached and rebuilt whenever the catalog
/// version moves. One recommender should be paired with a single catalog.
#[derive(Debug)]
pub struct ContentRecommender {
    text: TextConfig,
    cache: VersionedCache<ContentSimilarity>,
}

impl ContentRecommender {
    /// Create a recommender with the given text settings.
    #[must_use]
    pub fn new(text: TextConfig) -> Self {
        Self {
            text,
            cache: VersionedCache::new(),
        }
    }

    /// Create a recommender from configuration.
    #[must_use]
    pub fn from_config(config: &RecommenderConfig) -> Self {
        Self::new(config.text.clone())
    }

    /// Current similarity snapshot, rebuilt if the catalog changed.
    pub fn similarity(&self, catalog: &Catalog) -> Arc<ContentSimilarity> {
        let version = DataVersion::catalog_only(catalog.version());
        self.cache
            .get_or_build(version, || ContentSimilarity::build(catalog, &self.text))
    }

    /// Top `n` other movies by similarity to `movie_id`.
    ///
    /// Never includes `movie_id` itself. Equal similarities are ordered by
    /// ascending movie id. Empty for unknown movies.
    pub fn recommend(
        &self,
        catalog: &Catalog,
        movie_id: MovieId,
        n: usize,
    ) -> Vec<Recommendation> {
        if !catalog.has(movie_id) {
            debug!(movie_id, "no content recommendations for unknown movie");
            return Vec::new();
        }

        let snapshot = self.similarity(catalog);
        let Some(row) = snapshot.movies.position(movie_id) else {
            return Vec::new();
        };

        most_similar(&snapshot.similarity, row, n)
            .into_iter()
            .filter_map(|(j, sim)| {
                let id = snapshot.movies.id(j)?;
                catalog
                    .title(id)
                    .map(|title| Recommendation::new(id, title, sim))
            })
            .collect()
    }
}

impl Default for ContentRecommender {
    fn default() -> Self {
        Self::new(TextConfig::default())
    }
}

#[cfg(test)]
#[path = "content_based_tests.rs"]
mod tests;
