//! Weighted blend of collaborative and content-based results.
//!
//! ```text
//! score(m) = w_collab × collab(m) + w_content × content(m)
//! ```
//!
//! A movie present in only one list keeps only that weighted contribution;
//! weights are not renormalized when a list is empty.

use super::catalog::Catalog;
use super::collaborative::CollaborativeRecommender;
use super::config::{
    MergeKey, RecommenderConfig, DEFAULT_COLLABORATIVE_WEIGHT, DEFAULT_CONTENT_WEIGHT,
};
use super::content_based::ContentRecommender;
use super::ratings::RatingStore;
use super::{top_n, MovieId, Recommendation, UserId};
use indexmap::IndexMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum MergeSlot {
    Movie(MovieId),
    Title(String),
}

/// Blends the two recommenders' lists for one user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HybridRecommender {
    collaborative_weight: f64,
    content_weight: f64,
    merge_key: MergeKey,
}

impl HybridRecommender {
    /// Create a blender with the given weights, merging by movie id.
    #[must_use]
    pub fn new(collaborative_weight: f64, content_weight: f64) -> Self {
        Self {
            collaborative_weight,
            content_weight,
            merge_key: MergeKey::MovieId,
        }
    }

    /// Create a blender from configuration.
    #[must_use]
    pub fn from_config(config: &RecommenderConfig) -> Self {
        Self::new(config.collaborative_weight, config.content_weight)
            .with_merge_key(config.merge_key)
    }

    /// Set what identifies the same movie across lists.
    #[must_use]
    pub fn with_merge_key(mut self, merge_key: MergeKey) -> Self {
        self.merge_key = merge_key;
        self
    }

    /// Collaborative weight.
    #[must_use]
    pub fn collaborative_weight(&self) -> f64 {
        self.collaborative_weight
    }

    /// Content weight.
    #[must_use]
    pub fn content_weight(&self) -> f64 {
        self.content_weight
    }

    /// Merge identity.
    #[must_use]
    pub fn merge_key(&self) -> MergeKey {
        self.merge_key
    }

    fn slot(&self, rec: &Recommendation) -> MergeSlot {
        match self.merge_key {
            MergeKey::MovieId => MergeSlot::Movie(rec.movie_id),
            MergeKey::Title => MergeSlot::Title(rec.title.clone()),
        }
    }

    /// Combine two ranked lists into the top `n` by blended score.
    ///
    /// Collaborative entries are merged first, then content entries; a
    /// movie present in both accumulates both weighted scores. Equal
    /// blended scores keep first-merge order.
    ///
    /// # Examples
    ///
    /// ```
    /// use movierec::recommend::{HybridRecommender, Recommendation};
    ///
    /// let hybrid = HybridRecommender::default();
    /// let collaborative = vec![Recommendation::new(3, "Inception", 2.0)];
    /// let content = vec![
    ///     Recommendation::new(3, "Inception", 1.0),
    ///     Recommendation::new(5, "Fight Club", 1.0),
    /// ];
    ///
    /// let blended = hybrid.blend(&collaborative, &content, 5);
    /// assert_eq!(blended[0].movie_id, 3);
    /// assert!((blended[0].score - (0.7 * 2.0 + 0.3 * 1.0)).abs() < 1e-12);
    /// assert!((blended[1].score - 0.3).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn blend(
        &self,
        collaborative: &[Recommendation],
        content: &[Recommendation],
        n: usize,
    ) -> Vec<Recommendation> {
        let mut merged: IndexMap<MergeSlot, Recommendation> = IndexMap::new();
        let weighted = collaborative
            .iter()
            .map(|rec| (rec, self.collaborative_weight))
            .chain(content.iter().map(|rec| (rec, self.content_weight)));

        for (rec, weight) in weighted {
            merged
                .entry(self.slot(rec))
                .and_modify(|entry| entry.score += weight * rec.score)
                .or_insert_with(|| {
                    Recommendation::new(rec.movie_id, rec.title.clone(), weight * rec.score)
                });
        }

        top_n(merged.into_values(), n)
    }

    /// Blended recommendations for `user_id`.
    ///
    /// Content results are taken relative to the movie the user rated
    /// most recently. Empty for unknown users.
    pub fn recommend(
        &self,
        collaborative: &CollaborativeRecommender,
        content: &ContentRecommender,
        catalog: &Catalog,
        store: &RatingStore,
        user_id: UserId,
        n: usize,
    ) -> Vec<Recommendation> {
        let Some(reference) = store.last_rated(user_id) else {
            debug!(user_id, "no hybrid recommendations for user without ratings");
            return Vec::new();
        };

        let collab_recs = collaborative.recommend(catalog, store, user_id, n);
        let content_recs = content.recommend(catalog, reference, n);
        debug!(
            user_id,
            reference,
            collaborative = collab_recs.len(),
            content = content_recs.len(),
            "blending hybrid recommendations"
        );

        self.blend(&collab_recs, &content_recs, n)
    }
}

impl Default for HybridRecommender {
    fn default() -> Self {
        Self::new(DEFAULT_COLLABORATIVE_WEIGHT, DEFAULT_CONTENT_WEIGHT)
    }
}
