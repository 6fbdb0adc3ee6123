//! Property-based tests using proptest.
//!
//! These tests verify the similarity and ranking invariants of the engine.

use movierec::prelude::*;
use movierec::recommend::{ContentSimilarity, UserSimilarity};
use movierec::similarity::cosine_similarity_matrix;
use proptest::prelude::*;

const WORDS: [&str; 12] = [
    "drama", "crime", "action", "heist", "dream", "prison", "mafia", "joker", "club", "space",
    "the", "of",
];

// Strategy for generating small dense matrices, zero rows included
fn matrix_strategy() -> impl Strategy<Value = Matrix<f64>> {
    (1usize..8, 0usize..6).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(prop_oneof![Just(0.0), -5.0f64..5.0], rows * cols).prop_map(
            move |data| Matrix::from_vec(rows, cols, data).expect("Test data should be valid"),
        )
    })
}

// Strategy for movie text drawn from a small shared vocabulary
fn movie_text_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::sample::select(WORDS.to_vec()), 0..6)
        .prop_map(|words| words.join(" "))
}

// Strategy for a populated recommender: movie texts plus (user, movie, score) triples
fn recommender_strategy() -> impl Strategy<Value = MovieRecommender> {
    (
        proptest::collection::vec(movie_text_strategy(), 1..8),
        proptest::collection::vec((0u32..5, 0u32..10, 0.5f64..5.0), 0..30),
    )
        .prop_map(|(texts, ratings)| {
            let mut rec = MovieRecommender::new();
            for (id, text) in texts.iter().enumerate() {
                rec.add_movie(id as u32, format!("Movie {id}"), "", text.clone());
            }
            for (user, movie, score) in ratings {
                rec.add_rating(user, movie, score);
            }
            rec
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn similarity_is_symmetric(m in matrix_strategy()) {
        let sim = cosine_similarity_matrix(&m);
        let n = m.n_rows();
        for i in 0..n {
            for j in 0..n {
                prop_assert_eq!(sim.get(i, j).to_bits(), sim.get(j, i).to_bits());
            }
        }
    }

    #[test]
    fn self_similarity_is_one_or_zero(m in matrix_strategy()) {
        let sim = cosine_similarity_matrix(&m);
        let norms = m.row_norms();
        for (i, norm) in norms.iter().enumerate() {
            let expected = if *norm == 0.0 { 0.0 } else { 1.0 };
            prop_assert_eq!(sim.get(i, i), expected);
        }
    }

    #[test]
    fn similarity_is_bounded(m in matrix_strategy()) {
        let sim = cosine_similarity_matrix(&m);
        for value in sim.as_slice() {
            prop_assert!(value.is_finite());
            prop_assert!(value.abs() <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn rebuild_is_idempotent(m in matrix_strategy()) {
        prop_assert_eq!(cosine_similarity_matrix(&m), cosine_similarity_matrix(&m));
    }

    #[test]
    fn content_never_recommends_self(rec in recommender_strategy(), n in 0usize..10) {
        for id in rec.catalog().all_ids_sorted() {
            let recs = rec.content_recommendations(id, n);
            prop_assert!(recs.len() <= n);
            prop_assert!(recs.iter().all(|r| r.movie_id != id));
        }
    }

    #[test]
    fn collaborative_never_recommends_rated(rec in recommender_strategy()) {
        for user in 0u32..5 {
            for r in rec.collaborative_recommendations(user, 10) {
                prop_assert!(rec.ratings().rating(user, r.movie_id).is_none());
            }
        }
    }

    #[test]
    fn rankings_are_sorted(rec in recommender_strategy()) {
        for user in 0u32..5 {
            let recs = rec.hybrid_recommendations(user, 10);
            prop_assert!(recs.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }

    #[test]
    fn snapshots_are_idempotent(rec in recommender_strategy()) {
        let users = UserSimilarity::build(rec.catalog(), rec.ratings());
        let content = ContentSimilarity::build(rec.catalog(), &rec.config().text);
        let cached_users = rec.user_similarity();
        let cached_content = rec.content_similarity();
        prop_assert_eq!(users.similarity(), cached_users.similarity());
        prop_assert_eq!(content.similarity(), cached_content.similarity());
    }
}
