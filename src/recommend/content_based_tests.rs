pub(crate) use super::*;

fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add_movie(0, "The Shawshank Redemption", "Drama", "Two imprisoned men bond over a number of years.");
    catalog.add_movie(1, "The Godfather", "Crime Drama", "The aging patriarch of an organized crime dynasty transfers control.");
    catalog.add_movie(2, "The Dark Knight", "Action", "Batman fights against the Joker terrorizing Gotham City.");
    catalog.add_movie(3, "Inception", "Sci-Fi Action", "A thief who steals corporate secrets through dreams.");
    catalog.add_movie(4, "Pulp Fiction", "Crime Drama", "Various interconnected stories of criminals in Los Angeles.");
    catalog.add_movie(5, "Fight Club", "Drama", "An insomniac office worker and a soap maker form an underground fight club.");
    catalog
}

#[test]
fn test_content_similarity_layout() {
    let catalog = sample_catalog();
    let snapshot = ContentSimilarity::build(&catalog, &TextConfig::default());

    assert_eq!(snapshot.movies().ids(), &[0, 1, 2, 3, 4, 5]);
    assert_eq!(snapshot.features().n_rows(), 6);
    assert_eq!(snapshot.features().n_cols(), snapshot.vocabulary().len());
    assert_eq!(snapshot.similarity().shape(), (6, 6));
    assert!(snapshot.similarity().is_symmetric(0.0));
    assert!(snapshot.vocabulary().iter().any(|t| t == "drama"));
    assert!(!snapshot.vocabulary().iter().any(|t| t == "the"));
}

#[test]
fn test_shared_genre_scores_above_unrelated() {
    let catalog = sample_catalog();
    let snapshot = ContentSimilarity::build(&catalog, &TextConfig::default());

    let fight_club = snapshot.between(0, 5).expect("both known");
    let dark_knight = snapshot.between(0, 2).expect("both known");
    assert!(fight_club > 0.0);
    assert_eq!(dark_knight, 0.0);
}

#[test]
fn test_recommend_excludes_reference_movie() {
    let catalog = sample_catalog();
    let recommender = ContentRecommender::default();

    for id in catalog.all_ids_sorted() {
        let recs = recommender.recommend(&catalog, id, 10);
        assert_eq!(recs.len(), 5);
        assert!(recs.iter().all(|r| r.movie_id != id));
    }
}

#[test]
fn test_recommend_dark_knight() {
    let catalog = sample_catalog();
    let recommender = ContentRecommender::default();

    let recs = recommender.recommend(&catalog, 2, 5);
    let ids: Vec<MovieId> = recs.iter().map(|r| r.movie_id).collect();
    // "action" is the only shared term; the rest tie at zero in id order
    assert_eq!(ids, vec![3, 0, 1, 4, 5]);
    assert!(recs[0].score > 0.0);
    assert!(recs[1..].iter().all(|r| r.score == 0.0));
}

#[test]
fn test_recommend_unknown_movie_is_empty() {
    let catalog = sample_catalog();
    let recommender = ContentRecommender::default();
    assert!(recommender.recommend(&catalog, 99, 5).is_empty());
}

#[test]
fn test_recommend_empty_catalog() {
    let recommender = ContentRecommender::default();
    assert!(recommender.recommend(&Catalog::new(), 0, 5).is_empty());

    let snapshot = recommender.similarity(&Catalog::new());
    assert_eq!(snapshot.similarity().shape(), (0, 0));
}

#[test]
fn test_stop_word_only_catalog_degrades_to_zero() {
    let mut catalog = Catalog::new();
    catalog.add_movie(1, "The", "A", "and the of");
    catalog.add_movie(2, "It", "An", "is was");

    let recommender = ContentRecommender::default();
    let snapshot = recommender.similarity(&catalog);
    assert_eq!(snapshot.features().shape(), (2, 0));
    assert!(snapshot.vocabulary().is_empty());
    assert_eq!(snapshot.between(1, 1), Some(0.0));

    let recs = recommender.recommend(&catalog, 1, 5);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].movie_id, 2);
    assert_eq!(recs[0].score, 0.0);
}

#[test]
fn test_single_movie_catalog() {
    let mut catalog = Catalog::new();
    catalog.add_movie(7, "Inception", "Sci-Fi Action", "Dreams within dreams.");

    let recommender = ContentRecommender::default();
    assert!(recommender.recommend(&catalog, 7, 5).is_empty());
}

#[test]
fn test_snapshot_cached_until_catalog_changes() {
    let mut catalog = sample_catalog();
    let recommender = ContentRecommender::default();

    let first = recommender.similarity(&catalog);
    let second = recommender.similarity(&catalog);
    assert!(Arc::ptr_eq(&first, &second));

    catalog.add_movie(6, "Heat", "Crime Action", "A crew of thieves in Los Angeles.");
    let third = recommender.similarity(&catalog);
    assert!(!Arc::ptr_eq(&first, &third));
    assert_eq!(third.movies().len(), 7);
    assert!(third.between(4, 6).expect("both known") > 0.0);
}

#[test]
fn test_text_config_is_applied() {
    let catalog = sample_catalog();
    let text = TextConfig {
        english_stop_words: false,
        ..TextConfig::default()
    };
    let snapshot = ContentSimilarity::build(&catalog, &text);
    assert!(snapshot.vocabulary().iter().any(|t| t == "the"));
    // "the" now links the two titles that share it
    assert!(snapshot.between(0, 2).expect("both known") > 0.0);
}
