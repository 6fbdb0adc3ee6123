//! Hybrid Movie Recommendations
//!
//! Demonstrates the three recommendation queries on a small catalog:
//! - Collaborative filtering (user-user cosine similarity)
//! - Content-based filtering (TF-IDF over title, genre and description)
//! - Hybrid blend (0.7 collaborative + 0.3 content)
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=movierec=debug cargo run --example movie_recommendations
//! ```

use movierec::recommend::{MovieRecommender, Recommendation, DEFAULT_RECOMMENDATIONS};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut recommender = MovieRecommender::new();

    let sample_movies = [
        (0, "The Shawshank Redemption", "Drama", "Two imprisoned men bond over a number of years."),
        (1, "The Godfather", "Crime Drama", "The aging patriarch of an organized crime dynasty transfers control."),
        (2, "The Dark Knight", "Action", "Batman fights against the Joker terrorizing Gotham City."),
        (3, "Inception", "Sci-Fi Action", "A thief who steals corporate secrets through dreams."),
        (4, "Pulp Fiction", "Crime Drama", "Various interconnected stories of criminals in Los Angeles."),
        (5, "Fight Club", "Drama", "An insomniac office worker and a soap maker form an underground fight club."),
    ];
    for (id, title, genre, description) in sample_movies {
        recommender.add_movie(id, title, genre, description);
    }

    let sample_ratings = [
        (1, 0, 5.0), // User 1 rates Shawshank
        (1, 1, 4.5), // User 1 rates Godfather
        (1, 2, 4.0), // User 1 rates Dark Knight
        (2, 0, 4.0), // User 2 rates Shawshank
        (2, 2, 5.0), // User 2 rates Dark Knight
        (2, 3, 4.5), // User 2 rates Inception
        (3, 1, 5.0), // User 3 rates Godfather
        (3, 4, 4.5), // User 3 rates Pulp Fiction
    ];
    for (user, movie, score) in sample_ratings {
        recommender.add_rating(user, movie, score);
    }

    print_section(
        "Collaborative Filtering Recommendations for User 1",
        &recommender.collaborative_recommendations(1, DEFAULT_RECOMMENDATIONS),
    );
    print_section(
        "Content-based Recommendations for Movie 0 (Shawshank Redemption)",
        &recommender.content_recommendations(0, DEFAULT_RECOMMENDATIONS),
    );
    print_section(
        "Hybrid Recommendations for User 1",
        &recommender.hybrid_recommendations(1, DEFAULT_RECOMMENDATIONS),
    );
}

fn print_section(heading: &str, recs: &[Recommendation]) {
    println!("\n{heading}:");
    println!("{}", "─".repeat(64));
    if recs.is_empty() {
        println!("   (none)");
    }
    for (rank, rec) in recs.iter().enumerate() {
        let (title, score) = rec.as_pair();
        println!("   {}. {title:<28} {score:.4}", rank + 1);
    }
}
