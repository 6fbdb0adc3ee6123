//! Movierec: hybrid movie recommendation in pure Rust.
//!
//! Combines user-user collaborative filtering over ratings with
//! content-based filtering over TF-IDF vectors of movie metadata, blended
//! into one deterministic ranked list.
//!
//! # Quick Start
//!
//! ```
//! use movierec::prelude::*;
//!
//! let mut recommender = MovieRecommender::new();
//! recommender.add_movie(0, "The Shawshank Redemption", "Drama", "Two imprisoned men bond over a number of years.");
//! recommender.add_movie(2, "The Dark Knight", "Action", "Batman fights against the Joker terrorizing Gotham City.");
//! recommender.add_movie(3, "Inception", "Sci-Fi Action", "A thief who steals corporate secrets through dreams.");
//! recommender.add_movie(5, "Fight Club", "Drama", "An insomniac office worker and a soap maker form an underground fight club.");
//!
//! recommender.add_rating(1, 0, 5.0);
//! recommender.add_rating(1, 2, 4.0);
//! recommender.add_rating(2, 0, 4.0);
//! recommender.add_rating(2, 2, 5.0);
//! recommender.add_rating(2, 3, 4.5);
//!
//! let for_user = recommender.collaborative_recommendations(1, DEFAULT_RECOMMENDATIONS);
//! assert_eq!(for_user[0].title, "Inception");
//!
//! let similar = recommender.content_recommendations(0, DEFAULT_RECOMMENDATIONS);
//! assert_eq!(similar[0].title, "Fight Club");
//!
//! let blended = recommender.hybrid_recommendations(1, DEFAULT_RECOMMENDATIONS);
//! assert!(blended.iter().all(|r| r.movie_id != 2));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Dense row-major Matrix
//! - [`text`]: Tokenization, stop words and TF-IDF vectorization
//! - [`similarity`]: Cosine similarity and top-k neighbour selection
//! - [`recommend`]: Catalog, ratings, the three recommenders and the facade
//! - [`error`]: Crate error type

pub mod error;
pub mod prelude;
pub mod primitives;
pub mod recommend;
pub mod similarity;
pub mod text;

pub use error::{RecommendError, Result};
pub use primitives::Matrix;
pub use recommend::{MovieRecommender, Recommendation, RecommenderConfig};
