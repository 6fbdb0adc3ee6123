//! Movie metadata keyed by movie id.

use super::MovieId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Caller-assigned identifier
    pub id: MovieId,
    /// Display title
    pub title: String,
    /// Free-form genre text, e.g. "Crime Drama"
    pub genre: String,
    /// Short synopsis
    pub description: String,
}

impl Movie {
    /// Create a movie entry.
    pub fn new(
        id: MovieId,
        title: impl Into<String>,
        genre: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            genre: genre.into(),
            description: description.into(),
        }
    }

    /// Text fed to the content vectorizer: title, genre and description.
    ///
    /// # Examples
    ///
    /// ```
    /// use movierec::recommend::Movie;
    ///
    /// let movie = Movie::new(3, "Inception", "Sci-Fi Action", "A thief steals secrets through dreams.");
    /// assert_eq!(movie.document(), "Inception Sci-Fi Action A thief steals secrets through dreams.");
    /// ```
    #[must_use]
    pub fn document(&self) -> String {
        format!("{} {} {}", self.title, self.genre, self.description)
    }
}

/// Source of truth for movie metadata.
///
/// Ids iterate in ascending order, which is also the row order of the
/// content feature matrix.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: BTreeMap<MovieId, Movie>,
    version: u64,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the movie at `id`, returning the previous entry.
    pub fn add_movie(
        &mut self,
        id: MovieId,
        title: impl Into<String>,
        genre: impl Into<String>,
        description: impl Into<String>,
    ) -> Option<Movie> {
        self.insert(Movie::new(id, title, genre, description))
    }

    /// Insert or overwrite `movie` under its own id.
    pub fn insert(&mut self, movie: Movie) -> Option<Movie> {
        self.version += 1;
        self.movies.insert(movie.id, movie)
    }

    /// Whether `id` is in the catalog.
    #[must_use]
    pub fn has(&self, id: MovieId) -> bool {
        self.movies.contains_key(&id)
    }

    /// Look up a movie.
    #[must_use]
    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    /// Title of `id`, if present.
    #[must_use]
    pub fn title(&self, id: MovieId) -> Option<&str> {
        self.movies.get(&id).map(|m| m.title.as_str())
    }

    /// All ids in ascending order.
    #[must_use]
    pub fn all_ids_sorted(&self) -> Vec<MovieId> {
        self.movies.keys().copied().collect()
    }

    /// Movies in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Movie> + '_ {
        self.movies.values()
    }

    /// Number of movies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Mutation counter, bumped by every insert or overwrite.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }
}
