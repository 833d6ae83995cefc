//! In-memory storage for the movie catalog

use std::sync::Arc;

use rand::Rng;
use tokio::sync::RwLock;

use crate::error::{MovieError, MovieResult};
use crate::model::{Director, Movie};

/// Exclusive upper bound for generated numeric ids.
const ID_SPACE: u32 = 1_000_000_000;

/// Shared handle to the in-memory movie collection.
///
/// Cloning is cheap and every clone observes the same collection. Movies are
/// kept in insertion order; lookups scan for the first matching id. All
/// mutations go through the inner write lock, so concurrent handlers cannot
/// lose or corrupt updates.
#[derive(Clone, Debug, Default)]
pub struct MovieStore {
    movies: Arc<RwLock<Vec<Movie>>>,
}

impl MovieStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given movies.
    pub fn with_movies(movies: impl IntoIterator<Item = Movie>) -> Self {
        Self {
            movies: Arc::new(RwLock::new(movies.into_iter().collect())),
        }
    }

    /// Create a store holding the fixed startup catalog.
    pub fn seeded() -> Self {
        Self::with_movies(seed_movies())
    }

    /// Snapshot of the full collection in insertion order.
    pub async fn list(&self) -> Vec<Movie> {
        self.movies.read().await.clone()
    }

    /// Look up a movie by id.
    pub async fn get(&self, id: &str) -> MovieResult<Movie> {
        let movies = self.movies.read().await;
        movies
            .iter()
            .find(|movie| movie.id == id)
            .cloned()
            .ok_or_else(|| MovieError::MovieNotFound(id.to_string()))
    }

    /// Store a new movie, assigning it a fresh id.
    ///
    /// Any id carried by `draft` is discarded. The id is drawn while holding
    /// the write lock, so it is unique even under concurrent creates.
    pub async fn create(&self, mut draft: Movie) -> Movie {
        let mut movies = self.movies.write().await;
        draft.id = fresh_id(&movies);
        tracing::debug!(id = %draft.id, title = %draft.title, "stored new movie");
        movies.push(draft.clone());
        draft
    }

    /// Replace the movie with the given id, keeping its position.
    ///
    /// The stored record takes `id`, overriding any id in `draft`.
    pub async fn replace(&self, id: &str, mut draft: Movie) -> MovieResult<Movie> {
        let mut movies = self.movies.write().await;
        let slot = movies
            .iter_mut()
            .find(|movie| movie.id == id)
            .ok_or_else(|| MovieError::MovieNotFound(id.to_string()))?;
        draft.id = id.to_string();
        *slot = draft.clone();
        Ok(draft)
    }

    /// Remove the first movie with the given id.
    pub async fn delete(&self, id: &str) -> MovieResult<()> {
        let mut movies = self.movies.write().await;
        let index = movies
            .iter()
            .position(|movie| movie.id == id)
            .ok_or_else(|| MovieError::MovieNotFound(id.to_string()))?;
        movies.remove(index);
        tracing::debug!(%id, "removed movie");
        Ok(())
    }
}

/// Draw a numeric-string id not already present in `movies`.
fn fresh_id(movies: &[Movie]) -> String {
    let mut rng = rand::thread_rng();
    loop {
        let candidate = rng.gen_range(0..ID_SPACE).to_string();
        if !movies.iter().any(|movie| movie.id == candidate) {
            return candidate;
        }
    }
}

/// The two movies every fresh catalog starts with.
pub fn seed_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: "1".to_string(),
            isbn: "438227".to_string(),
            title: "Movie one".to_string(),
            director: Some(Director {
                firstname: "John".to_string(),
                lastname: "Doe".to_string(),
            }),
        },
        Movie {
            id: "2".to_string(),
            isbn: "45455".to_string(),
            title: "Movie two".to_string(),
            director: Some(Director {
                firstname: "Steve".to_string(),
                lastname: "Smith".to_string(),
            }),
        },
    ]
}
