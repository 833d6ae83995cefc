//! HTTP handlers for the movie collection

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use bytes::Bytes;

use crate::error::{MovieError, MovieResult};
use crate::model::Movie;
use crate::store::MovieStore;

/// Router for movie operations
pub fn router() -> Router<MovieStore> {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movies/{id}",
            get(get_movie).put(replace_movie).delete(delete_movie),
        )
}

/// List the full catalog
async fn list_movies(State(store): State<MovieStore>) -> Json<Vec<Movie>> {
    Json(store.list().await)
}

/// Get a single movie by id
async fn get_movie(
    State(store): State<MovieStore>,
    Path(id): Path<String>,
) -> MovieResult<Json<Movie>> {
    let movie = store.get(&id).await?;
    Ok(Json(movie))
}

/// Create a movie from the request body
///
/// Any id in the body is discarded in favor of a generated one.
async fn create_movie(
    State(store): State<MovieStore>,
    body: Bytes,
) -> MovieResult<(StatusCode, Json<Movie>)> {
    let draft = decode_movie(&body)?;
    let stored = store.create(draft).await;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// Replace the movie at the path id with the request body
async fn replace_movie(
    State(store): State<MovieStore>,
    Path(id): Path<String>,
    body: Bytes,
) -> MovieResult<Json<Movie>> {
    let draft = decode_movie(&body)?;
    let stored = store.replace(&id, draft).await?;
    Ok(Json(stored))
}

/// Delete a movie by id
async fn delete_movie(
    State(store): State<MovieStore>,
    Path(id): Path<String>,
) -> MovieResult<StatusCode> {
    store.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Decode a movie body, surfacing decode failures as client errors
fn decode_movie(body: &[u8]) -> MovieResult<Movie> {
    serde_json::from_slice(body).map_err(|err| MovieError::InvalidBody(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_movie() {
        let body = br#"{"isbn": "999", "title": "New", "director": {"firstname": "A", "lastname": "B"}}"#;
        let movie = decode_movie(body).unwrap();
        assert_eq!(movie.isbn, "999");
        assert_eq!(movie.title, "New");
        assert_eq!(movie.director.unwrap().firstname, "A");
    }

    #[test]
    fn test_decode_movie_rejects_garbage() {
        let err = decode_movie(b"{not json").unwrap_err();
        assert!(matches!(err, MovieError::InvalidBody(_)));
    }

    #[test]
    fn test_decode_movie_rejects_empty_body() {
        let err = decode_movie(b"").unwrap_err();
        assert!(matches!(err, MovieError::InvalidBody(_)));
    }
}
