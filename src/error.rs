//! Error types for the movie catalog

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Result type for catalog operations
pub type MovieResult<T> = Result<T, MovieError>;

/// Error types for catalog operations
#[derive(Debug, thiserror::Error)]
pub enum MovieError {
    /// No movie with the requested id
    #[error("movie not found: {0}")]
    MovieNotFound(String),

    /// Request body did not decode as a movie
    #[error("invalid movie body: {0}")]
    InvalidBody(String),
}

impl MovieError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            MovieError::MovieNotFound(_) => StatusCode::NOT_FOUND,
            MovieError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the machine-readable code for error responses
    pub fn error_code(&self) -> &'static str {
        match self {
            MovieError::MovieNotFound(_) => "MOVIE_UNKNOWN",
            MovieError::InvalidBody(_) => "BODY_INVALID",
        }
    }
}

/// JSON error envelope returned to clients
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, serde::Serialize)]
struct ErrorDetail {
    code: &'static str,
    message: String,
}

impl IntoResponse for MovieError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        let message = self.to_string();

        let body = ErrorResponse {
            errors: vec![ErrorDetail { code, message }],
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let not_found = MovieError::MovieNotFound("7".to_string());
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.error_code(), "MOVIE_UNKNOWN");

        let bad_body = MovieError::InvalidBody("expected value".to_string());
        assert_eq!(bad_body.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(bad_body.error_code(), "BODY_INVALID");
    }
}
