//! Service builder and router assembly

use axum::Router;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use serde_json::json;

use crate::store::MovieStore;

/// Builder for configuring and creating the movie catalog service
#[derive(Debug, Default)]
pub struct MarqueeBuilder {
    store: Option<MovieStore>,
}

impl MarqueeBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve an existing store instead of the seeded catalog
    pub fn store(mut self, store: MovieStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the catalog service
    ///
    /// Returns a Router that can be served with any tower-compatible server.
    /// When no store was supplied, the service starts from the fixed seed
    /// catalog, so every process start sees the same two movies.
    pub fn build(self) -> Router {
        let store = self.store.unwrap_or_else(MovieStore::seeded);

        Router::new()
            .route("/health", get(health_check))
            .merge(crate::movies::router())
            .with_state(store)
    }
}

/// Liveness endpoint
///
/// Returns 200 OK to indicate the catalog is serving
async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({})))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let _app = MarqueeBuilder::new().store(MovieStore::new()).build();
    }

    #[test]
    fn test_builder_defaults_to_seeded_store() {
        let _app = MarqueeBuilder::new().build();
    }
}
