//! # Marquee
//!
//! An in-memory movie catalog served over HTTP.
//!
//! ## Features
//!
//! - Full CRUD surface over `/movies` (list, get, create, replace, delete)
//! - Catalog-assigned numeric-string ids, unique under concurrent creates
//! - Typed errors mapped to proper HTTP statuses (404, 400)
//! - Builder pattern for configuration, seeded catalog by default
//!
//! ## Example
//!
//! ```no_run
//! use marquee::MarqueeBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = MarqueeBuilder::new().build();
//!
//! // Use the catalog service with axum or any tower-compatible server
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

mod api;
mod error;
mod model;
mod movies;
mod store;

pub use api::MarqueeBuilder;
pub use error::{MovieError, MovieResult};
pub use model::{Director, Movie};
pub use store::{MovieStore, seed_movies};
