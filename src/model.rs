//! Wire types for the movie catalog

/// A movie record as stored and served by the catalog.
///
/// The `id` field is assigned by the store; any id carried by an incoming
/// request body is ignored, so clients may omit it entirely.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Movie {
    /// Catalog-assigned identifier, a numeric string
    #[serde(default)]
    pub id: String,

    /// Opaque ISBN-style reference
    pub isbn: String,

    /// Display title
    pub title: String,

    /// Directing credit, if any
    pub director: Option<Director>,
}

/// Directing credit for a movie, owned exclusively by its record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Director {
    /// Given name
    pub firstname: String,

    /// Family name
    pub lastname: String,
}
