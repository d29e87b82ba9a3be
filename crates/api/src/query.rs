//! Shared query-parameter types for API handlers.

use serde::Deserialize;

/// `?category=` filter for catalog listings.
#[derive(Debug, Deserialize)]
pub struct CategoryParams {
    pub category: Option<String>,
}

/// `?q=` free-text search input.
///
/// The parameter is optional at the HTTP layer; a missing `q` reaches the
/// catalog as an empty query and is rejected there, so both cases produce
/// the same 400 response.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}
