//! Route definitions for the furniture catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/catalog`.
///
/// ```text
/// GET /              -> list (?category= filter)
/// GET /search?q=     -> search
/// GET /{model_id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list))
        .route("/search", get(catalog::search))
        .route("/{model_id}", get(catalog::get_by_id))
}
