pub mod catalog;
pub mod health;
pub mod sessions;
pub mod webxr;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /sessions                                 create (POST)
/// /sessions/{scene_id}                      snapshot (GET), delete (DELETE)
/// /sessions/{scene_id}/save                 persist snapshot (POST)
/// /sessions/{scene_id}/restore              re-register from store (POST)
/// /sessions/{scene_id}/models               place catalog model (POST)
/// /sessions/{scene_id}/models/{instance_id} get, transform (PATCH), remove
///
/// /catalog                                  list, ?category= filter
/// /catalog/search?q=                        substring search
/// /catalog/{model_id}                       single entry with usage count
///
/// /webxr/config                             static WebXR capabilities
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/sessions", sessions::router())
        .nest("/catalog", catalog::router())
        .nest("/webxr", webxr::router())
}
