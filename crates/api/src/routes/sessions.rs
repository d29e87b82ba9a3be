//! Route definitions for AR sessions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::sessions;
use crate::state::AppState;

/// Routes mounted at `/sessions`.
///
/// ```text
/// POST   /                                  -> create
/// GET    /{scene_id}                        -> get_by_id
/// DELETE /{scene_id}                        -> delete_session
/// POST   /{scene_id}/save                   -> save
/// POST   /{scene_id}/restore                -> restore
/// POST   /{scene_id}/models                 -> add_model
/// GET    /{scene_id}/models/{instance_id}   -> get_model
/// PATCH  /{scene_id}/models/{instance_id}   -> update_transform
/// DELETE /{scene_id}/models/{instance_id}   -> remove_model
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(sessions::create))
        .route(
            "/{scene_id}",
            get(sessions::get_by_id).delete(sessions::delete_session),
        )
        .route("/{scene_id}/save", post(sessions::save))
        .route("/{scene_id}/restore", post(sessions::restore))
        .route("/{scene_id}/models", post(sessions::add_model))
        .route(
            "/{scene_id}/models/{instance_id}",
            get(sessions::get_model)
                .patch(sessions::update_transform)
                .delete(sessions::remove_model),
        )
}
