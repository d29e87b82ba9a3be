//! Route definitions for WebXR client configuration.

use axum::routing::get;
use axum::Router;

use crate::handlers::webxr;
use crate::state::AppState;

/// Routes mounted at `/webxr`.
pub fn router() -> Router<AppState> {
    Router::new().route("/config", get(webxr::config))
}
