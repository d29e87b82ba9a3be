//! WebXR client configuration handler.

use arden_core::webxr::XrCapabilities;
use axum::Json;

use crate::response::DataResponse;

/// GET /api/v1/webxr/config
///
/// Static capability descriptor consumed by AR clients when requesting an
/// immersive session.
pub async fn config() -> Json<DataResponse<XrCapabilities>> {
    Json(DataResponse {
        data: XrCapabilities::default(),
    })
}
