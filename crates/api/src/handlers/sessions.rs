//! Handlers for the `/sessions` resource.
//!
//! AR session lifecycle (create, snapshot, delete, save/restore) plus
//! placement and manipulation of models within a session. Every mutation
//! publishes a [`SceneEvent`] on the application bus.

use arden_core::assembler::DesignConcept;
use arden_core::error::CoreError;
use arden_core::transform::TransformPatch;
use arden_events::SceneEvent;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for creating a session.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSessionRequest {
    #[validate(length(min = 1, message = "room_type must not be empty"))]
    pub room_type: String,
    /// Optional design recommendation used to pre-populate the scene.
    pub design: Option<DesignConcept>,
}

/// Request body for placing a catalog model into a session.
#[derive(Debug, Deserialize)]
pub struct AddModelRequest {
    pub model_id: String,
}

// ---------------------------------------------------------------------------
// Session lifecycle
// ---------------------------------------------------------------------------

/// POST /api/v1/sessions
///
/// Create a new AR session, optionally pre-populated from a design
/// payload, and return its initial snapshot.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSessionRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let snapshot = state
        .registry
        .create_session(&input.room_type, input.design.as_ref())
        .await?;

    state.event_bus.publish(
        SceneEvent::new("session.created")
            .with_scene(&snapshot.scene_id)
            .with_payload(json!({
                "room_type": snapshot.room_type,
                "assembled_models": snapshot.models.len(),
            })),
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: snapshot })))
}

/// GET /api/v1/sessions/{scene_id}
///
/// Full snapshot of an existing session.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(scene_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let snapshot = state.registry.snapshot(&scene_id).await?;
    Ok(Json(DataResponse { data: snapshot }))
}

/// DELETE /api/v1/sessions/{scene_id}
pub async fn delete_session(
    State(state): State<AppState>,
    Path(scene_id): Path<String>,
) -> AppResult<StatusCode> {
    if state.registry.delete_session(&scene_id).await {
        state
            .event_bus
            .publish(SceneEvent::new("session.deleted").with_scene(&scene_id));
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "session",
            id: scene_id,
        }))
    }
}

/// POST /api/v1/sessions/{scene_id}/save
///
/// Persist the current snapshot through the configured scene store.
pub async fn save(
    State(state): State<AppState>,
    Path(scene_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let snapshot = state.registry.snapshot(&scene_id).await?;
    state.store.persist(&snapshot).await?;

    state
        .event_bus
        .publish(SceneEvent::new("session.saved").with_scene(&scene_id));

    Ok(Json(DataResponse { data: snapshot }))
}

/// POST /api/v1/sessions/{scene_id}/restore
///
/// Re-register a previously saved session from the scene store. If a live
/// session with the same id exists it is replaced (last writer wins).
pub async fn restore(
    State(state): State<AppState>,
    Path(scene_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let snapshot = state
        .store
        .retrieve(&scene_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "saved session",
            id: scene_id.clone(),
        }))?;

    let scene_id = state.registry.restore(snapshot).await;
    let snapshot = state.registry.snapshot(&scene_id).await?;

    state
        .event_bus
        .publish(SceneEvent::new("session.restored").with_scene(&scene_id));

    Ok(Json(DataResponse { data: snapshot }))
}

// ---------------------------------------------------------------------------
// Placed models
// ---------------------------------------------------------------------------

/// POST /api/v1/sessions/{scene_id}/models
///
/// Place a catalog model into the session and return the new instance.
pub async fn add_model(
    State(state): State<AppState>,
    Path(scene_id): Path<String>,
    Json(input): Json<AddModelRequest>,
) -> AppResult<impl IntoResponse> {
    let instance_id = state.registry.add_model(&scene_id, &input.model_id).await?;
    let placed = state.registry.get_model(&scene_id, &instance_id).await?;

    state.event_bus.publish(
        SceneEvent::new("model.added")
            .with_scene(&scene_id)
            .with_payload(json!({
                "instance_id": instance_id,
                "model_id": input.model_id,
            })),
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: placed })))
}

/// GET /api/v1/sessions/{scene_id}/models/{instance_id}
pub async fn get_model(
    State(state): State<AppState>,
    Path((scene_id, instance_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let placed = state.registry.get_model(&scene_id, &instance_id).await?;
    Ok(Json(DataResponse { data: placed }))
}

/// PATCH /api/v1/sessions/{scene_id}/models/{instance_id}
///
/// Partial transform update: omitted components (and omitted axes within
/// a component) keep their current values. Returns the updated instance.
pub async fn update_transform(
    State(state): State<AppState>,
    Path((scene_id, instance_id)): Path<(String, String)>,
    Json(patch): Json<TransformPatch>,
) -> AppResult<impl IntoResponse> {
    let updated = state
        .registry
        .update_transform(&scene_id, &instance_id, &patch)
        .await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "placed model",
            id: instance_id,
        }));
    }

    let placed = state.registry.get_model(&scene_id, &instance_id).await?;

    state.event_bus.publish(
        SceneEvent::new("model.transformed")
            .with_scene(&scene_id)
            .with_payload(json!({
                "instance_id": instance_id,
                "transform": placed.transform,
            })),
    );

    Ok(Json(DataResponse { data: placed }))
}

/// DELETE /api/v1/sessions/{scene_id}/models/{instance_id}
pub async fn remove_model(
    State(state): State<AppState>,
    Path((scene_id, instance_id)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    let removed = state.registry.remove_model(&scene_id, &instance_id).await?;
    if removed {
        state.event_bus.publish(
            SceneEvent::new("model.removed")
                .with_scene(&scene_id)
                .with_payload(json!({ "instance_id": instance_id })),
        );
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "placed model",
            id: instance_id,
        }))
    }
}
