//! Process-wide session registry.
//!
//! Maps opaque scene ids to live [`Scene`]s. Each scene sits behind its
//! own `RwLock`, so mutations against one session never block another;
//! the outer map lock is held only for insert/delete/lookup. Sessions
//! have no automatic expiry — they live until explicitly deleted or the
//! process exits.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::assembler::{self, DesignConcept};
use crate::catalog::ModelCatalog;
use crate::error::CoreError;
use crate::scene::{PlacedModel, Scene, SceneSnapshot};
use crate::transform::TransformPatch;

type SharedScene = Arc<RwLock<Scene>>;

/// Registry of all live AR sessions in this process.
///
/// Designed to be wrapped in `Arc` and shared across request handlers.
pub struct SessionRegistry {
    scenes: RwLock<HashMap<String, SharedScene>>,
    catalog: Arc<ModelCatalog>,
}

impl SessionRegistry {
    pub fn new(catalog: Arc<ModelCatalog>) -> Self {
        Self {
            scenes: RwLock::new(HashMap::new()),
            catalog,
        }
    }

    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    /// Create a new session and return its initial snapshot.
    ///
    /// A blank `room_type` is rejected. When a design concept is supplied
    /// its key elements are heuristically placed into the scene before it
    /// becomes visible to other callers.
    pub async fn create_session(
        &self,
        room_type: &str,
        design: Option<&DesignConcept>,
    ) -> Result<SceneSnapshot, CoreError> {
        let room_type = room_type.trim();
        if room_type.is_empty() {
            return Err(CoreError::Validation(
                "room_type must not be empty".to_string(),
            ));
        }

        let scene_id = Uuid::new_v4().to_string();
        let mut scene = Scene::new(scene_id.clone(), room_type.to_string());
        if let Some(concept) = design {
            assembler::populate_scene(&mut scene, &self.catalog, concept);
        }

        let snapshot = scene.snapshot();
        self.scenes
            .write()
            .await
            .insert(scene_id, Arc::new(RwLock::new(scene)));
        Ok(snapshot)
    }

    /// Snapshot of an existing session.
    pub async fn snapshot(&self, scene_id: &str) -> Result<SceneSnapshot, CoreError> {
        let scene = self.scene(scene_id).await.ok_or_else(|| session_not_found(scene_id))?;
        let guard = scene.read().await;
        Ok(guard.snapshot())
    }

    /// Delete a session. Returns `false` if no such session existed.
    pub async fn delete_session(&self, scene_id: &str) -> bool {
        self.scenes.write().await.remove(scene_id).is_some()
    }

    /// Place a catalog model into a session and return the new instance id.
    ///
    /// Bumps the catalog usage counter on success.
    pub async fn add_model(&self, scene_id: &str, model_id: &str) -> Result<String, CoreError> {
        let scene = self.scene(scene_id).await.ok_or_else(|| session_not_found(scene_id))?;
        let entry = self.catalog.get(model_id).ok_or_else(|| CoreError::NotFound {
            entity: "catalog model",
            id: model_id.to_string(),
        })?;

        let instance_id = scene.write().await.add_model(entry);
        self.catalog.increment_usage(model_id);
        Ok(instance_id)
    }

    /// Remove a placed instance from a session.
    ///
    /// Returns `Ok(false)` when the instance is absent — removal is
    /// idempotent. A missing session is still an error.
    pub async fn remove_model(
        &self,
        scene_id: &str,
        instance_id: &str,
    ) -> Result<bool, CoreError> {
        let scene = self.scene(scene_id).await.ok_or_else(|| session_not_found(scene_id))?;
        let removed = scene.write().await.remove_model(instance_id);
        Ok(removed)
    }

    /// Fetch one placed instance.
    pub async fn get_model(
        &self,
        scene_id: &str,
        instance_id: &str,
    ) -> Result<PlacedModel, CoreError> {
        let scene = self.scene(scene_id).await.ok_or_else(|| session_not_found(scene_id))?;
        let guard = scene.read().await;
        guard
            .get_model(instance_id)
            .cloned()
            .ok_or_else(|| instance_not_found(instance_id))
    }

    /// Apply a partial transform update to a placed instance.
    ///
    /// Returns `Ok(false)` when the instance is absent.
    pub async fn update_transform(
        &self,
        scene_id: &str,
        instance_id: &str,
        patch: &TransformPatch,
    ) -> Result<bool, CoreError> {
        let scene = self.scene(scene_id).await.ok_or_else(|| session_not_found(scene_id))?;
        let updated = scene.write().await.update_transform(instance_id, patch);
        Ok(updated)
    }

    /// Register a scene reconstructed from a persisted snapshot.
    ///
    /// Re-registering an id that is already live replaces the live scene
    /// (last writer wins). Returns the scene id.
    pub async fn restore(&self, snapshot: SceneSnapshot) -> String {
        let scene = Scene::from_snapshot(snapshot);
        let scene_id = scene.scene_id().to_string();
        self.scenes
            .write()
            .await
            .insert(scene_id.clone(), Arc::new(RwLock::new(scene)));
        scene_id
    }

    /// Number of live sessions.
    pub async fn session_count(&self) -> usize {
        self.scenes.read().await.len()
    }

    /// Clone the shared handle for one scene, releasing the map lock
    /// before any per-scene work happens.
    async fn scene(&self, scene_id: &str) -> Option<SharedScene> {
        self.scenes.read().await.get(scene_id).cloned()
    }
}

fn session_not_found(scene_id: &str) -> CoreError {
    CoreError::NotFound {
        entity: "session",
        id: scene_id.to_string(),
    }
}

fn instance_not_found(instance_id: &str) -> CoreError {
    CoreError::NotFound {
        entity: "placed model",
        id: instance_id.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
