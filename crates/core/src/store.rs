//! Persistence seam for scene snapshots.
//!
//! The registry itself is purely in-memory; durable storage is delegated
//! to a [`SceneStore`] implementation supplied by the application. The
//! bundled [`MemoryStore`] keeps snapshots in a process-local map, which
//! covers single-node deployments and tests; a database-backed store
//! plugs in behind the same trait.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::scene::SceneSnapshot;

/// Durable storage for scene snapshots, keyed by scene id.
#[async_trait]
pub trait SceneStore: Send + Sync {
    /// Persist a snapshot. Persisting the same scene id again overwrites
    /// the previous snapshot (last writer wins).
    async fn persist(&self, snapshot: &SceneSnapshot) -> Result<(), CoreError>;

    /// Fetch a previously persisted snapshot.
    async fn retrieve(&self, scene_id: &str) -> Result<Option<SceneSnapshot>, CoreError>;
}

/// In-memory [`SceneStore`] with process lifetime.
#[derive(Default)]
pub struct MemoryStore {
    snapshots: RwLock<HashMap<String, SceneSnapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SceneStore for MemoryStore {
    async fn persist(&self, snapshot: &SceneSnapshot) -> Result<(), CoreError> {
        self.snapshots
            .write()
            .await
            .insert(snapshot.scene_id.clone(), snapshot.clone());
        Ok(())
    }

    async fn retrieve(&self, scene_id: &str) -> Result<Option<SceneSnapshot>, CoreError> {
        Ok(self.snapshots.read().await.get(scene_id).cloned())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
