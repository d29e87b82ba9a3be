//! AR scene state: placed model instances plus scene-wide lighting and
//! environment configuration.
//!
//! A [`Scene`] is one AR working session. Placed models keep insertion
//! order so snapshot output is stable, and `updated_at` advances on every
//! mutation. [`SceneSnapshot`] is the serializable deep copy handed across
//! the API boundary; callers can never reach the live scene through it.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{CatalogEntry, Category, Dimensions};
use crate::transform::{Transform, TransformPatch, Vec3};
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Placed models
// ---------------------------------------------------------------------------

/// A concrete occurrence of a catalog entry within a scene.
///
/// Display fields are copied from the catalog entry at placement time, so
/// a later catalog change never retroactively affects placed instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedModel {
    /// Unique within the process: `{model_id}_{8-hex-suffix}`.
    pub instance_id: String,
    /// The catalog entry this instance was placed from.
    pub model_id: String,
    pub name: String,
    pub category: Category,
    pub asset_url: String,
    pub dimensions: Dimensions,
    pub transform: Transform,
}

// ---------------------------------------------------------------------------
// Lighting / environment configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmbientLight {
    pub color: String,
    pub intensity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub color: String,
    pub intensity: f64,
    pub position: Vec3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HemisphereLight {
    pub sky_color: String,
    pub ground_color: String,
    pub intensity: f64,
}

/// Scene-wide light rig sent to AR clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightingConfig {
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
    pub hemisphere: HemisphereLight,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: "#FFFFFF".to_string(),
                intensity: 0.6,
            },
            directional: DirectionalLight {
                color: "#FFFFFF".to_string(),
                intensity: 0.8,
                position: Vec3::new(5.0, 10.0, 5.0),
            },
            hemisphere: HemisphereLight {
                sky_color: "#87CEEB".to_string(),
                ground_color: "#8B4513".to_string(),
                intensity: 0.5,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FogConfig {
    pub enabled: bool,
    pub color: String,
    pub near: f64,
    pub far: f64,
}

/// Environment rendering settings for the scene viewport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub background_color: String,
    pub floor_grid: bool,
    pub floor_color: String,
    pub shadows: bool,
    pub fog: FogConfig,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            background_color: "#E5E5E5".to_string(),
            floor_grid: true,
            floor_color: "#F5F5F5".to_string(),
            shadows: true,
            fog: FogConfig {
                enabled: false,
                color: "#FFFFFF".to_string(),
                near: 10.0,
                far: 50.0,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Serializable deep copy of a scene's full state.
///
/// Timestamps serialize as ISO-8601 strings. The snapshot owns all of its
/// data; mutating it does not touch the live scene (and vice versa).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub scene_id: String,
    pub room_type: String,
    pub models: Vec<PlacedModel>,
    pub lighting: LightingConfig,
    pub environment: EnvironmentConfig,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// One AR working session.
#[derive(Debug, Clone)]
pub struct Scene {
    scene_id: String,
    room_type: String,
    models: Vec<PlacedModel>,
    lighting: LightingConfig,
    environment: EnvironmentConfig,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Scene {
    /// Create an empty scene with default lighting and environment.
    ///
    /// `created_at` and `updated_at` start equal.
    pub fn new(scene_id: String, room_type: String) -> Self {
        let now = Utc::now();
        Self {
            scene_id,
            room_type,
            models: Vec::new(),
            lighting: LightingConfig::default(),
            environment: EnvironmentConfig::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstruct a live scene from a persisted snapshot.
    pub fn from_snapshot(snapshot: SceneSnapshot) -> Self {
        Self {
            scene_id: snapshot.scene_id,
            room_type: snapshot.room_type,
            models: snapshot.models,
            lighting: snapshot.lighting,
            environment: snapshot.environment,
            created_at: snapshot.created_at,
            updated_at: snapshot.updated_at,
        }
    }

    pub fn scene_id(&self) -> &str {
        &self.scene_id
    }

    pub fn room_type(&self) -> &str {
        &self.room_type
    }

    pub fn models(&self) -> &[PlacedModel] {
        &self.models
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Place a catalog entry into the scene with a default transform.
    ///
    /// Returns the generated instance id. The `{model_id}_` prefix keeps
    /// human-readable provenance; the hex suffix guarantees uniqueness
    /// when the same entry is placed multiple times.
    pub fn add_model(&mut self, catalog_entry: &CatalogEntry) -> String {
        let suffix = Uuid::new_v4().simple().to_string();
        let instance_id = format!("{}_{}", catalog_entry.model_id, &suffix[..8]);

        self.models.push(PlacedModel {
            instance_id: instance_id.clone(),
            model_id: catalog_entry.model_id.clone(),
            name: catalog_entry.name.clone(),
            category: catalog_entry.category,
            asset_url: catalog_entry.asset_url.clone(),
            dimensions: catalog_entry.dimensions,
            transform: Transform::default(),
        });
        self.touch();

        instance_id
    }

    /// Remove a placed instance. Removing an absent instance is not an
    /// error; it returns `false` and leaves `updated_at` untouched.
    pub fn remove_model(&mut self, instance_id: &str) -> bool {
        let before = self.models.len();
        self.models.retain(|m| m.instance_id != instance_id);
        let removed = self.models.len() < before;
        if removed {
            self.touch();
        }
        removed
    }

    pub fn get_model(&self, instance_id: &str) -> Option<&PlacedModel> {
        self.models.iter().find(|m| m.instance_id == instance_id)
    }

    /// Apply a partial transform update to a placed instance.
    ///
    /// Returns `false` if the instance does not exist.
    pub fn update_transform(&mut self, instance_id: &str, patch: &TransformPatch) -> bool {
        let Some(model) = self
            .models
            .iter_mut()
            .find(|m| m.instance_id == instance_id)
        else {
            return false;
        };
        model.transform.apply(patch);
        self.touch();
        true
    }

    /// Deep copy of the current state, in model insertion order.
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            scene_id: self.scene_id.clone(),
            room_type: self.room_type.clone(),
            models: self.models.clone(),
            lighting: self.lighting.clone(),
            environment: self.environment.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ModelCatalog;
    use crate::transform::Vec3Patch;

    fn scene_with_catalog() -> (Scene, ModelCatalog) {
        (
            Scene::new("scene-1".to_string(), "Living Room".to_string()),
            ModelCatalog::with_default_models(),
        )
    }

    #[test]
    fn new_scene_is_empty_with_equal_timestamps() {
        let scene = Scene::new("scene-1".to_string(), "Living Room".to_string());

        assert_eq!(scene.model_count(), 0);
        assert_eq!(scene.created_at(), scene.updated_at());
        assert_eq!(scene.room_type(), "Living Room");
    }

    #[test]
    fn add_model_generates_prefixed_instance_id() {
        let (mut scene, catalog) = scene_with_catalog();
        let lamp = catalog.get("modern_desk_lamp_01").unwrap();

        let instance_id = scene.add_model(lamp);

        assert!(instance_id.starts_with("modern_desk_lamp_01_"));
        let placed = scene.get_model(&instance_id).unwrap();
        assert_eq!(placed.model_id, "modern_desk_lamp_01");
        assert_eq!(placed.name, "Modern Desk Lamp");
        assert_eq!(placed.transform.scale, Vec3::ONE);
    }

    #[test]
    fn placing_the_same_entry_twice_yields_distinct_instances() {
        let (mut scene, catalog) = scene_with_catalog();
        let sofa = catalog.get("modern_sofa_01").unwrap();

        let first = scene.add_model(sofa);
        let second = scene.add_model(sofa);

        assert_ne!(first, second);
        assert_eq!(scene.model_count(), 2);
    }

    #[test]
    fn add_then_remove_round_trips_to_previous_state() {
        let (mut scene, catalog) = scene_with_catalog();
        let mirror = catalog.get("mirror_01").unwrap();
        let before: Vec<String> = scene
            .models()
            .iter()
            .map(|m| m.instance_id.clone())
            .collect();

        let instance_id = scene.add_model(mirror);
        assert!(scene.remove_model(&instance_id));

        let after: Vec<String> = scene
            .models()
            .iter()
            .map(|m| m.instance_id.clone())
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn remove_absent_instance_returns_false_without_touching_updated_at() {
        let (mut scene, _) = scene_with_catalog();
        let updated_at = scene.updated_at();

        assert!(!scene.remove_model("ghost_01_deadbeef"));
        assert_eq!(scene.updated_at(), updated_at);
    }

    #[test]
    fn mutations_advance_updated_at() {
        let (mut scene, catalog) = scene_with_catalog();
        let sofa = catalog.get("modern_sofa_01").unwrap();

        let instance_id = scene.add_model(sofa);
        assert!(scene.updated_at() >= scene.created_at());

        let after_add = scene.updated_at();
        scene.update_transform(
            &instance_id,
            &TransformPatch {
                position: Some(Vec3Patch {
                    x: Some(1.0),
                    ..Default::default()
                }),
                ..Default::default()
            },
        );
        assert!(scene.updated_at() >= after_add);
    }

    #[test]
    fn partial_transform_update_preserves_other_components() {
        let (mut scene, catalog) = scene_with_catalog();
        let sofa = catalog.get("modern_sofa_01").unwrap();
        let instance_id = scene.add_model(sofa);

        let updated = scene.update_transform(
            &instance_id,
            &TransformPatch {
                position: Some(Vec3Patch {
                    x: Some(5.0),
                    ..Default::default()
                }),
                ..Default::default()
            },
        );
        assert!(updated);

        let placed = scene.get_model(&instance_id).unwrap();
        assert_eq!(placed.transform.position, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(placed.transform.rotation, Vec3::ZERO);
        assert_eq!(placed.transform.scale, Vec3::ONE);
    }

    #[test]
    fn update_transform_on_absent_instance_returns_false() {
        let (mut scene, _) = scene_with_catalog();
        assert!(!scene.update_transform("ghost_01_deadbeef", &TransformPatch::default()));
    }

    #[test]
    fn snapshot_is_a_deep_copy() {
        let (mut scene, catalog) = scene_with_catalog();
        let sofa = catalog.get("modern_sofa_01").unwrap();
        scene.add_model(sofa);

        let snapshot = scene.snapshot();
        assert_eq!(snapshot.models.len(), 1);

        // Mutating the scene afterwards must not show up in the snapshot.
        scene.add_model(sofa);
        assert_eq!(snapshot.models.len(), 1);
        assert_eq!(scene.model_count(), 2);
    }

    #[test]
    fn snapshot_serializes_timestamps_as_iso8601() {
        let scene = Scene::new("scene-1".to_string(), "Bedroom".to_string());
        let json = serde_json::to_value(scene.snapshot()).unwrap();

        let created_at = json["created_at"].as_str().unwrap();
        assert!(created_at.contains('T'), "expected ISO-8601: {created_at}");
        assert_eq!(json["scene_id"], "scene-1");
        assert_eq!(json["room_type"], "Bedroom");
        assert_eq!(json["lighting"]["ambient"]["color"], "#FFFFFF");
        assert_eq!(json["environment"]["floor_grid"], true);
    }

    #[test]
    fn from_snapshot_restores_models_and_config() {
        let (mut scene, catalog) = scene_with_catalog();
        let bed = catalog.get("queen_bed_01").unwrap();
        let instance_id = scene.add_model(bed);
        scene.update_transform(
            &instance_id,
            &TransformPatch {
                rotation: Some(Vec3Patch {
                    y: Some(90.0),
                    ..Default::default()
                }),
                ..Default::default()
            },
        );

        let restored = Scene::from_snapshot(scene.snapshot());

        assert_eq!(restored.scene_id(), scene.scene_id());
        assert_eq!(restored.model_count(), 1);
        let placed = restored.get_model(&instance_id).unwrap();
        assert_eq!(placed.transform.rotation, Vec3::new(0.0, 90.0, 0.0));
        assert_eq!(restored.created_at(), scene.created_at());
    }
}
