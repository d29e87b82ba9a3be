//! Placement transform value types.
//!
//! Every placed model carries a position/rotation/scale triple. Rotation
//! components are Euler angles in degrees, matching what AR clients send
//! back from drag and rotate gestures. Values are not bounds-checked
//! against room geometry.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Vec3
// ---------------------------------------------------------------------------

/// A plain 3-component vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const ONE: Vec3 = Vec3 {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Merge the provided components into this vector; absent components
    /// are left unchanged.
    pub fn apply(&mut self, patch: &Vec3Patch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(z) = patch.z {
            self.z = z;
        }
    }
}

/// Per-axis partial update for a [`Vec3`].
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Vec3Patch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

/// Position/rotation/scale of one placed model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Euler rotation in degrees.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    /// Identity placement: origin, no rotation, unit scale.
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Apply a partial update, merging component by component. Omitted
    /// components (and omitted axes within a component) keep their
    /// current values.
    pub fn apply(&mut self, patch: &TransformPatch) {
        if let Some(position) = &patch.position {
            self.position.apply(position);
        }
        if let Some(rotation) = &patch.rotation {
            self.rotation.apply(rotation);
        }
        if let Some(scale) = &patch.scale {
            self.scale.apply(scale);
        }
    }
}

/// Partial transform update, as sent by clients moving a model.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TransformPatch {
    pub position: Option<Vec3Patch>,
    pub rotation: Option<Vec3Patch>,
    pub scale: Option<Vec3Patch>,
}

impl TransformPatch {
    /// True when the patch carries no components at all.
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.rotation.is_none() && self.scale.is_none()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
