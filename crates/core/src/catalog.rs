//! Furniture model catalog: read-only lookup and search over the set of
//! placeable 3D assets.
//!
//! The catalog is seeded once at startup and never grows or shrinks during
//! normal operation. The only runtime mutation is the advisory usage
//! counter bumped when an entry is placed into a scene; it is stored in
//! atomics so the catalog can be shared behind `Arc` without locking.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Closed set of furniture categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Seating,
    Tables,
    Lighting,
    Storage,
    Decor,
    Beds,
    Kitchen,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: &'static [Category] = &[
        Category::Seating,
        Category::Tables,
        Category::Lighting,
        Category::Storage,
        Category::Decor,
        Category::Beds,
        Category::Kitchen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Seating => "seating",
            Category::Tables => "tables",
            Category::Lighting => "lighting",
            Category::Storage => "storage",
            Category::Decor => "decor",
            Category::Beds => "beds",
            Category::Kitchen => "kitchen",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|c| c.as_str()).collect();
                CoreError::Validation(format!(
                    "Invalid category '{s}'. Must be one of: {}",
                    valid.join(", ")
                ))
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// Bounding dimensions in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// A reusable furniture descriptor available for placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub model_id: String,
    pub name: String,
    pub category: Category,
    /// URL of the GLB asset served to AR clients.
    pub asset_url: String,
    pub thumbnail_url: String,
    pub description: String,
    pub dimensions: Dimensions,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The seeded furniture registry.
///
/// Entries keep their seed order so listings are stable across calls.
pub struct ModelCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
    usage: Vec<AtomicU64>,
}

impl ModelCatalog {
    /// Build a catalog from a seed list.
    ///
    /// Panics if the seed list contains a duplicate `model_id` — a
    /// misconfigured seed should fail at startup, not at request time.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let previous = index.insert(entry.model_id.clone(), i);
            assert!(
                previous.is_none(),
                "duplicate model_id in catalog seed: {}",
                entry.model_id
            );
        }
        let usage = entries.iter().map(|_| AtomicU64::new(0)).collect();
        Self {
            entries,
            index,
            usage,
        }
    }

    /// Build the catalog from the built-in furniture seed list.
    pub fn with_default_models() -> Self {
        Self::new(default_entries())
    }

    /// Look up a single entry by its model id.
    pub fn get(&self, model_id: &str) -> Option<&CatalogEntry> {
        self.index.get(model_id).map(|&i| &self.entries[i])
    }

    /// List entries in seed order, optionally filtered by category.
    pub fn list(&self, category: Option<Category>) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| category.is_none_or(|c| e.category == c))
            .collect()
    }

    /// Case-insensitive substring search over name, category and
    /// description, in seed order.
    ///
    /// An empty or whitespace-only query is rejected rather than treated
    /// as match-all.
    pub fn search(&self, query: &str) -> Result<Vec<&CatalogEntry>, CoreError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(CoreError::Validation(
                "search query must not be empty".to_string(),
            ));
        }

        Ok(self
            .entries
            .iter()
            .filter(|e| {
                e.name.to_lowercase().contains(&needle)
                    || e.category.as_str().contains(&needle)
                    || e.description.to_lowercase().contains(&needle)
            })
            .collect())
    }

    /// Bump the usage counter for an entry.
    ///
    /// Unknown ids are a silent no-op: usage counting is advisory and must
    /// never fail a placement.
    pub fn increment_usage(&self, model_id: &str) {
        if let Some(&i) = self.index.get(model_id) {
            self.usage[i].fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Current usage count for an entry; zero for unknown ids.
    pub fn usage_count(&self, model_id: &str) -> u64 {
        self.index
            .get(model_id)
            .map(|&i| self.usage[i].load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

fn entry(
    model_id: &str,
    name: &str,
    category: Category,
    asset: &str,
    description: &str,
    width: f64,
    height: f64,
    depth: f64,
) -> CatalogEntry {
    CatalogEntry {
        model_id: model_id.to_string(),
        name: name.to_string(),
        category,
        asset_url: format!("/static/ar_assets/models/{asset}.glb"),
        thumbnail_url: format!("/static/ar_assets/thumbnails/{model_id}.jpg"),
        description: description.to_string(),
        dimensions: Dimensions {
            width,
            height,
            depth,
        },
    }
}

/// The built-in furniture library.
fn default_entries() -> Vec<CatalogEntry> {
    vec![
        entry(
            "modern_sofa_01",
            "Modern Sofa",
            Category::Seating,
            "modern_sofa",
            "Contemporary three-seater sofa with clean lines",
            2.0,
            0.85,
            0.95,
        ),
        entry(
            "accent_chair_01",
            "Accent Chair",
            Category::Seating,
            "accent_chair",
            "Stylish accent chair for reading corners",
            0.8,
            0.9,
            0.85,
        ),
        entry(
            "old_sofa_01",
            "Classic Sofa",
            Category::Seating,
            "old_sofa",
            "Timeless classic sofa design",
            2.2,
            0.9,
            1.0,
        ),
        entry(
            "sofa_combination_01",
            "Sectional Sofa",
            Category::Seating,
            "sofa_combination",
            "L-shaped sectional sofa",
            3.0,
            0.85,
            1.5,
        ),
        entry(
            "antique_table_01",
            "Antique Table",
            Category::Tables,
            "antique_table",
            "Vintage wooden dining table",
            1.5,
            0.75,
            1.0,
        ),
        entry(
            "folding_table_01",
            "Folding Table",
            Category::Tables,
            "folding_table",
            "Space-saving folding table",
            1.2,
            0.75,
            0.6,
        ),
        entry(
            "antique_desk_01",
            "Antique Wooden Desk",
            Category::Tables,
            "antique_wooden_desk_with_props",
            "Antique wooden writing desk",
            1.6,
            0.8,
            0.9,
        ),
        entry(
            "modern_desk_lamp_01",
            "Modern Desk Lamp",
            Category::Lighting,
            "modern_desk_lamp",
            "Contemporary desk lamp with adjustable arm",
            0.3,
            0.5,
            0.3,
        ),
        entry(
            "chest_of_drawers_01",
            "Chest of Drawers",
            Category::Storage,
            "old_1950s_american_chest_of_drawers",
            "Vintage 1950s American chest of drawers",
            0.9,
            1.2,
            0.5,
        ),
        entry(
            "mirror_01",
            "Wall Mirror",
            Category::Decor,
            "mirror",
            "Elegant wall mirror",
            0.8,
            1.2,
            0.05,
        ),
        entry(
            "queen_bed_01",
            "Queen Bed",
            Category::Beds,
            "queen_bed",
            "Queen size bed with upholstered headboard",
            1.6,
            1.1,
            2.1,
        ),
        entry(
            "kitchen_01",
            "Kitchen Set",
            Category::Kitchen,
            "kitchen",
            "Complete kitchen cabinet set",
            3.0,
            2.4,
            0.6,
        ),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
