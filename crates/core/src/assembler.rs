//! Heuristic population of a new scene from design "key elements".
//!
//! An upstream design recommendation produces free-text element strings
//! ("Modern Sofa", "Floor Lamp"). The assembler maps each element onto a
//! catalog entry by substring matching against a fixed keyword table and
//! places the matches into the scene.
//!
//! This is deliberately best-effort: unmatched elements are skipped
//! silently, duplicates are suppressed, and the number of placements is
//! capped. A design payload that matches nothing yields an empty scene,
//! which callers must treat as a valid outcome.

use std::collections::HashSet;

use serde::Deserialize;

use crate::catalog::ModelCatalog;
use crate::scene::Scene;

/// Upper bound on successful placements per design payload.
pub const MAX_ASSEMBLED_MODELS: usize = 5;

/// Keyword table scanned in order; the first keyword contained in the
/// element text wins. More specific phrases must sort before their
/// substrings ("coffee table" before "table").
const KEYWORD_TO_MODEL: &[(&str, &str)] = &[
    ("sofa", "modern_sofa_01"),
    ("chair", "accent_chair_01"),
    ("coffee table", "antique_table_01"),
    ("bookshelf", "chest_of_drawers_01"),
    ("lamp", "modern_desk_lamp_01"),
    ("bed", "queen_bed_01"),
    ("table", "folding_table_01"),
    ("desk", "antique_desk_01"),
    ("mirror", "mirror_01"),
    ("kitchen", "kitchen_01"),
];

/// Design payload accepted on session creation.
///
/// Only `key_elements` drives scene population. Upstream recommendation
/// payloads carry additional fields (style, palette, budget notes); they
/// are accepted and ignored here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DesignConcept {
    #[serde(default)]
    pub key_elements: Vec<String>,
}

/// Populate `scene` from a design concept.
///
/// Returns the number of models placed. Never fails: elements that match
/// no keyword, or that map to an already-placed catalog model, are
/// skipped.
pub fn populate_scene(
    scene: &mut Scene,
    catalog: &ModelCatalog,
    concept: &DesignConcept,
) -> usize {
    let mut placed: HashSet<&str> = HashSet::new();
    let mut added = 0;

    for element in &concept.key_elements {
        if added >= MAX_ASSEMBLED_MODELS {
            break;
        }

        let element_lower = element.to_lowercase();
        let Some((_, model_id)) = KEYWORD_TO_MODEL
            .iter()
            .find(|(keyword, _)| element_lower.contains(keyword))
        else {
            continue;
        };

        // First occurrence wins; later elements mapping to the same
        // catalog model are dropped.
        if !placed.insert(model_id) {
            continue;
        }

        if let Some(entry) = catalog.get(model_id) {
            scene.add_model(entry);
            catalog.increment_usage(model_id);
            added += 1;
        }
    }

    added
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
