//! Static WebXR capability descriptor.
//!
//! Returned verbatim to AR clients so they can configure
//! `navigator.xr.requestSession` without hard-coding server capabilities.
//! Nothing here is computed at runtime.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DomOverlay {
    /// CSS selector of the overlay root element.
    pub root: String,
}

/// WebXR session capabilities advertised to clients.
#[derive(Debug, Clone, Serialize)]
pub struct XrCapabilities {
    pub required_features: Vec<String>,
    pub optional_features: Vec<String>,
    pub dom_overlay: DomOverlay,
    pub session_mode: String,
    pub reference_space_type: String,
    pub frame_rate: String,
}

impl Default for XrCapabilities {
    fn default() -> Self {
        Self {
            required_features: vec!["hit-test".to_string(), "dom-overlay".to_string()],
            optional_features: vec![
                "light-estimation".to_string(),
                "camera-access".to_string(),
                "plane-detection".to_string(),
                "anchors".to_string(),
                "hand-tracking".to_string(),
            ],
            dom_overlay: DomOverlay {
                root: "#ar-overlay".to_string(),
            },
            session_mode: "immersive-ar".to_string(),
            reference_space_type: "local-floor".to_string(),
            frame_rate: "high".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capabilities_serialize_with_expected_shape() {
        let json = serde_json::to_value(XrCapabilities::default()).unwrap();

        assert_eq!(json["session_mode"], "immersive-ar");
        assert_eq!(json["reference_space_type"], "local-floor");
        assert_eq!(json["dom_overlay"]["root"], "#ar-overlay");
        assert_eq!(json["required_features"][0], "hit-test");
        assert_eq!(json["optional_features"].as_array().unwrap().len(), 5);
    }
}
