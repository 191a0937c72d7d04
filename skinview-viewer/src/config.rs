//! Static viewer configuration

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use skinview_core::Point3f;
use skinview_framing::FramingParams;

/// One entry of the initial material map: tag nodes matching `pattern`,
/// then apply the catalog variant named `variant` to them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialBinding {
    /// Substring matched against renderable node display names
    pub pattern: String,
    /// Durable tag assigned to the matched nodes
    pub tag: String,
    /// Label of the catalog variant applied at load time
    pub variant: String,
}

/// Static configuration applied once per session
///
/// The initial map is an ordered sequence, not runtime state; entries are
/// applied in order on asset-load completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Vertical field of view in degrees
    pub fov_y_deg: f32,
    /// Camera position before the first asset is framed
    pub initial_position: Point3f,
    pub framing: FramingParams,
    pub initial_map: Vec<InitialBinding>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            fov_y_deg: 50.0,
            initial_position: Point3::new(0.0, 10.0, 20.0),
            framing: FramingParams::default(),
            initial_map: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ViewerConfig::default();
        assert_eq!(config.fov_y_deg, 50.0);
        assert_eq!(config.initial_position, Point3::new(0.0, 10.0, 20.0));
        assert!(config.initial_map.is_empty());
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = ViewerConfig {
            initial_map: vec![InitialBinding {
                pattern: "BookCover".to_string(),
                tag: "cover".to_string(),
                variant: "default".to_string(),
            }],
            ..ViewerConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ViewerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
