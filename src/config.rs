//! Room configuration
//!
//! Loaded from a RON file. Every field has a default, so a config file only
//! needs to mention what it changes:
//!
//! ```ron
//! (
//!     planes: [backPlane, leftPlane, bottomPlane],
//!     placement: (min_spacing: 0.2),
//!     persist_icon_layout: true,
//! )
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::icons::MovementConfig;
use crate::placement::PlacementConfig;
use crate::wall::{PlaneId, WallGeometry};

/// Error type for config loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] ron::error::SpannedError),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Everything tunable about a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    /// Size of the wall icons are placed on
    pub wall: WallGeometry,
    /// Planes that make up the room, in construction order
    pub planes: Vec<PlaneId>,
    /// Textures used until the user picks something else
    pub default_textures: BTreeMap<PlaneId, String>,
    /// New icon placement
    pub placement: PlacementConfig,
    /// Directional controls
    pub movement: MovementConfig,
    /// Wall textures offered in the picker (merged with discovered assets)
    pub wall_textures: Vec<String>,
    /// Icon assets offered in the picker (merged with discovered assets)
    pub icon_assets: Vec<String>,
    /// Also save icon positions across launches
    pub persist_icon_layout: bool,
    /// Where persisted state lives (platform data dir if unset)
    pub data_dir: Option<PathBuf>,
}

impl Default for RoomConfig {
    fn default() -> Self {
        let mut default_textures = BTreeMap::new();
        default_textures.insert(PlaneId::Back, "wall1".to_string());
        default_textures.insert(PlaneId::Left, "wall2".to_string());
        default_textures.insert(PlaneId::Right, "wall2".to_string());
        default_textures.insert(PlaneId::Bottom, "floor1".to_string());

        Self {
            wall: WallGeometry::default(),
            planes: PlaneId::ALL.to_vec(),
            default_textures,
            placement: PlacementConfig::default(),
            movement: MovementConfig::default(),
            wall_textures: ["wall1", "wall2", "wall3", "wall4", "wall5", "wall6", "floor1", "floor2"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            icon_assets: ["star", "heart", "leaf", "moon", "sun", "cloud"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            persist_icon_layout: false,
            data_dir: None,
        }
    }
}

impl RoomConfig {
    /// Load a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_ron_str(&contents)
    }

    /// Parse and validate a RON config
    pub fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        let config: RoomConfig = ron::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, falling back to defaults on any problem
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                tracing::info!("loaded room config from {}", path.display());
                config
            }
            Err(ConfigError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no room config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("bad room config {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Check the values make a usable room
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.wall.width > 0.0 && self.wall.height > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "wall must have a positive size, got {}x{}",
                self.wall.width, self.wall.height
            )));
        }
        if !(3..=4).contains(&self.planes.len()) {
            return Err(ConfigError::ValidationError(format!(
                "a room needs 3 or 4 planes, got {}",
                self.planes.len()
            )));
        }
        if !self.placement.bounds.is_valid()
            || self.placement.bounds.low < 0.0
            || self.placement.bounds.high > 1.0
        {
            return Err(ConfigError::ValidationError(format!(
                "placement bounds must be an increasing range inside [0, 1], got [{}, {})",
                self.placement.bounds.low, self.placement.bounds.high
            )));
        }
        if !(self.placement.min_spacing.is_finite() && self.placement.min_spacing >= 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "min_spacing must be a finite non-negative distance, got {}",
                self.placement.min_spacing
            )));
        }
        let movement = &self.movement;
        if !(movement.step.is_finite() && movement.min.is_finite() && movement.max.is_finite())
            || !(movement.min <= movement.max && movement.step > 0.0)
        {
            return Err(ConfigError::ValidationError(format!(
                "movement needs a finite positive step and min <= max, got step {} in [{}, {}]",
                movement.step, movement.min, movement.max
            )));
        }
        // New icons must land where the arrows can reach without snapping
        if self.placement.bounds.low < movement.min || self.placement.bounds.high > movement.max {
            return Err(ConfigError::ValidationError(format!(
                "placement bounds [{}, {}) must sit inside the movable area [{}, {}]",
                self.placement.bounds.low, self.placement.bounds.high, movement.min, movement.max
            )));
        }
        Ok(())
    }

    /// Serialize to a pretty RON string (for writing a starter config)
    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        let config = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .indentor("  ".to_string());
        ron::ser::to_string_pretty(self, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = RoomConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.planes.len(), 4);
        assert_eq!(config.placement.max_attempts, 10);
        assert_eq!(config.movement.step, 0.05);
        assert!(!config.persist_icon_layout);
    }

    #[test]
    fn test_partial_config() {
        let config = RoomConfig::from_ron_str(
            "(planes: [backPlane, leftPlane, bottomPlane], placement: (min_spacing: 0.2), persist_icon_layout: true)",
        )
        .unwrap();
        assert_eq!(config.planes, vec![PlaneId::Back, PlaneId::Left, PlaneId::Bottom]);
        assert_eq!(config.placement.min_spacing, 0.2);
        // Untouched nested fields keep their defaults
        assert_eq!(config.placement.max_attempts, 10);
        assert!(config.persist_icon_layout);
        assert_eq!(config.wall, WallGeometry::default());
    }

    #[test]
    fn test_round_trip_through_ron() {
        let config = RoomConfig::default();
        let text = config.to_ron_string().unwrap();
        assert_eq!(RoomConfig::from_ron_str(&text).unwrap(), config);
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            RoomConfig::from_ron_str("(planes: [backPlane, leftPlane])"),
            Err(ConfigError::ValidationError(_))
        ));
        assert!(matches!(
            RoomConfig::from_ron_str("(placement: (bounds: (low: 0.8, high: 0.2)))"),
            Err(ConfigError::ValidationError(_))
        ));
        assert!(matches!(
            RoomConfig::from_ron_str("(wall: (width: 0.0))"),
            Err(ConfigError::ValidationError(_))
        ));
        assert!(matches!(
            RoomConfig::from_ron_str("(planes: "),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_validation_keeps_placement_inside_movable_area() {
        // Full-wall bounds would place icons at the very edge
        assert!(matches!(
            RoomConfig::from_ron_str("(placement: (bounds: (low: 0.0, high: 1.0)))"),
            Err(ConfigError::ValidationError(_))
        ));
        assert!(matches!(
            RoomConfig::from_ron_str("(placement: (bounds: (low: 0.15, high: 0.95)))"),
            Err(ConfigError::ValidationError(_))
        ));
        // Narrowing the movable area below the default bounds is caught too
        assert!(matches!(
            RoomConfig::from_ron_str("(movement: (min: 0.2))"),
            Err(ConfigError::ValidationError(_))
        ));
        // Bounds exactly on the movable edges are fine
        assert!(RoomConfig::from_ron_str("(placement: (bounds: (low: 0.1, high: 0.9)))").is_ok());
    }

    #[test]
    fn test_validation_rejects_non_finite_values() {
        let mut config = RoomConfig::default();
        config.placement.min_spacing = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));

        let mut config = RoomConfig::default();
        config.movement.step = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));

        let mut config = RoomConfig::default();
        config.movement.step = f32::INFINITY;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));

        let mut config = RoomConfig::default();
        config.movement.min = f32::NEG_INFINITY;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));

        let mut config = RoomConfig::default();
        config.movement.max = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));

        let mut config = RoomConfig::default();
        config.placement.min_spacing = -0.1;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validation_parse_error_is_not_validation() {
        assert!(matches!(
            RoomConfig::from_ron_str("(planes: "),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = RoomConfig::load_or_default(dir.path().join("nope.ron"));
        assert_eq!(config, RoomConfig::default());
    }
}
