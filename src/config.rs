use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Scene constants, overridable through a JSON string passed to the wasm
/// entry point. Every field falls back to the stock scene when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Half-extent of the outer cube; the inner cube uses half of this.
    pub half_extent: f32,
    pub outer_radius: f32,
    pub inner_radius: f32,
    /// Per-frame rotation increment in radians.
    pub rotation_step: f32,
    /// Angular subdivisions of the cylinder cross-section.
    pub subdivisions: u32,
    pub outer_color: [u8; 3],
    pub inner_color: [u8; 3],
    pub background: [f32; 4],
    pub camera_position: [f32; 3],
    pub fov_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            half_extent: 2.0,
            outer_radius: 0.08,
            inner_radius: 0.06,
            rotation_step: 0.005,
            subdivisions: 16,
            outer_color: [0x00, 0xff, 0xff],
            inner_color: [0xff, 0x00, 0xff],
            background: [0.04, 0.04, 0.04, 1.0],
            camera_position: [5.0, 8.0, 5.0],
            fov_degrees: 75.0,
            z_near: 0.1,
            z_far: 1000.0,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    /// The JSON string did not parse.
    Malformed(serde_json::Error),
    /// A dimension that must be strictly positive was not.
    NonPositive { field: &'static str, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Malformed(e) => write!(f, "malformed scene config: {}", e),
            ConfigError::NonPositive { field, value } => {
                write!(f, "scene config field `{}` must be positive, got {}", field, value)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Malformed(e) => Some(e),
            ConfigError::NonPositive { .. } => None,
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Malformed)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("half_extent", self.half_extent),
            ("outer_radius", self.outer_radius),
            ("inner_radius", self.inner_radius),
            ("fov_degrees", self.fov_degrees),
            ("z_near", self.z_near),
            ("z_far", self.z_far),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.subdivisions < 3 {
            return Err(ConfigError::NonPositive {
                field: "subdivisions",
                value: self.subdivisions as f32,
            });
        }
        Ok(())
    }

    pub fn inner_half_extent(&self) -> f32 {
        self.half_extent * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_scene() {
        let config = SceneConfig::default();
        assert_eq!(config.half_extent, 2.0);
        assert_eq!(config.inner_half_extent(), 1.0);
        assert_eq!(config.outer_radius, 0.08);
        assert_eq!(config.inner_radius, 0.06);
        assert_eq!(config.rotation_step, 0.005);
        assert_eq!(config.outer_color, [0x00, 0xff, 0xff]);
        assert_eq!(config.inner_color, [0xff, 0x00, 0xff]);
        assert_eq!(config.camera_position, [5.0, 8.0, 5.0]);
    }

    #[test]
    fn partial_json_keeps_defaults_elsewhere() {
        let config = SceneConfig::from_json(r#"{"rotation_step": 0.01}"#).unwrap();
        assert_eq!(config.rotation_step, 0.01);
        assert_eq!(config.half_extent, 2.0);
        assert_eq!(config.subdivisions, 16);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = SceneConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        let err = SceneConfig::from_json(r#"{"outer_radius": 0.0}"#).unwrap_err();
        match err {
            ConfigError::NonPositive { field, .. } => assert_eq!(field, "outer_radius"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn round_trips_through_json() {
        let config = SceneConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(SceneConfig::from_json(&json).unwrap(), config);
    }
}
