//! Game settings
//!
//! Loaded from an optional JSON file at startup and validated once; the
//! simulation never re-checks them per tick.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::Geometry;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Field and sprite dimensions
    pub geometry: Geometry,
    /// RNG seed (random per process when absent)
    pub seed: Option<u64>,

    // === Visual Effects ===
    /// Shake the craft after a level-up
    pub screen_shake: bool,

    // === Accessibility ===
    /// Reduced motion (suppresses shake)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            geometry: Geometry::default(),
            seed: None,
            screen_shake: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.geometry.validate()
    }

    /// Parse and validate settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert!(settings.effective_screen_shake());
        assert_eq!(settings.geometry.field_width, 640.0);
    }

    #[test]
    fn test_reduced_motion_disables_shake() {
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert!(!settings.effective_screen_shake());
    }

    #[test]
    fn test_partial_json() {
        let settings = Settings::from_json(r#"{ "seed": 7, "geometry": { "field_width": 800.0 } }"#)
            .expect("valid settings");
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.geometry.field_width, 800.0);
        assert_eq!(settings.geometry.field_height, 480.0);
        assert!(settings.screen_shake);
    }

    #[test]
    fn test_rejects_out_of_range_field() {
        let err = Settings::from_json(r#"{ "geometry": { "field_height": -1.0 } }"#);
        assert!(matches!(err, Err(ConfigError::InvalidField { .. })));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load(Path::new("/nonexistent/spitfire.json"));
        assert!(matches!(err, Err(ConfigError::Io(_))));
    }
}
