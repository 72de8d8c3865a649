//! Game settings and tuning
//!
//! Every constant a host may override lives here. Missing fields fall back to
//! the defaults in [`crate::consts`], so a settings file only needs the values
//! it changes.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Stack simulation constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Vertical distance between layers
    pub layer_height: f32,
    /// Height of the base layer's center
    pub y_offset: f32,
    /// Footprint side of the base layer and the first dropped layer
    pub initial_side: f32,
    /// Distance travelled per tick
    pub speed: f32,
    /// Travel coordinate that ends the game
    pub travel_bound: f32,
    /// Spawn distance from the origin (applied as `-spawn_offset` on the travel axis)
    pub spawn_offset: f32,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            layer_height: LAYER_HEIGHT,
            y_offset: Y_OFFSET,
            initial_side: INIT_LAYER_SIDE,
            speed: LAYER_SPEED,
            travel_bound: TRAVEL_BOUND,
            spawn_offset: SPAWN_OFFSET,
        }
    }
}

impl StackConfig {
    /// Check the constants describe a playable game
    pub fn validate(&self) -> Result<(), SettingsError> {
        positive("stack.layer_height", self.layer_height)?;
        positive("stack.initial_side", self.initial_side)?;
        positive("stack.speed", self.speed)?;
        positive("stack.spawn_offset", self.spawn_offset)?;
        if !self.y_offset.is_finite() {
            return Err(invalid("stack.y_offset", "must be finite"));
        }
        // Travel has to cross the origin before the bound is reached
        if !(self.travel_bound > self.spawn_offset) {
            return Err(invalid(
                "stack.travel_bound",
                format!(
                    "must exceed spawn_offset ({} <= {})",
                    self.travel_bound, self.spawn_offset
                ),
            ));
        }
        Ok(())
    }
}

/// Camera follow tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting vantage point
    pub start: Vec3,
    /// Camera only returns to `start` on reset above this height
    pub reset_height: f32,
    /// Lerp factor (0-1] for the single rise step after each placed layer
    pub follow_lerp: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start: CAMERA_START,
            reset_height: CAMERA_RESET_HEIGHT,
            follow_lerp: CAMERA_FOLLOW_LERP,
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.start.is_finite() {
            return Err(invalid("camera.start", "must be finite"));
        }
        if !(self.follow_lerp > 0.0 && self.follow_lerp <= 1.0) {
            return Err(invalid("camera.follow_lerp", "must be in (0, 1]"));
        }
        Ok(())
    }
}

/// Demo player tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoPlayConfig {
    /// RNG seed (same seed, same game)
    pub seed: u64,
    /// Largest deliberate miss per drop
    pub max_miss: f32,
}

impl Default for AutoPlayConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_miss: AUTOPLAY_MAX_MISS,
        }
    }
}

/// All tunable settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub stack: StackConfig,
    pub camera: CameraConfig,
    pub autoplay: AutoPlayConfig,
}

impl Settings {
    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.stack.validate()?;
        self.camera.validate()?;
        if !(self.autoplay.max_miss >= 0.0) {
            return Err(invalid("autoplay.max_miss", "must be >= 0"));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive, got {value}")))
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> SettingsError {
    SettingsError::Invalid {
        field,
        reason: reason.into(),
    }
}
