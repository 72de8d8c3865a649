//! Tower Stack - A block-stacking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (stack, motion, trimming, camera follow)
//! - `platform`: Host-side frame clock
//! - `settings`: Tunable constants loaded from JSON
//! - `highscores`: Best tower heights

pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::{AutoPlayConfig, CameraConfig, Settings, SettingsError, StackConfig};

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Fixed simulation timestep (one motion step per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Vertical distance between stacked layers
    pub const LAYER_HEIGHT: f32 = 0.5;
    /// Height of the base layer's center
    pub const Y_OFFSET: f32 = 0.0;
    /// Side length of the base layer (and the first dropped layer)
    pub const INIT_LAYER_SIDE: f32 = 0.5;

    /// Distance from the origin at which new layers spawn on their travel axis
    pub const SPAWN_OFFSET: f32 = 2.5;
    /// Distance moved by the active layer per tick
    pub const LAYER_SPEED: f32 = 0.01;
    /// Travel axis coordinate at which an undropped layer ends the game
    pub const TRAVEL_BOUND: f32 = 5.0;

    /// Camera vantage point at start and after reset
    pub const CAMERA_START: Vec3 = Vec3::new(5.0, 2.5, 5.0);
    /// Camera only snaps back on reset when it has risen above this height
    pub const CAMERA_RESET_HEIGHT: f32 = 1.0;
    /// Lerp factor for the one-shot camera rise after each placed layer
    pub const CAMERA_FOLLOW_LERP: f32 = 0.5;

    /// Demo player: largest deliberate miss (world units) per drop
    pub const AUTOPLAY_MAX_MISS: f32 = 0.12;
}

/// Score for a stack of `layer_count` layers (the base doesn't count)
#[inline]
pub fn score_for(layer_count: usize) -> u32 {
    layer_count.saturating_sub(1) as u32
}
