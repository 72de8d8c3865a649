//! Camera that rises with the tower
//!
//! Reads the stack, never writes it. One eased rise per placed layer, and a
//! snap back to the starting vantage point when the game returns to `Ready`.

use glam::Vec3;

use super::state::{GameStatus, StackState};
use crate::settings::CameraConfig;

/// Camera follow state
#[derive(Debug, Clone)]
pub struct CameraDolly {
    pub config: CameraConfig,
    /// Current camera position
    pub position: Vec3,
    /// Point the camera looks at (aimed once, at construction)
    pub look_at: Vec3,
    /// Stack revision the camera already rose for
    advanced_revision: Option<u64>,
    /// Stack reset count at the last update
    seen_resets: u64,
}

impl CameraDolly {
    pub fn new(config: CameraConfig, state: &StackState) -> Self {
        let look_height = state.config.layer_height * state.layer_count() as f32 / 2.0;
        Self {
            config,
            position: config.start,
            look_at: Vec3::new(0.0, look_height, 0.0),
            advanced_revision: None,
            seen_resets: state.reset_count(),
        }
    }

    /// Observe the stack once per rendered frame
    pub fn update(&mut self, state: &StackState) {
        // Keyed on the reset count: several ticks may run between updates, and a
        // reset followed by a new run never shows up as `Ready` here
        if state.reset_count() != self.seen_resets {
            self.seen_resets = state.reset_count();
            if self.position.y > self.config.reset_height {
                log::debug!("Camera back to start");
                self.position = self.config.start;
            }
        }

        if state.status() == GameStatus::Running
            && self.advanced_revision != Some(state.revision())
        {
            let target = self.position + Vec3::Y * (state.config.layer_height * 2.0);
            self.position = self.position.lerp(target, self.config.follow_lerp);
            self.advanced_revision = Some(state.revision());
        }
    }

    /// Whether the camera already rose for the current top layer
    pub fn has_advanced(&self, state: &StackState) -> bool {
        self.advanced_revision == Some(state.revision())
    }
}
