//! Idle/demo auto-player
//!
//! Presses drop when the moving layer is close to lined up with the one
//! beneath it, missing by a seeded random amount each time so demo runs
//! shrink and eventually end. Same seed, same game.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{GameStatus, StackState};
use super::tick::TickInput;
use crate::settings::AutoPlayConfig;

/// Deterministic demo player
#[derive(Debug, Clone)]
pub struct AutoPlayer {
    rng: Pcg32,
    max_miss: f32,
    /// Offset from the layer beneath at which to drop, for `aim_revision`
    aim: f32,
    aim_revision: Option<u64>,
}

impl AutoPlayer {
    pub fn new(config: AutoPlayConfig) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(config.seed),
            max_miss: config.max_miss,
            aim: 0.0,
            aim_revision: None,
        }
    }

    /// Decide whether to press drop this tick
    pub fn wants_drop(&mut self, state: &StackState) -> bool {
        match state.status() {
            GameStatus::Ready => true,
            GameStatus::Over => false,
            GameStatus::Running => {
                let Some(index) = state.active_index() else {
                    return false;
                };
                let layers = state.layers();
                let (top, beneath) = (&layers[index], &layers[index - 1]);
                let Some(axis) = top.axis else {
                    return false;
                };

                if self.aim_revision != Some(state.revision()) {
                    self.aim = if self.max_miss > 0.0 {
                        self.rng.random_range(-self.max_miss..=self.max_miss)
                    } else {
                        0.0
                    };
                    self.aim_revision = Some(state.revision());
                }

                // Layers only ever move in +axis, so the offset grows until it
                // crosses the aim
                top.coord(axis) - beneath.coord(axis) >= self.aim
            }
        }
    }

    /// Fill in `input.drop` when `input.idle_mode` is set
    pub fn apply(&mut self, state: &StackState, input: &mut TickInput) {
        if input.idle_mode && self.wants_drop(state) {
            input.drop = true;
        }
    }
}
