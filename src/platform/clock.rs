//! Fixed timestep accumulator
//!
//! Hosts feed in real frame times; the accumulator hands back how many
//! simulation ticks to run. Motion speed is defined per tick, so this is what
//! keeps the game speed independent of the display refresh rate.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Converts frame deltas into whole simulation steps
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps,
            accumulator: 0.0,
        }
    }

    /// Add `dt` seconds of frame time and return the number of ticks to run.
    ///
    /// Long frames (tab switches, breakpoints) are clamped to 0.1 s and to
    /// `max_substeps` so the simulation never tries to catch up all at once.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, 0.1);

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        if substeps == self.max_substeps {
            // Drop the backlog rather than carry it into the next frame
            self.accumulator = self.accumulator.min(self.step);
        }
        substeps
    }

    /// Fraction of a step left in the accumulator (for render interpolation)
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_tick_per_frame_at_sim_rate() {
        let mut clock = FixedStep::new(0.25, 8);
        assert_eq!(clock.advance(0.25), 1);
        assert_eq!(clock.advance(0.25 / 2.0), 0);
        assert_eq!(clock.advance(0.25 / 2.0), 1);
    }

    #[test]
    fn test_substeps_are_capped() {
        let mut clock = FixedStep::new(0.01, 4);
        assert_eq!(clock.advance(0.1), 4);
        assert!(clock.alpha() <= 1.0);
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut clock = FixedStep::default();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.alpha(), 0.0);
    }

    #[test]
    fn test_long_frame_clamped() {
        let mut clock = FixedStep::new(0.05, 100);
        assert_eq!(clock.advance(10.0), 2);
        clock.reset();
        assert_eq!(clock.alpha(), 0.0);
    }
}
