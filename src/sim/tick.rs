//! Fixed step simulation tick
//!
//! Core game loop that advances the simulation one frame at a time.

use super::drop::{DropOutcome, drop_layer};
use super::state::{GameEvent, GameStatus, StackState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Drop the moving layer (click/tap/space)
    pub drop: bool,
    /// Start over with a bare base
    pub reset: bool,
    /// Idle/demo mode - the auto-player presses drop
    pub idle_mode: bool,
}

/// Advance the game state by one tick.
///
/// Inputs are resolved before motion, so a drop always sees the position the
/// player saw on the previous frame.
pub fn tick(state: &mut StackState, input: &TickInput) -> Option<DropOutcome> {
    if input.reset {
        state.reset();
    }

    let outcome = input.drop.then(|| drop_layer(state));

    advance_active(state);
    state.time_ticks += 1;
    outcome
}

/// Move the active layer one step along its axis.
///
/// Reaching the travel bound freezes the layer and ends the run once; later
/// ticks see no active layer and do nothing.
pub fn advance_active(state: &mut StackState) {
    let speed = state.config.speed;
    let bound = state.config.travel_bound;

    let Some(layer) = state.active_layer_mut() else {
        return;
    };
    let Some(axis) = layer.axis else {
        return;
    };

    let coord = layer.coord(axis);
    if coord < bound {
        axis.set(&mut layer.pos, coord + speed);
    }
    if layer.coord(axis) < bound {
        return;
    }

    let index = layer.index;
    layer.active = false;
    if state.status() == GameStatus::Running {
        log::debug!("Layer {} reached the travel bound", index);
        state.push_event(GameEvent::TravelLimit { index });
        state.set_status(GameStatus::Over);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::StackConfig;
    use crate::sim::layer::Axis;

    fn drop_input() -> TickInput {
        TickInput {
            drop: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_ready_does_not_move() {
        let mut state = StackState::default();
        let base = state.layers()[0].clone();
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.status(), GameStatus::Ready);
        assert_eq!(state.layers()[0], base);
        assert_eq!(state.time_ticks, 10);
    }

    #[test]
    fn test_active_layer_moves_along_its_axis() {
        let mut state = StackState::default();
        assert_eq!(tick(&mut state, &drop_input()), Some(DropOutcome::Started));

        // The launch tick already moved it once
        let x = state.layers()[1].pos.x;
        assert!((x - (-2.5 + 0.01)).abs() < 1e-6);

        tick(&mut state, &TickInput::default());
        let layer = &state.layers()[1];
        assert!((layer.pos.x - (-2.5 + 0.02)).abs() < 1e-6);
        assert_eq!(layer.pos.z, 0.0);
        assert_eq!(layer.pos.y, 0.5);
    }

    #[test]
    fn test_z_layer_moves_along_z() {
        let mut state = StackState::default();
        tick(&mut state, &drop_input());
        for _ in 0..249 {
            tick(&mut state, &TickInput::default());
        }
        // Roughly centered over the base by now
        assert!(state.layers()[1].pos.x.abs() < 0.05);
        tick(&mut state, &drop_input());

        let layer = &state.layers()[2];
        assert_eq!(layer.axis, Some(Axis::Z));
        let x = layer.pos.x;
        let z = layer.pos.z;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.layers()[2].pos.x, x);
        assert!((state.layers()[2].pos.z - (z + 0.01)).abs() < 1e-6);
    }

    #[test]
    fn test_travel_bound_ends_game_once() {
        let mut state = StackState::default();
        tick(&mut state, &drop_input());

        let mut ticks = 0;
        while state.status() == GameStatus::Running {
            tick(&mut state, &TickInput::default());
            ticks += 1;
            assert!(ticks < 10_000, "layer never reached the bound");
        }
        assert_eq!(state.status(), GameStatus::Over);
        assert!(state.layers()[1].pos.x >= state.config.travel_bound);
        assert_eq!(state.layer_count(), 2);

        let frozen = state.layers()[1].pos;
        for _ in 0..5 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.layers()[1].pos, frozen);

        let game_overs = state
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn test_short_bound_trips_immediately() {
        let mut config = StackConfig::default();
        config.spawn_offset = 0.02;
        config.travel_bound = 0.025;
        let mut state = StackState::new(config);
        tick(&mut state, &drop_input());
        assert_eq!(state.status(), GameStatus::Running);
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.status(), GameStatus::Over);
        assert!(state.layers()[1].pos.x >= 0.025);
    }

    #[test]
    fn test_reset_input_abandons_run() {
        let mut state = StackState::default();
        tick(&mut state, &drop_input());
        tick(&mut state, &TickInput::default());

        let input = TickInput {
            reset: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.status(), GameStatus::Ready);
        assert_eq!(state.layer_count(), 1);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_over_stays_over_until_reset() {
        let mut state = StackState::default();
        tick(&mut state, &drop_input());
        state.set_status(GameStatus::Over);

        for _ in 0..3 {
            tick(&mut state, &TickInput::default());
            assert_eq!(state.status(), GameStatus::Over);
        }
        // Drop while over restarts instead of placing
        assert_eq!(
            tick(&mut state, &drop_input()),
            Some(DropOutcome::Restarted)
        );
        assert_eq!(state.status(), GameStatus::Ready);
    }
}
