//! Drop resolution
//!
//! Turns a "drop" press into either a new layer or the end of the run.

use super::layer::Axis;
use super::state::{GameEvent, GameStatus, StackState};
use super::trim::{self, TrimResult};

/// What a drop press did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropOutcome {
    /// Game was over; the press restarted it instead
    Restarted,
    /// First layer launched from the ready state
    Started,
    /// Active layer landed and a new one was launched
    Placed(TrimResult),
    /// Active layer had no support; game over
    Missed(TrimResult),
    /// Nothing to drop
    Ignored,
}

/// Resolve a drop press against the current state
pub fn drop_layer(state: &mut StackState) -> DropOutcome {
    match state.status() {
        GameStatus::Over => {
            state.reset();
            DropOutcome::Restarted
        }
        GameStatus::Ready => {
            let axis = state.next_direction();
            let (x, z) = state.spawn_position(axis);
            let side = state.config.initial_side;
            state.add_layer(x, z, side, side);
            log::info!("Run started");
            DropOutcome::Started
        }
        GameStatus::Running => resolve_active(state),
    }
}

fn resolve_active(state: &mut StackState) -> DropOutcome {
    let Some(index) = state.active_index() else {
        return DropOutcome::Ignored;
    };
    let top = &state.layers()[index];
    let Some(axis) = top.axis else {
        return DropOutcome::Ignored;
    };
    let result = trim::trim(top, &state.layers()[index - 1], axis);

    if !result.landed() {
        log::debug!(
            "Layer {} missed: overhang {:.4} on {}",
            index,
            result.overhang,
            axis.as_str()
        );
        state.push_event(GameEvent::Missed {
            index,
            overhang: result.overhang,
        });
        // The missed layer stays where it stopped
        state.set_status(GameStatus::Over);
        return DropOutcome::Missed(result);
    }

    let Some(top) = state.active_layer_mut() else {
        return DropOutcome::Ignored;
    };
    trim::apply(top, &result);
    top.active = false;
    let (width, depth) = (top.width, top.depth);
    log::debug!(
        "Layer {} landed: overlap {:.4} overhang {:.4} on {}",
        index,
        result.overlap,
        result.overhang,
        axis.as_str()
    );
    state.push_event(GameEvent::LayerTrimmed {
        index,
        overlap: result.overlap,
        overhang: result.overhang,
    });

    // Next layer keeps the trimmed position on this axis and restarts from
    // its spawn point on the other one
    let next_axis = axis.flip();
    let (mut x, mut z) = state.spawn_position(next_axis);
    match axis {
        Axis::X => x = result.center,
        Axis::Z => z = result.center,
    }
    state.add_layer(x, z, width, depth);
    DropOutcome::Placed(result)
}
