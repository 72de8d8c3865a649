//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One motion step per tick, no wall-clock time
//! - Seeded RNG only (demo player)
//! - Single writer: `StackState`
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod camera;
pub mod drop;
pub mod layer;
pub mod state;
pub mod tick;
pub mod trim;

pub use autoplay::AutoPlayer;
pub use camera::CameraDolly;
pub use drop::{DropOutcome, drop_layer};
pub use layer::{Axis, Layer};
pub use state::{GameEvent, GameStatus, StackState};
pub use tick::{TickInput, advance_active, tick};
pub use trim::{TrimResult, trim};
