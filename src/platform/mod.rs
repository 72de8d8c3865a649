//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Time/ticks (variable frame time to fixed simulation steps)

pub mod clock;

pub use clock::FixedStep;
