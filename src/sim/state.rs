//! Game state and the stack controller
//!
//! `StackState` is the single writer for the tower, the status and the
//! alternating travel direction. Everything else reads it.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::layer::{Axis, Layer};
use crate::score_for;
use crate::settings::StackConfig;

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Only the base exists, waiting for the first drop
    Ready,
    /// A layer is moving
    Running,
    /// Run ended; only a reset leaves this state
    Over,
}

/// Things that happened during a tick, for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new moving layer was appended
    LayerAdded { index: usize, axis: Axis },
    /// The active layer landed and was cut down to `overlap`
    LayerTrimmed {
        index: usize,
        overlap: f32,
        overhang: f32,
    },
    /// The active layer was dropped with no support under it
    Missed { index: usize, overhang: f32 },
    /// The active layer travelled to the bound without being dropped
    TravelLimit { index: usize },
    /// The run ended
    GameOver { score: u32 },
    /// Back to a bare base layer
    Reset,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackState {
    /// Tuning the stack was built with
    pub config: StackConfig,
    /// Simulation tick counter (cleared on reset)
    pub time_ticks: u64,
    status: GameStatus,
    layers: Vec<Layer>,
    next_direction: Axis,
    /// Bumped whenever the layer list changes identity (add or reset)
    revision: u64,
    /// Number of resets since construction
    resets: u64,
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl Default for StackState {
    fn default() -> Self {
        Self::new(StackConfig::default())
    }
}

impl StackState {
    /// Create a fresh game: a single base layer, waiting for the first drop
    pub fn new(config: StackConfig) -> Self {
        Self {
            config,
            time_ticks: 0,
            status: GameStatus::Ready,
            layers: vec![Layer::base(config.y_offset, config.initial_side)],
            next_direction: Axis::X,
            revision: 0,
            resets: 0,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// All layers, bottom to top
    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    #[inline]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Layers placed on top of the base
    #[inline]
    pub fn score(&self) -> u32 {
        score_for(self.layers.len())
    }

    /// Travel axis the next created layer will use
    #[inline]
    pub fn next_direction(&self) -> Axis {
        self.next_direction
    }

    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Bumped by every `reset`, so observers that skip frames still see one
    #[inline]
    pub fn reset_count(&self) -> u64 {
        self.resets
    }

    /// Height of the layer at `index`
    #[inline]
    pub fn layer_y(&self, index: usize) -> f32 {
        index as f32 * self.config.layer_height + self.config.y_offset
    }

    /// Index of the moving layer, if any
    pub fn active_index(&self) -> Option<usize> {
        if self.status != GameStatus::Running {
            return None;
        }
        let index = self.layers.len().checked_sub(1)?;
        (index > 0 && self.layers[index].active).then_some(index)
    }

    pub fn active_layer(&self) -> Option<&Layer> {
        self.active_index().map(|i| &self.layers[i])
    }

    pub(crate) fn active_layer_mut(&mut self) -> Option<&mut Layer> {
        let index = self.active_index()?;
        Some(&mut self.layers[index])
    }

    /// Spawn position on the ground plane for a layer travelling along `axis`
    pub fn spawn_position(&self, axis: Axis) -> (f32, f32) {
        match axis {
            Axis::X => (-self.config.spawn_offset, 0.0),
            Axis::Z => (0.0, -self.config.spawn_offset),
        }
    }

    /// Append a moving layer on top of the stack.
    ///
    /// Ignored once the game is over. The footprint must be positive; a drop
    /// with no overlap ends the game instead of calling this.
    pub fn add_layer(&mut self, x: f32, z: f32, width: f32, depth: f32) {
        if self.status == GameStatus::Over {
            log::warn!("add_layer ignored: game is over");
            return;
        }
        debug_assert!(
            width > 0.0 && depth > 0.0,
            "layer footprint must be positive ({width} x {depth})"
        );

        if let Some(top) = self.layers.last_mut() {
            top.active = false;
        }

        let index = self.layers.len();
        let axis = self.next_direction;
        self.layers.push(Layer {
            index,
            pos: Vec3::new(x, self.layer_y(index), z),
            width,
            depth,
            axis: Some(axis),
            active: true,
        });
        self.next_direction = axis.flip();
        self.status = GameStatus::Running;
        self.revision += 1;
        self.events.push(GameEvent::LayerAdded { index, axis });
        log::debug!(
            "Layer {} added at ({:.3}, {:.3}) size {:.3}x{:.3} moving along {}",
            index,
            x,
            z,
            width,
            depth,
            axis.as_str()
        );
    }

    /// Assign the status directly.
    ///
    /// Only `Over` and `Ready -> Running` are accepted; `Ready` comes from
    /// `reset` and nothing leaves `Over` except `reset`. Returns `false` when
    /// nothing changed, so repeated requests have no further effect. Moving to
    /// `Over` freezes the active layer.
    pub fn set_status(&mut self, status: GameStatus) -> bool {
        if self.status == status {
            return false;
        }
        match (self.status, status) {
            (_, GameStatus::Over) | (GameStatus::Ready, GameStatus::Running) => {}
            (_, GameStatus::Ready) => {
                log::warn!("set_status(Ready) ignored: use reset");
                return false;
            }
            (from, to) => {
                log::warn!("set_status ignored: {:?} -> {:?}", from, to);
                return false;
            }
        }
        if status == GameStatus::Over {
            if let Some(layer) = self.active_layer_mut() {
                layer.active = false;
            }
            let score = self.score();
            self.events.push(GameEvent::GameOver { score });
            log::info!("Game over with {} layers placed", score);
        }
        self.status = status;
        true
    }

    /// Back to a single base layer, waiting for the first drop
    pub fn reset(&mut self) {
        self.status = GameStatus::Ready;
        self.layers.clear();
        self.layers
            .push(Layer::base(self.config.y_offset, self.config.initial_side));
        self.next_direction = Axis::X;
        self.time_ticks = 0;
        self.revision += 1;
        self.resets += 1;
        self.events.push(GameEvent::Reset);
        log::info!("Stack reset");
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
