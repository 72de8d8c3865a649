//! Stack layers and travel axes

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Horizontal axis a layer travels along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Z,
}

impl Axis {
    /// The other horizontal axis
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Axis::X => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    /// Component of `pos` along this axis
    #[inline]
    pub fn of(self, pos: Vec3) -> f32 {
        match self {
            Axis::X => pos.x,
            Axis::Z => pos.z,
        }
    }

    /// Set the component of `pos` along this axis
    #[inline]
    pub fn set(self, pos: &mut Vec3, value: f32) {
        match self {
            Axis::X => pos.x = value,
            Axis::Z => pos.z = value,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Z => "z",
        }
    }
}

/// One block of the tower
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Position in the stack (0 = base)
    pub index: usize,
    /// Center of the block
    pub pos: Vec3,
    /// Extent along x
    pub width: f32,
    /// Extent along z
    pub depth: f32,
    /// Travel axis (`None` for the immobile base)
    pub axis: Option<Axis>,
    /// Still moving, not yet dropped
    pub active: bool,
}

impl Layer {
    /// The inert base layer
    pub fn base(y: f32, side: f32) -> Self {
        Self {
            index: 0,
            pos: Vec3::new(0.0, y, 0.0),
            width: side,
            depth: side,
            axis: None,
            active: false,
        }
    }

    /// Footprint extent along `axis`
    #[inline]
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Z => self.depth,
        }
    }

    /// Replace the footprint extent along `axis`
    #[inline]
    pub fn set_extent(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::X => self.width = value,
            Axis::Z => self.depth = value,
        }
    }

    /// Center coordinate along `axis`
    #[inline]
    pub fn coord(&self, axis: Axis) -> f32 {
        axis.of(self.pos)
    }
}
