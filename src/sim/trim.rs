//! Overlap computation for dropped layers
//!
//! A dropped layer is compared against the layer directly beneath it along the
//! axis it was travelling on. Whatever hangs over the edge is cut away and the
//! remainder is recentered over the overlapping region.

use super::layer::{Axis, Layer};

/// Result of trimming a dropped layer against its support
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimResult {
    /// Axis the trim was measured on
    pub axis: Axis,
    /// Signed offset of the dropped layer from the one beneath
    pub delta: f32,
    /// Length hanging past the edge (`|delta|`)
    pub overhang: f32,
    /// Length still supported (`size - overhang`); `<= 0` is a miss
    pub overlap: f32,
    /// Dropped layer's center on `axis` after recentering
    pub center: f32,
}

impl TrimResult {
    /// Whether any of the dropped layer is still supported.
    ///
    /// Strictly positive: an exact-zero overlap is a miss, and there is no
    /// minimum sliver width.
    #[inline]
    pub fn landed(&self) -> bool {
        self.overlap > 0.0
    }
}

/// Measure `top` against `beneath` along `axis`
pub fn trim(top: &Layer, beneath: &Layer, axis: Axis) -> TrimResult {
    let delta = top.coord(axis) - beneath.coord(axis);
    let size = top.extent(axis);
    let overhang = delta.abs();
    TrimResult {
        axis,
        delta,
        overhang,
        overlap: size - overhang,
        center: top.coord(axis) - delta / 2.0,
    }
}

/// Apply a landed trim to `layer`: shrink its extent on the trim axis and move it
/// over the supported region. The cross-axis extent is left untouched.
pub fn apply(layer: &mut Layer, result: &TrimResult) {
    layer.set_extent(result.axis, result.overlap);
    result.axis.set(&mut layer.pos, result.center);
}
