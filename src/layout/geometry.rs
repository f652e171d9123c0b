//! Wedge geometry
//!
//! Pure functions from (index, angle, radius) to renderable shapes. The
//! wheel center is the origin and slice `i` of `n` is centered at
//! `i * slice_angle`, spanning half a slice to either side; the pointer
//! sits at angle 0. Global wheel orientation is applied by the host, so
//! everything here is orientation-independent.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::polar_to_cartesian;

/// Angular width of one slice, in degrees. Slices partition 360 exactly.
#[inline]
pub fn slice_angle(n: usize) -> f32 {
    360.0 / n as f32
}

/// `[start, end]` angular extent of slice `index`, centered on the slice.
#[inline]
pub fn wedge_span(index: usize, n: usize) -> (f32, f32) {
    let slice = slice_angle(n);
    let mid = index as f32 * slice;
    (mid - slice / 2.0, mid + slice / 2.0)
}

/// One wedge outline: the closed region bounded by two radii and the
/// connecting arc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WedgePath {
    /// Wheel center (the origin)
    pub center: Vec2,
    /// Rim point at the start angle
    pub start: Vec2,
    /// Rim point at the end angle
    pub end: Vec2,
    pub radius: f32,
    /// Arc sweep exceeds 180 degrees (only for a single-slice wheel)
    pub large_arc: bool,
}

impl WedgePath {
    /// SVG path description: move to center, line to the start rim point,
    /// arc to the end rim point, close.
    pub fn to_svg(&self) -> String {
        format!(
            "M {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
            self.center.x,
            self.center.y,
            self.start.x,
            self.start.y,
            self.radius,
            self.radius,
            u8::from(self.large_arc),
            self.end.x,
            self.end.y,
        )
    }
}

/// Build the wedge outline spanning `[start_deg, end_deg]` at `radius`.
pub fn wedge_path(radius: f32, start_deg: f32, end_deg: f32) -> WedgePath {
    WedgePath {
        center: Vec2::ZERO,
        start: polar_to_cartesian(radius, start_deg),
        end: polar_to_cartesian(radius, end_deg),
        radius,
        large_arc: end_deg - start_deg > 180.0,
    }
}

/// Straight-line distance between a slice's two edge points at `radius`;
/// bounds how wide a text run can be.
#[inline]
pub fn chord_length(radius: f32, slice_angle_deg: f32) -> f32 {
    2.0 * radius * (slice_angle_deg / 2.0).to_radians().sin()
}
