//! Slice-boundary crossing detection
//!
//! The detector is a polling observer: the controller feeds it every new
//! rotation sample and it reports how many slice boundaries were crossed
//! since the previous sample. Crossings are counted against the unbounded
//! rotation angle, so a coarse frame that jumps several slices still yields
//! one tick per boundary passed, independent of frame rate.

use crate::normalize_deg;

/// The slice index currently aligned with the fixed pointer at angle 0.
///
/// Slice `i` is centered at `i * slice_angle`; forward wheel rotation moves
/// the pointer backward through slice indices.
pub fn pointer_index(angle_deg: f32, n: usize) -> usize {
    let slice = 360.0 / n as f32;
    let norm = normalize_deg(angle_deg);
    (((360.0 - norm + slice / 2.0) / slice).floor() as usize) % n
}

/// Counts boundary crossings between successive rotation samples.
#[derive(Debug, Clone)]
pub struct TickDetector {
    slice_angle: f32,
    /// Boundary count at the last sample, over the unbounded angle
    last_boundary: i64,
}

impl TickDetector {
    pub fn new(n: usize, initial_angle: f32) -> Self {
        let slice_angle = 360.0 / n as f32;
        Self {
            slice_angle,
            last_boundary: boundary_count(initial_angle, slice_angle),
        }
    }

    /// Observe a new rotation sample; returns the number of slice
    /// boundaries crossed since the previous one.
    ///
    /// Rotation is monotonically non-decreasing during animation, so a
    /// negative delta (only possible around a synchronous reset) is
    /// reported as zero rather than replayed backward.
    pub fn sample(&mut self, angle_deg: f32) -> u32 {
        let boundary = boundary_count(angle_deg, self.slice_angle);
        let crossings = (boundary - self.last_boundary).max(0) as u32;
        self.last_boundary = boundary;
        crossings
    }

    /// Re-base on an angle without reporting crossings (synchronous jumps
    /// such as `reset` are not animation and must not tick).
    pub fn resync(&mut self, angle_deg: f32) {
        self.last_boundary = boundary_count(angle_deg, self.slice_angle);
    }
}

/// Number of slice boundaries at or below `angle`. Boundaries sit at
/// `(k - 1/2) * slice_angle`, halfway between slice centers, matching
/// [`pointer_index`]'s bucket edges.
#[inline]
fn boundary_count(angle_deg: f32, slice_angle: f32) -> i64 {
    ((angle_deg + slice_angle / 2.0) / slice_angle).floor() as i64
}
