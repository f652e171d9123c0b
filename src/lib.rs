//! Spin wheel widget engine
//!
//! Core modules:
//! - `spin`: rotation state machine and slice-boundary tick detection
//! - `layout`: wedge geometry, text placement, and adaptive label wrapping
//! - `wheel`: the imperative `SpinWheel` handle hosts drive
//! - `events`: the host notification queue (spins, ticks, resets)
//!
//! The engine owns no clock and draws no pixels. A host frame loop calls
//! [`SpinWheel::advance`] with elapsed milliseconds, drains
//! [`SpinWheel::drain_events`], and renders the [`layout`] output rotated by
//! [`SpinWheel::current_angle`].

pub mod config;
pub mod error;
pub mod events;
pub mod layout;
pub mod section;
pub mod spin;
pub mod wheel;

pub use config::{Easing, InitialRotation, WheelConfig};
pub use error::WheelError;
pub use events::{Callbacks, WheelEvent};
pub use section::Section;
pub use wheel::SpinWheel;

use glam::Vec2;

/// Engine tuning constants
pub mod consts {
    /// Default wheel diameter
    pub const DEFAULT_SIZE: f32 = 300.0;
    /// Default spin animation duration
    pub const DEFAULT_SPIN_DURATION_MS: f32 = 4000.0;
    /// Default full rotations before settling
    pub const DEFAULT_NUMBER_OF_SPINS: u32 = 5;

    /// Jitter bound as a fraction of one slice angle. Must stay strictly
    /// below 0.5 so the stop point never crosses into an adjacent slice.
    pub const MAX_JITTER_FRACTION: f32 = 0.35;

    /// Default title font size as a fraction of the wheel radius
    pub const TITLE_FONT_FRACTION: f32 = 0.12;
    /// Default description font size as a fraction of the wheel radius
    pub const DESCRIPTION_FONT_FRACTION: f32 = 0.07;
    /// Slice image edge length as a fraction of the wheel radius
    pub const IMAGE_SIZE_FRACTION: f32 = 0.25;

    /// Usable fraction of the chord length for text (reserves side margin)
    pub const CHORD_MARGIN: f32 = 0.85;
    /// Average glyph width as a fraction of the font size
    pub const GLYPH_WIDTH_FRACTION: f32 = 0.55;
    /// Vertical offset between two text lines, as a fraction of font size
    pub const LINE_OFFSET_FRACTION: f32 = 0.6;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_deg(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Convert polar (radius, angle in degrees) to cartesian (x, y).
///
/// The wheel center is the origin; angle 0 is the pointer direction.
#[inline]
pub fn polar_to_cartesian(radius: f32, angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(radius * rad.cos(), radius * rad.sin())
}
