//! Wheel configuration and easing curves

use crate::consts::*;
use crate::error::WheelError;
use crate::normalize_deg;

/// Easing curve mapping normalized time `[0,1]` to normalized progress
/// `[0,1]`. All built-in curves decelerate; `Custom` accepts any monotonic
/// function.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    QuadOut,
    #[default]
    CubicOut,
    /// Host-supplied curve. Output is clamped to `[0,1]`; a non-finite
    /// sample falls back to the `CubicOut` curve for that frame.
    Custom(fn(f32) -> f32),
}

impl Easing {
    /// Sample the curve at normalized time `t` (clamped to `[0,1]`).
    pub fn sample(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicOut => cubic_out(t),
            Easing::Custom(f) => {
                let v = f(t);
                if v.is_finite() { v.clamp(0.0, 1.0) } else { cubic_out(t) }
            }
        }
    }
}

#[inline]
fn cubic_out(t: f32) -> f32 {
    let u = 1.0 - t;
    1.0 - u * u * u
}

/// Starting orientation of the wheel.
///
/// `Index` aligns the given slice under the pointer and is converted to the
/// equivalent angle at construction; the two forms are mutually exclusive
/// by type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitialRotation {
    Degrees(f32),
    Index(usize),
}

impl Default for InitialRotation {
    fn default() -> Self {
        InitialRotation::Degrees(0.0)
    }
}

impl InitialRotation {
    /// Resolve to a concrete angle for a wheel of `n` slices.
    pub(crate) fn resolve(self, n: usize) -> Result<f32, WheelError> {
        match self {
            InitialRotation::Degrees(deg) => Ok(deg),
            InitialRotation::Index(index) => {
                if index >= n {
                    return Err(WheelError::InvalidConfig(format!(
                        "initial rotation index {index} out of range for {n} sections"
                    )));
                }
                let slice = 360.0 / n as f32;
                Ok(normalize_deg(360.0 - index as f32 * slice))
            }
        }
    }
}

/// Immutable-per-render wheel tuning parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelConfig {
    /// Wheel diameter
    pub size: f32,
    /// Wedge outline width (0 = no outline)
    pub stroke_width: f32,
    /// Spin animation duration in milliseconds
    pub spin_duration_ms: f32,
    /// Full rotations before settling; values >= 1 keep rotation strictly
    /// increasing across spins
    pub number_of_spins: u32,
    pub easing: Easing,
    pub initial_rotation: InitialRotation,
    /// Rigged outcome: `spin()` always lands here when set
    pub winning_index: Option<usize>,
    pub disabled: bool,
    /// RNG seed for deterministic jitter and target selection
    pub seed: Option<u64>,
    /// Overrides the default title font size (0.12 x radius)
    pub title_font_size: Option<f32>,
    /// Overrides the default description font size (0.07 x radius)
    pub description_font_size: Option<f32>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            stroke_width: 0.0,
            spin_duration_ms: DEFAULT_SPIN_DURATION_MS,
            number_of_spins: DEFAULT_NUMBER_OF_SPINS,
            easing: Easing::default(),
            initial_rotation: InitialRotation::default(),
            winning_index: None,
            disabled: false,
            seed: None,
            title_font_size: None,
            description_font_size: None,
        }
    }
}

impl WheelConfig {
    /// Wheel radius
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::QuadOut, Easing::CubicOut] {
            assert_eq!(easing.sample(0.0), 0.0);
            assert_eq!(easing.sample(1.0), 1.0);
            // Out-of-range time is clamped
            assert_eq!(easing.sample(-1.0), 0.0);
            assert_eq!(easing.sample(2.0), 1.0);
        }
    }

    #[test]
    fn test_cubic_out_decelerates() {
        let e = Easing::CubicOut;
        // First half covers more progress than the second half
        assert!(e.sample(0.5) > 0.5);
        // Monotonic on a coarse grid
        let mut prev = 0.0;
        for i in 1..=20 {
            let v = e.sample(i as f32 / 20.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_custom_easing_fallback() {
        let broken = Easing::Custom(|_| f32::NAN);
        assert!((broken.sample(0.5) - Easing::CubicOut.sample(0.5)).abs() < 1e-6);

        let wild = Easing::Custom(|_| 7.0);
        assert_eq!(wild.sample(0.5), 1.0);
    }

    #[test]
    fn test_initial_rotation_index() {
        // 6 slices: index 2 sits under the pointer at 360 - 2*60 = 240
        assert_eq!(InitialRotation::Index(2).resolve(6).unwrap(), 240.0);
        assert_eq!(InitialRotation::Index(0).resolve(6).unwrap(), 0.0);
        assert!(InitialRotation::Index(6).resolve(6).is_err());
        assert_eq!(InitialRotation::Degrees(-30.0).resolve(6).unwrap(), -30.0);
    }
}
