//! Spin state machine
//!
//! Owns the unbounded rotation angle and the in-flight animation. The
//! controller is externally clocked: the host loop calls [`advance`] with
//! elapsed milliseconds and the controller integrates through the easing
//! curve. Dropping the `SpinAnimation` (new spin, reset) is the
//! cancellation mechanism: a dropped animation's completion cannot fire.
//!
//! [`advance`]: RotationController::advance

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{Easing, WheelConfig};
use crate::consts::MAX_JITTER_FRACTION;

/// One animated transition toward a target slice.
#[derive(Debug, Clone)]
struct SpinAnimation {
    start_angle: f32,
    target_angle: f32,
    target_index: usize,
    duration_ms: f32,
    elapsed_ms: f32,
}

/// Rotation state machine: `Idle` when `animation` is `None`, `Spinning`
/// otherwise. Reusable; never terminal.
#[derive(Debug, Clone)]
pub struct RotationController {
    /// Unbounded rotation in degrees, monotonically non-decreasing across
    /// successive spins (guaranteed for `number_of_spins >= 1`)
    current_angle: f32,
    initial_angle: f32,
    n: usize,
    spin_duration_ms: f32,
    number_of_spins: u32,
    easing: Easing,
    rng: Pcg32,
    animation: Option<SpinAnimation>,
}

impl RotationController {
    pub fn new(n: usize, initial_angle: f32, config: &WheelConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self {
            current_angle: initial_angle,
            initial_angle,
            n,
            spin_duration_ms: config.spin_duration_ms,
            number_of_spins: config.number_of_spins,
            easing: config.easing,
            rng: Pcg32::seed_from_u64(seed),
            animation: None,
        }
    }

    #[inline]
    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }

    #[inline]
    pub fn is_spinning(&self) -> bool {
        self.animation.is_some()
    }

    /// Uniformly random slice index, for unrigged `spin()` calls.
    pub fn random_index(&mut self) -> usize {
        self.rng.random_range(0..self.n)
    }

    /// Start an animated transition that settles slice `target_index`
    /// under the pointer. Replaces any in-flight animation.
    pub fn begin_spin(&mut self, target_index: usize) {
        let slice = 360.0 / self.n as f32;
        let jitter = self.rng.random_range(-MAX_JITTER_FRACTION..MAX_JITTER_FRACTION) * slice;
        let target_angle = target_angle(
            self.current_angle,
            target_index,
            self.n,
            self.number_of_spins,
            jitter,
        );
        log::debug!(
            "spin: index {target_index}, {:.1} -> {:.1} deg over {:.0}ms",
            self.current_angle,
            target_angle,
            self.spin_duration_ms
        );
        self.animation = Some(SpinAnimation {
            start_angle: self.current_angle,
            target_angle,
            target_index,
            duration_ms: self.spin_duration_ms,
            elapsed_ms: 0.0,
        });
    }

    /// Advance the animation by `dt_ms`. Returns the settled target index
    /// on the frame the animation completes, `None` otherwise.
    pub fn advance(&mut self, dt_ms: f32) -> Option<usize> {
        let anim = self.animation.as_mut()?;
        anim.elapsed_ms += dt_ms.max(0.0);

        let t = if anim.duration_ms > 0.0 {
            anim.elapsed_ms / anim.duration_ms
        } else {
            1.0
        };

        if t >= 1.0 {
            // Snap exactly onto the target so the landed bucket is the
            // computed one, not a float approximation of it
            self.current_angle = anim.target_angle;
            let index = anim.target_index;
            self.animation = None;
            return Some(index);
        }

        let progress = self.easing.sample(t);
        self.current_angle = anim.start_angle + (anim.target_angle - anim.start_angle) * progress;
        None
    }

    /// Synchronously drop any in-flight animation and restore the initial
    /// angle. No interpolation, no completion.
    pub fn reset(&mut self) {
        self.animation = None;
        self.current_angle = self.initial_angle;
    }
}

/// Absolute angle that puts slice `index`'s center (displaced by `jitter`)
/// under the pointer after `number_of_spins` extra revolutions.
///
/// `angle_needed` is the forward rotation to alignment, so the result
/// is strictly greater than `current_angle` whenever `number_of_spins >= 1`
/// and `|jitter| < slice/2` - the monotonicity the tick detector relies on.
pub(crate) fn target_angle(
    current_angle: f32,
    index: usize,
    n: usize,
    number_of_spins: u32,
    jitter: f32,
) -> f32 {
    let slice = 360.0 / n as f32;
    let current_mod = current_angle.rem_euclid(360.0);
    let angle_needed = (360.0 - current_mod - index as f32 * slice).rem_euclid(360.0);
    current_angle + angle_needed + 360.0 * number_of_spins as f32 + jitter
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spin::ticks::pointer_index;

    fn controller(n: usize, seed: u64) -> RotationController {
        let config = WheelConfig {
            seed: Some(seed),
            ..WheelConfig::default()
        };
        RotationController::new(n, 0.0, &config)
    }

    #[test]
    fn test_target_angle_concrete() {
        // 4 slices, spin to index 2 from 0 with 3 revolutions, no jitter:
        // 3*360 + (360 - 0 - 180) = 1260
        let target = target_angle(0.0, 2, 4, 3, 0.0);
        assert!((target - 1260.0).abs() < 1e-3);
        assert_eq!(pointer_index(target, 4), 2);
    }

    #[test]
    fn test_target_angle_strictly_increases() {
        let mut angle = 123.4;
        for index in [0usize, 3, 1, 1, 2] {
            let next = target_angle(angle, index, 4, 1, 0.0);
            assert!(next > angle);
            angle = next;
        }
    }

    #[test]
    fn test_target_angle_lands_in_bucket_despite_jitter() {
        // Jitter below half a slice never changes the landed bucket
        for n in [2usize, 3, 4, 6, 12] {
            let slice = 360.0 / n as f32;
            for index in 0..n {
                for jitter_frac in [-0.35f32, -0.1, 0.0, 0.2, 0.35] {
                    let target = target_angle(77.7, index, n, 5, jitter_frac * slice);
                    assert_eq!(pointer_index(target, n), index);
                }
            }
        }
    }

    proptest::proptest! {
        #[test]
        fn prop_target_lands_in_bucket(
            current in -720.0f32..720.0,
            n in 1usize..16,
            index_seed in 0usize..16,
            spins in 1u32..8,
            jitter_frac in -0.35f32..0.35,
        ) {
            let index = index_seed % n;
            let slice = 360.0 / n as f32;
            let target = target_angle(current, index, n, spins, jitter_frac * slice);
            proptest::prop_assert!(target > current);
            proptest::prop_assert_eq!(pointer_index(target, n), index);
        }
    }

    #[test]
    fn test_advance_completes_on_target() {
        let mut c = controller(6, 42);
        c.begin_spin(5);
        assert!(c.is_spinning());

        let mut settled = None;
        // 4000ms at 16ms frames
        for _ in 0..300 {
            if let Some(index) = c.advance(16.0) {
                settled = Some(index);
                break;
            }
        }
        assert_eq!(settled, Some(5));
        assert!(!c.is_spinning());
        assert_eq!(pointer_index(c.current_angle(), 6), 5);
    }

    #[test]
    fn test_advance_is_monotonic_within_a_spin() {
        let mut c = controller(4, 7);
        c.begin_spin(1);
        let mut prev = c.current_angle();
        while c.advance(16.0).is_none() {
            assert!(c.current_angle() >= prev);
            prev = c.current_angle();
        }
    }

    #[test]
    fn test_new_spin_replaces_old_animation() {
        let mut c = controller(4, 7);
        c.begin_spin(1);
        c.advance(50.0);
        // Second spin takes over mid-flight; completion reports the new
        // target, the old animation is gone
        c.begin_spin(3);
        let mut settled = None;
        for _ in 0..400 {
            if let Some(index) = c.advance(16.0) {
                settled = Some(index);
                break;
            }
        }
        assert_eq!(settled, Some(3));
    }

    #[test]
    fn test_reset_restores_initial_angle() {
        let config = WheelConfig {
            seed: Some(9),
            ..WheelConfig::default()
        };
        let mut c = RotationController::new(4, 33.0, &config);
        c.begin_spin(2);
        c.advance(50.0);
        c.reset();
        assert!(!c.is_spinning());
        assert_eq!(c.current_angle(), 33.0);
        // No stale completion after the reset
        assert_eq!(c.advance(10_000.0), None);
    }

    #[test]
    fn test_random_index_in_range() {
        let mut c = controller(6, 1234);
        for _ in 0..100 {
            assert!(c.random_index() < 6);
        }
    }

    #[test]
    fn test_seeded_controllers_agree() {
        let mut a = controller(8, 555);
        let mut b = controller(8, 555);
        a.begin_spin(3);
        b.begin_spin(3);
        for _ in 0..10 {
            a.advance(16.0);
            b.advance(16.0);
        }
        assert_eq!(a.current_angle(), b.current_angle());
    }
}
