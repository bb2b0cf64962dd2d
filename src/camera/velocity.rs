//! Pixel-delta to angular-velocity conversion.
//!
//! Horizontal and vertical drags use different divisors so the two axes
//! feel balanced on a typical wide viewport. The formulas are evaluated
//! in `f64` with a fixed operation order, so a given drag always produces
//! the same bits.

use std::f64::consts::PI;

use glam::DVec2;

/// Angular velocity in radians per event (drag) or per tick (momentum).
///
/// `x` turns the camera about its horizontal axis (pitch) and is driven by
/// vertical drags; `y` turns it about the vertical axis (yaw) and is driven
/// by horizontal drags.
pub type Velocity = DVec2;

/// Degrees to radians.
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Lowest accepted sensitivity.
pub const MIN_SENSITIVITY: i32 = 0;
/// Highest accepted sensitivity. 19 would divide by zero.
pub const MAX_SENSITIVITY: i32 = 18;

/// Divisor applied to horizontal drags.
const HORIZONTAL_DIVISOR: f64 = 10.0;
/// Divisor applied to vertical drags.
const VERTICAL_DIVISOR: f64 = 7.0;

/// Gain on the horizontal release speed (px/ms) before conversion.
pub const HORIZONTAL_FLICK_GAIN: f64 = 50.0;
/// Gain on the vertical release speed (px/ms) before conversion.
pub const VERTICAL_FLICK_GAIN: f64 = 10.0;

/// Clamp a configured sensitivity into `MIN_SENSITIVITY..=MAX_SENSITIVITY`.
#[must_use]
pub fn clamp_sensitivity(sensitivity: i32) -> i32 {
    let clamped = sensitivity.clamp(MIN_SENSITIVITY, MAX_SENSITIVITY);
    if clamped != sensitivity {
        log::debug!("sensitivity {sensitivity} out of range, using {clamped}");
    }
    clamped
}

/// `(19 - s) / 18`, shrinking toward zero as sensitivity rises.
fn sensitivity_scale(sensitivity: i32) -> f64 {
    f64::from(19 - clamp_sensitivity(sensitivity)) / 18.0
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Angular velocity for a horizontal pixel delta.
#[must_use]
pub fn horizontal_velocity(delta_pixels: f64, sensitivity: i32) -> f64 {
    finite_or_zero(
        (delta_pixels * DEG_TO_RAD)
            / (HORIZONTAL_DIVISOR * sensitivity_scale(sensitivity)),
    )
}

/// Angular velocity for a vertical pixel delta.
#[must_use]
pub fn vertical_velocity(delta_pixels: f64, sensitivity: i32) -> f64 {
    finite_or_zero(
        (delta_pixels * DEG_TO_RAD)
            / (VERTICAL_DIVISOR * sensitivity_scale(sensitivity)),
    )
}

/// Rotation for one pointer-move delta.
///
/// Vertical movement pitches (`x`), horizontal movement yaws (`y`).
#[must_use]
pub fn drag_velocity(delta: DVec2, sensitivity: i32) -> Velocity {
    Velocity::new(
        vertical_velocity(delta.y, sensitivity),
        horizontal_velocity(delta.x, sensitivity),
    )
}

/// Momentum seed for an averaged release speed in px/ms.
///
/// Each axis gets its flick gain first. The divisors are swapped relative
/// to [`drag_velocity`]: the vertical speed goes through the horizontal
/// formula and vice versa. This matches the tuned feel and is kept as is.
#[must_use]
pub fn release_velocity(average_speed: DVec2, sensitivity: i32) -> Velocity {
    Velocity::new(
        horizontal_velocity(average_speed.y * VERTICAL_FLICK_GAIN, sensitivity),
        vertical_velocity(average_speed.x * HORIZONTAL_FLICK_GAIN, sensitivity),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_at_mid_sensitivity() {
        // (19 - 10) / 18 = 0.5, so 36 px -> 36 deg / 5
        let v = horizontal_velocity(36.0, 10);
        assert!((v - 0.125_663_706_143_6).abs() < 1e-12);
        assert_eq!(v, (36.0 * DEG_TO_RAD) / (10.0 * 0.5));
    }

    #[test]
    fn both_axes_are_linear_and_signed() {
        for s in MIN_SENSITIVITY..=MAX_SENSITIVITY {
            let h1 = horizontal_velocity(12.0, s);
            let h3 = horizontal_velocity(36.0, s);
            assert!(h1 > 0.0);
            assert!((h3 - 3.0 * h1).abs() < 1e-12);
            assert_eq!(horizontal_velocity(-12.0, s), -h1);

            let v1 = vertical_velocity(12.0, s);
            assert!(v1 > 0.0);
            assert!((vertical_velocity(36.0, s) - 3.0 * v1).abs() < 1e-12);
            assert_eq!(horizontal_velocity(0.0, s), 0.0);
        }
    }

    #[test]
    fn vertical_formula_has_the_smaller_divisor() {
        // Same delta: vertical / horizontal == 10 / 7
        for s in [0, 5, 10, 18] {
            let ratio = vertical_velocity(20.0, s) / horizontal_velocity(20.0, s);
            assert!((ratio - 10.0 / 7.0).abs() < 1e-12);
        }
    }

    #[test]
    fn higher_sensitivity_turns_faster() {
        assert!(horizontal_velocity(10.0, 15) > horizontal_velocity(10.0, 5));
    }

    #[test]
    fn degenerate_sensitivity_is_clamped() {
        assert_eq!(clamp_sensitivity(19), MAX_SENSITIVITY);
        assert_eq!(clamp_sensitivity(-4), MIN_SENSITIVITY);
        assert_eq!(horizontal_velocity(10.0, 19), horizontal_velocity(10.0, 18));
        assert!(vertical_velocity(10.0, 1000).is_finite());
    }

    #[test]
    fn non_finite_input_becomes_zero() {
        assert_eq!(horizontal_velocity(f64::NAN, 10), 0.0);
        assert_eq!(vertical_velocity(f64::INFINITY, 10), 0.0);
    }

    #[test]
    fn drag_cross_maps_axes() {
        let v = drag_velocity(DVec2::new(36.0, 0.0), 10);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, horizontal_velocity(36.0, 10));

        let v = drag_velocity(DVec2::new(0.0, 14.0), 10);
        assert_eq!(v.x, vertical_velocity(14.0, 10));
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn release_applies_gains_and_swapped_divisors() {
        let v = release_velocity(DVec2::new(0.2, 0.3), 10);
        assert_eq!(v.x, horizontal_velocity(0.3 * 10.0, 10));
        assert_eq!(v.y, vertical_velocity(0.2 * 50.0, 10));
    }
}
