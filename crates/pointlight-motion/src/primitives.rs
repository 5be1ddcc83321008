//! Motion Primitive Library - stateless waveform helpers
//!
//! Every function is pure and total over the reals. Callers wrap or clamp
//! phase according to the action's duration semantics.

use std::f64::consts::TAU;

use pointlight_core::Vec2;

/// Sinusoidal motion: `amplitude · sin(2π · frequency · phase + phase_offset)`
///
/// Bounded in `[-|amplitude|, |amplitude|]`; non-finite results collapse to 0.
#[inline]
pub fn oscillate(phase: f64, frequency: f64, amplitude: f64, phase_offset: f64) -> f64 {
    let value = amplitude * (TAU * frequency * phase + phase_offset).sin();
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Jump trajectory `4p(1 − p)`: 0 at phase 0 and 1, peak 1 at 0.5
#[inline]
pub fn parabolic_arc(phase: f64) -> f64 {
    let value = 4.0 * phase * (1.0 - phase);
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Smoothstep over `clamp(phase, 0, 1)`: monotone, flat at both ends,
/// exactly 0 at 0 and exactly 1 at 1
#[inline]
pub fn ease_in_out(phase: f64) -> f64 {
    let p = clamp_unit(phase);
    p * p * (3.0 - 2.0 * p)
}

/// Rigid rotation about the origin (counter-clockwise for positive angles)
#[inline]
pub fn rotate2d(point: Vec2, angle: f64) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(point.x * c - point.y * s, point.x * s + point.y * c)
}

/// Rigid rotation about an arbitrary pivot
#[inline]
pub fn rotate2d_about(point: Vec2, pivot: Vec2, angle: f64) -> Vec2 {
    pivot + rotate2d(point - pivot, angle)
}

/// Out-and-back hump: 0 at phase 0, 1 at 0.5, 0 at 1
#[inline]
pub fn triangle(phase: f64) -> f64 {
    1.0 - (2.0 * clamp_unit(phase) - 1.0).abs()
}

/// Delay a transition by `lag` (fraction of the transition) while keeping
/// both endpoints fixed: 0 maps to 0 and 1 maps to 1.
#[inline]
pub fn remap_lagged(phase: f64, lag: f64) -> f64 {
    let lag = if lag.is_finite() { lag.clamp(0.0, 0.9) } else { 0.0 };
    if lag == 0.0 {
        return clamp_unit(phase);
    }
    clamp_unit((phase - lag) / (1.0 - lag))
}

/// Clamp to [0, 1]; NaN maps to 0
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    #[test]
    fn test_oscillate_values() {
        assert_eq!(oscillate(0.0, 1.0, 2.0, 0.0), 0.0);
        assert!((oscillate(0.25, 1.0, 2.0, 0.0) - 2.0).abs() < 1e-12);
        assert!((oscillate(0.0, 1.0, 2.0, PI / 2.0) - 2.0).abs() < 1e-12);
        assert_eq!(oscillate(f64::NAN, 1.0, 1.0, 0.0), 0.0);
        assert_eq!(oscillate(f64::INFINITY, 1.0, 1.0, 0.0), 0.0);
    }

    #[test]
    fn test_parabolic_arc() {
        assert_eq!(parabolic_arc(0.0), 0.0);
        assert_eq!(parabolic_arc(1.0), 0.0);
        assert_eq!(parabolic_arc(0.5), 1.0);
        assert!((parabolic_arc(0.25) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_ease_in_out_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert_eq!(ease_in_out(-3.0), 0.0);
        assert_eq!(ease_in_out(7.0), 1.0);
        assert_eq!(ease_in_out(f64::NAN), 0.0);

        // Flat at the ends
        let h = 1e-6;
        assert!(ease_in_out(h) / h < 1e-5);
        assert!((1.0 - ease_in_out(1.0 - h)) / h < 1e-5);
    }

    #[test]
    fn test_triangle_and_lag() {
        assert_eq!(triangle(0.0), 0.0);
        assert_eq!(triangle(0.5), 1.0);
        assert_eq!(triangle(1.0), 0.0);

        assert_eq!(remap_lagged(0.0, 0.08), 0.0);
        assert_eq!(remap_lagged(1.0, 0.08), 1.0);
        assert_eq!(remap_lagged(0.05, 0.08), 0.0);
        assert!(remap_lagged(0.5, 0.08) < 0.5);
        assert_eq!(remap_lagged(0.3, 0.0), 0.3);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let p = rotate2d(Vec2::new(1.0, 0.0), PI / 2.0);
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);

        let q = rotate2d_about(Vec2::new(2.0, 1.0), Vec2::new(1.0, 1.0), PI);
        assert!((q.x - 0.0).abs() < 1e-12);
        assert!((q.y - 1.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_oscillate_bounded(
            phase in proptest::num::f64::ANY,
            frequency in -100.0f64..100.0,
            amplitude in 0.0f64..1.0e3,
            offset in -10.0f64..10.0,
        ) {
            let v = oscillate(phase, frequency, amplitude, offset);
            prop_assert!(v >= -amplitude && v <= amplitude);
        }

        #[test]
        fn prop_rotation_roundtrip(
            x in -1.0e3f64..1.0e3,
            y in -1.0e3f64..1.0e3,
            angle in -100.0f64..100.0,
        ) {
            let p = Vec2::new(x, y);
            let back = rotate2d(rotate2d(p, angle), -angle);
            prop_assert!((back.x - p.x).abs() <= 1e-9);
            prop_assert!((back.y - p.y).abs() <= 1e-9);
        }

        #[test]
        fn prop_ease_in_out_monotone(a in -1.0f64..2.0, b in -1.0f64..2.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let (ease_lo, ease_hi) = (ease_in_out(lo), ease_in_out(hi));
            prop_assert!(ease_lo <= ease_hi);
            prop_assert!((0.0..=1.0).contains(&ease_lo));
            prop_assert!((0.0..=1.0).contains(&ease_hi));
        }
    }
}
