//! Time-driven motion: per-particle breathing and the group wobble.
//!
//! Both are pure functions of elapsed time (and, for breathing, the particle
//! index). Nothing here accumulates state between frames.
//!
//! Phases are computed in `f64` from `f64` seconds; only the `sin`/`cos`
//! result is narrowed to `f32`.

use glam::{EulerRot, Mat4, Vec3};

use crate::config::FieldConfig;

/// Breathing parameters: `offset(t, i) = sin(t * speed + i * phase_step) * amplitude`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breathing {
    pub speed: f64,
    pub phase_step: f64,
    pub amplitude: f32,
    /// Applied to the offset on the y axis.
    pub vertical_damping: f32,
}

impl Breathing {
    pub fn from_config(config: &FieldConfig) -> Self {
        Self {
            speed: config.breath_speed,
            phase_step: config.phase_step,
            amplitude: config.amplitude,
            vertical_damping: config.vertical_damping,
        }
    }

    /// Relative displacement of particle `index` at `t` seconds.
    #[inline]
    pub fn offset(&self, t: f64, index: usize) -> f32 {
        (t * self.speed + index as f64 * self.phase_step).sin() as f32 * self.amplitude
    }

    /// Per-axis scale factors for a given offset.
    #[inline]
    pub fn scale(&self, offset: f32) -> Vec3 {
        let horizontal = 1.0 + offset;
        Vec3::new(horizontal, 1.0 + offset * self.vertical_damping, horizontal)
    }

    /// Current position of particle `index` at `t` seconds.
    #[inline]
    pub fn displace(&self, base: Vec3, t: f64, index: usize) -> Vec3 {
        base * self.scale(self.offset(t, index))
    }
}

/// Rotation of the whole cloud, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GroupRotation {
    /// Pitch.
    pub x: f32,
    /// Yaw.
    pub y: f32,
}

impl GroupRotation {
    /// Model matrix, applying x then y then z intrinsically.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.x, self.y, 0.0)
    }
}

/// Wobble parameters for the group rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wobble {
    pub speed: f64,
    pub yaw: f32,
    pub pitch: f32,
    pub pitch_rate: f64,
}

impl Wobble {
    pub fn from_config(config: &FieldConfig) -> Self {
        Self {
            speed: config.rotation_speed,
            yaw: config.wobble_yaw,
            pitch: config.wobble_pitch,
            pitch_rate: config.pitch_rate,
        }
    }

    /// Rotation at `t` seconds. Bounded by `yaw` and `pitch` for every `t`.
    pub fn at(&self, t: f64) -> GroupRotation {
        GroupRotation {
            y: (t * self.speed).sin() as f32 * self.yaw,
            x: (t * self.speed * self.pitch_rate).cos() as f32 * self.pitch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn breathing() -> Breathing {
        Breathing::from_config(&FieldConfig::default())
    }

    fn wobble() -> Wobble {
        Wobble::from_config(&FieldConfig::default())
    }

    #[test]
    fn test_offset_at_zero_matches_literals() {
        let b = breathing();
        for i in 0..2500 {
            let expected = (i as f64 * 0.12).sin() as f32 * 0.015;
            assert_eq!(b.offset(0.0, i), expected);
        }
    }

    #[test]
    fn test_offset_is_deterministic() {
        let b = breathing();
        assert_eq!(b.offset(12.34, 99), b.offset(12.34, 99));
        let expected = (12.34f64 * 1.0 + 99.0 * 0.12).sin() as f32 * 0.015;
        assert_eq!(b.offset(12.34, 99), expected);
    }

    #[test]
    fn test_displace_scales_axes() {
        let b = breathing();
        let base = Vec3::new(1.0, 1.0, 1.0);
        // index 13 at t = 0 has sin(1.56) close to 1
        let off = b.offset(0.0, 13);
        let p = b.displace(base, 0.0, 13);
        assert_eq!(p.x, 1.0 + off);
        assert_eq!(p.y, 1.0 + off * 0.6);
        assert_eq!(p.z, 1.0 + off);
    }

    #[test]
    fn test_rotation_at_zero() {
        let r = wobble().at(0.0);
        assert_eq!(r.y, 0.0);
        assert_eq!(r.x, 0.07);
    }

    #[test]
    fn test_rotation_matrix_identity_when_still() {
        let m = GroupRotation::default().matrix();
        assert!(m.abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn test_wobble_keeps_moving_after_ten_days() {
        let w = wobble();
        let b = breathing();
        let later = 10.0 * 24.0 * 60.0 * 60.0;
        let frame = 1.0 / 60.0;

        let mut prev = (w.at(later), b.offset(later, 7));
        for k in 1..=60 {
            let t = later + k as f64 * frame;
            let next = (w.at(t), b.offset(t, 7));
            assert_ne!(next, prev, "frame {k} repeated the previous pose");
            prev = next;
        }
    }

    proptest! {
        #[test]
        fn rotation_is_bounded(t in -1.0e7f64..1.0e7) {
            let r = wobble().at(t);
            prop_assert!(r.y.abs() <= 0.15);
            prop_assert!(r.x.abs() <= 0.07);
        }

        #[test]
        fn vertical_displacement_never_exceeds_horizontal(
            t in 0.0f64..1.0e7,
            i in 0usize..10_000,
        ) {
            let b = breathing();
            let off = b.offset(t, i);
            let s = b.scale(off);
            prop_assert!((s.y - 1.0).abs() <= (s.x - 1.0).abs());
            prop_assert_eq!(s.x, s.z);
        }

        #[test]
        fn offset_is_bounded_by_amplitude(t in 0.0f64..1.0e7, i in 0usize..10_000) {
            prop_assert!(breathing().offset(t, i).abs() <= 0.015);
        }
    }
}
