use std::f32::consts::{PI, TAU};

use glam::{EulerRot, Mat4, Vec3};

/// Endless constant-rate rotation about the X, Y and Z axes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spin {
    /// Angular velocity per axis, radians per second.
    pub rate: Vec3,
    angles: Vec3,
}

impl Default for Spin {
    /// A sixth of a half turn on every axis each half second.
    fn default() -> Self {
        Self::uniform((PI / 6.0) / 0.5)
    }
}

impl Spin {
    pub fn new(rate: Vec3) -> Self {
        Self {
            rate,
            angles: Vec3::ZERO,
        }
    }

    /// Same angular velocity on all three axes.
    pub fn uniform(rate: f32) -> Self {
        Self::new(Vec3::splat(rate))
    }

    /// Current angles, each wrapped to `[0, 2π)`.
    #[inline]
    pub fn angles(&self) -> Vec3 {
        self.angles
    }

    /// Advances the rotation by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        let next = self.angles + self.rate * dt;
        self.angles = Vec3::new(
            next.x.rem_euclid(TAU),
            next.y.rem_euclid(TAU),
            next.z.rem_euclid(TAU),
        );
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.angles.x, self.angles.y, self.angles.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rate_matches_sixth_turn_per_half_second() {
        let mut spin = Spin::default();
        spin.advance(0.5);
        let expected = PI / 6.0;
        assert!((spin.angles() - Vec3::splat(expected)).abs().max_element() < 1e-5);
    }

    #[test]
    fn angles_wrap_into_one_turn() {
        let mut spin = Spin::uniform(1.0);
        for _ in 0..100 {
            spin.advance(0.25);
        }
        let a = spin.angles();
        assert!(a.min_element() >= 0.0 && a.max_element() < TAU);
        assert!((a.x - 25f32.rem_euclid(TAU)).abs() < 1e-3);
    }

    #[test]
    fn negative_rate_stays_in_range() {
        let mut spin = Spin::uniform(-2.0);
        spin.advance(0.1);
        assert!(spin.angles().min_element() >= 0.0);
    }

    #[test]
    fn model_matrix_is_pure_rotation() {
        let mut spin = Spin::default();
        spin.advance(1.3);
        let m = spin.model_matrix();
        assert!((m.determinant() - 1.0).abs() < 1e-5);
        assert_eq!(m.transform_point3(Vec3::ZERO), Vec3::ZERO);
    }
}
