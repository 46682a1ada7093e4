//! Spherical coordinates around +Y, used by the orbit controls.

use crate::math::vec3::{self, Vec3};

/// Keeps the polar angle away from the poles so `look_at` stays defined.
const POLE_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    /// Polar angle from +Y, in `[0, π]`.
    pub phi: f32,
    /// Azimuth around +Y, measured from +Z toward +X.
    pub theta: f32,
}

impl Spherical {
    pub fn from_offset(offset: Vec3) -> Self {
        let radius = vec3::length(offset);
        if radius == 0.0 {
            return Self {
                radius: 0.0,
                phi: 0.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            theta: offset[0].atan2(offset[2]),
            phi: (offset[1] / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn to_offset(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        [
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        ]
    }

    pub fn make_safe(&mut self) {
        self.phi = self
            .phi
            .clamp(POLE_EPSILON, std::f32::consts::PI - POLE_EPSILON);
    }
}
