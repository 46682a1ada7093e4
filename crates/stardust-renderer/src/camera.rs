//! Perspective camera with a cached projection matrix.

use stardust_config::schema::ViewportConfig;

use crate::math::matrix::{self as mat, Mat4};
use crate::math::vec3::{self, Vec3};

/// World up axis.
pub const UP: Vec3 = [0.0, 1.0, 0.0];

/// A perspective camera looking at `target`.
///
/// `projection` is only recomputed by [`Self::update_projection_matrix`];
/// every change to `aspect`, `fov`, `near` or `far` must be followed by it.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            fov,
            aspect,
            near,
            far,
            position: [0.0, 0.0, 1.0],
            target: [0.0, 0.0, 0.0],
            projection: mat::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Build the camera described by the viewport config for a surface of
    /// `width`×`height` pixels.
    pub fn from_config(config: &ViewportConfig, width: u32, height: u32) -> Self {
        let mut camera = Self::new(
            config.fov,
            width as f32 / height as f32,
            config.near,
            config.far,
        );
        camera.position = config.camera_position;
        camera.look_at(config.look_at);
        camera
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Set aspect from a surface size and refresh the projection.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
        self.update_projection_matrix();
    }

    pub fn update_projection_matrix(&mut self) {
        self.projection = mat::perspective(self.fov.to_radians(), self.aspect, self.near, self.far);
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        mat::look_at(self.position, self.target, UP)
    }

    pub fn view_projection(&self) -> Mat4 {
        mat::mul(&self.projection, &self.view_matrix())
    }

    /// Camera-space right and up axes expressed in world space.
    pub fn basis(&self) -> (Vec3, Vec3) {
        let view = self.view_matrix();
        let right = [view[0], view[4], view[8]];
        let up = [view[1], view[5], view[9]];
        (right, up)
    }

    /// Distance from the camera to its target.
    pub fn distance(&self) -> f32 {
        vec3::length(vec3::sub(self.position, self.target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_from_800x600() {
        let config = ViewportConfig::default();
        let camera = PerspectiveCamera::from_config(&config, 800, 600);
        assert!((camera.aspect - 800.0 / 600.0).abs() < 1e-6);
        assert!((camera.aspect - 1.333).abs() < 1e-3);
    }

    #[test]
    fn from_config_uses_configured_pose() {
        let config = ViewportConfig::default();
        let camera = PerspectiveCamera::from_config(&config, 1280, 800);
        assert_eq!(camera.position, [0.0, -1.0, -0.05]);
        assert_eq!(camera.target, [0.0, 0.0, 0.0]);
        assert!((camera.fov - 70.0).abs() < f32::EPSILON);
    }

    #[test]
    fn set_aspect_refreshes_projection() {
        let mut camera = PerspectiveCamera::new(70.0, 1.0, 0.01, 1000.0);
        let before = *camera.projection_matrix();
        camera.set_aspect(1920, 1080);
        let after = *camera.projection_matrix();
        assert!((camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
        assert!((after[0] - before[0] * 1080.0 / 1920.0).abs() < 1e-5);
        assert!((after[5] - before[5]).abs() < 1e-6);
    }

    #[test]
    fn stale_projection_until_update() {
        let mut camera = PerspectiveCamera::new(70.0, 1.0, 0.01, 1000.0);
        let before = *camera.projection_matrix();
        camera.aspect = 2.0;
        assert_eq!(*camera.projection_matrix(), before);
        camera.update_projection_matrix();
        assert_ne!(*camera.projection_matrix(), before);
    }

    #[test]
    fn basis_is_orthonormal() {
        let config = ViewportConfig::default();
        let camera = PerspectiveCamera::from_config(&config, 800, 600);
        let (right, up) = camera.basis();
        assert!((vec3::length(right) - 1.0).abs() < 1e-5);
        assert!((vec3::length(up) - 1.0).abs() < 1e-5);
        assert!(vec3::dot(right, up).abs() < 1e-5);
    }

    #[test]
    fn target_projects_to_screen_center() {
        let camera = PerspectiveCamera::from_config(&ViewportConfig::default(), 800, 600);
        let clip = mat::transform_point(&camera.view_projection(), camera.target);
        assert!((clip[0] / clip[3]).abs() < 1e-5);
        assert!((clip[1] / clip[3]).abs() < 1e-5);
        let depth = clip[2] / clip[3];
        assert!((0.0..=1.0).contains(&depth));
    }
}
