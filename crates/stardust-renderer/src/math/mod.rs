//! Minimal linear algebra for the camera and controls.

pub mod matrix;
pub mod vec3;

pub use matrix::Mat4;
pub use vec3::Vec3;
