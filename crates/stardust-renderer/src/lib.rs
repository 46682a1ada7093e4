//! Stardust renderer: camera, orbit controls, scene graph and the backends
//! that draw it.
//!
//! [`Viewport`] owns the scene and camera; [`PointField`] generates the
//! animated point cloud and drives its shader clock.

pub mod backend;
pub mod camera;
pub mod controls;
pub mod gpu;
pub mod math;
pub mod point_field;
pub mod scene;
pub mod viewport;

pub use backend::{NullBackend, RenderBackend, WgpuBackend};
pub use camera::PerspectiveCamera;
pub use controls::{ControlInput, OrbitControls, PointerButton};
pub use gpu::{PhysicalSize, RendererError};
pub use point_field::PointField;
pub use viewport::Viewport;
