//! The viewport: scene, camera, orbit controls and the surface they draw to.

use stardust_common::Color;
use stardust_config::schema::{OrbitControlsConfig, ViewportConfig};

use crate::backend::RenderBackend;
use crate::camera::PerspectiveCamera;
use crate::controls::{ControlInput, OrbitControls};
use crate::gpu::{PhysicalSize, RendererError};
use crate::scene::Scene;

/// Everything that only exists once a surface is bound.
struct Bound<B> {
    backend: B,
    scene: Scene,
    camera: PerspectiveCamera,
    controls: OrbitControls,
}

/// Owns the scene and camera and renders them through a [`RenderBackend`].
///
/// Created unbound by [`Viewport::new`]; [`Viewport::initialize`] binds an
/// already acquired backend. Rendering an unbound viewport is an error.
pub struct Viewport<B: RenderBackend> {
    viewport_config: ViewportConfig,
    controls_config: OrbitControlsConfig,
    size: PhysicalSize,
    pixel_ratio: f64,
    bound: Option<Bound<B>>,
}

impl<B: RenderBackend> Viewport<B> {
    pub fn new(viewport_config: ViewportConfig, controls_config: OrbitControlsConfig) -> Self {
        let size = PhysicalSize {
            width: viewport_config.width.max(1),
            height: viewport_config.height.max(1),
        };
        Self {
            viewport_config,
            controls_config,
            size,
            pixel_ratio: 1.0,
            bound: None,
        }
    }

    /// Bind `backend` and set up scene, camera and controls.
    pub fn initialize(&mut self, mut backend: B) -> Result<(), RendererError> {
        if self.bound.is_some() {
            return Err(RendererError::AlreadyInitialized);
        }

        let clear_color = Color::from_hex(&self.viewport_config.clear_color).unwrap_or_else(|| {
            tracing::warn!(
                "Invalid clear color {:?}, using black",
                self.viewport_config.clear_color
            );
            Color::BLACK
        });
        backend.set_clear_color(clear_color);
        backend.resize(self.size.width, self.size.height, self.pixel_ratio)?;

        let camera =
            PerspectiveCamera::from_config(&self.viewport_config, self.size.width, self.size.height);
        let controls = OrbitControls::new(&self.controls_config, &camera);

        tracing::info!(
            "Viewport initialized ({}x{}, fov={}, damping={})",
            self.size.width,
            self.size.height,
            camera.fov,
            controls.damping_enabled(),
        );

        self.bound = Some(Bound {
            backend,
            scene: Scene::new(),
            camera,
            controls,
        });
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.bound.is_some()
    }

    /// Apply a new surface size in physical pixels.
    pub fn on_resize(&mut self, width: u32, height: u32) -> Result<(), RendererError> {
        let size = PhysicalSize::new(width, height).ok_or(RendererError::InvalidSize { width, height })?;
        self.size = size;
        if let Some(bound) = self.bound.as_mut() {
            bound.camera.set_aspect(width, height);
            bound.backend.resize(width, height, self.pixel_ratio)?;
        }
        tracing::debug!("Viewport resized to {width}x{height}");
        Ok(())
    }

    /// Apply a new pixel density (window scale factor).
    pub fn set_pixel_ratio(&mut self, ratio: f64) -> Result<(), RendererError> {
        self.pixel_ratio = ratio;
        if let Some(bound) = self.bound.as_mut() {
            bound
                .backend
                .resize(self.size.width, self.size.height, ratio)?;
        }
        Ok(())
    }

    /// Draw one frame, then advance orbit-control damping by one step.
    pub fn render_frame(&mut self) -> Result<(), RendererError> {
        let bound = self
            .bound
            .as_mut()
            .ok_or(RendererError::NotInitialized("viewport"))?;
        bound.backend.render(&bound.scene, &bound.camera)?;
        bound.controls.update(&mut bound.camera);
        Ok(())
    }

    /// Let the backend build resources for newly added objects.
    pub fn prepare_scene(&mut self) -> Result<(), RendererError> {
        let bound = self
            .bound
            .as_mut()
            .ok_or(RendererError::NotInitialized("viewport"))?;
        bound.backend.prepare(&bound.scene)
    }

    /// Forward pointer input to the orbit controls. Ignored while unbound.
    pub fn handle_input(&mut self, input: ControlInput) {
        let height = self.size.height as f32;
        if let Some(bound) = self.bound.as_mut() {
            bound.controls.handle_input(input, &bound.camera, height);
        }
    }

    pub fn scene_mut(&mut self) -> Result<&mut Scene, RendererError> {
        self.bound
            .as_mut()
            .map(|bound| &mut bound.scene)
            .ok_or(RendererError::NotInitialized("viewport"))
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.bound.as_ref().map(|bound| &bound.scene)
    }

    pub fn camera(&self) -> Option<&PerspectiveCamera> {
        self.bound.as_ref().map(|bound| &bound.camera)
    }

    pub fn backend(&self) -> Option<&B> {
        self.bound.as_ref().map(|bound| &bound.backend)
    }

    pub fn size(&self) -> PhysicalSize {
        self.size
    }

    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::NullBackend;
    use crate::controls::PointerButton;
    use crate::math::vec3;

    fn viewport(width: u32, height: u32) -> Viewport<NullBackend> {
        let config = ViewportConfig {
            width,
            height,
            ..Default::default()
        };
        Viewport::new(config, OrbitControlsConfig::default())
    }

    fn initialized(width: u32, height: u32) -> Viewport<NullBackend> {
        let mut vp = viewport(width, height);
        vp.initialize(NullBackend::new()).unwrap();
        vp
    }

    #[test]
    fn render_before_initialize_fails() {
        let mut vp = viewport(800, 600);
        let err = vp.render_frame().unwrap_err();
        assert!(matches!(err, RendererError::NotInitialized("viewport")));
        assert!(vp.scene_mut().is_err());
    }

    #[test]
    fn prepare_before_initialize_fails() {
        let mut vp = viewport(800, 600);
        let err = vp.prepare_scene().unwrap_err();
        assert!(matches!(err, RendererError::NotInitialized(_)));
    }

    #[test]
    fn aspect_from_initial_size() {
        let vp = initialized(800, 600);
        let aspect = vp.camera().unwrap().aspect;
        assert!((aspect - 1.333).abs() < 1e-3);
    }

    #[test]
    fn initialize_applies_clear_color_and_size() {
        let mut config = ViewportConfig::default();
        config.clear_color = "#102030".into();
        let mut vp: Viewport<NullBackend> = Viewport::new(config, OrbitControlsConfig::default());
        vp.set_pixel_ratio(2.0).unwrap();
        vp.initialize(NullBackend::new()).unwrap();

        let backend = vp.backend().unwrap();
        assert_eq!(backend.clear_color, Color::from_rgb(0x10, 0x20, 0x30));
        assert_eq!(backend.size, PhysicalSize::new(1280, 800));
        assert!((backend.pixel_ratio - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn camera_starts_at_configured_pose() {
        let vp = initialized(800, 600);
        let camera = vp.camera().unwrap();
        assert_eq!(camera.position, [0.0, -1.0, -0.05]);
        assert_eq!(camera.target, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn double_initialize_fails() {
        let mut vp = initialized(800, 600);
        let err = vp.initialize(NullBackend::new()).unwrap_err();
        assert!(matches!(err, RendererError::AlreadyInitialized));
    }

    #[test]
    fn resize_updates_aspect_and_backend() {
        let mut vp = initialized(800, 600);
        vp.on_resize(1920, 1080).unwrap();
        let aspect = vp.camera().unwrap().aspect;
        assert!((aspect - 1920.0 / 1080.0).abs() < 1e-6);
        assert_eq!(vp.backend().unwrap().size, PhysicalSize::new(1920, 1080));

        // Idempotent.
        vp.on_resize(1920, 1080).unwrap();
        assert!((vp.camera().unwrap().aspect - aspect).abs() < f32::EPSILON);
    }

    #[test]
    fn resize_rejects_zero_size() {
        let mut vp = initialized(800, 600);
        assert!(matches!(
            vp.on_resize(0, 0),
            Err(RendererError::InvalidSize { .. })
        ));
        assert_eq!(vp.size(), PhysicalSize::new(800, 600).unwrap());
    }

    #[test]
    fn resize_before_initialize_seeds_camera() {
        let mut vp = viewport(800, 600);
        vp.on_resize(1000, 500).unwrap();
        vp.initialize(NullBackend::new()).unwrap();
        assert!((vp.camera().unwrap().aspect - 2.0).abs() < 1e-6);
    }

    #[test]
    fn render_frame_submits_to_backend() {
        let mut vp = initialized(800, 600);
        vp.render_frame().unwrap();
        vp.render_frame().unwrap();
        assert_eq!(vp.backend().unwrap().frames, 2);
    }

    #[test]
    fn damping_keeps_camera_moving_with_shrinking_steps() {
        let mut vp = initialized(800, 600);
        vp.handle_input(ControlInput::PointerDown {
            button: PointerButton::Primary,
            x: 400.0,
            y: 300.0,
        });
        vp.handle_input(ControlInput::PointerMove { x: 460.0, y: 300.0 });
        vp.handle_input(ControlInput::PointerUp {
            button: PointerButton::Primary,
        });

        let mut positions = vec![vp.camera().unwrap().position];
        for _ in 0..4 {
            vp.render_frame().unwrap();
            positions.push(vp.camera().unwrap().position);
        }
        let steps: Vec<f32> = positions
            .windows(2)
            .map(|w| vec3::length(vec3::sub(w[1], w[0])))
            .collect();
        assert!(steps.iter().all(|s| *s > 0.0));
        for pair in steps.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn input_before_initialize_is_ignored() {
        let mut vp = viewport(800, 600);
        vp.handle_input(ControlInput::Wheel { delta_y: 1.0 });
        assert!(!vp.is_initialized());
    }
}
