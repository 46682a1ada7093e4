//! The animated point field: a generated cloud drawn with a time-driven
//! shader material.

mod generate;
mod shaders;

pub use generate::*;
pub use shaders::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stardust_config::schema::PointFieldConfig;

use crate::backend::RenderBackend;
use crate::gpu::RendererError;
use crate::scene::{BufferAttribute, BufferGeometry, ObjectId, Points, ShaderMaterial, TimeUniform};
use crate::viewport::Viewport;

/// Random source for point generation: seeded when `seed` is set.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Owns the animation clock of one point cloud in a viewport's scene.
pub struct PointField {
    config: PointFieldConfig,
    time: TimeUniform,
    object: Option<ObjectId>,
}

impl PointField {
    pub fn new(config: PointFieldConfig) -> Self {
        Self {
            config,
            time: TimeUniform::default(),
            object: None,
        }
    }

    /// Generate the cloud and add it to `viewport`'s scene.
    ///
    /// The viewport must already be initialized. Shaders are compiled here;
    /// on failure the scene is left unchanged. Can only succeed once.
    pub fn initialize<B, R>(
        &mut self,
        viewport: &mut Viewport<B>,
        rng: &mut R,
    ) -> Result<ObjectId, RendererError>
    where
        B: RenderBackend,
        R: Rng + ?Sized,
    {
        if self.object.is_some() {
            return Err(RendererError::AlreadyInitialized);
        }
        if !viewport.is_initialized() {
            return Err(RendererError::NotInitialized("viewport"));
        }

        let shaders = resolve_shaders(&self.config.shaders)?;

        let n = self.config.grid_size as usize;
        let positions = generate_point_cloud(n, rng);
        let attribute = BufferAttribute::new(positions, 3)
            .ok_or_else(|| RendererError::DeviceError("malformed position buffer".into()))?;
        let geometry = BufferGeometry::from_positions(attribute)
            .ok_or_else(|| RendererError::DeviceError("position attribute must be vec3".into()))?;
        tracing::info!("Generated {} points ({n}x{n})", geometry.vertex_count());

        let material = ShaderMaterial::additive_points(
            "point field",
            shaders,
            self.time.clone(),
            self.config.point_size,
        );

        let id = viewport.scene_mut()?.add(Points::new(geometry, material))?;
        if let Err(e) = viewport.prepare_scene() {
            viewport.scene_mut()?.remove(id);
            return Err(e);
        }
        self.object = Some(id);
        Ok(id)
    }

    /// Advance the shader clock by one frame's step. Returns the new time.
    pub fn advance_frame(&self) -> f64 {
        self.time.advance(self.config.time_step)
    }

    pub fn time(&self) -> f64 {
        self.time.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.object.is_some()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::NullBackend;
    use stardust_config::schema::{OrbitControlsConfig, ShaderPaths, ViewportConfig};

    fn small_config() -> PointFieldConfig {
        PointFieldConfig {
            grid_size: 8,
            ..Default::default()
        }
    }

    fn viewport() -> Viewport<NullBackend> {
        let mut vp = Viewport::new(ViewportConfig::default(), OrbitControlsConfig::default());
        vp.initialize(NullBackend::new()).unwrap();
        vp
    }

    #[test]
    fn time_starts_at_zero() {
        let field = PointField::new(small_config());
        assert_eq!(field.time(), 0.0);
    }

    #[test]
    fn advance_accumulates_fixed_step() {
        for k in [1u32, 100, 10_000] {
            let field = PointField::new(small_config());
            for _ in 0..k {
                field.advance_frame();
            }
            let expected = 0.05 * k as f64;
            assert!(
                (field.time() - expected).abs() < 1e-6,
                "k = {k}: {} != {expected}",
                field.time()
            );
        }
    }

    #[test]
    fn initialize_requires_initialized_viewport() {
        let mut vp: Viewport<NullBackend> =
            Viewport::new(ViewportConfig::default(), OrbitControlsConfig::default());
        let mut field = PointField::new(small_config());
        let err = field
            .initialize(&mut vp, &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, RendererError::NotInitialized(_)));
        assert!(!field.is_initialized());
    }

    #[test]
    fn initialize_adds_one_object() {
        let mut vp = viewport();
        let mut field = PointField::new(small_config());
        let id = field
            .initialize(&mut vp, &mut StdRng::seed_from_u64(0))
            .unwrap();

        let scene = vp.scene().unwrap();
        assert_eq!(scene.len(), 1);
        let points = scene.get(id).unwrap();
        assert_eq!(points.geometry.vertex_count(), 64);
        assert!(points.material.transparent);
        assert!(!points.material.depth_test);
    }

    #[test]
    fn second_initialize_fails() {
        let mut vp = viewport();
        let mut field = PointField::new(small_config());
        let mut rng = StdRng::seed_from_u64(0);
        field.initialize(&mut vp, &mut rng).unwrap();
        let err = field.initialize(&mut vp, &mut rng).unwrap_err();
        assert!(matches!(err, RendererError::AlreadyInitialized));
        assert_eq!(vp.scene().unwrap().len(), 1);
    }

    #[test]
    fn missing_shader_file_aborts_initialize() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = small_config();
        config.shaders = ShaderPaths {
            vertex: Some(dir.path().join("missing.vert.wgsl")),
            fragment: None,
        };
        let mut vp = viewport();
        let mut field = PointField::new(config);
        let err = field
            .initialize(&mut vp, &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, RendererError::ShaderSource { .. }));
        assert!(vp.scene().unwrap().is_empty());
        assert!(!field.is_initialized());
    }

    #[test]
    fn initialize_compiles_shaders_up_front() {
        let mut vp = viewport();
        let mut field = PointField::new(small_config());
        field
            .initialize(&mut vp, &mut StdRng::seed_from_u64(0))
            .unwrap();
        let backend = vp.backend().unwrap();
        assert_eq!(backend.prepared_objects, 1);
        assert_eq!(backend.frames, 0);
    }

    #[test]
    fn shader_compile_failure_aborts_initialize() {
        let mut vp: Viewport<NullBackend> =
            Viewport::new(ViewportConfig::default(), OrbitControlsConfig::default());
        let backend = NullBackend {
            reject_shaders: true,
            ..NullBackend::new()
        };
        vp.initialize(backend).unwrap();

        let mut field = PointField::new(small_config());
        let err = field
            .initialize(&mut vp, &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, RendererError::ShaderCompilation(_)));
        assert!(vp.scene().unwrap().is_empty());
        assert!(!field.is_initialized());
    }

    #[test]
    fn material_sees_advanced_time() {
        let mut vp = viewport();
        let mut field = PointField::new(small_config());
        field
            .initialize(&mut vp, &mut StdRng::seed_from_u64(0))
            .unwrap();

        field.advance_frame();
        field.advance_frame();
        vp.render_frame().unwrap();

        let times = &vp.backend().unwrap().last_times;
        assert_eq!(times.len(), 1);
        assert!((times[0] - 0.1).abs() < 1e-6);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let a: u64 = rng_from_seed(Some(9)).gen();
        let b: u64 = rng_from_seed(Some(9)).gen();
        assert_eq!(a, b);
    }
}
