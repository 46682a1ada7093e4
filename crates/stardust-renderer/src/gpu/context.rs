use std::sync::Arc;

use winit::window::Window;

use super::types::{PhysicalSize, RendererError};

/// Adapter requests tried in order: a discrete GPU, then software.
const ADAPTER_CANDIDATES: [(wgpu::PowerPreference, bool); 2] = [
    (wgpu::PowerPreference::HighPerformance, false),
    (wgpu::PowerPreference::LowPower, true),
];

/// Window surface plus the device and queue that draw into it.
pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub surface_config: wgpu::SurfaceConfiguration,
    pub size: PhysicalSize,
    pub sample_count: u32,
}

impl GpuContext {
    /// Bind wgpu to `window` and configure its surface.
    ///
    /// `sample_count` drops to 1 when the chosen format can't be
    /// multisampled at that count.
    pub async fn new(window: Arc<Window>, sample_count: u32) -> Result<Self, RendererError> {
        let inner = window.inner_size();
        let size = clamped_size(inner.width, inner.height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window)
            .map_err(|e| RendererError::SurfaceError(e.to_string()))?;

        let adapter = acquire_adapter(&instance, &surface).await?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("stardust device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await?;

        let formats = surface.get_capabilities(&adapter).formats;
        let format = choose_format(&formats);
        tracing::debug!(?formats, "surface formats offered");
        tracing::info!(?format, "surface format");

        let sample_count = supported_sample_count(&adapter, format, sample_count);
        let surface_config = surface_config(format, size);
        surface.configure(&device, &surface_config);

        Ok(Self {
            device,
            queue,
            surface,
            surface_config,
            size,
            sample_count,
        })
    }

    /// Track a new window size; zero extents become 1.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = clamped_size(width, height);
        self.surface_config.width = self.size.width;
        self.surface_config.height = self.size.height;
        self.reconfigure();
    }

    /// Re-apply the surface configuration, e.g. after `Lost`/`Outdated`.
    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn current_texture(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.surface_config.format
    }
}

async fn acquire_adapter(
    instance: &wgpu::Instance,
    surface: &wgpu::Surface<'static>,
) -> Result<wgpu::Adapter, RendererError> {
    for (power_preference, force_fallback_adapter) in ADAPTER_CANDIDATES {
        let options = wgpu::RequestAdapterOptions {
            power_preference,
            force_fallback_adapter,
            compatible_surface: Some(surface),
        };
        if let Some(adapter) = instance.request_adapter(&options).await {
            let info = adapter.get_info();
            tracing::info!(
                name = %info.name,
                device_type = ?info.device_type,
                backend = ?info.backend,
                "GPU adapter selected"
            );
            return Ok(adapter);
        }
        tracing::warn!(?power_preference, force_fallback_adapter, "no adapter for request");
    }
    Err(RendererError::AdapterNotFound)
}

/// First sRGB format offered, else the first offered, else Bgra8UnormSrgb.
fn choose_format(formats: &[wgpu::TextureFormat]) -> wgpu::TextureFormat {
    formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| formats.first().copied())
        .unwrap_or(wgpu::TextureFormat::Bgra8UnormSrgb)
}

fn surface_config(format: wgpu::TextureFormat, size: PhysicalSize) -> wgpu::SurfaceConfiguration {
    wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: size.width,
        height: size.height,
        present_mode: wgpu::PresentMode::Fifo,
        desired_maximum_frame_latency: 2,
        alpha_mode: wgpu::CompositeAlphaMode::Auto,
        view_formats: vec![],
    }
}

fn clamped_size(width: u32, height: u32) -> PhysicalSize {
    PhysicalSize {
        width: width.max(1),
        height: height.max(1),
    }
}

fn supported_sample_count(adapter: &wgpu::Adapter, format: wgpu::TextureFormat, wanted: u32) -> u32 {
    if wanted <= 1 {
        return 1;
    }
    let flags = adapter.get_texture_format_features(format).flags;
    if flags.sample_count_supported(wanted) {
        wanted
    } else {
        tracing::warn!("{wanted}x MSAA unsupported for {format:?}, rendering without it");
        1
    }
}

// =============================================================================
// Tests
// =============================================================================
