use std::path::Path;
use std::sync::Arc;

use rectkit_config::colors::parse_color;
use rectkit_config::schema::{CameraConfig, RectkitConfig};
use winit::window::Window;

use crate::atlas::AtlasId;
use crate::camera::CameraUniform;
use crate::gpu::{GpuContext, RendererError};
use crate::rect_renderer::{RectRenderer, RendererSettings};
use crate::texture::{AtlasTexture, SamplerSettings};

use super::helpers::clear_color;

/// GPU context plus the rectangle renderer for one window.
pub struct RenderState {
    pub gpu: GpuContext,
    pub rects: RectRenderer,
    pub clear_color: wgpu::Color,
    camera: CameraConfig,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    pub async fn new(window: Arc<Window>, config: &RectkitConfig) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, config.renderer.vsync).await?;
        let rects = RectRenderer::new(&gpu.device, gpu.format(), &RendererSettings::from_config(config));

        let color = match parse_color(&config.renderer.clear_color) {
            Ok(color) => color,
            Err(e) => {
                tracing::warn!("Invalid clear color, using black: {e}");
                rectkit_common::Color::from_rgba(0, 0, 0, 255)
            }
        };

        let mut state = Self {
            clear_color: clear_color(color, gpu.format().is_srgb()),
            gpu,
            rects,
            camera: config.camera.clone(),
        };
        state.update_camera();
        Ok(state)
    }

    /// Reconfigure the surface and recompute the camera for the new size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        self.update_camera();
    }

    /// Pixel-space camera for the current surface size.
    pub fn camera(&self) -> CameraUniform {
        CameraUniform::from_config(&self.camera, self.gpu.size.width, self.gpu.size.height)
    }

    fn update_camera(&self) {
        self.rects.set_camera(&self.gpu.queue, self.camera());
    }

    /// Upload tightly packed sRGB RGBA8 texels as a new atlas.
    pub fn load_atlas_rgba(
        &mut self,
        width: u32,
        height: u32,
        rgba: &[u8],
        settings: SamplerSettings,
    ) -> Result<AtlasId, RendererError> {
        let texture = AtlasTexture::from_rgba(
            &self.gpu.device,
            &self.gpu.queue,
            width,
            height,
            rgba,
            settings,
            "rgba atlas",
        )?;
        Ok(self.rects.register_atlas(&self.gpu.device, texture))
    }

    /// Load an image file as a new atlas.
    pub fn load_atlas_path(&mut self, path: &Path, settings: SamplerSettings) -> Result<AtlasId, RendererError> {
        let texture = AtlasTexture::from_path(&self.gpu.device, &self.gpu.queue, path, settings)?;
        Ok(self.rects.register_atlas(&self.gpu.device, texture))
    }
}
