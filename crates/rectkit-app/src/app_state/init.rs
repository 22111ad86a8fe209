//! Window creation and renderer initialization.

use std::sync::Arc;

use rectkit_renderer::{AtlasId, RenderState, RendererError, SamplerSettings};
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use crate::scene;

use super::core::RectkitApp;

impl RectkitApp {
    /// Create the window and initialize the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let mut rs = match pollster::block_on(RenderState::new(window.clone(), &self.config)) {
            Ok(rs) => rs,
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        };

        match self.load_atlas(&mut rs) {
            Ok(id) => self.atlas = id,
            Err(e) => {
                tracing::error!("Failed to upload atlas: {e}");
                return false;
            }
        }

        self.render_state = Some(rs);
        self.window = Some(window);
        self.rebuild_scene();
        true
    }

    /// Upload the configured atlas, or the built-in one if it is missing or
    /// unreadable.
    fn load_atlas(&self, rs: &mut RenderState) -> Result<AtlasId, RendererError> {
        let settings = SamplerSettings::from_config(&self.config.atlas);

        if let Some(path) = &self.atlas_path {
            match rs.load_atlas_path(path, settings) {
                Ok(id) => return Ok(id),
                Err(e) => {
                    tracing::warn!("Failed to load atlas {}, using built-in atlas: {e}", path.display());
                }
            }
        }

        let demo = scene::demo_atlas();
        let (width, height) = demo.dimensions();
        rs.load_atlas_rgba(width, height, demo.as_raw(), settings)
    }
}
