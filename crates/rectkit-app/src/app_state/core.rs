use std::path::PathBuf;
use std::sync::Arc;

use rectkit_config::schema::RectkitConfig;
use rectkit_renderer::{AtlasId, RectList, RenderState};
use winit::window::Window;

use crate::scene;

pub struct RectkitApp {
    pub(super) config: RectkitConfig,
    /// Atlas image override from the command line or `atlas.path`.
    pub(super) atlas_path: Option<PathBuf>,
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,
    pub(super) atlas: AtlasId,
    pub(super) scene: RectList,
}

impl RectkitApp {
    pub fn new(config: RectkitConfig, atlas_path: Option<PathBuf>) -> Self {
        Self {
            config,
            atlas_path,
            window: None,
            render_state: None,
            atlas: AtlasId(0),
            scene: RectList::new(),
        }
    }

    /// Lay the demo scene out again for the current surface size.
    pub(super) fn rebuild_scene(&mut self) {
        let Some(rs) = &self.render_state else {
            return;
        };
        let size = rs.gpu.size;
        self.scene = scene::build_scene(size.width as f32, size.height as f32, self.atlas);
        tracing::debug!(
            "Scene rebuilt for {}x{} ({} rects in {} batches)",
            size.width,
            size.height,
            self.scene.instance_count(),
            self.scene.batches().len(),
        );
    }

    pub(super) fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
