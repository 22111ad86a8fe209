use crate::batch::RectList;
use crate::gpu::RendererError;

use super::helpers::log_first_frame;
use super::state::RenderState;

/// What happened to a frame passed to [`RenderState::render_frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Presented,
    /// The surface was reconfigured and nothing was drawn; redraw.
    SurfaceReconfigured,
}

impl FrameOutcome {
    pub fn needs_redraw(self) -> bool {
        self == FrameOutcome::SurfaceReconfigured
    }
}

/// Surface errors fixed by reconfiguring the surface.
fn is_recoverable(err: &wgpu::SurfaceError) -> bool {
    matches!(err, wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)
}

impl RenderState {
    /// Render a complete frame: upload instances, clear, draw every batch.
    pub fn render_frame(&mut self, list: &RectList) -> Result<FrameOutcome, RendererError> {
        self.rects.prepare(&self.gpu.device, &self.gpu.queue, list)?;

        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(e) if is_recoverable(&e) => {
                tracing::debug!("Surface lost or outdated, reconfiguring: {e}");
                self.resize(self.gpu.size.width, self.gpu.size.height);
                return Ok(FrameOutcome::SurfaceReconfigured);
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(RendererError::SurfaceError(e.to_string()));
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("rectkit frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rectkit main pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.rects.render(&mut pass);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(
            self.gpu.size.width,
            self.gpu.size.height,
            self.gpu.format(),
            list.instance_count(),
            self.rects.draw_count(),
        );

        Ok(FrameOutcome::Presented)
    }
}
