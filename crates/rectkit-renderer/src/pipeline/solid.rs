use rectkit_config::schema::BlendMode;

use super::shaders::SOLID_SHADER;
use super::{create_rect_pipeline, RectPipelineDescriptor};
use crate::camera::{CameraBinding, CAMERA_GROUP};
use crate::geometry::QuadGeometry;
use crate::instance::SolidInstance;

/// Draws flat-colored rectangles.
pub struct SolidPipeline {
    pipeline: wgpu::RenderPipeline,
}

impl SolidPipeline {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        blend: BlendMode,
        camera_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let pipeline = create_rect_pipeline::<SolidInstance>(
            device,
            &RectPipelineDescriptor {
                label: "solid rect pipeline",
                shader_source: SOLID_SHADER,
                format,
                blend,
                bind_group_layouts: &[camera_layout],
            },
        );
        Self { pipeline }
    }

    /// One instanced draw of `count` rectangles read from `instances`.
    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        camera: &CameraBinding,
        geometry: &QuadGeometry,
        instances: wgpu::BufferSlice<'_>,
        count: u32,
    ) {
        if count == 0 {
            return;
        }

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(CAMERA_GROUP, camera.bind_group(), &[]);
        geometry.bind(pass);
        pass.set_vertex_buffer(1, instances);
        pass.draw_indexed(0..geometry.index_count(), 0, 0..count);
    }
}
