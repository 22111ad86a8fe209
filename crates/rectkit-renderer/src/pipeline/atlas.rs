use rectkit_config::schema::BlendMode;

use super::shaders::ATLAS_SHADER;
use super::{create_rect_pipeline, RectPipelineDescriptor};
use crate::camera::{CameraBinding, CAMERA_GROUP};
use crate::geometry::QuadGeometry;
use crate::instance::AtlasInstance;
use crate::texture::ATLAS_GROUP;

/// Draws atlas sub-rects tinted by the per-instance color.
///
/// The texture and sampler are bound once per draw, so every instance in a
/// draw samples the same atlas.
pub struct AtlasPipeline {
    pipeline: wgpu::RenderPipeline,
}

impl AtlasPipeline {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        blend: BlendMode,
        camera_layout: &wgpu::BindGroupLayout,
        atlas_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let pipeline = create_rect_pipeline::<AtlasInstance>(
            device,
            &RectPipelineDescriptor {
                label: "atlas rect pipeline",
                shader_source: ATLAS_SHADER,
                format,
                blend,
                bind_group_layouts: &[camera_layout, atlas_layout],
            },
        );
        Self { pipeline }
    }

    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        camera: &CameraBinding,
        geometry: &QuadGeometry,
        atlas: &wgpu::BindGroup,
        instances: wgpu::BufferSlice<'_>,
        count: u32,
    ) {
        if count == 0 {
            return;
        }

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(CAMERA_GROUP, camera.bind_group(), &[]);
        pass.set_bind_group(ATLAS_GROUP, atlas, &[]);
        geometry.bind(pass);
        pass.set_vertex_buffer(1, instances);
        pass.draw_indexed(0..geometry.index_count(), 0, 0..count);
    }
}
