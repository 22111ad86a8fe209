//! Render pipelines for solid and atlas-sampled rectangles.

mod atlas;
mod shaders;
mod solid;

pub use atlas::AtlasPipeline;
pub use solid::SolidPipeline;

use rectkit_config::schema::BlendMode;

use crate::geometry::QuadVertex;
use crate::instance::InstanceRecord;

/// Blend state applied to the color target for a configured blend mode.
pub fn blend_state(mode: BlendMode) -> wgpu::BlendState {
    match mode {
        BlendMode::Alpha => wgpu::BlendState::ALPHA_BLENDING,
        BlendMode::Premultiplied => wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING,
        BlendMode::Replace => wgpu::BlendState::REPLACE,
    }
}

/// Inputs shared by both rectangle pipelines.
pub(crate) struct RectPipelineDescriptor<'a> {
    pub label: &'a str,
    pub shader_source: &'static str,
    pub format: wgpu::TextureFormat,
    pub blend: BlendMode,
    pub bind_group_layouts: &'a [&'a wgpu::BindGroupLayout],
}

/// Build a triangle-list pipeline drawing the unit quad at slot 0 and
/// records of `T` at slot 1.
///
/// Culling is off so rectangles with a negative scale (mirrored, wound
/// clockwise) still render.
pub(crate) fn create_rect_pipeline<T: InstanceRecord>(
    device: &wgpu::Device,
    desc: &RectPipelineDescriptor<'_>,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(desc.label),
        source: wgpu::ShaderSource::Wgsl(desc.shader_source.into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(desc.label),
        bind_group_layouts: desc.bind_group_layouts,
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(desc.label),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            buffers: &[QuadVertex::layout(), T::layout()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: desc.format,
                blend: Some(blend_state(desc.blend)),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
