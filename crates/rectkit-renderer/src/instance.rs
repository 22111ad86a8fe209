//! Per-rectangle instance records for the solid and atlas pipelines.
//!
//! Instance attributes start at shader location 2; locations 0 and 1 belong
//! to the shared quad vertex.

use crate::atlas::AtlasRegion;

/// A `#[repr(C)]` record streamed at vertex buffer slot 1, one per rectangle.
pub trait InstanceRecord: bytemuck::Pod + bytemuck::Zeroable {
    /// Debug label for buffers holding this record type.
    const LABEL: &'static str;
    /// Vertex attributes, starting at shader location 2.
    const ATTRIBUTES: &'static [wgpu::VertexAttribute];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: Self::ATTRIBUTES,
        }
    }
}

/// A flat-colored rectangle.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct SolidInstance {
    /// World-space translation, applied after scaling.
    pub position: [f32; 2],
    /// Per-axis scale of the unit quad. Negative values mirror the rectangle.
    pub scale: [f32; 2],
    /// RGBA in [0, 1].
    pub color: [f32; 4],
}

impl SolidInstance {
    pub fn new(position: [f32; 2], scale: [f32; 2], color: [f32; 4]) -> Self {
        Self {
            position,
            scale,
            color,
        }
    }
}

impl InstanceRecord for SolidInstance {
    const LABEL: &'static str = "solid instances";
    const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &wgpu::vertex_attr_array![
        2 => Float32x2, // position
        3 => Float32x2, // scale
        4 => Float32x4, // color
    ];
}

/// A rectangle sampled from a sub-rect of the bound atlas and tinted by `color`.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct AtlasInstance {
    pub position: [f32; 2],
    pub scale: [f32; 2],
    /// Normalized top-left of the sub-rect within the atlas.
    pub atlas_offset: [f32; 2],
    /// Normalized size of the sub-rect.
    pub atlas_scale: [f32; 2],
    /// Multiplied component-wise with the sampled texel.
    pub color: [f32; 4],
}

impl AtlasInstance {
    pub fn new(
        position: [f32; 2],
        scale: [f32; 2],
        atlas_offset: [f32; 2],
        atlas_scale: [f32; 2],
        color: [f32; 4],
    ) -> Self {
        Self {
            position,
            scale,
            atlas_offset,
            atlas_scale,
            color,
        }
    }

    pub fn from_region(position: [f32; 2], scale: [f32; 2], region: AtlasRegion, color: [f32; 4]) -> Self {
        Self::new(position, scale, region.offset, region.scale, color)
    }

    /// Draws the texels as they are.
    pub fn untinted(position: [f32; 2], scale: [f32; 2], region: AtlasRegion) -> Self {
        Self::from_region(position, scale, region, [1.0, 1.0, 1.0, 1.0])
    }

    pub fn region(&self) -> AtlasRegion {
        AtlasRegion {
            offset: self.atlas_offset,
            scale: self.atlas_scale,
        }
    }

    /// Whether `atlas_offset + atlas_scale` stays inside the unit square.
    /// Nothing downstream clamps a record that fails this.
    pub fn region_in_bounds(&self) -> bool {
        self.region().in_bounds()
    }
}

impl InstanceRecord for AtlasInstance {
    const LABEL: &'static str = "atlas instances";
    const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &wgpu::vertex_attr_array![
        2 => Float32x2, // position
        3 => Float32x2, // scale
        4 => Float32x2, // atlas_offset
        5 => Float32x2, // atlas_scale
        6 => Float32x4, // color
    ];
}
