//! CPU mirror of the rectangle shaders.
//!
//! Vertex assembly and shading here follow `SOLID_SHADER` and `ATLAS_SHADER`
//! line for line, so geometry and color properties can be checked without a
//! GPU, and the host can produce headless snapshots.

mod raster;
mod sampler;

#[cfg(test)]
mod tests;

pub use raster::Rasterizer;
pub use sampler::RgbaTexels;

use crate::camera::CameraUniform;
use crate::geometry::QuadVertex;
use crate::instance::{AtlasInstance, SolidInstance};

/// Output of the vertex stage for one quad corner of one instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssembledVertex {
    pub world_position: [f32; 2],
    pub clip_position: [f32; 4],
    pub tex_coord: [f32; 2],
    pub color: [f32; 4],
}

fn world_position(local: [f32; 2], scale: [f32; 2], position: [f32; 2]) -> [f32; 2] {
    [
        local[0] * scale[0] + position[0],
        local[1] * scale[1] + position[1],
    ]
}

pub fn assemble_solid(camera: &CameraUniform, vertex: &QuadVertex, instance: &SolidInstance) -> AssembledVertex {
    let world = world_position(vertex.position, instance.scale, instance.position);
    AssembledVertex {
        world_position: world,
        clip_position: camera.transform(world),
        tex_coord: vertex.tex_coord,
        color: instance.color,
    }
}

pub fn assemble_atlas(camera: &CameraUniform, vertex: &QuadVertex, instance: &AtlasInstance) -> AssembledVertex {
    let world = world_position(vertex.position, instance.scale, instance.position);
    AssembledVertex {
        world_position: world,
        clip_position: camera.transform(world),
        tex_coord: [
            vertex.tex_coord[0] * instance.atlas_scale[0] + instance.atlas_offset[0],
            vertex.tex_coord[1] * instance.atlas_scale[1] + instance.atlas_offset[1],
        ],
        color: instance.color,
    }
}

pub fn shade_solid(color: [f32; 4]) -> [f32; 4] {
    color
}

/// Component-wise tint, alpha included.
pub fn shade_atlas(color: [f32; 4], texel: [f32; 4]) -> [f32; 4] {
    [
        color[0] * texel[0],
        color[1] * texel[1],
        color[2] * texel[2],
        color[3] * texel[3],
    ]
}
