//! WGSL sources for the two rectangle pipelines.
//!
//! Both share the camera block at group 0 and the unit-quad vertex inputs at
//! locations 0 and 1. Instance inputs start at location 2 and must line up
//! with `InstanceRecord::ATTRIBUTES`.

pub(crate) const SOLID_SHADER: &str = r#"
struct Camera {
    projection: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: Camera;

struct VertexInput {
    @location(0) position: vec2<f32>,
    @location(1) tex_coord: vec2<f32>,
};

struct InstanceInput {
    @location(2) position: vec2<f32>,
    @location(3) scale: vec2<f32>,
    @location(4) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) tex_coord: vec2<f32>,
    @location(1) color: vec4<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    var out: VertexOutput;

    let world = vertex.position * instance.scale + instance.position;
    out.clip_position = camera.projection * vec4<f32>(world, 0.0, 1.0);
    out.tex_coord = vertex.tex_coord;
    out.color = instance.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;

pub(crate) const ATLAS_SHADER: &str = r#"
struct Camera {
    projection: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: Camera;

@group(1) @binding(0)
var atlas_texture: texture_2d<f32>;

@group(1) @binding(1)
var atlas_sampler: sampler;

struct VertexInput {
    @location(0) position: vec2<f32>,
    @location(1) tex_coord: vec2<f32>,
};

struct InstanceInput {
    @location(2) position: vec2<f32>,
    @location(3) scale: vec2<f32>,
    @location(4) atlas_offset: vec2<f32>,
    @location(5) atlas_scale: vec2<f32>,
    @location(6) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) tex_coord: vec2<f32>,
    @location(1) color: vec4<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    var out: VertexOutput;

    let world = vertex.position * instance.scale + instance.position;
    out.clip_position = camera.projection * vec4<f32>(world, 0.0, 1.0);

    // Remap the quad's 0..1 texture space into this instance's sub-rect.
    out.tex_coord = vertex.tex_coord * instance.atlas_scale + instance.atlas_offset;
    out.color = instance.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color * textureSample(atlas_texture, atlas_sampler, in.tex_coord);
}
"#;
