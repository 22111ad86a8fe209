//! Camera transform shared by every rectangle in a frame.
//!
//! `CameraUniform` is the 64-byte block bound at group 0, binding 0 of both
//! rectangle pipelines. The matrix is column-major: each inner array is one
//! column, matching WGSL `mat4x4<f32>`.

use rectkit_config::schema::{CameraConfig, CameraOrigin};
use wgpu::util::DeviceExt;

/// Bind group index of the camera uniform in both pipelines.
pub const CAMERA_GROUP: u32 = 0;

/// GPU-side projection matrix matching the WGSL `Camera` struct.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub projection: [[f32; 4]; 4],
}

impl CameraUniform {
    pub const IDENTITY: CameraUniform = CameraUniform {
        projection: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Orthographic projection of the box `[left, right] x [bottom, top]`
    /// onto clip space, with depth `near..far` mapped to `0..1`.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Self {
            projection: [
                [2.0 / (right - left), 0.0, 0.0, 0.0],
                [0.0, 2.0 / (top - bottom), 0.0, 0.0],
                [0.0, 0.0, 1.0 / (near - far), 0.0],
                [
                    (right + left) / (left - right),
                    (top + bottom) / (bottom - top),
                    near / (near - far),
                    1.0,
                ],
            ],
        }
    }

    /// Pixel-space projection for a viewport of `width` x `height`.
    pub fn for_viewport(width: f32, height: f32, origin: CameraOrigin, near: f32, far: f32) -> Self {
        match origin {
            CameraOrigin::TopLeft => Self::orthographic(0.0, width, height, 0.0, near, far),
            CameraOrigin::BottomLeft => Self::orthographic(0.0, width, 0.0, height, near, far),
        }
    }

    /// Pixel-space projection using the configured origin and depth range.
    pub fn from_config(config: &CameraConfig, width: u32, height: u32) -> Self {
        Self::for_viewport(
            width.max(1) as f32,
            height.max(1) as f32,
            config.origin,
            config.near,
            config.far,
        )
    }

    /// `projection * (p.x, p.y, 0, 1)`.
    pub fn transform(&self, p: [f32; 2]) -> [f32; 4] {
        let m = &self.projection;
        let mut out = [0.0f32; 4];
        for (row, value) in out.iter_mut().enumerate() {
            *value = m[0][row] * p[0] + m[1][row] * p[1] + m[3][row];
        }
        out
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Uniform buffer and bind group holding the current [`CameraUniform`].
pub struct CameraBinding {
    buffer: wgpu::Buffer,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl CameraBinding {
    pub fn new(device: &wgpu::Device, initial: CameraUniform) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("camera uniform"),
            contents: bytemuck::bytes_of(&initial),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("camera bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(
                        std::mem::size_of::<CameraUniform>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self {
            buffer,
            bind_group_layout,
            bind_group,
        }
    }

    /// Upload a new projection. Must happen before the draws that read it.
    pub fn update(&self, queue: &wgpu::Queue, camera: &CameraUniform) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(camera));
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

// =============================================================================
// Tests
// =============================================================================
