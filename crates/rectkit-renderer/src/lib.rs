//! Instanced rectangle rendering: one shared unit quad, a camera uniform,
//! and solid or atlas-sampled instance streams drawn one batch per call.

pub mod atlas;
pub mod batch;
pub mod camera;
pub mod geometry;
pub mod gpu;
pub mod instance;
pub mod instance_buffer;
pub mod pipeline;
pub mod rect_renderer;
pub mod reference;
pub mod render_state;
pub mod texture;

pub use atlas::{AtlasId, AtlasRegion};
pub use batch::{BatchKind, RectBatch, RectList};
pub use camera::{CameraBinding, CameraUniform};
pub use geometry::{QuadGeometry, QuadVertex, QUAD_INDICES, QUAD_VERTICES};
pub use gpu::{GpuContext, RendererError};
pub use instance::{AtlasInstance, InstanceRecord, SolidInstance};
pub use instance_buffer::InstanceBuffer;
pub use pipeline::{AtlasPipeline, SolidPipeline};
pub use rect_renderer::{RectRenderer, RendererSettings};
pub use reference::{Rasterizer, RgbaTexels};
pub use render_state::{FrameOutcome, RenderState};
pub use texture::{AtlasBinding, AtlasTexture, SamplerSettings};
