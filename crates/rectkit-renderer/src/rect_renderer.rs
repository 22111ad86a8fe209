//! Host-side renderer tying the camera, shared quad, instance buffers and
//! both pipelines together.

use std::ops::Range;

use rectkit_config::schema::{BlendMode, RectkitConfig};

use crate::atlas::AtlasId;
use crate::batch::{RectBatch, RectList};
use crate::camera::{CameraBinding, CameraUniform};
use crate::geometry::QuadGeometry;
use crate::gpu::RendererError;
use crate::instance::{AtlasInstance, SolidInstance};
use crate::instance_buffer::InstanceBuffer;
use crate::pipeline::{AtlasPipeline, SolidPipeline};
use crate::texture::{AtlasBinding, AtlasTexture};

/// Renderer options derived from the `[renderer]` config section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererSettings {
    pub blend: BlendMode,
    pub initial_instance_capacity: usize,
}

impl RendererSettings {
    pub fn from_config(config: &RectkitConfig) -> Self {
        Self {
            blend: config.renderer.blend,
            initial_instance_capacity: config.renderer.initial_instance_capacity as usize,
        }
    }
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self::from_config(&RectkitConfig::default())
    }
}

/// Which pipeline a prepared draw uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DrawSource {
    Solid,
    Atlas(AtlasId),
}

/// One instanced draw call: a variant plus its range in that variant's buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DrawCall {
    source: DrawSource,
    instances: Range<u32>,
}

/// Instance data and draw calls flattened from a [`RectList`].
#[derive(Debug, Default)]
struct DrawPlan {
    solid: Vec<SolidInstance>,
    atlas: Vec<AtlasInstance>,
    draws: Vec<DrawCall>,
}

/// Concatenate every batch into one stream per variant, recording the range
/// each batch occupies. Fails on the first atlas id at or beyond `atlas_count`.
fn plan_draws(list: &RectList, atlas_count: usize) -> Result<DrawPlan, RendererError> {
    let mut plan = DrawPlan::default();

    for batch in list.batches() {
        if batch.is_empty() {
            continue;
        }
        match batch {
            RectBatch::Solid(instances) => {
                let start = plan.solid.len() as u32;
                plan.solid.extend_from_slice(instances);
                plan.draws.push(DrawCall {
                    source: DrawSource::Solid,
                    instances: start..plan.solid.len() as u32,
                });
            }
            RectBatch::Atlas { atlas, instances } => {
                if atlas.0 as usize >= atlas_count {
                    return Err(RendererError::UnknownAtlas(atlas.0));
                }
                let out_of_bounds = instances.iter().filter(|i| !i.region_in_bounds()).count();
                if out_of_bounds > 0 {
                    tracing::debug!(
                        atlas = atlas.0,
                        out_of_bounds,
                        "atlas batch samples outside its sub-rects"
                    );
                }
                let start = plan.atlas.len() as u32;
                plan.atlas.extend_from_slice(instances);
                plan.draws.push(DrawCall {
                    source: DrawSource::Atlas(*atlas),
                    instances: start..plan.atlas.len() as u32,
                });
            }
        }
    }

    Ok(plan)
}

/// Draws [`RectList`]s with one instanced draw per batch.
pub struct RectRenderer {
    camera: CameraBinding,
    geometry: QuadGeometry,
    atlas_binding: AtlasBinding,
    solid_pipeline: SolidPipeline,
    atlas_pipeline: AtlasPipeline,
    solid_instances: InstanceBuffer<SolidInstance>,
    atlas_instances: InstanceBuffer<AtlasInstance>,
    atlases: Vec<wgpu::BindGroup>,
    draws: Vec<DrawCall>,
}

impl RectRenderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, settings: &RendererSettings) -> Self {
        let camera = CameraBinding::new(device, CameraUniform::IDENTITY);
        let geometry = QuadGeometry::new(device);
        let atlas_binding = AtlasBinding::new(device);

        let solid_pipeline =
            SolidPipeline::new(device, format, settings.blend, camera.bind_group_layout());
        let atlas_pipeline = AtlasPipeline::new(
            device,
            format,
            settings.blend,
            camera.bind_group_layout(),
            atlas_binding.layout(),
        );

        let capacity = settings.initial_instance_capacity;
        tracing::debug!(?format, blend = ?settings.blend, capacity, "rect renderer created");

        Self {
            camera,
            geometry,
            atlas_binding,
            solid_pipeline,
            atlas_pipeline,
            solid_instances: InstanceBuffer::new(device, capacity),
            atlas_instances: InstanceBuffer::new(device, capacity),
            atlases: Vec::new(),
            draws: Vec::new(),
        }
    }

    /// Make `texture` available to atlas batches under the returned id.
    pub fn register_atlas(&mut self, device: &wgpu::Device, texture: AtlasTexture) -> AtlasId {
        let id = AtlasId(self.atlases.len() as u32);
        let bind_group = self.atlas_binding.bind_group(device, &texture);
        let (width, height) = texture.size();
        tracing::info!(atlas = id.0, width, height, "atlas registered");
        self.atlases.push(bind_group);
        id
    }

    pub fn set_camera(&self, queue: &wgpu::Queue, camera: CameraUniform) {
        self.camera.update(queue, &camera);
    }

    /// Upload the instances of `list` and record its draws. On error nothing
    /// from the previous frame is drawn.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        list: &RectList,
    ) -> Result<(), RendererError> {
        self.draws.clear();
        let plan = plan_draws(list, self.atlases.len())?;

        self.solid_instances.upload(device, queue, &plan.solid)?;
        self.atlas_instances.upload(device, queue, &plan.atlas)?;
        self.draws = plan.draws;
        Ok(())
    }

    /// Replay the prepared draws in paint order.
    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>) {
        for draw in &self.draws {
            let count = draw.instances.end - draw.instances.start;
            match draw.source {
                DrawSource::Solid => self.solid_pipeline.draw(
                    pass,
                    &self.camera,
                    &self.geometry,
                    self.solid_instances.slice(draw.instances.clone()),
                    count,
                ),
                DrawSource::Atlas(id) => {
                    let Some(bind_group) = self.atlases.get(id.0 as usize) else {
                        continue;
                    };
                    self.atlas_pipeline.draw(
                        pass,
                        &self.camera,
                        &self.geometry,
                        bind_group,
                        self.atlas_instances.slice(draw.instances.clone()),
                        count,
                    );
                }
            }
        }
    }

    /// Number of draw calls the next `render` will issue.
    pub fn draw_count(&self) -> usize {
        self.draws.len()
    }
}
