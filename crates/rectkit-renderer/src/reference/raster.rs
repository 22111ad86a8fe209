use rectkit_config::schema::BlendMode;

use super::{assemble_atlas, assemble_solid, shade_atlas, shade_solid, AssembledVertex, RgbaTexels};
use crate::batch::{RectBatch, RectList};
use crate::camera::CameraUniform;
use crate::geometry::QUAD_VERTICES;
use crate::gpu::RendererError;
use crate::texture::SamplerSettings;

/// Software render target that draws a [`RectList`] the way the GPU
/// pipelines do.
///
/// Coverage is tested at pixel centers. A pixel belongs to a rectangle when
/// its local quad coordinates fall in `[0, 1)` on both axes, so edge-sharing
/// rectangles never both cover it. Assumes an affine camera (`w = 1`).
pub struct Rasterizer {
    width: u32,
    height: u32,
    blend: BlendMode,
    pixels: Vec<[f32; 4]>,
}

impl Rasterizer {
    pub fn new(width: u32, height: u32, clear: [f32; 4]) -> Self {
        Self {
            width,
            height,
            blend: BlendMode::Alpha,
            pixels: vec![clear; width as usize * height as usize],
        }
    }

    pub fn with_blend(mut self, blend: BlendMode) -> Self {
        self.blend = blend;
        self
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Linear RGBA at `(x, y)`, or `None` outside the target.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Draw every rectangle of `list` in submission order. Atlas batches
    /// sample `atlases[id]`.
    pub fn draw(
        &mut self,
        camera: &CameraUniform,
        list: &RectList,
        atlases: &[RgbaTexels],
        sampler: &SamplerSettings,
    ) -> Result<(), RendererError> {
        for batch in list.batches() {
            match batch {
                RectBatch::Solid(instances) => {
                    for instance in instances {
                        let corners: [AssembledVertex; 4] =
                            std::array::from_fn(|i| assemble_solid(camera, &QUAD_VERTICES[i], instance));
                        self.fill_quad(&corners, |_, color| shade_solid(color));
                    }
                }
                RectBatch::Atlas { atlas, instances } => {
                    let texels = atlases
                        .get(atlas.0 as usize)
                        .ok_or(RendererError::UnknownAtlas(atlas.0))?;
                    for instance in instances {
                        let corners: [AssembledVertex; 4] =
                            std::array::from_fn(|i| assemble_atlas(camera, &QUAD_VERTICES[i], instance));
                        self.fill_quad(&corners, |uv, color| {
                            shade_atlas(color, texels.sample(uv, sampler))
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Encode to 8-bit sRGB, as presenting to an sRGB surface would.
    pub fn into_image(self) -> image::RgbaImage {
        let mut out = image::RgbaImage::new(self.width, self.height);
        for (dst, src) in out.pixels_mut().zip(self.pixels.iter()) {
            *dst = image::Rgba([
                to_u8(linear_to_srgb(src[0])),
                to_u8(linear_to_srgb(src[1])),
                to_u8(linear_to_srgb(src[2])),
                to_u8(src[3]),
            ]);
        }
        out
    }

    /// Fill the quad spanned by corners `[(0,0), (1,0), (1,1), (0,1)]`.
    fn fill_quad<F>(&mut self, corners: &[AssembledVertex; 4], shade: F)
    where
        F: Fn([f32; 2], [f32; 4]) -> [f32; 4],
    {
        let p0 = self.to_pixel(corners[0].clip_position);
        let p1 = self.to_pixel(corners[1].clip_position);
        let p3 = self.to_pixel(corners[3].clip_position);

        // Local axes of the quad in pixel space.
        let ex = [p1[0] - p0[0], p1[1] - p0[1]];
        let ey = [p3[0] - p0[0], p3[1] - p0[1]];
        let det = ex[0] * ey[1] - ex[1] * ey[0];
        if det.abs() < f32::EPSILON {
            return;
        }

        let points = corners.map(|c| self.to_pixel(c.clip_position));
        let min_x = points.iter().map(|p| p[0]).fold(f32::INFINITY, f32::min);
        let max_x = points.iter().map(|p| p[0]).fold(f32::NEG_INFINITY, f32::max);
        let min_y = points.iter().map(|p| p[1]).fold(f32::INFINITY, f32::min);
        let max_y = points.iter().map(|p| p[1]).fold(f32::NEG_INFINITY, f32::max);

        let x_start = min_x.floor().max(0.0) as u32;
        let y_start = min_y.floor().max(0.0) as u32;
        let x_end = (max_x.ceil().max(0.0) as u32).min(self.width);
        let y_end = (max_y.ceil().max(0.0) as u32).min(self.height);

        let uv0 = corners[0].tex_coord;
        let du = [
            corners[1].tex_coord[0] - uv0[0],
            corners[1].tex_coord[1] - uv0[1],
        ];
        let dv = [
            corners[3].tex_coord[0] - uv0[0],
            corners[3].tex_coord[1] - uv0[1],
        ];
        let color = corners[0].color;

        for y in y_start..y_end {
            for x in x_start..x_end {
                let d = [x as f32 + 0.5 - p0[0], y as f32 + 0.5 - p0[1]];
                let s = (d[0] * ey[1] - d[1] * ey[0]) / det;
                let t = (ex[0] * d[1] - ex[1] * d[0]) / det;
                if !(0.0..1.0).contains(&s) || !(0.0..1.0).contains(&t) {
                    continue;
                }

                let uv = [
                    uv0[0] + du[0] * s + dv[0] * t,
                    uv0[1] + du[1] * s + dv[1] * t,
                ];
                let src = shade(uv, color);
                let idx = (y * self.width + x) as usize;
                self.pixels[idx] = blend(self.blend, src, self.pixels[idx]);
            }
        }
    }

    /// Clip space to pixel space, y down.
    fn to_pixel(&self, clip: [f32; 4]) -> [f32; 2] {
        let w = if clip[3] == 0.0 { 1.0 } else { clip[3] };
        let ndc_x = clip[0] / w;
        let ndc_y = clip[1] / w;
        [
            (ndc_x + 1.0) * 0.5 * self.width as f32,
            (1.0 - ndc_y) * 0.5 * self.height as f32,
        ]
    }
}

/// The fixed-function blend configured by `pipeline::blend_state`.
fn blend(mode: BlendMode, src: [f32; 4], dst: [f32; 4]) -> [f32; 4] {
    let inv = 1.0 - src[3];
    match mode {
        BlendMode::Alpha => [
            src[0] * src[3] + dst[0] * inv,
            src[1] * src[3] + dst[1] * inv,
            src[2] * src[3] + dst[2] * inv,
            src[3] + dst[3] * inv,
        ],
        BlendMode::Premultiplied => [
            src[0] + dst[0] * inv,
            src[1] + dst[1] * inv,
            src[2] + dst[2] * inv,
            src[3] + dst[3] * inv,
        ],
        BlendMode::Replace => src,
    }
}

fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}
