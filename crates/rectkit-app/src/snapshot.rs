//! Headless rendering of the demo scene through the CPU rasterizer.

use std::path::Path;

use rectkit_common::RectkitError;
use rectkit_config::colors::parse_color;
use rectkit_config::schema::RectkitConfig;
use rectkit_renderer::{AtlasId, CameraUniform, Rasterizer, RgbaTexels, SamplerSettings};

use crate::scene;

/// Render the demo scene at `width` x `height` and write it to `out` as PNG.
pub fn render_snapshot(
    config: &RectkitConfig,
    atlas_path: Option<&Path>,
    width: u32,
    height: u32,
    out: &Path,
) -> rectkit_common::Result<()> {
    if width == 0 || height == 0 {
        return Err(RectkitError::Other(format!(
            "snapshot size must be non-zero, got {width}x{height}"
        )));
    }

    let texels = RgbaTexels::from_image(&scene::atlas_image(atlas_path))?;
    let clear = parse_color(&config.renderer.clear_color)?.to_linear_f32_array();
    let camera = CameraUniform::from_config(&config.camera, width, height);
    let list = scene::build_scene(width as f32, height as f32, AtlasId(0));

    let mut raster = Rasterizer::new(width, height, clear).with_blend(config.renderer.blend);
    raster.draw(
        &camera,
        &list,
        &[texels],
        &SamplerSettings::from_config(&config.atlas),
    )?;

    raster
        .into_image()
        .save_with_format(out, image::ImageFormat::Png)
        .map_err(|e| RectkitError::Other(format!("failed to write {}: {e}", out.display())))?;

    tracing::info!(
        "Snapshot written to {} ({}x{}, {} rects)",
        out.display(),
        width,
        height,
        list.instance_count(),
    );
    Ok(())
}
