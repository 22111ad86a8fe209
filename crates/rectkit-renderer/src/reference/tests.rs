use rectkit_config::schema::{AddressMode, BlendMode, CameraOrigin, FilterMode};

use super::*;
use crate::atlas::{AtlasId, AtlasRegion};
use crate::batch::RectList;
use crate::geometry::QUAD_VERTICES;
use crate::texture::SamplerSettings;

const EPS: f32 = 1e-5;

const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

fn pixel_camera(width: u32, height: u32) -> CameraUniform {
    CameraUniform::for_viewport(width as f32, height as f32, CameraOrigin::TopLeft, 1.0, -1.0)
}

fn nearest_clamp() -> SamplerSettings {
    SamplerSettings {
        filter: FilterMode::Nearest,
        address_mode: AddressMode::ClampToEdge,
    }
}

/// 2x2 atlas: red, green on top; blue, white below.
fn quadrant_atlas() -> RgbaTexels {
    RgbaTexels::from_texels(2, 2, vec![RED, GREEN, BLUE, WHITE]).unwrap()
}

fn approx_eq(a: [f32; 4], b: [f32; 4]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < EPS)
}

fn covered(raster: &Rasterizer, clear: [f32; 4]) -> Vec<(u32, u32)> {
    let (w, h) = raster.size();
    let mut out = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if raster.pixel(x, y) != Some(clear) {
                out.push((x, y));
            }
        }
    }
    out
}

// -- Vertex assembly ---------------------------------------------------------

#[test]
fn solid_assembly_scales_then_translates() {
    let camera = CameraUniform::IDENTITY;
    let instance = SolidInstance::new([10.0, 20.0], [3.0, 4.0], RED);

    let out = assemble_solid(&camera, &QUAD_VERTICES[2], &instance);
    assert_eq!(out.world_position, [13.0, 24.0]);
    assert_eq!(out.clip_position, [13.0, 24.0, 0.0, 1.0]);
    assert_eq!(out.tex_coord, QUAD_VERTICES[2].tex_coord);
    assert_eq!(out.color, RED);
}

#[test]
fn atlas_assembly_remaps_tex_coords_into_region() {
    let camera = CameraUniform::IDENTITY;
    let instance = AtlasInstance::new([0.0; 2], [1.0; 2], [0.25, 0.5], [0.5, 0.25], WHITE);

    let top_left = assemble_atlas(&camera, &QUAD_VERTICES[0], &instance);
    let bottom_right = assemble_atlas(&camera, &QUAD_VERTICES[2], &instance);
    assert_eq!(top_left.tex_coord, [0.25, 0.5]);
    assert_eq!(bottom_right.tex_coord, [0.75, 0.75]);
}

#[test]
fn unit_scale_extent_is_the_camera_image_of_the_unit_quad() {
    let camera = pixel_camera(100, 50);
    let instance = SolidInstance::new([30.0, 10.0], [1.0, 1.0], RED);

    for vertex in QUAD_VERTICES {
        let out = assemble_solid(&camera, vertex, &instance);
        let expected = camera.transform([
            vertex.position[0] + 30.0,
            vertex.position[1] + 10.0,
        ]);
        assert!(approx_eq(out.clip_position, expected));
    }

    let mut list = RectList::new();
    list.push_solid(instance);
    let mut raster = Rasterizer::new(100, 50, BLACK);
    raster.draw(&camera, &list, &[], &nearest_clamp()).unwrap();
    assert_eq!(covered(&raster, BLACK), vec![(30, 10)]);
}

#[test]
fn assembly_is_independent_of_instance_order() {
    let camera = pixel_camera(64, 64);
    let a = SolidInstance::new([1.0, 2.0], [5.0, 6.0], RED);
    let b = SolidInstance::new([40.0, 3.0], [7.0, 8.0], BLUE);

    let a_first: Vec<_> = [a, b]
        .iter()
        .flat_map(|i| QUAD_VERTICES.iter().map(move |v| assemble_solid(&camera, v, i)))
        .collect();
    let b_first: Vec<_> = [b, a]
        .iter()
        .flat_map(|i| QUAD_VERTICES.iter().map(move |v| assemble_solid(&camera, v, i)))
        .collect();

    assert_eq!(&a_first[..4], &b_first[4..]);
    assert_eq!(&a_first[4..], &b_first[..4]);
}

// -- Shading -----------------------------------------------------------------

#[test]
fn solid_shading_returns_instance_color() {
    let color = [0.2, 0.4, 0.6, 0.5];
    assert_eq!(shade_solid(color), color);
}

#[test]
fn atlas_tint_multiplies_every_channel() {
    let out = shade_atlas([0.5, 1.0, 0.25, 0.5], [1.0, 0.5, 1.0, 0.5]);
    assert_eq!(out, [0.5, 0.5, 0.25, 0.25]);
}

#[test]
fn white_tint_returns_the_raw_texel() {
    let texel = [0.3, 0.6, 0.9, 0.7];
    assert_eq!(shade_atlas(WHITE, texel), texel);
}

// -- Rasterized scenarios ----------------------------------------------------

#[test]
fn identity_camera_draws_unit_quad_in_upper_right_clip_quadrant() {
    let mut list = RectList::new();
    list.push_solid(SolidInstance::new([0.0, 0.0], [1.0, 1.0], RED));

    let mut raster = Rasterizer::new(4, 4, BLACK);
    raster
        .draw(&CameraUniform::IDENTITY, &list, &[], &nearest_clamp())
        .unwrap();

    // Local [0,1]x[0,1] is clip x in [0,1], y in [0,1]: the right half of
    // the target and the top half (pixel rows grow downward).
    let mut expected = vec![(2, 0), (3, 0), (2, 1), (3, 1)];
    expected.sort_by_key(|&(x, y)| (y, x));
    assert_eq!(covered(&raster, BLACK), expected);
    for (x, y) in expected {
        assert_eq!(raster.pixel(x, y), Some(RED));
    }
}

#[test]
fn non_overlapping_instances_render_the_same_in_any_order() {
    let camera = pixel_camera(16, 16);
    let a = SolidInstance::new([1.0, 1.0], [4.0, 4.0], [1.0, 0.0, 0.0, 0.5]);
    let b = SolidInstance::new([8.0, 8.0], [6.0, 3.0], [0.0, 1.0, 0.0, 0.75]);

    let render = |first: SolidInstance, second: SolidInstance| {
        let mut list = RectList::new();
        list.extend_solid([first, second]);
        let mut raster = Rasterizer::new(16, 16, BLACK);
        raster.draw(&camera, &list, &[], &nearest_clamp()).unwrap();
        raster.into_image()
    };

    assert_eq!(render(a, b), render(b, a));
}

#[test]
fn overlapping_instances_follow_submission_order() {
    let camera = pixel_camera(4, 4);
    let red = SolidInstance::new([0.0, 0.0], [4.0, 4.0], RED);
    let blue = SolidInstance::new([0.0, 0.0], [4.0, 4.0], BLUE);

    let mut list = RectList::new();
    list.extend_solid([red, blue]);
    let mut raster = Rasterizer::new(4, 4, BLACK);
    raster.draw(&camera, &list, &[], &nearest_clamp()).unwrap();
    assert_eq!(raster.pixel(1, 1), Some(BLUE));
}

#[test]
fn full_region_on_white_atlas_matches_solid_color() {
    let camera = pixel_camera(8, 8);
    let color = [0.2, 0.6, 0.4, 0.8];
    let white = RgbaTexels::solid(4, 4, WHITE).unwrap();
    let sampler = SamplerSettings::default();

    let mut solid = RectList::new();
    solid.push_solid(SolidInstance::new([1.0, 1.0], [5.0, 5.0], color));
    let mut atlas = RectList::new();
    atlas.push_atlas(
        AtlasId(0),
        AtlasInstance::from_region([1.0, 1.0], [5.0, 5.0], AtlasRegion::FULL, color),
    );

    let mut a = Rasterizer::new(8, 8, BLACK);
    a.draw(&camera, &solid, &[], &sampler).unwrap();
    let mut b = Rasterizer::new(8, 8, BLACK);
    b.draw(&camera, &atlas, &[white], &sampler).unwrap();

    for y in 0..8 {
        for x in 0..8 {
            assert!(approx_eq(a.pixel(x, y).unwrap(), b.pixel(x, y).unwrap()));
        }
    }
}

#[test]
fn untinted_atlas_reproduces_texels() {
    let camera = pixel_camera(2, 2);
    let atlas = quadrant_atlas();

    let mut list = RectList::new();
    list.push_atlas(
        AtlasId(0),
        AtlasInstance::untinted([0.0, 0.0], [2.0, 2.0], AtlasRegion::FULL),
    );
    let mut raster = Rasterizer::new(2, 2, BLACK);
    raster
        .draw(&camera, &list, std::slice::from_ref(&atlas), &nearest_clamp())
        .unwrap();

    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(raster.pixel(x, y), Some(atlas.texel(x, y)));
        }
    }
}

#[test]
fn bottom_right_region_samples_only_that_quadrant() {
    let camera = pixel_camera(8, 8);
    let mut list = RectList::new();
    list.push_atlas(
        AtlasId(0),
        AtlasInstance::new([0.0, 0.0], [8.0, 8.0], [0.5, 0.5], [0.5, 0.5], WHITE),
    );

    let mut raster = Rasterizer::new(8, 8, BLACK);
    raster
        .draw(&camera, &list, &[quadrant_atlas()], &nearest_clamp())
        .unwrap();

    for y in 0..8 {
        for x in 0..8 {
            assert_eq!(raster.pixel(x, y), Some(WHITE), "pixel ({x}, {y})");
        }
    }
}

#[test]
fn far_edge_clamps_without_wrapping() {
    let atlas = quadrant_atlas();
    let nearest = nearest_clamp();
    let linear = SamplerSettings {
        filter: FilterMode::Linear,
        address_mode: AddressMode::ClampToEdge,
    };

    assert_eq!(atlas.sample([1.0, 1.0], &nearest), WHITE);
    assert!(approx_eq(atlas.sample([1.0, 1.0], &linear), WHITE));

    // Last pixel of a region ending exactly at (1, 1).
    let camera = pixel_camera(2, 2);
    let mut list = RectList::new();
    list.push_atlas(
        AtlasId(0),
        AtlasInstance::new([0.0, 0.0], [2.0, 2.0], [0.5, 0.5], [0.5, 0.5], WHITE),
    );
    let mut raster = Rasterizer::new(2, 2, BLACK);
    raster
        .draw(&camera, &list, std::slice::from_ref(&atlas), &linear)
        .unwrap();
    assert!(approx_eq(raster.pixel(1, 1).unwrap(), WHITE));
}

#[test]
fn repeat_addressing_wraps_at_far_edge() {
    let atlas = quadrant_atlas();
    let repeat = SamplerSettings {
        filter: FilterMode::Linear,
        address_mode: AddressMode::Repeat,
    };
    let sampled = atlas.sample([1.0, 1.0], &repeat);
    assert!(!approx_eq(sampled, WHITE));
}

#[test]
fn negative_scale_mirrors_the_rectangle() {
    let camera = pixel_camera(8, 8);
    let mut list = RectList::new();
    list.push_solid(SolidInstance::new([4.0, 0.0], [-4.0, 4.0], RED));

    let mut raster = Rasterizer::new(8, 8, BLACK);
    raster.draw(&camera, &list, &[], &nearest_clamp()).unwrap();

    let hits = covered(&raster, BLACK);
    assert_eq!(hits.len(), 16);
    assert!(hits.iter().all(|&(x, y)| x < 4 && y < 4));
}

#[test]
fn negative_scale_flips_sampled_texels() {
    let camera = pixel_camera(2, 1);
    let atlas = RgbaTexels::from_texels(2, 1, vec![RED, BLUE]).unwrap();
    let mut list = RectList::new();
    list.push_atlas(
        AtlasId(0),
        AtlasInstance::untinted([2.0, 0.0], [-2.0, 1.0], AtlasRegion::FULL),
    );

    let mut raster = Rasterizer::new(2, 1, BLACK);
    raster.draw(&camera, &list, &[atlas], &nearest_clamp()).unwrap();
    assert_eq!(raster.pixel(0, 0), Some(BLUE));
    assert_eq!(raster.pixel(1, 0), Some(RED));
}

#[test]
fn translucent_solid_blends_over_clear_color() {
    let camera = pixel_camera(2, 2);
    let mut list = RectList::new();
    list.push_solid(SolidInstance::new([0.0, 0.0], [2.0, 2.0], [1.0, 0.0, 0.0, 0.5]));

    let mut raster = Rasterizer::new(2, 2, BLUE);
    raster.draw(&camera, &list, &[], &nearest_clamp()).unwrap();
    assert!(approx_eq(raster.pixel(0, 0).unwrap(), [0.5, 0.0, 0.5, 1.0]));

    let mut replaced = Rasterizer::new(2, 2, BLUE).with_blend(BlendMode::Replace);
    replaced.draw(&camera, &list, &[], &nearest_clamp()).unwrap();
    assert_eq!(replaced.pixel(0, 0), Some([1.0, 0.0, 0.0, 0.5]));
}

#[test]
fn unregistered_atlas_is_an_error() {
    let mut list = RectList::new();
    list.push_atlas(AtlasId(1), AtlasInstance::untinted([0.0; 2], [1.0; 2], AtlasRegion::FULL));

    let mut raster = Rasterizer::new(2, 2, BLACK);
    let err = raster
        .draw(&CameraUniform::IDENTITY, &list, &[quadrant_atlas()], &nearest_clamp())
        .unwrap_err();
    assert!(matches!(err, crate::gpu::RendererError::UnknownAtlas(1)));
}

#[test]
fn bottom_left_origin_flips_vertical_placement() {
    let camera = CameraUniform::for_viewport(4.0, 4.0, CameraOrigin::BottomLeft, 1.0, -1.0);
    let mut list = RectList::new();
    list.push_solid(SolidInstance::new([0.0, 0.0], [1.0, 1.0], RED));

    let mut raster = Rasterizer::new(4, 4, BLACK);
    raster.draw(&camera, &list, &[], &nearest_clamp()).unwrap();
    assert_eq!(covered(&raster, BLACK), vec![(0, 3)]);
}

#[test]
fn huge_atlas_offset_samples_without_overflow() {
    let camera = pixel_camera(2, 2);
    let mut list = RectList::new();
    list.push_atlas(
        AtlasId(0),
        AtlasInstance::new([0.0, 0.0], [2.0, 2.0], [1.0e19, 0.0], [0.5, 0.5], WHITE),
    );
    list.push_atlas(
        AtlasId(0),
        AtlasInstance::new([0.0, 0.0], [2.0, 2.0], [-1.0e19, 1.0e19], [0.5, 0.5], WHITE),
    );

    for filter in [FilterMode::Nearest, FilterMode::Linear] {
        for address_mode in [AddressMode::ClampToEdge, AddressMode::Repeat, AddressMode::MirrorRepeat] {
            let sampler = SamplerSettings { filter, address_mode };
            let mut raster = Rasterizer::new(2, 2, BLACK);
            assert!(raster.draw(&camera, &list, &[quadrant_atlas()], &sampler).is_ok());
            assert_eq!(covered(&raster, BLACK).len(), 4);
        }
    }
}
