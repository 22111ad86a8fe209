//! Demo scene: box-layout panels, atlas sprites and a translucent header,
//! plus the built-in atlas the sprites sample when none is configured.

use std::path::Path;

use rectkit_common::{Color, Rect};
use rectkit_renderer::{AtlasId, AtlasInstance, AtlasRegion, RectList, SolidInstance};

/// Side of one cell in the built-in atlas, in pixels.
pub const DEMO_ATLAS_CELL: u32 = 32;
/// The built-in atlas is a `DEMO_ATLAS_GRID` x `DEMO_ATLAS_GRID` grid of cells.
pub const DEMO_ATLAS_GRID: u32 = 2;

const PANEL_MARGIN: f32 = 8.0;

const PANEL_COLORS: [Color; 4] = [
    Color { r: 0x2e, g: 0x34, b: 0x40, a: 0xff },
    Color { r: 0x3b, g: 0x42, b: 0x52, a: 0xff },
    Color { r: 0x43, g: 0x4c, b: 0x5e, a: 0xff },
    Color { r: 0x4c, g: 0x56, b: 0x6a, a: 0xff },
];

const SPRITE_TINTS: [Color; 4] = [
    Color::WHITE,
    Color { r: 0x88, g: 0xc0, b: 0xd0, a: 0xff },
    Color::WHITE,
    Color { r: 0xeb, g: 0xcb, b: 0x8b, a: 0xff },
];

const HEADER_OVERLAY: Color = Color { r: 0x5e, g: 0x81, b: 0xac, a: 0x59 };

/// Direction a box divides its rect among its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxLayout {
    /// Children side by side, each `width / n` wide.
    Horizontal,
    /// Children stacked, each `height / n` tall.
    Vertical,
}

impl BoxLayout {
    pub fn split(self, rect: Rect, count: usize) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        let n = count as f32;
        (0..count)
            .map(|i| {
                let i = i as f32;
                match self {
                    BoxLayout::Horizontal => {
                        let w = rect.width / n;
                        Rect::new(rect.x + w * i, rect.y, w, rect.height)
                    }
                    BoxLayout::Vertical => {
                        let h = rect.height / n;
                        Rect::new(rect.x, rect.y + h * i, rect.width, h)
                    }
                }
            })
            .collect()
    }
}

/// A layout tree whose leaves become panels.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    Leaf,
    Box(BoxLayout, Vec<LayoutNode>),
}

impl LayoutNode {
    /// Leaf rects in depth-first order.
    pub fn leaves(&self, rect: Rect) -> Vec<Rect> {
        match self {
            LayoutNode::Leaf => vec![rect],
            LayoutNode::Box(layout, children) => layout
                .split(rect, children.len())
                .into_iter()
                .zip(children)
                .flat_map(|(child_rect, child)| child.leaves(child_rect))
                .collect(),
        }
    }
}

/// Three columns, the middle one split into two rows.
pub fn demo_layout() -> LayoutNode {
    LayoutNode::Box(
        BoxLayout::Horizontal,
        vec![
            LayoutNode::Leaf,
            LayoutNode::Box(BoxLayout::Vertical, vec![LayoutNode::Leaf, LayoutNode::Leaf]),
            LayoutNode::Leaf,
        ],
    )
}

/// Build the demo scene for a `width` x `height` pixel viewport with a
/// top-left origin. Sprites sample the cells of a 2x2 grid in `atlas`.
pub fn build_scene(width: f32, height: f32, atlas: AtlasId) -> RectList {
    let mut list = RectList::new();

    let root = Rect::new(0.0, 0.0, width, height).inset(PANEL_MARGIN);
    let panels: Vec<Rect> = demo_layout()
        .leaves(root)
        .iter()
        .map(|leaf| leaf.inset(PANEL_MARGIN))
        .collect();

    list.extend_solid(panels.iter().enumerate().map(|(i, panel)| {
        SolidInstance::new(
            [panel.x, panel.y],
            [panel.width, panel.height],
            PANEL_COLORS[i % PANEL_COLORS.len()].to_linear_f32_array(),
        )
    }));

    let cells = DEMO_ATLAS_GRID * DEMO_ATLAS_GRID;
    for (i, panel) in panels.iter().enumerate() {
        let side = panel.width.min(panel.height) * 0.5;
        let position = [
            panel.x + (panel.width - side) / 2.0,
            panel.y + (panel.height - side) / 2.0,
        ];
        let cell = i as u32 % cells;
        let region = AtlasRegion::grid_cell(
            cell % DEMO_ATLAS_GRID,
            cell / DEMO_ATLAS_GRID,
            DEMO_ATLAS_GRID,
            DEMO_ATLAS_GRID,
        );
        let tint = SPRITE_TINTS[i % SPRITE_TINTS.len()].to_linear_f32_array();
        list.push_atlas(atlas, AtlasInstance::from_region(position, [side, side], region, tint));
    }

    let header_height = (height * 0.08).max(1.0);
    list.push_solid(SolidInstance::new(
        [0.0, 0.0],
        [width, header_height],
        HEADER_OVERLAY.to_linear_f32_array(),
    ));

    list
}

/// Built-in 2x2 atlas: checkerboard, solid white, stripes, and a disc mask.
pub fn demo_atlas() -> image::RgbaImage {
    let cell = DEMO_ATLAS_CELL;
    let size = cell * DEMO_ATLAS_GRID;
    image::RgbaImage::from_fn(size, size, |x, y| {
        let (lx, ly) = (x % cell, y % cell);
        let pixel = match (x / cell, y / cell) {
            (0, 0) => {
                if (lx / 8 + ly / 8) % 2 == 0 {
                    [255, 255, 255, 255]
                } else {
                    [0, 0, 0, 255]
                }
            }
            (1, 0) => [255, 255, 255, 255],
            (0, 1) => {
                if (lx / 4) % 2 == 0 {
                    [191, 97, 106, 255]
                } else {
                    [235, 203, 139, 255]
                }
            }
            _ => {
                let r = cell as f32 / 2.0;
                let dx = lx as f32 + 0.5 - r;
                let dy = ly as f32 + 0.5 - r;
                if dx * dx + dy * dy <= (r - 2.0) * (r - 2.0) {
                    [255, 255, 255, 255]
                } else {
                    [255, 255, 255, 0]
                }
            }
        };
        image::Rgba(pixel)
    })
}

/// Load the atlas image at `path`, falling back to [`demo_atlas`] when no
/// path is given or it cannot be read.
pub fn atlas_image(path: Option<&Path>) -> image::RgbaImage {
    let Some(path) = path else {
        return demo_atlas();
    };
    match image::open(path) {
        Ok(image) => {
            tracing::info!("Loaded atlas {}", path.display());
            image.to_rgba8()
        }
        Err(e) => {
            tracing::warn!("Failed to load atlas {}, using built-in atlas: {e}", path.display());
            demo_atlas()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rectkit_renderer::{BatchKind, RectBatch};

    const EPS: f32 = 1e-4;

    #[test]
    fn horizontal_split_divides_width_evenly() {
        let parts = BoxLayout::Horizontal.split(Rect::new(10.0, 20.0, 300.0, 100.0), 3);
        assert_eq!(parts.len(), 3);
        for (i, part) in parts.iter().enumerate() {
            assert!((part.width - 100.0).abs() < EPS);
            assert!((part.height - 100.0).abs() < EPS);
            assert!((part.x - (10.0 + 100.0 * i as f32)).abs() < EPS);
            assert!((part.y - 20.0).abs() < EPS);
        }
    }

    #[test]
    fn vertical_split_divides_height_evenly() {
        let parts = BoxLayout::Vertical.split(Rect::new(0.0, 0.0, 80.0, 60.0), 2);
        assert_eq!(parts, vec![Rect::new(0.0, 0.0, 80.0, 30.0), Rect::new(0.0, 30.0, 80.0, 30.0)]);
    }

    #[test]
    fn split_into_zero_children_is_empty() {
        assert!(BoxLayout::Vertical.split(Rect::new(0.0, 0.0, 1.0, 1.0), 0).is_empty());
    }

    #[test]
    fn demo_layout_has_four_leaves_covering_the_root() {
        let root = Rect::new(0.0, 0.0, 300.0, 200.0);
        let leaves = demo_layout().leaves(root);
        assert_eq!(leaves.len(), 4);

        let area: f32 = leaves.iter().map(|r| r.width * r.height).sum();
        assert!((area - 300.0 * 200.0).abs() < 1.0);

        // Middle column is split into two rows.
        assert!((leaves[1].height - 100.0).abs() < EPS);
        assert!((leaves[2].y - 100.0).abs() < EPS);
    }

    #[test]
    fn scene_uses_three_draw_batches() {
        let list = build_scene(1280.0, 720.0, AtlasId(0));
        let kinds: Vec<BatchKind> = list.batches().iter().map(RectBatch::kind).collect();
        assert_eq!(
            kinds,
            vec![BatchKind::Solid, BatchKind::Atlas(AtlasId(0)), BatchKind::Solid]
        );
        assert_eq!(list.instance_count(), 4 + 4 + 1);
    }

    #[test]
    fn scene_sprites_stay_inside_the_atlas() {
        let list = build_scene(640.0, 480.0, AtlasId(2));
        for batch in list.batches() {
            if let RectBatch::Atlas { atlas, instances } = batch {
                assert_eq!(*atlas, AtlasId(2));
                assert!(instances.iter().all(AtlasInstance::region_in_bounds));
            }
        }
    }

    #[test]
    fn header_overlay_is_translucent_and_last() {
        let list = build_scene(400.0, 300.0, AtlasId(0));
        match list.batches().last() {
            Some(RectBatch::Solid(instances)) => {
                let header = instances[0];
                assert!(header.color[3] > 0.0 && header.color[3] < 1.0);
                assert_eq!(header.scale[0], 400.0);
            }
            other => panic!("expected header batch, got {other:?}"),
        }
    }

    #[test]
    fn demo_atlas_cells() {
        let atlas = demo_atlas();
        let size = DEMO_ATLAS_CELL * DEMO_ATLAS_GRID;
        assert_eq!(atlas.dimensions(), (size, size));

        // Checkerboard corner, solid white, disc center and transparent corner.
        assert_eq!(atlas.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(atlas.get_pixel(8, 0).0, [0, 0, 0, 255]);
        assert_eq!(atlas.get_pixel(DEMO_ATLAS_CELL + 5, 5).0, [255, 255, 255, 255]);
        let c = DEMO_ATLAS_CELL + DEMO_ATLAS_CELL / 2;
        assert_eq!(atlas.get_pixel(c, c).0[3], 255);
        assert_eq!(atlas.get_pixel(DEMO_ATLAS_CELL, DEMO_ATLAS_CELL).0[3], 0);
    }

    #[test]
    fn missing_atlas_falls_back_to_demo() {
        let image = atlas_image(Some(Path::new("/nonexistent/rectkit-atlas.png")));
        assert_eq!(image, demo_atlas());
    }
}
