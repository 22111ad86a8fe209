//! Normalized sub-rectangles of a shared atlas texture.

/// Handle to an atlas registered with a [`RectRenderer`](crate::RectRenderer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtlasId(pub u32);

/// A sub-rectangle of an atlas in normalized `[0, 1]` texture space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasRegion {
    /// Top-left corner.
    pub offset: [f32; 2],
    /// Width and height.
    pub scale: [f32; 2],
}

impl AtlasRegion {
    /// The whole texture.
    pub const FULL: AtlasRegion = AtlasRegion {
        offset: [0.0, 0.0],
        scale: [1.0, 1.0],
    };

    /// Normalize a pixel allocation `(x, y, width, height)` inside an atlas
    /// of `atlas_width` x `atlas_height` pixels.
    pub fn from_pixels(x: u32, y: u32, width: u32, height: u32, atlas_width: u32, atlas_height: u32) -> Self {
        let aw = atlas_width.max(1) as f32;
        let ah = atlas_height.max(1) as f32;
        Self {
            offset: [x as f32 / aw, y as f32 / ah],
            scale: [width as f32 / aw, height as f32 / ah],
        }
    }

    /// Cell `(col, row)` of an atlas divided into a uniform `cols` x `rows` grid.
    pub fn grid_cell(col: u32, row: u32, cols: u32, rows: u32) -> Self {
        let cw = 1.0 / cols.max(1) as f32;
        let ch = 1.0 / rows.max(1) as f32;
        Self {
            offset: [col as f32 * cw, row as f32 * ch],
            scale: [cw, ch],
        }
    }

    /// Whether `offset + scale` stays inside `[0, 1]` on both axes.
    pub fn in_bounds(&self) -> bool {
        const EPS: f32 = 1e-6;
        (0..2).all(|axis| {
            let start = self.offset[axis];
            let end = start + self.scale[axis];
            start >= -EPS && self.scale[axis] >= 0.0 && end <= 1.0 + EPS
        })
    }
}

impl Default for AtlasRegion {
    fn default() -> Self {
        Self::FULL
    }
}
