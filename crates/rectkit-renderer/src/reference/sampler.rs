use rectkit_common::Color;
use rectkit_config::schema::{AddressMode, FilterMode};

use crate::gpu::RendererError;
use crate::texture::SamplerSettings;

/// Linear-space RGBA texels, rows top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaTexels {
    width: u32,
    height: u32,
    texels: Vec<[f32; 4]>,
}

impl RgbaTexels {
    pub fn from_texels(width: u32, height: u32, texels: Vec<[f32; 4]>) -> Result<Self, RendererError> {
        let expected = width as usize * height as usize;
        if width == 0 || height == 0 || texels.len() != expected {
            return Err(RendererError::TextureError(format!(
                "expected {expected} texels for {width}x{height}, got {}",
                texels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            texels,
        })
    }

    /// Decode sRGB-encoded RGBA8 bytes, as an `Rgba8UnormSrgb` texture does.
    pub fn from_srgba8(width: u32, height: u32, rgba: &[u8]) -> Result<Self, RendererError> {
        if rgba.len() % 4 != 0 {
            return Err(RendererError::TextureError(format!(
                "RGBA data length {} is not a multiple of 4",
                rgba.len()
            )));
        }
        let texels = rgba
            .chunks_exact(4)
            .map(|px| Color::from_rgba(px[0], px[1], px[2], px[3]).to_linear_f32_array())
            .collect();
        Self::from_texels(width, height, texels)
    }

    pub fn from_image(image: &image::RgbaImage) -> Result<Self, RendererError> {
        let (width, height) = image.dimensions();
        Self::from_srgba8(width, height, image.as_raw())
    }

    pub fn solid(width: u32, height: u32, color: [f32; 4]) -> Result<Self, RendererError> {
        Self::from_texels(width, height, vec![color; width as usize * height as usize])
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn texel(&self, x: u32, y: u32) -> [f32; 4] {
        self.texels[(y * self.width + x) as usize]
    }

    /// Sample at normalized `uv` with the given filter and address mode.
    /// Texel `i` has its center at `(i + 0.5) / size`.
    pub fn sample(&self, uv: [f32; 2], settings: &SamplerSettings) -> [f32; 4] {
        let u = uv[0] * self.width as f32;
        let v = uv[1] * self.height as f32;

        match settings.filter {
            FilterMode::Nearest => {
                let x = address(u.floor() as i64, self.width, settings.address_mode);
                let y = address(v.floor() as i64, self.height, settings.address_mode);
                self.texel(x, y)
            }
            FilterMode::Linear => {
                let u = u - 0.5;
                let v = v - 0.5;
                let x0 = u.floor();
                let y0 = v.floor();
                let fx = u - x0;
                let fy = v - y0;

                let mode = settings.address_mode;
                let xa = address(x0 as i64, self.width, mode);
                let xb = address((x0 as i64).saturating_add(1), self.width, mode);
                let ya = address(y0 as i64, self.height, mode);
                let yb = address((y0 as i64).saturating_add(1), self.height, mode);

                let top = lerp4(self.texel(xa, ya), self.texel(xb, ya), fx);
                let bottom = lerp4(self.texel(xa, yb), self.texel(xb, yb), fx);
                lerp4(top, bottom, fy)
            }
        }
    }
}

/// Map a possibly out-of-range texel index into `0..size`.
fn address(i: i64, size: u32, mode: AddressMode) -> u32 {
    let n = size as i64;
    let mapped = match mode {
        AddressMode::ClampToEdge => i.clamp(0, n - 1),
        AddressMode::Repeat => i.rem_euclid(n),
        AddressMode::MirrorRepeat => {
            let m = i.rem_euclid(2 * n);
            if m >= n {
                2 * n - 1 - m
            } else {
                m
            }
        }
    };
    mapped as u32
}

fn lerp4(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}
