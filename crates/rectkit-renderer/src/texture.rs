//! Atlas texture resource and its group 1 bind group.

use std::path::Path;

use rectkit_config::schema::{AddressMode, AtlasConfig, FilterMode};

use crate::gpu::RendererError;

/// Bind group index of the atlas texture + sampler in the atlas pipeline.
pub const ATLAS_GROUP: u32 = 1;

/// Texel format of every atlas. Stored as sRGB so sampling returns linear values.
pub const ATLAS_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Filtering and addressing used when sampling an atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SamplerSettings {
    pub filter: FilterMode,
    pub address_mode: AddressMode,
}

impl SamplerSettings {
    pub fn from_config(config: &AtlasConfig) -> Self {
        Self {
            filter: config.filter,
            address_mode: config.address_mode,
        }
    }

    pub fn wgpu_filter(&self) -> wgpu::FilterMode {
        match self.filter {
            FilterMode::Nearest => wgpu::FilterMode::Nearest,
            FilterMode::Linear => wgpu::FilterMode::Linear,
        }
    }

    pub fn wgpu_address_mode(&self) -> wgpu::AddressMode {
        match self.address_mode {
            AddressMode::ClampToEdge => wgpu::AddressMode::ClampToEdge,
            AddressMode::Repeat => wgpu::AddressMode::Repeat,
            AddressMode::MirrorRepeat => wgpu::AddressMode::MirrorRepeat,
        }
    }

    fn create_sampler(&self, device: &wgpu::Device, label: &str) -> wgpu::Sampler {
        let address_mode = self.wgpu_address_mode();
        let filter = self.wgpu_filter();
        device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: address_mode,
            address_mode_v: address_mode,
            address_mode_w: address_mode,
            mag_filter: filter,
            min_filter: filter,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        })
    }
}

/// A 2D RGBA atlas, held through its view, plus its sampler.
pub struct AtlasTexture {
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    width: u32,
    height: u32,
}

impl AtlasTexture {
    /// Upload `rgba` (tightly packed, 4 bytes per texel, rows top to bottom).
    pub fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        width: u32,
        height: u32,
        rgba: &[u8],
        settings: SamplerSettings,
        label: &str,
    ) -> Result<Self, RendererError> {
        check_rgba_len(width, height, rgba.len())?;

        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: ATLAS_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(width * 4),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = settings.create_sampler(device, label);

        tracing::info!(label, width, height, ?settings, "atlas texture created");

        Ok(Self {
            view,
            sampler,
            width,
            height,
        })
    }

    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &image::DynamicImage,
        settings: SamplerSettings,
        label: &str,
    ) -> Result<Self, RendererError> {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba(device, queue, width, height, rgba.as_raw(), settings, label)
    }

    pub fn from_path(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &Path,
        settings: SamplerSettings,
    ) -> Result<Self, RendererError> {
        let image = image::open(path)?;
        let label = path.display().to_string();
        Self::from_image(device, queue, &image, settings, &label)
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }
}

fn check_rgba_len(width: u32, height: u32, len: usize) -> Result<(), RendererError> {
    if width == 0 || height == 0 {
        return Err(RendererError::TextureError(format!(
            "atlas must be at least 1x1, got {width}x{height}"
        )));
    }
    let expected = width as usize * height as usize * 4;
    if len != expected {
        return Err(RendererError::TextureError(format!(
            "expected {expected} bytes for {width}x{height} RGBA, got {len}"
        )));
    }
    Ok(())
}

/// Group 1 layout shared by every atlas: binding 0 texture, binding 1 sampler.
pub struct AtlasBinding {
    layout: wgpu::BindGroupLayout,
}

impl AtlasBinding {
    pub fn new(device: &wgpu::Device) -> Self {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("atlas bind group layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        Self { layout }
    }

    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    pub fn bind_group(&self, device: &wgpu::Device, atlas: &AtlasTexture) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("atlas bind group"),
            layout: &self.layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(atlas.view()),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(atlas.sampler()),
                },
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampler_settings_from_config() {
        let config = AtlasConfig {
            path: None,
            filter: FilterMode::Nearest,
            address_mode: AddressMode::Repeat,
        };
        let settings = SamplerSettings::from_config(&config);
        assert_eq!(settings.wgpu_filter(), wgpu::FilterMode::Nearest);
        assert_eq!(settings.wgpu_address_mode(), wgpu::AddressMode::Repeat);
    }

    #[test]
    fn default_sampler_is_linear_clamped() {
        let settings = SamplerSettings::default();
        assert_eq!(settings.wgpu_filter(), wgpu::FilterMode::Linear);
        assert_eq!(settings.wgpu_address_mode(), wgpu::AddressMode::ClampToEdge);
    }

    #[test]
    fn mirror_address_mode_maps() {
        let settings = SamplerSettings {
            filter: FilterMode::Linear,
            address_mode: AddressMode::MirrorRepeat,
        };
        assert_eq!(settings.wgpu_address_mode(), wgpu::AddressMode::MirrorRepeat);
    }

    #[test]
    fn rgba_length_must_match_dimensions() {
        assert!(check_rgba_len(2, 2, 16).is_ok());

        let err = check_rgba_len(2, 2, 12).unwrap_err();
        assert_eq!(
            err.to_string(),
            "texture error: expected 16 bytes for 2x2 RGBA, got 12"
        );
    }

    #[test]
    fn empty_atlas_is_rejected() {
        assert!(matches!(
            check_rgba_len(0, 4, 0),
            Err(RendererError::TextureError(_))
        ));
    }
}
