/// Errors raised by host-side GPU glue. The rectangle shading itself has no
/// error paths.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("surface error: {0}")]
    SurfaceError(String),

    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    DeviceError(String),

    #[error("texture error: {0}")]
    TextureError(String),

    #[error("atlas {0} is not registered")]
    UnknownAtlas(u32),

    #[error("{label}: {requested} instances exceed the device limit of {max}")]
    InstanceOverflow {
        label: &'static str,
        requested: usize,
        max: usize,
    },
}

impl From<wgpu::SurfaceError> for RendererError {
    fn from(e: wgpu::SurfaceError) -> Self {
        RendererError::SurfaceError(e.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RendererError::DeviceError(e.to_string())
    }
}

impl From<image::ImageError> for RendererError {
    fn from(e: image::ImageError) -> Self {
        RendererError::TextureError(e.to_string())
    }
}

impl From<RendererError> for rectkit_common::RectkitError {
    fn from(e: RendererError) -> Self {
        rectkit_common::RectkitError::Renderer(e.to_string())
    }
}

/// Physical pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalSize {
    pub width: u32,
    pub height: u32,
}
