//! Renderer configuration types.

use serde::{Deserialize, Serialize};

/// Blend policy applied by both rectangle pipelines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum BlendMode {
    /// Straight alpha over the existing framebuffer.
    #[default]
    Alpha,
    /// Source color is already multiplied by its alpha.
    Premultiplied,
    /// No blending; the fragment overwrites the target.
    Replace,
}

/// Renderer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Frame clear color (`#RRGGBB`, `#RRGGBBAA` or `rgba()`).
    pub clear_color: String,
    pub blend: BlendMode,
    /// Instances each buffer can hold before it has to grow (valid range: 1-1048576).
    pub initial_instance_capacity: u32,
    pub vsync: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            clear_color: "#1a1a1a".into(),
            blend: BlendMode::Alpha,
            initial_instance_capacity: 1024,
            vsync: true,
        }
    }
}
