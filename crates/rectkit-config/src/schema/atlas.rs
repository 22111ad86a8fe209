//! Atlas texture and sampler configuration types.

use serde::{Deserialize, Serialize};

/// Texel filtering used when sampling the atlas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum FilterMode {
    Nearest,
    #[default]
    Linear,
}

/// How texture coordinates outside `[0, 1]` are resolved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum AddressMode {
    #[default]
    ClampToEdge,
    Repeat,
    MirrorRepeat,
}

/// Atlas configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct AtlasConfig {
    /// Image file to load as the atlas. A generated demo atlas is used when unset.
    pub path: Option<String>,
    pub filter: FilterMode,
    pub address_mode: AddressMode,
}
