//! Configuration schema types for rectkit.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod atlas;
mod camera;
mod renderer;
mod system;
mod window;

pub use atlas::*;
pub use camera::*;
pub use renderer::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for rectkit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct RectkitConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub renderer: RendererConfig,
    pub atlas: AtlasConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
