//! Camera configuration types.

use serde::{Deserialize, Serialize};

/// Where world-space `(0, 0)` lands on the viewport.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum CameraOrigin {
    /// Y grows downward, matching window pixel coordinates.
    #[default]
    TopLeft,
    /// Y grows upward.
    BottomLeft,
}

/// Orthographic camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub origin: CameraOrigin,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            origin: CameraOrigin::TopLeft,
            near: 1.0,
            far: -1.0,
        }
    }
}
