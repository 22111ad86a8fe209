//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod camera;
mod helpers;
mod renderer;
mod window;


use crate::schema::RectkitConfig;
use rectkit_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &RectkitConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    window::validate_window(&mut errors, config);
    camera::validate_camera(&mut errors, config);
    renderer::validate_renderer(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
