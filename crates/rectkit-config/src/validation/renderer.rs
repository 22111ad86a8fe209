//! Renderer validation: clear color format and instance capacity.

use crate::colors::validate_color;
use crate::schema::RectkitConfig;

use super::helpers::validate_range;

pub(crate) fn validate_renderer(errors: &mut Vec<String>, config: &RectkitConfig) {
    if !validate_color(&config.renderer.clear_color) {
        errors.push(format!(
            "renderer.clear_color = {:?} is not a valid color",
            config.renderer.clear_color
        ));
    }
    validate_range(
        errors,
        "renderer.initial_instance_capacity",
        config.renderer.initial_instance_capacity,
        1,
        1_048_576,
    );
}
