//! Camera validation: a degenerate depth range makes the projection singular.

use crate::schema::RectkitConfig;

use super::helpers::validate_finite;

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &RectkitConfig) {
    validate_finite(errors, "camera.near", config.camera.near);
    validate_finite(errors, "camera.far", config.camera.far);
    if config.camera.near == config.camera.far {
        errors.push(format!(
            "camera.near and camera.far must differ (both {})",
            config.camera.near
        ));
    }
}
