//! Shared range-validation helpers used by all section validators.

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is not a finite float.
pub(crate) fn validate_finite(errors: &mut Vec<String>, name: &str, value: f32) {
    if !value.is_finite() {
        errors.push(format!("{name} = {value} must be finite"));
    }
}
