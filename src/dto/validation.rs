//! Validation helpers for DTOs.

use validator::ValidationError;

use crate::engine::Color;

/// Validates that `literal` is a CSS color the engine can parse.
///
/// # Examples
///
/// ```ignore
/// validate_color_literal("#C01C21")          // Ok
/// validate_color_literal("rgb(192, 28, 33)") // Ok
/// validate_color_literal("#nope")            // Err
/// ```
pub fn validate_color_literal(literal: &str) -> Result<(), ValidationError> {
    Color::parse(literal).map(|_| ()).map_err(|err| {
        let mut error = ValidationError::new("color_literal");
        error.message = Some(err.to_string().into());
        error
    })
}

/// Validates that a base color name is not blank.
pub fn validate_base_color_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("base_color_name");
        err.message = Some("Base color name must not be blank".into());
        return Err(err);
    }
    Ok(())
}
