use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Reject empty values for required text columns (title, body).
///
/// Whitespace is content: only the empty string is refused.
#[track_caller]
pub fn validate_required_text(field: &str, value: &str) -> CoreErrorResult<()> {
    if value.is_empty() {
        return Err(CoreError::Validation {
            message: format!("{} cannot be empty", field),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
