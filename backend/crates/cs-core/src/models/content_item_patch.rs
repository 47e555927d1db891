use crate::{CoreError, Patch, Result as CoreErrorResult, validate_required_text};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

/// Partial update for a content item.
///
/// Only fields present in the request are written. `description` accepts an
/// explicit null (clears the column); `title` and `body` are required columns
/// and reject null or empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContentItemPatch {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub body: Patch<String>,
}

impl ContentItemPatch {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        Self::validate_required("title", &self.title)?;
        Self::validate_required("body", &self.body)?;
        Ok(())
    }

    /// True when no field was supplied
    pub fn is_empty(&self) -> bool {
        self.title.is_absent() && self.description.is_absent() && self.body.is_absent()
    }

    /// Names of the fields this patch writes, in column order
    pub fn changed_fields(&self) -> Vec<&'static str> {
        [
            ("title", self.title.is_present()),
            ("description", self.description.is_present()),
            ("body", self.body.is_present()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }

    #[track_caller]
    fn validate_required(field: &str, patch: &Patch<String>) -> CoreErrorResult<()> {
        match patch {
            Patch::Absent => Ok(()),
            Patch::Null => Err(CoreError::Validation {
                message: format!("{} cannot be null", field),
                field: Some(field.to_string()),
                location: ErrorLocation::from(Location::caller()),
            }),
            Patch::Value(value) => validate_required_text(field, value),
        }
    }
}
