use crate::{Result as CoreErrorResult, validate_required_text};

/// Validated input for creating a content item.
///
/// The store assigns `id` and both timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContentItem {
    title: String,
    description: Option<String>,
    body: String,
}

impl NewContentItem {
    #[track_caller]
    pub fn new(
        title: String,
        description: Option<String>,
        body: String,
    ) -> CoreErrorResult<Self> {
        validate_required_text("title", &title)?;
        validate_required_text("body", &body)?;

        Ok(Self {
            title,
            description,
            body,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
