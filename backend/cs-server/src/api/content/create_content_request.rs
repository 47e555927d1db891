use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateContentRequest {
    /// Content title (required)
    pub title: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Content body (required)
    pub body: String,
}
