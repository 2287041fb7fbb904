use serde::Deserialize;

/// Partial update: only fields present in the body change.
#[derive(Debug, Deserialize)]
pub struct UpdateCardRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Status: "todo", "doing" or "done"
    #[serde(default)]
    pub status: Option<String>,
}

impl UpdateCardRequest {
    /// True when the body carries no recognized field; rejected with 400
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}
