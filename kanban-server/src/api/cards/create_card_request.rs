use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateCardRequest {
    /// Optional short title, at most 120 characters
    #[serde(default)]
    pub title: Option<String>,

    /// Required non-empty description
    pub description: String,

    /// Status: "todo", "doing" or "done"; defaults to "todo"
    #[serde(default)]
    pub status: Option<String>,
}
