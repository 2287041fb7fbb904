use kanban_core::Card;

use serde::Serialize;

/// Card DTO for JSON serialization - the stable external representation
#[derive(Debug, Serialize)]
pub struct CardDto {
    pub id: String,
    pub title: Option<String>,
    pub description: String,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Card> for CardDto {
    fn from(c: Card) -> Self {
        Self {
            id: c.id.to_string(),
            title: c.title,
            description: c.description,
            status: c.status.as_str().to_string(),
            created_at: c.created_at.timestamp(),
            updated_at: c.updated_at.timestamp(),
        }
    }
}
