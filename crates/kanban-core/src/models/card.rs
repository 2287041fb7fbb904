//! Card entity - a single kanban task item.

use crate::{CardPatch, CardStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A card is the sole entity of the system: a work item with a status
/// and free-text description. Hard-deleted, no versioning; concurrent
/// updates are last-write-wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,
    /// Optional short text, at most 120 characters
    pub title: Option<String>,
    /// Required, always non-empty
    pub description: String,
    pub status: CardStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// Create a new card with a fresh id and server-generated timestamps
    pub fn new(description: String, title: Option<String>, status: CardStatus) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, returning the new entity. Only fields
    /// present in the patch change; `updated_at` is refreshed
    /// unconditionally, `id` and `created_at` never move.
    pub fn apply(&self, patch: &CardPatch, now: DateTime<Utc>) -> Card {
        let mut card = self.clone();
        if let Some(ref title) = patch.title {
            card.title = Some(title.clone());
        }
        if let Some(ref description) = patch.description {
            card.description = description.clone();
        }
        if let Some(status) = patch.status {
            card.status = status;
        }
        card.updated_at = now;
        card
    }
}
