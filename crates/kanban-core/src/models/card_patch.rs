use crate::CardStatus;

/// Explicit whitelist of updatable card fields. `None` means
/// "not supplied, leave untouched".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<CardStatus>,
}

impl CardPatch {
    /// True when no field is supplied. The boundary rejects empty
    /// patches before they reach the repository.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}
