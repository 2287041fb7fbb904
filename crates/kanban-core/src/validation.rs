//! Field validation shared by the HTTP boundary and the seed binary.

use crate::{CoreError, ErrorLocation, Result as CoreResult};

use std::panic::Location;

/// Maximum title length in characters
pub const MAX_TITLE_LENGTH: usize = 120;

/// A card description is required and must be non-empty
#[track_caller]
pub fn validate_description(description: &str) -> CoreResult<()> {
    if description.is_empty() {
        return Err(CoreError::Validation {
            message: "description must not be empty".to_string(),
            field: Some("description".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

/// Titles are optional but capped at [`MAX_TITLE_LENGTH`] characters
#[track_caller]
pub fn validate_title(title: &str) -> CoreResult<()> {
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation {
            message: format!("title must be at most {} characters", MAX_TITLE_LENGTH),
            field: Some("title".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
