pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::card::Card;
pub use models::card_patch::CardPatch;
pub use models::card_status::CardStatus;
pub use validation::{MAX_TITLE_LENGTH, validate_description, validate_title};
