pub mod card;
pub mod card_patch;
pub mod card_status;
