mod card;
mod card_patch;
mod card_status;
