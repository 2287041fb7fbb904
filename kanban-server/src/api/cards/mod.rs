pub mod card_dto;
pub mod card_list_response;
pub mod cards;
pub mod create_card_request;
pub mod list_cards_query;
pub mod update_card_request;
