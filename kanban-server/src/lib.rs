pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    cards::{
        card_dto::CardDto,
        card_list_response::CardListResponse,
        cards::{create_card, delete_card, get_card, list_cards, update_card},
        create_card_request::CreateCardRequest,
        list_cards_query::ListCardsQuery,
        update_card_request::UpdateCardRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
};

pub use crate::error::ServerError;
pub use crate::routes::{build_router, cors_layer};
pub use crate::state::AppState;
