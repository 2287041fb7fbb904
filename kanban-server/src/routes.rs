use crate::api::cards::cards::{create_card, delete_card, get_card, list_cards, update_card};
use crate::error::{Result as ServerErrorResult, ServerError};
use crate::{health, state::AppState};

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/version", get(health::version))
        // Card resources
        .route("/cards", get(list_cards).post(create_card))
        .route(
            "/cards/{id}",
            get(get_card).put(update_card).delete(delete_card),
        )
        // Add shared state
        .with_state(state)
}

/// CORS middleware restricted to the configured origins
pub fn cors_layer(config: &kanban_config::CorsConfig) -> ServerErrorResult<CorsLayer> {
    let origins = config
        .allowed_origins()
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(&origin).map_err(|_| ServerError::InvalidOrigin { origin })
        })
        .collect::<ServerErrorResult<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any))
}
