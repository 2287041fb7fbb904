//! Card REST API handlers

use crate::{
    ApiError, ApiResult, CardDto, CardListResponse, CreateCardRequest, ListCardsQuery,
    UpdateCardRequest,
    api::cards::list_cards_query::MAX_PAGE_SIZE,
    state::AppState,
};

use kanban_core::{Card, CardPatch, CardStatus, validate_description, validate_title};
use kanban_db::CardRepository;

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use error_location::ErrorLocation;
use uuid::Uuid;

/// POST /cards
///
/// Create a new card; id and timestamps are server-generated.
pub async fn create_card(
    State(state): State<AppState>,
    Json(req): Json<CreateCardRequest>,
) -> ApiResult<(StatusCode, Json<CardDto>)> {
    validate_description(&req.description)?;
    if let Some(ref title) = req.title {
        validate_title(title)?;
    }
    let status = match req.status {
        Some(ref s) => CardStatus::from_str(s)?,
        None => CardStatus::default(),
    };

    let card = Card::new(req.description, req.title, status);
    CardRepository::create(&state.pool, &card).await?;

    log::info!("Created card {}", card.id);

    Ok((StatusCode::CREATED, Json(CardDto::from(card))))
}

/// GET /cards
///
/// List cards newest first with optional status filter and
/// offset-based pagination.
pub async fn list_cards(
    State(state): State<AppState>,
    Query(query): Query<ListCardsQuery>,
) -> ApiResult<Json<CardListResponse>> {
    if query.page < 1 {
        return Err(ApiError::Validation {
            message: "page must be >= 1".to_string(),
            field: Some("page".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if query.size < 1 || query.size > MAX_PAGE_SIZE {
        return Err(ApiError::Validation {
            message: format!("size must be between 1 and {}", MAX_PAGE_SIZE),
            field: Some("size".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    let status = query
        .status
        .as_deref()
        .map(CardStatus::from_str)
        .transpose()?;

    let (cards, total) = CardRepository::list(&state.pool, status, query.page, query.size).await?;

    Ok(Json(CardListResponse {
        items: cards.into_iter().map(CardDto::from).collect(),
        total,
        page: query.page,
        size: query.size,
    }))
}

/// GET /cards/:id
///
/// Retrieve a single card by ID
pub async fn get_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CardDto>> {
    let card_id = Uuid::parse_str(&id)?;

    let card = CardRepository::find_by_id(&state.pool, card_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Card {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(CardDto::from(card)))
}

/// PUT /cards/:id
///
/// Partial update: fields absent from the body stay untouched,
/// `updated_at` is refreshed on every successful update.
/// Last-write-wins, no version check.
pub async fn update_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCardRequest>,
) -> ApiResult<Json<CardDto>> {
    let card_id = Uuid::parse_str(&id)?;

    let card = CardRepository::find_by_id(&state.pool, card_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Card {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if req.is_empty() {
        return Err(ApiError::BadRequest {
            message: "No fields to update".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if let Some(ref title) = req.title {
        validate_title(title)?;
    }
    if let Some(ref description) = req.description {
        validate_description(description)?;
    }
    let status = req.status.as_deref().map(CardStatus::from_str).transpose()?;

    let patch = CardPatch {
        title: req.title,
        description: req.description,
        status,
    };
    let updated = card.apply(&patch, Utc::now());
    CardRepository::update(&state.pool, &updated).await?;

    log::info!("Updated card {}", updated.id);

    Ok(Json(CardDto::from(updated)))
}

/// DELETE /cards/:id
///
/// Hard delete. Deleting a nonexistent id is not-found, not a no-op
/// success.
pub async fn delete_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let card_id = Uuid::parse_str(&id)?;

    let rows = CardRepository::delete(&state.pool, card_id).await?;
    if rows == 0 {
        return Err(ApiError::NotFound {
            message: format!("Card {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Deleted card {}", card_id);

    Ok(StatusCode::NO_CONTENT)
}
