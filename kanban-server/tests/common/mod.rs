#![allow(dead_code)]

//! Test infrastructure for kanban-server API tests

use kanban_server::AppState;

use kanban_core::{Card, CardStatus};
use kanban_db::CardRepository;

use chrono::DateTime;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    kanban_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
        app_name: "kanban-lite".to_string(),
        app_version: "test".to_string(),
    }
}

/// Insert a card directly through the repository
pub async fn create_test_card(
    pool: &SqlitePool,
    description: &str,
    title: Option<&str>,
    status: CardStatus,
) -> Card {
    let card = Card::new(
        description.to_string(),
        title.map(String::from),
        status,
    );
    CardRepository::create(pool, &card)
        .await
        .expect("Failed to create test card");
    card
}

/// Insert a card with a pinned id and created_at second, for
/// deterministic ordering assertions
pub async fn create_pinned_card(
    pool: &SqlitePool,
    id: &str,
    created_at_secs: i64,
    status: CardStatus,
) -> Card {
    let ts = DateTime::from_timestamp(created_at_secs, 0).unwrap();
    let mut card = Card::new(format!("card {}", id), None, status);
    card.id = Uuid::parse_str(id).unwrap();
    card.created_at = ts;
    card.updated_at = ts;
    CardRepository::create(pool, &card)
        .await
        .expect("Failed to create pinned card");
    card
}
