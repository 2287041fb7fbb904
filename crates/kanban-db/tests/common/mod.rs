#![allow(dead_code)]

use kanban_core::{Card, CardStatus};

use chrono::DateTime;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    kanban_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// A card with server-generated id and timestamps
pub fn create_test_card(description: &str, status: CardStatus) -> Card {
    Card::new(description.to_string(), None, status)
}

/// A card with a pinned id and second-precision timestamps, for
/// deterministic ordering assertions
pub fn create_pinned_card(id: &str, created_at_secs: i64, status: CardStatus) -> Card {
    let ts = DateTime::from_timestamp(created_at_secs, 0).unwrap();
    let mut card = Card::new(format!("card {}", id), None, status);
    card.id = Uuid::parse_str(id).unwrap();
    card.created_at = ts;
    card.updated_at = ts;
    card
}
