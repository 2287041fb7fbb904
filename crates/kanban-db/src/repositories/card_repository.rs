use crate::{DbError, error::Result as DbErrorResult};

use kanban_core::{Card, CardStatus};

use std::panic::Location;
use std::str::FromStr;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct CardRepository;

impl CardRepository {
    pub async fn create<'e, E>(executor: E, card: &Card) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id = card.id.to_string();
        let created_at = card.created_at.timestamp();
        let updated_at = card.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO cards (id, title, description, status, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(card.title.as_deref())
        .bind(card.description.as_str())
        .bind(card.status.as_str())
        .bind(created_at)
        .bind(updated_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Card>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, title, description, status, created_at, updated_at
                FROM cards
                WHERE id = ?
            "#,
        )
        .bind(id_str)
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(card_from_row).transpose()
    }

    /// Page through cards, newest first, ties broken by id descending so
    /// the order is deterministic across pages. The total counts every
    /// row matching the filter, independent of the page slice. Inputs
    /// are pre-validated at the boundary (page >= 1, 1 <= size <= 100).
    pub async fn list(
        pool: &SqlitePool,
        status: Option<CardStatus>,
        page: u32,
        size: u32,
    ) -> DbErrorResult<(Vec<Card>, i64)> {
        let limit = i64::from(size);
        let offset = i64::from(page.saturating_sub(1)) * limit;

        let (total, rows) = match status {
            Some(status) => {
                let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cards WHERE status = ?")
                    .bind(status.as_str())
                    .fetch_one(pool)
                    .await?;

                let rows = sqlx::query(
                    r#"
                        SELECT id, title, description, status, created_at, updated_at
                        FROM cards
                        WHERE status = ?
                        ORDER BY created_at DESC, id DESC
                        LIMIT ? OFFSET ?
                    "#,
                )
                .bind(status.as_str())
                .bind(limit)
                .bind(offset)
                .fetch_all(pool)
                .await?;

                (total, rows)
            }
            None => {
                let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cards")
                    .fetch_one(pool)
                    .await?;

                let rows = sqlx::query(
                    r#"
                        SELECT id, title, description, status, created_at, updated_at
                        FROM cards
                        ORDER BY created_at DESC, id DESC
                        LIMIT ? OFFSET ?
                    "#,
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(pool)
                .await?;

                (total, rows)
            }
        };

        let cards = rows
            .iter()
            .map(card_from_row)
            .collect::<DbErrorResult<Vec<_>>>()?;

        Ok((cards, total))
    }

    /// Persist an already-patched entity. `id` and `created_at` never
    /// change after insertion.
    pub async fn update<'e, E>(executor: E, card: &Card) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id = card.id.to_string();
        let updated_at = card.updated_at.timestamp();

        sqlx::query(
            r#"
                UPDATE cards
                SET title = ?, description = ?, status = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(card.title.as_deref())
        .bind(card.description.as_str())
        .bind(card.status.as_str())
        .bind(updated_at)
        .bind(id)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Hard delete. Returns the number of rows removed; 0 means the id
    /// did not exist and the boundary maps that to not-found.
    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id_str = id.to_string();

        let result = sqlx::query("DELETE FROM cards WHERE id = ?")
            .bind(id_str)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    /// Whether any card exists at all; the seed binary skips seeding
    /// when this is true.
    pub async fn has_any<'e, E>(executor: E) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let exists: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM cards)")
            .fetch_one(executor)
            .await?;

        Ok(exists != 0)
    }
}

fn card_from_row(row: &SqliteRow) -> DbErrorResult<Card> {
    let id: String = row.try_get("id")?;
    let title: Option<String> = row.try_get("title")?;
    let description: String = row.try_get("description")?;
    let status: String = row.try_get("status")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Card {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in cards.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        title,
        description,
        status: CardStatus::from_str(&status).map_err(|e| DbError::Initialization {
            message: format!("Invalid CardStatus in cards.status: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in cards.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in cards.updated_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
