//! Schema migration bootstrap.
//!
//! Migrations are embedded at compile time and applied in a fixed,
//! linear, versioned order. Transient connection failures during
//! startup are retried a bounded number of times with a fixed delay;
//! exhausting the budget aborts startup so the service never serves
//! traffic against an un-migrated schema.

use crate::{DbError, error::Result as DbErrorResult};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::{info, warn};
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub const DEFAULT_MIGRATION_ATTEMPTS: u32 = 5;
pub const DEFAULT_MIGRATION_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Apply all outstanding migrations once, no retry
pub async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
    MIGRATOR.run(pool).await.map_err(|e| DbError::Migration {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Apply migrations, retrying transient failures.
///
/// Fixed linear delay, no jitter. On the final failed attempt the
/// error propagates to the caller, which aborts startup.
pub async fn run_migrations_with_retry(
    pool: &SqlitePool,
    max_attempts: u32,
    retry_delay: Duration,
) -> DbErrorResult<()> {
    let max_attempts = max_attempts.max(1);

    for attempt in 1..=max_attempts {
        match run_migrations(pool).await {
            Ok(()) => {
                if attempt > 1 {
                    info!("Migrations applied on attempt {}/{}", attempt, max_attempts);
                }
                return Ok(());
            }
            Err(e) if attempt < max_attempts => {
                warn!(
                    "Migration attempt {}/{} failed, retrying in {:?}: {}",
                    attempt, max_attempts, retry_delay, e
                );
                tokio::time::sleep(retry_delay).await;
            }
            Err(e) => return Err(e),
        }
    }

    unreachable!("loop always returns within max_attempts iterations")
}
