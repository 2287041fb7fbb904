pub mod error;
pub mod migrator;
pub mod repositories;

pub use error::{DbError, Result};
pub use migrator::{
    DEFAULT_MIGRATION_ATTEMPTS, DEFAULT_MIGRATION_RETRY_DELAY, MIGRATOR, run_migrations,
    run_migrations_with_retry,
};
pub use repositories::card_repository::CardRepository;
