//! Idempotent bootstrap: run migrations, then insert a small fixed set
//! of sample cards only if the table is currently empty.

use kanban_server::logger;

use kanban_core::{Card, CardStatus};
use kanban_db::CardRepository;

use std::error::Error;
use std::str::FromStr;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

const SAMPLE_CARDS: [(&str, &str, CardStatus); 3] = [
    (
        "Sprint planning",
        "Prepare the next sprint backlog",
        CardStatus::Todo,
    ),
    (
        "API integration",
        "Connect frontend board to backend",
        CardStatus::Doing,
    ),
    (
        "Design review",
        "Review responsive layout",
        CardStatus::Done,
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    let config = kanban_config::Config::load()?;
    config.validate()?;

    let log_file = logger::log_file_path(&config.logging)?;
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    let options = SqliteConnectOptions::from_str(&config.database.url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    // Seeding always brings the schema to head first
    kanban_db::run_migrations_with_retry(
        &pool,
        kanban_db::DEFAULT_MIGRATION_ATTEMPTS,
        kanban_db::DEFAULT_MIGRATION_RETRY_DELAY,
    )
    .await?;

    if CardRepository::has_any(&pool).await? {
        info!("Seed skipped, cards already exist");
        return Ok(());
    }

    for (title, description, status) in SAMPLE_CARDS {
        let card = Card::new(description.to_string(), Some(title.to_string()), status);
        CardRepository::create(&pool, &card).await?;
        info!("Seeded card {} ({})", card.id, title);
    }

    info!("Seed completed");

    Ok(())
}
