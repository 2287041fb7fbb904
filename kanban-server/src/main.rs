use kanban_server::{AppState, ServerError, build_router, cors_layer, logger};

use std::str::FromStr;
use std::time::Duration;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = kanban_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file = logger::log_file_path(&config.logging)?;
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting kanban-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let options = SqliteConnectOptions::from_str(&config.database.url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;

    info!("Database connection established");

    // Run migrations before accepting traffic; exhausting the retry
    // budget aborts startup
    if config.database.auto_migrate {
        info!("Running database migrations...");
        kanban_db::run_migrations_with_retry(
            &pool,
            kanban_db::DEFAULT_MIGRATION_ATTEMPTS,
            kanban_db::DEFAULT_MIGRATION_RETRY_DELAY,
        )
        .await?;
        info!("Migrations complete");
    }

    // Build router with CORS restricted to the configured origins
    let cors = cors_layer(&config.cors)?;
    let state = AppState {
        pool,
        app_name: config.app.name.clone(),
        app_version: config.app.version.clone(),
    };
    let app = build_router(state).layer(cors);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on Ctrl+C
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
        }
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
        }
    }
}
