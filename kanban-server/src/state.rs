use sqlx::SqlitePool;

/// Shared state cloned into every handler. One pooled connection is
/// checked out per request by sqlx and released on drop; no other
/// state is shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub app_name: String,
    pub app_version: String,
}
