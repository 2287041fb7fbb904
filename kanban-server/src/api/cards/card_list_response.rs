use crate::CardDto;

use serde::Serialize;

/// Paginated list envelope
#[derive(Debug, Serialize)]
pub struct CardListResponse {
    pub items: Vec<CardDto>,
    /// Rows matching the filter across all pages, not just this slice
    pub total: i64,
    pub page: u32,
    pub size: u32,
}
