use serde::Deserialize;

/// Largest allowed page size
pub const MAX_PAGE_SIZE: u32 = 100;

fn default_page() -> u32 {
    1
}

fn default_size() -> u32 {
    10
}

/// Query parameters for listing cards
#[derive(Debug, Deserialize)]
pub struct ListCardsQuery {
    /// Optional equality filter on status
    #[serde(default)]
    pub status: Option<String>,

    /// 1-indexed page number
    #[serde(default = "default_page")]
    pub page: u32,

    /// Page size, 1..=MAX_PAGE_SIZE
    #[serde(default = "default_size")]
    pub size: u32,
}
