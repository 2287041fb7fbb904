use crate::{DEFAULT_APP_NAME, DEFAULT_APP_VERSION};

use serde::Deserialize;

/// Application identity reported by the /version endpoint and logs
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: String::from(DEFAULT_APP_NAME),
            version: String::from(DEFAULT_APP_VERSION),
        }
    }
}
