use crate::{ConfigError, ConfigErrorResult, DEFAULT_FRONTEND_ORIGIN};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Primary allowed origin (the frontend host)
    pub frontend_origin: String,
    /// Optional comma-separated extra origins
    pub additional_origins: Option<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            frontend_origin: String::from(DEFAULT_FRONTEND_ORIGIN),
            additional_origins: None,
        }
    }
}

impl CorsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.frontend_origin.is_empty() {
            return Err(ConfigError::cors("cors.frontend_origin must not be empty"));
        }

        Ok(())
    }

    /// Full allow-list: the frontend origin plus any extras, trimmed,
    /// empty entries dropped
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins = vec![self.frontend_origin.clone()];

        if let Some(ref extra) = self.additional_origins {
            origins.extend(
                extra
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from),
            );
        }

        origins
    }
}
