use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_URL};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection string handed to sqlx verbatim
    pub url: String,
    /// Run outstanding schema migrations at startup
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_DATABASE_URL),
            auto_migrate: false,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.url.is_empty() {
            return Err(ConfigError::database("database.url must not be empty"));
        }

        if !self.url.starts_with("sqlite:") {
            return Err(ConfigError::database(format!(
                "database.url must be a sqlite connection string, got {}",
                self.url
            )));
        }

        Ok(())
    }

    /// Connection string for embedding into config formats that perform
    /// percent-style interpolation (INI and friends). Percent signs in
    /// credentials would otherwise be parsed as interpolation markers.
    /// The runtime connection string stays unescaped; use `url` for that.
    pub fn escaped_url(&self) -> String {
        self.url.replace('%', "%%")
    }
}
