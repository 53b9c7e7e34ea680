//! Configuration management for Bookshelf server

use config::{
    builder::{ConfigBuilder, DefaultState},
    Config, ConfigError, Environment, File,
};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// MongoDB connection target.
///
/// Both fields are optional here so that a missing value is reported by the
/// connection step with a precise message instead of a generic parse error.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct SecurityConfig {
    /// Server-side secret appended to passwords before hashing
    pub pepper: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Environment variables with prefix BOOKSHELF_, e.g. BOOKSHELF_SERVER__PORT
            .add_source(
                Environment::with_prefix("BOOKSHELF")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        with_legacy_overrides(builder, |key| env::var(key).ok())?
            .build()?
            .try_deserialize()
    }
}

/// Apply the historical `MONGO_HOST`, `MONGO_DATABASE` and `SECRETPEPPER`
/// variables on top of every other source.
fn with_legacy_overrides<F>(
    builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> Result<ConfigBuilder<DefaultState>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    builder
        .set_override_option("database.url", lookup("MONGO_HOST"))?
        .set_override_option("database.name", lookup("MONGO_DATABASE"))?
        .set_override_option("security.pepper", lookup("SECRETPEPPER"))
}

impl SecurityConfig {
    /// Whether a non-blank pepper is configured
    pub fn has_pepper(&self) -> bool {
        !self.pepper.trim().is_empty()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.database.url.is_none());
        assert!(config.database.name.is_none());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_legacy_variables_override_other_sources() {
        let builder = Config::builder()
            .set_default("database.url", "mongodb://from-file:27017")
            .unwrap()
            .set_default("database.name", "from-file")
            .unwrap();

        let config: AppConfig = with_legacy_overrides(builder, |key| match key {
            "MONGO_HOST" => Some("mongodb://db.internal:27017".to_string()),
            "SECRETPEPPER" => Some("s3cr3t".to_string()),
            _ => None,
        })
        .unwrap()
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap();

        assert_eq!(config.database.url.as_deref(), Some("mongodb://db.internal:27017"));
        // MONGO_DATABASE unset leaves the lower source in place
        assert_eq!(config.database.name.as_deref(), Some("from-file"));
        assert_eq!(config.security.pepper, "s3cr3t");
        assert!(config.security.has_pepper());
    }

    #[test]
    fn test_blank_pepper_is_not_a_pepper() {
        assert!(!SecurityConfig::default().has_pepper());
        assert!(!SecurityConfig { pepper: "  ".to_string() }.has_pepper());
    }

    #[test]
    fn test_partial_sections_fall_back_to_defaults() {
        let config: AppConfig = Config::builder()
            .set_override("database.url", "mongodb://localhost:27017")
            .unwrap()
            .set_override("security.pepper", "pepper")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.database.url.as_deref(), Some("mongodb://localhost:27017"));
        assert!(config.database.name.is_none());
        assert_eq!(config.security.pepper, "pepper");
        assert_eq!(config.server.port, 5000);
    }
}
