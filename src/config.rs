//! Configuration management for Booky server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Which `CatalogStore` implementation backs the API
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Mongodb,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    pub backend: StoreBackend,
    pub url: String,
    pub name: String,
    /// Insert the fixture dataset when the books collection is empty
    pub seed_fixtures: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Environment variables with prefix BOOKY_, e.g. BOOKY_SERVER__PORT
            .add_source(
                Environment::with_prefix("BOOKY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            // The connection string historically lives in MONGO_URL
            .set_override_option("database.url", env::var("MONGO_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Mongodb,
            url: "mongodb://localhost:27017".to_string(),
            name: "booky".to_string(),
            seed_fixtures: true,
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
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.backend, StoreBackend::Mongodb);
        assert_eq!(config.database.name, "booky");
        assert!(config.database.seed_fixtures);
    }

    #[test]
    fn test_overrides_without_server_section() {
        let config: AppConfig = Config::builder()
            .set_override("database.backend", "memory")
            .unwrap()
            .set_override("database.url", "mongodb://db:27017")
            .unwrap()
            .set_override("database.name", "books")
            .unwrap()
            .set_override("database.seed_fixtures", false)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.database.backend, StoreBackend::Memory);
        assert_eq!(config.database.url, "mongodb://db:27017");
        assert!(!config.database.seed_fixtures);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_connection_string_only() {
        let config: AppConfig = Config::builder()
            .add_source(File::with_name("config/does-not-exist").required(false))
            .set_override_option("database.url", Some("mongodb://mongo:27017"))
            .unwrap()
            .set_override("server.port", 8081)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.database.url, "mongodb://mongo:27017");
        assert_eq!(config.database.backend, StoreBackend::Mongodb);
        assert_eq!(config.database.name, "booky");
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.level, "info");
    }
}
