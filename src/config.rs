//! Configuration management for the Bookshelf server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    pub uri: String,
    pub db_name: String,
    pub book_collection: String,
    pub user_collection: String,
    /// Atlas-style SRV host used when the URI is assembled from
    /// DB_USER/DB_PASS credentials instead of given directly.
    pub cluster_host: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix BOOKSHELF_)
            .add_source(
                Environment::with_prefix("BOOKSHELF")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override database URI from MONGODB_URI env var if present
            .set_override_option("database.uri", env::var("MONGODB_URI").ok())?
            // Override listening port from PORT env var if present
            .set_override_option("server.port", env::var("PORT").ok())?
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // Assemble the URI from credentials when no full URI was given
        if env::var("MONGODB_URI").is_err() {
            if let (Ok(user), Ok(pass), Some(host)) = (
                env::var("DB_USER"),
                env::var("DB_PASS"),
                app_config.database.cluster_host.clone(),
            ) {
                app_config.database.uri = format!(
                    "mongodb+srv://{}:{}@{}/{}?retryWrites=true&w=majority",
                    user, pass, host, app_config.database.db_name
                );
            }
        }

        Ok(app_config)
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

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            db_name: "bookshelf".to_string(),
            book_collection: "books".to_string(),
            user_collection: "users".to_string(),
            cluster_host: None,
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
