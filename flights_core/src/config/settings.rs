use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
    pub search: SearchConfig,
    pub reference: ReferenceConfig,
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Backing store settings. Read at startup and held by the store handle;
/// no endpoint queries it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: String,
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub min_results: usize,
    pub max_results: usize,
    pub booking_window_days: i64,
    pub booking_base_url: String,
    pub booking_marker: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceConfig {
    pub data_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::default(),
            search: SearchConfig::default(),
            reference: ReferenceConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            name: "yyzflights_db".to_string(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl CorsConfig {
    pub fn is_permissive(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: "pretty".to_string(),
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_results: 3,
            max_results: 8,
            booking_window_days: 365,
            booking_base_url: "https://www.aviasales.com/search/".to_string(),
            booking_marker: "yyzflights".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // Legacy deployment variables for the backing store.
        builder = builder
            .set_override_option("database.url", std::env::var("MONGO_URL").ok())?
            .set_override_option("database.name", std::env::var("DB_NAME").ok())?;

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.database.url.is_empty() {
            return Err(ConfigError::Message(
                "Database URL cannot be empty".to_string(),
            ));
        }

        if self.database.name.is_empty() {
            return Err(ConfigError::Message(
                "Database name cannot be empty".to_string(),
            ));
        }

        if self.search.min_results == 0 {
            return Err(ConfigError::Message(
                "Search min results must be greater than 0".to_string(),
            ));
        }

        if self.search.min_results > self.search.max_results {
            return Err(ConfigError::Message(
                "Search min results cannot exceed max results".to_string(),
            ));
        }

        if self.search.booking_window_days <= 0 {
            return Err(ConfigError::Message(
                "Booking window must be at least one day".to_string(),
            ));
        }

        if self.search.booking_base_url.is_empty() {
            return Err(ConfigError::Message(
                "Booking base URL cannot be empty".to_string(),
            ));
        }

        if !matches!(self.logging.format.to_ascii_lowercase().as_str(), "pretty" | "json") {
            return Err(ConfigError::Message(format!(
                "Unknown log format '{}', expected 'pretty' or 'json'",
                self.logging.format
            )));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8001);
        assert_eq!(config.database.url, "mongodb://localhost:27017");
        assert_eq!(config.database.name, "yyzflights_db");
        assert_eq!(config.search.min_results, 3);
        assert_eq!(config.search.max_results, 8);
        assert!(config.cors.is_permissive());
        assert!(config.reference.data_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();

        config.server.port = 0;
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.database.name = String::new();
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.search.min_results = 9;
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.search.min_results = 0;
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.search.booking_window_days = 0;
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.logging.format = "JSON".to_string();
        assert!(config.validate().is_ok());
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8001");

        let mut config = AppConfig::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 8080;
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_cors_origins() {
        let mut cors = CorsConfig::default();
        assert!(cors.is_permissive());

        cors.allowed_origins = vec!["https://yyzflights.example".to_string()];
        assert!(!cors.is_permissive());
    }

    #[test]
    fn test_config_loading() {
        let config = AppConfig::load().expect("Should load default configuration");

        assert!(config.validate().is_ok());
        assert!(!config.server.host.is_empty());
        assert!(config.server.port > 0);
        assert!(!config.database.url.is_empty());
        assert!(config.search.min_results <= config.search.max_results);
    }
}
