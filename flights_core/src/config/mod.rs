pub mod settings;

pub use settings::{
    AppConfig, CorsConfig, DatabaseConfig, GeneratorConfig, LoggingConfig, ReferenceConfig,
    SearchConfig, ServerConfig,
};
