//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Converter defaults.
    #[serde(default)]
    pub converter: ConverterConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Currency pair a fresh converter form starts with.
///
/// Codes are kept as strings here and validated against the supported set
/// when the server starts.
#[derive(Debug, Clone, Deserialize)]
pub struct ConverterConfig {
    /// Initial source currency.
    #[serde(default = "default_from")]
    pub default_from: String,
    /// Initial target currency.
    #[serde(default = "default_to")]
    pub default_to: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            default_from: default_from(),
            default_to: default_to(),
        }
    }
}

fn default_from() -> String {
    "USD".to_string()
}

fn default_to() -> String {
    "EUR".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CONVERTLY").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Address the server binds to, as `host:port`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
