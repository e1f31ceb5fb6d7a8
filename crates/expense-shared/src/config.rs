//! Configuration management

use std::net::{IpAddr, SocketAddr};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_CORS_ORIGIN, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub cors_origin: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogSettings {
    /// Directory for rolling log files. Stdout only when unset.
    pub directory: Option<String>,
    pub file_prefix: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            directory: None,
            file_prefix: "expense-server".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads defaults, then `config/default`, `config/{APP_ENV}` and finally
    /// environment variables such as `DATABASE__URL`.
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        Self::from_config(config)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "expense-server")?
            .set_default("app.cors_origin", DEFAULT_CORS_ORIGIN)?
            .set_default("app.request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS as i64)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)
    }

    fn from_config(config: Config) -> Result<Self, AppError> {
        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.app.port == 0 {
            return Err(AppError::InvalidConfig("app.port must be non-zero".into()));
        }
        if self.database.url.trim().is_empty() {
            return Err(AppError::InvalidConfig("database.url is required".into()));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(AppError::InvalidConfig(
                "database.min_connections exceeds database.max_connections".into(),
            ));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> Result<SocketAddr, AppError> {
        let host: IpAddr = self
            .app
            .host
            .parse()
            .map_err(|_| AppError::InvalidConfig(format!("app.host is not an IP address: {}", self.app.host)))?;
        Ok(SocketAddr::from((host, self.app.port)))
    }
}
