use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Errors raised while loading configuration at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub uri: String,
    pub name: String,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub max_request_size_bytes: usize,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub api_key: String,
    pub enable_cors: bool,
}

// Connection strings and the shared secret carry credentials; keep them out of debug logs
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("uri", &"<redacted>")
            .field("name", &self.name)
            .field("connection_timeout", &self.connection_timeout)
            .finish()
    }
}

impl std::fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("api_key", &"<redacted>")
            .field("enable_cors", &self.enable_cors)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// `MONGO_URI` and `API_KEY` are required; everything else falls back to
    /// the defaults of the selected `APP_ENV`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENV").as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            Some("staging") | Some("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        let uri = required(&lookup, "MONGO_URI")?;
        let api_key = required(&lookup, "API_KEY")?;

        let config = match environment {
            Environment::Production => Self::production(uri, api_key),
            Environment::Staging => Self::staging(uri, api_key),
            Environment::Development => Self::development(uri, api_key),
        };

        config.with_env_overrides(&lookup)
    }

    fn with_env_overrides<F>(mut self, lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Database overrides
        if let Some(v) = lookup("MONGO_DB") {
            if !v.trim().is_empty() {
                self.database.name = v.trim().to_string();
            }
        }
        if let Some(v) = lookup("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = parse("DATABASE_CONNECTION_TIMEOUT", v)?;
        }

        // API overrides
        if let Some(v) = lookup("HOST") {
            self.api.host = v;
        }
        if let Some(v) = lookup("PORT") {
            self.api.port = parse("PORT", v)?;
        }
        if let Some(v) = lookup("API_MAX_REQUEST_SIZE_BYTES") {
            self.api.max_request_size_bytes = parse("API_MAX_REQUEST_SIZE_BYTES", v)?;
        }

        // Security overrides
        if let Some(v) = lookup("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = parse("SECURITY_ENABLE_CORS", v)?;
        }

        Ok(self)
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }

    fn development(uri: String, api_key: String) -> Self {
        Self {
            environment: Environment::Development,
            database: DatabaseConfig {
                uri,
                name: DEFAULT_DATABASE_NAME.to_string(),
                connection_timeout: 30,
            },
            api: ApiConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                max_request_size_bytes: 1024 * 1024, // 1MB
            },
            security: SecurityConfig {
                api_key,
                enable_cors: true,
            },
        }
    }

    fn staging(uri: String, api_key: String) -> Self {
        Self {
            environment: Environment::Staging,
            database: DatabaseConfig {
                uri,
                name: DEFAULT_DATABASE_NAME.to_string(),
                connection_timeout: 10,
            },
            api: ApiConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                max_request_size_bytes: 256 * 1024,
            },
            security: SecurityConfig {
                api_key,
                enable_cors: true,
            },
        }
    }

    fn production(uri: String, api_key: String) -> Self {
        Self {
            environment: Environment::Production,
            database: DatabaseConfig {
                uri,
                name: DEFAULT_DATABASE_NAME.to_string(),
                connection_timeout: 5,
            },
            api: ApiConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                max_request_size_bytes: 64 * 1024,
            },
            security: SecurityConfig {
                api_key,
                enable_cors: false,
            },
        }
    }
}

const DEFAULT_DATABASE_NAME: &str = "nbfc_updates";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}
