//! Gateway configuration with validation.
//!
//! Defaults match the service's historical deployment: port 3000 on all
//! interfaces, wildcard CORS, 1 MiB request bodies.

use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Main gateway configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Service identity reported by `/health`
    pub app: AppConfig,
    /// HTTP server configuration
    pub http: HttpConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Request validation limits
    pub limits: LimitsConfig,
}

impl GatewayConfig {
    /// Load defaults and overlay process environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `APP_NAME`, `APP_ENV`, `APP_VERSION`: service identity
    /// - `HOST`, `PORT`: bind address
    /// - `ALLOWED_ORIGINS`: comma-separated CORS origins
    /// - `MAX_REQUEST_SIZE`, `MAX_BATCH_SIZE`: request limits
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup("APP_NAME") {
            config.app.name = name;
        }
        if let Some(environment) = lookup("APP_ENV") {
            config.app.environment = environment;
        }
        if let Some(version) = lookup("APP_VERSION") {
            config.app.version = version;
        }

        if let Some(host) = lookup("HOST") {
            config.http.host = parse_env("HOST", &host)?;
        }
        if let Some(port) = lookup("PORT") {
            config.http.port = parse_env("PORT", &port)?;
        }

        if let Some(origins) = lookup("ALLOWED_ORIGINS") {
            config.cors.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(size) = lookup("MAX_REQUEST_SIZE") {
            config.limits.max_request_size = parse_env("MAX_REQUEST_SIZE", &size)?;
        }
        if let Some(size) = lookup("MAX_BATCH_SIZE") {
            config.limits.max_batch_size = parse_env("MAX_BATCH_SIZE", &size)?;
        }

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        if self.limits.max_request_size == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_request_size cannot be 0".into(),
            ));
        }

        if self.limits.max_batch_size == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_batch_size cannot be 0".into(),
            ));
        }

        if self.cors.enabled && self.cors.allowed_origins.is_empty() {
            return Err(ConfigError::Invalid(
                "CORS is enabled but no origins are allowed".into(),
            ));
        }

        Ok(())
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }
}

fn parse_env<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        key,
        value: value.to_string(),
    })
}

/// Service identity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Service name
    pub name: String,
    /// Deployment environment (development, staging, production)
    pub environment: String,
    /// Reported version
    pub version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "mathematical-api".to_string(),
            environment: "development".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 3000)
    pub port: u16,
    /// Enable HTTP server
    pub enabled: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 3000,
            enabled: true,
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Enable CORS
    pub enabled: bool,
    /// Allowed origins ("*" for all)
    pub allowed_origins: Vec<String>,
    /// Allowed methods ("*" for all)
    pub allowed_methods: Vec<String>,
    /// Allowed headers ("*" for all)
    pub allowed_headers: Vec<String>,
    /// Max age for preflight cache
    pub max_age: u64,
    /// Allow credentials. Ignored for wildcard origins.
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec!["*".to_string()],
            allowed_headers: vec!["*".to_string()],
            max_age: 86400, // 24 hours
            allow_credentials: true,
        }
    }
}

/// Request limits configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Max request body size in bytes (default: 1MB)
    pub max_request_size: usize,
    /// Max number of requests in a JSON-RPC batch
    pub max_batch_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_request_size: 1024 * 1024, // 1MB
            max_batch_size: 100,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Port 0 is not a usable bind target
    #[error("invalid port: 0")]
    InvalidPort,
    /// Invalid size or count limit
    #[error("invalid limit: {0}")]
    InvalidLimit(String),
    /// Environment variable could not be parsed
    #[error("invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
    /// General configuration error
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
