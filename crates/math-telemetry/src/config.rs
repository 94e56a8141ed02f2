//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for logging and tracing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name for logs and traces
    pub service_name: String,

    /// Filter directives (`info`, `math_api_gateway=debug,info`, ...)
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format
    pub json_logs: bool,

    /// OTLP collector endpoint; only used with the `otlp` feature
    pub otlp_endpoint: String,

    /// Deployment environment (development, staging, production)
    pub environment: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "mathematical-api".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            otlp_endpoint: "http://localhost:4317".to_string(),
            environment: "development".to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `LOG_LEVEL` or `RUST_LOG`: Filter directives (default: info)
    /// - `LOG_JSON`: JSON output (default: true when running in a container)
    /// - `OTEL_SERVICE_NAME`: Service name (default: mathematical-api)
    /// - `OTEL_EXPORTER_OTLP_ENDPOINT`: Collector endpoint (default: http://localhost:4317)
    /// - `APP_ENV`: Deployment environment (default: development)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let is_container =
            lookup("KUBERNETES_SERVICE_HOST").is_some() || lookup("DOCKER_CONTAINER").is_some();

        Self {
            service_name: lookup("OTEL_SERVICE_NAME").unwrap_or(defaults.service_name),

            // The filter grammar is lowercase; accept `INFO` style levels too.
            log_level: lookup("LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .map(|v| v.to_lowercase())
                .unwrap_or(defaults.log_level),

            json_logs: lookup("LOG_JSON")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(is_container),

            otlp_endpoint: lookup("OTEL_EXPORTER_OTLP_ENDPOINT").unwrap_or(defaults.otlp_endpoint),

            environment: lookup("APP_ENV").unwrap_or(defaults.environment),
        }
    }
}
