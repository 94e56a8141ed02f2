//! # Math Telemetry
//!
//! Logging setup for the Mathematical API processes.
//!
//! ## Components
//!
//! - **Logs**: `tracing-subscriber` fmt layer, pretty in development and JSON
//!   in containers, filtered by an `EnvFilter`
//! - **Traces** (feature `otlp`): OpenTelemetry spans exported over OTLP/gRPC
//!
//! ## Usage
//!
//! ```rust,ignore
//! use math_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! let _guard = init_telemetry(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LOG_LEVEL` / `RUST_LOG` | `info` | Filter directives |
//! | `LOG_JSON` | `true` in containers | JSON log lines |
//! | `OTEL_SERVICE_NAME` | `mathematical-api` | Service name in logs and traces |
//! | `OTEL_EXPORTER_OTLP_ENDPOINT` | `http://localhost:4317` | Collector endpoint (`otlp` only) |
//! | `APP_ENV` | `development` | Deployment environment attribute |

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::TracingGuard;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    Filter(String),

    #[error("failed to install subscriber: {0}")]
    SubscriberInit(String),

    #[error("failed to initialize OpenTelemetry tracer: {0}")]
    TracerInit(String),
}

/// Install the global subscriber.
///
/// Returns a guard that must be held for the lifetime of the process; dropping
/// it flushes any pending spans.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let tracing = tracing_setup::init_tracing(config)?;
    Ok(TelemetryGuard { _tracing: tracing })
}

/// Guard that keeps telemetry active. Drop to flush and shutdown.
pub struct TelemetryGuard {
    _tracing: TracingGuard,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!("Shutting down telemetry");
    }
}
