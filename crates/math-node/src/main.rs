//! # Mathematical API Node
//!
//! Process entry point for the Mathematical API.
//!
//! ## Startup Sequence
//!
//! 1. Load telemetry configuration and install the subscriber
//! 2. Load and validate gateway configuration (from env)
//! 3. Serve REST and JSON-RPC on `HOST:PORT`
//! 4. On Ctrl+C / SIGTERM, drain connections and exit

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};

use math_api_gateway::{ApiGatewayService, GatewayConfig, ShutdownHandle};
use math_operations::CalculatorService;
use math_telemetry::{init_telemetry, TelemetryConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let telemetry = TelemetryConfig::from_env();
    let _guard = init_telemetry(&telemetry).context("Failed to initialize telemetry")?;

    let config = GatewayConfig::from_env().context("Failed to load gateway configuration")?;

    info!(
        service = %config.app.name,
        version = %config.app.version,
        environment = %config.app.environment,
        "Starting Mathematical API"
    );

    let service = ApiGatewayService::new(config, Arc::new(CalculatorService::new()))
        .context("Failed to create API gateway")?;

    tokio::spawn(shutdown_on_signal(service.shutdown_handle()));

    if let Err(e) = service.start().await {
        error!(error = %e, "API gateway terminated with an error");
        return Err(e).context("API gateway failed");
    }

    info!(service = %service.config().app.name, "Shutting down");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM, then stop the gateway.
async fn shutdown_on_signal(handle: ShutdownHandle) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }

    handle.shutdown();
}
