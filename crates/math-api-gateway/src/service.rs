//! API Gateway service - main entry point.
//!
//! Serves the REST routes, the JSON-RPC endpoint and the health, root and
//! metrics endpoints from a single HTTP listener.

use crate::domain::config::{AppConfig, GatewayConfig};
use crate::domain::error::GatewayError;
use crate::domain::methods::all_methods;
use crate::middleware::{
    catch_panic_layer, create_cors_layer, GatewayMetrics, TracingLayer, ValidationLayer,
};
use crate::{rest, rpc};
use axum::{
    extract::{DefaultBodyLimit, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use math_operations::CalculatorApi;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;
use tower::ServiceBuilder;
use tracing::info;

/// API Gateway service state
pub struct ApiGatewayService {
    config: GatewayConfig,
    calculator: Arc<dyn CalculatorApi>,
    metrics: Arc<GatewayMetrics>,
    shutdown: Arc<Notify>,
    running: AtomicBool,
}

/// Cloneable trigger for graceful shutdown.
#[derive(Clone)]
pub struct ShutdownHandle(Arc<Notify>);

impl ShutdownHandle {
    /// Ask the server to stop accepting connections and drain.
    ///
    /// A signal sent before the server starts is kept, so `start` returns
    /// as soon as it has bound.
    pub fn shutdown(&self) {
        self.0.notify_one();
    }
}

impl ApiGatewayService {
    /// Create a new API Gateway service
    pub fn new(
        config: GatewayConfig,
        calculator: Arc<dyn CalculatorApi>,
    ) -> Result<Self, GatewayError> {
        config.validate()?;

        Ok(Self {
            config,
            calculator,
            metrics: Arc::new(GatewayMetrics::new()),
            shutdown: Arc::new(Notify::new()),
            running: AtomicBool::new(false),
        })
    }

    /// Bind the HTTP listener and serve until a shutdown is signalled.
    pub async fn start(&self) -> Result<(), GatewayError> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(GatewayError::AlreadyRunning);
        }

        let result = self.serve().await;
        self.running.store(false, Ordering::SeqCst);
        result
    }

    async fn serve(&self) -> Result<(), GatewayError> {
        if !self.config.http.enabled {
            info!("HTTP server disabled; nothing to serve");
            return Ok(());
        }

        let addr = self.config.http_addr();
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(GatewayError::Bind)?;

        info!(
            addr = %addr,
            service = %self.config.app.name,
            version = %self.config.app.version,
            environment = %self.config.app.environment,
            "Starting API Gateway"
        );

        let shutdown = Arc::clone(&self.shutdown);
        axum::serve(listener, self.router())
            .with_graceful_shutdown(async move {
                shutdown.notified().await;
                info!("Received shutdown signal");
            })
            .await
            .map_err(GatewayError::Serve)?;

        info!(service = %self.config.app.name, "API Gateway stopped");
        Ok(())
    }

    /// Trigger graceful shutdown
    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }

    /// Handle that can stop the server from another task.
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle(Arc::clone(&self.shutdown))
    }

    /// Get metrics
    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Get configuration
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Build the HTTP router with the full middleware stack.
    pub fn router(&self) -> Router {
        let state = AppState::new(
            Arc::clone(&self.calculator),
            Arc::clone(&self.metrics),
            self.config.app.clone(),
        );

        let rpc = Router::new()
            .route("/rpc", post(rpc::handle_json_rpc))
            .route_layer(ValidationLayer::new(self.config.limits.clone()));

        // Outermost first
        let middleware = ServiceBuilder::new()
            .layer(catch_panic_layer(Arc::clone(&self.metrics)))
            .layer(create_cors_layer(&self.config.cors))
            .layer(TracingLayer::new());

        Router::new()
            .route("/", get(root))
            .route("/health", get(health_check))
            .route("/metrics", get(metrics))
            .route("/api/v1/:operation", post(rest::handle_operation))
            .merge(rpc)
            .layer(DefaultBodyLimit::max(self.config.limits.max_request_size))
            .layer(middleware)
            .with_state(state)
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) calculator: Arc<dyn CalculatorApi>,
    pub(crate) metrics: Arc<GatewayMetrics>,
    pub(crate) app: Arc<AppConfig>,
}

impl AppState {
    pub(crate) fn new(
        calculator: Arc<dyn CalculatorApi>,
        metrics: Arc<GatewayMetrics>,
        app: AppConfig,
    ) -> Self {
        Self {
            calculator,
            metrics,
            app: Arc::new(app),
        }
    }
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": state.app.name,
        "version": state.app.version,
        "environment": state.app.environment
    }))
}

/// API information, with each operation's parameters in positional order.
async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Mathematical API v1",
        "operations": all_methods(),
        "rpc": "/rpc",
        "health": "/health"
    }))
}

async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics.to_json())
}
