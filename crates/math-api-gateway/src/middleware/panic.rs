//! Catch-all for handler panics.
//!
//! A panic anywhere below this layer becomes a 500 with the opaque
//! `Internal Server Error` body. The panic payload is logged, never returned.

use super::metrics::GatewayMetrics;
use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use math_operations::ErrorResponse;
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};
use tracing::error;

/// Converts a panic payload into the opaque 500 response.
#[derive(Clone)]
pub struct PanicHandler {
    metrics: Arc<GatewayMetrics>,
}

impl ResponseForPanic for PanicHandler {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response<Body> {
        let detail = if let Some(s) = err.downcast_ref::<String>() {
            s.as_str()
        } else if let Some(s) = err.downcast_ref::<&str>() {
            s
        } else {
            "unknown panic payload"
        };

        error!(panic = %detail, "Unhandled exception in request handler");
        self.metrics.record_panic();

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal()),
        )
            .into_response()
    }
}

/// Build the panic layer, counting caught panics in `metrics`.
pub fn catch_panic_layer(metrics: Arc<GatewayMetrics>) -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(PanicHandler { metrics })
}
