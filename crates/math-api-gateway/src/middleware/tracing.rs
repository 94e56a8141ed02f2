//! Request tracing middleware.
//!
//! Wraps every request in an `api_request` span carrying the HTTP method,
//! path and `x-request-id`, then records the response status and latency.
//! With the `otlp` telemetry feature enabled these spans are exported.

use axum::{body::Body, http::Request, response::Response};
use std::task::{Context, Poll};
use std::time::Instant;
use tower::{Layer, Service};
use tracing::{debug, info_span, field, Instrument, Span};

/// Header carrying a caller-supplied correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tracing layer that creates spans for each request
#[derive(Clone, Default)]
pub struct TracingLayer;

impl TracingLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for TracingLayer {
    type Service = TracingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TracingService { inner }
    }
}

/// Tracing service
#[derive(Clone)]
pub struct TracingService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for TracingService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let mut inner = self.inner.clone();

        let span = request_span(&req);
        let started = Instant::now();

        Box::pin(
            async move {
                let result = inner.call(req).await;

                let span = Span::current();
                match &result {
                    Ok(response) => {
                        let status = response.status();
                        span.record("http.status_code", status.as_u16());
                        span.record(
                            "otel.status_code",
                            if status.is_server_error() { "ERROR" } else { "OK" },
                        );
                        debug!(
                            status = status.as_u16(),
                            latency_ms = started.elapsed().as_millis() as u64,
                            "request finished"
                        );
                    }
                    Err(_) => {
                        span.record("otel.status_code", "ERROR");
                    }
                }

                result
            }
            .instrument(span),
        )
    }
}

/// Build the request span, linking a W3C `traceparent` when present.
fn request_span<B>(req: &Request<B>) -> Span {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    let span = info_span!(
        "api_request",
        http.method = %req.method(),
        http.target = %req.uri().path(),
        request_id = %request_id,
        http.status_code = field::Empty,
        otel.kind = "server",
        otel.status_code = field::Empty,
    );

    if let Some(parent) = extract_trace_context(req) {
        span.follows_from(parent);
    }

    span
}

/// Extract trace context from request headers (W3C Trace Context)
fn extract_trace_context<B>(req: &Request<B>) -> Option<Span> {
    let traceparent = req.headers().get("traceparent")?.to_str().ok()?;

    // version-trace_id-parent_id-trace_flags
    let parts: Vec<&str> = traceparent.split('-').collect();
    if parts.len() != 4 || parts[1].len() != 32 || parts[2].len() != 16 {
        return None;
    }

    Some(info_span!(
        "parent_trace",
        trace_id = parts[1],
        parent_span_id = parts[2]
    ))
}
