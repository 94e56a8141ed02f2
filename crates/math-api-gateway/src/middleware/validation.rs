//! JSON-RPC request validation middleware.
//!
//! Validates request size, batch limits, and JSON-RPC structure before the
//! body reaches the RPC handler. Installed on `/rpc` only; REST bodies are
//! validated by the operand schema instead.

use crate::domain::config::LimitsConfig;
use crate::domain::error::{codes, ApiError};
use axum::{
    body::Body,
    http::{header, HeaderValue, Request, StatusCode},
    response::Response,
};
use bytes::Bytes;
use serde_json::{Map, Value};
use std::sync::Arc;
use tower::{Layer, Service};
use tracing::warn;

/// Max length of a method name or string id.
pub const MAX_IDENTIFIER_LEN: usize = 256;

/// Validation layer configuration
#[derive(Clone)]
pub struct ValidationLayer {
    config: Arc<LimitsConfig>,
}

impl ValidationLayer {
    pub fn new(config: LimitsConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl<S> Layer<S> for ValidationLayer {
    type Service = ValidationService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ValidationService {
            inner,
            config: Arc::clone(&self.config),
        }
    }
}

/// Validation service
#[derive(Clone)]
pub struct ValidationService<S> {
    inner: S,
    config: Arc<LimitsConfig>,
}

impl<S> Service<Request<Body>> for ValidationService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let config = Arc::clone(&self.config);
        let mut inner = self.inner.clone();

        Box::pin(async move {
            // Fast path: trust an oversized content-length
            if let Some(len) = req
                .headers()
                .get(header::CONTENT_LENGTH)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<usize>().ok())
            {
                if len > config.max_request_size {
                    warn!(
                        size = len,
                        max = config.max_request_size,
                        "Request too large (from header)"
                    );
                    return Ok(error_response(ApiError::limit_exceeded(format!(
                        "Request size {} exceeds limit {}",
                        len, config.max_request_size
                    ))));
                }
            }

            if req.method() != axum::http::Method::POST {
                return inner.call(req).await;
            }

            let (parts, body) = req.into_parts();

            let body_bytes = match read_body_with_limit(body, config.max_request_size).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!(error = %e, "Failed to read request body");
                    return Ok(error_response(e));
                }
            };

            if let Err(e) = validate_jsonrpc(&body_bytes, &config) {
                warn!(error = %e, "Invalid JSON-RPC request");
                return Ok(error_response(e));
            }

            let req = Request::from_parts(parts, Body::from(body_bytes));
            inner.call(req).await
        })
    }
}

/// Read body with size limit
async fn read_body_with_limit(body: Body, max_size: usize) -> Result<Bytes, ApiError> {
    axum::body::to_bytes(body, max_size).await.map_err(|_| {
        ApiError::limit_exceeded(format!("Request body exceeds limit {}", max_size))
    })
}

/// Validate JSON-RPC request structure.
pub fn validate_jsonrpc(body: &[u8], config: &LimitsConfig) -> Result<(), ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| ApiError::parse_error(e.to_string()))?;

    match value {
        Value::Object(obj) => validate_single_request(&obj),
        Value::Array(arr) => {
            if arr.is_empty() {
                return Err(ApiError::invalid_request("Empty batch request"));
            }

            if arr.len() > config.max_batch_size {
                return Err(ApiError::limit_exceeded(format!(
                    "Batch size {} exceeds limit {}",
                    arr.len(),
                    config.max_batch_size
                )));
            }

            for (idx, item) in arr.iter().enumerate() {
                let Value::Object(obj) = item else {
                    return Err(ApiError::invalid_request(format!(
                        "Batch item {} is not an object",
                        idx
                    )));
                };
                validate_single_request(obj).map_err(|e| {
                    ApiError::invalid_request(format!("Batch item {}: {}", idx, e.message))
                })?;
            }
            Ok(())
        }
        _ => Err(ApiError::invalid_request(
            "Request must be an object or array",
        )),
    }
}

/// Validate a single JSON-RPC request object
fn validate_single_request(obj: &Map<String, Value>) -> Result<(), ApiError> {
    match obj.get("jsonrpc") {
        Some(Value::String(v)) if v == "2.0" => {}
        Some(_) => return Err(ApiError::invalid_request("jsonrpc must be \"2.0\"")),
        None => return Err(ApiError::invalid_request("Missing jsonrpc field")),
    }

    match obj.get("method") {
        Some(Value::String(method)) if method.is_empty() => {
            return Err(ApiError::invalid_request("Method cannot be empty"));
        }
        Some(Value::String(method)) if method.len() > MAX_IDENTIFIER_LEN => {
            return Err(ApiError::invalid_request("Method name too long"));
        }
        Some(Value::String(_)) => {}
        Some(_) => return Err(ApiError::invalid_request("method must be a string")),
        None => return Err(ApiError::invalid_request("Missing method field")),
    }

    // null ids are rejected later, per request, so batches still get an answer
    if let Some(id) = obj.get("id") {
        if !matches!(id, Value::String(_) | Value::Number(_) | Value::Null) {
            return Err(ApiError::invalid_request(
                "id must be string, number, or null",
            ));
        }
    }

    if let Some(params) = obj.get("params") {
        if !matches!(params, Value::Array(_) | Value::Object(_)) {
            return Err(ApiError::invalid_request("params must be array or object"));
        }
    }

    Ok(())
}

/// Create error response
fn error_response(error: ApiError) -> Response {
    let status = match error.code {
        codes::LIMIT_EXCEEDED => StatusCode::PAYLOAD_TOO_LARGE,
        _ => StatusCode::BAD_REQUEST,
    };

    let body = serde_json::json!({
        "jsonrpc": "2.0",
        "error": error,
        "id": null
    });

    let mut response = Response::new(Body::from(serde_json::to_vec(&body).unwrap_or_default()));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    response
}
