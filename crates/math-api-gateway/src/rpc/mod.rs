//! JSON-RPC 2.0 endpoint (`POST /rpc`).
//!
//! Method names are the operation names; `params` is either an object with
//! named operands or a positional array. Batches are answered in order.

use crate::domain::error::{ApiError, ApiResult};
use crate::domain::methods::get_method_info;
use crate::middleware::{validation::MAX_IDENTIFIER_LEN, RequestTimer};
use crate::service::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use bytes::Bytes;
use math_operations::OperationRequest;
use serde_json::{json, Map, Value};
use tracing::{debug, error};

/// Handle JSON-RPC request
pub(crate) async fn handle_json_rpc(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let request: Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(error_envelope(None, ApiError::parse_error(e.to_string()))),
            );
        }
    };

    let response = match &request {
        Value::Array(requests) => Value::Array(
            requests
                .iter()
                .map(|req| process_single_request(&state, req))
                .collect(),
        ),
        single => process_single_request(&state, single),
    };

    (StatusCode::OK, Json(response))
}

/// Process a single JSON-RPC request
pub(crate) fn process_single_request(state: &AppState, request: &Value) -> Value {
    let timer = RequestTimer::new(state.metrics.clone());
    let id = request.get("id").cloned();
    let method = request.get("method").and_then(Value::as_str).unwrap_or("");
    let operation = get_method_info(method).map(|m| m.operation);

    if let Err(e) = validate_id(id.as_ref()) {
        debug!(method, code = e.code, "Rejected JSON-RPC id");
        timer.finish(operation, false);
        return error_envelope(None, e);
    }

    let result = route_method(state, method, request.get("params"));
    timer.finish(operation, result.is_ok());

    match result {
        Ok(value) => json!({
            "jsonrpc": "2.0",
            "id": id,
            "result": value
        }),
        Err(e) => {
            debug!(method, code = e.code, "JSON-RPC call failed");
            error_envelope(id, e)
        }
    }
}

/// Notifications are not supported: every request must carry a usable id.
fn validate_id(id: Option<&Value>) -> ApiResult<()> {
    match id {
        None | Some(Value::Null) => Err(ApiError::invalid_request(
            "missing or null id (notifications not supported)",
        )),
        Some(Value::String(s)) if s.is_empty() => {
            Err(ApiError::invalid_request("empty string id"))
        }
        Some(Value::String(s)) if s.len() > MAX_IDENTIFIER_LEN => Err(ApiError::invalid_request(
            format!("id string too long (max {} chars)", MAX_IDENTIFIER_LEN),
        )),
        Some(Value::String(_)) | Some(Value::Number(_)) => Ok(()),
        Some(_) => Err(ApiError::invalid_request("id must be string or number")),
    }
}

/// Route a method to the calculator.
fn route_method(state: &AppState, method: &str, params: Option<&Value>) -> ApiResult<Value> {
    let info = get_method_info(method).ok_or_else(|| ApiError::method_not_found(method))?;

    // Absent params reads as an empty object so the schema names the missing field
    let empty = Value::Object(Map::new());
    let request = OperationRequest::parse(info.operation, params.unwrap_or(&empty))?;
    let response = state.calculator.execute(request)?;

    serde_json::to_value(response).map_err(|e| {
        error!(method, error = %e, "Failed to serialize operation response");
        ApiError::internal()
    })
}

fn error_envelope(id: Option<Value>, error: ApiError) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": error
    })
}
