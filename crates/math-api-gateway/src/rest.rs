//! REST endpoints: `POST /api/v1/{operation}`.
//!
//! Success is 200 with the operation response. Failures carry an
//! `ErrorResponse` with the status chosen by the error category.

use crate::middleware::RequestTimer;
use crate::service::AppState;
use axum::{
    extract::{rejection::BytesRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use math_operations::{CalcError, ErrorCategory, ErrorResponse, Operation, OperationRequest};
use serde_json::Value;
use tracing::debug;

/// Handle `POST /api/v1/{operation}`
pub(crate) async fn handle_operation(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let timer = RequestTimer::new(state.metrics.clone());

    let operation = match name.parse::<Operation>() {
        Ok(op) => op,
        Err(unknown) => {
            timer.finish(None, false);
            return calc_error_response(&CalcError::from(unknown));
        }
    };

    let payload = match body.map_err(BodyError::Read).and_then(|bytes| parse_json(&bytes)) {
        Ok(payload) => payload,
        Err(e) => {
            debug!(operation = operation.as_str(), error = %e, "Rejected request body");
            timer.finish(Some(operation), false);
            return e.into_response();
        }
    };

    let result = OperationRequest::parse(operation, &payload)
        .map_err(CalcError::from)
        .and_then(|request| state.calculator.execute(request).map_err(CalcError::from));
    timer.finish(Some(operation), result.is_ok());

    match result {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => calc_error_response(&e),
    }
}

fn parse_json(bytes: &[u8]) -> Result<Value, BodyError> {
    serde_json::from_slice(bytes).map_err(BodyError::Json)
}

fn calc_error_response(err: &CalcError) -> Response {
    (status_for(err.category()), Json(ErrorResponse::from(err))).into_response()
}

/// Map a category to its HTTP status.
pub fn status_for(category: ErrorCategory) -> StatusCode {
    StatusCode::from_u16(category.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Body could not be turned into a JSON value.
#[derive(Debug, thiserror::Error)]
enum BodyError {
    #[error("{0}")]
    Read(BytesRejection),

    #[error("invalid JSON body: {0}")]
    Json(serde_json::Error),
}

impl IntoResponse for BodyError {
    fn into_response(self) -> Response {
        let status = match &self {
            BodyError::Read(rejection) => rejection.status(),
            BodyError::Json(_) => StatusCode::BAD_REQUEST,
        };
        let body = ErrorResponse::new(ErrorCategory::BadRequest.label(), self.to_string());
        (status, Json(body)).into_response()
    }
}
