//! API Gateway error types with JSON-RPC 2.0 error codes.
//!
//! Domain failures use codes in the server range (-32020..-32022) and carry
//! their category label in `data.error`, so RPC clients see the same
//! classification as REST clients.

use math_operations::{CalcError, ErrorCategory, OperationError, SchemaError};
use serde::Serialize;
use std::fmt;

/// Standard JSON-RPC 2.0 error codes
pub mod codes {
    // JSON-RPC 2.0 standard errors (-32700 to -32600)
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    // Server errors (-32000 to -32099)
    pub const LIMIT_EXCEEDED: i32 = -32005;

    // Calculator errors
    pub const DIVISION_BY_ZERO: i32 = -32020;
    pub const NEGATIVE_SQUARE_ROOT: i32 = -32021;
    pub const INVALID_OPERATION: i32 = -32022;
}

/// API Gateway error with JSON-RPC code
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// JSON-RPC error code
    pub code: i32,
    /// Error message
    pub message: String,
    /// Optional additional data
    pub data: Option<serde_json::Value>,
}

impl ApiError {
    /// Create a new API error
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Create error with additional data
    pub fn with_data(code: i32, message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Parse error - invalid JSON
    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(
            codes::PARSE_ERROR,
            format!("Parse error: {}", details.into()),
        )
    }

    /// Invalid request - not a valid JSON-RPC request
    pub fn invalid_request(details: impl Into<String>) -> Self {
        Self::new(
            codes::INVALID_REQUEST,
            format!("Invalid request: {}", details.into()),
        )
    }

    /// Method not found
    pub fn method_not_found(method: &str) -> Self {
        Self::new(
            codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", method),
        )
    }

    /// Invalid parameters
    pub fn invalid_params(details: impl Into<String>) -> Self {
        Self::with_data(
            codes::INVALID_PARAMS,
            format!("Invalid params: {}", details.into()),
            serde_json::json!({ "error": ErrorCategory::BadRequest.label() }),
        )
    }

    /// Internal error. The detail is logged by the caller, never sent.
    pub fn internal() -> Self {
        Self::with_data(
            codes::INTERNAL_ERROR,
            "An unexpected error occurred",
            serde_json::json!({ "error": ErrorCategory::Internal.label() }),
        )
    }

    /// Limit exceeded (body size, batch size)
    pub fn limit_exceeded(limit: impl Into<String>) -> Self {
        Self::new(
            codes::LIMIT_EXCEEDED,
            format!("Limit exceeded: {}", limit.into()),
        )
    }

    /// Precondition violation or math fault raised by an operation.
    /// A non-finite result has no client-facing detail.
    pub fn operation(err: &OperationError) -> Self {
        let code = match err {
            OperationError::DivisionByZero => codes::DIVISION_BY_ZERO,
            OperationError::NegativeSquareRoot => codes::NEGATIVE_SQUARE_ROOT,
            OperationError::InvalidOperation(_) => codes::INVALID_OPERATION,
            OperationError::NonFiniteResult => return Self::internal(),
        };
        Self::with_data(
            code,
            err.to_string(),
            serde_json::json!({ "error": err.category().label() }),
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl Serialize for ApiError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ApiError", 3)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("message", &self.message)?;
        if let Some(ref data) = self.data {
            state.serialize_field("data", data)?;
        }
        state.end()
    }
}

impl From<SchemaError> for ApiError {
    fn from(e: SchemaError) -> Self {
        ApiError::invalid_params(e.to_string())
    }
}

impl From<OperationError> for ApiError {
    fn from(e: OperationError) -> Self {
        ApiError::operation(&e)
    }
}

impl From<CalcError> for ApiError {
    fn from(e: CalcError) -> Self {
        match e {
            CalcError::UnknownOperation(unknown) => ApiError::method_not_found(&unknown.0),
            CalcError::Malformed(schema) => schema.into(),
            CalcError::Operation(op) => op.into(),
        }
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Gateway-level errors (not JSON-RPC, internal use)
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(#[source] std::io::Error),

    /// Server terminated with an I/O error
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    /// Server already started
    #[error("gateway already running")]
    AlreadyRunning,
}
