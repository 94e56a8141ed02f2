//! # Errors
//!
//! Three layers of failure, each with its own type:
//! - [`SchemaError`]: the payload is malformed; raised before any math runs
//! - [`OperationError`]: well-typed operands outside an operation's domain
//! - [`CalcError`]: what name-based dispatch returns, wrapping both
//!
//! [`ErrorCategory`] is the transport-neutral classification. Gateways map it
//! to status codes.

use thiserror::Error;

/// Failures raised by an operation after its operands were validated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OperationError {
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Square root of negative number is not allowed")]
    NegativeSquareRoot,

    /// The underlying math had no finite real result.
    #[error("{0}")]
    InvalidOperation(String),

    /// Overflow or a non-finite operand carried through to the result.
    #[error("result is not a finite number")]
    NonFiniteResult,
}

/// Payload failed structural or type validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("field `{0}` is required")]
    MissingField(&'static str),

    #[error("field `{field}` {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// The payload is not an object or positional array.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

/// Error returned by [`crate::dispatch`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error(transparent)]
    UnknownOperation(#[from] crate::domain::operation::UnknownOperation),

    #[error(transparent)]
    Malformed(#[from] SchemaError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Category label carried in the `error` field of an error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    BadRequest,
    NotFound,
    DivisionByZero,
    NegativeSquareRoot,
    InvalidOperation,
    Internal,
}

impl ErrorCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorCategory::BadRequest => "Bad Request",
            ErrorCategory::NotFound => "Not Found",
            ErrorCategory::DivisionByZero => "Division By Zero",
            ErrorCategory::NegativeSquareRoot => "Negative Square Root",
            ErrorCategory::InvalidOperation => "Invalid Operation",
            ErrorCategory::Internal => "Internal Server Error",
        }
    }

    /// HTTP status for the REST surface.
    ///
    /// Malformed input and precondition violations are both 422; a faulting
    /// computation is 400. A result that cannot be represented is 500.
    pub fn http_status(&self) -> u16 {
        match self {
            ErrorCategory::BadRequest => 422,
            ErrorCategory::NotFound => 404,
            ErrorCategory::DivisionByZero => 422,
            ErrorCategory::NegativeSquareRoot => 422,
            ErrorCategory::InvalidOperation => 400,
            ErrorCategory::Internal => 500,
        }
    }
}

impl OperationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OperationError::DivisionByZero => ErrorCategory::DivisionByZero,
            OperationError::NegativeSquareRoot => ErrorCategory::NegativeSquareRoot,
            OperationError::InvalidOperation(_) => ErrorCategory::InvalidOperation,
            OperationError::NonFiniteResult => ErrorCategory::Internal,
        }
    }
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::UnknownOperation(_) => ErrorCategory::NotFound,
            CalcError::Malformed(_) => ErrorCategory::BadRequest,
            CalcError::Operation(e) => e.category(),
        }
    }
}
