//! # Math Operations
//!
//! The stateless core of the Mathematical API: nine arithmetic and
//! trigonometric operations behind a validating schema layer.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure math, operand schemas, typed errors. No I/O.
//! - **Ports Layer** (`ports/`): The `CalculatorApi` inbound port
//! - **Service Layer** (`service.rs`): `CalculatorService` and name-based dispatch
//!
//! ```text
//!   operation name + JSON payload
//!              │
//!              ▼
//!   ┌─────────────────────┐   SchemaError (malformed input)
//!   │  OperationRequest   │ ─────────────────────────────────▶
//!   │  ::parse            │
//!   └──────────┬──────────┘
//!              │ typed operands
//!              ▼
//!   ┌─────────────────────┐   OperationError (precondition / fault)
//!   │  CalculatorApi      │ ─────────────────────────────────▶
//!   └──────────┬──────────┘
//!              │
//!              ▼
//!      OperationResponse
//! ```
//!
//! Nothing here knows about HTTP or JSON-RPC; the gateway maps
//! [`ErrorCategory`] to status codes.

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::entities::{
    BinaryOperands, BinaryOperationResponse, ErrorResponse, OperationRequest, OperationResponse,
    PowerOperands, PowerOperationResponse, UnaryOperand, UnaryOperationResponse,
};
pub use domain::errors::{CalcError, ErrorCategory, OperationError, SchemaError};
pub use domain::operation::{OperandKind, Operation, UnknownOperation};
pub use ports::inbound::CalculatorApi;
pub use service::{dispatch, CalculatorService};

/// Result of a single operation.
pub type OperationResult<T> = Result<T, OperationError>;
