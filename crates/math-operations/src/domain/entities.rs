//! # Request/Response Schema
//!
//! Operand and response value objects, plus the validation that turns an
//! untrusted JSON payload into typed operands.
//!
//! ## Accepted payloads
//!
//! - An object with the operation's named fields: `{"a": 10, "b": 5}`.
//!   Unknown fields are ignored.
//! - A positional array in field order: `[10, 5]`. Trailing extra elements
//!   are ignored.
//!
//! A field value may be a JSON number, a boolean (`true` is 1, `false` is 0)
//! or a string holding a decimal number. Strings such as `"inf"` and `"nan"`
//! parse to non-finite operands; the math decides what they produce.

use crate::domain::errors::{CalcError, ErrorCategory, SchemaError};
use crate::domain::operation::Operation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Operands for `add`, `subtract`, `multiply` and `divide`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinaryOperands {
    pub a: f64,
    pub b: f64,
}

/// Operands for `power`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerOperands {
    pub base: f64,
    pub exponent: f64,
}

/// Operand for `sqrt`, `sin`, `cos` and `tan`. Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnaryOperand {
    pub number: f64,
}

/// Field layout shared by the operand types.
trait OperandSchema: Sized {
    const FIELDS: &'static [&'static str];

    /// `values` has exactly `FIELDS.len()` entries, in field order.
    fn from_values(values: &[f64]) -> Self;

    fn parse(payload: &Value) -> Result<Self, SchemaError> {
        let values = match payload {
            Value::Object(map) => Self::FIELDS
                .iter()
                .copied()
                .map(|field| {
                    map.get(field)
                        .ok_or(SchemaError::MissingField(field))
                        .and_then(|value| coerce(field, value))
                })
                .collect::<Result<Vec<_>, _>>()?,
            Value::Array(items) => Self::FIELDS
                .iter()
                .copied()
                .enumerate()
                .map(|(index, field)| {
                    items
                        .get(index)
                        .ok_or(SchemaError::MissingField(field))
                        .and_then(|value| coerce(field, value))
                })
                .collect::<Result<Vec<_>, _>>()?,
            other => {
                return Err(SchemaError::InvalidPayload(format!(
                    "expected an object or array, got {}",
                    json_type(other)
                )))
            }
        };
        Ok(Self::from_values(&values))
    }
}

impl OperandSchema for BinaryOperands {
    const FIELDS: &'static [&'static str] = &["a", "b"];

    fn from_values(values: &[f64]) -> Self {
        Self {
            a: values[0],
            b: values[1],
        }
    }
}

impl OperandSchema for PowerOperands {
    const FIELDS: &'static [&'static str] = &["base", "exponent"];

    fn from_values(values: &[f64]) -> Self {
        Self {
            base: values[0],
            exponent: values[1],
        }
    }
}

impl OperandSchema for UnaryOperand {
    const FIELDS: &'static [&'static str] = &["number"];

    fn from_values(values: &[f64]) -> Self {
        Self { number: values[0] }
    }
}

/// Coerce a single field value to `f64`. Booleans count as 1 and 0.
fn coerce(field: &'static str, value: &Value) -> Result<f64, SchemaError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| SchemaError::InvalidField {
            field,
            reason: "is not representable as a 64-bit float".to_string(),
        }),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| SchemaError::InvalidField {
            field,
            reason: format!("must be a number, got string {:?}", s),
        }),
        other => Err(SchemaError::InvalidField {
            field,
            reason: format!("must be a number, got {}", json_type(other)),
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A validated request: the operation paired with operands of the right shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OperationRequest {
    Add(BinaryOperands),
    Subtract(BinaryOperands),
    Multiply(BinaryOperands),
    Divide(BinaryOperands),
    Power(PowerOperands),
    Sqrt(UnaryOperand),
    Sin(UnaryOperand),
    Cos(UnaryOperand),
    Tan(UnaryOperand),
}

impl OperationRequest {
    /// Validate `payload` against the schema of `operation`.
    pub fn parse(operation: Operation, payload: &Value) -> Result<Self, SchemaError> {
        Ok(match operation {
            Operation::Add => OperationRequest::Add(BinaryOperands::parse(payload)?),
            Operation::Subtract => OperationRequest::Subtract(BinaryOperands::parse(payload)?),
            Operation::Multiply => OperationRequest::Multiply(BinaryOperands::parse(payload)?),
            Operation::Divide => OperationRequest::Divide(BinaryOperands::parse(payload)?),
            Operation::Power => OperationRequest::Power(PowerOperands::parse(payload)?),
            Operation::Sqrt => OperationRequest::Sqrt(UnaryOperand::parse(payload)?),
            Operation::Sin => OperationRequest::Sin(UnaryOperand::parse(payload)?),
            Operation::Cos => OperationRequest::Cos(UnaryOperand::parse(payload)?),
            Operation::Tan => OperationRequest::Tan(UnaryOperand::parse(payload)?),
        })
    }

    /// Resolve `name` and validate `payload` in one step.
    pub fn from_name(name: &str, payload: &Value) -> Result<Self, CalcError> {
        let operation: Operation = name.parse()?;
        Ok(Self::parse(operation, payload)?)
    }

    pub fn operation(&self) -> Operation {
        match self {
            OperationRequest::Add(_) => Operation::Add,
            OperationRequest::Subtract(_) => Operation::Subtract,
            OperationRequest::Multiply(_) => Operation::Multiply,
            OperationRequest::Divide(_) => Operation::Divide,
            OperationRequest::Power(_) => Operation::Power,
            OperationRequest::Sqrt(_) => Operation::Sqrt,
            OperationRequest::Sin(_) => Operation::Sin,
            OperationRequest::Cos(_) => Operation::Cos,
            OperationRequest::Tan(_) => Operation::Tan,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryOperationResponse {
    pub operation: String,
    pub a: f64,
    pub b: f64,
    pub result: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerOperationResponse {
    pub operation: String,
    pub base: f64,
    pub exponent: f64,
    pub result: f64,
}

/// Unary responses echo the operand as `input`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryOperationResponse {
    pub operation: String,
    pub input: f64,
    pub result: f64,
}

impl BinaryOperationResponse {
    pub fn new(operation: Operation, operands: BinaryOperands, result: f64) -> Self {
        Self {
            operation: operation.as_str().to_string(),
            a: operands.a,
            b: operands.b,
            result,
        }
    }
}

impl PowerOperationResponse {
    pub fn new(operands: PowerOperands, result: f64) -> Self {
        Self {
            operation: Operation::Power.as_str().to_string(),
            base: operands.base,
            exponent: operands.exponent,
            result,
        }
    }
}

impl UnaryOperationResponse {
    pub fn new(operation: Operation, operand: UnaryOperand, result: f64) -> Self {
        Self {
            operation: operation.as_str().to_string(),
            input: operand.number,
            result,
        }
    }
}

/// Any successful response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OperationResponse {
    Binary(BinaryOperationResponse),
    Power(PowerOperationResponse),
    Unary(UnaryOperationResponse),
}

impl OperationResponse {
    pub fn operation(&self) -> &str {
        match self {
            OperationResponse::Binary(r) => &r.operation,
            OperationResponse::Power(r) => &r.operation,
            OperationResponse::Unary(r) => &r.operation,
        }
    }

    pub fn result(&self) -> f64 {
        match self {
            OperationResponse::Binary(r) => r.result,
            OperationResponse::Power(r) => r.result,
            OperationResponse::Unary(r) => r.result,
        }
    }
}

impl From<BinaryOperationResponse> for OperationResponse {
    fn from(r: BinaryOperationResponse) -> Self {
        OperationResponse::Binary(r)
    }
}

impl From<PowerOperationResponse> for OperationResponse {
    fn from(r: PowerOperationResponse) -> Self {
        OperationResponse::Power(r)
    }
}

impl From<UnaryOperationResponse> for OperationResponse {
    fn from(r: UnaryOperationResponse) -> Self {
        OperationResponse::Unary(r)
    }
}

/// Error body: a category label and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }

    /// Opaque body for unanticipated faults. Never carries detail.
    pub fn internal() -> Self {
        Self::new(
            ErrorCategory::Internal.label(),
            "An unexpected error occurred",
        )
    }
}

impl From<&CalcError> for ErrorResponse {
    fn from(e: &CalcError) -> Self {
        match e.category() {
            ErrorCategory::Internal => Self::internal(),
            category => Self::new(category.label(), e.to_string()),
        }
    }
}
