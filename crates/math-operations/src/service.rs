//! # Calculator Service
//!
//! Application service that implements the `CalculatorApi` trait and the
//! name-based [`dispatch`] entry point used by transports.
//!
//! Each successful call logs the operation, its inputs and the result at
//! `info`. Precondition violations log at `warn`; invalid-operation faults
//! and non-finite results at `error`.

use crate::domain::entities::{
    BinaryOperands, BinaryOperationResponse, OperationRequest, OperationResponse, PowerOperands,
    PowerOperationResponse, UnaryOperand, UnaryOperationResponse,
};
use crate::domain::errors::{CalcError, OperationError};
use crate::domain::math;
use crate::domain::operation::Operation;
use crate::ports::inbound::CalculatorApi;
use crate::OperationResult;
use serde_json::Value;
use tracing::{error, info, warn};

/// Stateless calculator. Cheap to clone and share.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorService;

impl CalculatorService {
    pub fn new() -> Self {
        Self
    }

    fn binary(
        &self,
        operation: Operation,
        operands: BinaryOperands,
        f: fn(f64, f64) -> OperationResult<f64>,
    ) -> OperationResult<BinaryOperationResponse> {
        let BinaryOperands { a, b } = operands;
        let result = f(a, b).inspect_err(|e| log_failure(operation, e))?;
        info!(operation = operation.as_str(), a, b, result, "operation completed");
        Ok(BinaryOperationResponse::new(operation, operands, result))
    }

    fn unary(
        &self,
        operation: Operation,
        operand: UnaryOperand,
        f: fn(f64) -> OperationResult<f64>,
    ) -> OperationResult<UnaryOperationResponse> {
        let number = operand.number;
        let result = f(number).inspect_err(|e| log_failure(operation, e))?;
        info!(operation = operation.as_str(), number, result, "operation completed");
        Ok(UnaryOperationResponse::new(operation, operand, result))
    }
}

fn log_failure(operation: Operation, err: &OperationError) {
    match err {
        OperationError::InvalidOperation(_) | OperationError::NonFiniteResult => {
            error!(operation = operation.as_str(), error = %err, "operation failed")
        }
        _ => warn!(operation = operation.as_str(), error = %err, "precondition violated"),
    }
}

impl CalculatorApi for CalculatorService {
    fn add(&self, operands: BinaryOperands) -> OperationResult<BinaryOperationResponse> {
        self.binary(Operation::Add, operands, math::add)
    }

    fn subtract(&self, operands: BinaryOperands) -> OperationResult<BinaryOperationResponse> {
        self.binary(Operation::Subtract, operands, math::subtract)
    }

    fn multiply(&self, operands: BinaryOperands) -> OperationResult<BinaryOperationResponse> {
        self.binary(Operation::Multiply, operands, math::multiply)
    }

    fn divide(&self, operands: BinaryOperands) -> OperationResult<BinaryOperationResponse> {
        self.binary(Operation::Divide, operands, math::divide)
    }

    fn power(&self, operands: PowerOperands) -> OperationResult<PowerOperationResponse> {
        let PowerOperands { base, exponent } = operands;
        let result = math::power(base, exponent)
            .inspect_err(|e| log_failure(Operation::Power, e))?;
        info!(operation = "power", base, exponent, result, "operation completed");
        Ok(PowerOperationResponse::new(operands, result))
    }

    fn sqrt(&self, operand: UnaryOperand) -> OperationResult<UnaryOperationResponse> {
        self.unary(Operation::Sqrt, operand, math::sqrt)
    }

    fn sin(&self, operand: UnaryOperand) -> OperationResult<UnaryOperationResponse> {
        self.unary(Operation::Sin, operand, math::sin)
    }

    fn cos(&self, operand: UnaryOperand) -> OperationResult<UnaryOperationResponse> {
        self.unary(Operation::Cos, operand, math::cos)
    }

    fn tan(&self, operand: UnaryOperand) -> OperationResult<UnaryOperationResponse> {
        self.unary(Operation::Tan, operand, math::tan)
    }
}

/// Resolve `name`, validate `payload`, then execute.
///
/// Validation always completes before the calculator is invoked: a malformed
/// payload never reaches `api`.
pub fn dispatch<A: CalculatorApi + ?Sized>(
    api: &A,
    name: &str,
    payload: &Value,
) -> Result<OperationResponse, CalcError> {
    let request = OperationRequest::from_name(name, payload)?;
    Ok(api.execute(request)?)
}
