//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of the calculator.

use crate::domain::entities::{
    BinaryOperands, BinaryOperationResponse, OperationRequest, OperationResponse, PowerOperands,
    PowerOperationResponse, UnaryOperand, UnaryOperationResponse,
};
use crate::OperationResult;

/// Primary Calculator API.
///
/// One method per operation over already-validated operands. Every method is
/// a pure function of its input: implementations hold no mutable state, so a
/// single instance can serve any number of concurrent callers.
///
/// Any method fails with `NonFiniteResult` instead of answering with an
/// infinity or NaN.
pub trait CalculatorApi: Send + Sync {
    // =========================================================================
    // Binary Operations
    // =========================================================================

    fn add(&self, operands: BinaryOperands) -> OperationResult<BinaryOperationResponse>;

    fn subtract(&self, operands: BinaryOperands) -> OperationResult<BinaryOperationResponse>;

    fn multiply(&self, operands: BinaryOperands) -> OperationResult<BinaryOperationResponse>;

    /// Fails with `DivisionByZero` when `b` is zero.
    fn divide(&self, operands: BinaryOperands) -> OperationResult<BinaryOperationResponse>;

    // =========================================================================
    // Power
    // =========================================================================

    /// Fails with `InvalidOperation` when finite inputs have no finite real result.
    fn power(&self, operands: PowerOperands) -> OperationResult<PowerOperationResponse>;

    // =========================================================================
    // Unary Operations
    // =========================================================================

    /// Fails with `NegativeSquareRoot` when `number` is below zero.
    fn sqrt(&self, operand: UnaryOperand) -> OperationResult<UnaryOperationResponse>;

    fn sin(&self, operand: UnaryOperand) -> OperationResult<UnaryOperationResponse>;

    fn cos(&self, operand: UnaryOperand) -> OperationResult<UnaryOperationResponse>;

    /// Fails with `InvalidOperation` for an infinite angle.
    fn tan(&self, operand: UnaryOperand) -> OperationResult<UnaryOperationResponse>;

    /// Run a validated request through the matching operation.
    fn execute(&self, request: OperationRequest) -> OperationResult<OperationResponse> {
        match request {
            OperationRequest::Add(o) => self.add(o).map(Into::into),
            OperationRequest::Subtract(o) => self.subtract(o).map(Into::into),
            OperationRequest::Multiply(o) => self.multiply(o).map(Into::into),
            OperationRequest::Divide(o) => self.divide(o).map(Into::into),
            OperationRequest::Power(o) => self.power(o).map(Into::into),
            OperationRequest::Sqrt(o) => self.sqrt(o).map(Into::into),
            OperationRequest::Sin(o) => self.sin(o).map(Into::into),
            OperationRequest::Cos(o) => self.cos(o).map(Into::into),
            OperationRequest::Tan(o) => self.tan(o).map(Into::into),
        }
    }
}
