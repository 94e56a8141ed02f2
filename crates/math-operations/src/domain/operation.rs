//! The fixed operation table.

use std::fmt;
use std::str::FromStr;

/// Shape of the operands an operation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    /// `a`, `b`
    Binary,
    /// `base`, `exponent`
    Power,
    /// `number`
    Unary,
}

/// One of the nine supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Sqrt,
    Sin,
    Cos,
    Tan,
}

impl Operation {
    /// Every operation, in wire order.
    pub const ALL: [Operation; 9] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Sqrt,
        Operation::Sin,
        Operation::Cos,
        Operation::Tan,
    ];

    /// Wire name used in routes, RPC method names and responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Sqrt => "sqrt",
            Operation::Sin => "sin",
            Operation::Cos => "cos",
            Operation::Tan => "tan",
        }
    }

    pub fn kind(&self) -> OperandKind {
        match self {
            Operation::Add | Operation::Subtract | Operation::Multiply | Operation::Divide => {
                OperandKind::Binary
            }
            Operation::Power => OperandKind::Power,
            Operation::Sqrt | Operation::Sin | Operation::Cos | Operation::Tan => {
                OperandKind::Unary
            }
        }
    }

    /// Human-readable summary, used for the method listing.
    pub fn description(&self) -> &'static str {
        match self {
            Operation::Add => "Add two numbers: a + b",
            Operation::Subtract => "Subtract two numbers: a - b",
            Operation::Multiply => "Multiply two numbers: a * b",
            Operation::Divide => "Divide two numbers: a / b (b must not be zero)",
            Operation::Power => "Raise base to exponent: base ^ exponent",
            Operation::Sqrt => "Square root of a non-negative number",
            Operation::Sin => "Sine of an angle in radians",
            Operation::Cos => "Cosine of an angle in radians",
            Operation::Tan => "Tangent of an angle in radians",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name does not match any operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation: {0}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}
