//! JSON-RPC method registry.
//!
//! Every calculator operation is exposed under its wire name. The registry
//! also records parameter names in positional order, which is what `GET /`
//! advertises.

use math_operations::{OperandKind, Operation};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Method metadata
#[derive(Debug, Clone, Serialize)]
pub struct MethodInfo {
    /// Method name (e.g., "divide")
    pub name: &'static str,
    /// Backing operation
    #[serde(skip)]
    pub operation: Operation,
    /// Parameter names, in positional order
    pub params: &'static [&'static str],
    /// Brief description
    pub description: &'static str,
}

impl MethodInfo {
    fn for_operation(operation: Operation) -> Self {
        let params: &'static [&'static str] = match operation.kind() {
            OperandKind::Binary => &["a", "b"],
            OperandKind::Power => &["base", "exponent"],
            OperandKind::Unary => &["number"],
        };
        Self {
            name: operation.as_str(),
            operation,
            params,
            description: operation.description(),
        }
    }
}

static METHOD_REGISTRY: LazyLock<HashMap<&'static str, MethodInfo>> = LazyLock::new(|| {
    Operation::ALL
        .into_iter()
        .map(MethodInfo::for_operation)
        .map(|m| (m.name, m))
        .collect()
});

/// Get method info by name
pub fn get_method_info(method: &str) -> Option<&'static MethodInfo> {
    METHOD_REGISTRY.get(method)
}

/// All methods, in operation order.
pub fn all_methods() -> Vec<&'static MethodInfo> {
    Operation::ALL
        .iter()
        .filter_map(|op| METHOD_REGISTRY.get(op.as_str()))
        .collect()
}
