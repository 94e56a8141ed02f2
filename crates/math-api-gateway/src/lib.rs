//! Math API Gateway - REST and JSON-RPC interface for the calculator.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      API GATEWAY                             │
//! ├──────────────────────────────────────────────────────────────┤
//! │   POST /api/v1/{op}    POST /rpc      GET / /health /metrics │
//! │          │                 │                                 │
//! │  ┌───────┴─────────────────┴────────────────────────┐        │
//! │  │              Middleware Stack                    │        │
//! │  │   CatchPanic → CORS → Tracing (→ Validation)     │        │
//! │  └───────────────────────┬──────────────────────────┘        │
//! │                          │                                   │
//! │  ┌───────────────────────┴──────────────────────────┐        │
//! │  │   OperationRequest::parse  (schema validation)   │        │
//! │  └───────────────────────┬──────────────────────────┘        │
//! └──────────────────────────┼───────────────────────────────────┘
//!                            ▼
//!                  dyn CalculatorApi (math-operations)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use math_api_gateway::{ApiGatewayService, GatewayConfig};
//! use math_operations::CalculatorService;
//!
//! let config = GatewayConfig::from_env()?;
//! let service = ApiGatewayService::new(config, Arc::new(CalculatorService::new()))?;
//! service.start().await?;
//! ```
//!
//! # Error mapping
//!
//! | Category | REST status | JSON-RPC code |
//! |----------|-------------|---------------|
//! | Bad Request | 422 | -32602 |
//! | Not Found | 404 | -32601 |
//! | Division By Zero | 422 | -32020 |
//! | Negative Square Root | 422 | -32021 |
//! | Invalid Operation | 400 | -32022 |
//! | Internal Server Error | 500 | -32603 |

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod middleware;
pub mod rest;
pub mod rpc;
pub mod service;

// Re-exports for public API
pub use domain::config::{ConfigError, GatewayConfig};
pub use domain::error::{ApiError, ApiResult, GatewayError};
pub use domain::methods::{all_methods, get_method_info, MethodInfo};
pub use middleware::GatewayMetrics;
pub use service::{ApiGatewayService, ShutdownHandle};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
