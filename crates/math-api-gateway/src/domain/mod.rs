//! Domain types for the API Gateway.
//!
//! Configuration, wire errors and the method registry. No I/O.

pub mod config;
pub mod error;
pub mod methods;

// Re-exports for convenience
pub use config::{AppConfig, ConfigError, CorsConfig, GatewayConfig, HttpConfig, LimitsConfig};
pub use error::{ApiError, ApiResult, GatewayError};
pub use methods::{all_methods, get_method_info, MethodInfo};
