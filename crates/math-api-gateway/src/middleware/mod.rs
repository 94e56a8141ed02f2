//! Middleware stack for the API Gateway.
//!
//! Layer order (outermost first): CatchPanic → CORS → Tracing → Handler.
//! `/rpc` additionally runs Validation in front of its handler.

pub mod cors;
pub mod metrics;
pub mod panic;
pub mod tracing;
pub mod validation;

pub use cors::create_cors_layer;
pub use metrics::{GatewayMetrics, RequestTimer};
pub use panic::{catch_panic_layer, PanicHandler};
pub use tracing::{TracingLayer, REQUEST_ID_HEADER};
pub use validation::{validate_jsonrpc, ValidationLayer};
