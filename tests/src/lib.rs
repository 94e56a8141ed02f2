//! # Mathematical API Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/  # End-to-end flows through the full router
//! │   ├── rest_flows.rs # POST /api/v1/{operation}
//! │   └── rpc_flows.rs  # POST /rpc
//! │
//! └── benches/          # Criterion benchmarks of the dispatcher
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p math-tests
//!
//! # By transport
//! cargo test -p math-tests integration::rest_flows::
//! cargo test -p math-tests integration::rpc_flows::
//!
//! # Benchmarks
//! cargo bench -p math-tests
//! ```

pub mod integration;
