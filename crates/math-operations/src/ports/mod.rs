//! # Ports Layer
//!
//! - **Inbound (Driving)**: `CalculatorApi`, what the API transports call into.
//!
//! The calculator has no outbound ports; it performs no I/O.

pub mod inbound;
