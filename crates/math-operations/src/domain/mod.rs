//! # Domain Layer
//!
//! Pure math and value objects with no I/O dependencies.

pub mod entities;
pub mod errors;
pub mod math;
pub mod operation;
