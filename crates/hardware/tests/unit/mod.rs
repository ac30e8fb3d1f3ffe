//! # Unit Components
//!
//! This module organizes the unit tests to mirror the library: shared value
//! types, the execution units, the operation enums, configuration and the engine.

/// Unit tests for the shared value types.
///
/// This module includes tests for bit vectors, the two's-complement codec
/// and the error type.
pub mod common;





/// Property-based tests over randomly generated operands.
///
/// This module checks codec round-trips and cross-checks the bit-level units
/// against host arithmetic.
pub mod properties;
