//! Common value types shared by every arithmetic unit.
//!
//! This module provides the building blocks the units pass between each other:
//! 1. **Bit Vectors:** The fixed-width, MSB-first value type.
//! 2. **Two's Complement:** Host-integer codec, negation and width extension.
//! 3. **Constants:** Register width, IEEE-754 field layout and nibble tables.
//! 4. **Error Handling:** The engine's error type and result alias.

/// Fixed-width bit vector value type.
pub mod bits;

/// Architectural constants.
pub mod constants;

/// Error types.
pub mod error;

/// Two's-complement encode/decode, negation and extension.
pub mod twos_complement;

pub use bits::BitVector;
pub use error::{ArithError, Result};
pub use twos_complement::Encoded;
