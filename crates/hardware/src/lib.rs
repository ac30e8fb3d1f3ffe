//! Bit-level RV32IM and single-precision arithmetic library.
//!
//! This crate models the arithmetic datapath of a RISC-V core on explicit bit
//! vectors, without using host arithmetic on encoded values:
//! 1. **Common:** The fixed-width [`BitVector`] value type, the two's-complement
//!    codec and the error type.
//! 2. **Core:** ALU (ripple-carry add/sub with N/Z/C/V flags, logic, shifts),
//!    MDU (shift-and-add multiply, restoring divide) and FPU (IEEE-754 single
//!    pack/unpack, add, subtract, multiply with truncation rounding).
//! 3. **ISA:** RV32IM and F operation enums with their assembler mnemonics.
//! 4. **Engine:** A configured entry point bound to one register width.
//!
//! Numeric conditions (overflow, divide by zero, `INT_MIN / -1`, float
//! specials) are reported as flags on results; only malformed input such as
//! mismatched widths or bad literals is an error.

/// Common types (bit vectors, two's complement, constants, errors).
pub mod common;
/// Engine configuration (register width, trace retention).
pub mod config;
/// Execution units (ALU, MDU, FPU).
pub mod core;
/// Configured engine over the units.
pub mod engine;
/// Operation enums for RV32IM and single-precision F.
pub mod isa;

/// Fixed-width bit vector; index 0 is the MSB.
pub use crate::common::BitVector;
/// Error type and result alias for every fallible operation.
pub use crate::common::{ArithError, Result};
/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Execution units.
pub use crate::core::{Alu, Fpu};
/// Configured engine; construct with `Engine::new`.
pub use crate::engine::Engine;
/// Operation enums.
pub use crate::isa::op::{AluOp, FpOp};
