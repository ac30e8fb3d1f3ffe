//! Execution units and functional components.
//!
//! This module contains the three arithmetic units. Each is a namespace of
//! pure functions over [`BitVector`](crate::common::BitVector) values; no unit
//! holds state between calls.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Floating-Point Unit for single-precision operations.
pub mod fpu;

/// Multiply/Divide Unit for the M extension.
pub mod mdu;
