//! Core arithmetic implementation.
//!
//! This module contains the execution units that implement the RV32IM
//! integer operations and the single-precision add, subtract and multiply.

/// Execution units (ALU, MDU, FPU).
pub mod units;

pub use self::units::alu::Alu;
pub use self::units::fpu::Fpu;
