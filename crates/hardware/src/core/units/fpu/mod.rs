//! Floating-Point Unit (FPU).
//!
//! This module implements IEEE-754 single precision on bit patterns, built
//! entirely on the integer units: the shifter aligns and normalizes, the
//! ripple-carry adder adds significands and the shift-and-add multiplier
//! forms significand products.
//!
//! Operations are organized into submodules:
//! - [`float32`]: Packing host values into patterns and unpacking them.
//! - [`arithmetic`]: Add, subtract and multiply with truncation rounding.
//! - [`nan_handling`]: Canonical NaN, infinity and zero patterns.
//! - [`exception_flags`]: Accrued exception flag set.

/// Single-precision pack/unpack.
pub mod float32;

/// Floating-point add, subtract and multiply.
pub mod arithmetic;

/// Canonical special-value patterns.
pub mod nan_handling;

/// Floating-point exception flag types.
pub mod exception_flags;

use crate::common::BitVector;
use crate::common::error::Result;
use crate::isa::op::FpOp;

use self::arithmetic::FloatResult;

/// Floating-Point Unit (FPU) for single-precision operations.
///
/// Implements the RISC-V `fadd.s`, `fsub.s` and `fmul.s` operations on
/// 32-bit patterns. Every NaN result is the canonical quiet NaN.
#[derive(Debug)]
pub struct Fpu;

impl Fpu {
    /// Executes a floating-point operation and returns the result pattern.
    ///
    /// # Arguments
    ///
    /// * `op` - The floating-point operation to perform
    /// * `a`  - First operand (32-bit IEEE 754 pattern)
    /// * `b`  - Second operand (32-bit IEEE 754 pattern)
    ///
    /// # Errors
    ///
    /// Fails with a width mismatch unless both operands are 32 bits wide.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvbits_core::core::units::fpu::Fpu;
    /// use rvbits_core::core::units::fpu::float32::pack;
    /// use rvbits_core::isa::op::FpOp;
    ///
    /// let a = pack(2.5).bits;
    /// let b = pack(3.5).bits;
    /// assert_eq!(Fpu::execute(FpOp::FAdd, &a, &b).unwrap(), pack(6.0).bits);
    /// assert_eq!(Fpu::execute(FpOp::FMul, &a, &b).unwrap(), pack(8.75).bits);
    /// ```
    pub fn execute(op: FpOp, a: &BitVector, b: &BitVector) -> Result<BitVector> {
        Ok(Self::execute_full(op, a, b)?.result)
    }

    /// Executes a floating-point operation and returns the result with its
    /// accrued exception flags and phase trace.
    ///
    /// # Errors
    ///
    /// Fails with a width mismatch unless both operands are 32 bits wide.
    pub fn execute_full(op: FpOp, a: &BitVector, b: &BitVector) -> Result<FloatResult> {
        match op {
            FpOp::FAdd => arithmetic::add(a, b),
            FpOp::FSub => arithmetic::sub(a, b),
            FpOp::FMul => arithmetic::mul(a, b),
        }
    }
}
