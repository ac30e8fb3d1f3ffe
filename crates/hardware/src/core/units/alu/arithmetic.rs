//! Ripple-carry adder and subtractor.
//!
//! Both operations chain single-bit full adders from the LSB (highest index)
//! to the MSB (index 0) and derive the four condition flags from the final
//! state of the chain:
//! - **N:** the result's sign bit.
//! - **Z:** the result is all zeros.
//! - **C:** carry out of the MSB. For subtraction `C = 1` means *no* borrow.
//! - **V:** signed overflow, the carry into the MSB XOR the carry out of it.
//!
//! Subtraction is `A + !B` with a forced carry-in of one at the LSB, so both
//! operations share one carry chain and one flag derivation.

use std::fmt;

use crate::common::error::{Result, ensure_width};
use crate::common::BitVector;

/// Condition flags produced by every add and subtract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flags {
    /// Negative: the result's MSB.
    pub n: bool,
    /// Zero: every result bit is `0`.
    pub z: bool,
    /// Carry out of the MSB (no-borrow for subtraction).
    pub c: bool,
    /// Signed overflow.
    pub v: bool,
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "N={}, Z={}, C={}, V={}",
            u8::from(self.n),
            u8::from(self.z),
            u8::from(self.c),
            u8::from(self.v)
        )
    }
}

/// Output of [`add`] and [`sub`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AluResult {
    /// Sum or difference, same width as the operands.
    pub result: BitVector,
    /// Condition flags for `result`.
    pub flags: Flags,
}

/// Single-bit full adder, returning `(sum, carry_out)`.
///
/// `sum = a ^ b ^ cin`, `carry_out = (a & b) | (cin & (a ^ b))`.
#[inline]
pub const fn full_adder(a: u8, b: u8, cin: u8) -> (u8, u8) {
    let partial = a ^ b;
    (partial ^ cin, (a & b) | (cin & partial))
}

/// Runs the carry chain over `a + (b or !b) + carry_in`.
fn ripple(a: &BitVector, b: &BitVector, invert_b: bool, carry_in: u8) -> AluResult {
    let width = a.width();
    let mut result = BitVector::zeros(width);
    let mut carry = carry_in;
    let mut carry_into_msb = 0;

    for i in (0..width).rev() {
        if i == 0 {
            carry_into_msb = carry;
        }
        let b_bit = if invert_b { 1 - b.bit(i) } else { b.bit(i) };
        let (sum, carry_out) = full_adder(a.bit(i), b_bit, carry);
        result.set(i, sum);
        carry = carry_out;
    }

    let flags = Flags {
        n: result.msb() == 1,
        z: result.is_zero(),
        c: carry == 1,
        v: (carry_into_msb ^ carry) == 1,
    };
    AluResult { result, flags }
}

/// Adds two equal-width vectors.
///
/// # Errors
///
/// Returns [`ArithError::WidthMismatch`](crate::common::ArithError::WidthMismatch)
/// if the widths differ.
pub fn add(a: &BitVector, b: &BitVector) -> Result<AluResult> {
    ensure_width(a.width(), b.width())?;
    Ok(ripple(a, b, false, 0))
}

/// Subtracts `b` from `a` as `a + !b + 1`.
///
/// # Errors
///
/// Returns [`ArithError::WidthMismatch`](crate::common::ArithError::WidthMismatch)
/// if the widths differ.
pub fn sub(a: &BitVector, b: &BitVector) -> Result<AluResult> {
    ensure_width(a.width(), b.width())?;
    Ok(ripple(a, b, true, 1))
}
