//! Bitwise gates and comparisons.
//!
//! AND/OR/XOR apply the gate position by position. Set-less-than is derived
//! from the subtractor's flags rather than from a host comparison:
//! signed `a < b` is `N ^ V` of `a - b`, unsigned `a < b` is a borrow (`!C`).

use crate::common::error::{Result, ensure_width};
use crate::common::{BitVector, twos_complement};

use super::arithmetic;

fn gate(a: &BitVector, b: &BitVector, op: impl Fn(u8, u8) -> u8) -> Result<BitVector> {
    ensure_width(a.width(), b.width())?;
    let mut out = BitVector::zeros(a.width());
    for i in 0..a.width() {
        out.set(i, op(a.bit(i), b.bit(i)));
    }
    Ok(out)
}

/// Bitwise AND.
///
/// # Errors
///
/// Fails with a width mismatch if the operands differ in width.
pub fn and(a: &BitVector, b: &BitVector) -> Result<BitVector> {
    gate(a, b, |x, y| x & y)
}

/// Bitwise OR.
///
/// # Errors
///
/// Fails with a width mismatch if the operands differ in width.
pub fn or(a: &BitVector, b: &BitVector) -> Result<BitVector> {
    gate(a, b, |x, y| x | y)
}

/// Bitwise XOR.
///
/// # Errors
///
/// Fails with a width mismatch if the operands differ in width.
pub fn xor(a: &BitVector, b: &BitVector) -> Result<BitVector> {
    gate(a, b, |x, y| x ^ y)
}

/// Bitwise NOT.
pub fn not(a: &BitVector) -> BitVector {
    twos_complement::invert(a)
}

/// A `width`-bit vector holding `0` or `1` in its LSB.
fn boolean(width: usize, value: bool) -> BitVector {
    let mut out = BitVector::zeros(width);
    out.set(width - 1, u8::from(value));
    out
}

/// SLT: `1` if `a < b` as signed values, else `0`.
///
/// # Errors
///
/// Fails with a width mismatch if the operands differ in width.
pub fn set_less_than(a: &BitVector, b: &BitVector) -> Result<BitVector> {
    let diff = arithmetic::sub(a, b)?;
    Ok(boolean(a.width(), diff.flags.n ^ diff.flags.v))
}

/// SLTU: `1` if `a < b` as unsigned values, else `0`.
///
/// # Errors
///
/// Fails with a width mismatch if the operands differ in width.
pub fn set_less_than_unsigned(a: &BitVector, b: &BitVector) -> Result<BitVector> {
    let diff = arithmetic::sub(a, b)?;
    Ok(boolean(a.width(), !diff.flags.c))
}
