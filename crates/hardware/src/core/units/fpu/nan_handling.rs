//! Canonical special-value patterns for single precision.
//!
//! Every NaN the unit produces is the canonical quiet NaN `0x7FC00000`
//! (positive, quiet bit set, zero payload); input payloads are discarded.
//! A NaN whose quiet bit (the mantissa MSB) is clear is signaling and raises
//! the invalid flag when consumed by arithmetic.

use crate::common::BitVector;
use crate::common::constants::{
    F32_EXP_START, F32_EXP_WIDTH, F32_MANTISSA_START, F32_SIGN_INDEX, F32_WIDTH,
};

/// Hex rendering of the canonical quiet NaN.
pub const CANONICAL_NAN_HEX: &str = "0x7FC00000";

/// Index of the quiet bit (mantissa MSB).
const QUIET_BIT: usize = F32_MANTISSA_START;

fn with_exponent_all_ones(sign: u8) -> BitVector {
    let mut bits = BitVector::zeros(F32_WIDTH);
    bits.set(F32_SIGN_INDEX, sign);
    for i in F32_EXP_START..F32_EXP_START + F32_EXP_WIDTH {
        bits.set(i, 1);
    }
    bits
}

/// The canonical quiet NaN pattern.
pub fn canonical_nan() -> BitVector {
    let mut bits = with_exponent_all_ones(0);
    bits.set(QUIET_BIT, 1);
    bits
}

/// Infinity with the given sign bit.
pub fn infinity(sign: u8) -> BitVector {
    with_exponent_all_ones(sign)
}

/// Zero with the given sign bit.
pub fn signed_zero(sign: u8) -> BitVector {
    let mut bits = BitVector::zeros(F32_WIDTH);
    bits.set(F32_SIGN_INDEX, sign);
    bits
}

fn exponent_all_ones(bits: &BitVector) -> bool {
    (F32_EXP_START..F32_EXP_START + F32_EXP_WIDTH).all(|i| bits.bit(i) == 1)
}

fn mantissa_nonzero(bits: &BitVector) -> bool {
    (F32_MANTISSA_START..F32_WIDTH).any(|i| bits.bit(i) == 1)
}

/// Returns true for any NaN pattern. Patterns that are not 32 bits wide are never NaN.
pub fn is_nan(bits: &BitVector) -> bool {
    bits.width() == F32_WIDTH && exponent_all_ones(bits) && mantissa_nonzero(bits)
}

/// Returns true for a NaN with its quiet bit clear.
pub fn is_signaling_nan(bits: &BitVector) -> bool {
    is_nan(bits) && bits.bit(QUIET_BIT) == 0
}
