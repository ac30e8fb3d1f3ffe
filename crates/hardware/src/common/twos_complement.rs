//! Two's-complement codec.
//!
//! Converts host integers to and from [`BitVector`]s. This is the only place
//! host arithmetic touches encoded values: magnitudes are peeled off one bit
//! at a time on the way in and accumulated one bit at a time on the way out.
//! Negation itself is done on the bits (invert, then add one through a chain
//! of half adders), which is also what the multiply and divide units use for
//! their sign fix-ups.
//!
//! Encoding an out-of-range value is defined: the value is clamped to the
//! nearest representable bound and [`Encoded::overflow`] is set.

use tracing::debug;

use super::bits::BitVector;
use super::error::{ArithError, Result};

/// Largest width whose signed range can be exceeded by an `i64` input.
const HOST_BITS: usize = 64;

/// Result of [`encode`]: the clamped pattern plus its renderings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoded {
    /// The (possibly clamped) two's-complement pattern.
    pub bits: BitVector,
    /// `true` iff the input fell outside the signed range of the width.
    pub overflow: bool,
    /// Hex rendering of `bits`.
    pub hex: String,
    /// Underscore-grouped binary rendering of `bits`.
    pub bin: String,
}

/// `true` when the sign bit is set.
#[inline]
pub fn is_negative(bits: &BitVector) -> bool {
    bits.msb() == 1
}

/// One's complement: every bit inverted.
pub fn invert(bits: &BitVector) -> BitVector {
    BitVector::from_raw(bits.iter().map(|b| 1 - b).collect())
}

/// Adds one with a half-adder chain from the LSB; the final carry is discarded.
pub fn add_one(bits: &BitVector) -> BitVector {
    let mut result = bits.clone();
    let mut carry = 1u8;
    for i in (0..bits.width()).rev() {
        let b = bits.bit(i);
        result.set(i, b ^ carry);
        carry &= b;
    }
    result
}

/// Two's-complement negation (invert, add one).
///
/// The minimum value maps to itself, as in hardware.
pub fn negate(bits: &BitVector) -> BitVector {
    add_one(&invert(bits))
}

/// Writes the unsigned binary form of `magnitude` into `width` bits, keeping the low bits.
fn magnitude_bits(mut magnitude: u64, width: usize) -> BitVector {
    let mut bits = BitVector::zeros(width);
    for i in (0..width).rev() {
        if magnitude == 0 {
            break;
        }
        bits.set(i, (magnitude % 2) as u8);
        magnitude /= 2;
    }
    bits
}

/// Reads `bits` as an unsigned binary number; widths above 64 keep the low 64 bits.
fn accumulate(bits: &BitVector) -> u64 {
    bits.iter()
        .fold(0u64, |value, bit| value.wrapping_mul(2).wrapping_add(u64::from(bit)))
}

fn check_width(width: usize) -> Result<()> {
    if width == 0 {
        return Err(ArithError::Construction {
            reason: "width must be at least one bit",
        });
    }
    Ok(())
}

/// Encodes `value` as a `width`-bit two's-complement pattern.
///
/// Values outside `[-2^(width-1), 2^(width-1) - 1]` are clamped to the nearest
/// bound and reported through [`Encoded::overflow`].
///
/// # Errors
///
/// Returns [`ArithError::Construction`] if `width` is zero.
pub fn encode(value: i64, width: usize) -> Result<Encoded> {
    check_width(width)?;

    let (clamped, overflow) = if width >= HOST_BITS {
        (value, false)
    } else {
        let max = (1i64 << (width - 1)) - 1;
        let min = -(1i64 << (width - 1));
        if value > max {
            (max, true)
        } else if value < min {
            (min, true)
        } else {
            (value, false)
        }
    };
    if overflow {
        debug!(value, width, clamped, "encode clamped out-of-range value");
    }

    let magnitude = magnitude_bits(clamped.unsigned_abs(), width);
    let bits = if clamped < 0 { negate(&magnitude) } else { magnitude };

    Ok(Encoded {
        hex: bits.to_hex(),
        bin: bits.to_bin(),
        bits,
        overflow,
    })
}

/// Decodes a two's-complement pattern to a host integer.
///
/// Widths above 64 bits yield the value of the low 64 bits of the magnitude.
pub fn decode(bits: &BitVector) -> i64 {
    if is_negative(bits) {
        (accumulate(&negate(bits)) as i64).wrapping_neg()
    } else {
        accumulate(bits) as i64
    }
}

/// Encodes the low `width` bits of `value` as an unsigned pattern.
///
/// # Errors
///
/// Returns [`ArithError::Construction`] if `width` is zero.
pub fn encode_unsigned(value: u64, width: usize) -> Result<BitVector> {
    check_width(width)?;
    Ok(magnitude_bits(value, width))
}

/// Decodes a pattern as an unsigned integer (low 64 bits for wider vectors).
pub fn decode_unsigned(bits: &BitVector) -> u64 {
    accumulate(bits)
}

/// Widens `bits` to `new_width` by replicating the sign bit.
///
/// A `new_width` no larger than the current width returns an unchanged copy.
pub fn sign_extend(bits: &BitVector, new_width: usize) -> BitVector {
    extend_with(bits, new_width, bits.msb())
}

/// Widens `bits` to `new_width` by prepending zeros.
///
/// A `new_width` no larger than the current width returns an unchanged copy.
pub fn zero_extend(bits: &BitVector, new_width: usize) -> BitVector {
    extend_with(bits, new_width, 0)
}

fn extend_with(bits: &BitVector, new_width: usize, fill: u8) -> BitVector {
    if new_width <= bits.width() {
        return bits.clone();
    }
    let mut out = vec![fill; new_width - bits.width()];
    out.extend_from_slice(bits.as_slice());
    BitVector::from_raw(out)
}
