//! IEEE-754 single-precision codec.
//!
//! Converts host `f64` values to and from 32-bit patterns laid out as
//! sign (bit 0), biased exponent (bits 1-8, bias 127) and stored mantissa
//! (bits 9-31). Conversion walks the value by repeated doubling and halving
//! rather than reading host float bits, and truncates the mantissa.
//!
//! Subnormals are never produced: magnitudes below the normal range flush to
//! a signed zero. Subnormal patterns read back as a signed zero as well.

use std::fmt;

use tracing::debug;

use super::nan_handling::{canonical_nan, infinity, signed_zero};
use crate::common::BitVector;
use crate::common::constants::{
    F32_BIAS, F32_EXP_SPECIAL, F32_EXP_START, F32_EXP_WIDTH, F32_MANTISSA_START,
    F32_MANTISSA_WIDTH, F32_SIGN_INDEX, F32_WIDTH,
};
use crate::common::error::{Result, ensure_width};
use crate::common::twos_complement::decode_unsigned;

/// Notable outcome of [`pack`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloatSpecial {
    /// Input was `±0.0`.
    Zero,
    /// Input was `±∞`.
    Infinity,
    /// Input was NaN; the canonical quiet NaN was produced.
    Nan,
    /// Magnitude exceeded the finite range and flushed to infinity.
    Overflow,
    /// Magnitude fell below the normal range and flushed to zero.
    Underflow,
}

impl fmt::Display for FloatSpecial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Zero => "zero",
            Self::Infinity => "infinity",
            Self::Nan => "nan",
            Self::Overflow => "overflow",
            Self::Underflow => "underflow",
        })
    }
}

/// Category of a 32-bit pattern. Exactly one applies to every pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloatClass {
    /// Exponent and mantissa both zero.
    Zero,
    /// Exponent zero, mantissa non-zero. Read as zero.
    Subnormal,
    /// Exponent in `1..=254`.
    Normal,
    /// Exponent all ones, mantissa zero.
    Infinity,
    /// Exponent all ones, mantissa non-zero.
    Nan,
}

impl FloatClass {
    /// Zero or subnormal, i.e. read as zero.
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Zero | Self::Subnormal)
    }
}

/// Output of [`pack`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Packed {
    /// The 32-bit pattern.
    pub bits: BitVector,
    /// Hex rendering of `bits`.
    pub hex: String,
    /// Set when the input was special or had to be flushed.
    pub special: Option<FloatSpecial>,
}

impl Packed {
    fn new(bits: BitVector, special: Option<FloatSpecial>) -> Self {
        Self {
            hex: bits.to_hex(),
            bits,
            special,
        }
    }
}

/// Output of [`unpack`].
#[derive(Clone, Debug, PartialEq)]
pub struct Unpacked {
    /// Decimal value; NaN for NaN patterns, `±0.0` for subnormals.
    pub value: f64,
    /// Sign bit.
    pub sign: u8,
    /// Biased exponent field.
    pub exponent: i32,
    /// The 23 stored mantissa bits.
    pub mantissa: BitVector,
    /// Category of the pattern.
    pub class: FloatClass,
}

/// Reads the biased exponent field of a 32-bit pattern.
pub(crate) fn exponent_field(bits: &BitVector) -> Result<i32> {
    let field = bits.slice(F32_EXP_START..F32_EXP_START + F32_EXP_WIDTH)?;
    // Eight bits always fit.
    Ok(i32::try_from(decode_unsigned(&field)).unwrap_or(F32_EXP_SPECIAL))
}

/// Classifies a 32-bit pattern.
///
/// # Errors
///
/// Fails with a width mismatch unless `bits` is 32 bits wide.
pub fn classify(bits: &BitVector) -> Result<FloatClass> {
    ensure_width(F32_WIDTH, bits.width())?;
    let exponent = exponent_field(bits)?;
    let mantissa_zero = (F32_MANTISSA_START..F32_WIDTH).all(|i| bits.bit(i) == 0);

    Ok(match (exponent, mantissa_zero) {
        (0, true) => FloatClass::Zero,
        (0, false) => FloatClass::Subnormal,
        (F32_EXP_SPECIAL, true) => FloatClass::Infinity,
        (F32_EXP_SPECIAL, false) => FloatClass::Nan,
        _ => FloatClass::Normal,
    })
}

/// Assembles a pattern from its three fields.
pub(crate) fn assemble(sign: u8, exponent: &BitVector, mantissa: &BitVector) -> BitVector {
    let mut sign_bit = BitVector::zeros(1);
    sign_bit.set(0, sign);
    sign_bit.concat(exponent).concat(mantissa)
}

/// Packs a host value into a 32-bit pattern.
///
/// # Examples
///
/// ```
/// use rvbits_core::core::units::fpu::float32::pack;
///
/// assert_eq!(pack(3.75).hex, "0x40700000");
/// assert_eq!(pack(-0.0).hex, "0x80000000");
/// ```
pub fn pack(value: f64) -> Packed {
    let sign = u8::from(value.is_sign_negative());

    if value.is_nan() {
        return Packed::new(canonical_nan(), Some(FloatSpecial::Nan));
    }
    if value.is_infinite() {
        return Packed::new(infinity(sign), Some(FloatSpecial::Infinity));
    }
    if value == 0.0 {
        return Packed::new(signed_zero(sign), Some(FloatSpecial::Zero));
    }

    let mut magnitude = value.abs();
    let mut unbiased = 0_i32;
    while magnitude >= 2.0 {
        magnitude /= 2.0;
        unbiased += 1;
    }
    while magnitude < 1.0 {
        magnitude *= 2.0;
        unbiased -= 1;
    }

    let biased = unbiased + F32_BIAS;
    if biased >= F32_EXP_SPECIAL {
        debug!(value, biased, "pack overflow, flushing to infinity");
        return Packed::new(infinity(sign), Some(FloatSpecial::Overflow));
    }
    if biased <= 0 {
        debug!(value, biased, "pack underflow, flushing to zero");
        return Packed::new(signed_zero(sign), Some(FloatSpecial::Underflow));
    }

    let mut mantissa = BitVector::zeros(F32_MANTISSA_WIDTH);
    let mut fraction = magnitude - 1.0;
    for i in 0..F32_MANTISSA_WIDTH {
        fraction *= 2.0;
        if fraction >= 1.0 {
            mantissa.set(i, 1);
            fraction -= 1.0;
        }
    }

    let exponent = biased_exponent_bits(biased);
    Packed::new(assemble(sign, &exponent, &mantissa), None)
}

/// Encodes a biased exponent known to lie in `1..=254`.
pub(crate) fn biased_exponent_bits(biased: i32) -> BitVector {
    let mut bits = BitVector::zeros(F32_EXP_WIDTH);
    let mut remaining = biased.unsigned_abs();
    for i in (0..F32_EXP_WIDTH).rev() {
        bits.set(i, u8::from(remaining % 2 == 1));
        remaining /= 2;
    }
    bits
}

/// Unpacks a 32-bit pattern.
///
/// # Errors
///
/// Fails with a width mismatch unless `bits` is 32 bits wide.
///
/// # Examples
///
/// ```
/// use rvbits_core::common::BitVector;
/// use rvbits_core::core::units::fpu::float32::unpack;
///
/// let bits = BitVector::from_hex("0x40700000").unwrap();
/// assert_eq!(unpack(&bits).unwrap().value, 3.75);
/// ```
pub fn unpack(bits: &BitVector) -> Result<Unpacked> {
    let class = classify(bits)?;
    let sign = bits.bit(F32_SIGN_INDEX);
    let exponent = exponent_field(bits)?;
    let mantissa = bits.slice(F32_MANTISSA_START..F32_WIDTH)?;
    let signed = |magnitude: f64| if sign == 1 { -magnitude } else { magnitude };

    let value = match class {
        FloatClass::Zero | FloatClass::Subnormal => signed(0.0),
        FloatClass::Infinity => signed(f64::INFINITY),
        FloatClass::Nan => f64::NAN,
        FloatClass::Normal => {
            let mut significand = 1.0;
            let mut weight = 1.0;
            for bit in mantissa.iter() {
                weight /= 2.0;
                if bit == 1 {
                    significand += weight;
                }
            }
            signed(significand * 2.0_f64.powi(exponent - F32_BIAS))
        }
    };

    Ok(Unpacked {
        value,
        sign,
        exponent,
        mantissa,
        class,
    })
}
