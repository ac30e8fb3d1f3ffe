//! Single-precision add, subtract and multiply on bit patterns.
//!
//! All mantissa work goes through the integer units: alignment and
//! normalization use the shifter, mantissa addition and subtraction use the
//! ripple-carry adder, and the mantissa product comes from the shift-and-add
//! multiplier. Exponents are small bookkeeping integers.
//!
//! 1. **Classify:** Split each operand into sign, biased exponent and a 24-bit
//!    significand with the implicit leading one. Subnormals read as zero.
//! 2. **Specials:** NaN, infinity and zero operands short-circuit through a
//!    fixed table.
//! 3. **Compute:** Align and add/subtract, or multiply.
//! 4. **Normalize:** Restore the leading one, adjusting the exponent.
//! 5. **Repack:** Range-check the exponent (overflow to infinity, underflow
//!    to zero) and truncate to the 23 stored mantissa bits.
//!
//! Rounding is truncation only. There are no guard, round or sticky bits; any
//! discarded one bit raises the inexact flag instead.

use tracing::{debug, trace};

use super::exception_flags::FpFlags;
use super::float32::{FloatClass, assemble, biased_exponent_bits, classify, exponent_field};
use super::nan_handling::{canonical_nan, infinity, is_signaling_nan, signed_zero};
use crate::common::BitVector;
use crate::common::constants::{
    F32_BIAS, F32_EXP_SPECIAL, F32_MANTISSA_START, F32_SIGN_INDEX, F32_SIGNIFICAND_WIDTH,
    F32_WIDTH,
};
use crate::common::error::{Result, ensure_width};
use crate::common::twos_complement::{negate, zero_extend};
use crate::core::units::alu::arithmetic;
use crate::core::units::alu::shifts::{shift_left_logical, shift_right_logical};
use crate::core::units::mdu::multiply::multiply_unsigned;

/// Width of the mantissa product operands fed to the multiplier.
const PRODUCT_OPERAND_WIDTH: usize = 32;

/// Decoded operand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fields {
    /// Sign bit.
    pub sign: u8,
    /// Biased exponent.
    pub exponent: i32,
    /// 24-bit significand including the implicit leading bit (all zero for zero-class operands).
    pub significand: BitVector,
    /// Category of the pattern.
    pub class: FloatClass,
}

/// Splits a 32-bit pattern into its arithmetic fields.
///
/// # Errors
///
/// Fails with a width mismatch unless `bits` is 32 bits wide.
pub fn fields(bits: &BitVector) -> Result<Fields> {
    let class = classify(bits)?;
    let mut significand = BitVector::zeros(F32_SIGNIFICAND_WIDTH);
    if class == FloatClass::Normal {
        significand.set(0, 1);
        for (i, bit) in bits.as_slice()[F32_MANTISSA_START..F32_WIDTH].iter().enumerate() {
            significand.set(i + 1, *bit);
        }
    }

    Ok(Fields {
        sign: bits.bit(F32_SIGN_INDEX),
        exponent: exponent_field(bits)?,
        significand,
        class,
    })
}

/// Phase of a float operation recorded in its trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FpStage {
    /// A special-value rule produced the result.
    Special,
    /// The smaller operand's significand was shifted right by this many places.
    Align {
        /// Exponent difference.
        shift: usize,
    },
    /// Significands were added.
    Add,
    /// Significands were subtracted.
    Subtract,
    /// Subtraction borrowed; the difference was negated.
    Negate,
    /// Significands were multiplied; the snapshot is the selected 24-bit window.
    Multiply,
    /// Leading one restored.
    Normalize,
    /// Exponent range-checked and mantissa truncated.
    Repack,
}

/// One recorded phase: the working exponent and significand after the stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FpStep {
    /// Phase.
    pub stage: FpStage,
    /// Working biased exponent.
    pub exponent: i32,
    /// Working significand (or result pattern for `Special` and `Repack`).
    pub bits: BitVector,
}

/// Result of a float operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FloatResult {
    /// The 32-bit result pattern.
    pub result: BitVector,
    /// Raised exception flags.
    pub flags: FpFlags,
    /// Recorded phases, in order.
    pub trace: Vec<FpStep>,
}

impl FloatResult {
    fn special(result: BitVector, flags: FpFlags, rule: &'static str) -> Self {
        debug!(rule, result = %result, %flags, "float special value");
        Self {
            trace: vec![FpStep {
                stage: FpStage::Special,
                exponent: 0,
                bits: result.clone(),
            }],
            result,
            flags,
        }
    }
}

fn check_operands(a: &BitVector, b: &BitVector) -> Result<()> {
    ensure_width(F32_WIDTH, a.width())?;
    ensure_width(F32_WIDTH, b.width())
}

fn signaling_flags(a: &BitVector, b: &BitVector) -> FpFlags {
    if is_signaling_nan(a) || is_signaling_nan(b) {
        FpFlags::NV
    } else {
        FpFlags::NONE
    }
}

/// True if any bit in `range` of `bits` is one.
fn any_set(bits: &BitVector, range: std::ops::Range<usize>) -> bool {
    bits.as_slice()[range].iter().any(|&bit| bit == 1)
}

/// Range-checks the exponent and truncates a normalized 24-bit significand.
fn repack(
    sign: u8,
    exponent: i32,
    significand: &BitVector,
    flags: &mut FpFlags,
    steps: &mut Vec<FpStep>,
) -> Result<BitVector> {
    let result = if exponent >= F32_EXP_SPECIAL {
        debug!(exponent, "float overflow, result is infinity");
        *flags |= FpFlags::OF | FpFlags::NX;
        infinity(sign)
    } else if exponent <= 0 {
        debug!(exponent, "float underflow, result is zero");
        *flags |= FpFlags::UF | FpFlags::NX;
        signed_zero(sign)
    } else {
        let stored = significand.slice(1..F32_SIGNIFICAND_WIDTH)?;
        assemble(sign, &biased_exponent_bits(exponent), &stored)
    };

    steps.push(FpStep {
        stage: FpStage::Repack,
        exponent,
        bits: result.clone(),
    });
    Ok(result)
}

/// Adds two single-precision patterns.
///
/// # Errors
///
/// Fails with a width mismatch unless both operands are 32 bits wide.
///
/// # Examples
///
/// ```
/// use rvbits_core::core::units::fpu::arithmetic::add;
/// use rvbits_core::core::units::fpu::float32::{pack, unpack};
///
/// let sum = add(&pack(3.75).bits, &pack(2.5).bits).unwrap();
/// assert_eq!(unpack(&sum.result).unwrap().value, 6.25);
/// ```
pub fn add(a: &BitVector, b: &BitVector) -> Result<FloatResult> {
    check_operands(a, b)?;
    let fa = fields(a)?;
    let fb = fields(b)?;
    let mut flags = signaling_flags(a, b);

    if fa.class == FloatClass::Nan || fb.class == FloatClass::Nan {
        return Ok(FloatResult::special(canonical_nan(), flags, "nan operand"));
    }
    match (fa.class, fb.class) {
        (FloatClass::Infinity, FloatClass::Infinity) if fa.sign != fb.sign => {
            return Ok(FloatResult::special(canonical_nan(), FpFlags::NV, "inf - inf"));
        }
        (FloatClass::Infinity, _) => {
            return Ok(FloatResult::special(infinity(fa.sign), flags, "infinite operand"));
        }
        (_, FloatClass::Infinity) => {
            return Ok(FloatResult::special(infinity(fb.sign), flags, "infinite operand"));
        }
        (ca, cb) if ca.is_zero() && cb.is_zero() => {
            return Ok(FloatResult::special(signed_zero(fa.sign & fb.sign), flags, "zero sum"));
        }
        (ca, _) if ca.is_zero() => {
            return Ok(FloatResult::special(b.clone(), flags, "zero operand"));
        }
        (_, cb) if cb.is_zero() => {
            return Ok(FloatResult::special(a.clone(), flags, "zero operand"));
        }
        _ => {}
    }

    let (big, small) = if fa.exponent >= fb.exponent { (&fa, &fb) } else { (&fb, &fa) };
    let mut steps = Vec::new();
    let mut exponent = big.exponent;

    let shift = (big.exponent - small.exponent).unsigned_abs() as usize;
    let dropped = shift.min(F32_SIGNIFICAND_WIDTH);
    if any_set(&small.significand, F32_SIGNIFICAND_WIDTH - dropped..F32_SIGNIFICAND_WIDTH) {
        flags |= FpFlags::NX;
    }
    let aligned = shift_right_logical(&small.significand, shift);
    trace!(shift, aligned = %aligned, "align significands");
    steps.push(FpStep {
        stage: FpStage::Align { shift },
        exponent,
        bits: aligned.clone(),
    });

    let (sign, mut significand) = if big.sign == small.sign {
        let sum = arithmetic::add(&big.significand, &aligned)?;
        steps.push(FpStep {
            stage: FpStage::Add,
            exponent,
            bits: sum.result.clone(),
        });
        let mut significand = sum.result;
        if sum.flags.c {
            if significand.lsb() == 1 {
                flags |= FpFlags::NX;
            }
            significand = shift_right_logical(&significand, 1);
            significand.set(0, 1);
            exponent += 1;
            trace!(exponent, significand = %significand, "carry out, shift right");
            steps.push(FpStep {
                stage: FpStage::Normalize,
                exponent,
                bits: significand.clone(),
            });
        }
        (big.sign, significand)
    } else {
        let difference = arithmetic::sub(&big.significand, &aligned)?;
        steps.push(FpStep {
            stage: FpStage::Subtract,
            exponent,
            bits: difference.result.clone(),
        });
        if difference.flags.c {
            (big.sign, difference.result)
        } else {
            let magnitude = negate(&difference.result);
            steps.push(FpStep {
                stage: FpStage::Negate,
                exponent,
                bits: magnitude.clone(),
            });
            (small.sign, magnitude)
        }
    };

    if significand.is_zero() {
        let result = signed_zero(0);
        steps.push(FpStep {
            stage: FpStage::Repack,
            exponent: 0,
            bits: result.clone(),
        });
        return Ok(FloatResult {
            result,
            flags,
            trace: steps,
        });
    }

    if significand.msb() == 0 {
        while significand.msb() == 0 {
            significand = shift_left_logical(&significand, 1);
            exponent -= 1;
            trace!(exponent, significand = %significand, "normalize left");
        }
        steps.push(FpStep {
            stage: FpStage::Normalize,
            exponent,
            bits: significand.clone(),
        });
    }

    let result = repack(sign, exponent, &significand, &mut flags, &mut steps)?;
    Ok(FloatResult {
        result,
        flags,
        trace: steps,
    })
}

/// Subtracts `b` from `a` as `a + (-b)`.
///
/// # Errors
///
/// Fails with a width mismatch unless both operands are 32 bits wide.
pub fn sub(a: &BitVector, b: &BitVector) -> Result<FloatResult> {
    check_operands(a, b)?;
    let mut negated = b.clone();
    negated.set(F32_SIGN_INDEX, 1 - b.bit(F32_SIGN_INDEX));
    add(a, &negated)
}

/// Multiplies two single-precision patterns.
///
/// The significand product is formed by the unsigned multiplier on operands
/// zero-extended to 32 bits. Its 48 significant bits weigh `2^1` at the top,
/// so the top-24-bit window carries exponent `e_A + e_B - 127 + 1`; when the
/// top bit is clear the window moves down one place and the exponent drops by one.
///
/// # Errors
///
/// Fails with a width mismatch unless both operands are 32 bits wide.
///
/// # Examples
///
/// ```
/// use rvbits_core::core::units::fpu::arithmetic::mul;
/// use rvbits_core::core::units::fpu::float32::pack;
///
/// let product = mul(&pack(3.75).bits, &pack(2.5).bits).unwrap();
/// assert_eq!(product.result.to_hex(), "0x41160000");
/// ```
pub fn mul(a: &BitVector, b: &BitVector) -> Result<FloatResult> {
    check_operands(a, b)?;
    let fa = fields(a)?;
    let fb = fields(b)?;
    let sign = fa.sign ^ fb.sign;
    let mut flags = signaling_flags(a, b);

    if fa.class == FloatClass::Nan || fb.class == FloatClass::Nan {
        return Ok(FloatResult::special(canonical_nan(), flags, "nan operand"));
    }
    let a_inf = fa.class == FloatClass::Infinity;
    let b_inf = fb.class == FloatClass::Infinity;
    if (a_inf && fb.class.is_zero()) || (b_inf && fa.class.is_zero()) {
        return Ok(FloatResult::special(canonical_nan(), FpFlags::NV, "zero times infinity"));
    }
    if a_inf || b_inf {
        return Ok(FloatResult::special(infinity(sign), flags, "infinite operand"));
    }
    if fa.class.is_zero() || fb.class.is_zero() {
        return Ok(FloatResult::special(signed_zero(sign), flags, "zero operand"));
    }

    let mut exponent = fa.exponent + fb.exponent - F32_BIAS + 1;
    let product = multiply_unsigned(
        &zero_extend(&fa.significand, PRODUCT_OPERAND_WIDTH),
        &zero_extend(&fb.significand, PRODUCT_OPERAND_WIDTH),
    )?
    .full();

    // The 48-bit product occupies the low 48 of the 64 product bits.
    let top = 2 * PRODUCT_OPERAND_WIDTH - 2 * F32_SIGNIFICAND_WIDTH;
    let start = if product.bit(top) == 1 {
        top
    } else {
        exponent -= 1;
        top + 1
    };
    let end = start + F32_SIGNIFICAND_WIDTH;
    if any_set(&product, end..product.width()) {
        flags |= FpFlags::NX;
    }
    let significand = product.slice(start..end)?;
    trace!(exponent, significand = %significand, "significand product window");
    let mut steps = vec![FpStep {
        stage: FpStage::Multiply,
        exponent,
        bits: significand.clone(),
    }];

    let result = repack(sign, exponent, &significand, &mut flags, &mut steps)?;
    Ok(FloatResult {
        result,
        flags,
        trace: steps,
    })
}
