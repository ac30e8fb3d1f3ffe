//! Shifter.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL) and
//! shift-right arithmetic (SRA) by moving individual bits; no host shift
//! operator touches the encoded value.
//!
//! The unit-level shifts take a host shift amount and accept any amount:
//! amounts at or past the width clear the vector (logical) or fill it with
//! the sign bit (arithmetic), with no modulo wrap-around. The instruction
//! path goes through [`barrel_shift`], which reads the amount from a register
//! and, as RV32I requires, honours only its low `log2(width)` bits.

use crate::common::BitVector;

/// Direction and fill policy of a shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShiftKind {
    /// Toward the MSB, zero fill.
    LeftLogical,
    /// Toward the LSB, zero fill.
    RightLogical,
    /// Toward the LSB, sign fill.
    RightArithmetic,
}

/// Shifts toward the MSB: output bit `i` is input bit `i + shamt`, or `0` past the end.
pub fn shift_left_logical(bits: &BitVector, shamt: usize) -> BitVector {
    let width = bits.width();
    let mut result = BitVector::zeros(width);
    for i in 0..width {
        if let Some(src) = i.checked_add(shamt).filter(|&s| s < width) {
            result.set(i, bits.bit(src));
        }
    }
    result
}

/// Shifts toward the LSB: output bit `i` is input bit `i - shamt`, or `0` before the start.
pub fn shift_right_logical(bits: &BitVector, shamt: usize) -> BitVector {
    shift_right_filled(bits, shamt, 0)
}

/// Like [`shift_right_logical`] but vacated high-order bits take the original sign bit.
pub fn shift_right_arithmetic(bits: &BitVector, shamt: usize) -> BitVector {
    shift_right_filled(bits, shamt, bits.msb())
}

fn shift_right_filled(bits: &BitVector, shamt: usize, fill: u8) -> BitVector {
    let width = bits.width();
    let mut result = BitVector::zeros(width);
    for i in 0..width {
        let bit = i.checked_sub(shamt).map_or(fill, |src| bits.bit(src));
        result.set(i, bit);
    }
    result
}

/// Dispatches on `kind`.
pub fn shift(bits: &BitVector, shamt: usize, kind: ShiftKind) -> BitVector {
    match kind {
        ShiftKind::LeftLogical => shift_left_logical(bits, shamt),
        ShiftKind::RightLogical => shift_right_logical(bits, shamt),
        ShiftKind::RightArithmetic => shift_right_arithmetic(bits, shamt),
    }
}

/// Number of amount bits a barrel shifter of `width` bits decodes (`ceil(log2(width))`).
pub fn stage_count(width: usize) -> usize {
    let mut stages = 0;
    let mut reach = 1;
    while reach < width {
        reach *= 2;
        stages += 1;
    }
    stages
}

/// Logarithmic barrel shifter driven by a register operand.
///
/// Stage `k` shifts by `2^k` positions when bit `k` of `amount` (counted from
/// its LSB) is set. Only the low [`stage_count`] bits of `amount` are decoded,
/// which gives the RV32I masking of shift amounts to five bits.
pub fn barrel_shift(bits: &BitVector, amount: &BitVector, kind: ShiftKind) -> BitVector {
    let mut value = bits.clone();
    let mut distance = 1;
    for stage in 0..stage_count(bits.width()) {
        let selected = amount
            .width()
            .checked_sub(stage + 1)
            .is_some_and(|index| amount.bit(index) == 1);
        if selected {
            value = shift(&value, distance, kind);
        }
        distance *= 2;
    }
    value
}
