//! Shift-and-add multiplier.
//!
//! Produces the full double-width product of two `w`-bit operands. Operands
//! are reduced to magnitudes first; the core then runs `w` iterations over
//! the combined `C:A:Q` register, where `A` accumulates the high half and
//! `Q` starts as the multiplier and ends as the low half:
//!
//! 1. If `Q`'s LSB is `1`, add the multiplicand `M` into `A` through the ALU.
//! 2. Shift `C:A:Q` right by one: the adder's carry-out enters `A`'s MSB and
//!    `A`'s old LSB enters `Q`'s MSB.
//!
//! When exactly one operand was negative, the `2w`-bit magnitude is negated
//! on the bits and split back into halves. Every iteration is recorded as a
//! [`MulStep`] snapshot; the record is returned to the caller and never read
//! back by the unit.

use tracing::trace;

use crate::common::error::{Result, ensure_width};
use crate::common::twos_complement::{is_negative, negate};
use crate::common::BitVector;
use crate::core::units::alu::arithmetic::add;
use crate::core::units::alu::shifts::shift_right_logical;

/// How an operand's MSB is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signedness {
    /// Two's complement.
    Signed,
    /// Plain binary magnitude.
    Unsigned,
}

/// What happened during one multiplier iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MulAction {
    /// Register state before the first iteration.
    Init,
    /// Multiplier LSB was `0`: shift only.
    Shift,
    /// Multiplier LSB was `1`: add the multiplicand, then shift.
    AddShift,
}

/// Snapshot of the `A:Q` register pair after an iteration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MulStep {
    /// Iteration number; `0` is the initial state.
    pub step: usize,
    /// What the iteration did.
    pub action: MulAction,
    /// Accumulator (high half).
    pub hi: BitVector,
    /// Multiplier register (low half).
    pub lo: BitVector,
}

/// A double-width product.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    /// Low `w` bits: the value `MUL` writes to `rd`.
    pub lo: BitVector,
    /// High `w` bits: the value `MULH*` writes to `rd`.
    pub hi: BitVector,
    /// `true` iff the product does not fit in a single `w`-bit value of the
    /// result's signedness.
    pub overflow: bool,
    /// Per-iteration register snapshots, initial state first.
    pub trace: Vec<MulStep>,
}

impl Product {
    /// The low half, i.e. the `MUL` destination value.
    pub const fn rd(&self) -> &BitVector {
        &self.lo
    }

    /// The whole `2w`-bit product, high half first.
    pub fn full(&self) -> BitVector {
        self.hi.concat(&self.lo)
    }
}

/// Signed × signed product (`MUL`/`MULH`).
///
/// # Errors
///
/// Fails with a width mismatch if the operands differ in width.
pub fn multiply(rs1: &BitVector, rs2: &BitVector) -> Result<Product> {
    multiply_with(rs1, Signedness::Signed, rs2, Signedness::Signed)
}

/// Unsigned × unsigned product (`MULHU`).
///
/// # Errors
///
/// Fails with a width mismatch if the operands differ in width.
pub fn multiply_unsigned(rs1: &BitVector, rs2: &BitVector) -> Result<Product> {
    multiply_with(rs1, Signedness::Unsigned, rs2, Signedness::Unsigned)
}

/// Signed × unsigned product (`MULHSU`).
///
/// # Errors
///
/// Fails with a width mismatch if the operands differ in width.
pub fn multiply_signed_unsigned(rs1: &BitVector, rs2: &BitVector) -> Result<Product> {
    multiply_with(rs1, Signedness::Signed, rs2, Signedness::Unsigned)
}

/// Multiplies with an explicit interpretation of each operand.
///
/// # Errors
///
/// Fails with a width mismatch if the operands differ in width.
pub fn multiply_with(
    rs1: &BitVector,
    rs1_sign: Signedness,
    rs2: &BitVector,
    rs2_sign: Signedness,
) -> Result<Product> {
    ensure_width(rs1.width(), rs2.width())?;
    let width = rs1.width();

    let negative_rs1 = rs1_sign == Signedness::Signed && is_negative(rs1);
    let negative_rs2 = rs2_sign == Signedness::Signed && is_negative(rs2);
    let negative = negative_rs1 ^ negative_rs2;

    // Negating the minimum value yields itself, which reads correctly as the
    // unsigned magnitude 2^(w-1).
    let m = if negative_rs1 { negate(rs1) } else { rs1.clone() };
    let mut q = if negative_rs2 { negate(rs2) } else { rs2.clone() };
    let mut a = BitVector::zeros(width);

    let mut steps = Vec::with_capacity(width + 1);
    steps.push(MulStep {
        step: 0,
        action: MulAction::Init,
        hi: a.clone(),
        lo: q.clone(),
    });

    for step in 1..=width {
        let mut carry = 0;
        let mut action = MulAction::Shift;
        if q.lsb() == 1 {
            let sum = add(&a, &m)?;
            a = sum.result;
            carry = u8::from(sum.flags.c);
            action = MulAction::AddShift;
        }

        let a_lsb = a.lsb();
        a = shift_right_logical(&a, 1);
        a.set(0, carry);
        q = shift_right_logical(&q, 1);
        q.set(0, a_lsb);

        trace!(step, ?action, hi = %a, lo = %q, "multiply iteration");
        steps.push(MulStep {
            step,
            action,
            hi: a.clone(),
            lo: q.clone(),
        });
    }

    let (hi, lo) = if negative {
        let full = negate(&a.concat(&q));
        (full.slice(0..width)?, full.slice(width..2 * width)?)
    } else {
        (a, q)
    };

    let signed_result = rs1_sign == Signedness::Signed || rs2_sign == Signedness::Signed;
    let overflow = if signed_result {
        hi.iter().any(|bit| bit != lo.msb())
    } else {
        !hi.is_zero()
    };

    Ok(Product {
        lo,
        hi,
        overflow,
        trace: steps,
    })
}
