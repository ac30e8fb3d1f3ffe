//! Restoring divider.
//!
//! Two outputs are fixed by the RISC-V M extension and are checked before the
//! general algorithm runs; neither raises an error:
//! - **Divide by zero:** quotient is all ones (`-1`), remainder is the dividend.
//! - **Signed overflow** (`MIN / -1`): quotient is `MIN`, remainder is `0`.
//!
//! Otherwise operands are reduced to magnitudes and `w` iterations run over the
//! combined `R:Q` register: shift left by one (`R` receives `Q`'s MSB, `Q`'s
//! new LSB is provisionally `0`), try `R - M` through the ALU, and keep the
//! difference with a quotient bit of `1` only when the subtractor reports no
//! borrow. Signs are fixed up last: the quotient takes the XOR of the operand
//! signs (truncation toward zero) and a non-zero remainder takes the
//! dividend's sign.

use tracing::{debug, trace};

use crate::common::error::{Result, ensure_width};
use crate::common::twos_complement::{is_negative, negate};
use crate::common::BitVector;
use crate::core::units::alu::arithmetic::sub;
use crate::core::units::alu::shifts::shift_left_logical;

/// Which architecturally defined special case produced the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DivSpecialCase {
    /// The divisor was zero.
    DivideByZero,
    /// Signed `MIN / -1`.
    SignedOverflow,
}

/// What happened at one point of the division.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DivAction {
    /// Register state before the first iteration.
    Init,
    /// `R:Q` shifted left; `R - M` attempted.
    ShiftSubtract,
    /// No borrow: difference kept, quotient bit set.
    SetQuotientBit,
    /// Borrow: remainder restored, quotient bit left clear.
    Restore,
    /// Short-circuited by a special case.
    Special(DivSpecialCase),
}

/// Snapshot of the `R:Q` register pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivStep {
    /// Iteration number; `0` is the initial state or a special case.
    pub step: usize,
    /// What happened.
    pub action: DivAction,
    /// Partial remainder.
    pub remainder: BitVector,
    /// Quotient register.
    pub quotient: BitVector,
}

/// Quotient and remainder of a division.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Division {
    /// The `DIV`/`DIVU` destination value.
    pub quotient: BitVector,
    /// The `REM`/`REMU` destination value.
    pub remainder: BitVector,
    /// Set when an architectural special case decided the result.
    pub special: Option<DivSpecialCase>,
    /// Per-iteration snapshots in order.
    pub trace: Vec<DivStep>,
}

impl Division {
    fn special(case: DivSpecialCase, quotient: BitVector, remainder: BitVector) -> Self {
        debug!(?case, quotient = %quotient, remainder = %remainder, "division special case");
        let trace = vec![DivStep {
            step: 0,
            action: DivAction::Special(case),
            remainder: remainder.clone(),
            quotient: quotient.clone(),
        }];
        Self {
            quotient,
            remainder,
            special: Some(case),
            trace,
        }
    }
}

/// `true` for the minimum signed value: sign bit set, every other bit clear.
fn is_min_value(bits: &BitVector) -> bool {
    bits.msb() == 1 && bits.iter().skip(1).all(|b| b == 0)
}

/// Signed division (`DIV`/`REM`), truncating toward zero.
///
/// # Errors
///
/// Fails with a width mismatch if the operands differ in width.
pub fn divide(dividend: &BitVector, divisor: &BitVector) -> Result<Division> {
    ensure_width(dividend.width(), divisor.width())?;
    let width = dividend.width();

    if divisor.is_zero() {
        return Ok(Division::special(
            DivSpecialCase::DivideByZero,
            BitVector::ones(width),
            dividend.clone(),
        ));
    }
    if is_min_value(dividend) && divisor.is_all_ones() {
        return Ok(Division::special(
            DivSpecialCase::SignedOverflow,
            dividend.clone(),
            BitVector::zeros(width),
        ));
    }

    let negative_dividend = is_negative(dividend);
    let negative_divisor = is_negative(divisor);
    let quotient_negative = negative_dividend ^ negative_divisor;

    let q = if negative_dividend { negate(dividend) } else { dividend.clone() };
    let m = if negative_divisor { negate(divisor) } else { divisor.clone() };

    let mut steps = Vec::with_capacity(2 * width + 1);
    let (quotient, remainder) = restoring(q, &m, &mut steps)?;

    let quotient = if quotient_negative { negate(&quotient) } else { quotient };
    let remainder = if negative_dividend && !remainder.is_zero() {
        negate(&remainder)
    } else {
        remainder
    };

    Ok(Division {
        quotient,
        remainder,
        special: None,
        trace: steps,
    })
}

/// Unsigned division (`DIVU`/`REMU`).
///
/// Division by zero yields the same outputs as the signed case; there is no
/// overflow case.
///
/// # Errors
///
/// Fails with a width mismatch if the operands differ in width.
pub fn divide_unsigned(dividend: &BitVector, divisor: &BitVector) -> Result<Division> {
    ensure_width(dividend.width(), divisor.width())?;

    if divisor.is_zero() {
        return Ok(Division::special(
            DivSpecialCase::DivideByZero,
            BitVector::ones(dividend.width()),
            dividend.clone(),
        ));
    }

    let mut steps = Vec::with_capacity(2 * dividend.width() + 1);
    let (quotient, remainder) = restoring(dividend.clone(), divisor, &mut steps)?;
    Ok(Division {
        quotient,
        remainder,
        special: None,
        trace: steps,
    })
}

/// Restoring division of two magnitudes, returning `(quotient, remainder)`.
fn restoring(
    mut q: BitVector,
    m: &BitVector,
    steps: &mut Vec<DivStep>,
) -> Result<(BitVector, BitVector)> {
    let width = q.width();
    let lsb = width - 1;
    let mut r = BitVector::zeros(width);

    steps.push(DivStep {
        step: 0,
        action: DivAction::Init,
        remainder: r.clone(),
        quotient: q.clone(),
    });

    for step in 1..=width {
        // A set bit shifted out of R means the true partial remainder is at
        // least 2^w, which always exceeds an unsigned divisor.
        let r_overflow = r.msb();
        let q_msb = q.msb();
        r = shift_left_logical(&r, 1);
        r.set(lsb, q_msb);
        q = shift_left_logical(&q, 1);

        let attempt = sub(&r, m)?;
        steps.push(DivStep {
            step,
            action: DivAction::ShiftSubtract,
            remainder: r.clone(),
            quotient: q.clone(),
        });

        let action = if attempt.flags.c || r_overflow == 1 {
            r = attempt.result;
            q.set(lsb, 1);
            DivAction::SetQuotientBit
        } else {
            DivAction::Restore
        };

        trace!(step, ?action, remainder = %r, quotient = %q, "divide iteration");
        steps.push(DivStep {
            step,
            action,
            remainder: r.clone(),
            quotient: q.clone(),
        });
    }

    Ok((q, r))
}
