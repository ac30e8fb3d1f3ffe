//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer datapath on bit vectors. Every
//! operation is built from gates and full adders; host arithmetic never
//! touches an encoded value.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Full adder, ripple-carry Add/Sub and N/Z/C/V flags
//! - [`logic`]:      And, Or, Xor, Not, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra and the register-driven barrel shifter
//!
//! [`Alu::execute`] is the RV32IM instruction-level entry point; multiplies
//! and divides are delegated to the [MDU](crate::core::units::mdu).

/// Ripple-carry addition and subtraction.
pub mod arithmetic;

/// Bitwise logical and comparison operations.
pub mod logic;

/// Shift operations.
pub mod shifts;

use crate::common::BitVector;
use crate::common::error::{Result, ensure_width};
use crate::core::units::mdu::{MduTrace, divide, multiply};
use crate::isa::op::AluOp;

use self::arithmetic::Flags;
use self::shifts::{ShiftKind, barrel_shift};

/// Everything an integer instruction produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Execution {
    /// Destination register value.
    pub rd: BitVector,
    /// Condition flags (`add`/`sub` only).
    pub flags: Option<Flags>,
    /// Algorithm steps (multiplies and divides only).
    pub trace: Option<MduTrace>,
}

impl Execution {
    const fn value(rd: BitVector) -> Self {
        Self {
            rd,
            flags: None,
            trace: None,
        }
    }
}

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// Implements the RISC-V RV32I register-register operations and, through the
/// MDU, the RV32M multiply/divide family, on operands of any (equal) width.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer operation and returns the destination value.
    ///
    /// # Arguments
    ///
    /// * `op`  - The operation to perform
    /// * `rs1` - First operand
    /// * `rs2` - Second operand (the shift amount for shifts)
    ///
    /// # Errors
    ///
    /// Fails with a width mismatch if `rs1` and `rs2` differ in width.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvbits_core::common::twos_complement::{decode, encode};
    /// use rvbits_core::core::units::alu::Alu;
    /// use rvbits_core::isa::op::AluOp;
    ///
    /// let a = encode(-7, 32).unwrap().bits;
    /// let b = encode(2, 32).unwrap().bits;
    /// assert_eq!(decode(&Alu::execute(AluOp::Add, &a, &b).unwrap()), -5);
    /// assert_eq!(decode(&Alu::execute(AluOp::Sra, &a, &b).unwrap()), -2);
    /// assert_eq!(decode(&Alu::execute(AluOp::Rem, &a, &b).unwrap()), -1);
    /// ```
    pub fn execute(op: AluOp, rs1: &BitVector, rs2: &BitVector) -> Result<BitVector> {
        Ok(Self::execute_full(op, rs1, rs2)?.rd)
    }

    /// Executes an integer operation and returns the value with its flags and trace.
    ///
    /// # Errors
    ///
    /// Fails with a width mismatch if `rs1` and `rs2` differ in width.
    pub fn execute_full(op: AluOp, rs1: &BitVector, rs2: &BitVector) -> Result<Execution> {
        ensure_width(rs1.width(), rs2.width())?;

        let execution = match op {
            AluOp::Add | AluOp::Sub => {
                let out = if op == AluOp::Add {
                    arithmetic::add(rs1, rs2)?
                } else {
                    arithmetic::sub(rs1, rs2)?
                };
                Execution {
                    rd: out.result,
                    flags: Some(out.flags),
                    trace: None,
                }
            }

            AluOp::Sll => Execution::value(barrel_shift(rs1, rs2, ShiftKind::LeftLogical)),
            AluOp::Srl => Execution::value(barrel_shift(rs1, rs2, ShiftKind::RightLogical)),
            AluOp::Sra => Execution::value(barrel_shift(rs1, rs2, ShiftKind::RightArithmetic)),

            AluOp::And => Execution::value(logic::and(rs1, rs2)?),
            AluOp::Or => Execution::value(logic::or(rs1, rs2)?),
            AluOp::Xor => Execution::value(logic::xor(rs1, rs2)?),
            AluOp::Slt => Execution::value(logic::set_less_than(rs1, rs2)?),
            AluOp::Sltu => Execution::value(logic::set_less_than_unsigned(rs1, rs2)?),

            AluOp::Mul | AluOp::Mulh | AluOp::Mulhsu | AluOp::Mulhu => {
                let product = match op {
                    AluOp::Mulhsu => multiply::multiply_signed_unsigned(rs1, rs2)?,
                    AluOp::Mulhu => multiply::multiply_unsigned(rs1, rs2)?,
                    _ => multiply::multiply(rs1, rs2)?,
                };
                let rd = if op == AluOp::Mul { product.lo } else { product.hi };
                Execution {
                    rd,
                    flags: None,
                    trace: Some(MduTrace::Multiply(product.trace)),
                }
            }

            AluOp::Div | AluOp::Divu | AluOp::Rem | AluOp::Remu => {
                let division = if matches!(op, AluOp::Div | AluOp::Rem) {
                    divide::divide(rs1, rs2)?
                } else {
                    divide::divide_unsigned(rs1, rs2)?
                };
                let rd = if matches!(op, AluOp::Div | AluOp::Divu) {
                    division.quotient
                } else {
                    division.remainder
                };
                Execution {
                    rd,
                    flags: None,
                    trace: Some(MduTrace::Divide(division.trace)),
                }
            }
        };

        Ok(execution)
    }
}
