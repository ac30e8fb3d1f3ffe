//! Operation types for the instruction-level units.
//!
//! This module names the RISC-V operations the engine executes:
//! 1. **Integer:** RV32I register-register arithmetic, logic, shifts and comparisons.
//! 2. **Multiply/Divide:** The full RV32M family.
//! 3. **Floating-Point:** Single-precision add, subtract and multiply.
//!
//! Both enums parse from (and display as) their lower-case assembler mnemonics,
//! and deserialize from the same strings.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::ArithError;

/// Integer operations executed by [`Alu`](crate::core::units::alu::Alu).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AluOp {
    /// Integer addition.
    #[default]
    Add,
    /// Integer subtraction.
    Sub,
    /// Shift left logical.
    Sll,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Set less than (signed).
    Slt,
    /// Set less than unsigned.
    Sltu,
    /// Multiply (low half).
    Mul,
    /// Multiply high (signed × signed).
    Mulh,
    /// Multiply high (signed × unsigned).
    Mulhsu,
    /// Multiply high (unsigned × unsigned).
    Mulhu,
    /// Signed division.
    Div,
    /// Unsigned division.
    Divu,
    /// Signed remainder.
    Rem,
    /// Unsigned remainder.
    Remu,
}

impl AluOp {
    /// Every integer operation, in RV32I/RV32M table order.
    pub const ALL: [Self; 18] = [
        Self::Add,
        Self::Sub,
        Self::Sll,
        Self::Srl,
        Self::Sra,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Slt,
        Self::Sltu,
        Self::Mul,
        Self::Mulh,
        Self::Mulhsu,
        Self::Mulhu,
        Self::Div,
        Self::Divu,
        Self::Rem,
        Self::Remu,
    ];

    /// Assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Mul => "mul",
            Self::Mulh => "mulh",
            Self::Mulhsu => "mulhsu",
            Self::Mulhu => "mulhu",
            Self::Div => "div",
            Self::Divu => "divu",
            Self::Rem => "rem",
            Self::Remu => "remu",
        }
    }

    /// `true` for the M-extension multiplies.
    pub const fn is_multiply(self) -> bool {
        matches!(self, Self::Mul | Self::Mulh | Self::Mulhsu | Self::Mulhu)
    }

    /// `true` for the M-extension divides and remainders.
    pub const fn is_divide(self) -> bool {
        matches!(self, Self::Div | Self::Divu | Self::Rem | Self::Remu)
    }

    /// `true` for operations that report N/Z/C/V flags.
    pub const fn sets_flags(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for AluOp {
    type Err = ArithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic() == wanted)
            .ok_or_else(|| ArithError::UnknownMnemonic {
                mnemonic: s.to_owned(),
            })
    }
}

/// Single-precision operations executed by [`Fpu`](crate::core::units::fpu::Fpu).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum FpOp {
    /// `fadd.s`
    #[serde(rename = "fadd.s", alias = "fadd")]
    FAdd,
    /// `fsub.s`
    #[serde(rename = "fsub.s", alias = "fsub")]
    FSub,
    /// `fmul.s`
    #[serde(rename = "fmul.s", alias = "fmul")]
    FMul,
}

impl FpOp {
    /// Every floating-point operation.
    pub const ALL: [Self; 3] = [Self::FAdd, Self::FSub, Self::FMul];

    /// Assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::FAdd => "fadd.s",
            Self::FSub => "fsub.s",
            Self::FMul => "fmul.s",
        }
    }
}

impl fmt::Display for FpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for FpOp {
    type Err = ArithError;

    /// Accepts `fadd.s` as well as the bare `fadd`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|op| {
                let full = op.mnemonic();
                full == wanted || full.strip_suffix(".s") == Some(wanted.as_str())
            })
            .ok_or_else(|| ArithError::UnknownMnemonic {
                mnemonic: s.to_owned(),
            })
    }
}
