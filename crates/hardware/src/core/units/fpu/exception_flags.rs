//! Floating-point exception (accrued) flags.
//!
//! The unit raises four of the five RISC-V `fcsr.fflags` bits. Divide by
//! zero has no producer here (there is no float divide), so its bit is never set:
//!
//! | Bit | Flag | Description         |
//! |-----|------|---------------------|
//! |  4  | NV   | Invalid Operation   |
//! |  2  | OF   | Overflow            |
//! |  1  | UF   | Underflow           |
//! |  0  | NX   | Inexact             |

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Floating-point exception flags (RISC-V `fcsr.fflags` layout).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FpFlags(u8);

impl FpFlags {
    /// No exceptions raised.
    pub const NONE: Self = Self(0);
    /// Invalid Operation.
    pub const NV: Self = Self(1 << 4);
    /// Overflow.
    pub const OF: Self = Self(1 << 2);
    /// Underflow.
    pub const UF: Self = Self(1 << 1);
    /// Inexact.
    pub const NX: Self = Self(1 << 0);

    /// Returns the raw flag value in `fflags` bit positions.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if no flags are set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the specified flag is set.
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for FpFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for FpFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for FpFlags {
    /// Renders the raised flags as `NV|NX`, or `-` when none are set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        let names = [(Self::NV, "NV"), (Self::OF, "OF"), (Self::UF, "UF"), (Self::NX, "NX")];
        let raised: Vec<&str> = names
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&raised.join("|"))
    }
}
