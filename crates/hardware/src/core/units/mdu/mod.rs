//! Multiply/Divide Unit (MDU).
//!
//! Implements the RV32M operations on bit vectors:
//! - [`multiply`]: shift-and-add multiplier (`MUL`, `MULH`, `MULHSU`, `MULHU`).
//! - [`divide`]:   restoring divider (`DIV`, `DIVU`, `REM`, `REMU`).

/// Shift-and-add multiplication.
pub mod multiply;

/// Restoring division.
pub mod divide;

pub use self::divide::{DivAction, DivSpecialCase, DivStep, Division};
pub use self::multiply::{MulAction, MulStep, Product, Signedness};

/// Algorithm steps recorded by an MDU operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MduTrace {
    /// Snapshots from the multiplier.
    Multiply(Vec<MulStep>),
    /// Snapshots from the divider.
    Divide(Vec<DivStep>),
}

impl MduTrace {
    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        match self {
            Self::Multiply(steps) => steps.len(),
            Self::Divide(steps) => steps.len(),
        }
    }

    /// `true` when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keeps at most the first `max` steps.
    pub fn truncate(&mut self, max: usize) {
        match self {
            Self::Multiply(steps) => steps.truncate(max),
            Self::Divide(steps) => steps.truncate(max),
        }
    }
}
