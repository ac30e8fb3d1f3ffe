//! Configured entry point over the arithmetic units.
//!
//! An [`Engine`] fixes the register width and the step-record retention once,
//! then forwards each call to the unit that implements it. It holds nothing
//! but its validated [`Config`], so every method is a pure function of its
//! arguments and a single engine can be shared freely.

use tracing::debug;

use crate::common::error::{Result, ensure_width};
use crate::common::twos_complement::{self, Encoded};
use crate::common::BitVector;
use crate::config::{Config, TraceConfig};
use crate::core::units::alu::Alu;
use crate::core::units::alu::arithmetic::Flags;
use crate::core::units::fpu::Fpu;
use crate::core::units::fpu::arithmetic::FloatResult;
use crate::core::units::fpu::float32::{self, Packed, Unpacked};
use crate::core::units::mdu::{Division, MduTrace, Product, divide, multiply};
use crate::isa::op::{AluOp, FpOp};

/// Result of an integer instruction executed through an [`Engine`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntOutcome {
    /// Destination register value.
    pub rd: BitVector,
    /// N/Z/C/V flags for `add` and `sub`.
    pub flags: Option<Flags>,
    /// Retained step records for multiplies and divides.
    pub trace: Option<MduTrace>,
}

/// Arithmetic engine bound to one register width.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: Config,
}

impl Engine {
    /// Creates an engine from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::Config`](crate::common::ArithError::Config) if
    /// the configuration fails validation.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        debug!(xlen = config.xlen, trace = ?config.trace, "engine configured");
        Ok(Self { config })
    }

    /// The engine's configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Register width in bits.
    pub const fn xlen(&self) -> usize {
        self.config.xlen
    }

    fn check(&self, bits: &BitVector) -> Result<()> {
        ensure_width(self.config.xlen, bits.width())
    }

    /// Encodes a host integer at the register width.
    ///
    /// # Errors
    ///
    /// Never fails for a validated configuration; the signature mirrors
    /// [`twos_complement::encode`].
    pub fn encode(&self, value: i64) -> Result<Encoded> {
        twos_complement::encode(value, self.config.xlen)
    }

    /// Decodes a register-width pattern as a signed integer.
    ///
    /// # Errors
    ///
    /// Fails with a width mismatch unless `bits` is `xlen` bits wide.
    pub fn decode(&self, bits: &BitVector) -> Result<i64> {
        self.check(bits)?;
        Ok(twos_complement::decode(bits))
    }

    /// Executes an integer instruction.
    ///
    /// # Errors
    ///
    /// Fails with a width mismatch unless both operands are `xlen` bits wide.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvbits_core::engine::Engine;
    /// use rvbits_core::isa::op::AluOp;
    ///
    /// let engine = Engine::default();
    /// let a = engine.encode(0x7FFF_FFFF).unwrap().bits;
    /// let b = engine.encode(1).unwrap().bits;
    ///
    /// let outcome = engine.execute(AluOp::Add, &a, &b).unwrap();
    /// assert_eq!(outcome.rd.to_hex(), "0x80000000");
    /// assert!(outcome.flags.unwrap().v);
    /// ```
    pub fn execute(&self, op: AluOp, rs1: &BitVector, rs2: &BitVector) -> Result<IntOutcome> {
        self.check(rs1)?;
        self.check(rs2)?;
        let execution = Alu::execute_full(op, rs1, rs2)?;
        let trace = execution.trace.and_then(|mut trace| {
            let TraceConfig { enabled, max_steps } = self.config.trace;
            if !enabled {
                return None;
            }
            if let Some(max) = max_steps {
                trace.truncate(max);
            }
            Some(trace)
        });

        Ok(IntOutcome {
            rd: execution.rd,
            flags: execution.flags,
            trace,
        })
    }

    /// Signed multiply returning both product halves and the overflow flag.
    ///
    /// # Errors
    ///
    /// Fails with a width mismatch unless both operands are `xlen` bits wide.
    pub fn multiply(&self, rs1: &BitVector, rs2: &BitVector) -> Result<Product> {
        self.check(rs1)?;
        self.check(rs2)?;
        let mut product = multiply::multiply(rs1, rs2)?;
        self.retain(&mut product.trace);
        Ok(product)
    }

    /// Signed divide returning quotient, remainder and any special case.
    ///
    /// # Errors
    ///
    /// Fails with a width mismatch unless both operands are `xlen` bits wide.
    pub fn divide(&self, dividend: &BitVector, divisor: &BitVector) -> Result<Division> {
        self.check(dividend)?;
        self.check(divisor)?;
        let mut division = divide::divide(dividend, divisor)?;
        self.retain(&mut division.trace);
        Ok(division)
    }

    /// Executes a single-precision instruction.
    ///
    /// Float operands are always 32 bits wide, independent of `xlen`.
    ///
    /// # Errors
    ///
    /// Fails with a width mismatch unless both operands are 32 bits wide.
    pub fn execute_fp(&self, op: FpOp, a: &BitVector, b: &BitVector) -> Result<FloatResult> {
        let mut result = Fpu::execute_full(op, a, b)?;
        self.retain(&mut result.trace);
        Ok(result)
    }

    /// Packs a host value into a single-precision pattern.
    pub fn pack(&self, value: f64) -> Packed {
        float32::pack(value)
    }

    /// Unpacks a single-precision pattern.
    ///
    /// # Errors
    ///
    /// Fails with a width mismatch unless `bits` is 32 bits wide.
    pub fn unpack(&self, bits: &BitVector) -> Result<Unpacked> {
        float32::unpack(bits)
    }

    /// Applies the trace retention policy to a step record.
    fn retain<T>(&self, steps: &mut Vec<T>) {
        let TraceConfig { enabled, max_steps } = self.config.trace;
        if !enabled {
            steps.clear();
        } else if let Some(max) = max_steps {
            steps.truncate(max);
        }
    }
}
