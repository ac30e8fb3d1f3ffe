//! Instruction Set Architecture (ISA) Definitions.
//!
//! Names the operations the execution units implement, organized by RISC-V
//! extension.
//!
//! # Extensions
//!
//! * `rv32i`: Base integer register-register operations.
//! * `rv32m`: Integer multiplication and division.
//! * `rv32f`: Single-precision add, subtract and multiply.

/// Operation enums and their assembler mnemonics.
pub mod op;

pub use self::op::{AluOp, FpOp};
