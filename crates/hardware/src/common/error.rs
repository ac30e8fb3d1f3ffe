//! Error definitions for the arithmetic engine.
//!
//! Only malformed *requests* are errors. Every numeric condition the units can
//! reach (encode overflow, division by zero, `INT_MIN / -1`, infinities, NaN,
//! flush-to-zero) is a defined output reported through flags instead:
//! 1. **Width errors:** Operands whose widths must agree but do not.
//! 2. **Parse errors:** Hex or binary literals containing invalid characters.
//! 3. **Construction errors:** Bit vectors requested with no bits at all.
//! 4. **Configuration errors:** Engine configuration that is malformed or out of range.

use thiserror::Error;

/// Errors raised by the arithmetic engine.
#[derive(Debug, Error)]
pub enum ArithError {
    /// Two operands (or an operand and a fixed-format unit) disagree on width.
    #[error("width mismatch: expected {expected} bits, found {found}")]
    WidthMismatch {
        /// Width required by the operation.
        expected: usize,
        /// Width actually supplied.
        found: usize,
    },

    /// A hex or binary literal contains a character outside its alphabet.
    #[error("invalid character {found:?} at position {position} in literal {input:?}")]
    Parse {
        /// The literal as handed to the parser.
        input: String,
        /// Character offset of the offending character within `input`.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// A literal contains no digits once prefixes and separators are removed.
    #[error("literal {input:?} contains no digits")]
    EmptyLiteral {
        /// The literal as handed to the parser.
        input: String,
    },

    /// An instruction mnemonic is not one the engine implements.
    #[error("unknown mnemonic {mnemonic:?}")]
    UnknownMnemonic {
        /// The rejected mnemonic.
        mnemonic: String,
    },

    /// A bit vector was requested with neither a usable width nor any bits.
    #[error("cannot construct bit vector: {reason}")]
    Construction {
        /// Why construction was rejected.
        reason: &'static str,
    },

    /// Configuration values are outside the supported range.
    #[error("invalid configuration: {reason}")]
    Config {
        /// Description of the rejected setting.
        reason: String,
    },

    /// Configuration text could not be deserialized.
    #[error("malformed configuration: {0}")]
    ConfigSyntax(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("cannot read configuration: {0}")]
    ConfigIo(#[from] std::io::Error),
}

impl ArithError {
    /// Returns `true` for either parse-error category.
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::EmptyLiteral { .. })
    }
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, ArithError>;

/// Fails with [`ArithError::WidthMismatch`] unless both widths agree.
#[inline]
pub(crate) fn ensure_width(expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(ArithError::WidthMismatch { expected, found })
    }
}
