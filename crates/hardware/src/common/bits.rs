//! Fixed-width bit vectors.
//!
//! [`BitVector`] is the value type passed between every unit of the engine.
//! Index 0 is the most-significant bit; the least-significant bit lives at
//! `width - 1`. Every stored element is exactly `0` or `1`: setters coerce any
//! non-zero input to `1`. Vectors are plain values, cloning copies the bits,
//! so no two vectors ever alias.
//!
//! Text renderings are the only display surface the engine offers:
//! - **Hex:** `0x` followed by upper-case nibble digits, left-padded with zero
//!   bits to a multiple of four.
//! - **Binary:** `0`/`1` digits grouped in fours with `_` separators.

use std::fmt;
use std::ops::{Index, Range};
use std::str::FromStr;

use super::constants::{HEX_DIGITS, NIBBLE_BITS, hex_nibble};
use super::error::{ArithError, Result};

/// An ordered, fixed-width sequence of bits, MSB first.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitVector {
    bits: Vec<u8>,
}

impl BitVector {
    /// Creates a zero-filled vector of `width` bits.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::Construction`] if `width` is zero.
    pub fn new(width: usize) -> Result<Self> {
        if width == 0 {
            return Err(ArithError::Construction {
                reason: "width must be at least one bit",
            });
        }
        Ok(Self::zeros(width))
    }

    /// Creates a vector from an explicit bit sequence, MSB first.
    ///
    /// The sequence is copied; any non-zero element is stored as `1`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::Construction`] if `bits` is empty.
    pub fn from_bits(bits: &[u8]) -> Result<Self> {
        if bits.is_empty() {
            return Err(ArithError::Construction {
                reason: "bit sequence is empty",
            });
        }
        Ok(Self {
            bits: bits.iter().map(|&b| u8::from(b != 0)).collect(),
        })
    }

    /// Creates a vector from booleans, MSB first.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::Construction`] if `bits` is empty.
    pub fn from_bools(bits: &[bool]) -> Result<Self> {
        if bits.is_empty() {
            return Err(ArithError::Construction {
                reason: "bit sequence is empty",
            });
        }
        Ok(Self {
            bits: bits.iter().map(|&b| u8::from(b)).collect(),
        })
    }

    /// All-zero vector. Callers guarantee a non-zero width.
    pub(crate) fn zeros(width: usize) -> Self {
        Self {
            bits: vec![0; width],
        }
    }

    /// All-ones vector (the two's-complement `-1`). Callers guarantee a non-zero width.
    pub(crate) fn ones(width: usize) -> Self {
        Self {
            bits: vec![1; width],
        }
    }

    /// Wraps an already-normalized bit buffer.
    pub(crate) fn from_raw(bits: Vec<u8>) -> Self {
        debug_assert!(!bits.is_empty());
        debug_assert!(bits.iter().all(|&b| b <= 1));
        Self { bits }
    }

    /// Number of bits.
    #[inline]
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Number of bits (alias of [`width`](Self::width)).
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns the bit at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.bits.get(index).copied()
    }

    /// Returns the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.width()`.
    #[inline]
    pub fn bit(&self, index: usize) -> u8 {
        self.bits[index]
    }

    /// Stores `value` at `index`, coercing any non-zero value to `1`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.width()`.
    #[inline]
    pub fn set(&mut self, index: usize, value: u8) {
        self.bits[index] = u8::from(value != 0);
    }

    /// The most-significant (sign) bit.
    #[inline]
    pub fn msb(&self) -> u8 {
        self.bits[0]
    }

    /// The least-significant bit.
    #[inline]
    pub fn lsb(&self) -> u8 {
        self.bits[self.bits.len() - 1]
    }

    /// `true` when every bit is `0`.
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// `true` when every bit is `1`.
    pub fn is_all_ones(&self) -> bool {
        self.bits.iter().all(|&b| b == 1)
    }

    /// The bits as a slice, MSB first.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    /// Iterates over the bits, MSB first.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits.iter().copied()
    }

    /// Copies out the bits in `range` as a new vector.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::Construction`] if the range is empty.
    ///
    /// # Panics
    ///
    /// Panics if the range extends past the end of the vector.
    pub fn slice(&self, range: Range<usize>) -> Result<Self> {
        Self::from_bits(&self.bits[range])
    }

    /// Returns `self` followed by `low`, i.e. `self` becomes the high-order part.
    pub fn concat(&self, low: &Self) -> Self {
        let mut bits = Vec::with_capacity(self.width() + low.width());
        bits.extend_from_slice(&self.bits);
        bits.extend_from_slice(&low.bits);
        Self { bits }
    }

    /// Renders as `0x` + upper-case hex digits.
    ///
    /// Widths that are not a multiple of four are left-padded with zero bits first.
    pub fn to_hex(&self) -> String {
        let pad = (4 - self.width() % 4) % 4;
        let mut padded = vec![0u8; pad];
        padded.extend_from_slice(&self.bits);

        let mut out = String::with_capacity(2 + padded.len() / 4);
        out.push_str("0x");
        for nibble in padded.chunks(4) {
            let value = usize::from(nibble[0]) * 8
                + usize::from(nibble[1]) * 4
                + usize::from(nibble[2]) * 2
                + usize::from(nibble[3]);
            out.push(HEX_DIGITS[value]);
        }
        out
    }

    /// Renders as binary digits grouped in fours from the MSB, joined by `_`.
    pub fn to_bin(&self) -> String {
        self.bits
            .chunks(4)
            .map(|group| group.iter().map(|&b| if b == 1 { '1' } else { '0' }).collect::<String>())
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Parses a hex literal; the result is four bits per digit.
    ///
    /// An optional `0x`/`0X` prefix is accepted and digits are case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::Parse`] on any non-hex character and
    /// [`ArithError::EmptyLiteral`] when no digits remain.
    pub fn from_hex(text: &str) -> Result<Self> {
        let (offset, digits) = match text.get(..2) {
            Some("0x" | "0X") => (2, &text[2..]),
            _ => (0, text),
        };

        let mut bits = Vec::with_capacity(digits.len() * 4);
        for (i, c) in digits.chars().enumerate() {
            let nibble = hex_nibble(c).ok_or_else(|| ArithError::Parse {
                input: text.to_owned(),
                position: offset + i,
                found: c,
            })?;
            bits.extend_from_slice(&NIBBLE_BITS[nibble]);
        }

        if bits.is_empty() {
            return Err(ArithError::EmptyLiteral {
                input: text.to_owned(),
            });
        }
        Ok(Self { bits })
    }

    /// Parses a hex literal into exactly `width` bits.
    ///
    /// Shorter literals are zero-extended; longer ones keep their low `width` bits.
    ///
    /// # Errors
    ///
    /// Propagates [`from_hex`](Self::from_hex) errors and rejects a zero `width`.
    pub fn from_hex_width(text: &str, width: usize) -> Result<Self> {
        if width == 0 {
            return Err(ArithError::Construction {
                reason: "width must be at least one bit",
            });
        }
        let parsed = Self::from_hex(text)?;
        let have = parsed.width();
        if have >= width {
            return Ok(Self {
                bits: parsed.bits[have - width..].to_vec(),
            });
        }
        let mut bits = vec![0u8; width - have];
        bits.extend_from_slice(&parsed.bits);
        Ok(Self { bits })
    }

    /// Parses a binary literal.
    ///
    /// `_` and space separators are ignored; every other character must be `0` or `1`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::Parse`] on any other character and
    /// [`ArithError::EmptyLiteral`] when no digits remain.
    pub fn from_binary(text: &str) -> Result<Self> {
        let mut bits = Vec::with_capacity(text.len());
        for (position, c) in text.chars().enumerate() {
            match c {
                '_' | ' ' => {}
                '0' => bits.push(0),
                '1' => bits.push(1),
                found => {
                    return Err(ArithError::Parse {
                        input: text.to_owned(),
                        position,
                        found,
                    });
                }
            }
        }

        if bits.is_empty() {
            return Err(ArithError::EmptyLiteral {
                input: text.to_owned(),
            });
        }
        Ok(Self { bits })
    }
}

impl Index<usize> for BitVector {
    type Output = u8;

    #[inline]
    fn index(&self, index: usize) -> &u8 {
        &self.bits[index]
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitVector<{}>({} | {})", self.width(), self.to_hex(), self.to_bin())
    }
}

impl FromStr for BitVector {
    type Err = ArithError;

    /// `0x`-prefixed text is hex, `0b`-prefixed or bare text is binary.
    fn from_str(s: &str) -> Result<Self> {
        match s.get(..2) {
            Some("0x" | "0X") => Self::from_hex(s),
            Some("0b" | "0B") => Self::from_binary(&s[2..]),
            _ => Self::from_binary(s),
        }
    }
}
