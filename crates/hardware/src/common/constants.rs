//! Architectural constants shared by the arithmetic units.

/// Register width of the RV32 integer datapath.
pub const XLEN: usize = 32;

/// Total width of an IEEE-754 single-precision pattern.
pub const F32_WIDTH: usize = 32;

/// Index of the sign bit (index 0 is the MSB).
pub const F32_SIGN_INDEX: usize = 0;

/// First index of the biased exponent field.
pub const F32_EXP_START: usize = 1;

/// Width of the biased exponent field.
pub const F32_EXP_WIDTH: usize = 8;

/// First index of the stored mantissa field.
pub const F32_MANTISSA_START: usize = F32_EXP_START + F32_EXP_WIDTH;

/// Width of the stored mantissa field (implicit leading 1 excluded).
pub const F32_MANTISSA_WIDTH: usize = 23;

/// Width of the mantissa with the implicit leading 1 restored.
pub const F32_SIGNIFICAND_WIDTH: usize = F32_MANTISSA_WIDTH + 1;

/// Exponent bias for single precision.
pub const F32_BIAS: i32 = 127;

/// Biased exponent reserved for infinities and NaNs.
pub const F32_EXP_SPECIAL: i32 = 255;

/// Nibble value → upper-case hex digit.
pub const HEX_DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Nibble value → its four bits, MSB first.
pub const NIBBLE_BITS: [[u8; 4]; 16] = [
    [0, 0, 0, 0],
    [0, 0, 0, 1],
    [0, 0, 1, 0],
    [0, 0, 1, 1],
    [0, 1, 0, 0],
    [0, 1, 0, 1],
    [0, 1, 1, 0],
    [0, 1, 1, 1],
    [1, 0, 0, 0],
    [1, 0, 0, 1],
    [1, 0, 1, 0],
    [1, 0, 1, 1],
    [1, 1, 0, 0],
    [1, 1, 0, 1],
    [1, 1, 1, 0],
    [1, 1, 1, 1],
];

/// Maps a hex digit (either case) to its nibble value.
pub const fn hex_nibble(c: char) -> Option<usize> {
    match c {
        '0' => Some(0),
        '1' => Some(1),
        '2' => Some(2),
        '3' => Some(3),
        '4' => Some(4),
        '5' => Some(5),
        '6' => Some(6),
        '7' => Some(7),
        '8' => Some(8),
        '9' => Some(9),
        'A' | 'a' => Some(10),
        'B' | 'b' => Some(11),
        'C' | 'c' => Some(12),
        'D' | 'd' => Some(13),
        'E' | 'e' => Some(14),
        'F' | 'f' => Some(15),
        _ => None,
    }
}
