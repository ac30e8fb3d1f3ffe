//! # Two's-Complement Codec Tests
//!
//! Encoding with clamping, decoding, negation and width extension.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvbits_core::common::BitVector;
use rvbits_core::common::twos_complement::{
    add_one, decode, decode_unsigned, encode, encode_unsigned, invert, is_negative, negate,
    sign_extend, zero_extend,
};

// ─── Constants ───────────────────────────────────────────────────────────────

const I32_MAX: i64 = i32::MAX as i64;
const I32_MIN: i64 = i32::MIN as i64;

// ═════════════════════════════════════════════════════════════════════════════
//  Encode
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case(0, "0x00000000")]
#[case(1, "0x00000001")]
#[case(-1, "0xFFFFFFFF")]
#[case(13, "0x0000000D")]
#[case(-13, "0xFFFFFFF3")]
#[case(I32_MAX, "0x7FFFFFFF")]
#[case(I32_MIN, "0x80000000")]
fn encode_32_bit_vectors(#[case] value: i64, #[case] hex: &str) {
    let encoded = encode(value, 32).unwrap();
    assert_eq!(encoded.hex, hex);
    assert!(!encoded.overflow);
    assert_eq!(encoded.bits.width(), 32);
}

#[test]
fn encode_renders_grouped_binary() {
    let encoded = encode(-13, 8).unwrap();
    assert_eq!(encoded.bin, "1111_0011");
    assert_eq!(encoded.hex, "0xF3");
}

#[test]
fn encode_clamps_above_range() {
    let encoded = encode(1 << 31, 32).unwrap();
    assert!(encoded.overflow);
    assert_eq!(encoded.hex, "0x7FFFFFFF");
}

#[test]
fn encode_clamps_below_range() {
    let encoded = encode(-(1 << 31) - 1, 32).unwrap();
    assert!(encoded.overflow);
    assert_eq!(encoded.hex, "0x80000000");
}

#[test]
fn encode_full_host_width_never_overflows() {
    let encoded = encode(i64::MIN, 64).unwrap();
    assert!(!encoded.overflow);
    assert_eq!(decode(&encoded.bits), i64::MIN);
}

#[test]
fn encode_rejects_zero_width() {
    assert!(encode(5, 0).is_err());
    assert!(encode_unsigned(5, 0).is_err());
}

#[test]
fn one_bit_range_is_minus_one_to_zero() {
    assert_eq!(decode(&encode(-1, 1).unwrap().bits), -1);
    assert!(encode(1, 1).unwrap().overflow);
}

// ═════════════════════════════════════════════════════════════════════════════
//  Decode
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case("0x80000000", I32_MIN)]
#[case("0x7FFFFFFF", I32_MAX)]
#[case("0xFFFFFFFE", -2)]
#[case("0x0000002A", 42)]
#[case("0xF", -1)]
#[case("0x8", -8)]
fn decode_vectors(#[case] hex: &str, #[case] expected: i64) {
    let bits = BitVector::from_hex(hex).unwrap();
    assert_eq!(decode(&bits), expected);
}

#[test]
fn unsigned_codec_reads_msb_as_magnitude() {
    let bits = encode_unsigned(0xFFFF_FFFF, 32).unwrap();
    assert_eq!(bits.to_hex(), "0xFFFFFFFF");
    assert_eq!(decode_unsigned(&bits), 0xFFFF_FFFF);
    assert_eq!(decode(&bits), -1);
}

#[test]
fn encode_unsigned_keeps_low_bits() {
    assert_eq!(encode_unsigned(0x1FF, 8).unwrap().to_hex(), "0xFF");
}

// ═════════════════════════════════════════════════════════════════════════════
//  Negation and extension
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn negate_is_invert_plus_one() {
    let five = encode(5, 8).unwrap().bits;
    assert_eq!(invert(&five).to_hex(), "0xFA");
    assert_eq!(add_one(&invert(&five)), negate(&five));
    assert_eq!(decode(&negate(&five)), -5);
}

#[test]
fn negate_min_value_is_itself() {
    let min = encode(-128, 8).unwrap().bits;
    assert_eq!(negate(&min), min);
    assert!(is_negative(&min));
}

#[test]
fn negate_zero_is_zero() {
    assert!(negate(&BitVector::new(16).unwrap()).is_zero());
}

#[test]
fn sign_extend_replicates_msb() {
    let neg = encode(-3, 4).unwrap().bits;
    let wide = sign_extend(&neg, 8);
    assert_eq!(wide.to_hex(), "0xFD");
    assert_eq!(decode(&wide), -3);
    assert_eq!(zero_extend(&neg, 8).to_hex(), "0x0D");
}

#[test]
fn extension_to_narrower_width_is_a_copy() {
    let bits = encode(100, 16).unwrap().bits;
    assert_eq!(sign_extend(&bits, 8), bits);
    assert_eq!(zero_extend(&bits, 16), bits);
}
