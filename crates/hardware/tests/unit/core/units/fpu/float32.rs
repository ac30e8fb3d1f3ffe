//! Float32 Codec Tests
//!
//! Packing host values into single-precision patterns (truncating, flushing
//! out-of-range magnitudes) and unpacking them back.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvbits_core::common::ArithError;
use rvbits_core::core::units::fpu::float32::{FloatClass, FloatSpecial, classify, pack, unpack};

use crate::common::harness::{hex, word_n};

// ═════════════════════════════════════════════════════════════════════════════
//  Pack
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case(3.75, "0x40700000")]
#[case(2.5, "0x40200000")]
#[case(1.0, "0x3F800000")]
#[case(-1.5, "0xBFC00000")]
#[case(0.5, "0x3F000000")]
#[case(100.0, "0x42C80000")]
#[case(6.25, "0x40C80000")]
fn pack_exact_values(#[case] input: f64, #[case] expected: &str) {
    let packed = pack(input);
    assert_eq!(packed.hex, expected);
    assert_eq!(packed.bits.width(), 32);
    assert_eq!(packed.special, None);
}

#[test]
fn pack_truncates_instead_of_rounding() {
    // Round-to-nearest would give 0x3DCCCCCD.
    assert_eq!(pack(0.1).hex, "0x3DCCCCCC");
}

#[rstest]
#[case(0.0, "0x00000000", FloatSpecial::Zero)]
#[case(-0.0, "0x80000000", FloatSpecial::Zero)]
#[case(f64::INFINITY, "0x7F800000", FloatSpecial::Infinity)]
#[case(f64::NEG_INFINITY, "0xFF800000", FloatSpecial::Infinity)]
#[case(f64::NAN, "0x7FC00000", FloatSpecial::Nan)]
#[case(1e39, "0x7F800000", FloatSpecial::Overflow)]
#[case(-1e39, "0xFF800000", FloatSpecial::Overflow)]
#[case(1e-40, "0x00000000", FloatSpecial::Underflow)]
#[case(-1e-45, "0x80000000", FloatSpecial::Underflow)]
fn pack_special_values(#[case] input: f64, #[case] expected: &str, #[case] special: FloatSpecial) {
    let packed = pack(input);
    assert_eq!(packed.hex, expected);
    assert_eq!(packed.special, Some(special));
}

#[test]
fn special_display_names() {
    assert_eq!(FloatSpecial::Overflow.to_string(), "overflow");
    assert_eq!(FloatSpecial::Nan.to_string(), "nan");
}

// ═════════════════════════════════════════════════════════════════════════════
//  Unpack
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn unpack_three_point_seven_five_exactly() {
    let unpacked = unpack(&hex("0x40700000")).unwrap();
    assert_eq!(unpacked.value, 3.75);
    assert_eq!(unpacked.sign, 0);
    assert_eq!(unpacked.exponent, 128);
    assert_eq!(unpacked.mantissa.to_bin(), "1110_0000_0000_0000_0000_000");
    assert_eq!(unpacked.class, FloatClass::Normal);
}

#[rstest]
#[case("0x7F800000", f64::INFINITY)]
#[case("0xFF800000", f64::NEG_INFINITY)]
#[case("0x3F800001", 1.000_000_119_209_289_6)]
#[case("0xC0000000", -2.0)]
fn unpack_values(#[case] pattern: &str, #[case] expected: f64) {
    assert_eq!(unpack(&hex(pattern)).unwrap().value, expected);
}

#[test]
fn unpack_nan() {
    let unpacked = unpack(&hex("0x7F800001")).unwrap();
    assert!(unpacked.value.is_nan());
    assert_eq!(unpacked.class, FloatClass::Nan);
}

#[test]
fn subnormals_read_as_signed_zero() {
    let positive = unpack(&hex("0x00000001")).unwrap();
    assert_eq!(positive.class, FloatClass::Subnormal);
    assert_eq!(positive.value, 0.0);
    assert!(positive.value.is_sign_positive());

    let negative = unpack(&hex("0x807FFFFF")).unwrap();
    assert_eq!(negative.value, 0.0);
    assert!(negative.value.is_sign_negative());
}

#[test]
fn negative_zero_keeps_its_sign() {
    let unpacked = unpack(&hex("0x80000000")).unwrap();
    assert_eq!(unpacked.class, FloatClass::Zero);
    assert!(unpacked.value.is_sign_negative());
}

#[rstest]
#[case("0x00000000", FloatClass::Zero)]
#[case("0x00400000", FloatClass::Subnormal)]
#[case("0x00800000", FloatClass::Normal)]
#[case("0x7F7FFFFF", FloatClass::Normal)]
#[case("0xFF800000", FloatClass::Infinity)]
#[case("0xFFC00000", FloatClass::Nan)]
fn classify_patterns(#[case] pattern: &str, #[case] class: FloatClass) {
    assert_eq!(classify(&hex(pattern)).unwrap(), class);
}

#[test]
fn non_32_bit_patterns_are_rejected() {
    let err = unpack(&word_n(0, 16)).unwrap_err();
    assert!(matches!(
        err,
        ArithError::WidthMismatch {
            expected: 32,
            found: 16
        }
    ));
}

#[test]
fn pack_unpack_round_trip_of_representable_values() {
    for value in [1.0, -3.5, 0.15625, 1024.0, 1.0 / 1024.0, 3.402_823_466e38] {
        let bits = pack(value).bits;
        let back = unpack(&bits).unwrap().value;
        assert_eq!(pack(back).bits, bits, "{value}");
    }
}
