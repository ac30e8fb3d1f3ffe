//! # Bit Vector Tests
//!
//! Construction, coercion, rendering and parsing of `BitVector`.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvbits_core::common::{ArithError, BitVector};

// ═════════════════════════════════════════════════════════════════════════════
//  Construction
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn new_is_zero_filled() {
    let bits = BitVector::new(12).unwrap();
    assert_eq!(bits.width(), 12);
    assert!(bits.is_zero());
    assert_eq!(bits.to_hex(), "0x000");
}

#[test]
fn new_rejects_zero_width() {
    assert!(matches!(
        BitVector::new(0),
        Err(ArithError::Construction { .. })
    ));
}

#[test]
fn from_bits_rejects_empty_sequence() {
    assert!(matches!(
        BitVector::from_bits(&[]),
        Err(ArithError::Construction { .. })
    ));
    assert!(BitVector::from_bools(&[]).is_err());
}

#[test]
fn from_bits_coerces_truthy_values() {
    let bits = BitVector::from_bits(&[0, 7, 1, 255]).unwrap();
    assert_eq!(bits.as_slice(), &[0, 1, 1, 1]);
}

#[test]
fn from_bools_is_msb_first() {
    let bits = BitVector::from_bools(&[true, false, false, false]).unwrap();
    assert_eq!(bits.msb(), 1);
    assert_eq!(bits.lsb(), 0);
    assert_eq!(bits.to_hex(), "0x8");
}

#[test]
fn clones_do_not_alias() {
    let original = BitVector::new(4).unwrap();
    let mut copy = original.clone();
    copy.set(0, 1);
    assert!(original.is_zero());
    assert_eq!(copy.to_hex(), "0x8");
}

#[test]
fn set_coerces_and_get_bounds_checks() {
    let mut bits = BitVector::new(4).unwrap();
    bits.set(3, 9);
    assert_eq!(bits.get(3), Some(1));
    assert_eq!(bits.get(4), None);
    assert_eq!(bits[3], 1);
}

#[test]
fn all_ones_and_zero_predicates() {
    let ones = BitVector::from_hex("0xFF").unwrap();
    assert!(ones.is_all_ones());
    assert!(!ones.is_zero());
    assert!(!BitVector::from_hex("0xFE").unwrap().is_all_ones());
}

#[test]
fn slice_and_concat() {
    let bits = BitVector::from_hex("0xA5").unwrap();
    let high = bits.slice(0..4).unwrap();
    let low = bits.slice(4..8).unwrap();
    assert_eq!(high.to_hex(), "0xA");
    assert_eq!(low.to_hex(), "0x5");
    assert_eq!(low.concat(&high).to_hex(), "0x5A");
    assert!(bits.slice(3..3).is_err());
}

// ═════════════════════════════════════════════════════════════════════════════
//  Rendering
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case(vec![1], "0x1", "1")]
#[case(vec![1, 0, 1], "0x5", "101")]
#[case(vec![1, 0, 0, 0, 0], "0x10", "1000_0")]
#[case(vec![1, 1, 1, 1, 0, 0, 0, 0], "0xF0", "1111_0000")]
fn renders_hex_and_binary(#[case] raw: Vec<u8>, #[case] hex: &str, #[case] bin: &str) {
    let bits = BitVector::from_bits(&raw).unwrap();
    assert_eq!(bits.to_hex(), hex);
    assert_eq!(bits.to_bin(), bin);
}

#[test]
fn display_is_hex_and_debug_shows_both() {
    let bits = BitVector::from_hex("0x3C").unwrap();
    assert_eq!(bits.to_string(), "0x3C");
    assert_eq!(format!("{bits:?}"), "BitVector<8>(0x3C | 0011_1100)");
}

// ═════════════════════════════════════════════════════════════════════════════
//  Parsing
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case("0xDEADBEEF", 32)]
#[case("0Xdeadbeef", 32)]
#[case("deadbeef", 32)]
#[case("0x0", 4)]
fn from_hex_uses_four_bits_per_digit(#[case] text: &str, #[case] width: usize) {
    let bits = BitVector::from_hex(text).unwrap();
    assert_eq!(bits.width(), width);
    if width == 32 {
        assert_eq!(bits.to_hex(), "0xDEADBEEF");
    }
}

#[test]
fn from_hex_reports_offending_character() {
    let err = BitVector::from_hex("0x12G4").unwrap_err();
    match err {
        ArithError::Parse {
            input,
            position,
            found,
        } => {
            assert_eq!(input, "0x12G4");
            assert_eq!(position, 4);
            assert_eq!(found, 'G');
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn from_hex_rejects_bare_prefix() {
    let err = BitVector::from_hex("0x").unwrap_err();
    assert!(matches!(err, ArithError::EmptyLiteral { .. }));
    assert!(err.is_parse());
}

#[rstest]
#[case("0xF", 8, "0x0F")]
#[case("0x1234", 8, "0x34")]
#[case("0xABCD", 16, "0xABCD")]
#[case("0x7", 3, "0x7")]
fn from_hex_width_pads_or_truncates(#[case] text: &str, #[case] width: usize, #[case] hex: &str) {
    let bits = BitVector::from_hex_width(text, width).unwrap();
    assert_eq!(bits.width(), width);
    assert_eq!(bits.to_hex(), hex);
}

#[test]
fn from_binary_skips_separators() {
    let bits = BitVector::from_binary("1010_0101 1111").unwrap();
    assert_eq!(bits.width(), 12);
    assert_eq!(bits.to_hex(), "0xA5F");
}

#[test]
fn from_binary_rejects_other_digits() {
    let err = BitVector::from_binary("10_2").unwrap_err();
    assert!(matches!(
        err,
        ArithError::Parse {
            position: 3,
            found: '2',
            ..
        }
    ));
    assert!(matches!(
        BitVector::from_binary("__"),
        Err(ArithError::EmptyLiteral { .. })
    ));
}

#[test]
fn from_str_dispatches_on_prefix() {
    let hex: BitVector = "0xC".parse().unwrap();
    let prefixed: BitVector = "0b1100".parse().unwrap();
    let bare: BitVector = "1100".parse().unwrap();
    assert_eq!(hex, prefixed);
    assert_eq!(prefixed, bare);
    assert!("0b1102".parse::<BitVector>().is_err());
}
