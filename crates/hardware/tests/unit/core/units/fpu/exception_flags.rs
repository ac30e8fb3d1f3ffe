//! FP Exception Flag Tests
//!
//! Bit layout, accumulation and display of `FpFlags`.

use pretty_assertions::assert_eq;
use rvbits_core::core::units::fpu::exception_flags::FpFlags;

#[test]
fn flag_bits_match_fflags_layout() {
    assert_eq!(FpFlags::NV.bits(), 0b1_0000);
    assert_eq!(FpFlags::OF.bits(), 0b0_0100);
    assert_eq!(FpFlags::UF.bits(), 0b0_0010);
    assert_eq!(FpFlags::NX.bits(), 0b0_0001);
}

#[test]
fn none_is_empty_and_default() {
    assert!(FpFlags::NONE.is_empty());
    assert_eq!(FpFlags::default(), FpFlags::NONE);
}

#[test]
fn flags_accumulate_with_or() {
    let mut flags = FpFlags::NONE;
    flags |= FpFlags::OF;
    flags |= FpFlags::NX;
    assert!(flags.contains(FpFlags::OF));
    assert!(flags.contains(FpFlags::OF | FpFlags::NX));
    assert!(!flags.contains(FpFlags::NV));
    assert_eq!(flags.bits(), 0b0_0101);
}

#[test]
fn display_lists_raised_flags() {
    assert_eq!(FpFlags::NONE.to_string(), "-");
    assert_eq!((FpFlags::NX | FpFlags::NV).to_string(), "NV|NX");
    assert_eq!((FpFlags::UF | FpFlags::NX).to_string(), "UF|NX");
}
