//! Property-based tests.
//!
//! Uses proptest to cross-check the bit-level units against host arithmetic
//! on randomly generated 32-bit operands.

use proptest::prelude::*;
use rvbits_core::common::BitVector;
use rvbits_core::common::twos_complement::{decode, decode_unsigned, encode, encode_unsigned};
use rvbits_core::core::units::alu::Alu;
use rvbits_core::core::units::alu::arithmetic::{add, sub};
use rvbits_core::core::units::fpu::arithmetic as float;
use rvbits_core::core::units::fpu::float32::{pack, unpack};
use rvbits_core::isa::op::AluOp;

// ─── Helper ──────────────────────────────────────────────────────────────────

fn bits_of(value: u32) -> BitVector {
    encode_unsigned(u64::from(value), 32).unwrap()
}

fn run(op: AluOp, a: u32, b: u32) -> u32 {
    decode_unsigned(&Alu::execute(op, &bits_of(a), &bits_of(b)).unwrap()) as u32
}

// ========================================================================
// Codec Properties
// ========================================================================

proptest! {
    /// Every in-range value survives encode then decode.
    #[test]
    fn prop_encode_decode_round_trip(v in any::<i32>()) {
        let encoded = encode(i64::from(v), 32).unwrap();
        prop_assert!(!encoded.overflow);
        prop_assert_eq!(decode(&encoded.bits), i64::from(v));
    }

    /// Every pattern survives decode then encode.
    #[test]
    fn prop_decode_encode_round_trip(raw in any::<u32>()) {
        let bits = bits_of(raw);
        let encoded = encode(decode(&bits), 32).unwrap();
        prop_assert!(!encoded.overflow);
        prop_assert_eq!(encoded.bits, bits);
    }

    /// Hex rendering parses back to the same pattern.
    #[test]
    fn prop_hex_round_trip(raw in any::<u32>()) {
        let bits = bits_of(raw);
        prop_assert_eq!(BitVector::from_hex(&bits.to_hex()).unwrap(), bits.clone());
        prop_assert_eq!(bits.to_hex(), format!("0x{raw:08X}"));
    }
}

// ========================================================================
// Adder Properties
// ========================================================================

proptest! {
    /// Add matches wrapping host addition and both overflow formulations agree.
    #[test]
    fn prop_add_matches_host(a in any::<u32>(), b in any::<u32>()) {
        let out = add(&bits_of(a), &bits_of(b)).unwrap();
        let sum = a.wrapping_add(b);
        prop_assert_eq!(decode_unsigned(&out.result) as u32, sum);
        prop_assert_eq!(out.flags.c, a.checked_add(b).is_none());
        prop_assert_eq!(out.flags.z, sum == 0);
        prop_assert_eq!(out.flags.n, (sum as i32) < 0);

        let (sa, sb, sr) = ((a as i32) < 0, (b as i32) < 0, (sum as i32) < 0);
        prop_assert_eq!(out.flags.v, sa == sb && sr != sa);
        prop_assert_eq!(out.flags.v, (a as i32).checked_add(b as i32).is_none());
    }

    /// Sub matches wrapping host subtraction; C is the no-borrow flag.
    #[test]
    fn prop_sub_matches_host(a in any::<u32>(), b in any::<u32>()) {
        let out = sub(&bits_of(a), &bits_of(b)).unwrap();
        let diff = a.wrapping_sub(b);
        prop_assert_eq!(decode_unsigned(&out.result) as u32, diff);
        prop_assert_eq!(out.flags.c, a >= b);

        let (sa, sb, sr) = ((a as i32) < 0, (b as i32) < 0, (diff as i32) < 0);
        prop_assert_eq!(out.flags.v, sa != sb && sr != sa);
        prop_assert_eq!(out.flags.v, (a as i32).checked_sub(b as i32).is_none());
    }
}

// ========================================================================
// Instruction Properties
// ========================================================================

proptest! {
    /// Shifts honour only the low five bits of the amount.
    #[test]
    fn prop_shifts_match_host(a in any::<u32>(), s in any::<u32>()) {
        prop_assert_eq!(run(AluOp::Sll, a, s), a.wrapping_shl(s & 31));
        prop_assert_eq!(run(AluOp::Srl, a, s), a.wrapping_shr(s & 31));
        prop_assert_eq!(run(AluOp::Sra, a, s), (a as i32).wrapping_shr(s & 31) as u32);
    }

    /// Comparisons match host ordering.
    #[test]
    fn prop_set_less_than_matches_host(a in any::<u32>(), b in any::<u32>()) {
        prop_assert_eq!(run(AluOp::Slt, a, b), u32::from((a as i32) < (b as i32)));
        prop_assert_eq!(run(AluOp::Sltu, a, b), u32::from(a < b));
    }

    /// All four multiplies match the host 64-bit products.
    #[test]
    fn prop_multiply_matches_host(a in any::<u32>(), b in any::<u32>()) {
        let signed = i64::from(a as i32) * i64::from(b as i32);
        let unsigned = u64::from(a) * u64::from(b);
        let mixed = i64::from(a as i32) * i64::from(b);
        prop_assert_eq!(run(AluOp::Mul, a, b), signed as u32);
        prop_assert_eq!(run(AluOp::Mulh, a, b), (signed >> 32) as u32);
        prop_assert_eq!(run(AluOp::Mulhu, a, b), (unsigned >> 32) as u32);
        prop_assert_eq!(run(AluOp::Mulhsu, a, b), (mixed >> 32) as u32);
    }

    /// Divides match host division with the RISC-V special cases.
    #[test]
    fn prop_divide_matches_host(a in any::<u32>(), b in any::<u32>()) {
        let (sa, sb) = (a as i32, b as i32);
        let (div, rem) = if b == 0 {
            (u32::MAX, a)
        } else {
            (sa.wrapping_div(sb) as u32, sa.wrapping_rem(sb) as u32)
        };
        prop_assert_eq!(run(AluOp::Div, a, b), div);
        prop_assert_eq!(run(AluOp::Rem, a, b), rem);

        let (divu, remu) = if b == 0 { (u32::MAX, a) } else { (a / b, a % b) };
        prop_assert_eq!(run(AluOp::Divu, a, b), divu);
        prop_assert_eq!(run(AluOp::Remu, a, b), remu);
    }
}

// ========================================================================
// Float Properties
// ========================================================================

proptest! {
    /// Sums and differences of small integers are exact and so match packing the host result.
    #[test]
    fn prop_float_add_small_integers(a in -30_000i32..30_000, b in -30_000i32..30_000) {
        let (x, y) = (pack(f64::from(a)).bits, pack(f64::from(b)).bits);
        let sum = float::add(&x, &y).unwrap();
        prop_assert_eq!(unpack(&sum.result).unwrap().value, f64::from(a + b));
        let diff = float::sub(&x, &y).unwrap();
        prop_assert_eq!(unpack(&diff.result).unwrap().value, f64::from(a - b));
    }

    /// Products of small integers are exact.
    #[test]
    fn prop_float_mul_small_integers(a in -2_000i32..2_000, b in -2_000i32..2_000) {
        let product = float::mul(&pack(f64::from(a)).bits, &pack(f64::from(b)).bits).unwrap();
        prop_assert_eq!(unpack(&product.result).unwrap().value, f64::from(a * b));
        prop_assert!(product.flags.is_empty());
    }

    /// Unpack then pack is the identity on normal patterns.
    #[test]
    fn prop_pack_unpack_normal_patterns(raw in 0x0080_0000u32..0x7F80_0000, sign in any::<bool>()) {
        let raw = if sign { raw | 0x8000_0000 } else { raw };
        let bits = bits_of(raw);
        let value = unpack(&bits).unwrap().value;
        prop_assert_eq!(pack(value).bits, bits);
    }
}
