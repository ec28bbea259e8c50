//! Immediate decoding per category.

use minirv_core::common::ExecError;
use minirv_core::isa::Category;
use minirv_core::isa::decode::decode_imm;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::*;

#[rstest]
#[case(addi(1, 0, 0), 0)]
#[case(addi(1, 0, 1), 1)]
#[case(addi(1, 0, 2047), 2047)]
#[case(addi(1, 0, -1), 0xFFFF_FFFF)]
#[case(addi(1, 0, -2048), 0xFFFF_F800)]
fn i_type_immediate_is_sign_extended(#[case] raw: u32, #[case] expected: u32) {
    assert_eq!(decode_imm(raw, Category::OpImm), Ok(expected));
    assert_eq!(decode_imm(raw, Category::Load), Ok(expected));
    assert_eq!(decode_imm(raw, Category::Jalr), Ok(expected));
}

#[rstest]
#[case(sw(1, 2, 0), 0)]
#[case(sw(1, 2, 4), 4)]
#[case(sw(1, 2, 31), 31)]
#[case(sw(1, 2, 32), 32)]
#[case(sw(1, 2, 2047), 2047)]
#[case(sw(1, 2, -4), 0xFFFF_FFFC)]
#[case(sw(1, 2, -2048), 0xFFFF_F800)]
fn s_type_immediate_joins_split_fields(#[case] raw: u32, #[case] expected: u32) {
    assert_eq!(decode_imm(raw, Category::Store), Ok(expected));
}

#[rstest]
#[case(lui(1, 0x12345), 0x1234_5000)]
#[case(lui(1, 0xFFFFF), 0xFFFF_F000)]
#[case(lui(1, 0), 0)]
fn u_type_immediate_clears_low_bits(#[case] raw: u32, #[case] expected: u32) {
    assert_eq!(decode_imm(raw, Category::Lui), Ok(expected));
}

#[test]
fn register_arithmetic_has_no_immediate() {
    assert_eq!(
        decode_imm(add(3, 1, 2), Category::OpReg),
        Err(ExecError::ImmediateDecode {
            category: Category::OpReg
        })
    );
}

#[test]
fn store_offset_bit_five_lives_in_upper_field() {
    // sw x2, 0x20(x1): bit 5 of the offset lives in bit 25 of the word.
    let raw = sw(1, 2, 0x20);
    assert_eq!(raw & (1 << 25), 1 << 25);
    assert_eq!((raw >> 7) & 0x1F, 0);
}
