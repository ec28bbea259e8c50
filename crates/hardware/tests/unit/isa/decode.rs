//! Instruction classification and decode.

use minirv_core::common::ExecError;
use minirv_core::isa::decode::{classify, decode, degraded};
use minirv_core::isa::{Category, Instruction, InstructionBits};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::instruction::*;

#[rstest]
#[case(0b01101, Some(Category::Lui))]
#[case(0b11001, Some(Category::Jalr))]
#[case(0b00000, Some(Category::Load))]
#[case(0b01000, Some(Category::Store))]
#[case(0b00100, Some(Category::OpImm))]
#[case(0b01100, Some(Category::OpReg))]
#[case(0b11000, None)] // branch
#[case(0b11011, None)] // jal
#[case(0b00101, None)] // auipc
#[case(0b11100, None)] // system
fn groups_classify(#[case] group: u32, #[case] expected: Option<Category>) {
    assert_eq!(classify(group), expected);
}

#[test]
fn fields_are_extracted_unconditionally() {
    let raw = add(7, 12, 31);
    assert_eq!(raw.rd(), 7);
    assert_eq!(raw.rs1(), 12);
    assert_eq!(raw.rs2(), 31);
    assert_eq!(raw.funct3(), 0);
    assert_eq!(raw.group(), 0b01100);
}

#[test]
fn decodes_each_category() {
    assert_eq!(
        decode(addi(1, 2, -5)),
        Ok(Instruction::OpImm {
            rd: 1,
            rs1: 2,
            funct3: 0,
            imm: -5i32 as u32
        })
    );
    assert_eq!(
        decode(sub(3, 4, 5)),
        Ok(Instruction::OpReg {
            rd: 3,
            rs1: 4,
            rs2: 5,
            funct3: 0
        })
    );
    assert_eq!(
        decode(sw(6, 7, 0x7FF)),
        Ok(Instruction::Store {
            rs1: 6,
            rs2: 7,
            funct3: 2,
            imm: 0x7FF
        })
    );
    assert_eq!(
        decode(lbu(8, 9, -1)),
        Ok(Instruction::Load {
            rd: 8,
            rs1: 9,
            funct3: 4,
            imm: u32::MAX
        })
    );
    assert_eq!(
        decode(lui(5, 0x12345)),
        Ok(Instruction::Lui {
            rd: 5,
            imm: 0x1234_5000
        })
    );
    assert_eq!(
        decode(jalr(1, 2, 16)),
        Ok(Instruction::Jalr {
            rd: 1,
            rs1: 2,
            imm: 16
        })
    );
}

#[test]
fn lui_and_jalr_force_selector_to_zero() {
    let raw = jalr(1, 2, 0) | (0b111 << 12);
    assert_eq!(decode(raw).unwrap().funct3(), 0);
    let raw = lui(1, 1);
    assert_eq!(decode(raw).unwrap().funct3(), 0);
}

#[test]
fn unknown_group_is_a_decode_error() {
    // beq x1, x2, 0
    let raw = 0x0020_8063;
    assert_eq!(
        decode(raw),
        Err(ExecError::Decode {
            raw,
            group: 0b11000
        })
    );
}

#[test]
fn degraded_instruction_is_immediate_arithmetic() {
    // jal x1, 8; bits 20-31 of this word read as 8.
    let raw = 0x0080_00EF;
    assert_eq!(
        degraded(raw),
        Instruction::OpImm {
            rd: 1,
            rs1: 0,
            funct3: 0,
            imm: 8
        }
    );
}

#[test]
fn operand_accessors_follow_category() {
    let store = decode(sw(1, 2, 0)).unwrap();
    assert_eq!(store.rd(), None);
    assert_eq!(store.rs2(), Some(2));

    let lui = decode(lui(3, 1)).unwrap();
    assert_eq!(lui.rs1(), None);
    assert_eq!(lui.rs2(), None);

    let op = decode(add(1, 2, 3)).unwrap();
    assert_eq!(op.imm(), 0);
    assert_eq!(op.category(), Category::OpReg);
}

proptest! {
    #[test]
    fn decode_fails_exactly_for_unknown_groups(raw in any::<u32>()) {
        let known = classify(raw.group()).is_some();
        prop_assert_eq!(decode(raw).is_ok(), known);
    }

    #[test]
    fn decoded_category_matches_group(raw in any::<u32>()) {
        if let Ok(inst) = decode(raw) {
            prop_assert_eq!(Some(inst.category()), classify(raw.group()));
        }
    }
}
