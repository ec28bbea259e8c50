//! Instruction Decoder.
//!
//! This module turns a raw 32-bit instruction word into an [`Instruction`]. It performs:
//! 1. **Field extraction:** `rd`, `rs1`, `rs2` are taken unconditionally from their fixed
//!    positions; `funct3` from bits 12-14 for every category except `LUI` and `JALR`.
//! 2. **Classification:** The 5-bit group in bits 2-6 selects the category.
//! 3. **Immediate decoding:** The immediate is extracted and extended per category.
//!
//! A word whose group is not decoded yields [`ExecError::Decode`]. The caller then runs the
//! cycle with [`degraded`], an immediate-arithmetic instruction with selector 0. Register
//! arithmetic decodes, but [`decode_imm`] reports that it has no immediate.

use crate::common::ExecError;
use crate::isa::instruction::{Category, Instruction, InstructionBits};
use crate::isa::rv32i::opcodes;

/// Bit shift for the I-type immediate (bits 20-31), applied arithmetically.
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
const I_IMM_SHIFT: u32 = 20;

/// Bit shift for the S-type immediate low field (bits 7-11).
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
const S_IMM_LOW_SHIFT: u32 = 7;

/// Bit mask for the S-type immediate low field (5 bits: imm[4:0]).
const S_IMM_LOW_MASK: u32 = 0x1F;

/// Bit mask selecting the S-type immediate high field (bits 25-31) in place.
const S_IMM_HIGH_MASK: u32 = 0xFE00_0000;

/// Arithmetic shift moving the S-type high field from bit 25 down to bit 5.
const S_IMM_HIGH_SHIFT: u32 = 20;

/// Bit mask for the U-type immediate (bits 12-31); the low 12 bits are cleared.
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// Maps a 5-bit group selector to its category.
///
/// Returns `None` for every group the core does not execute (branches, `JAL`, `AUIPC`,
/// `SYSTEM`, ...).
pub const fn classify(group: u32) -> Option<Category> {
    match group {
        opcodes::GROUP_LUI => Some(Category::Lui),
        opcodes::GROUP_JALR => Some(Category::Jalr),
        opcodes::GROUP_LOAD => Some(Category::Load),
        opcodes::GROUP_STORE => Some(Category::Store),
        opcodes::GROUP_OP_IMM => Some(Category::OpImm),
        opcodes::GROUP_OP_REG => Some(Category::OpReg),
        _ => None,
    }
}

/// Decodes an instruction word.
///
/// # Errors
///
/// Returns [`ExecError::Decode`] if the group selector is not one of the six decoded groups.
///
/// # Examples
///
/// ```
/// use minirv_core::isa::decode::decode;
/// use minirv_core::isa::instruction::Instruction;
///
/// // lui x5, 0x12345
/// assert_eq!(decode(0x123452B7), Ok(Instruction::Lui { rd: 5, imm: 0x1234_5000 }));
/// // beq x0, x0, 0 is not decoded
/// assert!(decode(0x00000063).is_err());
/// ```
pub fn decode(raw: u32) -> Result<Instruction, ExecError> {
    let group = raw.group();
    let category = classify(group).ok_or(ExecError::Decode { raw, group })?;
    let imm = decode_imm(raw, category).unwrap_or(0);
    let (rd, rs1, rs2, funct3) = (raw.rd(), raw.rs1(), raw.rs2(), raw.funct3());

    Ok(match category {
        Category::OpImm => Instruction::OpImm {
            rd,
            rs1,
            funct3,
            imm,
        },
        Category::OpReg => Instruction::OpReg {
            rd,
            rs1,
            rs2,
            funct3,
        },
        Category::Store => Instruction::Store {
            rs1,
            rs2,
            funct3,
            imm,
        },
        Category::Load => Instruction::Load {
            rd,
            rs1,
            funct3,
            imm,
        },
        Category::Lui => Instruction::Lui { rd, imm },
        Category::Jalr => Instruction::Jalr { rd, rs1, imm },
    })
}

/// Returns the instruction executed in place of an undecodable word.
///
/// The category falls back to immediate arithmetic with selector 0 and the I-type
/// immediate of the word, so the cycle writes `rs1 + imm` to `rd` and advances the PC.
pub fn degraded(raw: u32) -> Instruction {
    Instruction::OpImm {
        rd: raw.rd(),
        rs1: raw.rs1(),
        funct3: 0,
        imm: decode_i_type_imm(raw),
    }
}

/// Decodes the immediate of `raw` for `category`.
///
/// | Category                 | Immediate                                        |
/// |--------------------------|--------------------------------------------------|
/// | `OpImm`, `Load`, `Jalr`  | bits 20-31, sign-extended                        |
/// | `Store`                  | bits 25-31 : bits 7-11, sign-extended            |
/// | `Lui`                    | bits 12-31, low 12 bits zero                     |
///
/// # Errors
///
/// Register arithmetic has no immediate form and yields [`ExecError::ImmediateDecode`];
/// its immediate reads as 0.
///
/// # Examples
///
/// ```
/// use minirv_core::isa::Category;
/// use minirv_core::isa::decode::decode_imm;
///
/// // addi x1, x0, -1
/// assert_eq!(decode_imm(0xFFF0_0093, Category::OpImm), Ok(u32::MAX));
/// assert!(decode_imm(0x0020_81B3, Category::OpReg).is_err());
/// ```
pub const fn decode_imm(raw: u32, category: Category) -> Result<u32, ExecError> {
    match category {
        Category::OpImm | Category::Load | Category::Jalr => Ok(decode_i_type_imm(raw)),
        Category::Store => Ok(decode_s_type_imm(raw)),
        Category::Lui => Ok(decode_u_type_imm(raw)),
        Category::OpReg => Err(ExecError::ImmediateDecode { category }),
    }
}

const fn decode_i_type_imm(raw: u32) -> u32 {
    ((raw as i32) >> I_IMM_SHIFT) as u32
}

const fn decode_s_type_imm(raw: u32) -> u32 {
    let low = (raw >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = (((raw & S_IMM_HIGH_MASK) as i32) >> S_IMM_HIGH_SHIFT) as u32;
    high | low
}

const fn decode_u_type_imm(raw: u32) -> u32 {
    raw & U_IMM_MASK
}
