//! Instruction encoding and decoded-instruction types.
//!
//! Provides bit extraction for the fixed 32-bit encoding and the `Instruction` sum type
//! that carries one decoded instruction through a cycle.

use crate::common::constants::{
    FUNCT3_MASK, FUNCT3_SHIFT, GROUP_MASK, GROUP_SHIFT, RD_SHIFT, REG_FIELD_MASK, RS1_SHIFT,
    RS2_SHIFT,
};

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit position shift for the funct7 field.
pub const FUNCT7_SHIFT: u32 = 25;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the 5-bit group selector (bits 2-6) used to classify the instruction.
    fn group(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn group(&self) -> u32 {
        (self >> GROUP_SHIFT) & GROUP_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_FIELD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & REG_FIELD_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & REG_FIELD_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }
}

/// Operation category of a decoded instruction.
///
/// Exactly one category is active per cycle; it selects the immediate encoding, the ALU
/// operands, the memory access, and the write-back source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Immediate arithmetic (`OP-IMM`).
    OpImm,
    /// Register-register arithmetic (`OP`).
    OpReg,
    /// Store (`STORE`).
    Store,
    /// Load (`LOAD`).
    Load,
    /// Load upper immediate (`LUI`).
    Lui,
    /// Jump and link register (`JALR`).
    Jalr,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::OpImm,
        Self::OpReg,
        Self::Store,
        Self::Load,
        Self::Lui,
        Self::Jalr,
    ];

    /// Short lowercase name used in logs and statistics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::OpImm => "op-imm",
            Self::OpReg => "op",
            Self::Store => "store",
            Self::Load => "load",
            Self::Lui => "lui",
            Self::Jalr => "jalr",
        }
    }
}

/// A decoded instruction.
///
/// Register fields are 5-bit indices; `imm` is the decoded, sign- or zero-extended
/// immediate for the category. `funct3` is the function selector (forced to 0 for `LUI`
/// and `JALR`, which therefore carry none).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `rd = rs1 + imm`, whatever the selector.
    OpImm {
        /// Destination register.
        rd: usize,
        /// Source register.
        rs1: usize,
        /// Operation selector (ignored by the ALU).
        funct3: u32,
        /// Sign-extended 12-bit immediate.
        imm: u32,
    },
    /// `rd = rs1 + rs2`, whatever the selector.
    OpReg {
        /// Destination register.
        rd: usize,
        /// First source register.
        rs1: usize,
        /// Second source register.
        rs2: usize,
        /// Operation selector (ignored by the ALU).
        funct3: u32,
    },
    /// `mem[rs1 + imm] = rs2` with the width chosen by `funct3`.
    Store {
        /// Base address register.
        rs1: usize,
        /// Data register.
        rs2: usize,
        /// Width selector.
        funct3: u32,
        /// Sign-extended split 12-bit immediate.
        imm: u32,
    },
    /// `rd = mem[rs1 + imm]` with the width chosen by `funct3`.
    Load {
        /// Destination register.
        rd: usize,
        /// Base address register.
        rs1: usize,
        /// Width selector.
        funct3: u32,
        /// Sign-extended 12-bit immediate.
        imm: u32,
    },
    /// `rd = imm` where `imm` holds bits 12-31 of the word.
    Lui {
        /// Destination register.
        rd: usize,
        /// Upper immediate with the low 12 bits cleared.
        imm: u32,
    },
    /// `rd = pc + 4; pc = rs1 + imm`.
    Jalr {
        /// Link register.
        rd: usize,
        /// Target base register.
        rs1: usize,
        /// Sign-extended 12-bit immediate.
        imm: u32,
    },
}

impl Instruction {
    /// Returns the operation category.
    pub const fn category(&self) -> Category {
        match self {
            Self::OpImm { .. } => Category::OpImm,
            Self::OpReg { .. } => Category::OpReg,
            Self::Store { .. } => Category::Store,
            Self::Load { .. } => Category::Load,
            Self::Lui { .. } => Category::Lui,
            Self::Jalr { .. } => Category::Jalr,
        }
    }

    /// Returns the destination register, if the category writes one.
    pub const fn rd(&self) -> Option<usize> {
        match *self {
            Self::OpImm { rd, .. }
            | Self::OpReg { rd, .. }
            | Self::Load { rd, .. }
            | Self::Lui { rd, .. }
            | Self::Jalr { rd, .. } => Some(rd),
            Self::Store { .. } => None,
        }
    }

    /// Returns the first source register, if the category reads one.
    ///
    /// `LUI` has none: its bits 15-19 belong to the immediate.
    pub const fn rs1(&self) -> Option<usize> {
        match *self {
            Self::OpImm { rs1, .. }
            | Self::OpReg { rs1, .. }
            | Self::Store { rs1, .. }
            | Self::Load { rs1, .. }
            | Self::Jalr { rs1, .. } => Some(rs1),
            Self::Lui { .. } => None,
        }
    }

    /// Returns the second source register, if the category reads one.
    pub const fn rs2(&self) -> Option<usize> {
        match *self {
            Self::OpReg { rs2, .. } | Self::Store { rs2, .. } => Some(rs2),
            _ => None,
        }
    }

    /// Returns the function selector (0 for `LUI` and `JALR`).
    pub const fn funct3(&self) -> u32 {
        match *self {
            Self::OpImm { funct3, .. }
            | Self::OpReg { funct3, .. }
            | Self::Store { funct3, .. }
            | Self::Load { funct3, .. } => funct3,
            Self::Lui { .. } | Self::Jalr { .. } => 0,
        }
    }

    /// Returns the decoded immediate (0 for register arithmetic).
    pub const fn imm(&self) -> u32 {
        match *self {
            Self::OpImm { imm, .. }
            | Self::Store { imm, .. }
            | Self::Load { imm, .. }
            | Self::Lui { imm, .. }
            | Self::Jalr { imm, .. } => imm,
            Self::OpReg { .. } => 0,
        }
    }
}
