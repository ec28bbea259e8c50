//! Latch structures carried between the stages of one cycle.
//!
//! The core is not pipelined: every cycle runs all five stages back to back. The latches
//! name what each stage hands to the next, so the flow of one instruction is explicit:
//! Fetch → Decode → Execute → Memory → Writeback.

use crate::isa::Instruction;

/// IF/ID latch (Fetch to Decode).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfId {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction word.
    pub raw: u32,
}

/// ID/EX latch (Decode to Execute).
///
/// Carries the decoded instruction and its source operand values. Operands the category
/// does not name are read as 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdEx {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Decoded instruction (the degraded no-op if decoding failed).
    pub inst: Instruction,
    /// Value of source register 1.
    pub rs1_val: u32,
    /// Value of source register 2.
    pub rs2_val: u32,
}

/// EX/MEM latch (Execute to Memory).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExMem {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Decoded instruction.
    pub inst: Instruction,
    /// ALU result: arithmetic value, effective address, or jump target.
    pub alu: u32,
    /// Store data (source register 2).
    pub store_data: u32,
}

/// MEM/WB latch (Memory to Writeback).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemWb {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Decoded instruction.
    pub inst: Instruction,
    /// ALU result.
    pub alu: u32,
    /// Load latch contents after the memory stage.
    pub load_data: u32,
}
