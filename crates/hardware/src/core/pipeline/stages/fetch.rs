//! Instruction Fetch (IF) Stage.
//!
//! Reads the instruction word at the current program counter and, at the end of the
//! cycle, selects the next program counter.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::Cpu;
use crate::core::pipeline::latches::{IfId, MemWb};
use crate::isa::Instruction;

/// Fetches the instruction at `cpu.pc`.
///
/// The fetch address is masked into memory like every other access, so a wild PC wraps
/// instead of faulting.
pub fn fetch_stage(cpu: &Cpu) -> IfId {
    IfId {
        pc: cpu.pc,
        raw: cpu.bus.memory.read_word(cpu.pc),
    }
}

/// Selects the program counter for the next cycle.
///
/// `JALR` jumps to its ALU result, which is not aligned to an instruction boundary. Every
/// other instruction falls through to `pc + 4`.
pub const fn next_pc(wb: &MemWb) -> u32 {
    match wb.inst {
        Instruction::Jalr { .. } => wb.alu,
        _ => wb.pc.wrapping_add(INSTRUCTION_SIZE),
    }
}
