//! Writeback (WB) Stage.
//!
//! Commits one value to the destination register, selected by category:
//! arithmetic takes the ALU result, loads take the load latch, `LUI` takes its immediate,
//! and `JALR` takes the link address. Stores write nothing, and writes to `x0` vanish.

use crate::common::Faults;
use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::Cpu;
use crate::core::pipeline::latches::MemWb;
use crate::isa::Instruction;

/// Writes the result of `mem_wb` back to the register file.
pub fn writeback_stage(cpu: &mut Cpu, mem_wb: &MemWb, faults: &mut Faults) {
    let (rd, val) = match mem_wb.inst {
        Instruction::OpImm { rd, .. } | Instruction::OpReg { rd, .. } => (rd, mem_wb.alu),
        Instruction::Load { rd, .. } => (rd, mem_wb.load_data),
        Instruction::Lui { rd, imm } => (rd, imm),
        Instruction::Jalr { rd, .. } => (rd, mem_wb.pc.wrapping_add(INSTRUCTION_SIZE)),
        Instruction::Store { .. } => return,
    };

    if let Err(e) = cpu.regs.write(rd, val) {
        tracing::warn!("pc {:#010x}: {e}", mem_wb.pc);
        faults.push(e);
    }
}
