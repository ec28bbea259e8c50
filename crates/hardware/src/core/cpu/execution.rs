//! Main Execution Cycle.
//!
//! This module implements one complete instruction cycle. It performs the following:
//! 1. **Stage Sequencing:** Fetch, decode, execute, memory, and writeback, in order.
//! 2. **Program Counter Update:** Falls through by 4 or takes the `JALR` target.
//! 3. **Fault Collection:** Every fault raised by a stage is returned in the report.
//! 4. **Observability:** Traces the retired instruction and updates statistics.

use super::Cpu;
use crate::common::{ExecError, Faults};
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, memory_stage, next_pc, writeback_stage,
};
use crate::isa::Instruction;
use crate::isa::disasm::disassemble;

/// Outcome of one cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleReport {
    /// PC the instruction was fetched from.
    pub pc: u32,
    /// Raw instruction word.
    pub raw: u32,
    /// Instruction that executed (the degraded form after a decode fault).
    pub inst: Instruction,
    /// PC for the next cycle.
    pub next_pc: u32,
    /// Faults raised during the cycle, in stage order.
    pub faults: Faults,
    /// Whether the cycle pushed a frame to the display.
    pub frame_presented: bool,
}

impl CycleReport {
    /// Returns true if the cycle raised no faults.
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }

    /// First fault raised during the cycle.
    pub fn first_fault(&self) -> Option<ExecError> {
        self.faults.first().copied()
    }

    /// First fault that is not a diagnostic (see [`ExecError::is_diagnostic`]).
    pub fn first_error(&self) -> Option<ExecError> {
        self.faults.iter().copied().find(|e| !e.is_diagnostic())
    }
}

impl Cpu {
    /// Runs one instruction to completion.
    ///
    /// The cycle always completes: faults are logged, collected in the report, and leave
    /// behind whatever partial state resulted. The PC is updated last.
    pub fn tick(&mut self) -> CycleReport {
        let mut faults = Faults::new();
        let frames_before = self.bus.frames_presented();

        let if_id = fetch_stage(self);
        let id_ex = decode_stage(self, &if_id, &mut faults);
        let ex_mem = execute_stage(&id_ex);
        let mem_wb = memory_stage(self, &ex_mem, &mut faults);
        writeback_stage(self, &mem_wb, &mut faults);

        let next = next_pc(&mem_wb);
        if self.trace {
            tracing::trace!(
                "{:#010x}: {:08x}  {:<28} -> {:#010x}",
                if_id.pc,
                if_id.raw,
                disassemble(if_id.raw),
                next
            );
        }
        self.pc = next;

        let report = CycleReport {
            pc: if_id.pc,
            raw: if_id.raw,
            inst: mem_wb.inst,
            next_pc: next,
            faults,
            frame_presented: self.bus.frames_presented() != frames_before,
        };
        self.stats.record(&report);
        report
    }
}
