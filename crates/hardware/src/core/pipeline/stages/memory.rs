//! Memory Access (MEM) Stage.
//!
//! Runs the load path, then the store path. Only one of them is active for a given
//! category, but the order is fixed. The load path updates the CPU's load latch:
//! - a successful load writes the loaded value;
//! - an unsupported width writes the raw word that was read;
//! - an out-of-range address leaves the previous value in place.

use crate::common::{ExecError, Faults, LoadError};
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMem, MemWb};
use crate::core::units::lsu::Lsu;
use crate::isa::Instruction;
use crate::soc::StoreTarget;

/// Performs the memory access for `ex_mem`.
pub fn memory_stage(cpu: &mut Cpu, ex_mem: &ExMem, faults: &mut Faults) -> MemWb {
    let pc = ex_mem.pc;

    if let Instruction::Load { funct3, .. } = ex_mem.inst {
        match Lsu::load(&cpu.bus.memory, funct3, ex_mem.alu) {
            Ok(val) => cpu.load_latch = val,
            Err(e) => {
                if let LoadError::UnsupportedWidth { word, .. } = e {
                    cpu.load_latch = word;
                }
                report(pc, e.into(), faults);
            }
        }
    }

    if let Instruction::Store { funct3, .. } = ex_mem.inst {
        match Lsu::store(&mut cpu.bus, funct3, ex_mem.alu, ex_mem.store_data) {
            Ok(StoreTarget::Pixel { row, col }) => {
                tracing::trace!(row, col, val = ex_mem.store_data, "pixel store");
            }
            Ok(StoreTarget::Memory { .. }) => {}
            Err(e) => report(pc, e.into(), faults),
        }
    }

    MemWb {
        pc,
        inst: ex_mem.inst,
        alu: ex_mem.alu,
        load_data: cpu.load_latch,
    }
}

fn report(pc: u32, e: ExecError, faults: &mut Faults) {
    tracing::warn!("pc {pc:#010x}: {e}");
    faults.push(e);
}
