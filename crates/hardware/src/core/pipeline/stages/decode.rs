//! Instruction Decode (ID) Stage.
//!
//! Turns the raw word into an [`Instruction`] and reads its source operands. An
//! unrecognized group is logged, reported, and replaced by the degraded immediate-arithmetic
//! form so that the cycle still completes. A category without an immediate form is reported
//! too, at `debug` level since every register-arithmetic instruction raises it.

use crate::common::Faults;
use crate::core::Cpu;
use crate::core::pipeline::latches::{IdEx, IfId};
use crate::isa::decode::{decode, decode_imm, degraded};

/// Decodes the fetched word and reads its operands.
pub fn decode_stage(cpu: &Cpu, if_id: &IfId, faults: &mut Faults) -> IdEx {
    let inst = match decode(if_id.raw) {
        Ok(inst) => inst,
        Err(e) => {
            tracing::warn!("pc {:#010x}: {e}", if_id.pc);
            faults.push(e);
            degraded(if_id.raw)
        }
    };

    if let Err(e) = decode_imm(if_id.raw, inst.category()) {
        tracing::debug!("pc {:#010x}: {e}", if_id.pc);
        faults.push(e);
    }

    let rs1_val = read_operand(cpu, inst.rs1(), if_id.pc, faults);
    let rs2_val = read_operand(cpu, inst.rs2(), if_id.pc, faults);

    IdEx {
        pc: if_id.pc,
        inst,
        rs1_val,
        rs2_val,
    }
}

fn read_operand(cpu: &Cpu, idx: Option<usize>, pc: u32, faults: &mut Faults) -> u32 {
    let Some(idx) = idx else {
        return 0;
    };
    match cpu.regs.read(idx) {
        Ok(val) => val,
        Err(e) => {
            tracing::warn!("pc {pc:#010x}: {e}");
            faults.push(e);
            0
        }
    }
}

