//! Execute (EX) Stage.

use crate::core::pipeline::latches::{ExMem, IdEx};
use crate::core::units::alu::Alu;

/// Runs the ALU on the decoded instruction.
pub const fn execute_stage(id_ex: &IdEx) -> ExMem {
    ExMem {
        pc: id_ex.pc,
        inst: id_ex.inst,
        alu: Alu::execute(&id_ex.inst, id_ex.rs1_val, id_ex.rs2_val),
        store_data: id_ex.rs2_val,
    }
}
