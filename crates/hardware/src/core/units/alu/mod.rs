//! Arithmetic Logic Unit (ALU).
//!
//! The ALU of this core is an adder. Every category computes `rs1 + imm`, except register
//! arithmetic, which computes `rs1 + rs2`. The function selector is not consulted: `xori`,
//! `sub`, `sll` and friends all add. The result feeds the arithmetic write-back, the
//! load/store effective address, and the `JALR` target.

use crate::isa::instruction::Instruction;

/// Arithmetic Logic Unit for the execute stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alu;

impl Alu {
    /// Computes the execute-stage result of `inst` from its operand values.
    ///
    /// All additions wrap modulo 2^32.
    ///
    /// # Examples
    ///
    /// ```
    /// use minirv_core::core::units::alu::Alu;
    /// use minirv_core::isa::Instruction;
    ///
    /// // sub x1, x2, x3 still adds.
    /// let sub = Instruction::OpReg { rd: 1, rs1: 2, rs2: 3, funct3: 0 };
    /// assert_eq!(Alu::execute(&sub, 7, 5), 12);
    ///
    /// // addi with a negative immediate wraps.
    /// let addi = Instruction::OpImm { rd: 1, rs1: 2, funct3: 0, imm: -1i32 as u32 };
    /// assert_eq!(Alu::execute(&addi, 0, 0), u32::MAX);
    /// ```
    pub const fn execute(inst: &Instruction, rs1: u32, rs2: u32) -> u32 {
        match inst {
            Instruction::OpReg { .. } => rs1.wrapping_add(rs2),
            _ => rs1.wrapping_add(inst.imm()),
        }
    }
}
