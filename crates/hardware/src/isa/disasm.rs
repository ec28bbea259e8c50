//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction word into a mnemonic string for instruction tracing and
//! the command-line disassembler. Mnemonics follow the encoding (`xori`, `sub`, ...) even
//! though the ALU executes every arithmetic form as an addition.
//!
//! ```
//! use minirv_core::isa::disasm::disassemble;
//!
//! assert_eq!(disassemble(0x00A00513), "addi a0, zero, 10");
//! assert_eq!(disassemble(0x00000063), "unknown 0x00000063");
//! ```

use crate::isa::decode::decode;
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::rv32i::{funct3 as f3, funct7 as f7};

/// ABI register names for x0–x31.
pub const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

fn reg(idx: usize) -> &'static str {
    REG_NAMES[idx & 0x1F]
}

/// Disassembles one instruction word.
pub fn disassemble(raw: u32) -> String {
    let Ok(inst) = decode(raw) else {
        return format!("unknown {raw:#010x}");
    };
    let alt = raw.funct7() == f7::ALT;

    match inst {
        Instruction::OpImm {
            rd,
            rs1,
            funct3,
            imm,
        } => {
            let simm = imm as i32;
            match funct3 {
                f3::SLL => format!("slli {}, {}, {}", reg(rd), reg(rs1), imm & 0x1F),
                f3::SRL_SRA => {
                    let op = if alt { "srai" } else { "srli" };
                    format!("{op} {}, {}, {}", reg(rd), reg(rs1), imm & 0x1F)
                }
                _ => {
                    let op = match funct3 {
                        f3::ADD_SUB => "addi",
                        f3::SLT => "slti",
                        f3::SLTU => "sltiu",
                        f3::XOR => "xori",
                        f3::OR => "ori",
                        _ => "andi",
                    };
                    format!("{op} {}, {}, {simm}", reg(rd), reg(rs1))
                }
            }
        }
        Instruction::OpReg {
            rd,
            rs1,
            rs2,
            funct3,
        } => {
            let op = match (funct3, alt) {
                (f3::ADD_SUB, false) => "add",
                (f3::ADD_SUB, true) => "sub",
                (f3::SLL, _) => "sll",
                (f3::SLT, _) => "slt",
                (f3::SLTU, _) => "sltu",
                (f3::XOR, _) => "xor",
                (f3::SRL_SRA, false) => "srl",
                (f3::SRL_SRA, true) => "sra",
                (f3::OR, _) => "or",
                _ => "and",
            };
            format!("{op} {}, {}, {}", reg(rd), reg(rs1), reg(rs2))
        }
        Instruction::Store {
            rs1,
            rs2,
            funct3,
            imm,
        } => {
            let op = match funct3 {
                f3::SB => "sb".to_owned(),
                f3::SW => "sw".to_owned(),
                other => format!("store.{other}"),
            };
            format!("{op} {}, {}({})", reg(rs2), imm as i32, reg(rs1))
        }
        Instruction::Load {
            rd,
            rs1,
            funct3,
            imm,
        } => {
            let op = match funct3 {
                f3::LBU => "lbu".to_owned(),
                f3::LW => "lw".to_owned(),
                other => format!("load.{other}"),
            };
            format!("{op} {}, {}({})", reg(rd), imm as i32, reg(rs1))
        }
        Instruction::Lui { rd, imm } => format!("lui {}, {:#x}", reg(rd), imm >> 12),
        Instruction::Jalr { rd, rs1, imm } => {
            format!("jalr {}, {}({})", reg(rd), imm as i32, reg(rs1))
        }
    }
}
