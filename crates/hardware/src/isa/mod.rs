//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode tables, field extraction, decoding logic, and the disassembler for
//! the reduced RV32I subset the core executes: `OP-IMM`, `OP`, `LOAD`, `STORE`, `LUI`,
//! and `JALR`.

/// Instruction decoding: classification, field extraction, and immediates.
pub mod decode;

/// Instruction disassembler for tracing and the command-line tools.
pub mod disasm;

/// Instruction bit extraction and the decoded `Instruction` sum type.
pub mod instruction;

/// Base integer opcodes and function codes.
pub mod rv32i;

pub use instruction::{Category, Instruction, InstructionBits};
