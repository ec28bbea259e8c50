//! RV32I Base Integer Instruction Set (reduced subset).
//!
//! Only the opcode groups the core executes are defined here; branches, JAL, AUIPC,
//! FENCE, and SYSTEM encodings are absent and decode as faults.
//!
//! # Structure
//!
//! - `opcodes`: Full 7-bit opcodes and the 5-bit group selectors (opcode bits 2-6).
//! - `funct3`: Width selectors for loads/stores and operation selectors for arithmetic.
//! - `funct7`: Alternate-operation bit pattern for register arithmetic.

/// Function code 3 definitions.
pub mod funct3;

/// Function code 7 definitions.
pub mod funct7;

/// Opcodes and group selectors.
pub mod opcodes;
