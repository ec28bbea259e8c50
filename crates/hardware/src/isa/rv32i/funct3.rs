//! RV32I Function Codes (funct3).
//!
//! For loads and stores the `funct3` field (bits 14-12) selects the access width. For
//! arithmetic it names the operation, which the ALU ignores (it always adds); the names
//! are kept for disassembly.

/// Load Word.
pub const LW: u32 = 0b010;
/// Load Byte Unsigned.
pub const LBU: u32 = 0b100;

/// Store Byte.
pub const SB: u32 = 0b000;
/// Store Word.
pub const SW: u32 = 0b010;

/// Add / Sub.
pub const ADD_SUB: u32 = 0b000;
/// Shift Left Logical.
pub const SLL: u32 = 0b001;
/// Set Less Than.
pub const SLT: u32 = 0b010;
/// Set Less Than Unsigned.
pub const SLTU: u32 = 0b011;
/// Exclusive OR.
pub const XOR: u32 = 0b100;
/// Shift Right (Logical / Arithmetic).
pub const SRL_SRA: u32 = 0b101;
/// Inclusive OR.
pub const OR: u32 = 0b110;
/// Bitwise AND.
pub const AND: u32 = 0b111;
