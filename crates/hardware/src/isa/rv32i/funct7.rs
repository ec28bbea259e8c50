//! RV32I Function Codes (funct7).

/// Default operation (ADD, SRL).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB, SRA).
pub const ALT: u32 = 0b0100000;
