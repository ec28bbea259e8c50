//! RV32I Opcodes and Group Selectors.
//!
//! The core classifies instructions by the 5-bit group in opcode bits 2-6; the low two
//! bits (always `0b11` for 32-bit encodings) are ignored.

/// Load instructions (LBU, LW).
pub const OP_LOAD: u32 = 0b0000011;

/// Immediate arithmetic instructions (ADDI and siblings).
pub const OP_IMM: u32 = 0b0010011;

/// Store instructions (SB, SW).
pub const OP_STORE: u32 = 0b0100011;

/// Register-register arithmetic (ADD and siblings).
pub const OP_REG: u32 = 0b0110011;

/// Load Upper Immediate (LUI).
pub const OP_LUI: u32 = 0b0110111;

/// Jump and Link Register (JALR).
pub const OP_JALR: u32 = 0b1100111;

/// Group selector of [`OP_LOAD`].
pub const GROUP_LOAD: u32 = 0b00000;

/// Group selector of [`OP_IMM`].
pub const GROUP_OP_IMM: u32 = 0b00100;

/// Group selector of [`OP_STORE`].
pub const GROUP_STORE: u32 = 0b01000;

/// Group selector of [`OP_REG`].
pub const GROUP_OP_REG: u32 = 0b01100;

/// Group selector of [`OP_LUI`].
pub const GROUP_LUI: u32 = 0b01101;

/// Group selector of [`OP_JALR`].
pub const GROUP_JALR: u32 = 0b11001;
