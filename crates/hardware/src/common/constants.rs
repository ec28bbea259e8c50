//! Global System Constants.
//!
//! This module defines system-wide constants used across the emulator. It includes:
//! 1. **Memory Constants:** Default memory size and the pixel window layout.
//! 2. **Instruction Constants:** Instruction width and field masks/shifts.
//! 3. **Simulation Constants:** Thresholds for run-loop control.

/// Default size of general memory in bytes (16 MiB).
///
/// Byte addresses are masked with `DEFAULT_RAM_SIZE - 1` before every access.
pub const DEFAULT_RAM_SIZE: usize = 0x0100_0000;

/// Base address of the memory-mapped pixel window.
pub const FRAMEBUFFER_BASE: u32 = 0x2000_0000;

/// Size of the memory-mapped pixel window in bytes (256 x 256 words).
pub const FRAMEBUFFER_WINDOW: u32 = 0x0004_0000;

/// Width of the pixel surface in pixels.
pub const FRAMEBUFFER_WIDTH: usize = 256;

/// Height of the pixel surface in pixels.
pub const FRAMEBUFFER_HEIGHT: usize = 256;

/// Size of an instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Number of architectural general-purpose registers, including `x0`.
pub const REGISTER_COUNT: usize = 32;

/// Bit mask for a 5-bit register address field.
pub const REG_FIELD_MASK: u32 = 0x1F;

/// Bit position shift for the destination register (rd) field.
pub const RD_SHIFT: u32 = 7;

/// Bit position shift for the first source register (rs1) field.
pub const RS1_SHIFT: u32 = 15;

/// Bit position shift for the second source register (rs2) field.
pub const RS2_SHIFT: u32 = 20;

/// Bit position shift for the funct3 field.
pub const FUNCT3_SHIFT: u32 = 12;

/// Bit mask for the funct3 field.
pub const FUNCT3_MASK: u32 = 0x7;

/// Bit position shift for the 5-bit instruction group (opcode bits 2-6).
pub const GROUP_SHIFT: u32 = 2;

/// Bit mask for the 5-bit instruction group.
pub const GROUP_MASK: u32 = 0x1F;

/// Default number of cycles with an unchanged PC before the run loop reports a hang.
pub const HANG_DETECTION_THRESHOLD: u64 = 5000;
