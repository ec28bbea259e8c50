//! Core processor implementation.
//!
//! This module contains the CPU state, the stage functions of the instruction cycle, and
//! the execution units they use.

/// CPU state and single-cycle execution.
pub mod cpu;

/// Instruction cycle stages and latches.
pub mod pipeline;

/// Execution units (ALU, LSU).
pub mod units;

pub use self::cpu::Cpu;
pub use self::cpu::execution::CycleReport;
