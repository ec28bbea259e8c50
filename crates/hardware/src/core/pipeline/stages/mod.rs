//! Pipeline stage implementations.
//!
//! Each stage takes the CPU state and the latch produced by the previous stage, and
//! returns the latch for the next. Stages that can fault push onto the cycle's fault list
//! and carry on with whatever partial state resulted.

/// Instruction fetch and program counter selection.
pub mod fetch;

/// Instruction decode and operand read.
pub mod decode;

/// Execute (ALU).
pub mod execute;

/// Memory access.
pub mod memory;

/// Register write-back.
pub mod writeback;

pub use decode::decode_stage;
pub use execute::execute_stage;
pub use fetch::{fetch_stage, next_pc};
pub use memory::memory_stage;
pub use writeback::writeback_stage;
