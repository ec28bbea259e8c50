//! Execution units.
//!
//! This module contains the functional units used by the execute and memory stages.

/// Arithmetic Logic Unit (an adder).
pub mod alu;

/// Load/Store Unit for memory access operations.
pub mod lsu;
