//! Instruction cycle.
//!
//! This module contains the stage functions and the latches between them. A cycle is one
//! sequential pass through all stages; there is no overlap between instructions and no
//! hazard handling.

/// Latches carried between stages.
pub mod latches;

/// Stage implementations.
pub mod stages;
