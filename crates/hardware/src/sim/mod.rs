//! Simulation utilities and program loading.
//!
//! Provides the boot image loader and the `Simulator`, which drives the CPU one cycle at a
//! time under an error policy, a cycle budget, and hang detection.

/// Boot image loading.
pub mod loader;

/// Run loop.
pub mod simulator;

pub use simulator::{RunOutcome, Simulator, StopReason};
