//! Common types and constants shared across the emulator.
//!
//! This module provides the building blocks used by every other component:
//! 1. **Constants:** Memory layout, instruction field positions, and run-loop thresholds.
//! 2. **Error Handling:** Cycle faults and fatal startup errors.
//! 3. **Register Management:** The general-purpose register file.

/// Common constants used throughout the emulator.
pub mod constants;

/// Error types for cycle faults, boot images, configuration, and the run loop.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::{ConfigError, ExecError, Faults, ImageError, LoadError, SaveError, SimError};
pub use reg::RegisterFile;
