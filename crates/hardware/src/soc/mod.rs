//! System-on-Chip (SoC) Components.
//!
//! This module organizes the emulated address space: general memory, the memory-mapped
//! framebuffer, the display seam, and the `System` that routes stores between them.

/// System builder and store routing.
pub mod builder;

/// Memory-mapped devices and display sinks.
pub mod devices;

/// General memory.
pub mod memory;

/// Display trait definitions.
pub mod traits;

pub use builder::{StoreTarget, System};
