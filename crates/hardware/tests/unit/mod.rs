//! # Unit Components
//!
//! This module organizes the unit tests by area of the emulator: shared types, the ISA
//! layer, the core, the address space, and the simulation layer.


/// Unit tests for configuration parsing and validation.
pub mod config;





/// Unit tests for run statistics.
pub mod stats;
