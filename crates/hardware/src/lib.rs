//! Minimal RV32I subset emulator library.
//!
//! This crate implements a single-cycle emulator for six RV32I instruction groups with the
//! following:
//! 1. **Core:** Fetch, decode, execute, memory, and writeback run to completion every cycle.
//! 2. **ISA:** Decoding of `LUI`, `JALR`, loads, stores, and immediate/register arithmetic,
//!    plus a disassembler for tracing.
//! 3. **SoC:** Wrapping power-of-two memory and a memory-mapped 256x256 pixel framebuffer
//!    that pushes every frame to a display sink.
//! 4. **Simulation:** Boot image loader, run loop with error policy and hang detection,
//!    configuration, and statistics.
//!
//! # Examples
//!
//! ```
//! use minirv_core::{Config, Simulator, System};
//!
//! let config = Config::default();
//! let mut sim = Simulator::new(System::headless(&config).unwrap(), &config);
//!
//! // lui x5, 0x12345
//! sim.cpu.bus.memory.write_word(0, 0x1234_52B7);
//! let report = sim.tick().unwrap();
//! assert!(report.is_clean());
//! assert_eq!(sim.cpu.regs.read(5).unwrap(), 0x1234_5000);
//! assert_eq!(sim.cpu.pc, 4);
//! ```

/// Common types and constants (errors, register file).
pub mod common;
/// Emulator configuration (defaults, error policy, JSON loading).
pub mod config;
/// CPU core (state, cycle stages, ALU, LSU).
pub mod core;
/// Instruction set (field extraction, decode, disassembly, opcode tables).
pub mod isa;
/// Boot image loader and run loop.
pub mod sim;
/// System (memory, framebuffer, display sink).
pub mod soc;
/// Run statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, PC, load latch, system, and stats.
pub use crate::core::Cpu;
/// Run loop over a `Cpu`.
pub use crate::sim::Simulator;
/// Top-level system (memory, framebuffer, display); construct with `System::new`.
pub use crate::soc::System;
