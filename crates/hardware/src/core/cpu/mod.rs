//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the entire architectural
//! state of one machine. It coordinates the following:
//! 1. **State Management:** Maintains registers, the program counter, and the load latch.
//! 2. **System Integration:** Owns the [`System`] with memory, framebuffer, and display.
//! 3. **Observability:** Tracks run statistics and optional instruction tracing.
//!
//! There is no global state; any number of machines may coexist.

/// Single-cycle execution.
pub mod execution;

use std::fmt;

use crate::common::RegisterFile;
use crate::config::Config;
use crate::soc::System;
use crate::stats::SimStats;

/// Architectural state of one machine.
pub struct Cpu {
    /// General Purpose Registers.
    pub regs: RegisterFile,
    /// Program Counter.
    pub pc: u32,
    /// Memory, framebuffer, and display.
    pub bus: System,
    /// Last value produced by the load path.
    ///
    /// A load that fails the range check leaves it unchanged, and the load write-back
    /// commits whatever it holds.
    pub load_latch: u32,
    /// Run statistics.
    pub stats: SimStats,
    /// Log every retired instruction at `trace` level.
    pub trace: bool,
}

impl Cpu {
    /// Creates a CPU over `system`, starting at the configured PC with zeroed registers.
    pub fn new(system: System, config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: config.general.start_pc,
            bus: system,
            load_latch: 0,
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
        }
    }

    /// Prints the PC, the load latch, and all registers to stdout.
    pub fn dump_state(&self) {
        println!("pc   {:#010x}", self.pc);
        println!("load {:#010x}", self.load_latch);
        self.regs.dump();
    }
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("pc", &format_args!("{:#010x}", self.pc))
            .field("load_latch", &self.load_latch)
            .field("regs", &self.regs)
            .field("bus", &self.bus)
            .field("trace", &self.trace)
            .finish_non_exhaustive()
    }
}
