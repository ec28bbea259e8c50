//! Simulation statistics collection and reporting.
//!
//! This module tracks per-run counters for the emulator. It provides:
//! 1. **Cycles:** Total cycles executed and the host-side cycle rate.
//! 2. **Instruction mix:** Counts by category (arithmetic, load, store, `LUI`, `JALR`).
//! 3. **Faults:** Counts by kind (decode, immediate decode, load, save, addressing).
//! 4. **Display:** Frames pushed to the display sink.

use std::time::Instant;

use crate::common::ExecError;
use crate::core::cpu::execution::CycleReport;
use crate::isa::Category;

/// Simulation statistics for one machine.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total cycles executed.
    pub cycles: u64,

    /// Immediate-arithmetic instructions retired.
    pub inst_op_imm: u64,
    /// Register-arithmetic instructions retired.
    pub inst_op_reg: u64,
    /// Loads retired.
    pub inst_load: u64,
    /// Stores retired.
    pub inst_store: u64,
    /// `LUI` instructions retired.
    pub inst_lui: u64,
    /// `JALR` instructions retired.
    pub inst_jalr: u64,

    /// Unrecognized instruction groups.
    pub faults_decode: u64,
    /// Categories without an immediate form.
    pub faults_immediate: u64,
    /// Load path faults.
    pub faults_load: u64,
    /// Store path faults.
    pub faults_save: u64,
    /// Register addressing faults.
    pub faults_addressing: u64,

    /// Frames pushed to the display sink.
    pub frames_presented: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            inst_op_imm: 0,
            inst_op_reg: 0,
            inst_load: 0,
            inst_store: 0,
            inst_lui: 0,
            inst_jalr: 0,
            faults_decode: 0,
            faults_immediate: 0,
            faults_load: 0,
            faults_save: 0,
            faults_addressing: 0,
            frames_presented: 0,
        }
    }
}

impl SimStats {
    /// Accounts for one completed cycle.
    ///
    /// A degraded instruction counts as immediate arithmetic, since that is what executed.
    pub fn record(&mut self, report: &CycleReport) {
        self.cycles += 1;
        match report.inst.category() {
            Category::OpImm => self.inst_op_imm += 1,
            Category::OpReg => self.inst_op_reg += 1,
            Category::Load => self.inst_load += 1,
            Category::Store => self.inst_store += 1,
            Category::Lui => self.inst_lui += 1,
            Category::Jalr => self.inst_jalr += 1,
        }
        for fault in &report.faults {
            match fault {
                ExecError::Decode { .. } => self.faults_decode += 1,
                ExecError::ImmediateDecode { .. } => self.faults_immediate += 1,
                ExecError::Load(_) => self.faults_load += 1,
                ExecError::Save(_) => self.faults_save += 1,
                ExecError::Addressing(_) => self.faults_addressing += 1,
            }
        }
        if report.frame_presented {
            self.frames_presented += 1;
        }
    }

    /// Retired instructions of `category`.
    pub const fn retired(&self, category: Category) -> u64 {
        match category {
            Category::OpImm => self.inst_op_imm,
            Category::OpReg => self.inst_op_reg,
            Category::Load => self.inst_load,
            Category::Store => self.inst_store,
            Category::Lui => self.inst_lui,
            Category::Jalr => self.inst_jalr,
        }
    }

    /// Total faults of every kind.
    pub const fn total_faults(&self) -> u64 {
        self.faults_decode
            + self.faults_immediate
            + self.faults_load
            + self.faults_save
            + self.faults_addressing
    }

    /// Prints a summary to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        let khz = if seconds > 0.0 {
            (self.cycles as f64 / seconds) / 1000.0
        } else {
            0.0
        };

        println!("\n==========================================================");
        println!("MINIRV EMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_freq                 {khz:.2} kHz");
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        for category in Category::ALL {
            let n = self.retired(category);
            println!(
                "  {:<22} {} ({:.2}%)",
                category.name(),
                n,
                (n as f64 / cyc as f64) * 100.0
            );
        }
        println!("----------------------------------------------------------");
        println!("FAULTS");
        println!("  fault.decode           {}", self.faults_decode);
        println!("  fault.immediate        {}", self.faults_immediate);
        println!("  fault.load             {}", self.faults_load);
        println!("  fault.save             {}", self.faults_save);
        println!("  fault.addressing       {}", self.faults_addressing);
        println!("----------------------------------------------------------");
        println!("DISPLAY");
        println!("  frames.presented       {}", self.frames_presented);
        println!("==========================================================");
    }
}
