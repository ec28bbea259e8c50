use minirv_core::Simulator;
use minirv_core::config::{Config, ErrorPolicy};
use minirv_core::core::{Cpu, CycleReport};
use minirv_core::soc::System;
use minirv_core::soc::traits::DisplaySink;

/// Memory size used by tests: small enough to allocate per test, large enough for programs.
pub const TEST_RAM_SIZE: usize = 0x1_0000;

pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(Self::config())
    }

    /// Test configuration: small memory, default everything else.
    pub fn config() -> Config {
        let mut config = Config::default();
        config.system.ram_size = TEST_RAM_SIZE;
        config
    }

    pub fn with_config(config: Config) -> Self {
        init_tracing();
        let system = System::headless(&config).expect("valid test config");
        Self {
            sim: Simulator::new(system, &config),
        }
    }

    pub fn with_display(display: Box<dyn DisplaySink>) -> Self {
        init_tracing();
        let config = Self::config();
        let system = System::new(&config, display).expect("valid test config");
        Self {
            sim: Simulator::new(system, &config),
        }
    }

    pub fn with_policy(policy: ErrorPolicy) -> Self {
        let mut config = Self::config();
        config.general.error_policy = policy;
        Self::with_config(config)
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Load a sequence of 32-bit instructions into memory at `addr` and set the PC.
    pub fn load_program(mut self, addr: u32, instructions: &[u32]) -> Self {
        self.sim.cpu.bus.memory.write_words(addr, instructions);
        self.sim.cpu.pc = addr;
        self
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: u32) {
        self.sim.cpu.regs.write(reg, val).expect("valid register");
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> u32 {
        self.sim.cpu.regs.read(reg).expect("valid register")
    }

    /// Run a single cycle directly on the CPU, bypassing the run policy.
    pub fn step(&mut self) -> CycleReport {
        self.sim.cpu.tick()
    }

    /// Run the CPU for a specific number of cycles.
    pub fn run(&mut self, cycles: u64) {
        for _ in 0..cycles {
            if let Err(e) = self.sim.tick() {
                eprintln!("CPU tick error: {e}");
                break;
            }
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
