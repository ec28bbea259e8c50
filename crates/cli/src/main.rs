//! minirv emulator CLI.
//!
//! This binary provides the entry points for running and inspecting boot images. It performs:
//! 1. **Run:** Load a flat boot image, execute it under the configured policy, and report.
//! 2. **Disassembly:** Print the words of a boot image with their decoded form.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use minirv_core::config::{Config, ErrorPolicy};
use minirv_core::isa::disasm::disassemble;
use minirv_core::sim::loader;
use minirv_core::sim::{RunOutcome, StopReason};
use minirv_core::{Simulator, System};

#[derive(Parser, Debug)]
#[command(
    name = "minirv",
    author,
    version,
    about = "Minimal RV32I subset emulator with a memory-mapped framebuffer",
    long_about = "Run a flat boot image or disassemble it.\n\nExamples:\n  minirv run -f image.bin --max-cycles 100000 --frame-out frame.ppm\n  minirv run -f image.bin --config machine.json --strict\n  minirv disasm -f image.bin --count 32"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a boot image.
    Run {
        /// Flat binary of 32-bit words in host byte order, loaded at address 0.
        #[arg(short, long)]
        file: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Stop after this many cycles.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Stop at the first faulting cycle.
        #[arg(long)]
        strict: bool,

        /// Log every retired instruction.
        #[arg(long)]
        trace: bool,

        /// Write the final frame as a binary PPM.
        #[arg(long)]
        frame_out: Option<PathBuf>,
    },

    /// Disassemble a boot image.
    Disasm {
        /// Flat binary of 32-bit words in host byte order.
        #[arg(short, long)]
        file: PathBuf,

        /// Number of words to print.
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();

    let trace = matches!(cli.command, Commands::Run { trace: true, .. });
    init_tracing(trace);

    let code = match cli.command {
        Commands::Run {
            file,
            config,
            max_cycles,
            strict,
            trace,
            frame_out,
        } => cmd_run(
            &file,
            config.as_deref(),
            max_cycles,
            strict,
            trace,
            frame_out.as_deref(),
        ),
        Commands::Disasm { file, count } => cmd_disasm(&file, count),
    };
    process::exit(code);
}

/// Installs the `fmt` subscriber. `RUST_LOG` wins over the default level.
fn init_tracing(trace: bool) {
    let default = if trace { "trace" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Boots `file`, runs it, and returns the process exit code.
fn cmd_run(
    file: &Path,
    config_path: Option<&Path>,
    max_cycles: Option<u64>,
    strict: bool,
    trace: bool,
    frame_out: Option<&Path>,
) -> i32 {
    let loaded = match config_path {
        Some(path) => Config::from_file(path),
        None => Ok(Config::default()),
    };
    let mut config = match loaded {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("fatal: {e}");
            return 1;
        }
    };
    if strict {
        config.general.error_policy = ErrorPolicy::Halt;
    }
    if trace {
        config.general.trace_instructions = true;
    }

    let system = match System::headless(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("fatal: {e}");
            return 1;
        }
    };
    let mut sim = Simulator::new(system, &config);

    match loader::load_image(&mut sim.cpu.bus.memory, file) {
        Ok(words) => tracing::info!("loaded {} ({words} words)", file.display()),
        Err(e) => {
            tracing::error!("fatal: {e}");
            return 1;
        }
    }
    tracing::info!(
        "ram {:#x} bytes, framebuffer {:#010x}, start pc {:#010x}, policy {:?}",
        config.system.ram_size,
        config.system.framebuffer_base,
        config.general.start_pc,
        config.general.error_policy
    );

    let code = match sim.run(max_cycles) {
        Ok(RunOutcome { cycles, reason }) => {
            match reason {
                StopReason::CycleLimit => {
                    tracing::info!("cycle limit reached after {cycles} cycles");
                }
                StopReason::Hang { pc } => {
                    tracing::info!("idle at pc {pc:#010x} after {cycles} cycles");
                }
                StopReason::Predicate => tracing::info!("stopped after {cycles} cycles"),
            }
            0
        }
        Err(e) => {
            tracing::error!("{e}");
            sim.cpu.dump_state();
            1
        }
    };

    if let Some(path) = frame_out {
        if let Err(e) = fs::write(path, sim.cpu.bus.framebuffer.to_ppm()) {
            tracing::error!("could not write frame '{}': {e}", path.display());
            sim.cpu.stats.print();
            return 1;
        }
        tracing::info!("frame written to {}", path.display());
    }

    sim.cpu.stats.print();
    code
}

/// Prints address, word, and disassembly for each word of `file`.
fn cmd_disasm(file: &Path, count: Option<usize>) -> i32 {
    let words = match loader::load_binary(file) {
        Ok(bytes) => loader::image_words(&bytes),
        Err(e) => {
            tracing::error!("fatal: {e}");
            return 1;
        }
    };
    let count = count.unwrap_or(words.len());
    for (i, word) in words.iter().take(count).enumerate() {
        println!("{:08x}:  {word:08x}  {}", i * 4, disassemble(*word));
    }
    0
}
