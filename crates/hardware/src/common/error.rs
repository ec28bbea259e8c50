//! Error definitions.
//!
//! This module defines the error types reported by the emulator. It provides:
//! 1. **Cycle Faults:** Decode, immediate decode, load, save, and register addressing errors
//!    raised inside a cycle. These never abort the cycle; they are reported alongside its
//!    result.
//! 2. **Startup Errors:** Boot image and configuration failures, which are fatal.
//! 3. **Run Errors:** Faults escalated by the run loop under a strict error policy.

use std::path::PathBuf;

use smallvec::SmallVec;
use thiserror::Error;

use crate::isa::Category;

/// Failure of the load path of the memory access unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The unmasked address failed the word-index range check.
    ///
    /// The load latch keeps its previous value.
    #[error("load address {addr:#010x} is outside the loadable range")]
    OutOfRange {
        /// Unmasked effective address.
        addr: u32,
    },

    /// The width selector is neither byte (4) nor word (2).
    ///
    /// `word` is the unmodified word that was read; it becomes the loaded value.
    #[error("unsupported load width selector {funct3} at {addr:#010x}")]
    UnsupportedWidth {
        /// Width selector (funct3).
        funct3: u32,
        /// Unmasked effective address.
        addr: u32,
        /// Word read from memory before the selector was rejected.
        word: u32,
    },
}

/// Failure of the store path of the memory access unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SaveError {
    /// The width selector is neither byte (0) nor word (2). Memory is left unmodified.
    #[error("unsupported store width selector {funct3} at {addr:#010x}")]
    UnsupportedWidth {
        /// Width selector (funct3).
        funct3: u32,
        /// Unmasked effective address.
        addr: u32,
    },
}

/// A fault detected during one execution cycle.
///
/// Faults are detected locally, logged, and reported in the cycle report. Execution of the
/// cycle always runs to completion; the run loop decides whether to continue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ExecError {
    /// The instruction group (opcode bits 2-6) is not one of the decoded categories.
    ///
    /// The cycle proceeds as an immediate-arithmetic instruction with selector 0.
    #[error("decode error: unrecognized instruction group {group:#07b} in {raw:#010x}")]
    Decode {
        /// Raw instruction word.
        raw: u32,
        /// Extracted 5-bit group selector.
        group: u32,
    },

    /// The category has no immediate encoding; the immediate reads as 0.
    ///
    /// Raised for every register-arithmetic instruction. The run loop treats it as a
    /// diagnostic; see [`ExecError::is_diagnostic`].
    #[error("immediate decode error: {} has no immediate form", .category.name())]
    ImmediateDecode {
        /// Category that was decoded.
        category: Category,
    },

    /// Load path failure.
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// Store path failure.
    #[error("save error: {0}")]
    Save(#[from] SaveError),

    /// A register address outside `0..=31`.
    #[error("register address {0} is out of range")]
    Addressing(usize),
}

impl ExecError {
    /// Returns true for faults raised by well-formed instructions.
    ///
    /// Only [`ExecError::ImmediateDecode`] qualifies.
    /// [`ErrorPolicy::Halt`](crate::config::ErrorPolicy::Halt) does not stop on it, otherwise
    /// every `add` would halt the machine.
    pub const fn is_diagnostic(&self) -> bool {
        matches!(self, Self::ImmediateDecode { .. })
    }
}

/// Faults raised by one cycle, in stage order.
///
/// A cycle raises at most two in practice, so they stay inline.
pub type Faults = SmallVec<[ExecError; 2]>;

/// Fatal failure while reading a boot image.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The image file could not be read.
    #[error("could not read boot image '{}': {source}", .path.display())]
    Io {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Fewer bytes were read than the file reported.
    #[error("boot image is truncated: read {read} of {expected} bytes")]
    Truncated {
        /// Bytes announced by the file metadata.
        expected: usize,
        /// Bytes actually read.
        read: usize,
    },

    /// The image does not fit in general memory.
    #[error("boot image of {words} words does not fit in {capacity} words of memory")]
    TooLarge {
        /// Image length in words.
        words: usize,
        /// Memory capacity in words.
        capacity: usize,
    },
}

/// Invalid or unreadable configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("could not read configuration '{}': {source}", .path.display())]
    Io {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Memory size is not a power of two of at least one word.
    #[error("memory size {0:#x} must be a power of two of at least 4 bytes")]
    RamSize(usize),

    /// Pixel window base is not aligned to the window size.
    #[error("pixel window base {0:#010x} must be aligned to the window size")]
    FramebufferBase(u32),
}

/// Error returned by the run loop when the strict error policy stops execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// A cycle raised a non-diagnostic fault while running under
    /// [`ErrorPolicy::Halt`](crate::config::ErrorPolicy::Halt).
    ///
    /// The faulting cycle's state changes have been committed.
    #[error("halted at pc {pc:#010x}: {source}")]
    Halted {
        /// PC of the faulting instruction.
        pc: u32,
        /// The first fault raised by that cycle.
        #[source]
        source: ExecError,
    },
}
