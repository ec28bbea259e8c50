//! General-Purpose Register File.
//!
//! This module implements the register file of the emulated core. It provides:
//! 1. **Storage:** 31 mutable 32-bit registers (`x1`-`x31`).
//! 2. **Invariant Enforcement:** Register `x0` reads as zero and ignores writes.
//! 3. **Addressing Checks:** Addresses outside `0..=31` are reported as errors.
//! 4. **Debugging:** Register dump for diagnostics.

use std::fmt;

use super::constants::REGISTER_COUNT;
use super::error::ExecError;

/// General-purpose register file with a hardwired-zero `x0`.
///
/// Only `x1`-`x31` have storage; `x0` is synthesized on read.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; REGISTER_COUNT - 1],
}

impl RegisterFile {
    /// Creates a register file with every register set to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; REGISTER_COUNT - 1],
        }
    }

    /// Reads a register.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::Addressing`] if `idx` is greater than 31.
    ///
    /// # Examples
    ///
    /// ```
    /// use minirv_core::common::RegisterFile;
    ///
    /// let regs = RegisterFile::new();
    /// assert_eq!(regs.read(0), Ok(0));
    /// assert!(regs.read(32).is_err());
    /// ```
    pub fn read(&self, idx: usize) -> Result<u32, ExecError> {
        match idx {
            0 => Ok(0),
            1..REGISTER_COUNT => Ok(self.regs[idx - 1]),
            _ => Err(ExecError::Addressing(idx)),
        }
    }

    /// Writes a register. Writes to `x0` are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::Addressing`] if `idx` is greater than 31.
    pub fn write(&mut self, idx: usize, val: u32) -> Result<(), ExecError> {
        match idx {
            0 => Ok(()),
            1..REGISTER_COUNT => {
                self.regs[idx - 1] = val;
                Ok(())
            }
            _ => Err(ExecError::Addressing(idx)),
        }
    }

    /// Returns all 32 architectural register values, `x0` first.
    pub fn snapshot(&self) -> [u32; REGISTER_COUNT] {
        let mut out = [0; REGISTER_COUNT];
        out[1..].copy_from_slice(&self.regs);
        out
    }

    /// Dumps the register file to stdout, four registers per line.
    pub fn dump(&self) {
        print!("{self}");
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chunk) in self.snapshot().chunks(4).enumerate() {
            for (j, val) in chunk.iter().enumerate() {
                if j > 0 {
                    f.write_str("  ")?;
                }
                write!(f, "x{:<2}={val:#010x}", i * 4 + j)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterFile")
            .field("regs", &self.snapshot())
            .finish()
    }
}
