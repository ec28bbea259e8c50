//! Load/Store Unit (LSU).
//!
//! This module implements the memory access unit. It provides:
//! 1. **Loads:** Word (`funct3 = 2`) and zero-extended byte (`funct3 = 4`) loads after the
//!    word-index range check.
//! 2. **Stores:** Byte (`funct3 = 0`) stores into masked memory and word (`funct3 = 2`)
//!    stores routed through the [`System`], which redirects the pixel window.
//! 3. **Width faults:** Any other selector is reported; see [`LoadError`] and [`SaveError`]
//!    for the value each failure leaves behind.

use crate::common::{LoadError, SaveError};
use crate::isa::rv32i::funct3;
use crate::soc::memory::Memory;
use crate::soc::{StoreTarget, System};

/// Load/Store Unit for the memory stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lsu;

impl Lsu {
    /// Loads from the unmasked effective address `addr`.
    ///
    /// # Errors
    ///
    /// - [`LoadError::OutOfRange`] if `addr` fails [`Memory::in_load_range`]; nothing is read.
    /// - [`LoadError::UnsupportedWidth`] for selectors other than `LW` and `LBU`, carrying the
    ///   unmodified word that was read.
    pub fn load(mem: &Memory, funct3: u32, addr: u32) -> Result<u32, LoadError> {
        if !mem.in_load_range(addr) {
            return Err(LoadError::OutOfRange { addr });
        }
        let word = mem.read_word(addr);
        match funct3 {
            funct3::LBU => Ok(u32::from(mem.read_byte(addr))),
            funct3::LW => Ok(word),
            _ => Err(LoadError::UnsupportedWidth { funct3, addr, word }),
        }
    }

    /// Stores `val` at the unmasked effective address `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError::UnsupportedWidth`] for selectors other than `SB` and `SW`;
    /// memory and the framebuffer are left unmodified.
    pub fn store(
        sys: &mut System,
        funct3: u32,
        addr: u32,
        val: u32,
    ) -> Result<StoreTarget, SaveError> {
        match funct3 {
            funct3::SB => {
                sys.store_byte(addr, val as u8);
                Ok(StoreTarget::Memory {
                    addr: sys.memory.mask(addr),
                })
            }
            funct3::SW => Ok(sys.store_word(addr, val)),
            _ => Err(SaveError::UnsupportedWidth { funct3, addr }),
        }
    }
}
