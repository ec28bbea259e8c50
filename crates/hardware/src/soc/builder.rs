//! System construction and top-level `System` type.
//!
//! This module assembles the address space from configuration. It performs:
//! 1. **Memory setup:** Allocates general memory of the configured size.
//! 2. **Device registration:** Maps the pixel framebuffer at its configured window.
//! 3. **Store routing:** Sends word stores inside the window to the framebuffer and
//!    flushes the frame to the display sink; everything else goes to general memory.

use std::fmt;

use crate::common::ConfigError;
use crate::config::Config;
use crate::soc::devices::{Framebuffer, HeadlessDisplay};
use crate::soc::memory::Memory;
use crate::soc::traits::DisplaySink;

/// Where a word store landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreTarget {
    /// General memory, at the masked byte address.
    Memory {
        /// Masked byte address.
        addr: u32,
    },
    /// A framebuffer pixel.
    Pixel {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
    },
}

/// Top-level system: general memory, the pixel framebuffer, and the display sink.
pub struct System {
    /// General memory.
    pub memory: Memory,
    /// Memory-mapped pixel grid.
    pub framebuffer: Framebuffer,
    display: Box<dyn DisplaySink>,
    frames_presented: u64,
}

impl System {
    /// Builds a system from configuration with the given display sink.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails [`Config::validate`].
    pub fn new(config: &Config, display: Box<dyn DisplaySink>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            memory: Memory::new(config.system.ram_size),
            framebuffer: Framebuffer::new(config.system.framebuffer_base),
            display,
            frames_presented: 0,
        })
    }

    /// Builds a system that presents frames to a [`HeadlessDisplay`].
    ///
    /// # Errors
    ///
    /// As [`System::new`].
    pub fn headless(config: &Config) -> Result<Self, ConfigError> {
        Self::new(config, Box::new(HeadlessDisplay::new()))
    }

    /// Stores a word at the unmasked `addr`.
    ///
    /// Addresses inside the pixel window update one pixel and push the frame to the display
    /// before returning; general memory is untouched. Other addresses are masked into memory.
    pub fn store_word(&mut self, addr: u32, val: u32) -> StoreTarget {
        if self.framebuffer.contains(addr) {
            let (row, col) = self.framebuffer.write(addr, val);
            self.present();
            StoreTarget::Pixel { row, col }
        } else {
            self.memory.write_word(addr, val);
            StoreTarget::Memory {
                addr: self.memory.mask(addr),
            }
        }
    }

    /// Stores a byte at `addr`. Byte stores always go to general memory.
    pub fn store_byte(&mut self, addr: u32, val: u8) {
        self.memory.write_byte(addr, val);
    }

    /// Pushes the current frame to the display sink.
    pub fn present(&mut self) {
        self.frames_presented += 1;
        tracing::debug!(frame = self.frames_presented, "presenting framebuffer");
        self.display.present(&self.framebuffer);
    }

    /// Number of frames pushed to the display sink.
    pub const fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl fmt::Debug for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("System")
            .field("memory", &self.memory)
            .field("framebuffer", &self.framebuffer)
            .field("frames_presented", &self.frames_presented)
            .finish_non_exhaustive()
    }
}
