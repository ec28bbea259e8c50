//! Memory-Mapped Pixel Framebuffer.
//!
//! A 256 x 256 grid of 32-bit pixels exposed through a 256 KiB window on the store path.
//! A word store at window offset `off` writes row `(off >> 10) & 0xFF`, column
//! `(off >> 2) & 0xFF`. Pixels are interpreted as `0x00RRGGBB` when exported.

use crate::common::constants::{FRAMEBUFFER_HEIGHT, FRAMEBUFFER_WIDTH, FRAMEBUFFER_WINDOW};

/// Bit shift extracting the row from a window offset.
const ROW_SHIFT: u32 = 10;

/// Bit shift extracting the column from a window offset.
const COL_SHIFT: u32 = 2;

/// Mask for an 8-bit row or column index.
const COORD_MASK: u32 = 0xFF;

/// Pixel grid mapped at a fixed base address.
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    base: u32,
    pixels: Vec<u32>,
}

impl Framebuffer {
    /// Creates a black framebuffer whose window starts at `base`.
    pub fn new(base: u32) -> Self {
        Self {
            base,
            pixels: vec![0; FRAMEBUFFER_WIDTH * FRAMEBUFFER_HEIGHT],
        }
    }

    /// Returns the window base address.
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Returns true if the unmasked `addr` falls inside `[base, base + 0x40000)`.
    pub const fn contains(&self, addr: u32) -> bool {
        addr.wrapping_sub(self.base) < FRAMEBUFFER_WINDOW
    }

    /// Returns the `(row, column)` addressed by `addr`.
    ///
    /// ```
    /// use minirv_core::soc::devices::Framebuffer;
    ///
    /// let fb = Framebuffer::new(0x2000_0000);
    /// assert_eq!(fb.coords(0x2000_0004), (0, 1));
    /// assert_eq!(fb.coords(0x2000_0400), (1, 0));
    /// ```
    pub const fn coords(&self, addr: u32) -> (usize, usize) {
        let off = addr.wrapping_sub(self.base);
        (
            ((off >> ROW_SHIFT) & COORD_MASK) as usize,
            ((off >> COL_SHIFT) & COORD_MASK) as usize,
        )
    }

    /// Writes the pixel addressed by `addr` and returns its coordinate.
    pub fn write(&mut self, addr: u32, val: u32) -> (usize, usize) {
        let (row, col) = self.coords(addr);
        self.pixels[row * FRAMEBUFFER_WIDTH + col] = val;
        (row, col)
    }

    /// Returns the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 256 or more.
    pub fn pixel(&self, row: usize, col: usize) -> u32 {
        assert!(
            row < FRAMEBUFFER_HEIGHT && col < FRAMEBUFFER_WIDTH,
            "pixel ({row}, {col}) out of bounds"
        );
        self.pixels[row * FRAMEBUFFER_WIDTH + col]
    }

    /// Returns all pixels in row-major order.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Returns an iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.pixels.chunks_exact(FRAMEBUFFER_WIDTH)
    }

    /// Encodes the frame as a binary PPM (`P6`) image.
    pub fn to_ppm(&self) -> Vec<u8> {
        let header = format!("P6\n{FRAMEBUFFER_WIDTH} {FRAMEBUFFER_HEIGHT}\n255\n");
        let mut out = Vec::with_capacity(header.len() + self.pixels.len() * 3);
        out.extend_from_slice(header.as_bytes());
        for &px in &self.pixels {
            out.extend_from_slice(&[(px >> 16) as u8, (px >> 8) as u8, px as u8]);
        }
        out
    }
}

impl std::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lit = self.pixels.iter().filter(|&&px| px != 0).count();
        f.debug_struct("Framebuffer")
            .field("base", &format_args!("{:#010x}", self.base))
            .field("lit_pixels", &lit)
            .finish()
    }
}
