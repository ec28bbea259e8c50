//! General Memory.
//!
//! This module implements the flat word store backing the address space. It provides:
//! 1. **Wrapping:** Every byte address is masked into the power-of-two capacity, so
//!    out-of-range addresses alias rather than fault.
//! 2. **Access:** Word and byte reads/writes; byte writes merge into the containing word.
//! 3. **Load range check:** The word-index check the load path applies before masking.

/// Word-addressed, wrapping general memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    words: Vec<u32>,
    mask: u32,
}

impl Memory {
    /// Largest capacity in bytes: the whole 32-bit address space.
    pub const MAX_SIZE: u64 = 1 << 32;

    /// Creates a zero-filled memory of `size` bytes.
    ///
    /// `size` is adjusted by [`Memory::capacity_for`];
    /// [`Config::validate`](crate::config::Config::validate) rejects such sizes earlier.
    pub fn new(size: usize) -> Self {
        let size = Self::capacity_for(size);
        Self {
            words: vec![0; (size / 4) as usize],
            mask: (size - 1) as u32,
        }
    }

    /// Returns the capacity in bytes that [`Memory::new`] allocates for `size`.
    ///
    /// Sizes are clamped to `4..=MAX_SIZE` and rounded up to a power of two.
    ///
    /// ```
    /// use minirv_core::soc::memory::Memory;
    ///
    /// assert_eq!(Memory::capacity_for(0), 4);
    /// assert_eq!(Memory::capacity_for(0x3000), 0x4000);
    /// assert_eq!(Memory::capacity_for(usize::MAX), Memory::MAX_SIZE);
    /// ```
    pub const fn capacity_for(size: usize) -> u64 {
        let size = size as u64;
        let size = if size < 4 {
            4
        } else if size > Self::MAX_SIZE {
            Self::MAX_SIZE
        } else {
            size
        };
        size.next_power_of_two()
    }

    /// Returns the capacity in bytes.
    pub const fn size(&self) -> usize {
        self.mask as usize + 1
    }

    /// Returns the capacity in 32-bit words.
    pub fn capacity_words(&self) -> usize {
        self.words.len()
    }

    /// Masks a byte address into range.
    ///
    /// ```
    /// use minirv_core::soc::memory::Memory;
    ///
    /// let mem = Memory::new(0x100);
    /// assert_eq!(mem.mask(0x1_0004), 0x4);
    /// ```
    pub const fn mask(&self, addr: u32) -> u32 {
        addr & self.mask
    }

    #[inline(always)]
    fn index(&self, addr: u32) -> usize {
        (self.mask(addr) >> 2) as usize
    }

    /// Reads the word containing `addr`.
    pub fn read_word(&self, addr: u32) -> u32 {
        self.words[self.index(addr)]
    }

    /// Writes the word containing `addr`.
    pub fn write_word(&mut self, addr: u32, val: u32) {
        let idx = self.index(addr);
        self.words[idx] = val;
    }

    /// Reads the byte at `addr` (byte 0 is the least significant byte of its word).
    pub fn read_byte(&self, addr: u32) -> u8 {
        (self.read_word(addr) >> byte_shift(addr)) as u8
    }

    /// Writes the byte at `addr`, leaving the other three bytes of the word intact.
    pub fn write_byte(&mut self, addr: u32, val: u8) {
        let shift = byte_shift(addr);
        let word = self.read_word(addr) & !(0xFF << shift);
        self.write_word(addr, word | (u32::from(val) << shift));
    }

    /// Returns true if a load from the unmasked `addr` passes the range check.
    ///
    /// The check compares the word index of `addr` against the memory size in bytes, so
    /// loads wrap for addresses below four times the size and fault above it.
    pub fn in_load_range(&self, addr: u32) -> bool {
        u64::from(addr >> 2) < self.size() as u64
    }

    /// Copies `data` into consecutive words starting at word-aligned `addr`, wrapping.
    pub fn write_words(&mut self, addr: u32, data: &[u32]) {
        let mut cursor = addr;
        for &word in data {
            self.write_word(cursor, word);
            cursor = cursor.wrapping_add(4);
        }
    }

    /// Returns the backing words.
    pub fn words(&self) -> &[u32] {
        &self.words
    }
}

const fn byte_shift(addr: u32) -> u32 {
    (addr & 0b11) * 8
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("size", &format_args!("{:#x}", self.size()))
            .finish_non_exhaustive()
    }
}
