//! Boot Image Loader.
//!
//! This module reads flat binary boot images into general memory. It performs:
//! 1. **Binary loading:** Reads the image file into a byte buffer.
//! 2. **Word assembly:** Splits the bytes into 32-bit words in host byte order; trailing
//!    bytes that do not fill a word are dropped.
//! 3. **Placement:** Writes the words at address 0, rejecting images larger than memory.
//!
//! Every failure is fatal: no cycle may run on a partially loaded image.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::common::ImageError;
use crate::soc::memory::Memory;

/// Reads a binary file from disk.
///
/// # Errors
///
/// - [`ImageError::Io`] if the file cannot be opened or read.
/// - [`ImageError::Truncated`] if fewer bytes arrive than the file's length announced.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>, ImageError> {
    let path = path.as_ref();
    let io_err = |source| ImageError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_err)?;
    let expected = file.metadata().map_err(io_err)?.len() as usize;
    let mut bytes = Vec::with_capacity(expected);
    let read = file.read_to_end(&mut bytes).map_err(io_err)?;
    if read < expected {
        return Err(ImageError::Truncated { expected, read });
    }
    Ok(bytes)
}

/// Splits an image into 32-bit words in host byte order.
///
/// Only whole words are kept; up to three trailing bytes are ignored.
///
/// # Examples
///
/// ```
/// use minirv_core::sim::loader::image_words;
///
/// let bytes = 0x1234_5678u32.to_ne_bytes();
/// assert_eq!(image_words(&bytes), vec![0x1234_5678]);
/// assert!(image_words(&bytes[..3]).is_empty());
/// ```
pub fn image_words(bytes: &[u8]) -> Vec<u32> {
    let chunks = bytes.chunks_exact(4);
    let tail = chunks.remainder().len();
    if tail != 0 {
        tracing::warn!(len = bytes.len(), tail, "boot image ends mid-word, ignoring tail");
    }
    chunks
        .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

/// Places `words` at address 0 of `mem`.
///
/// # Errors
///
/// Returns [`ImageError::TooLarge`] if the words do not fit; memory is left untouched.
pub fn place_words(mem: &mut Memory, words: &[u32]) -> Result<(), ImageError> {
    let capacity = mem.capacity_words();
    if words.len() > capacity {
        return Err(ImageError::TooLarge {
            words: words.len(),
            capacity,
        });
    }
    mem.write_words(0, words);
    Ok(())
}

/// Loads the image at `path` into `mem` starting at address 0.
///
/// Returns the number of words loaded.
///
/// # Errors
///
/// Any [`ImageError`]; memory is unmodified on failure.
pub fn load_image(mem: &mut Memory, path: impl AsRef<Path>) -> Result<usize, ImageError> {
    let path = path.as_ref();
    let bytes = load_binary(path)?;
    let words = image_words(&bytes);
    place_words(mem, &words)?;
    tracing::debug!(path = %path.display(), words = words.len(), "boot image loaded");
    Ok(words.len())
}
