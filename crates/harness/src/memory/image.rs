//! Byte-addressable memory image behind the bus responder.
//!
//! The image occupies a fixed window `[base, base + capacity)` of the bus
//! address space. It is pre-loaded from a flat binary blob before cycle 0 and
//! afterwards mutated only by accepted write transactions. All range checking
//! happens here: any transaction that touches a byte outside the window is a
//! fatal configuration error, never a silent wrap.

use crate::error::HarnessError;
use crate::memory::buffer::ImageBuffer;

/// Fixed-capacity memory image with a bus base address.
pub struct MemoryImage {
    buf: ImageBuffer,
    base: u64,
}

impl MemoryImage {
    /// Creates a zero-filled image of `size` bytes based at `base`.
    pub fn new(size: usize, base: u64) -> Self {
        Self {
            buf: ImageBuffer::new(size),
            base,
        }
    }

    /// Returns the image capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the bus base address of the image.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Loads a binary blob at `offset` bytes past the base address.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::ImageTooLarge`] when the blob does not fit.
    pub fn load_at(&mut self, offset: u64, data: &[u8]) -> Result<(), HarnessError> {
        let end = (offset as usize).checked_add(data.len());
        if !end.is_some_and(|end| end <= self.buf.len()) {
            return Err(HarnessError::ImageTooLarge {
                len: data.len(),
                offset,
                capacity: self.buf.len(),
            });
        }
        self.buf.write_slice(offset as usize, data);
        Ok(())
    }

    /// Validates that `[addr, addr + bytes)` lies inside the image window and
    /// returns the byte offset of `addr` within the image.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::OutOfRange`] when any byte falls outside.
    pub fn check_range(&self, addr: u64, bytes: u64) -> Result<usize, HarnessError> {
        let out_of_range = || HarnessError::OutOfRange {
            addr,
            bytes,
            base: self.base,
            capacity: self.buf.len() as u64,
        };

        let offset = addr.checked_sub(self.base).ok_or_else(out_of_range)?;
        let end = offset.checked_add(bytes).ok_or_else(out_of_range)?;
        if end > self.buf.len() as u64 {
            return Err(out_of_range());
        }
        Ok(offset as usize)
    }

    /// Reads one beat of `bytes` bytes (1..=8) at the given image offset,
    /// little-endian, into the low bits of the result.
    pub fn read_beat(&self, offset: usize, bytes: usize) -> u64 {
        debug_assert!(bytes >= 1 && bytes <= 8, "beat width out of range");
        let slice = self.buf.read_slice(offset, bytes);
        let mut word = [0u8; 8];
        word[..bytes].copy_from_slice(slice);
        u64::from_le_bytes(word)
    }

    /// Writes the strobed bytes of one beat at the given image offset.
    ///
    /// Bit `i` of `strb` enables byte `i` of the little-endian beat.
    pub fn write_beat(&mut self, offset: usize, bytes: usize, data: u64, strb: u8) {
        debug_assert!(bytes >= 1 && bytes <= 8, "beat width out of range");
        let data = data.to_le_bytes();
        for i in 0..bytes {
            if strb & (1 << i) != 0 {
                self.buf.write_u8(offset + i, data[i]);
            }
        }
    }

    /// Returns a borrowed slice of the image contents.
    pub fn read_slice(&self, offset: usize, len: usize) -> &[u8] {
        self.buf.read_slice(offset, len)
    }
}
