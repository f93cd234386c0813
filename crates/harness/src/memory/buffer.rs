//! Raw backing buffer for the memory image.
//!
//! This module provides a safe wrapper around raw memory allocation for the
//! bus memory. On Unix it uses anonymous `mmap`, so the default 128 MiB image
//! is allocated lazily: pages are only committed by the OS when touched, which
//! keeps startup cheap and host memory pressure proportional to the loaded
//! binary, not the configured capacity. Pages start zero-filled on both paths.

use std::slice;

/// A fixed-size, zero-initialized byte buffer.
///
/// Bounds are asserted on every access; callers are expected to have range
/// checked addresses when the transaction was accepted, so a violation here
/// is a responder bug rather than a runtime condition.
pub struct ImageBuffer {
    ptr: *mut u8,
    size: usize,
    is_mmap: bool,
}

// The buffer is exclusively owned by the MemoryImage; raw pointers only make
// it !Send by default.
unsafe impl Send for ImageBuffer {}
unsafe impl Sync for ImageBuffer {}

impl ImageBuffer {
    /// Creates a new zeroed buffer of the given size in bytes.
    ///
    /// On Unix, uses `mmap` for lazy allocation; on other platforms, allocates
    /// a `Vec`. Panics if `mmap` fails.
    pub fn new(size: usize) -> Self {
        #[cfg(unix)]
        {
            use std::ptr;
            let ptr = unsafe {
                libc::mmap(
                    ptr::null_mut(),
                    size,
                    libc::PROT_READ | libc::PROT_WRITE,
                    libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                    -1,
                    0,
                )
            };

            if ptr == libc::MAP_FAILED {
                panic!("failed to mmap image buffer of size {}", size);
            }

            Self {
                ptr: ptr as *mut u8,
                size,
                is_mmap: true,
            }
        }

        #[cfg(not(unix))]
        {
            let mut vec = vec![0u8; size];
            let ptr = vec.as_mut_ptr();
            std::mem::forget(vec);
            Self {
                ptr,
                size,
                is_mmap: false,
            }
        }
    }

    /// Returns the buffer size in bytes.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the buffer has zero capacity.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Reads a single byte.
    pub fn read_u8(&self, offset: usize) -> u8 {
        assert!(offset < self.size, "image read out of bounds");
        unsafe { *self.ptr.add(offset) }
    }

    /// Writes a single byte.
    pub fn write_u8(&mut self, offset: usize, val: u8) {
        assert!(offset < self.size, "image write out of bounds");
        unsafe {
            *self.ptr.add(offset) = val;
        }
    }

    /// Returns a borrowed slice of the buffer.
    pub fn read_slice(&self, offset: usize, len: usize) -> &[u8] {
        assert!(
            offset.checked_add(len).is_some_and(|end| end <= self.size),
            "image read out of bounds"
        );
        unsafe { slice::from_raw_parts(self.ptr.add(offset), len) }
    }

    /// Copies `data` into the buffer at `offset`.
    pub fn write_slice(&mut self, offset: usize, data: &[u8]) {
        assert!(
            offset
                .checked_add(data.len())
                .is_some_and(|end| end <= self.size),
            "image write out of bounds"
        );
        unsafe {
            std::ptr::copy_nonoverlapping(data.as_ptr(), self.ptr.add(offset), data.len());
        }
    }
}

impl Drop for ImageBuffer {
    fn drop(&mut self) {
        if self.is_mmap {
            #[cfg(unix)]
            unsafe {
                libc::munmap(self.ptr as *mut _, self.size);
            }
        } else {
            #[cfg(not(unix))]
            unsafe {
                let _ = Vec::from_raw_parts(self.ptr, self.size, self.size);
            }
        }
    }
}
