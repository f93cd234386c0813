//! Harness error definitions.
//!
//! This module defines the fatal error type for the co-simulation harness. It provides:
//! 1. **Configuration errors:** Unreadable images, images larger than memory, bad JSON.
//! 2. **Bus errors:** Out-of-range addresses from accepted bus transactions.
//! 3. **Integration:** `std::error::Error` via `thiserror` for system-level reporting.
//!
//! Verification mismatches and timeouts are deliberately *not* errors: they are
//! terminal causes of a run (see [`crate::runner::TerminalCause`]) and are returned
//! as values so the run controller can make termination decisions centrally.

use thiserror::Error;

/// Fatal harness errors. Every variant aborts the current run; nothing is retried.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The binary image file could not be read from disk.
    #[error("could not read image '{path}': {source}")]
    Image {
        /// Path that was passed to the loader.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The binary image does not fit in the memory image at the load offset.
    #[error("image of {len} bytes does not fit in {capacity} byte memory at offset {offset:#x}")]
    ImageTooLarge {
        /// Image length in bytes.
        len: usize,
        /// Load offset within the memory image.
        offset: u64,
        /// Memory capacity in bytes.
        capacity: usize,
    },

    /// An accepted bus transaction references bytes beyond the memory capacity.
    ///
    /// Raised at address-phase acceptance, before any data movement. This is
    /// a fatal configuration error rather than a recoverable bus error:
    /// addresses never silently wrap or truncate.
    #[error(
        "bus access out of range: {bytes} bytes at {addr:#x} exceed {capacity:#x} byte memory at base {base:#x}"
    )]
    OutOfRange {
        /// First byte address of the transaction.
        addr: u64,
        /// Total bytes covered by the transaction (all beats).
        bytes: u64,
        /// Memory base address.
        base: u64,
        /// Memory capacity in bytes.
        capacity: u64,
    },

    /// A JSON configuration blob failed to deserialize.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
