//! Memory image backing the bus responder.

/// Raw mmap-backed byte buffer.
pub mod buffer;
/// Byte-addressable image with base address and range checking.
pub mod image;

pub use image::MemoryImage;
