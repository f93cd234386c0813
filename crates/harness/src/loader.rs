//! Flat binary image loading.
//!
//! Images are opaque blobs: no format or header is parsed. The whole file is
//! read into memory and placed at the memory base before cycle 0.

use std::fs;
use std::path::Path;

use crate::error::HarnessError;

/// Reads a flat binary image from disk.
///
/// # Errors
///
/// Returns [`HarnessError::Image`] when the file cannot be read.
pub fn load_image(path: &Path) -> Result<Vec<u8>, HarnessError> {
    fs::read(path).map_err(|source| HarnessError::Image {
        path: path.display().to_string(),
        source,
    })
}
