//! Flat binary loader tests.

use std::io::Write as _;

use cosim_core::error::HarnessError;
use cosim_core::loader::load_image;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

#[test]
fn reads_the_whole_file_verbatim() {
    let mut file = NamedTempFile::new().unwrap();
    // Arbitrary bytes, including ones an encoding-aware reader would mangle.
    let payload = [0x7F, b'E', b'L', b'F', 0x00, 0xFF, 0x0A, 0x0D];
    file.write_all(&payload).unwrap();
    file.flush().unwrap();

    let image = load_image(file.path()).unwrap();
    assert_eq!(image, payload);
}

#[test]
fn empty_file_is_an_empty_image() {
    let file = NamedTempFile::new().unwrap();
    assert!(load_image(file.path()).unwrap().is_empty());
}

#[test]
fn missing_file_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-image.bin");
    let err = load_image(&path).unwrap_err();
    match err {
        HarnessError::Image { path: reported, .. } => {
            assert!(reported.ends_with("no-such-image.bin"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
