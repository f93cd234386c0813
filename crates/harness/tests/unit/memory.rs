//! Memory image tests.

use cosim_core::error::HarnessError;
use cosim_core::memory::MemoryImage;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn fresh_image_is_zero_filled() {
    let image = MemoryImage::new(4096, 0);
    assert_eq!(image.capacity(), 4096);
    assert_eq!(image.read_beat(0, 8), 0);
    assert!(image.read_slice(0, 4096).iter().all(|&b| b == 0));
}

#[test]
fn load_at_places_the_blob() {
    let mut image = MemoryImage::new(4096, 0);
    image.load_at(0x10, &[1, 2, 3, 4]).unwrap();
    assert_eq!(image.read_slice(0x10, 4), &[1, 2, 3, 4]);
    // Neighbors untouched.
    assert_eq!(image.read_slice(0x0F, 1), &[0]);
    assert_eq!(image.read_slice(0x14, 1), &[0]);
}

#[test]
fn load_at_rejects_an_overflowing_blob() {
    let mut image = MemoryImage::new(16, 0);
    let err = image.load_at(10, &[0; 8]).unwrap_err();
    assert!(matches!(
        err,
        HarnessError::ImageTooLarge {
            len: 8,
            offset: 10,
            capacity: 16,
        }
    ));
}

#[test]
fn load_at_exactly_filling_succeeds() {
    let mut image = MemoryImage::new(16, 0);
    image.load_at(0, &[0xAA; 16]).unwrap();
    assert_eq!(image.read_slice(0, 16), &[0xAA; 16]);
}

#[rstest]
#[case::at_base(0x8000_0000, 8, Some(0))]
#[case::interior(0x8000_0010, 8, Some(0x10))]
#[case::last_byte(0x8000_0FFF, 1, Some(0xFFF))]
#[case::below_base(0x7FFF_FFF8, 8, None)]
#[case::past_end(0x8000_0FF9, 8, None)]
#[case::end_overflow(u64::MAX, 8, None)]
fn check_range_enforces_the_window(
    #[case] addr: u64,
    #[case] bytes: u64,
    #[case] offset: Option<usize>,
) {
    let image = MemoryImage::new(4096, 0x8000_0000);
    match offset {
        Some(expected) => assert_eq!(image.check_range(addr, bytes).unwrap(), expected),
        None => {
            let err = image.check_range(addr, bytes).unwrap_err();
            assert!(matches!(err, HarnessError::OutOfRange { .. }));
        }
    }
}

#[test]
fn beats_are_little_endian() {
    let mut image = MemoryImage::new(64, 0);
    image.load_at(0, &[0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]).unwrap();
    assert_eq!(image.read_beat(0, 8), 0x8877_6655_4433_2211);
    assert_eq!(image.read_beat(0, 4), 0x4433_2211);
    assert_eq!(image.read_beat(4, 2), 0x6655);
    assert_eq!(image.read_beat(7, 1), 0x88);
}

#[test]
fn write_beat_honors_the_strobe() {
    let mut image = MemoryImage::new(64, 0);
    image.load_at(0, &[0xFF; 8]).unwrap();
    image.write_beat(0, 8, 0x1122_3344_5566_7788, 0b0101_0101);
    assert_eq!(
        image.read_slice(0, 8),
        &[0x88, 0xFF, 0x66, 0xFF, 0x44, 0xFF, 0x22, 0xFF]
    );
}

#[test]
fn write_beat_with_zero_strobe_writes_nothing() {
    let mut image = MemoryImage::new(64, 0);
    image.load_at(0, &[0xFF; 8]).unwrap();
    image.write_beat(0, 8, 0, 0);
    assert_eq!(image.read_beat(0, 8), u64::MAX);
}

#[test]
fn narrow_write_beat_touches_only_its_bytes() {
    let mut image = MemoryImage::new(64, 0);
    image.write_beat(4, 4, 0xDEAD_BEEF, 0x0F);
    assert_eq!(image.read_beat(0, 8), 0xDEAD_BEEF_0000_0000);
}
