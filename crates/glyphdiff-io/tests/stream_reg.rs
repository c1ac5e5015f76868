//! Glyph stream file regression test
//!
//! Exercises the path-based entry points against real files: a multi-image
//! stream with a truncated tail, writer round-trips through the filesystem,
//! and the error path for a missing file.

use glyphdiff_core::Bitmap;
use glyphdiff_io::{IoError, read_glyph_stream, write_pgm_file};
use std::fs;

fn image_bytes(width: u32, height: u32, pixels: &[u8]) -> Vec<u8> {
    let mut bytes = format!("P5\n{width} {height}\n255\n").into_bytes();
    bytes.extend_from_slice(pixels);
    bytes
}

#[test]
fn stream_reg_truncated_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("glyphs.pgm");

    let mut data = image_bytes(2, 2, &[0, 255, 255, 0]);
    data.extend_from_slice(&image_bytes(3, 1, &[255, 0, 255]));
    // A third image cut off mid-pixels, as a crashed generator leaves it.
    data.extend_from_slice(b"P5 4 4 255\n\x00\x01");
    fs::write(&path, &data).unwrap();

    let store = read_glyph_stream(&path).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.dimensions(0), Some((2, 2)));
    assert_eq!(store.dimensions(1), Some((3, 1)));
}

#[test]
fn stream_reg_writer_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("glyph.pgm");

    let bitmap = Bitmap::from_raw(4, 2, vec![0, 0, 255, 255, 255, 0, 0, 255]).unwrap();
    write_pgm_file(&bitmap, &path).unwrap();

    let store = read_glyph_stream(&path).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(0), Some(&bitmap));
}

#[test]
fn stream_reg_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_glyph_stream(dir.path().join("no-such-file.pgm")).unwrap_err();
    assert!(matches!(err, IoError::Io(_)));
}
