//! P5 (binary PGM) glyph stream support
//!
//! The input is a sequence of P5 images stored back-to-back with no count
//! header and no delimiter beyond the next image's own header:
//!
//! ```text
//! "P5" <ws> <width> <ws> <height> <ws> <maxval> <separator byte> <width*height raw bytes>
//! ```
//!
//! Upstream glyph generators crash and leave partial streams behind, so the
//! parser self-terminates on any structural anomaly and keeps every image
//! decoded up to that point instead of erroring hard. The stop reason is
//! logged, never surfaced.

use crate::error::IoResult;
use glyphdiff_core::{Bitmap, BitmapStore};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

const MAGIC: &[u8] = b"P5";

/// Why the parser stopped consuming the stream
#[derive(Debug)]
enum ParseStop {
    /// Clean end: no bytes left after the previous image
    EndOfStream,
    /// The next bytes are not a P5 magic tag
    Magic,
    /// Width, height, or maxval missing or not a decimal integer
    Header,
    /// maxval above 255 would need two bytes per pixel
    Depth(u64),
    /// The single byte after the header triple is not PNM whitespace
    Separator(u8),
    /// Fewer pixel bytes available than the header promises
    TruncatedPixels { expected: usize, available: usize },
    /// Dimensions too large to address or to allocate
    Dimensions,
}

/// Parse every well-formed image from an in-memory glyph stream.
///
/// Decoding stops at the first structural anomaly (bad magic, bad header,
/// maxval > 255, bad separator, truncated pixel data); everything decoded
/// before that point is kept. An image started but not fully read is not
/// kept. This never fails: the worst input yields an empty store.
pub fn read_glyph_stream_mem(data: &[u8]) -> BitmapStore {
    let mut store = BitmapStore::new();
    let mut pos = 0;
    loop {
        match parse_image(data, pos) {
            Ok((bitmap, next)) => {
                store.push(bitmap);
                pos = next;
            }
            Err(stop) => {
                log_stop(&stop, pos, store.len());
                break;
            }
        }
    }
    store
}

/// Read and parse a glyph stream from a file.
///
/// # Errors
///
/// Returns [`crate::IoError::Io`] if the file cannot be opened or read.
/// Structural problems inside the stream are not errors; see
/// [`read_glyph_stream_mem`].
pub fn read_glyph_stream<P: AsRef<Path>>(path: P) -> IoResult<BitmapStore> {
    let mut file = File::open(path)?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    Ok(read_glyph_stream_mem(&data))
}

/// Write one bitmap as a binary P5 image.
///
/// The header is `P5\n<width> <height>\n255\n` followed by the raw pixel
/// bytes, so writer output concatenates into a stream the parser accepts.
pub fn write_pgm<W: Write>(bitmap: &Bitmap, mut writer: W) -> IoResult<()> {
    write!(writer, "P5\n{} {}\n255\n", bitmap.width(), bitmap.height())?;
    writer.write_all(bitmap.pixels())?;
    Ok(())
}

/// Write one bitmap as a binary P5 file.
pub fn write_pgm_file<P: AsRef<Path>>(bitmap: &Bitmap, path: P) -> IoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_pgm(bitmap, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Decode one image starting at `pos`, returning it and the offset of the
/// byte after its pixel data.
fn parse_image(data: &[u8], mut pos: usize) -> Result<(Bitmap, usize), ParseStop> {
    if pos >= data.len() {
        return Err(ParseStop::EndOfStream);
    }
    if data.len() - pos < MAGIC.len() || &data[pos..pos + MAGIC.len()] != MAGIC {
        return Err(ParseStop::Magic);
    }
    pos += MAGIC.len();

    let (width, next) = parse_uint(data, pos).ok_or(ParseStop::Header)?;
    let (height, next) = parse_uint(data, next).ok_or(ParseStop::Header)?;
    let (maxval, next) = parse_uint(data, next).ok_or(ParseStop::Header)?;
    pos = next;

    if maxval > 255 {
        return Err(ParseStop::Depth(maxval));
    }

    // Exactly one separator byte between header and pixel data.
    let separator = *data.get(pos).ok_or(ParseStop::Header)?;
    if !matches!(separator, b' ' | b'\t' | b'\n' | b'\r') {
        return Err(ParseStop::Separator(separator));
    }
    pos += 1;

    let width = u32::try_from(width).map_err(|_| ParseStop::Dimensions)?;
    let height = u32::try_from(height).map_err(|_| ParseStop::Dimensions)?;
    let area = (width as u64)
        .checked_mul(height as u64)
        .and_then(|a| usize::try_from(a).ok())
        .ok_or(ParseStop::Dimensions)?;

    let available = data.len() - pos;
    if available < area {
        return Err(ParseStop::TruncatedPixels {
            expected: area,
            available,
        });
    }

    let mut pixels = Vec::new();
    if pixels.try_reserve_exact(area).is_err() {
        return Err(ParseStop::Dimensions);
    }
    pixels.extend_from_slice(&data[pos..pos + area]);
    let bitmap = Bitmap::from_raw(width, height, pixels).map_err(|_| ParseStop::Dimensions)?;
    Ok((bitmap, pos + area))
}

/// Skip PNM whitespace, then parse a run of decimal digits.
///
/// Returns the value and the offset of the first byte after the digits, or
/// `None` if no digit follows the whitespace or the value overflows.
fn parse_uint(data: &[u8], mut pos: usize) -> Option<(u64, usize)> {
    while pos < data.len() && is_pnm_space(data[pos]) {
        pos += 1;
    }
    let digits_start = pos;
    let mut value: u64 = 0;
    while pos < data.len() && data[pos].is_ascii_digit() {
        value = value
            .checked_mul(10)?
            .checked_add(u64::from(data[pos] - b'0'))?;
        pos += 1;
    }
    if pos == digits_start {
        return None;
    }
    Some((value, pos))
}

/// The whitespace set allowed between header fields
fn is_pnm_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn log_stop(stop: &ParseStop, offset: usize, decoded: usize) {
    match stop {
        ParseStop::EndOfStream => {
            debug!("glyph stream ends cleanly after {decoded} images");
        }
        ParseStop::Magic => {
            warn!("no P5 magic in image starting at offset {offset}; keeping {decoded} images");
        }
        ParseStop::Header => {
            warn!("unparsable header in image starting at offset {offset}; keeping {decoded} images");
        }
        ParseStop::Depth(maxval) => {
            warn!("maxval {maxval} exceeds 255 in image starting at offset {offset}; keeping {decoded} images");
        }
        ParseStop::Separator(byte) => {
            warn!(
                "invalid separator byte 0x{byte:02x} in image starting at offset {offset}; keeping {decoded} images"
            );
        }
        ParseStop::TruncatedPixels {
            expected,
            available,
        } => {
            warn!(
                "truncated pixel data in image starting at offset {offset}: need {expected} bytes, have {available}; keeping {decoded} images"
            );
        }
        ParseStop::Dimensions => {
            warn!("unusable dimensions in image starting at offset {offset}; keeping {decoded} images");
        }
    }
}
