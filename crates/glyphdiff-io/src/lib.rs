//! glyphdiff-io - Glyph stream I/O
//!
//! Reads concatenated P5 (binary PGM) images into a
//! [`BitmapStore`](glyphdiff_core::BitmapStore) and writes single bitmaps
//! back out as P5. The parser tolerates truncated and malformed streams by
//! stopping early; see [`pgm`] for the exact contract.

pub mod error;
pub mod pgm;

pub use error::{IoError, IoResult};
pub use pgm::{read_glyph_stream, read_glyph_stream_mem, write_pgm, write_pgm_file};
