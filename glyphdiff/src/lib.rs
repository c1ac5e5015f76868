//! glyphdiff - Pairwise visual similarity scoring for glyph bitmaps
//!
//! Takes a stream of concatenated P5 (binary PGM) images, typically one
//! rendered character per image, and scores every unordered pair by visual
//! similarity so the batch can be clustered or deduplicated.
//!
//! # Example
//!
//! ```
//! use glyphdiff::{Bitmap, BitmapStore, score_pairs};
//!
//! let store: BitmapStore = (0..3).map(|_| Bitmap::new(8, 8).unwrap()).collect();
//! let scores = score_pairs(&store).unwrap();
//! assert_eq!(scores.len(), 3);
//! assert_eq!(scores[0].score, 1.0);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use glyphdiff_core::*;

// Re-export stream I/O as a module
pub use glyphdiff_io as io;
