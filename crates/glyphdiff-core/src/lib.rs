//! glyphdiff-core - Data structures and scoring engine for glyph comparison
//!
//! This crate provides the in-memory half of the glyphdiff pipeline:
//!
//! - [`Bitmap`] - one decoded monochrome image
//! - [`BitmapStore`] - insertion-ordered collection of bitmaps; the index is
//!   the stable identity used in output
//! - [`DiffEngine`] / [`compare`] - edge-tolerant pairwise scoring
//! - [`for_each_pair`] / [`score_pairs`] - the all-pairs driver
//!
//! Parsing bitmaps out of a byte stream lives in `glyphdiff-io`.

pub mod bitmap;
pub mod compare;
pub mod error;
pub mod pairs;
pub mod store;

pub use bitmap::{BLACK, Bitmap, WHITE};
pub use compare::{DiffEngine, compare};
pub use error::{Error, Result};
pub use pairs::{PairScore, for_each_pair, score_pairs};
pub use store::BitmapStore;
