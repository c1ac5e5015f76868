//! Error types for glyphdiff-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// glyphdiff-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Pixel buffer length does not match the stated dimensions
    #[error("pixel buffer length {len} does not match dimensions {width}x{height}")]
    DimensionMismatch { width: u32, height: u32, len: usize },

    /// Pixel count is not addressable on this platform
    #[error("image dimensions overflow: {width}x{height}")]
    DimensionOverflow { width: u32, height: u32 },

    /// Memory allocation failed
    #[error("memory allocation failed")]
    AllocationFailed,
}

/// Result type alias for glyphdiff-core operations
pub type Result<T> = std::result::Result<T, Error>;
