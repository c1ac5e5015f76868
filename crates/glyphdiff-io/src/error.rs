//! I/O error types
//!
//! Structural problems inside the glyph stream are not errors: the parser
//! stops at the first anomaly and keeps whatever it decoded, because
//! truncated streams are an expected input. Only failures to reach the
//! stream at all (open/read) and core-library failures surface here.

use thiserror::Error;

/// Error type for glyph stream I/O
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the core library (allocation, dimension checks)
    #[error("core error: {0}")]
    Core(#[from] glyphdiff_core::Error),
}

/// Convenience alias for I/O results
pub type IoResult<T> = Result<T, IoError>;
