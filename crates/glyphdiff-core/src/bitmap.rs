//! Bitmap - monochrome image container
//!
//! A `Bitmap` is one decoded image: width, height, and a row-major byte
//! buffer with one byte per pixel. Rendered glyphs are effectively bilevel
//! (0 = black ink, 255 = white background), but any byte value is carried
//! through unchanged; nothing validates or quantizes pixel values.
//!
//! Bitmaps are immutable after construction. The parser builds them with
//! [`Bitmap::from_raw`] and they are never mutated afterwards.

use crate::error::{Error, Result};

/// White background value
pub const WHITE: u8 = 0xff;

/// Black ink value
pub const BLACK: u8 = 0x00;

/// One decoded monochrome image
///
/// # Examples
///
/// ```
/// use glyphdiff_core::Bitmap;
///
/// let bitmap = Bitmap::new(4, 3).unwrap();
/// assert_eq!(bitmap.width(), 4);
/// assert_eq!(bitmap.height(), 3);
/// assert_eq!(bitmap.area(), 12);
/// assert!(bitmap.pixels().iter().all(|&p| p == 0xff));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Create a white-filled bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionOverflow`] if `width * height` is not
    /// addressable, or [`Error::AllocationFailed`] if the pixel buffer
    /// cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let area = checked_area(width, height)?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(area)
            .map_err(|_| Error::AllocationFailed)?;
        pixels.resize(area, WHITE);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a bitmap from an existing row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `pixels.len()` is not
    /// `width * height`.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let area = checked_area(width, height)?;
        if pixels.len() != area {
            return Err(Error::DimensionMismatch {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total pixel count (`width * height`)
    #[inline]
    pub fn area(&self) -> usize {
        self.pixels.len()
    }

    /// The full row-major pixel buffer
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get the pixel value at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Get one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }
}

fn checked_area(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::DimensionOverflow { width, height })
}
