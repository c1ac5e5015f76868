//! Pairwise bitmap scoring
//!
//! Two bitmaps are compared by anchoring both at the top-left corner and
//! building a comparison canvas of `(2 + max(widths)) x (2 + max(heights))`
//! bytes with an always-white one-pixel border. Each interior cell is the
//! XOR of the two images at that coordinate, where a coordinate outside an
//! image's bounds samples as white background. For bilevel pixels the XOR is
//! black (0) exactly where the images agree, so the canvas is an agreement
//! map with a white border ring.
//!
//! The canvas is then reduced to a count of interior cells that are black or
//! have a black 4-neighbor. Dilating the black regions by one pixel before
//! counting gives the score a one-pixel edge tolerance: an isolated
//! single-pixel disagreement at a shape boundary is absorbed by the
//! surrounding agreement instead of lowering the score.
//!
//! `score = count / (max_width * max_height)`, in [0, 1]. Two identical
//! bitmaps score 1.0; bitmaps agreeing nowhere score 0.0. Note that the
//! bilevel XOR-as-equality assumption makes a 1x1 all-white vs 1x1 all-black
//! comparison score exactly 0.0.

use crate::bitmap::{BLACK, Bitmap, WHITE};
use crate::error::{Error, Result};

/// Scoring engine holding a reusable canvas buffer
///
/// The canvas scratch allocation is kept between calls, so scoring many
/// pairs through one engine allocates only when the canvas has to grow.
/// Each call is otherwise independent: results never depend on earlier
/// comparisons.
///
/// # Examples
///
/// ```
/// use glyphdiff_core::{Bitmap, DiffEngine};
///
/// let a = Bitmap::new(8, 8).unwrap();
/// let mut engine = DiffEngine::new();
/// let score = engine.compare(&a, &a.clone()).unwrap();
/// assert_eq!(score, 1.0);
/// ```
#[derive(Debug, Default)]
pub struct DiffEngine {
    canvas: Vec<u8>,
}

impl DiffEngine {
    /// Create an engine with no scratch space allocated yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Score a pair of bitmaps.
    ///
    /// The bitmaps may have different dimensions; both are anchored at the
    /// top-left corner and the smaller one is treated as extending with
    /// white background.
    ///
    /// If both bitmaps are degenerate along the same axis (`max(widths)` or
    /// `max(heights)` is zero) there are no cells to compare and the score
    /// is defined as 0.0. A single zero-area bitmap against a non-degenerate
    /// one needs no special case: the white-background rule covers it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the canvas buffer cannot be
    /// allocated.
    pub fn compare(&mut self, a: &Bitmap, b: &Bitmap) -> Result<f64> {
        let max_w = a.width().max(b.width()) as usize;
        let max_h = a.height().max(b.height()) as usize;

        if max_w == 0 || max_h == 0 {
            return Ok(0.0);
        }

        let canvas_w = max_w + 2;
        let canvas_h = max_h + 2;
        self.reset_canvas(canvas_w, canvas_h)?;
        self.fill_interior(a, b, max_w, max_h, canvas_w);

        let count = self.count_dilated_black(max_w, max_h, canvas_w);
        Ok(count as f64 / (max_w * max_h) as f64)
    }

    /// Size the canvas and fill it with white, including the border ring.
    fn reset_canvas(&mut self, canvas_w: usize, canvas_h: usize) -> Result<()> {
        let len = canvas_w
            .checked_mul(canvas_h)
            .ok_or(Error::AllocationFailed)?;
        if len > self.canvas.capacity() {
            let additional = len - self.canvas.len();
            self.canvas
                .try_reserve_exact(additional)
                .map_err(|_| Error::AllocationFailed)?;
        }
        self.canvas.clear();
        self.canvas.resize(len, WHITE);
        Ok(())
    }

    /// Fill the canvas interior at offset (+1, +1).
    ///
    /// Per row, the overlap columns get the true per-pixel XOR, columns
    /// covered by only one image get that image's pixels inverted (image
    /// XOR white background), and columns covered by neither stay black
    /// (white XOR white).
    fn fill_interior(&mut self, a: &Bitmap, b: &Bitmap, max_w: usize, max_h: usize, canvas_w: usize) {
        let min_w = a.width().min(b.width()) as usize;

        for y in 0..max_h {
            let start = (y + 1) * canvas_w + 1;
            let row = &mut self.canvas[start..start + max_w];
            let a_row = (y < a.height() as usize).then(|| a.row(y as u32));
            let b_row = (y < b.height() as usize).then(|| b.row(y as u32));

            match (a_row, b_row) {
                (Some(ar), Some(br)) => {
                    for x in 0..min_w {
                        row[x] = ar[x] ^ br[x];
                    }
                    let wide = if ar.len() > br.len() { ar } else { br };
                    for x in min_w..max_w {
                        row[x] = wide[x] ^ WHITE;
                    }
                }
                (Some(ar), None) => fill_single(row, ar),
                (None, Some(br)) => fill_single(row, br),
                // y < max_h, so at least one image covers this row
                (None, None) => unreachable!(),
            }
        }
    }

    /// Count interior cells that are black or 4-adjacent to a black cell.
    fn count_dilated_black(&self, max_w: usize, max_h: usize, canvas_w: usize) -> usize {
        let canvas = &self.canvas;
        let mut count = 0;
        for y in 1..=max_h {
            for x in 1..=max_w {
                let here = y * canvas_w + x;
                if canvas[here] == BLACK
                    || canvas[here - canvas_w] == BLACK
                    || canvas[here + canvas_w] == BLACK
                    || canvas[here - 1] == BLACK
                    || canvas[here + 1] == BLACK
                {
                    count += 1;
                }
            }
        }
        count
    }
}

/// Fill one interior row from a single image's row: the image's columns
/// inverted against the white background, the uncovered tail black.
fn fill_single(row: &mut [u8], image_row: &[u8]) {
    for (out, &p) in row.iter_mut().zip(image_row) {
        *out = p ^ WHITE;
    }
    for out in row.iter_mut().skip(image_row.len()) {
        *out = BLACK;
    }
}

/// Score a single pair with a throwaway engine.
///
/// Convenience wrapper over [`DiffEngine::compare`]; use an engine directly
/// when scoring many pairs so the canvas allocation is reused.
pub fn compare(a: &Bitmap, b: &Bitmap) -> Result<f64> {
    DiffEngine::new().compare(a, b)
}
