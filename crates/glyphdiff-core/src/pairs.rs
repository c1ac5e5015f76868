//! Pairwise scoring driver
//!
//! Enumerates every unordered pair of bitmaps in a store and scores it with
//! one reused [`DiffEngine`], so the canvas scratch buffer is allocated once
//! for the whole run instead of once per pair. Pairs are visited in
//! ascending `(left, right)` order with `left < right`, which keeps output
//! reproducible across runs.

use std::ops::ControlFlow;

use crate::compare::DiffEngine;
use crate::error::Result;
use crate::store::BitmapStore;

/// Score for one unordered pair of store indices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairScore {
    /// Store index of the first bitmap (`left < right`)
    pub left: usize,
    /// Store index of the second bitmap
    pub right: usize,
    /// Similarity score in [0, 1]
    pub score: f64,
}

/// Score every pair `left < right` in ascending order, handing each
/// [`PairScore`] to the callback.
///
/// The callback can stop the run early by returning
/// [`ControlFlow::Break`]; scores already handed out are unaffected.
///
/// # Errors
///
/// Propagates the first scoring error (allocation failure).
pub fn for_each_pair<F>(store: &BitmapStore, mut f: F) -> Result<()>
where
    F: FnMut(PairScore) -> ControlFlow<()>,
{
    let mut engine = DiffEngine::new();
    let bitmaps = store.as_slice();
    for left in 0..bitmaps.len() {
        for right in left + 1..bitmaps.len() {
            let score = engine.compare(&bitmaps[left], &bitmaps[right])?;
            if f(PairScore { left, right, score }).is_break() {
                return Ok(());
            }
        }
    }
    Ok(())
}

/// Score every pair and collect the results.
///
/// A store of N bitmaps yields exactly `N * (N - 1) / 2` scores.
///
/// # Errors
///
/// Propagates the first scoring error (allocation failure).
pub fn score_pairs(store: &BitmapStore) -> Result<Vec<PairScore>> {
    let n = store.len();
    let mut scores = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for_each_pair(store, |pair| {
        scores.push(pair);
        ControlFlow::Continue(())
    })?;
    Ok(scores)
}
