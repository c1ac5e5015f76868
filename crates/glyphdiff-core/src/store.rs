//! BitmapStore - insertion-ordered collection of bitmaps
//!
//! The store owns every bitmap produced by the parser. Indices are assigned
//! in parse order and are the stable identities reported in pair output, so
//! the store never reorders or removes entries.

use crate::bitmap::Bitmap;

/// Growable, insertion-ordered sequence of [`Bitmap`]s
///
/// Backed by a `Vec`, so capacity grows by amortized doubling.
#[derive(Debug, Clone, Default)]
pub struct BitmapStore {
    bitmaps: Vec<Bitmap>,
}

impl BitmapStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bitmaps: Vec::with_capacity(capacity),
        }
    }

    /// Number of bitmaps in the store
    #[inline]
    pub fn len(&self) -> usize {
        self.bitmaps.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bitmaps.is_empty()
    }

    /// Append a bitmap, assigning it the next index
    pub fn push(&mut self, bitmap: Bitmap) {
        self.bitmaps.push(bitmap);
    }

    /// Get a bitmap by index
    pub fn get(&self, index: usize) -> Option<&Bitmap> {
        self.bitmaps.get(index)
    }

    /// Get the dimensions of a bitmap by index
    pub fn dimensions(&self, index: usize) -> Option<(u32, u32)> {
        self.bitmaps.get(index).map(|b| (b.width(), b.height()))
    }

    /// Iterate over the bitmaps in index order
    pub fn iter(&self) -> std::slice::Iter<'_, Bitmap> {
        self.bitmaps.iter()
    }

    /// All bitmaps as a slice, in index order
    pub fn as_slice(&self) -> &[Bitmap] {
        &self.bitmaps
    }
}

impl FromIterator<Bitmap> for BitmapStore {
    fn from_iter<I: IntoIterator<Item = Bitmap>>(iter: I) -> Self {
        Self {
            bitmaps: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BitmapStore {
    type Item = &'a Bitmap;
    type IntoIter = std::slice::Iter<'a, Bitmap>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_bitmap(width: u32, height: u32) -> Bitmap {
        Bitmap::new(width, height).unwrap()
    }

    #[test]
    fn test_new_is_empty() {
        let store = BitmapStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert!(store.get(0).is_none());
    }

    #[test]
    fn test_push_preserves_order() {
        let mut store = BitmapStore::new();
        store.push(make_bitmap(10, 20));
        store.push(make_bitmap(30, 40));
        assert_eq!(store.len(), 2);
        assert_eq!(store.dimensions(0), Some((10, 20)));
        assert_eq!(store.dimensions(1), Some((30, 40)));
        assert_eq!(store.dimensions(2), None);
    }

    #[test]
    fn test_iter_and_collect() {
        let store: BitmapStore = (1..=3).map(|n| make_bitmap(n, n)).collect();
        let widths: Vec<u32> = store.iter().map(|b| b.width()).collect();
        assert_eq!(widths, vec![1, 2, 3]);
    }
}
