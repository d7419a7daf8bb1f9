//! Linear bidirectional traversal
//!
//! Cursor range: [-1, N-1]. `-1` is the before-first sentinel and the
//! cursor never moves past the last element.

use super::Traversal;

/// Forward traversal that can step back.
#[derive(Debug, Clone)]
pub struct Linear<T> {
    /// Snapshot, owned and never mutated
    items: Vec<T>,

    /// Element index, -1 before the first `next()`
    cursor: isize,
}

impl<T> Linear<T> {
    /// Take ownership of the snapshot and position before the first element.
    pub fn new(items: Vec<T>) -> Self {
        Self { items, cursor: -1 }
    }

    /// Snapshot in traversal order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn len(&self) -> isize {
        self.items.len() as isize
    }

    fn at(&self, index: isize) -> Option<&T> {
        usize::try_from(index).ok().and_then(|i| self.items.get(i))
    }
}

impl<T: Clone> From<&[T]> for Linear<T> {
    fn from(items: &[T]) -> Self {
        Self::new(items.to_vec())
    }
}

impl<T> Traversal for Linear<T> {
    type Item = T;

    fn next(&mut self) -> Option<&T> {
        if !self.has_next() {
            return None;
        }
        self.cursor += 1;
        self.at(self.cursor)
    }

    fn has_next(&self) -> bool {
        self.cursor + 1 < self.len()
    }

    fn previous(&mut self) -> Option<&T> {
        if !self.has_previous() {
            return None;
        }
        self.cursor -= 1;
        self.at(self.cursor)
    }

    fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    fn current(&self) -> Option<&T> {
        self.at(self.cursor)
    }

    fn reset(&mut self) {
        self.cursor = -1;
    }

    fn skip(&mut self, count: isize) {
        if let Some(target) = self.cursor.checked_add(count) {
            if (0..self.len()).contains(&target) {
                self.cursor = target;
            }
        }
    }

    fn position(&self) -> isize {
        self.cursor
    }

    fn total_size(&self) -> usize {
        self.items.len()
    }
}
