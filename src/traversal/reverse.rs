//! Reverse-indexed traversal
//!
//! Walks a forward-ordered snapshot back to front without copying it in
//! reverse. The internal cursor starts one past the last index and counts
//! down; `position()` reports steps taken from the end so observers see a
//! value that grows from 0 exactly like the forward strategy.

use super::Traversal;

/// Back-to-front traversal that can step back toward the end.
#[derive(Debug, Clone)]
pub struct Reverse<T> {
    /// Snapshot in forward order
    items: Vec<T>,

    /// Physical index of the current element, `len` before the first step
    cursor: usize,
}

impl<T> Reverse<T> {
    /// Take ownership of a forward-ordered snapshot.
    pub fn new(items: Vec<T>) -> Self {
        let cursor = items.len();
        Self { items, cursor }
    }

    /// Snapshot in stored (forward) order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> From<&[T]> for Reverse<T> {
    fn from(items: &[T]) -> Self {
        Self::new(items.to_vec())
    }
}

impl<T> Traversal for Reverse<T> {
    type Item = T;

    fn next(&mut self) -> Option<&T> {
        if !self.has_next() {
            return None;
        }
        self.cursor -= 1;
        self.items.get(self.cursor)
    }

    fn has_next(&self) -> bool {
        self.cursor > 0
    }

    fn previous(&mut self) -> Option<&T> {
        if !self.has_previous() {
            return None;
        }
        self.cursor += 1;
        self.items.get(self.cursor)
    }

    fn has_previous(&self) -> bool {
        // Only an element already visited (physically later) counts.
        self.cursor + 1 < self.items.len()
    }

    fn current(&self) -> Option<&T> {
        self.items.get(self.cursor)
    }

    fn reset(&mut self) {
        self.cursor = self.items.len();
    }

    /// Positive counts move further toward the front of the snapshot.
    /// The pre-first state (`cursor == len`) is a valid destination.
    fn skip(&mut self, count: isize) {
        let target = (self.cursor as isize).checked_sub(count);
        if let Some(target) = target.and_then(|t| usize::try_from(t).ok()) {
            if target <= self.items.len() {
                self.cursor = target;
            }
        }
    }

    fn position(&self) -> isize {
        (self.items.len() - self.cursor) as isize
    }

    fn total_size(&self) -> usize {
        self.items.len()
    }
}
