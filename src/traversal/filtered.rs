//! Filtered traversal
//!
//! Narrows the snapshot with a predicate at construction time, then
//! delegates every operation to [`Linear`]. No filtering happens while
//! navigating.

use super::{Linear, Traversal};

/// Linear traversal over the elements that satisfied a predicate.
#[derive(Debug, Clone)]
pub struct Filtered<T> {
    inner: Linear<T>,
}

impl<T> Filtered<T> {
    /// Keep the elements matching `predicate`, preserving their relative order.
    pub fn new<P>(items: Vec<T>, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let kept = items.into_iter().filter(|item| predicate(item)).collect();
        Self {
            inner: Linear::new(kept),
        }
    }

    /// Like [`Filtered::new`] but clones only the matching elements.
    pub fn from_slice<P>(items: &[T], mut predicate: P) -> Self
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let kept = items.iter().filter(|item| predicate(item)).cloned().collect();
        Self {
            inner: Linear::new(kept),
        }
    }

    /// Narrowed snapshot.
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }
}

impl<T> Traversal for Filtered<T> {
    type Item = T;

    fn next(&mut self) -> Option<&T> {
        self.inner.next()
    }

    fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    fn previous(&mut self) -> Option<&T> {
        self.inner.previous()
    }

    fn has_previous(&self) -> bool {
        self.inner.has_previous()
    }

    fn current(&self) -> Option<&T> {
        self.inner.current()
    }

    fn reset(&mut self) {
        self.inner.reset()
    }

    fn skip(&mut self, count: isize) {
        self.inner.skip(count)
    }

    fn position(&self) -> isize {
        self.inner.position()
    }

    fn total_size(&self) -> usize {
        self.inner.total_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_relative_order() {
        let mut it = Filtered::new(vec![5, 2, 8, 3, 6], |n| n % 2 == 0);
        assert_eq!(it.total_size(), 3);
        assert_eq!(it.as_slice(), &[2, 8, 6]);
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next(), Some(&8));
        assert_eq!(it.previous(), Some(&2));
    }

    #[test]
    fn test_nothing_matches() {
        let mut it = Filtered::from_slice(&["a", "b"], |s| s.len() > 1);
        assert_eq!(it.total_size(), 0);
        assert!(!it.has_next());
        assert_eq!(it.next(), None);
        assert!(it.current().is_none());
    }
}
