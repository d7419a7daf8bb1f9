//! Stateful traversal over an immutable snapshot
//!
//! Every strategy owns a snapshot taken when it was built and keeps an
//! integer cursor into it. Navigation past either end is a no-op that
//! returns `None`; nothing here panics or returns an error.
//!
//! Cursor units are strategy-defined:
//! - `Linear` / `Filtered`: element index, `-1` before the first element
//! - `Reverse`: steps taken from the end of the snapshot
//! - `Paginated`: page index, `-1` before the first page

mod filtered;
mod linear;
mod paginated;
mod reverse;

pub use filtered::Filtered;
pub use linear::Linear;
pub use paginated::{PageRange, Paginated, DEFAULT_PAGE_SIZE};
pub use reverse::Reverse;

/// Shared bidirectional navigation contract.
///
/// Query methods (`has_next`, `has_previous`, `current`, `position`,
/// `total_size`) never change state, so a UI can poll them before every
/// render.
pub trait Traversal {
    /// Element type of the snapshot.
    type Item;

    /// Advance and return the next element, or `None` with the cursor unchanged.
    fn next(&mut self) -> Option<&Self::Item>;

    /// True iff `next()` would return an element.
    fn has_next(&self) -> bool;

    /// Step back and return the previous element, or `None` with the cursor unchanged.
    fn previous(&mut self) -> Option<&Self::Item>;

    /// True iff `previous()` would return an element.
    fn has_previous(&self) -> bool;

    /// Element under the cursor, `None` before the first step or on an empty snapshot.
    fn current(&self) -> Option<&Self::Item>;

    /// Return the cursor to its initial pre-first state. The snapshot is kept.
    fn reset(&mut self);

    /// Move the cursor by `count` units.
    ///
    /// If the destination lies outside the valid range the call does
    /// nothing: it never clamps to the boundary.
    fn skip(&mut self, count: isize);

    /// Zero-based cursor position in strategy units.
    fn position(&self) -> isize;

    /// Number of addressable units (elements, or pages when paginated).
    fn total_size(&self) -> usize;

    /// Adapt into a std iterator yielding owned copies from the current cursor onward.
    fn walk(self) -> Walk<Self>
    where
        Self: Sized,
    {
        Walk { inner: self }
    }
}

/// Tag identifying which strategy backs a [`CollectionIterator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalKind {
    /// Forward bidirectional over the snapshot.
    Linear,
    /// Back-to-front over the forward-ordered snapshot.
    Reverse,
    /// Page-grouped bidirectional.
    Paginated,
    /// Linear over a predicate-narrowed snapshot.
    Filtered,
}

/// Concrete strategy returned by the library façade.
#[derive(Debug, Clone)]
pub enum CollectionIterator<T> {
    /// See [`Linear`].
    Linear(Linear<T>),
    /// See [`Reverse`].
    Reverse(Reverse<T>),
    /// See [`Paginated`].
    Paginated(Paginated<T>),
    /// See [`Filtered`].
    Filtered(Filtered<T>),
}

macro_rules! dispatch {
    ($self:expr, $it:ident => $body:expr) => {
        match $self {
            CollectionIterator::Linear($it) => $body,
            CollectionIterator::Reverse($it) => $body,
            CollectionIterator::Paginated($it) => $body,
            CollectionIterator::Filtered($it) => $body,
        }
    };
}

impl<T> CollectionIterator<T> {
    /// Which strategy this iterator uses.
    pub fn kind(&self) -> TraversalKind {
        match self {
            Self::Linear(_) => TraversalKind::Linear,
            Self::Reverse(_) => TraversalKind::Reverse,
            Self::Paginated(_) => TraversalKind::Paginated,
            Self::Filtered(_) => TraversalKind::Filtered,
        }
    }

    /// Snapshot in stored (forward) order.
    pub fn as_slice(&self) -> &[T] {
        dispatch!(self, it => it.as_slice())
    }

    /// Page accessors, if this is a paginated iterator.
    pub fn as_paginated(&self) -> Option<&Paginated<T>> {
        match self {
            Self::Paginated(it) => Some(it),
            _ => None,
        }
    }

    /// Mutable page accessors (`go_to_page`), if this is a paginated iterator.
    pub fn as_paginated_mut(&mut self) -> Option<&mut Paginated<T>> {
        match self {
            Self::Paginated(it) => Some(it),
            _ => None,
        }
    }
}

impl<T> Traversal for CollectionIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<&T> {
        dispatch!(self, it => it.next())
    }

    fn has_next(&self) -> bool {
        dispatch!(self, it => it.has_next())
    }

    fn previous(&mut self) -> Option<&T> {
        dispatch!(self, it => it.previous())
    }

    fn has_previous(&self) -> bool {
        dispatch!(self, it => it.has_previous())
    }

    fn current(&self) -> Option<&T> {
        dispatch!(self, it => it.current())
    }

    fn reset(&mut self) {
        dispatch!(self, it => it.reset())
    }

    fn skip(&mut self, count: isize) {
        dispatch!(self, it => it.skip(count))
    }

    fn position(&self) -> isize {
        dispatch!(self, it => it.position())
    }

    fn total_size(&self) -> usize {
        dispatch!(self, it => it.total_size())
    }
}

impl<T> From<Linear<T>> for CollectionIterator<T> {
    fn from(it: Linear<T>) -> Self {
        Self::Linear(it)
    }
}

impl<T> From<Reverse<T>> for CollectionIterator<T> {
    fn from(it: Reverse<T>) -> Self {
        Self::Reverse(it)
    }
}

impl<T> From<Paginated<T>> for CollectionIterator<T> {
    fn from(it: Paginated<T>) -> Self {
        Self::Paginated(it)
    }
}

impl<T> From<Filtered<T>> for CollectionIterator<T> {
    fn from(it: Filtered<T>) -> Self {
        Self::Filtered(it)
    }
}

/// Std iterator adapter produced by [`Traversal::walk`].
///
/// Each step calls `next()` on the wrapped traversal, so the cursor moves
/// exactly as it would under manual driving.
#[derive(Debug)]
pub struct Walk<I> {
    inner: I,
}

impl<I> Walk<I> {
    /// Recover the wrapped traversal with its cursor where the walk left it.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I> Iterator for Walk<I>
where
    I: Traversal,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_inner_strategy() {
        let mut it: CollectionIterator<char> = Reverse::new(vec!['a', 'b', 'c']).into();
        assert_eq!(it.kind(), TraversalKind::Reverse);
        assert_eq!(it.next(), Some(&'c'));
        assert_eq!(it.position(), 1);
        assert_eq!(it.as_slice(), &['a', 'b', 'c']);
        assert!(it.as_paginated().is_none());
    }

    #[test]
    fn test_paginated_accessors_reachable_through_enum() {
        let mut it = CollectionIterator::Paginated(Paginated::new((0u32..8).collect()));
        let pages = it.as_paginated_mut().expect("paginated variant");
        assert!(pages.go_to_page(3));
        assert_eq!(pages.current_page(), &[6, 7]);
        assert_eq!(it.position(), 2);
    }

    #[test]
    fn test_walk_continues_from_cursor() {
        let mut it = Linear::new(vec![1, 2, 3, 4]);
        it.next();
        let rest: Vec<i32> = it.walk().collect();
        assert_eq!(rest, vec![2, 3, 4]);
    }

    #[test]
    fn test_walk_hands_back_exhausted_traversal() {
        let mut walk = Linear::new(vec!['x', 'y']).walk();
        assert_eq!(walk.by_ref().count(), 2);
        let it = walk.into_inner();
        assert!(!it.has_next());
        assert_eq!(it.current(), Some(&'y'));
    }
}
