//! Page-grouped traversal
//!
//! The snapshot is split into fixed-size pages (the last one may be short)
//! and the cursor addresses pages, not elements. `next()`/`previous()`
//! return the first element of the newly current page so the single-value
//! contract still holds; the whole page comes from [`Paginated::current_page`].

use std::num::NonZeroUsize;

use super::Traversal;
use crate::LibraryError;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// 1-based inclusive element range covered by the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRange {
    /// First element number on the page.
    pub from: usize,
    /// Last element number on the page.
    pub to: usize,
    /// Elements in the whole snapshot.
    pub total: usize,
}

/// Bidirectional traversal over pages of the snapshot.
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    /// Snapshot, owned and never mutated
    items: Vec<T>,

    /// Elements per page
    page_size: NonZeroUsize,

    /// Page index, -1 before the first page
    page: isize,
}

impl<T> Paginated<T> {
    /// Paginate with the default page size.
    pub fn new(items: Vec<T>) -> Self {
        Self::with_nonzero_page_size(items, default_page_size())
    }

    /// Paginate with an explicit page size.
    ///
    /// # Errors
    /// Returns [`LibraryError::InvalidPageSize`] if `page_size` is zero.
    pub fn with_page_size(items: Vec<T>, page_size: usize) -> Result<Self, LibraryError> {
        let page_size =
            NonZeroUsize::new(page_size).ok_or(LibraryError::InvalidPageSize(page_size))?;
        Ok(Self::with_nonzero_page_size(items, page_size))
    }

    /// Paginate with a page size already known to be non-zero.
    pub fn with_nonzero_page_size(items: Vec<T>, page_size: NonZeroUsize) -> Self {
        Self {
            items,
            page_size,
            page: -1,
        }
    }

    /// Snapshot in stored order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Elements per page.
    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Elements in the snapshot (as opposed to `total_size()`, which counts pages).
    pub fn element_count(&self) -> usize {
        self.items.len()
    }

    /// Number of pages, rounding up for a short last page.
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size.get())
    }

    /// All elements of the current page, empty before the first page.
    pub fn current_page(&self) -> &[T] {
        match usize::try_from(self.page) {
            Ok(page) => {
                let start = page * self.page_size.get();
                let end = (start + self.page_size.get()).min(self.items.len());
                self.items.get(start..end).unwrap_or(&[])
            }
            Err(_) => &[],
        }
    }

    /// 1-based number of the current page, `0` before the first page.
    pub fn page_number(&self) -> usize {
        (self.page + 1) as usize
    }

    /// Element range of the current page, `None` before the first page.
    pub fn current_range(&self) -> Option<PageRange> {
        let page = usize::try_from(self.page).ok()?;
        let size = self.page_size.get();
        Some(PageRange {
            from: page * size + 1,
            to: ((page + 1) * size).min(self.items.len()),
            total: self.items.len(),
        })
    }

    /// Jump to the 1-based page `page_number`.
    ///
    /// Returns whether the jump happened; an out-of-range page leaves the
    /// cursor where it was.
    pub fn go_to_page(&mut self, page_number: usize) -> bool {
        if page_number == 0 || page_number > self.page_count() {
            return false;
        }
        self.page = page_number as isize - 1;
        true
    }
}

impl<T> Traversal for Paginated<T> {
    type Item = T;

    fn next(&mut self) -> Option<&T> {
        if !self.has_next() {
            return None;
        }
        self.page += 1;
        self.current_page().first()
    }

    fn has_next(&self) -> bool {
        ((self.page + 1) as usize) * self.page_size.get() < self.items.len()
    }

    fn previous(&mut self) -> Option<&T> {
        if !self.has_previous() {
            return None;
        }
        self.page -= 1;
        self.current_page().first()
    }

    fn has_previous(&self) -> bool {
        self.page > 0
    }

    fn current(&self) -> Option<&T> {
        self.current_page().first()
    }

    fn reset(&mut self) {
        self.page = -1;
    }

    fn skip(&mut self, count: isize) {
        if let Some(target) = self.page.checked_add(count) {
            if (0..self.page_count() as isize).contains(&target) {
                self.page = target;
            }
        }
    }

    fn position(&self) -> isize {
        self.page
    }

    fn total_size(&self) -> usize {
        self.page_count()
    }
}

fn default_page_size() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN)
}
