//! # Resource Cursor
//!
//! Stateful traversal strategies over an in-memory library of books,
//! magazines and audiobooks.
//!
//! ## Core Pieces
//!
//! 1. **Traversal**: one bidirectional contract (`next`, `previous`,
//!    `current`, `skip`, `reset`, ...) implemented by four strategies:
//!    linear, reverse-indexed, paginated and filtered
//! 2. **Snapshot**: each iterator owns a copy of the resources taken when it
//!    was built, so later library edits never leak into it
//! 3. **Strategy registry**: a name maps to a builder that sorts, filters,
//!    shuffles or pages the snapshot and picks the traversal
//! 4. **Usage ledger**: per-library count of how often each name was requested
//!
//! ## Usage Example
//!
//! ```
//! use resource_cursor::{DigitalLibrary, IteratorOptions, Traversal};
//!
//! let mut library = DigitalLibrary::with_sample_data();
//! let mut pages = library.create_iterator("paginated", IteratorOptions::default().with_page_size(5));
//! assert_eq!(pages.total_size(), 4);
//!
//! let first = pages.next().map(|r| r.id.clone());
//! assert_eq!(first.as_deref(), Some("1"));
//! assert_eq!(library.most_used_iterator_type(), Some("paginated"));
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod ledger;     // Strategy usage counts
pub mod library;    // Collection façade
pub mod resource;   // Resource entity
pub mod sample;     // Curated and generated datasets
pub mod strategy;   // Named strategy registry
pub mod traversal;  // Iterator contract and strategies

// Re-exports for convenience
pub use ledger::UsageLedger;
pub use library::{DigitalLibrary, IterableCollection, LibraryInfo};
pub use resource::{Resource, ResourceType};
pub use strategy::{StrategyContext, StrategyInfo, StrategyRegistry};
pub use traversal::{
    CollectionIterator, Filtered, Linear, PageRange, Paginated, Reverse, Traversal,
    TraversalKind, Walk, DEFAULT_PAGE_SIZE,
};

use std::num::NonZeroUsize;

use chrono::NaiveDate;
use thiserror::Error;

/// Configuration for a [`DigitalLibrary`]
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryConfig {
    /// Date treated as "today" by the relative-date strategies
    /// (`recent`, `recentBooksHighRated`). `None` uses the local date at
    /// the time the iterator is created.
    pub reference_date: Option<NaiveDate>,

    /// Seed for the `random` strategy. `None` seeds from OS entropy.
    pub shuffle_seed: Option<u64>,

    /// Page size used when the options leave it unset or zero
    pub default_page_size: usize,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            reference_date: None,
            shuffle_seed: None,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl LibraryConfig {
    /// Pin "today" for the relative-date strategies.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Make the `random` strategy reproducible.
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// Override the fallback page size.
    pub fn with_default_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = page_size;
        self
    }
}

/// Per-request options for [`DigitalLibrary::create_iterator`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IteratorOptions {
    /// Elements per page; only consulted by `paginated`.
    pub page_size: Option<usize>,
}

impl IteratorOptions {
    /// Set the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Page size to use, treating an unset or zero value as `fallback`
    /// and a zero fallback as [`DEFAULT_PAGE_SIZE`].
    pub fn resolved_page_size(&self, fallback: usize) -> NonZeroUsize {
        self.page_size
            .and_then(NonZeroUsize::new)
            .or_else(|| NonZeroUsize::new(fallback))
            .or_else(|| NonZeroUsize::new(DEFAULT_PAGE_SIZE))
            .unwrap_or(NonZeroUsize::MIN)
    }
}

/// Errors surfaced by the fallible constructors and parsers
///
/// Navigation and iterator creation never fail; these only cover inputs
/// that cannot be represented at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LibraryError {
    /// Page size must be at least one
    #[error("invalid page size {0}: pages must hold at least one resource")]
    InvalidPageSize(usize),

    /// Type tag outside {book, magazine, audiobook}
    #[error("unknown resource type: {0}")]
    UnknownResourceType(String),

    /// Date not in `YYYY-MM-DD` form
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate, LibraryError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| LibraryError::InvalidDate(input.to_string()))
}
