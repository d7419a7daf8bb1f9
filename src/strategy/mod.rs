//! Named traversal strategies
//!
//! A strategy turns the library's authoritative resource list into a
//! snapshot (identity, sorted, filtered, shuffled or paged) and wraps it
//! in the matching traversal. Adding a strategy is a registration, never a
//! new branch in the façade.

mod builtin;
mod registry;

pub use builtin::BUILTIN_STRATEGIES;
pub use registry::{StrategyBuilder, StrategyInfo, StrategyRegistry};

use std::num::NonZeroUsize;

use chrono::NaiveDate;
use rand::rngs::StdRng;

/// Inputs a strategy builder may consult besides the resources themselves.
#[derive(Debug)]
pub struct StrategyContext<'a> {
    /// "Today" for relative-date windows.
    pub reference_date: NaiveDate,
    /// Resolved page size for paged strategies.
    pub page_size: NonZeroUsize,
    /// Shared generator for shuffling strategies.
    pub rng: &'a mut StdRng,
}
