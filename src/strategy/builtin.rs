//! Built-in strategies
//!
//! Sorted and shuffled snapshots use the linear traversal, predicate
//! snapshots use the filtered traversal, `reverse` walks the unmodified
//! snapshot back to front and `paginated` groups it by page.

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;

use super::StrategyRegistry;
use crate::resource::{Resource, ResourceType};
use crate::traversal::{CollectionIterator, Filtered, Linear, Paginated, Reverse};

/// Names registered by [`StrategyRegistry::with_builtins`].
pub const BUILTIN_STRATEGIES: [&str; 16] = [
    "forward",
    "reverse",
    "byCategory",
    "byAuthor",
    "byDate",
    "byPopularity",
    "byRating",
    "booksOnly",
    "magazinesOnly",
    "audiobooksOnly",
    "highRated",
    "recent",
    "popular",
    "paginated",
    "random",
    "recentBooksHighRated",
];

const HIGH_RATING: f64 = 4.0;
const TOP_RATING: f64 = 4.5;
const POPULAR_SCORE: f64 = 80.0;
const RECENT_YEARS: i32 = 2;
const VERY_RECENT_YEARS: i32 = 1;

pub(super) fn register_builtins(registry: &mut StrategyRegistry) {
    // Identity
    registry.register("forward", "Every resource in insertion order", |res, _| {
        CollectionIterator::Linear(Linear::new(res.to_vec()))
    });
    registry.register("reverse", "Every resource from last inserted to first", |res, _| {
        CollectionIterator::Reverse(Reverse::new(res.to_vec()))
    });

    // Sorted
    registry.register("byCategory", "Sorted by category A-Z", |res, _| {
        sorted(res, |a, b| a.category.cmp(&b.category))
    });
    registry.register("byAuthor", "Sorted by author A-Z", |res, _| {
        sorted(res, |a, b| a.author.cmp(&b.author))
    });
    registry.register("byDate", "Newest publication first", |res, _| {
        sorted(res, |a, b| b.publish_date.cmp(&a.publish_date))
    });
    registry.register("byPopularity", "Most popular first", |res, _| {
        sorted(res, |a, b| b.popularity.total_cmp(&a.popularity))
    });
    registry.register("byRating", "Highest rated first, unrated last", |res, _| {
        sorted(res, by_rating_desc)
    });

    // Filtered
    registry.register("booksOnly", "Books only", |res, _| {
        of_kind(res, ResourceType::Book)
    });
    registry.register("magazinesOnly", "Magazines only", |res, _| {
        of_kind(res, ResourceType::Magazine)
    });
    registry.register("audiobooksOnly", "Audiobooks only", |res, _| {
        of_kind(res, ResourceType::Audiobook)
    });
    registry.register("highRated", "Rated 4.0 or higher", |res, _| {
        Filtered::from_slice(res, |r| r.rating_or_zero() >= HIGH_RATING).into()
    });
    registry.register("recent", "Published within the last two years", |res, ctx| {
        let cutoff = years_before(ctx.reference_date, RECENT_YEARS);
        Filtered::from_slice(res, |r| r.publish_date >= cutoff).into()
    });
    registry.register("popular", "Popularity of 80 or more", |res, _| {
        Filtered::from_slice(res, |r| r.popularity >= POPULAR_SCORE).into()
    });

    // Special
    registry.register("paginated", "Grouped into pages", |res, ctx| {
        Paginated::with_nonzero_page_size(res.to_vec(), ctx.page_size).into()
    });
    registry.register("random", "Shuffled order", |res, ctx| {
        let mut snapshot = res.to_vec();
        snapshot.shuffle(&mut *ctx.rng);
        Linear::new(snapshot).into()
    });

    // Composite
    registry.register(
        "recentBooksHighRated",
        "Books from the last year rated 4.5 or higher, best first",
        |res, ctx| {
            let cutoff = years_before(ctx.reference_date, VERY_RECENT_YEARS);
            let mut snapshot: Vec<Resource> = res
                .iter()
                .filter(|r| {
                    r.is(ResourceType::Book)
                        && r.publish_date >= cutoff
                        && r.rating_or_zero() >= TOP_RATING
                })
                .cloned()
                .collect();
            snapshot.sort_by(by_rating_desc);
            Linear::new(snapshot).into()
        },
    );
}

/// Stable sort of a copy of the resources.
fn sorted<F>(resources: &[Resource], compare: F) -> CollectionIterator<Resource>
where
    F: FnMut(&Resource, &Resource) -> Ordering,
{
    let mut snapshot = resources.to_vec();
    snapshot.sort_by(compare);
    CollectionIterator::Linear(Linear::new(snapshot))
}

fn of_kind(resources: &[Resource], kind: ResourceType) -> CollectionIterator<Resource> {
    CollectionIterator::Filtered(Filtered::from_slice(resources, |r| r.is(kind)))
}

// Missing ratings compare as 0.0.
fn by_rating_desc(a: &Resource, b: &Resource) -> Ordering {
    b.rating_or_zero().total_cmp(&a.rating_or_zero())
}

// Same month and day `years` earlier; Feb 29 rolls to Mar 1 in a common year.
fn years_before(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() - years;
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(NaiveDate::MIN)
}
