//! Built-in strategy snapshots over a fixed dataset
//!
//! Reference date is 2024-09-01, so "recent" means on or after 2022-09-01
//! and the one-year window starts at 2023-09-01.

mod common;

use common::*;
use resource_cursor::strategy::BUILTIN_STRATEGIES;
use resource_cursor::{
    DigitalLibrary, IteratorOptions, Resource, ResourceType, Traversal, TraversalKind,
};
use test_case::test_case;

fn entry(
    id: &str,
    kind: ResourceType,
    published: (i32, u32, u32),
    popularity: f64,
    rating: Option<f64>,
    author: &str,
    category: &str,
) -> Resource {
    let mut r = resource(id, kind, date(published.0, published.1, published.2), popularity, rating);
    r.author = author.to_string();
    r.category = category.to_string();
    r
}

fn catalogue() -> DigitalLibrary {
    library_with(vec![
        entry("b1", ResourceType::Book, (2024, 3, 1), 90.0, Some(4.8), "Carol", "Science"),
        entry("m1", ResourceType::Magazine, (2024, 8, 1), 60.0, None, "Alice", "News"),
        entry("b2", ResourceType::Book, (2023, 1, 15), 85.0, Some(4.6), "Bob", "History"),
        entry("a1", ResourceType::Audiobook, (2021, 5, 5), 80.0, Some(4.0), "Alice", "Science"),
        entry("b3", ResourceType::Book, (2024, 6, 10), 40.0, Some(4.5), "Dave", "Art"),
        entry("b4", ResourceType::Book, (2024, 7, 1), 70.0, Some(3.9), "Bob", "News"),
    ])
}

#[test_case("forward", &["b1", "m1", "b2", "a1", "b3", "b4"] ; "forward keeps insertion order")]
#[test_case("reverse", &["b4", "b3", "a1", "b2", "m1", "b1"] ; "reverse walks back to front")]
#[test_case("byCategory", &["b3", "b2", "m1", "b4", "b1", "a1"] ; "category sort is stable")]
#[test_case("byAuthor", &["m1", "a1", "b2", "b4", "b1", "b3"] ; "author sort is stable")]
#[test_case("byDate", &["m1", "b4", "b3", "b1", "b2", "a1"] ; "newest first")]
#[test_case("byPopularity", &["b1", "b2", "a1", "b4", "m1", "b3"] ; "most popular first")]
#[test_case("byRating", &["b1", "b2", "b3", "a1", "b4", "m1"] ; "unrated sorts last")]
#[test_case("booksOnly", &["b1", "b2", "b3", "b4"] ; "books only")]
#[test_case("magazinesOnly", &["m1"] ; "magazines only")]
#[test_case("audiobooksOnly", &["a1"] ; "audiobooks only")]
#[test_case("highRated", &["b1", "b2", "a1", "b3"] ; "rating at least four")]
#[test_case("recent", &["b1", "m1", "b2", "b3", "b4"] ; "two year window")]
#[test_case("popular", &["b1", "b2", "a1"] ; "popularity at least eighty")]
#[test_case("recentBooksHighRated", &["b1", "b3"] ; "composite filter then rating sort")]
fn test_strategy_visits(name: &str, expected: &[&str]) {
    let mut library = catalogue();
    let mut it = library.create_iterator(name, IteratorOptions::default());
    assert_eq!(it.total_size(), expected.len());
    assert_eq!(drain_ids(&mut it), expected);
    assert!(!it.has_next());
}

#[test_case("forward", TraversalKind::Linear)]
#[test_case("reverse", TraversalKind::Reverse)]
#[test_case("byRating", TraversalKind::Linear)]
#[test_case("booksOnly", TraversalKind::Filtered)]
#[test_case("recent", TraversalKind::Filtered)]
#[test_case("paginated", TraversalKind::Paginated)]
#[test_case("random", TraversalKind::Linear)]
#[test_case("recentBooksHighRated", TraversalKind::Linear)]
#[test_case("noSuchStrategy", TraversalKind::Linear ; "fallback")]
fn test_strategy_kind(name: &str, kind: TraversalKind) {
    let mut library = catalogue();
    assert_eq!(library.create_iterator(name, IteratorOptions::default()).kind(), kind);
}

#[test]
fn test_every_builtin_is_registered() {
    let library = catalogue();
    for name in BUILTIN_STRATEGIES {
        assert!(library.is_registered(name), "{name} should be built in");
    }
    assert_eq!(library.strategies().len(), BUILTIN_STRATEGIES.len());
}

#[test]
fn test_reverse_uses_forward_ordered_snapshot() {
    let mut library = catalogue();
    let it = library.create_iterator("reverse", IteratorOptions::default());
    assert_eq!(ids(it.as_slice()), ids(library.resources()));
}

#[test]
fn test_paginated_yields_first_of_each_page() {
    let mut library = catalogue();
    let mut it = library.create_iterator("paginated", IteratorOptions::default());
    assert_eq!(it.total_size(), 2);
    assert_eq!(drain_ids(&mut it), vec!["b1", "a1"]);
    let pages = it.as_paginated().expect("paginated");
    assert_eq!(ids(pages.current_page()), vec!["a1", "b3", "b4"]);
}

#[test]
fn test_by_rating_treats_missing_as_zero() {
    let mut library = library_with(vec![
        resource("x", ResourceType::Book, date(2020, 1, 1), 1.0, Some(4.7)),
        resource("none", ResourceType::Book, date(2020, 1, 1), 1.0, None),
        resource("y", ResourceType::Book, date(2020, 1, 1), 1.0, Some(4.9)),
    ]);
    let mut it = library.create_iterator("byRating", IteratorOptions::default());
    assert_eq!(drain_ids(&mut it), vec!["y", "x", "none"]);
}

#[test]
fn test_filtered_keeps_relative_order() {
    let mut library = library_with(vec![
        magazine("1"),
        book("2"),
        audiobook("3"),
        magazine("4"),
        book("5"),
    ]);
    let mut it = library.create_iterator("booksOnly", IteratorOptions::default());
    assert_eq!(it.total_size(), 2);
    assert_eq!(drain_ids(&mut it), vec!["2", "5"]);
}

#[test]
fn test_recent_window_boundary_is_inclusive() {
    let mut library = library_with(vec![
        resource("edge", ResourceType::Magazine, date(2022, 9, 1), 1.0, None),
        resource("before", ResourceType::Magazine, date(2022, 8, 31), 1.0, None),
    ]);
    let mut it = library.create_iterator("recent", IteratorOptions::default());
    assert_eq!(drain_ids(&mut it), vec!["edge"]);
}

#[test]
fn test_recent_window_from_leap_day_starts_in_march() {
    let resources = vec![
        resource("feb28", ResourceType::Book, date(2022, 2, 28), 1.0, Some(4.9)),
        resource("mar1", ResourceType::Book, date(2022, 3, 1), 1.0, Some(4.9)),
        resource("last-feb28", ResourceType::Book, date(2023, 2, 28), 1.0, Some(4.9)),
        resource("last-mar1", ResourceType::Book, date(2023, 3, 1), 1.0, Some(4.9)),
    ];
    let mut library = DigitalLibrary::with_config_and_resources(
        config().with_reference_date(date(2024, 2, 29)),
        resources,
    );

    let mut recent = library.create_iterator("recent", IteratorOptions::default());
    assert_eq!(drain_ids(&mut recent), vec!["mar1", "last-feb28", "last-mar1"]);

    let mut last_year = library.create_iterator("recentBooksHighRated", IteratorOptions::default());
    assert_eq!(drain_ids(&mut last_year), vec!["last-mar1"]);
}

#[test]
fn test_recent_follows_reference_date() {
    let resources = vec![resource("r", ResourceType::Book, date(2019, 6, 1), 1.0, Some(4.9))];

    let mut then = DigitalLibrary::with_config_and_resources(
        config().with_reference_date(date(2020, 1, 1)),
        resources.clone(),
    );
    assert_eq!(then.create_iterator("recent", IteratorOptions::default()).total_size(), 1);
    assert_eq!(
        then.create_iterator("recentBooksHighRated", IteratorOptions::default())
            .total_size(),
        1
    );

    let mut later = library_with(resources);
    assert_eq!(later.create_iterator("recent", IteratorOptions::default()).total_size(), 0);
}

#[test]
fn test_random_is_a_permutation() {
    let mut library = catalogue();
    let mut it = library.create_iterator("random", IteratorOptions::default());
    let mut shuffled = drain_ids(&mut it);
    let mut original = ids(library.resources());
    shuffled.sort();
    original.sort();
    assert_eq!(shuffled, original);
}

#[test]
fn test_random_is_reproducible_with_seed() {
    let mut first = catalogue();
    let mut second = catalogue();
    let a = ids(first.create_iterator("random", IteratorOptions::default()).as_slice());
    let b = ids(second.create_iterator("random", IteratorOptions::default()).as_slice());
    assert_eq!(a, b);
}

#[test]
fn test_empty_library_for_every_strategy() {
    let mut library = library_with(Vec::new());
    for name in BUILTIN_STRATEGIES.iter().copied().chain(["unknown"]) {
        let mut it = library.create_iterator(name, IteratorOptions::default());
        assert_eq!(it.total_size(), 0, "{name}");
        assert!(!it.has_next(), "{name}");
        assert!(!it.has_previous(), "{name}");
        assert!(it.current().is_none(), "{name}");
        let before = it.position();
        it.skip(1);
        it.skip(-1);
        it.skip(0);
        assert_eq!(it.position(), before, "{name}");
        assert!(it.next().is_none(), "{name}");
    }
}
