//! Shared fixtures for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use resource_cursor::{DigitalLibrary, LibraryConfig, Resource, ResourceType, Traversal};

/// Fixed "today" so relative-date strategies are deterministic
pub fn reference_date() -> NaiveDate {
    date(2024, 9, 1)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

/// Resource with the fields that drive ordering and filtering
pub fn resource(
    id: &str,
    kind: ResourceType,
    published: NaiveDate,
    popularity: f64,
    rating: Option<f64>,
) -> Resource {
    let mut r = Resource::new(
        id,
        format!("Title {id}"),
        format!("Author {id}"),
        "General",
        published,
        popularity,
        kind,
    );
    r.rating = rating;
    r
}

pub fn book(id: &str) -> Resource {
    resource(id, ResourceType::Book, date(2020, 1, 1), 50.0, Some(3.0))
}

pub fn magazine(id: &str) -> Resource {
    resource(id, ResourceType::Magazine, date(2020, 1, 1), 50.0, Some(3.0))
}

pub fn audiobook(id: &str) -> Resource {
    resource(id, ResourceType::Audiobook, date(2020, 1, 1), 50.0, Some(3.0))
}

pub fn config() -> LibraryConfig {
    LibraryConfig::default()
        .with_reference_date(reference_date())
        .with_shuffle_seed(17)
}

/// Library with pinned date and seed holding `resources` in order
pub fn library_with(resources: Vec<Resource>) -> DigitalLibrary {
    DigitalLibrary::with_config_and_resources(config(), resources)
}

/// Ids produced by driving `next()` from the current cursor to exhaustion
pub fn drain_ids<I: Traversal<Item = Resource>>(iterator: &mut I) -> Vec<String> {
    let mut ids = Vec::new();
    while let Some(r) = iterator.next() {
        ids.push(r.id.clone());
    }
    ids
}

pub fn ids(resources: &[Resource]) -> Vec<String> {
    resources.iter().map(|r| r.id.clone()).collect()
}
