use crate::resource::{Resource, ResourceType};

/// Aggregate counts over a library's resources.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LibraryInfo {
    /// All resources.
    pub total_resources: usize,
    /// Resources of type book.
    pub book_count: usize,
    /// Resources of type magazine.
    pub magazine_count: usize,
    /// Resources of type audiobook.
    pub audiobook_count: usize,
    /// Mean over positive ratings only; `0.0` when none qualify.
    pub average_rating: f64,
}

impl LibraryInfo {
    /// Summarise `resources`.
    ///
    /// Unrated resources and ratings of exactly `0` stay out of the
    /// average's denominator.
    pub fn from_resources(resources: &[Resource]) -> Self {
        let count = |kind: ResourceType| resources.iter().filter(|r| r.is(kind)).count();

        let (sum, rated) = resources
            .iter()
            .filter_map(|r| r.rating)
            .filter(|&rating| rating > 0.0)
            .fold((0.0, 0usize), |(sum, n), rating| (sum + rating, n + 1));

        Self {
            total_resources: resources.len(),
            book_count: count(ResourceType::Book),
            magazine_count: count(ResourceType::Magazine),
            audiobook_count: count(ResourceType::Audiobook),
            average_rating: if rated > 0 { sum / rated as f64 } else { 0.0 },
        }
    }
}
