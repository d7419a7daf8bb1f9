use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::LibraryError;

/// Closed set of resource kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ResourceType {
    /// Printed or electronic book.
    Book,
    /// Periodical issue.
    Magazine,
    /// Narrated recording.
    Audiobook,
}

impl ResourceType {
    /// All resource types in declaration order.
    pub const ALL: [ResourceType; 3] = [Self::Book, Self::Magazine, Self::Audiobook];

    /// Lowercase tag used in strategy names and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::Magazine => "magazine",
            Self::Audiobook => "audiobook",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "book" => Ok(Self::Book),
            "magazine" => Ok(Self::Magazine),
            "audiobook" => Ok(Self::Audiobook),
            other => Err(LibraryError::UnknownResourceType(other.to_string())),
        }
    }
}

/// A single catalogued item.
///
/// `id` uniqueness is the caller's responsibility: the library does not
/// deduplicate on insert.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resource {
    /// Identifier, unique within one library.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Author or editorial team.
    pub author: String,
    /// Free-form category label.
    pub category: String,
    /// Publication date.
    pub publish_date: NaiveDate,
    /// Popularity score, conventionally 0-100.
    pub popularity: f64,
    /// Kind of resource.
    pub kind: ResourceType,
    /// ISBN, books only.
    pub isbn: Option<String>,
    /// Page count, absent for audiobooks.
    pub pages: Option<u32>,
    /// Reader rating, conventionally 0.0-5.0.
    pub rating: Option<f64>,
}

impl Resource {
    /// Construct a resource with no optional fields set.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        publish_date: NaiveDate,
        popularity: f64,
        kind: ResourceType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            category: category.into(),
            publish_date,
            popularity,
            kind,
            isbn: None,
            pages: None,
            rating: None,
        }
    }

    /// Set the ISBN.
    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    /// Set the page count.
    pub fn with_pages(mut self, pages: u32) -> Self {
        self.pages = Some(pages);
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Rating used for ordering and thresholds.
    ///
    /// A missing rating counts as `0.0`, so unrated resources sort after
    /// every rated one and never pass a minimum-rating filter.
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Whether this resource is of the given kind.
    pub fn is(&self, kind: ResourceType) -> bool {
        self.kind == kind
    }
}
