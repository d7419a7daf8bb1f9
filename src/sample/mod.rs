//! Sample datasets
//!
//! A fixed catalogue of twenty resources for demos and tests, plus a
//! generator for larger random libraries.

use std::collections::HashSet;

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::resource::{Resource, ResourceType};

const GENERATED_TITLES: [&str; 10] = [
    "The Art of Programming",
    "Advanced Algorithms",
    "Machine Learning Basics",
    "Web Development Guide",
    "Database Design",
    "Cloud Computing",
    "DevOps Handbook",
    "Agile Methodologies",
    "Software Architecture",
    "Computer Networks",
];

const GENERATED_AUTHORS: [&str; 6] = [
    "John Doe",
    "Jane Smith",
    "Robert Johnson",
    "Emily Davis",
    "Michael Brown",
    "Sarah Wilson",
];

const GENERATED_CATEGORIES: [&str; 6] = [
    "Programming",
    "Science",
    "History",
    "Business",
    "Self-help",
    "Fiction",
];

/// (id, title, author, category, (y, m, d), popularity, type, isbn, pages, rating)
type Row = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    (i32, u32, u32),
    f64,
    ResourceType,
    Option<&'static str>,
    Option<u32>,
    f64,
);

const CATALOGUE: [Row; 20] = [
    ("1", "Design Patterns: Elements of Reusable Object-Oriented Software", "Gang of Four (Erich Gamma, Richard Helm, Ralph Johnson, John Vlissides)", "Programming", (1994, 10, 21), 95.0, ResourceType::Book, Some("978-0201633610"), Some(395), 4.7),
    ("2", "Clean Code: A Handbook of Agile Software Craftsmanship", "Robert C. Martin", "Programming", (2008, 8, 1), 98.0, ResourceType::Book, Some("978-0132350884"), Some(464), 4.8),
    ("3", "JavaScript: The Good Parts", "Douglas Crockford", "Programming", (2008, 5, 1), 85.0, ResourceType::Book, Some("978-0596517748"), Some(176), 4.3),
    ("4", "Tech Monthly - January 2024", "Various Authors", "Tech Magazine", (2024, 1, 1), 72.0, ResourceType::Magazine, None, Some(80), 3.9),
    ("5", "The Art of War", "Sun Tzu", "Strategy", (2010, 3, 15), 88.0, ResourceType::Audiobook, None, None, 4.6),
    ("6", "Thinking, Fast and Slow", "Daniel Kahneman", "Psychology", (2011, 10, 25), 91.0, ResourceType::Book, Some("978-0374533557"), Some(499), 4.5),
    ("7", "Sapiens: A Brief History of Humankind", "Yuval Noah Harari", "History", (2014, 2, 10), 96.0, ResourceType::Book, Some("978-0062316097"), Some(443), 4.9),
    ("8", "Code Magazine - Artificial Intelligence Special", "Tech Publishers", "Tech Magazine", (2024, 6, 1), 68.0, ResourceType::Magazine, None, Some(95), 4.1),
    ("9", "The Pragmatic Programmer: Your Journey to Mastery", "Andrew Hunt & David Thomas", "Programming", (1999, 10, 30), 93.0, ResourceType::Book, Some("978-0201616224"), Some(352), 4.6),
    ("10", "Atomic Habits: An Easy & Proven Way to Build Good Habits", "James Clear", "Self-help", (2018, 10, 16), 94.0, ResourceType::Book, Some("978-0735211292"), Some(320), 4.8),
    ("11", "Algorithms to Live By: The Computer Science of Human Decisions", "Brian Christian & Tom Griffiths", "Science", (2016, 4, 19), 82.0, ResourceType::Audiobook, None, None, 4.4),
    ("12", "Scientific American - May 2024", "SA Editorial Team", "Science Magazine", (2024, 5, 1), 75.0, ResourceType::Magazine, None, Some(110), 4.2),
    ("13", "The Lean Startup", "Eric Ries", "Business", (2011, 9, 13), 87.0, ResourceType::Book, Some("978-0307887894"), Some(336), 4.3),
    ("14", "1984", "George Orwell", "Fiction", (1949, 6, 8), 97.0, ResourceType::Book, Some("978-0451524935"), Some(328), 4.7),
    ("15", "Mindfulness for Beginners", "Jon Kabat-Zinn", "Self-help", (2016, 1, 5), 79.0, ResourceType::Audiobook, None, None, 4.2),
    ("16", "National Geographic - Oceans Special Edition", "NG Editorial", "Science Magazine", (2024, 3, 15), 83.0, ResourceType::Magazine, None, Some(120), 4.6),
    ("17", "Refactoring: Improving the Design of Existing Code", "Martin Fowler", "Programming", (1999, 7, 8), 89.0, ResourceType::Book, Some("978-0201485677"), Some(431), 4.5),
    ("18", "The Power of Now", "Eckhart Tolle", "Self-help", (1997, 8, 19), 90.0, ResourceType::Book, Some("978-1577314806"), Some(236), 4.4),
    ("19", "Wired - The Future of AI", "Wired Editorial", "Tech Magazine", (2024, 7, 1), 77.0, ResourceType::Magazine, None, Some(88), 4.0),
    ("20", "Deep Work: Rules for Focused Success", "Cal Newport", "Productivity", (2016, 1, 5), 86.0, ResourceType::Book, Some("978-1455586691"), Some(296), 4.6),
];

/// The curated twenty-resource catalogue.
pub fn sample_resources() -> Vec<Resource> {
    CATALOGUE
        .iter()
        .filter_map(|&(id, title, author, category, (y, m, d), popularity, kind, isbn, pages, rating)| {
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            let mut resource = Resource::new(id, title, author, category, date, popularity, kind)
                .with_rating(rating);
            resource.isbn = isbn.map(str::to_string);
            resource.pages = pages;
            Some(resource)
        })
        .collect()
}

/// Generate `count` random resources with ids `generated-1..=count`.
///
/// Dates fall in 2015-2024, popularity in 50-99 and ratings in 2.5-5.0.
/// Only books get an ISBN and audiobooks never get a page count.
pub fn generate_resources<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Resource> {
    (1..=count)
        .map(|i| {
            let kind = *ResourceType::ALL.choose(rng).unwrap_or(&ResourceType::Book);
            let title = GENERATED_TITLES.choose(rng).copied().unwrap_or_default();
            let author = GENERATED_AUTHORS.choose(rng).copied().unwrap_or_default();
            let category = GENERATED_CATEGORIES.choose(rng).copied().unwrap_or_default();
            let date = NaiveDate::from_ymd_opt(
                rng.gen_range(2015..2025),
                rng.gen_range(1..=12),
                rng.gen_range(1..=28),
            )
            .unwrap_or(NaiveDate::MIN);

            let mut resource = Resource::new(
                format!("generated-{i}"),
                format!("{title} Vol. {i}"),
                author,
                category,
                date,
                f64::from(rng.gen_range(50u32..100)),
                kind,
            )
            .with_rating(rng.gen_range(2.5..5.0));

            if kind == ResourceType::Book {
                resource.isbn = Some(format!("978-{}", rng.gen_range(0u64..10_000_000_000)));
            }
            if kind != ResourceType::Audiobook {
                resource.pages = Some(rng.gen_range(100..500));
            }
            resource
        })
        .collect()
}

/// Resources whose category equals `category`, in original order.
pub fn resources_by_category(resources: &[Resource], category: &str) -> Vec<Resource> {
    resources
        .iter()
        .filter(|r| r.category == category)
        .cloned()
        .collect()
}

/// Distinct categories in first-seen order.
pub fn unique_categories(resources: &[Resource]) -> Vec<String> {
    unique_by(resources, |r| &r.category)
}

/// Distinct authors in first-seen order.
pub fn unique_authors(resources: &[Resource]) -> Vec<String> {
    unique_by(resources, |r| &r.author)
}

fn unique_by<F>(resources: &[Resource], field: F) -> Vec<String>
where
    F: Fn(&Resource) -> &String,
{
    let mut seen = HashSet::new();
    resources
        .iter()
        .map(field)
        .filter(|value| seen.insert(value.as_str()))
        .cloned()
        .collect()
}
