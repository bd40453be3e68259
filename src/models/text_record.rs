use crate::constants::ALL_CATEGORIES_KEYWORD;
use crate::types::{Author, Category, RecordId};
use std::fmt;

/// One comment plus its metadata, as read from a records dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRecord {
    pub id: RecordId,
    pub author: Author,
    pub category: Category,
    pub body: String,
}

/// Selects which records are kept while loading a records dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(Category),
}

impl CategoryFilter {
    /// Builds a filter from user input. The keyword `"all"` (in any case) keeps every record.
    pub fn new(filter: &str) -> Self {
        if filter.eq_ignore_ascii_case(ALL_CATEGORIES_KEYWORD) {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(filter.to_string())
        }
    }

    /// Case-insensitive comparison against a record's category field.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(wanted) => wanted.to_lowercase() == category.to_lowercase(),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(filter: &str) -> Self {
        CategoryFilter::new(filter)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES_KEYWORD),
            CategoryFilter::Category(category) => f.write_str(category),
        }
    }
}
