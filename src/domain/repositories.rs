//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use std::str::FromStr;

use async_trait::async_trait;
use serde::Serialize;

use super::DomainError;
use crate::models::book::{Book, BookInput};

/// Textual column that can take part in keyword search.
///
/// `language` has no variant: it is never searchable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Title,
    Author,
    Isbn,
    MainSubject,
    SecondarySubject,
    Ddc,
}

impl SearchField {
    pub const ALL: [SearchField; 6] = [
        SearchField::Title,
        SearchField::Author,
        SearchField::MainSubject,
        SearchField::SecondarySubject,
        SearchField::Isbn,
        SearchField::Ddc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Isbn => "isbn",
            SearchField::MainSubject => "main_subject",
            SearchField::SecondarySubject => "secondary_subject",
            SearchField::Ddc => "ddc",
        }
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            "isbn" => Ok(SearchField::Isbn),
            "main_subject" => Ok(SearchField::MainSubject),
            "secondary_subject" => Ok(SearchField::SecondarySubject),
            "ddc" => Ok(SearchField::Ddc),
            other => Err(format!("'{}' is not a searchable field", other)),
        }
    }
}

/// Set of fields a keyword search matches against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFields(Vec<SearchField>);

impl SearchFields {
    /// Build from an explicit list; duplicates are dropped, an empty list falls back to all fields.
    pub fn new(fields: impl IntoIterator<Item = SearchField>) -> Self {
        let mut unique = Vec::new();
        for field in fields {
            if !unique.contains(&field) {
                unique.push(field);
            }
        }
        if unique.is_empty() {
            return Self::default();
        }
        Self(unique)
    }

    /// Parse a comma separated list such as `title,author,isbn`.
    /// Unknown names are skipped and logged.
    pub fn parse_list(list: &str) -> Self {
        let fields = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|name| match name.parse::<SearchField>() {
                Ok(field) => Some(field),
                Err(e) => {
                    tracing::warn!("Ignoring search field: {}", e);
                    None
                }
            });
        Self::new(fields)
    }

    pub fn iter(&self) -> impl Iterator<Item = SearchField> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, field: SearchField) -> bool {
        self.0.contains(&field)
    }
}

impl Default for SearchFields {
    fn default() -> Self {
        Self(SearchField::ALL.to_vec())
    }
}

/// Title autocomplete entry: title, author and classification code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct TitleSuggestion {
    pub title: String,
    pub author: String,
    pub ddc: String,
}

/// Author autocomplete entry with the number of catalogued books
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct AuthorCount {
    pub author: String,
    pub books: i64,
}

/// Repository trait for Book entity
///
/// The repository persists whatever classification code it is handed;
/// deriving the code is the caller's job.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert a new record. Fails with `DuplicateKey` if the ISBN is taken.
    async fn create(&self, input: BookInput, ddc: String) -> Result<Book, DomainError>;

    /// Overwrite every mutable field of an existing record.
    async fn update(&self, id: i32, input: BookInput, ddc: String) -> Result<Book, DomainError>;

    /// Find a single book by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError>;

    /// Substring search over `fields`, in insertion order. An empty query matches everything.
    async fn search(&self, query: &str, fields: &SearchFields) -> Result<Vec<Book>, DomainError>;

    /// Unique titles, sorted
    async fn distinct_titles(&self) -> Result<Vec<String>, DomainError>;

    /// Unique authors, sorted
    async fn distinct_authors(&self) -> Result<Vec<String>, DomainError>;

    /// Titles containing `term`, with author and code
    async fn title_suggestions(&self, term: &str) -> Result<Vec<TitleSuggestion>, DomainError>;

    /// Authors containing `term`, with their book counts
    async fn author_counts(&self, term: &str) -> Result<Vec<AuthorCount>, DomainError>;
}
