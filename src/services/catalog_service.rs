//! Catalog Service - Pure business logic without HTTP layer
//!
//! Stamps every written record with the classification code of its main
//! subject and applies the read-path error policy: searches and suggestion
//! lists log storage failures and return empty results, writes surface them.

use std::sync::Arc;

use crate::domain::{
    AuthorCount, BookRepository, DomainError, SearchFields, TitleSuggestion,
};
use crate::models::{Book, BookInput};
use crate::modules::classification::ClassificationTable;

#[derive(Clone)]
pub struct CatalogService {
    books: Arc<dyn BookRepository>,
    classification: Arc<ClassificationTable>,
    search_fields: SearchFields,
    strict_subjects: bool,
}

impl CatalogService {
    pub fn new(books: Arc<dyn BookRepository>, classification: Arc<ClassificationTable>) -> Self {
        Self {
            books,
            classification,
            search_fields: SearchFields::default(),
            strict_subjects: false,
        }
    }

    /// Restrict keyword search to `fields`
    pub fn with_search_fields(mut self, fields: SearchFields) -> Self {
        self.search_fields = fields;
        self
    }

    /// When set, writes with an unknown main subject fail with `UnknownSubject`
    /// instead of being filed under the default code.
    pub fn with_strict_subjects(mut self, strict: bool) -> Self {
        self.strict_subjects = strict;
        self
    }

    pub fn classification(&self) -> &ClassificationTable {
        &self.classification
    }

    fn classify(&self, main_subject: &str) -> Result<String, DomainError> {
        if self.strict_subjects {
            return self
                .classification
                .lookup(main_subject)
                .map(|subject| subject.code.clone());
        }
        Ok(self.classification.code_for(main_subject).to_string())
    }

    /// Add a book. The returned record carries the new id and the derived code.
    pub async fn insert(&self, input: BookInput) -> Result<Book, DomainError> {
        let ddc = self.classify(&input.main_subject)?;
        let isbn = input.isbn.clone();

        match self.books.create(input, ddc).await {
            Ok(book) => {
                tracing::info!("Catalogued book {} (ISBN {}) as {}", book.id, book.isbn, book.ddc);
                Ok(book)
            }
            Err(DomainError::DuplicateKey(isbn)) => {
                tracing::warn!("Rejected insert: ISBN {} already catalogued", isbn);
                Err(DomainError::DuplicateKey(isbn))
            }
            Err(e) => {
                tracing::error!("Failed to insert book with ISBN {}: {}", isbn, e);
                Err(e)
            }
        }
    }

    /// Overwrite a book's fields and recompute its code.
    pub async fn update(&self, id: i32, input: BookInput) -> Result<Book, DomainError> {
        let ddc = self.classify(&input.main_subject)?;

        match self.books.update(id, input, ddc).await {
            Ok(book) => {
                tracing::info!("Updated book {} (classified {})", book.id, book.ddc);
                Ok(book)
            }
            Err(e @ (DomainError::NotFound | DomainError::DuplicateKey(_))) => {
                tracing::warn!("Rejected update of book {}: {}", id, e);
                Err(e)
            }
            Err(e) => {
                tracing::error!("Failed to update book {}: {}", id, e);
                Err(e)
            }
        }
    }

    /// Point lookup. `Ok(None)` means no such record.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError> {
        self.books.find_by_id(id).await.inspect_err(|e| {
            tracing::error!("Failed to load book {}: {}", id, e);
        })
    }

    /// Keyword search over the configured fields. Never fails.
    pub async fn search(&self, query: &str) -> Vec<Book> {
        match self.books.search(query, &self.search_fields).await {
            Ok(books) => {
                tracing::debug!("Search '{}' matched {} books", query, books.len());
                books
            }
            Err(e) => {
                tracing::error!("Search '{}' failed: {}", query, e);
                Vec::new()
            }
        }
    }

    pub async fn distinct_titles(&self) -> Vec<String> {
        self.books.distinct_titles().await.unwrap_or_else(|e| {
            tracing::error!("Failed to list titles: {}", e);
            Vec::new()
        })
    }

    pub async fn distinct_authors(&self) -> Vec<String> {
        self.books.distinct_authors().await.unwrap_or_else(|e| {
            tracing::error!("Failed to list authors: {}", e);
            Vec::new()
        })
    }

    pub async fn title_suggestions(&self, term: &str) -> Vec<TitleSuggestion> {
        self.books.title_suggestions(term).await.unwrap_or_else(|e| {
            tracing::error!("Title suggestions for '{}' failed: {}", term, e);
            Vec::new()
        })
    }

    pub async fn author_counts(&self, term: &str) -> Vec<AuthorCount> {
        self.books.author_counts(term).await.unwrap_or_else(|e| {
            tracing::error!("Author suggestions for '{}' failed: {}", term, e);
            Vec::new()
        })
    }

    /// Every record in insertion order. Unlike `search`, failures are surfaced.
    pub async fn all_books(&self) -> Result<Vec<Book>, DomainError> {
        self.books.search("", &SearchFields::default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Repository whose every call fails, for exercising the error policy
    struct BrokenRepository;

    #[async_trait]
    impl BookRepository for BrokenRepository {
        async fn create(&self, _: BookInput, _: String) -> Result<Book, DomainError> {
            Err(DomainError::Storage("disk I/O error".to_string()))
        }
        async fn update(&self, _: i32, _: BookInput, _: String) -> Result<Book, DomainError> {
            Err(DomainError::Storage("disk I/O error".to_string()))
        }
        async fn find_by_id(&self, _: i32) -> Result<Option<Book>, DomainError> {
            Err(DomainError::Storage("disk I/O error".to_string()))
        }
        async fn search(&self, _: &str, _: &SearchFields) -> Result<Vec<Book>, DomainError> {
            Err(DomainError::Storage("disk I/O error".to_string()))
        }
        async fn distinct_titles(&self) -> Result<Vec<String>, DomainError> {
            Err(DomainError::Storage("disk I/O error".to_string()))
        }
        async fn distinct_authors(&self) -> Result<Vec<String>, DomainError> {
            Err(DomainError::Storage("disk I/O error".to_string()))
        }
        async fn title_suggestions(&self, _: &str) -> Result<Vec<TitleSuggestion>, DomainError> {
            Err(DomainError::Storage("disk I/O error".to_string()))
        }
        async fn author_counts(&self, _: &str) -> Result<Vec<AuthorCount>, DomainError> {
            Err(DomainError::Storage("disk I/O error".to_string()))
        }
    }

    fn broken_service() -> CatalogService {
        CatalogService::new(
            Arc::new(BrokenRepository),
            Arc::new(ClassificationTable::dewey()),
        )
    }

    fn input(main_subject: &str) -> BookInput {
        BookInput {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            language: "English".to_string(),
            main_subject: main_subject.to_string(),
            secondary_subject: String::new(),
            isbn: "9780441013593".to_string(),
        }
    }

    #[tokio::test]
    async fn test_read_paths_degrade_to_empty() {
        let service = broken_service();
        assert!(service.search("dune").await.is_empty());
        assert!(service.distinct_titles().await.is_empty());
        assert!(service.distinct_authors().await.is_empty());
        assert!(service.title_suggestions("du").await.is_empty());
        assert!(service.author_counts("fr").await.is_empty());
    }

    #[tokio::test]
    async fn test_write_and_lookup_paths_surface_storage_errors() {
        let service = broken_service();
        assert!(matches!(
            service.insert(input("Literature")).await,
            Err(DomainError::Storage(_))
        ));
        assert!(matches!(
            service.update(1, input("Literature")).await,
            Err(DomainError::Storage(_))
        ));
        assert!(matches!(service.find_by_id(1).await, Err(DomainError::Storage(_))));
        assert!(service.all_books().await.is_err());
    }

    #[tokio::test]
    async fn test_strict_mode_rejects_before_touching_storage() {
        let service = broken_service().with_strict_subjects(true);
        match service.insert(input("Sciense")).await {
            Err(DomainError::UnknownSubject { suggestion, .. }) => {
                assert_eq!(suggestion.as_deref(), Some("Science"));
            }
            other => panic!("expected UnknownSubject, got {:?}", other),
        }
    }

    #[test]
    fn test_lenient_classification_defaults() {
        let service = broken_service();
        assert_eq!(service.classify("Science").unwrap(), "500");
        assert_eq!(service.classify("Nonexistent Topic").unwrap(), "000");
    }
}
