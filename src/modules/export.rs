//! CSV export of the catalog

use crate::domain::DomainError;
use crate::models::Book;

/// Render `books` as CSV with a header row named after the record fields.
pub fn books_to_csv(books: &[Book]) -> Result<String, DomainError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    if books.is_empty() {
        wtr.write_record([
            "id",
            "title",
            "author",
            "language",
            "main_subject",
            "secondary_subject",
            "isbn",
            "ddc",
            "created_at",
            "updated_at",
        ])
        .map_err(|e| DomainError::Storage(format!("CSV write error: {}", e)))?;
    }

    for book in books {
        wtr.serialize(book)
            .map_err(|e| DomainError::Storage(format!("CSV write error: {}", e)))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| DomainError::Storage(format!("CSV flush error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| DomainError::Storage(format!("CSV encoding error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i32, title: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: "Ursula K. Le Guin".to_string(),
            language: "English".to_string(),
            main_subject: "Literature".to_string(),
            secondary_subject: "American literature in English".to_string(),
            isbn: format!("isbn-{}", id),
            ddc: "800".to_string(),
            created_at: "2026-01-01T00:00:00+00:00".to_string(),
            updated_at: "2026-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_header_and_quoting() {
        let csv = books_to_csv(&[book(1, "The Dispossessed"), book(2, "Earthsea, Book One")])
            .unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("id,title,author,language,main_subject,secondary_subject,isbn,ddc,created_at,updated_at")
        );
        assert!(lines.next().unwrap().starts_with("1,The Dispossessed,"));
        assert!(lines.next().unwrap().starts_with("2,\"Earthsea, Book One\","));
    }

    #[test]
    fn test_empty_catalog_still_has_header() {
        let csv = books_to_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
        assert!(csv.starts_with("id,title,"));
    }
}
