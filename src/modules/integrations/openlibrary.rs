//! Open Library ISBN lookup used to prefill the add-book form

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Metadata needed to prefill a catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookInfo {
    pub isbn: String,
    pub title: String,
    /// Authors joined with ", "
    pub author: String,
    /// Open Library language code, e.g. "eng"
    pub language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenLibraryResponse {
    #[serde(flatten)]
    books: HashMap<String, OpenLibraryEntry>,
}

#[derive(Debug, Deserialize)]
struct OpenLibraryEntry {
    details: OpenLibraryDetails,
}

#[derive(Debug, Deserialize)]
struct OpenLibraryDetails {
    title: String,
    authors: Option<Vec<OpenLibraryAuthor>>,
    languages: Option<Vec<OpenLibraryKey>>,
}

#[derive(Debug, Deserialize)]
struct OpenLibraryAuthor {
    name: String,
}

#[derive(Debug, Deserialize)]
struct OpenLibraryKey {
    key: String,
}

/// Keep only the characters that make up an ISBN-10/13.
pub fn normalize_isbn(isbn: &str) -> String {
    isbn.chars()
        .filter(|c| c.is_ascii_digit() || *c == 'X' || *c == 'x')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[derive(Clone)]
pub struct OpenLibraryClient {
    base_url: String,
    client: reqwest::Client,
}

impl OpenLibraryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub async fn fetch_book_info(&self, isbn: &str) -> Result<BookInfo, DomainError> {
        let isbn = normalize_isbn(isbn);
        if isbn.is_empty() {
            return Err(DomainError::Validation("ISBN must contain digits".to_string()));
        }

        let url = format!(
            "{}/api/books?bibkeys=ISBN:{}&format=json&jscmd=details",
            self.base_url,
            urlencoding::encode(&isbn)
        );
        tracing::debug!("Open Library lookup: {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::External(format!("Failed to send request: {}", e)))?;

        if !resp.status().is_success() {
            return Err(DomainError::External(format!(
                "Open Library API returned status: {}",
                resp.status()
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| DomainError::External(format!("Failed to read response body: {}", e)))?;

        let parsed: OpenLibraryResponse = serde_json::from_str(&body)
            .map_err(|e| DomainError::External(format!("Failed to parse JSON: {}", e)))?;

        let key = format!("ISBN:{}", isbn);
        let entry = parsed.books.get(&key).ok_or(DomainError::NotFound)?;
        let details = &entry.details;

        let author = details
            .authors
            .as_ref()
            .map(|authors| {
                authors
                    .iter()
                    .map(|a| a.name.trim())
                    .filter(|n| !n.eq_ignore_ascii_case("unknown author") && !n.is_empty())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();

        let language = details
            .languages
            .as_ref()
            .and_then(|langs| langs.first())
            .and_then(|lang| lang.key.rsplit('/').next())
            .map(str::to_string);

        Ok(BookInfo {
            isbn,
            title: details.title.clone(),
            author,
            language,
        })
    }
}
