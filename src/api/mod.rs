pub mod books;
pub mod error;
pub mod export;
pub mod health;
pub mod lookup;
pub mod search;
pub mod subjects;

use axum::{Router, routing::get};

use crate::infrastructure::AppState;

pub use error::ApiError;

pub fn api_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route("/books", axum::routing::post(books::create_book))
        .route("/books/search", get(search::search_books))
        .route("/books/:id", get(books::get_book).put(books::update_book))
        // Input assistance
        .route("/titles", get(search::list_titles))
        .route("/titles/suggest", get(search::suggest_titles))
        .route("/authors", get(search::list_authors))
        .route("/authors/suggest", get(search::suggest_authors))
        // Taxonomy
        .route("/subjects", get(subjects::list_subjects))
        .route(
            "/subjects/:main_subject/secondary",
            get(subjects::list_secondary_subjects),
        )
        // Lookup
        .route("/lookup/:isbn", get(lookup::lookup_book))
        // Export
        .route("/export", get(export::export_csv))
        .with_state(state)
}
