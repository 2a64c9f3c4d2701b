use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{AuthorCount, TitleSuggestion};
use crate::infrastructure::AppState;
use crate::models::Book;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Substring to look for; empty or missing lists every book
    pub query: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SuggestQuery {
    /// Text typed so far
    pub term: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/books/search",
    params(SearchQuery),
    responses((status = 200, description = "Matching books in insertion order", body = [Book]))
)]
pub async fn search_books(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<Book>> {
    let query = params.query.unwrap_or_default();
    Json(state.catalog.search(&query).await)
}

#[utoipa::path(
    get,
    path = "/api/titles",
    responses((status = 200, description = "Distinct titles", body = [String]))
)]
pub async fn list_titles(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.distinct_titles().await)
}

#[utoipa::path(
    get,
    path = "/api/authors",
    responses((status = 200, description = "Distinct authors", body = [String]))
)]
pub async fn list_authors(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.distinct_authors().await)
}

#[utoipa::path(
    get,
    path = "/api/titles/suggest",
    params(SuggestQuery),
    responses((status = 200, description = "Title completions", body = [TitleSuggestion]))
)]
pub async fn suggest_titles(
    State(state): State<AppState>,
    Query(params): Query<SuggestQuery>,
) -> Json<Vec<TitleSuggestion>> {
    let term = params.term.unwrap_or_default();
    Json(state.catalog.title_suggestions(term.trim()).await)
}

#[utoipa::path(
    get,
    path = "/api/authors/suggest",
    params(SuggestQuery),
    responses((status = 200, description = "Author completions with book counts", body = [AuthorCount]))
)]
pub async fn suggest_authors(
    State(state): State<AppState>,
    Query(params): Query<SuggestQuery>,
) -> Json<Vec<AuthorCount>> {
    let term = params.term.unwrap_or_default();
    Json(state.catalog.author_counts(term.trim()).await)
}
