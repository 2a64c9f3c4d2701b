use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/api/lookup/{isbn}",
    params(("isbn" = String, Path, description = "ISBN-10 or ISBN-13, hyphens allowed")),
    responses(
        (status = 200, description = "Metadata to prefill the add-book form", body = crate::modules::integrations::BookInfo),
        (status = 404, description = "Open Library has no record for this ISBN"),
        (status = 502, description = "Open Library unreachable")
    )
)]
pub async fn lookup_book(State(state): State<AppState>, Path(isbn): Path<String>) -> Response {
    match state.lookup.fetch_book_info(&isbn).await {
        Ok(info) => (StatusCode::OK, Json(info)).into_response(),
        Err(DomainError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "status": "error", "message": format!("No book found for ISBN {}", isbn) })),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!("ISBN lookup for {} failed: {}", isbn, e);
            super::error::ApiError(e).into_response()
        }
    }
}
