use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::{ApiError, JsonBody};
use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::models::{Book, BookInput};

/// Reply to add/edit requests
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MutationResponse {
    pub status: String,
    pub id: i32,
    pub ddc: String,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/books",
    request_body = BookInput,
    responses(
        (status = 201, description = "Book added", body = MutationResponse),
        (status = 409, description = "ISBN already catalogued"),
        (status = 422, description = "Missing field or unknown main subject (strict mode)")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<BookInput>,
) -> Result<impl IntoResponse, ApiError> {
    let book = state.catalog.insert(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            status: "success".to_string(),
            id: book.id,
            message: format!("Book added successfully. DDC: {}", book.ddc),
            ddc: book.ddc,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/books/{id}",
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "Stored record", body = Book),
        (status = 404, description = "No book with this id")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Book>, ApiError> {
    state
        .catalog
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError(DomainError::NotFound))
}

#[utoipa::path(
    put,
    path = "/api/books/{id}",
    params(("id" = i32, Path, description = "Book id")),
    request_body = BookInput,
    responses(
        (status = 200, description = "Book updated", body = MutationResponse),
        (status = 404, description = "No book with this id"),
        (status = 409, description = "ISBN belongs to another book"),
        (status = 422, description = "Missing field or unknown main subject (strict mode)")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(input): JsonBody<BookInput>,
) -> Result<Json<MutationResponse>, ApiError> {
    let book = state.catalog.update(id, input).await?;

    Ok(Json(MutationResponse {
        status: "success".to_string(),
        id: book.id,
        message: format!("Book updated successfully. DDC: {}", book.ddc),
        ddc: book.ddc,
    }))
}
