use axum::{
    Json,
    extract::{FromRequest, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::DomainError;

/// HTTP face of a `DomainError`: `{ "status": "error", "message": ... }`
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(DomainError::Validation(rejection.body_text()))
    }
}

/// JSON body extractor whose rejections use the `ApiError` shape
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::DuplicateKey(_) => (StatusCode::CONFLICT, self.0.to_string()),
            DomainError::NotFound => (StatusCode::NOT_FOUND, "Book not found".to_string()),
            DomainError::UnknownSubject { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.0.to_string())
            }
            DomainError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.0.to_string()),
            DomainError::External(_) => (StatusCode::BAD_GATEWAY, self.0.to_string()),
            // Details are already logged by the service
            DomainError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "The catalog could not complete the operation".to_string(),
            ),
        };

        (status, Json(json!({ "status": "error", "message": message }))).into_response()
    }
}
