use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};

use super::error::ApiError;
use crate::infrastructure::AppState;
use crate::modules::export::books_to_csv;

#[utoipa::path(
    get,
    path = "/api/export",
    responses((status = 200, description = "Catalog as a CSV attachment", body = String, content_type = "text/csv"))
)]
pub async fn export_csv(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let books = state.catalog.all_books().await?;
    let body = books_to_csv(&books)?;

    let filename = format!(
        "shelfmark_export_{}.csv",
        chrono::Utc::now().format("%Y-%m-%d")
    );
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", filename))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    tracing::info!("Exported {} books", books.len());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("text/csv; charset=utf-8")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}
