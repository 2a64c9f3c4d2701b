use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::infrastructure::AppState;
use crate::modules::classification::Subject;

#[utoipa::path(
    get,
    path = "/api/subjects",
    responses((status = 200, description = "Taxonomy ordered by code", body = [Subject]))
)]
pub async fn list_subjects(State(state): State<AppState>) -> Json<Vec<Subject>> {
    Json(state.catalog.classification().subjects().to_vec())
}

#[utoipa::path(
    get,
    path = "/api/subjects/{main_subject}/secondary",
    params(("main_subject" = String, Path, description = "Exact main subject label")),
    responses(
        (status = 200, description = "Secondary subjects", body = [String]),
        (status = 404, description = "Unknown main subject")
    )
)]
pub async fn list_secondary_subjects(
    State(state): State<AppState>,
    Path(main_subject): Path<String>,
) -> Response {
    match state
        .catalog
        .classification()
        .secondary_subjects_for(&main_subject)
    {
        Ok(secondary) => (StatusCode::OK, Json(secondary.to_vec())).into_response(),
        Err(e) => {
            tracing::debug!("Secondary subjects requested for unknown subject: {}", e);
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "status": "error", "message": e.to_string() })),
            )
                .into_response()
        }
    }
}
