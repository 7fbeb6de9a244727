use crate::{
    dtos::{lecturer::LecturerResponse, pagination::ListParams},
    error::ApiError,
    extract::{Path, Query, ValidatedJson},
    state::AppState,
};
use axum::{Json, extract::State};
use database::services::lecturer::LecturerService;
use models::lecturer::LecturerCreate;

/// Create a lecturer
#[utoipa::path(
    post,
    path = "/lecturers/",
    request_body = LecturerCreate,
    responses(
        (status = 200, description = "Lecturer created", body = LecturerResponse),
        (status = 422, description = "Invalid request body, email or homepage"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Lecturers"
)]
pub async fn create_lecturer(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LecturerCreate>,
) -> Result<Json<LecturerResponse>, ApiError> {
    let lecturer = LecturerService::create_lecturer(&state.db, &payload).await?;

    Ok(Json(lecturer.into()))
}

/// List lecturers
#[utoipa::path(
    get,
    path = "/lecturers/",
    params(ListParams),
    responses(
        (status = 200, description = "List of lecturers", body = [LecturerResponse]),
        (status = 422, description = "Invalid query parameters")
    ),
    tag = "Lecturers"
)]
pub async fn list_lecturers(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<LecturerResponse>>, ApiError> {
    let lecturers = LecturerService::list_lecturers(&state.db, params.skip, params.limit).await?;

    Ok(Json(lecturers.into_iter().map(Into::into).collect()))
}

/// Get a specific lecturer by ID
#[utoipa::path(
    get,
    path = "/lecturers/{lecturer_id}",
    params(
        ("lecturer_id" = i32, Path, description = "Lecturer ID")
    ),
    responses(
        (status = 200, description = "Lecturer found", body = LecturerResponse),
        (status = 404, description = "Lecturer not found")
    ),
    tag = "Lecturers"
)]
pub async fn get_lecturer(
    State(state): State<AppState>,
    Path(lecturer_id): Path<i32>,
) -> Result<Json<LecturerResponse>, ApiError> {
    LecturerService::get_lecturer(&state.db, lecturer_id)
        .await?
        .map(|lecturer| Json(lecturer.into()))
        .ok_or(ApiError::NotFound("Lecturer"))
}
