use crate::{
    dtos::{
        course::{CourseDescriptionResponse, CourseNoteResponse},
        pagination::ListParams,
    },
    error::ApiError,
    extract::{Path, Query, ValidatedJson},
    state::AppState,
};
use axum::{Json, extract::State};
use database::services::{
    course_description::CourseDescriptionService, course_note::CourseNoteService,
};
use models::course::{CourseDescriptionCreate, CourseNoteCreate};

/// Add a description to a course
#[utoipa::path(
    post,
    path = "/courses/{course_id}/course_descriptions/",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    request_body = CourseDescriptionCreate,
    responses(
        (status = 200, description = "Description created", body = CourseDescriptionResponse),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Internal server error, including unknown course IDs")
    ),
    tag = "Courses"
)]
pub async fn create_course_description(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<CourseDescriptionCreate>,
) -> Result<Json<CourseDescriptionResponse>, ApiError> {
    let description =
        CourseDescriptionService::create_course_description(&state.db, &payload, course_id)
            .await?;

    Ok(Json(description.into()))
}

/// List descriptions across all courses
#[utoipa::path(
    get,
    path = "/course_descriptions/",
    params(ListParams),
    responses(
        (status = 200, description = "List of course descriptions", body = [CourseDescriptionResponse]),
        (status = 422, description = "Invalid query parameters")
    ),
    tag = "Courses"
)]
pub async fn list_course_descriptions(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<CourseDescriptionResponse>>, ApiError> {
    let descriptions =
        CourseDescriptionService::list_course_descriptions(&state.db, params.skip, params.limit)
            .await?;

    Ok(Json(descriptions.into_iter().map(Into::into).collect()))
}

/// Add a note to a course
#[utoipa::path(
    post,
    path = "/courses/{course_id}/course_notes/",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    request_body = CourseNoteCreate,
    responses(
        (status = 200, description = "Note created", body = CourseNoteResponse),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Internal server error, including unknown course IDs")
    ),
    tag = "Courses"
)]
pub async fn create_course_note(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<CourseNoteCreate>,
) -> Result<Json<CourseNoteResponse>, ApiError> {
    let note = CourseNoteService::create_course_note(&state.db, &payload, course_id).await?;

    Ok(Json(note.into()))
}

/// List notes across all courses
#[utoipa::path(
    get,
    path = "/course_notes/",
    params(ListParams),
    responses(
        (status = 200, description = "List of course notes", body = [CourseNoteResponse]),
        (status = 422, description = "Invalid query parameters")
    ),
    tag = "Courses"
)]
pub async fn list_course_notes(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<CourseNoteResponse>>, ApiError> {
    let notes = CourseNoteService::list_course_notes(&state.db, params.skip, params.limit).await?;

    Ok(Json(notes.into_iter().map(Into::into).collect()))
}
