use crate::{
    dtos::course::{CourseQueryParams, CourseResponse},
    error::ApiError,
    extract::{Path, Query, ValidatedJson},
    state::AppState,
};
use axum::{Json, extract::State};
use database::services::course::{CourseDetail, CourseService};
use models::course::CourseCreate;

/// Create a course
#[utoipa::path(
    post,
    path = "/courses/",
    request_body = CourseCreate,
    responses(
        (status = 200, description = "Course created", body = CourseResponse),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CourseCreate>,
) -> Result<Json<CourseResponse>, ApiError> {
    let course = CourseService::create_course(&state.db, &payload).await?;

    Ok(Json(CourseDetail::from(course).into()))
}

/// List courses, optionally filtered by course code
#[utoipa::path(
    get,
    path = "/courses/",
    params(CourseQueryParams),
    responses(
        (status = 200, description = "List of courses", body = [CourseResponse]),
        (status = 422, description = "Invalid query parameters"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseQueryParams>,
) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    // An empty code is treated the same as no code at all
    let courses = match params.code.as_deref().filter(|code| !code.is_empty()) {
        // At most one row, paged like every other listing
        Some(code) if params.exact => CourseService::get_course_by_code(&state.db, code)
            .await?
            .into_iter()
            .skip(usize::try_from(params.skip).unwrap_or(usize::MAX))
            .take(usize::try_from(params.limit).unwrap_or(usize::MAX))
            .collect::<Vec<_>>(),
        Some(code) => {
            CourseService::search_courses_by_code_substring(
                &state.db,
                code,
                params.skip,
                params.limit,
            )
            .await?
        }
        None => CourseService::list_courses(&state.db, params.skip, params.limit).await?,
    };

    let details = CourseService::with_children(&state.db, courses).await?;

    Ok(Json(details.into_iter().map(Into::into).collect()))
}

/// Get a specific course by ID
#[utoipa::path(
    get,
    path = "/courses/{course_id}",
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<Json<CourseResponse>, ApiError> {
    CourseService::get_course_detail(&state.db, course_id)
        .await?
        .map(|detail| Json(detail.into()))
        .ok_or(ApiError::NotFound("Course"))
}
