use crate::{
    dtos::{
        association::{CourseLecturerResponse, CourseOfferingTermResponse},
        pagination::ListParams,
    },
    error::ApiError,
    extract::{Query, ValidatedJson},
    state::AppState,
};
use axum::{Json, extract::State};
use database::services::{
    course_lecturer::CourseLecturerService, course_offering_term::CourseOfferingTermService,
};
use models::association::{CourseLecturerCreate, CourseOfferingTermCreate};

/// Assign a lecturer to a course
#[utoipa::path(
    post,
    path = "/course_lecturers/",
    request_body = CourseLecturerCreate,
    responses(
        (status = 200, description = "Course lecturer created", body = CourseLecturerResponse),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Internal server error, including unknown IDs")
    ),
    tag = "Associations"
)]
pub async fn create_course_lecturer(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CourseLecturerCreate>,
) -> Result<Json<CourseLecturerResponse>, ApiError> {
    let link = CourseLecturerService::create_course_lecturer(&state.db, &payload).await?;

    Ok(Json(link.into()))
}

/// List course-lecturer assignments
#[utoipa::path(
    get,
    path = "/course_lecturers/",
    params(ListParams),
    responses(
        (status = 200, description = "List of course lecturers", body = [CourseLecturerResponse])
    ),
    tag = "Associations"
)]
pub async fn list_course_lecturers(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<CourseLecturerResponse>>, ApiError> {
    let links =
        CourseLecturerService::list_course_lecturers(&state.db, params.skip, params.limit).await?;

    Ok(Json(links.into_iter().map(Into::into).collect()))
}

/// Record that a course is offered in a term
#[utoipa::path(
    post,
    path = "/course_offering_terms/",
    request_body = CourseOfferingTermCreate,
    responses(
        (status = 200, description = "Course offering term created", body = CourseOfferingTermResponse),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Internal server error, including unknown IDs")
    ),
    tag = "Associations"
)]
pub async fn create_course_offering_term(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CourseOfferingTermCreate>,
) -> Result<Json<CourseOfferingTermResponse>, ApiError> {
    let offering =
        CourseOfferingTermService::create_course_offering_term(&state.db, &payload).await?;

    Ok(Json(offering.into()))
}

/// List the terms each course is offered in
#[utoipa::path(
    get,
    path = "/course_offering_terms/",
    params(ListParams),
    responses(
        (status = 200, description = "List of course offering terms", body = [CourseOfferingTermResponse])
    ),
    tag = "Associations"
)]
pub async fn list_course_offering_terms(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<CourseOfferingTermResponse>>, ApiError> {
    let offerings = CourseOfferingTermService::list_course_offering_terms(
        &state.db,
        params.skip,
        params.limit,
    )
    .await?;

    Ok(Json(offerings.into_iter().map(Into::into).collect()))
}
