use crate::{
    dtos::{pagination::ListParams, term::TermResponse},
    error::ApiError,
    extract::{Path, Query, ValidatedJson},
    state::AppState,
};
use axum::{Json, extract::State};
use database::services::term::TermService;
use models::term::TermCreate;

/// Create an academic term
#[utoipa::path(
    post,
    path = "/terms/",
    request_body = TermCreate,
    responses(
        (status = 200, description = "Term created", body = TermResponse),
        (status = 422, description = "Invalid request body")
    ),
    tag = "Terms"
)]
pub async fn create_term(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<TermCreate>,
) -> Result<Json<TermResponse>, ApiError> {
    let term = TermService::create_term(&state.db, &payload).await?;

    Ok(Json(term.into()))
}

/// List terms
#[utoipa::path(
    get,
    path = "/terms/",
    params(ListParams),
    responses(
        (status = 200, description = "List of terms", body = [TermResponse]),
        (status = 422, description = "Invalid query parameters")
    ),
    tag = "Terms"
)]
pub async fn list_terms(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<TermResponse>>, ApiError> {
    let terms = TermService::list_terms(&state.db, params.skip, params.limit).await?;

    Ok(Json(terms.into_iter().map(Into::into).collect()))
}

/// Get a specific term by ID
#[utoipa::path(
    get,
    path = "/terms/{term_id}",
    params(
        ("term_id" = i32, Path, description = "Term ID")
    ),
    responses(
        (status = 200, description = "Term found", body = TermResponse),
        (status = 404, description = "Term not found")
    ),
    tag = "Terms"
)]
pub async fn get_term(
    State(state): State<AppState>,
    Path(term_id): Path<i32>,
) -> Result<Json<TermResponse>, ApiError> {
    TermService::get_term(&state.db, term_id)
        .await?
        .map(|term| Json(term.into()))
        .ok_or(ApiError::NotFound("Term"))
}
