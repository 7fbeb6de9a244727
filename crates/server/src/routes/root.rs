use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

/// Greeting returned at the API root
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting", body = RootResponse)
    ),
    tag = "Health"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hello World".to_string(),
    })
}
