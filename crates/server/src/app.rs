use crate::{
    doc::ApiDoc,
    routes::{association, course, course_content, health, lecturer, root, term},
    state::AppState,
};
use axum::{
    Router,
    routing::{MethodRouter, get, post},
};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Registers `method_router` at `path` with and without a trailing slash
fn collection(
    router: Router<AppState>,
    path: &str,
    method_router: MethodRouter<AppState>,
) -> Router<AppState> {
    router
        .route(path, method_router.clone())
        .route(&format!("{path}/"), method_router)
}

/// Builds the application router with every endpoint
pub fn router(state: AppState) -> Router {
    let mut api = Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/courses/{course_id}", get(course::get_course))
        .route("/lecturers/{lecturer_id}", get(lecturer::get_lecturer))
        .route("/terms/{term_id}", get(term::get_term));

    let collections: [(&str, MethodRouter<AppState>); 9] = [
        (
            "/courses",
            get(course::list_courses).post(course::create_course),
        ),
        (
            "/courses/{course_id}/course_descriptions",
            post(course_content::create_course_description),
        ),
        (
            "/course_descriptions",
            get(course_content::list_course_descriptions),
        ),
        (
            "/courses/{course_id}/course_notes",
            post(course_content::create_course_note),
        ),
        ("/course_notes", get(course_content::list_course_notes)),
        (
            "/lecturers",
            get(lecturer::list_lecturers).post(lecturer::create_lecturer),
        ),
        ("/terms", get(term::list_terms).post(term::create_term)),
        (
            "/course_lecturers",
            get(association::list_course_lecturers).post(association::create_course_lecturer),
        ),
        (
            "/course_offering_terms",
            get(association::list_course_offering_terms)
                .post(association::create_course_offering_term),
        ),
    ];

    for (path, method_router) in collections {
        api = collection(api, path, method_router);
    }

    api.with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
}
