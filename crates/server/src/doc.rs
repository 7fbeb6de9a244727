use crate::{
    error::ValidationDetail,
    routes::{association, course, course_content, health, lecturer, root, term},
};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        course::create_course,
        course::list_courses,
        course::get_course,
        course_content::create_course_description,
        course_content::list_course_descriptions,
        course_content::create_course_note,
        course_content::list_course_notes,
        lecturer::create_lecturer,
        lecturer::list_lecturers,
        lecturer::get_lecturer,
        term::create_term,
        term::list_terms,
        term::get_term,
        association::create_course_lecturer,
        association::list_course_lecturers,
        association::create_course_offering_term,
        association::list_course_offering_terms
    ),
    components(schemas(ValidationDetail)),
    tags(
        (name = "Health", description = "Service status endpoints"),
        (name = "Courses", description = "Courses with their descriptions and notes"),
        (name = "Lecturers", description = "Lecturer related endpoints"),
        (name = "Terms", description = "Academic term related endpoints"),
        (name = "Associations", description = "Course-lecturer and course-term links"),
    ),
    info(
        title = "Course Catalog API",
        version = "1.0.0",
        description = "University course catalog API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
