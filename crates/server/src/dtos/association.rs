use database::entities::{course_lecturer, course_offering_term};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseLecturerResponse {
    pub id: i32,
    pub course_id: i32,
    pub lecturer_id: i32,
}

impl From<course_lecturer::Model> for CourseLecturerResponse {
    fn from(model: course_lecturer::Model) -> Self {
        Self {
            id: model.id,
            course_id: model.course_id,
            lecturer_id: model.lecturer_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseOfferingTermResponse {
    pub id: i32,
    pub course_id: i32,
    pub term_id: i32,
}

impl From<course_offering_term::Model> for CourseOfferingTermResponse {
    fn from(model: course_offering_term::Model) -> Self {
        Self {
            id: model.id,
            course_id: model.course_id,
            term_id: model.term_id,
        }
    }
}
