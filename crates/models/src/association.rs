use crate::validation::Validate;
use serde::{Deserialize, Serialize};

/// Payload linking a course to a lecturer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourseLecturerCreate {
    pub course_id: i32,
    pub lecturer_id: i32,
}

impl Validate for CourseLecturerCreate {}

/// Payload linking a course to a term it is offered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourseOfferingTermCreate {
    pub course_id: i32,
    pub term_id: i32,
}

impl Validate for CourseOfferingTermCreate {}
