use crate::dtos::{
    association::{CourseLecturerResponse, CourseOfferingTermResponse},
    pagination::default_limit,
};
use chrono::{DateTime, FixedOffset};
use database::{
    entities::{course_description, course_note},
    services::course::CourseDetail,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub id: i32,
    pub course_code: String,
    pub course_name: String,
    pub course_name_cn: String,
    pub course_units: i32,
    pub course_type: Option<String>,
    pub course_prerequisite: Option<String>,
    pub visibility: bool,
    pub is_archived: bool,
    pub update_time: DateTime<FixedOffset>,
    pub course_descriptions: Vec<CourseDescriptionResponse>,
    pub course_notes: Vec<CourseNoteResponse>,
    pub course_lecturers: Vec<CourseLecturerResponse>,
    pub course_offering_terms: Vec<CourseOfferingTermResponse>,
}

impl From<CourseDetail> for CourseResponse {
    fn from(detail: CourseDetail) -> Self {
        let course = detail.course;

        Self {
            id: course.id,
            course_code: course.course_code,
            course_name: course.course_name,
            course_name_cn: course.course_name_cn,
            course_units: course.course_units,
            course_type: course.course_type,
            course_prerequisite: course.course_prerequisite,
            visibility: course.visibility,
            is_archived: course.is_archived,
            update_time: course.update_time,
            course_descriptions: detail.descriptions.into_iter().map(Into::into).collect(),
            course_notes: detail.notes.into_iter().map(Into::into).collect(),
            course_lecturers: detail.lecturers.into_iter().map(Into::into).collect(),
            course_offering_terms: detail.offering_terms.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseDescriptionResponse {
    pub id: i32,
    pub course_id: i32,
    pub course_description: String,
    pub create_time: DateTime<FixedOffset>,
}

impl From<course_description::Model> for CourseDescriptionResponse {
    fn from(model: course_description::Model) -> Self {
        Self {
            id: model.id,
            course_id: model.course_id,
            course_description: model.course_description,
            create_time: model.create_time,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseNoteResponse {
    pub id: i32,
    pub course_id: i32,
    pub course_note: String,
    pub create_time: DateTime<FixedOffset>,
}

impl From<course_note::Model> for CourseNoteResponse {
    fn from(model: course_note::Model) -> Self {
        Self {
            id: model.id,
            course_id: model.course_id,
            course_note: model.course_note,
            create_time: model.create_time,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CourseQueryParams {
    /// Filter by course code; substring match unless `exact` is set
    pub code: Option<String>,

    /// Match `code` exactly instead of as a substring
    #[serde(default)]
    pub exact: bool,

    #[serde(default)]
    #[param(default = 0)]
    pub skip: u64,

    #[serde(default = "default_limit")]
    #[param(default = 100)]
    pub limit: u64,
}
