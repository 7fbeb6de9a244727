use crate::validation::Validate;
use serde::{Deserialize, Serialize};

/// Payload for creating a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourseCreate {
    pub course_code: String,
    pub course_name: String,
    #[serde(default)]
    pub course_name_cn: String,
    #[serde(default = "default_course_units")]
    pub course_units: i32,
    pub course_type: Option<String>,
    pub course_prerequisite: Option<String>,
    #[serde(default = "default_visibility")]
    pub visibility: bool,
}

fn default_course_units() -> i32 {
    3
}

fn default_visibility() -> bool {
    true
}

impl Validate for CourseCreate {}

/// Payload for attaching a description to a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourseDescriptionCreate {
    pub course_description: String,
}

impl Validate for CourseDescriptionCreate {}

/// Payload for attaching a note to a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourseNoteCreate {
    pub course_note: String,
}

impl Validate for CourseNoteCreate {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_defaults() {
        let course: CourseCreate =
            serde_json::from_str(r#"{"course_code": "COMP101", "course_name": "Intro"}"#)
                .unwrap();

        assert_eq!(course.course_name_cn, "");
        assert_eq!(course.course_units, 3);
        assert_eq!(course.course_type, None);
        assert_eq!(course.course_prerequisite, None);
        assert!(course.visibility);
    }

    #[test]
    fn test_course_requires_code_and_name() {
        let result = serde_json::from_str::<CourseCreate>(r#"{"course_name": "Intro"}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("course_code"), "unexpected error: {err}");
    }

    #[test]
    fn test_course_rejects_mistyped_units() {
        let result = serde_json::from_str::<CourseCreate>(
            r#"{"course_code": "COMP101", "course_name": "Intro", "course_units": "three"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_description_and_note_are_required() {
        assert!(serde_json::from_str::<CourseDescriptionCreate>("{}").is_err());
        assert!(serde_json::from_str::<CourseNoteCreate>("{}").is_err());
    }
}
