use crate::validation::{FieldError, Validate};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    static ref HTTP_URL: Regex = Regex::new(r"^https?://[^\s/?#]+\.[^\s/?#]+(?:[/?#]\S*)?$").unwrap();
}

pub const DEFAULT_HOMEPAGE: &str = "https://staff.uic.edu.cn";
pub const DEFAULT_EMAIL: &str = "placeholder@uic.edu.cn";

/// Payload for creating a lecturer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LecturerCreate {
    pub name: String,
    #[serde(default)]
    pub note: String,
    #[serde(default = "default_homepage")]
    pub homepage: String,
    #[serde(default = "default_email")]
    pub email: String,
}

fn default_homepage() -> String {
    DEFAULT_HOMEPAGE.to_owned()
}

fn default_email() -> String {
    DEFAULT_EMAIL.to_owned()
}

impl Validate for LecturerCreate {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if !HTTP_URL.is_match(&self.homepage) {
            errors.push(FieldError::new("homepage", "invalid or missing URL scheme"));
        }

        if !EMAIL.is_match(&self.email) {
            errors.push(FieldError::new("email", "value is not a valid email address"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lecturer(homepage: &str, email: &str) -> LecturerCreate {
        LecturerCreate {
            name: "Ada".to_string(),
            note: String::new(),
            homepage: homepage.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_lecturer_defaults_are_valid() {
        let lecturer: LecturerCreate = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(lecturer.note, "");
        assert_eq!(lecturer.homepage, DEFAULT_HOMEPAGE);
        assert_eq!(lecturer.email, DEFAULT_EMAIL);
        assert_eq!(lecturer.validate(), Ok(()));
    }

    #[test]
    fn test_valid_lecturer() {
        let valid = lecturer("http://example.edu/~ada?tab=1", "ada.l@example.edu");
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_invalid_email() {
        let errors = lecturer(DEFAULT_HOMEPAGE, "not-an-email").validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn test_invalid_homepage() {
        for homepage in ["staff.uic.edu.cn", "ftp://files.example.edu", "https://localhost"] {
            let errors = lecturer(homepage, DEFAULT_EMAIL).validate().unwrap_err();
            assert_eq!(errors[0].field, "homepage", "accepted {homepage}");
        }
    }

    #[test]
    fn test_reports_every_invalid_field() {
        let errors = lecturer("nope", "nope").validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["homepage", "email"]);
    }
}
