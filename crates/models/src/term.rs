use crate::validation::Validate;
use serde::{Deserialize, Serialize};

/// Payload for creating an academic term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TermCreate {
    pub display_name: String,
    #[serde(default = "default_year")]
    pub year: i32,
    #[serde(default = "default_start_month")]
    pub start_month: i32,
}

fn default_year() -> i32 {
    2005
}

fn default_start_month() -> i32 {
    9
}

impl Validate for TermCreate {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_defaults() {
        let term: TermCreate = serde_json::from_str(r#"{"display_name": "Fall"}"#).unwrap();
        assert_eq!(term.year, 2005);
        assert_eq!(term.start_month, 9);
    }

    #[test]
    fn test_term_explicit_values() {
        let term: TermCreate = serde_json::from_str(
            r#"{"display_name": "Spring 2024", "year": 2024, "start_month": 2}"#,
        )
        .unwrap();
        assert_eq!(term.display_name, "Spring 2024");
        assert_eq!(term.year, 2024);
        assert_eq!(term.start_month, 2);
    }
}
