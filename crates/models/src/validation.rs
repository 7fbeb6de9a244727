use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A validation failure tied to a single payload field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Checks on a payload that go beyond what deserialization enforces.
///
/// Shape checks (types, required fields, defaults) happen during
/// deserialization; this only covers value formats.
pub trait Validate {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        Ok(())
    }
}
