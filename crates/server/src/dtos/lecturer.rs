use chrono::{DateTime, FixedOffset};
use database::entities::lecturer;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct LecturerResponse {
    pub id: i32,
    pub name: String,
    pub note: String,
    pub homepage: String,
    pub email: String,
    pub edit_time: DateTime<FixedOffset>,
}

impl From<lecturer::Model> for LecturerResponse {
    fn from(model: lecturer::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            note: model.note,
            homepage: model.homepage,
            email: model.email,
            edit_time: model.edit_time,
        }
    }
}
