use database::entities::term;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct TermResponse {
    pub id: i32,
    pub display_name: String,
    pub year: i32,
    pub start_month: i32,
}

impl From<term::Model> for TermResponse {
    fn from(model: term::Model) -> Self {
        Self {
            id: model.id,
            display_name: model.display_name,
            year: model.year,
            start_month: model.start_month,
        }
    }
}
