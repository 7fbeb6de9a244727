use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "terms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub display_name: String, // e.g. "2024-2025 Semester 1"
    pub year: i32,
    pub start_month: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_offering_term::Entity")]
    CourseOfferingTerms,
}

impl Related<super::course_offering_term::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseOfferingTerms.def()
    }
}

// Many-to-many relationship with courses
impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_offering_term::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_offering_term::Relation::Term.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
