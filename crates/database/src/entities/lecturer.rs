use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lecturers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub note: String,
    pub homepage: String,
    pub email: String,
    pub edit_time: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_lecturer::Entity")]
    CourseLecturers,
}

impl Related<super::course_lecturer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseLecturers.def()
    }
}

// Many-to-many relationship with courses
impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_lecturer::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_lecturer::Relation::Lecturer.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
