use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub course_code: String, // e.g. "COMP1003", indexed but not unique
    pub course_name: String,
    pub course_name_cn: String,
    pub course_units: i32,
    pub course_type: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub course_prerequisite: Option<String>,
    pub update_time: DateTimeWithTimeZone,
    pub is_archived: bool,
    pub visibility: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_description::Entity")]
    CourseDescriptions,
    #[sea_orm(has_many = "super::course_note::Entity")]
    CourseNotes,
    #[sea_orm(has_many = "super::course_lecturer::Entity")]
    CourseLecturers,
    #[sea_orm(has_many = "super::course_offering_term::Entity")]
    CourseOfferingTerms,
}

impl Related<super::course_description::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseDescriptions.def()
    }
}

impl Related<super::course_note::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseNotes.def()
    }
}

impl Related<super::course_lecturer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseLecturers.def()
    }
}

impl Related<super::course_offering_term::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseOfferingTerms.def()
    }
}

// Many-to-many relationship with lecturers
impl Related<super::lecturer::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_lecturer::Relation::Lecturer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_lecturer::Relation::Course.def().rev())
    }
}

// Many-to-many relationship with terms
impl Related<super::term::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_offering_term::Relation::Term.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_offering_term::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
