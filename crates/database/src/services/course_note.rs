use crate::{entities::course_note, services::SkipLimit};
use chrono::Utc;
use log::debug;
use models::course::CourseNoteCreate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

pub struct CourseNoteService;

impl CourseNoteService {
    pub async fn get_course_note(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<course_note::Model>, DbErr> {
        course_note::Entity::find_by_id(id).one(db).await
    }

    pub async fn list_course_notes(
        db: &DatabaseConnection,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<course_note::Model>, DbErr> {
        debug!("Listing course notes (skip={skip}, limit={limit})");
        course_note::Entity::find()
            .order_by_asc(course_note::Column::Id)
            .skip_limit(skip, limit)
            .all(db)
            .await
    }

    pub async fn create_course_note(
        db: &DatabaseConnection,
        payload: &CourseNoteCreate,
        course_id: i32,
    ) -> Result<course_note::Model, DbErr> {
        let note = course_note::ActiveModel {
            course_note: Set(payload.course_note.clone()),
            create_time: Set(Utc::now().fixed_offset()),
            course_id: Set(course_id),
            ..Default::default()
        };

        note.insert(db).await
    }
}
