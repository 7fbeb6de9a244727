use crate::{entities::lecturer, services::SkipLimit};
use chrono::Utc;
use log::debug;
use models::lecturer::LecturerCreate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

pub struct LecturerService;

impl LecturerService {
    pub async fn get_lecturer(
        db: &DatabaseConnection,
        lecturer_id: i32,
    ) -> Result<Option<lecturer::Model>, DbErr> {
        debug!("Fetching lecturer {lecturer_id}");
        lecturer::Entity::find_by_id(lecturer_id).one(db).await
    }

    pub async fn list_lecturers(
        db: &DatabaseConnection,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<lecturer::Model>, DbErr> {
        debug!("Listing lecturers (skip={skip}, limit={limit})");
        lecturer::Entity::find()
            .order_by_asc(lecturer::Column::Id)
            .skip_limit(skip, limit)
            .all(db)
            .await
    }

    pub async fn create_lecturer(
        db: &DatabaseConnection,
        payload: &LecturerCreate,
    ) -> Result<lecturer::Model, DbErr> {
        let lecturer = lecturer::ActiveModel {
            name: Set(payload.name.clone()),
            note: Set(payload.note.clone()),
            homepage: Set(payload.homepage.clone()),
            email: Set(payload.email.clone()),
            edit_time: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let lecturer = lecturer.insert(db).await?;
        debug!("Created lecturer {} ({})", lecturer.id, lecturer.name);
        Ok(lecturer)
    }
}
