use crate::{entities::course_description, services::SkipLimit};
use chrono::Utc;
use log::debug;
use models::course::CourseDescriptionCreate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

pub struct CourseDescriptionService;

impl CourseDescriptionService {
    pub async fn get_course_description(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<course_description::Model>, DbErr> {
        course_description::Entity::find_by_id(id).one(db).await
    }

    /// List descriptions of every course in insertion order
    pub async fn list_course_descriptions(
        db: &DatabaseConnection,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<course_description::Model>, DbErr> {
        debug!("Listing course descriptions (skip={skip}, limit={limit})");
        course_description::Entity::find()
            .order_by_asc(course_description::Column::Id)
            .skip_limit(skip, limit)
            .all(db)
            .await
    }

    /// Insert a description for `course_id`.
    ///
    /// The course is not looked up first, so a dangling ID surfaces as the
    /// database's foreign key error.
    pub async fn create_course_description(
        db: &DatabaseConnection,
        payload: &CourseDescriptionCreate,
        course_id: i32,
    ) -> Result<course_description::Model, DbErr> {
        let description = course_description::ActiveModel {
            course_description: Set(payload.course_description.clone()),
            create_time: Set(Utc::now().fixed_offset()),
            course_id: Set(course_id),
            ..Default::default()
        };

        description.insert(db).await
    }
}
