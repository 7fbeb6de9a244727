use crate::{entities::course_offering_term, services::SkipLimit};
use log::debug;
use models::association::CourseOfferingTermCreate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

pub struct CourseOfferingTermService;

impl CourseOfferingTermService {
    pub async fn get_course_offering_term(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<course_offering_term::Model>, DbErr> {
        course_offering_term::Entity::find_by_id(id).one(db).await
    }

    pub async fn list_course_offering_terms(
        db: &DatabaseConnection,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<course_offering_term::Model>, DbErr> {
        debug!("Listing course offering terms (skip={skip}, limit={limit})");
        course_offering_term::Entity::find()
            .order_by_asc(course_offering_term::Column::Id)
            .skip_limit(skip, limit)
            .all(db)
            .await
    }

    pub async fn create_course_offering_term(
        db: &DatabaseConnection,
        payload: &CourseOfferingTermCreate,
    ) -> Result<course_offering_term::Model, DbErr> {
        let offering = course_offering_term::ActiveModel {
            course_id: Set(payload.course_id),
            term_id: Set(payload.term_id),
            ..Default::default()
        };

        offering.insert(db).await
    }
}
