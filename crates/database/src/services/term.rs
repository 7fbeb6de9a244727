use crate::{entities::term, services::SkipLimit};
use log::debug;
use models::term::TermCreate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

pub struct TermService;

impl TermService {
    pub async fn get_term(
        db: &DatabaseConnection,
        term_id: i32,
    ) -> Result<Option<term::Model>, DbErr> {
        term::Entity::find_by_id(term_id).one(db).await
    }

    pub async fn list_terms(
        db: &DatabaseConnection,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<term::Model>, DbErr> {
        debug!("Listing terms (skip={skip}, limit={limit})");
        term::Entity::find()
            .order_by_asc(term::Column::Id)
            .skip_limit(skip, limit)
            .all(db)
            .await
    }

    pub async fn create_term(
        db: &DatabaseConnection,
        payload: &TermCreate,
    ) -> Result<term::Model, DbErr> {
        let term = term::ActiveModel {
            display_name: Set(payload.display_name.clone()),
            year: Set(payload.year),
            start_month: Set(payload.start_month),
            ..Default::default()
        };

        term.insert(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_db;

    #[tokio::test]
    async fn test_create_list_and_get_terms() {
        let db = setup_db().await;
        let fall = TermService::create_term(
            &db,
            &TermCreate {
                display_name: "Fall 2024".to_string(),
                year: 2024,
                start_month: 9,
            },
        )
        .await
        .unwrap();
        let spring = TermService::create_term(
            &db,
            &TermCreate {
                display_name: "Spring 2025".to_string(),
                year: 2025,
                start_month: 2,
            },
        )
        .await
        .unwrap();

        assert_eq!(
            fall,
            term::Model {
                id: 1,
                display_name: "Fall 2024".to_string(),
                year: 2024,
                start_month: 9,
            }
        );
        assert_eq!(
            TermService::list_terms(&db, 0, 100).await.unwrap(),
            vec![fall, spring.clone()]
        );
        assert_eq!(
            TermService::get_term(&db, spring.id).await.unwrap(),
            Some(spring)
        );
        assert_eq!(TermService::get_term(&db, 3).await.unwrap(), None);
    }
}
