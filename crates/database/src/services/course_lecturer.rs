use crate::{entities::course_lecturer, services::SkipLimit};
use log::debug;
use models::association::CourseLecturerCreate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

pub struct CourseLecturerService;

impl CourseLecturerService {
    pub async fn get_course_lecturer(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<course_lecturer::Model>, DbErr> {
        course_lecturer::Entity::find_by_id(id).one(db).await
    }

    pub async fn list_course_lecturers(
        db: &DatabaseConnection,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<course_lecturer::Model>, DbErr> {
        debug!("Listing course lecturers (skip={skip}, limit={limit})");
        course_lecturer::Entity::find()
            .order_by_asc(course_lecturer::Column::Id)
            .skip_limit(skip, limit)
            .all(db)
            .await
    }

    /// Link a course to a lecturer. Linking the same pair twice adds a second row.
    pub async fn create_course_lecturer(
        db: &DatabaseConnection,
        payload: &CourseLecturerCreate,
    ) -> Result<course_lecturer::Model, DbErr> {
        let link = course_lecturer::ActiveModel {
            course_id: Set(payload.course_id),
            lecturer_id: Set(payload.lecturer_id),
            ..Default::default()
        };

        link.insert(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        services::{course::CourseService, lecturer::LecturerService},
        test_utils::setup_db,
    };
    use models::{course::CourseCreate, lecturer::LecturerCreate};

    async fn seed(db: &DatabaseConnection) -> (i32, i32) {
        let course = CourseService::create_course(
            db,
            &CourseCreate {
                course_code: "COMP101".to_string(),
                course_name: "Intro".to_string(),
                course_name_cn: String::new(),
                course_units: 3,
                course_type: None,
                course_prerequisite: None,
                visibility: true,
            },
        )
        .await
        .unwrap();
        let lecturer = LecturerService::create_lecturer(
            db,
            &LecturerCreate {
                name: "Grace".to_string(),
                note: String::new(),
                homepage: "https://staff.uic.edu.cn".to_string(),
                email: "grace@uic.edu.cn".to_string(),
            },
        )
        .await
        .unwrap();
        (course.id, lecturer.id)
    }

    #[tokio::test]
    async fn test_duplicate_pairs_are_allowed() {
        let db = setup_db().await;
        let (course_id, lecturer_id) = seed(&db).await;
        let payload = CourseLecturerCreate {
            course_id,
            lecturer_id,
        };

        let first = CourseLecturerService::create_course_lecturer(&db, &payload)
            .await
            .unwrap();
        let second = CourseLecturerService::create_course_lecturer(&db, &payload)
            .await
            .unwrap();
        assert_ne!(first.id, second.id);

        let listed = CourseLecturerService::list_course_lecturers(&db, 0, 100)
            .await
            .unwrap();
        assert_eq!(listed, vec![first.clone(), second]);
        assert_eq!(
            CourseLecturerService::get_course_lecturer(&db, first.id)
                .await
                .unwrap(),
            Some(first)
        );
    }

    #[tokio::test]
    async fn test_dangling_references_fail() {
        let db = setup_db().await;
        let (course_id, lecturer_id) = seed(&db).await;

        let missing_lecturer = CourseLecturerCreate {
            course_id,
            lecturer_id: lecturer_id + 1,
        };
        assert!(
            CourseLecturerService::create_course_lecturer(&db, &missing_lecturer)
                .await
                .is_err()
        );

        let missing_course = CourseLecturerCreate {
            course_id: course_id + 1,
            lecturer_id,
        };
        assert!(
            CourseLecturerService::create_course_lecturer(&db, &missing_course)
                .await
                .is_err()
        );
    }
}
