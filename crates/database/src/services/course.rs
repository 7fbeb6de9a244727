use crate::{
    entities::{course, course_description, course_lecturer, course_note, course_offering_term},
    services::SkipLimit,
};
use chrono::Utc;
use log::debug;
use models::course::CourseCreate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

/// A course together with every row that references it
#[derive(Clone, Debug, PartialEq)]
pub struct CourseDetail {
    pub course: course::Model,
    pub descriptions: Vec<course_description::Model>,
    pub notes: Vec<course_note::Model>,
    pub lecturers: Vec<course_lecturer::Model>,
    pub offering_terms: Vec<course_offering_term::Model>,
}

impl From<course::Model> for CourseDetail {
    /// A course with no child rows, as it is right after creation
    fn from(course: course::Model) -> Self {
        Self {
            course,
            descriptions: vec![],
            notes: vec![],
            lecturers: vec![],
            offering_terms: vec![],
        }
    }
}

pub struct CourseService;

impl CourseService {
    /// The number of course ids bound into a single child-table query
    const BATCH_SIZE: usize = 500;

    /// Get a single course by its ID
    pub async fn get_course(
        db: &DatabaseConnection,
        course_id: i32,
    ) -> Result<Option<course::Model>, DbErr> {
        debug!("Fetching course {course_id}");
        course::Entity::find_by_id(course_id).one(db).await
    }

    /// Get the first course whose code matches exactly
    pub async fn get_course_by_code(
        db: &DatabaseConnection,
        course_code: &str,
    ) -> Result<Option<course::Model>, DbErr> {
        debug!("Fetching course with code {course_code:?}");
        course::Entity::find()
            .filter(course::Column::CourseCode.eq(course_code))
            .order_by_asc(course::Column::Id)
            .one(db)
            .await
    }

    /// List courses in insertion order
    pub async fn list_courses(
        db: &DatabaseConnection,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<course::Model>, DbErr> {
        debug!("Listing courses (skip={skip}, limit={limit})");
        course::Entity::find()
            .order_by_asc(course::Column::Id)
            .skip_limit(skip, limit)
            .all(db)
            .await
    }

    /// List courses whose code contains `code`.
    ///
    /// Case sensitivity follows the database's `LIKE` semantics.
    pub async fn search_courses_by_code_substring(
        db: &DatabaseConnection,
        code: &str,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<course::Model>, DbErr> {
        debug!("Searching courses by code {code:?} (skip={skip}, limit={limit})");
        course::Entity::find()
            .filter(course::Column::CourseCode.contains(code))
            .order_by_asc(course::Column::Id)
            .skip_limit(skip, limit)
            .all(db)
            .await
    }

    /// Insert a course and return the stored row
    pub async fn create_course(
        db: &DatabaseConnection,
        payload: &CourseCreate,
    ) -> Result<course::Model, DbErr> {
        let course = course::ActiveModel {
            course_code: Set(payload.course_code.clone()),
            course_name: Set(payload.course_name.clone()),
            course_name_cn: Set(payload.course_name_cn.clone()),
            course_units: Set(payload.course_units),
            course_type: Set(payload.course_type.clone()),
            course_prerequisite: Set(payload.course_prerequisite.clone()),
            update_time: Set(Utc::now().fixed_offset()),
            is_archived: Set(false),
            visibility: Set(payload.visibility),
            ..Default::default()
        };

        let course = course.insert(db).await?;
        debug!("Created course {} ({})", course.id, course.course_code);
        Ok(course)
    }

    /// Get a single course with all of its descriptions, notes and associations
    pub async fn get_course_detail(
        db: &DatabaseConnection,
        course_id: i32,
    ) -> Result<Option<CourseDetail>, DbErr> {
        let course = match Self::get_course(db, course_id).await? {
            Some(course) => course,
            None => return Ok(None),
        };

        Ok(Self::with_children(db, vec![course]).await?.pop())
    }

    /// Attach child rows to a batch of courses, preserving the input order
    pub async fn with_children(
        db: &DatabaseConnection,
        courses: Vec<course::Model>,
    ) -> Result<Vec<CourseDetail>, DbErr> {
        if courses.is_empty() {
            return Ok(vec![]);
        }

        let course_ids: Vec<i32> = courses.iter().map(|c| c.id).collect();
        let mut descriptions = Vec::new();
        let mut notes = Vec::new();
        let mut lecturers = Vec::new();
        let mut offering_terms = Vec::new();

        // Batch fetch every child collection, a chunk of course ids at a time
        for batch in course_ids.chunks(Self::BATCH_SIZE) {
            let (batch_descriptions, batch_notes, batch_lecturers, batch_offering_terms) =
                futures::try_join!(
                    course_description::Entity::find()
                        .filter(course_description::Column::CourseId.is_in(batch.to_vec()))
                        .order_by_asc(course_description::Column::Id)
                        .all(db),
                    course_note::Entity::find()
                        .filter(course_note::Column::CourseId.is_in(batch.to_vec()))
                        .order_by_asc(course_note::Column::Id)
                        .all(db),
                    course_lecturer::Entity::find()
                        .filter(course_lecturer::Column::CourseId.is_in(batch.to_vec()))
                        .order_by_asc(course_lecturer::Column::Id)
                        .all(db),
                    course_offering_term::Entity::find()
                        .filter(course_offering_term::Column::CourseId.is_in(batch.to_vec()))
                        .order_by_asc(course_offering_term::Column::Id)
                        .all(db),
                )?;

            descriptions.extend(batch_descriptions);
            notes.extend(batch_notes);
            lecturers.extend(batch_lecturers);
            offering_terms.extend(batch_offering_terms);
        }

        // Build lookup maps
        let mut details: Vec<CourseDetail> =
            courses.into_iter().map(CourseDetail::from).collect();
        let index_by_id: HashMap<i32, usize> = details
            .iter()
            .enumerate()
            .map(|(idx, detail)| (detail.course.id, idx))
            .collect();

        for description in descriptions {
            if let Some(&idx) = index_by_id.get(&description.course_id) {
                details[idx].descriptions.push(description);
            }
        }

        for note in notes {
            if let Some(&idx) = index_by_id.get(&note.course_id) {
                details[idx].notes.push(note);
            }
        }

        for lecturer in lecturers {
            if let Some(&idx) = index_by_id.get(&lecturer.course_id) {
                details[idx].lecturers.push(lecturer);
            }
        }

        for offering_term in offering_terms {
            if let Some(&idx) = index_by_id.get(&offering_term.course_id) {
                details[idx].offering_terms.push(offering_term);
            }
        }

        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        services::{
            course_description::CourseDescriptionService, course_lecturer::CourseLecturerService,
            course_note::CourseNoteService, lecturer::LecturerService,
        },
        test_utils::setup_db,
    };
    use models::{
        association::CourseLecturerCreate,
        course::{CourseDescriptionCreate, CourseNoteCreate},
        lecturer::LecturerCreate,
    };

    fn course_payload(code: &str, name: &str) -> CourseCreate {
        CourseCreate {
            course_code: code.to_string(),
            course_name: name.to_string(),
            course_name_cn: String::new(),
            course_units: 3,
            course_type: None,
            course_prerequisite: None,
            visibility: true,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_course() {
        let db = setup_db().await;
        let payload = CourseCreate {
            course_type: Some("Major Required".to_string()),
            course_prerequisite: Some("COMP1003".to_string()),
            ..course_payload("COMP101", "Intro")
        };

        let created = CourseService::create_course(&db, &payload).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.course_code, "COMP101");
        assert_eq!(created.course_name, "Intro");
        assert_eq!(created.course_name_cn, "");
        assert_eq!(created.course_units, 3);
        assert_eq!(created.course_type.as_deref(), Some("Major Required"));
        assert_eq!(created.course_prerequisite.as_deref(), Some("COMP1003"));
        assert!(!created.is_archived);
        assert!(created.visibility);

        let fetched = CourseService::get_course(&db, created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_get_missing_course() {
        let db = setup_db().await;
        assert_eq!(CourseService::get_course(&db, 42).await.unwrap(), None);
        assert_eq!(CourseService::get_course_detail(&db, 42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_courses_in_insertion_order() {
        let db = setup_db().await;
        let codes: Vec<String> = (0..5).map(|i| format!("MATH{}", 500 - i)).collect();
        for code in &codes {
            CourseService::create_course(&db, &course_payload(code, "Calculus"))
                .await
                .unwrap();
        }

        let courses = CourseService::list_courses(&db, 0, 100).await.unwrap();
        let listed: Vec<String> = courses.into_iter().map(|c| c.course_code).collect();
        assert_eq!(listed, codes);

        let page = CourseService::list_courses(&db, 1, 2).await.unwrap();
        let paged: Vec<&str> = page.iter().map(|c| c.course_code.as_str()).collect();
        assert_eq!(paged, vec!["MATH499", "MATH498"]);

        assert!(CourseService::list_courses(&db, 10, 100).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_courses_by_code_substring() {
        let db = setup_db().await;
        for code in ["COMP1003", "COMP2013", "MATH1003", "STAT2013"] {
            CourseService::create_course(&db, &course_payload(code, "Course"))
                .await
                .unwrap();
        }

        let found = CourseService::search_courses_by_code_substring(&db, "2013", 0, 100)
            .await
            .unwrap();
        let codes: Vec<&str> = found.iter().map(|c| c.course_code.as_str()).collect();
        assert_eq!(codes, vec!["COMP2013", "STAT2013"]);

        let found = CourseService::search_courses_by_code_substring(&db, "COMP", 1, 100)
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].course_code, "COMP2013");

        let found = CourseService::search_courses_by_code_substring(&db, "PHYS", 0, 100)
            .await
            .unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_get_course_by_code_is_exact() {
        let db = setup_db().await;
        CourseService::create_course(&db, &course_payload("COMP1003", "Programming"))
            .await
            .unwrap();
        let first = CourseService::create_course(&db, &course_payload("COMP100", "Computing"))
            .await
            .unwrap();
        // Codes are not unique, the earliest row wins
        CourseService::create_course(&db, &course_payload("COMP100", "Computing II"))
            .await
            .unwrap();

        let found = CourseService::get_course_by_code(&db, "COMP100").await.unwrap();
        assert_eq!(found, Some(first));

        let missing = CourseService::get_course_by_code(&db, "COMP10").await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_course_detail_collects_children() {
        let db = setup_db().await;
        let first = CourseService::create_course(&db, &course_payload("COMP101", "Intro"))
            .await
            .unwrap();
        let second = CourseService::create_course(&db, &course_payload("COMP102", "Next"))
            .await
            .unwrap();

        let description = CourseDescriptionService::create_course_description(
            &db,
            &CourseDescriptionCreate {
                course_description: "Basics".to_string(),
            },
            first.id,
        )
        .await
        .unwrap();
        let note = CourseNoteService::create_course_note(
            &db,
            &CourseNoteCreate {
                course_note: "Bring a laptop".to_string(),
            },
            second.id,
        )
        .await
        .unwrap();
        let lecturer = LecturerService::create_lecturer(
            &db,
            &LecturerCreate {
                name: "Ada".to_string(),
                note: String::new(),
                homepage: "https://staff.uic.edu.cn".to_string(),
                email: "ada@uic.edu.cn".to_string(),
            },
        )
        .await
        .unwrap();
        let link = CourseLecturerService::create_course_lecturer(
            &db,
            &CourseLecturerCreate {
                course_id: first.id,
                lecturer_id: lecturer.id,
            },
        )
        .await
        .unwrap();

        let detail = CourseService::get_course_detail(&db, first.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(detail.course, first);
        assert_eq!(detail.descriptions, vec![description]);
        assert!(detail.notes.is_empty());
        assert_eq!(detail.lecturers, vec![link]);
        assert!(detail.offering_terms.is_empty());

        let courses = CourseService::list_courses(&db, 0, 100).await.unwrap();
        let details = CourseService::with_children(&db, courses).await.unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].course.id, first.id);
        assert_eq!(details[1].course.id, second.id);
        assert_eq!(details[1].notes, vec![note]);
        assert!(details[1].descriptions.is_empty());
    }

    #[tokio::test]
    async fn test_with_children_of_no_courses() {
        let db = setup_db().await;
        assert!(CourseService::with_children(&db, vec![]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_with_children_spans_several_batches() {
        let db = setup_db().await;
        let count = CourseService::BATCH_SIZE * 2 + 1;
        for i in 0..count {
            CourseService::create_course(&db, &course_payload(&format!("C{i}"), "Course"))
                .await
                .unwrap();
        }
        let last_id = count as i32;
        let note = CourseNoteService::create_course_note(
            &db,
            &CourseNoteCreate {
                course_note: "Last one".to_string(),
            },
            last_id,
        )
        .await
        .unwrap();

        let courses = CourseService::list_courses(&db, 0, u64::MAX).await.unwrap();
        assert_eq!(courses.len(), count);

        let details = CourseService::with_children(&db, courses).await.unwrap();
        assert_eq!(details.len(), count);
        assert_eq!(details[count - 1].course.id, last_id);
        assert_eq!(details[count - 1].notes, vec![note]);
        assert!(details[..count - 1].iter().all(|d| d.notes.is_empty()));
    }

    #[tokio::test]
    async fn test_list_courses_with_huge_skip_and_limit() {
        let db = setup_db().await;
        CourseService::create_course(&db, &course_payload("COMP101", "Intro"))
            .await
            .unwrap();

        let all = CourseService::list_courses(&db, 0, u64::MAX).await.unwrap();
        assert_eq!(all.len(), 1);

        let none = CourseService::list_courses(&db, u64::MAX, u64::MAX).await.unwrap();
        assert!(none.is_empty());

        let found = CourseService::search_courses_by_code_substring(&db, "COMP", 1 << 63, 100)
            .await
            .unwrap();
        assert!(found.is_empty());
    }
}
