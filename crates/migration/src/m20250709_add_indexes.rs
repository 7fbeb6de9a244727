use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Course codes are looked up by exact match and by substring, but are not unique
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_course_code")
                    .table(Courses::Table)
                    .col(Courses::CourseCode)
                    .to_owned(),
            )
            .await?;

        // Indexes on child tables for batch-loading a course's collections
        manager
            .create_index(
                Index::create()
                    .name("idx_course_descriptions_course_id")
                    .table(CourseDescriptions::Table)
                    .col(CourseDescriptions::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_notes_course_id")
                    .table(CourseNotes::Table)
                    .col(CourseNotes::CourseId)
                    .to_owned(),
            )
            .await?;

        // Indexes on the junction tables for faster many-to-many lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_course_lecturers_course_id")
                    .table(CourseLecturers::Table)
                    .col(CourseLecturers::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_lecturers_lecturer_id")
                    .table(CourseLecturers::Table)
                    .col(CourseLecturers::LecturerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_offering_terms_course_id")
                    .table(CourseOfferingTerms::Table)
                    .col(CourseOfferingTerms::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_offering_terms_term_id")
                    .table(CourseOfferingTerms::Table)
                    .col(CourseOfferingTerms::TermId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        for name in [
            "idx_course_offering_terms_term_id",
            "idx_course_offering_terms_course_id",
            "idx_course_lecturers_lecturer_id",
            "idx_course_lecturers_course_id",
            "idx_course_notes_course_id",
            "idx_course_descriptions_course_id",
            "idx_courses_course_code",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(Iden)]
enum Courses {
    Table,
    CourseCode,
}

#[derive(Iden)]
enum CourseDescriptions {
    Table,
    CourseId,
}

#[derive(Iden)]
enum CourseNotes {
    Table,
    CourseId,
}

#[derive(Iden)]
enum CourseLecturers {
    Table,
    CourseId,
    LecturerId,
}

#[derive(Iden)]
enum CourseOfferingTerms {
    Table,
    CourseId,
    TermId,
}
