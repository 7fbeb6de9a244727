use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::CourseCode).string().not_null())
                    .col(ColumnDef::new(Courses::CourseName).string().not_null())
                    .col(
                        ColumnDef::new(Courses::CourseNameCn)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Courses::CourseUnits)
                            .integer()
                            .not_null()
                            .default(3),
                    )
                    .col(ColumnDef::new(Courses::CourseType).string())
                    .col(ColumnDef::new(Courses::CoursePrerequisite).text())
                    .col(
                        ColumnDef::new(Courses::UpdateTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Courses::IsArchived)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Courses::Visibility)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_descriptions table
        manager
            .create_table(
                Table::create()
                    .table(CourseDescriptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseDescriptions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseDescriptions::CourseDescription)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseDescriptions::CreateTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CourseDescriptions::CourseId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_descriptions-course_id")
                            .from(CourseDescriptions::Table, CourseDescriptions::CourseId)
                            .to(Courses::Table, Courses::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_notes table
        manager
            .create_table(
                Table::create()
                    .table(CourseNotes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseNotes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseNotes::CourseNote).text().not_null())
                    .col(
                        ColumnDef::new(CourseNotes::CreateTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(CourseNotes::CourseId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_notes-course_id")
                            .from(CourseNotes::Table, CourseNotes::CourseId)
                            .to(Courses::Table, Courses::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Create lecturers table
        manager
            .create_table(
                Table::create()
                    .table(Lecturers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lecturers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Lecturers::Name).string().not_null())
                    .col(ColumnDef::new(Lecturers::Note).text().not_null().default(""))
                    .col(ColumnDef::new(Lecturers::Homepage).string().not_null())
                    .col(ColumnDef::new(Lecturers::Email).string().not_null())
                    .col(
                        ColumnDef::new(Lecturers::EditTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create terms table
        manager
            .create_table(
                Table::create()
                    .table(Terms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Terms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Terms::DisplayName).string().not_null())
                    .col(ColumnDef::new(Terms::Year).integer().not_null().default(2005))
                    .col(
                        ColumnDef::new(Terms::StartMonth)
                            .integer()
                            .not_null()
                            .default(9),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_lecturers junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(CourseLecturers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseLecturers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseLecturers::CourseId).integer().not_null())
                    .col(
                        ColumnDef::new(CourseLecturers::LecturerId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_lecturers-course_id")
                            .from(CourseLecturers::Table, CourseLecturers::CourseId)
                            .to(Courses::Table, Courses::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_lecturers-lecturer_id")
                            .from(CourseLecturers::Table, CourseLecturers::LecturerId)
                            .to(Lecturers::Table, Lecturers::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_offering_terms junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(CourseOfferingTerms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseOfferingTerms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseOfferingTerms::CourseId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseOfferingTerms::TermId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_offering_terms-course_id")
                            .from(CourseOfferingTerms::Table, CourseOfferingTerms::CourseId)
                            .to(Courses::Table, Courses::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_offering_terms-term_id")
                            .from(CourseOfferingTerms::Table, CourseOfferingTerms::TermId)
                            .to(Terms::Table, Terms::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(CourseOfferingTerms::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseLecturers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Terms::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Lecturers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseNotes::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseDescriptions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    CourseCode,
    CourseName,
    CourseNameCn,
    CourseUnits,
    CourseType,
    CoursePrerequisite,
    UpdateTime,
    IsArchived,
    Visibility,
}

#[derive(Iden)]
enum CourseDescriptions {
    Table,
    Id,
    CourseDescription,
    CreateTime,
    CourseId,
}

#[derive(Iden)]
enum CourseNotes {
    Table,
    Id,
    CourseNote,
    CreateTime,
    CourseId,
}

#[derive(Iden)]
enum Lecturers {
    Table,
    Id,
    Name,
    Note,
    Homepage,
    Email,
    EditTime,
}

#[derive(Iden)]
enum Terms {
    Table,
    Id,
    DisplayName,
    Year,
    StartMonth,
}

#[derive(Iden)]
enum CourseLecturers {
    Table,
    Id,
    CourseId,
    LecturerId,
}

#[derive(Iden)]
enum CourseOfferingTerms {
    Table,
    Id,
    CourseId,
    TermId,
}
