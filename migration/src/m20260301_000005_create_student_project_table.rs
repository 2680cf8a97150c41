use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_student_table::Student,
    m20260301_000004_create_project_table::Project,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentProject::Table)
                    .if_not_exists()
                    .col(integer(StudentProject::StudentId))
                    .col(integer(StudentProject::ProjectId))
                    .primary_key(
                        Index::create()
                            .col(StudentProject::StudentId)
                            .col(StudentProject::ProjectId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_project_student_id")
                            .from(StudentProject::Table, StudentProject::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_project_project_id")
                            .from(StudentProject::Table, StudentProject::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentProject::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudentProject {
    Table,
    StudentId,
    ProjectId,
}
