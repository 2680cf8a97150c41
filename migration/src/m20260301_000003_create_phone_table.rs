use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_student_table::Student;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Phone::Table)
                    .if_not_exists()
                    .col(pk_auto(Phone::Id))
                    .col(integer(Phone::StudentId))
                    .col(string_null(Phone::Model))
                    .col(string_null(Phone::Number))
                    .col(integer(Phone::Version).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_phone_student_id")
                            .from(Phone::Table, Phone::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_phone_student_id")
                    .table(Phone::Table)
                    .col(Phone::StudentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Phone::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Phone {
    Table,
    Id,
    StudentId,
    Model,
    Number,
    Version,
}
