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
                    .table(Address::Table)
                    .if_not_exists()
                    .col(pk_auto(Address::Id))
                    .col(integer_uniq(Address::StudentId))
                    .col(string_null(Address::HouseName))
                    .col(string_null(Address::StreetNo))
                    .col(string_null(Address::City))
                    .col(string_null(Address::State))
                    .col(string_null(Address::Country))
                    .col(integer(Address::Version).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_student_id")
                            .from(Address::Table, Address::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Address::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Address {
    Table,
    Id,
    StudentId,
    HouseName,
    StreetNo,
    City,
    State,
    Country,
    Version,
}
