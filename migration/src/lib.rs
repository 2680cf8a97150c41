pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_student_table;
mod m20260301_000002_create_address_table;
mod m20260301_000003_create_phone_table;
mod m20260301_000004_create_project_table;
mod m20260301_000005_create_student_project_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_student_table::Migration),
            Box::new(m20260301_000002_create_address_table::Migration),
            Box::new(m20260301_000003_create_phone_table::Migration),
            Box::new(m20260301_000004_create_project_table::Migration),
            Box::new(m20260301_000005_create_student_project_table::Migration),
        ]
    }
}
