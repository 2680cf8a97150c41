//! Shared helper utilities for factory methods.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Links a student to a project by inserting a junction row.
///
/// # Arguments
/// - `db` - Database connection
/// - `student_id` - Student to link
/// - `project_id` - Project to link
///
/// # Returns
/// - `Ok(entity::student_project::Model)` - Created junction row
/// - `Err(DbErr)` - Database error during insert (e.g. duplicate link)
pub async fn link_project<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    project_id: i32,
) -> Result<entity::student_project::Model, DbErr> {
    entity::student_project::ActiveModel {
        student_id: ActiveValue::Set(student_id),
        project_id: ActiveValue::Set(project_id),
    }
    .insert(db)
    .await
}

/// Creates a student with an address, two phones and one linked project.
///
/// All entities are created with default values. Use the individual factories
/// when a test needs specific values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((student, address, phones, project))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_graph<C: ConnectionTrait>(
    db: &C,
) -> Result<
    (
        entity::student::Model,
        entity::address::Model,
        Vec<entity::phone::Model>,
        entity::project::Model,
    ),
    DbErr,
> {
    let student = crate::factory::student::create_student(db).await?;
    let address = crate::factory::address::create_address(db, student.id).await?;
    let phones = vec![
        crate::factory::phone::create_phone(db, student.id).await?,
        crate::factory::phone::create_phone(db, student.id).await?,
    ];
    let project = crate::factory::project::create_project(db).await?;
    link_project(db, student.id, project.id).await?;

    Ok((student, address, phones, project))
}
