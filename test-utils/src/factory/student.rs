//! Student factory for creating test student entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .first_name("Ada")
///     .version(3)
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    first_name: String,
    last_name: String,
    email: String,
    version: i32,
}

impl<'a, C: ConnectionTrait> StudentFactory<'a, C> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"First {id}"` where id is auto-incremented
    /// - last_name: `"Last {id}"`
    /// - email: `"student{id}@example.com"`
    /// - version: `0`
    pub fn new(db: &'a C) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("First {}", id),
            last_name: format!("Last {}", id),
            email: format!("student{}@example.com", id),
            version: 0,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the persisted version, for exercising optimistic concurrency checks.
    pub fn version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            version: ActiveValue::Set(self.version),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
///
/// Shorthand for `StudentFactory::new(db).build().await`.
pub async fn create_student<C: ConnectionTrait>(db: &C) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}
