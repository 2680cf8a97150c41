//! Phone factory for creating test phone entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating test phones owned by a student.
pub struct PhoneFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    student_id: i32,
    model: Option<String>,
    number: Option<String>,
    version: i32,
}

impl<'a, C: ConnectionTrait> PhoneFactory<'a, C> {
    /// Creates a new PhoneFactory with default values.
    ///
    /// Defaults:
    /// - model: `"Model {id}"`
    /// - number: `"555-{id}"`
    /// - version: `0`
    pub fn new(db: &'a C, student_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            student_id,
            model: Some(format!("Model {}", id)),
            number: Some(format!("555-{:04}", id)),
            version: 0,
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    /// Builds and inserts the phone entity into the database.
    pub async fn build(self) -> Result<entity::phone::Model, DbErr> {
        entity::phone::ActiveModel {
            id: ActiveValue::NotSet,
            student_id: ActiveValue::Set(self.student_id),
            model: ActiveValue::Set(self.model),
            number: ActiveValue::Set(self.number),
            version: ActiveValue::Set(self.version),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a phone with default values for the given student.
pub async fn create_phone<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
) -> Result<entity::phone::Model, DbErr> {
    PhoneFactory::new(db, student_id).build().await
}
