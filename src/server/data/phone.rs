use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::phone::PhoneFields;

pub struct PhoneRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PhoneRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a phone owned by `student_id` at version 0
    pub async fn create(
        &self,
        student_id: i32,
        fields: PhoneFields,
    ) -> Result<entity::phone::Model, DbErr> {
        entity::phone::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            model: ActiveValue::Set(fields.model),
            number: ActiveValue::Set(fields.number),
            version: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all phones owned by a student, ordered by id
    pub async fn get_by_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<entity::phone::Model>, DbErr> {
        entity::prelude::Phone::find()
            .filter(entity::phone::Column::StudentId.eq(student_id))
            .order_by_asc(entity::phone::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrites model and number and bumps the version
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated phone
    /// - `Ok(None)`: No row at `expected_version`
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        id: i32,
        expected_version: i32,
        fields: PhoneFields,
    ) -> Result<Option<entity::phone::Model>, DbErr> {
        let result = entity::prelude::Phone::update_many()
            .set(entity::phone::ActiveModel {
                model: ActiveValue::Set(fields.model),
                number: ActiveValue::Set(fields.number),
                version: ActiveValue::Set(expected_version + 1),
                ..Default::default()
            })
            .filter(entity::phone::Column::Id.eq(id))
            .filter(entity::phone::Column::Version.eq(expected_version))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        entity::prelude::Phone::find_by_id(id).one(self.db).await
    }
}
