use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::address::AddressFields;

pub struct AddressRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AddressRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the address of a student at version 0
    pub async fn create(
        &self,
        student_id: i32,
        fields: AddressFields,
    ) -> Result<entity::address::Model, DbErr> {
        entity::address::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            house_name: ActiveValue::Set(fields.house_name),
            street_no: ActiveValue::Set(fields.street_no),
            city: ActiveValue::Set(fields.city),
            state: ActiveValue::Set(fields.state),
            country: ActiveValue::Set(fields.country),
            version: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_student(
        &self,
        student_id: i32,
    ) -> Result<Option<entity::address::Model>, DbErr> {
        entity::prelude::Address::find()
            .filter(entity::address::Column::StudentId.eq(student_id))
            .one(self.db)
            .await
    }

    /// Overwrites all address columns and bumps the version
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated address
    /// - `Ok(None)`: No row at `expected_version`
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        id: i32,
        expected_version: i32,
        fields: AddressFields,
    ) -> Result<Option<entity::address::Model>, DbErr> {
        let result = entity::prelude::Address::update_many()
            .set(entity::address::ActiveModel {
                house_name: ActiveValue::Set(fields.house_name),
                street_no: ActiveValue::Set(fields.street_no),
                city: ActiveValue::Set(fields.city),
                state: ActiveValue::Set(fields.state),
                country: ActiveValue::Set(fields.country),
                version: ActiveValue::Set(expected_version + 1),
                ..Default::default()
            })
            .filter(entity::address::Column::Id.eq(id))
            .filter(entity::address::Column::Version.eq(expected_version))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        entity::prelude::Address::find_by_id(id).one(self.db).await
    }

    /// Deletes the address of a student, returning whether one existed
    pub async fn delete_by_student(&self, student_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Address::delete_many()
            .filter(entity::address::Column::StudentId.eq(student_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
