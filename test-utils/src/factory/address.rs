//! Address factory for creating test address entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating test addresses owned by a student.
///
/// # Example
///
/// ```rust,ignore
/// let address = AddressFactory::new(&db, student.id)
///     .city("Lisbon")
///     .build()
///     .await?;
/// ```
pub struct AddressFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    student_id: i32,
    house_name: Option<String>,
    street_no: Option<String>,
    city: Option<String>,
    state: Option<String>,
    country: Option<String>,
    version: i32,
}

impl<'a, C: ConnectionTrait> AddressFactory<'a, C> {
    /// Creates a new AddressFactory with default values.
    ///
    /// Defaults:
    /// - house_name: `"House {id}"`
    /// - street_no: `"{id}"`
    /// - city: `"Springfield"`
    /// - state: `"State"`
    /// - country: `"Country"`
    /// - version: `0`
    pub fn new(db: &'a C, student_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            student_id,
            house_name: Some(format!("House {}", id)),
            street_no: Some(id.to_string()),
            city: Some("Springfield".to_string()),
            state: Some("State".to_string()),
            country: Some("Country".to_string()),
            version: 0,
        }
    }

    pub fn house_name(mut self, house_name: impl Into<String>) -> Self {
        self.house_name = Some(house_name.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    /// Builds and inserts the address entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::address::Model)` - Created address entity
    /// - `Err(DbErr)` - Database error during insert (e.g. student already has an address)
    pub async fn build(self) -> Result<entity::address::Model, DbErr> {
        entity::address::ActiveModel {
            id: ActiveValue::NotSet,
            student_id: ActiveValue::Set(self.student_id),
            house_name: ActiveValue::Set(self.house_name),
            street_no: ActiveValue::Set(self.street_no),
            city: ActiveValue::Set(self.city),
            state: ActiveValue::Set(self.state),
            country: ActiveValue::Set(self.country),
            version: ActiveValue::Set(self.version),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an address with default values for the given student.
pub async fn create_address<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
) -> Result<entity::address::Model, DbErr> {
    AddressFactory::new(db, student_id).build().await
}
