//! Address domain models and parameters.

use crate::model::student::AddressDto;

/// Address owned by a student.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: i32,
    pub version: i32,
    pub fields: AddressFields,
}

impl Address {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::address::Model) -> Self {
        Self {
            id: entity.id,
            version: entity.version,
            fields: AddressFields::from_entity(&entity),
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> AddressDto {
        AddressDto {
            id: Some(self.id),
            version: Some(self.version),
            house_name: self.fields.house_name,
            street_no: self.fields.street_no,
            city: self.fields.city,
            state: self.fields.state,
            country: self.fields.country,
        }
    }
}

/// Writable address columns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressFields {
    pub house_name: Option<String>,
    pub street_no: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl AddressFields {
    pub fn from_entity(entity: &entity::address::Model) -> Self {
        Self {
            house_name: entity.house_name.clone(),
            street_no: entity.street_no.clone(),
            city: entity.city.clone(),
            state: entity.state.clone(),
            country: entity.country.clone(),
        }
    }

    /// Overlays the present fields of `patch` onto `self`.
    ///
    /// Absent (`None`) fields in `patch` keep the current value, so a patch can
    /// never clear an address column.
    pub fn merge(self, patch: AddressFields) -> Self {
        Self {
            house_name: patch.house_name.or(self.house_name),
            street_no: patch.street_no.or(self.street_no),
            city: patch.city.or(self.city),
            state: patch.state.or(self.state),
            country: patch.country.or(self.country),
        }
    }
}

/// Address entry from a create, PUT or PATCH payload.
///
/// A student has at most one address, so the entry is matched by owner and a
/// payload address id carries no meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressParams {
    pub version: Option<i32>,
    pub fields: AddressFields,
}

impl AddressParams {
    pub fn from_dto(dto: AddressDto) -> Self {
        Self {
            version: dto.version,
            fields: AddressFields {
                house_name: dto.house_name,
                street_no: dto.street_no,
                city: dto.city,
                state: dto.state,
                country: dto.country,
            },
        }
    }
}
