//! Phone domain models and parameters.

use crate::model::student::PhoneDto;

/// Phone owned by a student.
#[derive(Debug, Clone, PartialEq)]
pub struct Phone {
    pub id: i32,
    pub version: i32,
    pub fields: PhoneFields,
}

impl Phone {
    pub fn from_entity(entity: entity::phone::Model) -> Self {
        Self {
            id: entity.id,
            version: entity.version,
            fields: PhoneFields::from_entity(&entity),
        }
    }

    pub fn into_dto(self) -> PhoneDto {
        PhoneDto {
            id: Some(self.id),
            version: Some(self.version),
            model: self.fields.model,
            number: self.fields.number,
        }
    }
}

/// Writable phone columns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhoneFields {
    pub model: Option<String>,
    pub number: Option<String>,
}

impl PhoneFields {
    pub fn from_entity(entity: &entity::phone::Model) -> Self {
        Self {
            model: entity.model.clone(),
            number: entity.number.clone(),
        }
    }

    /// Overlays the present fields of `patch` onto `self`.
    pub fn merge(self, patch: PhoneFields) -> Self {
        Self {
            model: patch.model.or(self.model),
            number: patch.number.or(self.number),
        }
    }
}

/// Phone entry from a create, PUT or PATCH payload.
///
/// An entry with an `id` targets a phone the student already owns; one without
/// is a new phone.
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneParams {
    pub id: Option<i32>,
    pub version: Option<i32>,
    pub fields: PhoneFields,
}

impl PhoneParams {
    pub fn from_dto(dto: PhoneDto) -> Self {
        Self {
            id: dto.id,
            version: dto.version,
            fields: PhoneFields {
                model: dto.model,
                number: dto.number,
            },
        }
    }
}
