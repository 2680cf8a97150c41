//! Project domain models and parameters.
//!
//! Projects are shared between students, so any write to a project's own
//! columns is visible to every student linked to it.

use crate::model::student::ProjectDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i32,
    pub version: i32,
    pub name: Option<String>,
}

impl Project {
    pub fn from_entity(entity: entity::project::Model) -> Self {
        Self {
            id: entity.id,
            version: entity.version,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> ProjectDto {
        ProjectDto {
            id: Some(self.id),
            version: Some(self.version),
            name: self.name,
        }
    }
}

/// Project entry from a create, PUT or PATCH payload.
///
/// An entry with an `id` references an existing shared project; one without
/// creates a new project.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectParams {
    pub id: Option<i32>,
    pub version: Option<i32>,
    pub name: Option<String>,
}

impl ProjectParams {
    pub fn from_dto(dto: ProjectDto) -> Self {
        Self {
            id: dto.id,
            version: dto.version,
            name: dto.name,
        }
    }
}
