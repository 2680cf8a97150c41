//! Student domain models and parameters.
//!
//! Provides the student aggregate in two shapes: `Student` for plain fetches
//! where associations are not loaded, and `StudentGraph` for operations that
//! return the student together with its address, phones and projects. Parameter
//! types carry create, PUT and PATCH payloads from the controller to the service.

use crate::{
    model::student::{CreateStudentDto, StudentDto, UpdateStudentDto},
    server::{
        error::domain::DomainError,
        model::{
            address::{Address, AddressParams},
            phone::{Phone, PhoneParams},
            project::{Project, ProjectParams},
        },
    },
};

/// Student without any of its associations.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub version: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Student {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            version: entity.version,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
        }
    }

    /// Converts domain model to DTO with associations left out.
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            version: self.version,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            address: None,
            phones: None,
            projects: None,
        }
    }
}

/// Entity models for a student and all of its associations, as loaded by the
/// repository.
#[derive(Debug, Clone)]
pub struct StudentWithRelations {
    pub student: entity::student::Model,
    pub address: Option<entity::address::Model>,
    pub phones: Vec<entity::phone::Model>,
    pub projects: Vec<entity::project::Model>,
}

/// Student together with its address, phones and projects.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentGraph {
    pub student: Student,
    pub address: Option<Address>,
    pub phones: Vec<Phone>,
    pub projects: Vec<Project>,
}

impl StudentGraph {
    pub fn from_with_relations(result: StudentWithRelations) -> Self {
        Self {
            student: Student::from_entity(result.student),
            address: result.address.map(Address::from_entity),
            phones: result.phones.into_iter().map(Phone::from_entity).collect(),
            projects: result
                .projects
                .into_iter()
                .map(Project::from_entity)
                .collect(),
        }
    }

    /// Converts the graph to a DTO with every association populated.
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            address: self.address.map(Address::into_dto),
            phones: Some(self.phones.into_iter().map(Phone::into_dto).collect()),
            projects: Some(self.projects.into_iter().map(Project::into_dto).collect()),
            ..self.student.into_dto()
        }
    }
}

/// Writable student columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl StudentFields {
    pub fn from_entity(entity: &entity::student::Model) -> Self {
        Self {
            first_name: entity.first_name.clone(),
            last_name: entity.last_name.clone(),
            email: entity.email.clone(),
        }
    }

    /// Builds the full column set, failing if any of the three is absent.
    ///
    /// # Returns
    /// - `Ok(StudentFields)` - All fields present
    /// - `Err(DomainError::Validation)` - At least one field missing
    pub fn require(
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
    ) -> Result<Self, DomainError> {
        match (first_name, last_name, email) {
            (Some(first_name), Some(last_name), Some(email)) => Ok(Self {
                first_name,
                last_name,
                email,
            }),
            _ => Err(DomainError::Validation(
                "first_name, last_name and email are required".to_string(),
            )),
        }
    }

    /// Overlays whichever of the three values are present.
    pub fn merge(
        self,
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            first_name: first_name.unwrap_or(self.first_name),
            last_name: last_name.unwrap_or(self.last_name),
            email: email.unwrap_or(self.email),
        }
    }
}

/// Parameters for creating a student with its nested entities.
#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address: Option<AddressParams>,
    pub phones: Vec<PhoneParams>,
    pub projects: Vec<ProjectParams>,
}

impl CreateStudentParams {
    /// Converts a create DTO into service parameters.
    ///
    /// Missing phone and project lists are treated as empty.
    pub fn from_dto(dto: CreateStudentDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            address: dto.address.map(AddressParams::from_dto),
            phones: dto
                .phones
                .unwrap_or_default()
                .into_iter()
                .map(PhoneParams::from_dto)
                .collect(),
            projects: dto
                .projects
                .unwrap_or_default()
                .into_iter()
                .map(ProjectParams::from_dto)
                .collect(),
        }
    }
}

/// Parameters for a PUT or PATCH of an existing student.
///
/// `None` collections mean "not supplied". For PUT an absent address clears
/// the address and an absent project list clears the memberships; for PATCH
/// absent parts are left untouched.
#[derive(Debug, Clone)]
pub struct UpdateStudentParams {
    pub id: i32,
    pub version: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address: Option<AddressParams>,
    pub phones: Option<Vec<PhoneParams>>,
    pub projects: Option<Vec<ProjectParams>>,
}

impl UpdateStudentParams {
    pub fn from_dto(id: i32, dto: UpdateStudentDto) -> Self {
        Self {
            id,
            version: dto.version,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            address: dto.address.map(AddressParams::from_dto),
            phones: dto
                .phones
                .map(|phones| phones.into_iter().map(PhoneParams::from_dto).collect()),
            projects: dto
                .projects
                .map(|projects| projects.into_iter().map(ProjectParams::from_dto).collect()),
        }
    }
}
