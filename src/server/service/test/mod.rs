use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{domain::DomainError, AppError},
    model::{
        address::{AddressFields, AddressParams},
        phone::{PhoneFields, PhoneParams},
        project::ProjectParams,
        student::{CreateStudentParams, UpdateStudentParams},
    },
    service::{project::ProjectService, student::StudentService},
};


/// PUT parameters carrying the student's stored columns and version with no
/// address, phones or projects.
fn put_params(student: &entity::student::Model) -> UpdateStudentParams {
    UpdateStudentParams {
        id: student.id,
        version: Some(student.version),
        first_name: Some(student.first_name.clone()),
        last_name: Some(student.last_name.clone()),
        email: Some(student.email.clone()),
        address: None,
        phones: None,
        projects: None,
    }
}

/// PATCH parameters that change nothing.
fn empty_patch(id: i32) -> UpdateStudentParams {
    UpdateStudentParams {
        id,
        version: None,
        first_name: None,
        last_name: None,
        email: None,
        address: None,
        phones: None,
        projects: None,
    }
}

/// Reference to a stored project that keeps its current name.
fn project_ref(project: &entity::project::Model) -> ProjectParams {
    ProjectParams {
        id: Some(project.id),
        version: None,
        name: project.name.clone(),
    }
}

fn new_phone(number: &str) -> PhoneParams {
    PhoneParams {
        id: None,
        version: None,
        fields: PhoneFields {
            model: None,
            number: Some(number.to_string()),
        },
    }
}
