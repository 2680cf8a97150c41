//! Address reconciliation for the student write paths.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::address::AddressRepository,
    error::{domain::EntityKind, AppError},
    model::address::{AddressFields, AddressParams},
    util::version::{concurrent_modification, ensure_version},
};

/// Creates the address of a freshly inserted student, if one was supplied.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    incoming: Option<AddressParams>,
) -> Result<(), AppError> {
    if let Some(params) = incoming {
        AddressRepository::new(db)
            .create(student_id, params.fields)
            .await?;
    }

    Ok(())
}

/// Replaces the student's address with the payload.
///
/// A missing payload deletes the stored address. An existing address is
/// overwritten in place after a version check when the payload carries one.
pub async fn put<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    incoming: Option<AddressParams>,
) -> Result<(), AppError> {
    let repo = AddressRepository::new(db);
    let existing = repo.find_by_student(student_id).await?;

    match (existing, incoming) {
        (None, None) => {}
        (Some(_), None) => {
            repo.delete_by_student(student_id).await?;
        }
        (None, Some(params)) => {
            repo.create(student_id, params.fields).await?;
        }
        (Some(current), Some(params)) => {
            ensure_version(&current, params.version)?;
            write(&repo, &current, params.fields).await?;
        }
    }

    Ok(())
}

/// Merges the payload into the student's address, creating it if missing.
///
/// An absent payload leaves the address untouched.
pub async fn patch<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    incoming: Option<AddressParams>,
) -> Result<(), AppError> {
    let Some(params) = incoming else {
        return Ok(());
    };

    let repo = AddressRepository::new(db);

    match repo.find_by_student(student_id).await? {
        None => {
            repo.create(student_id, params.fields).await?;
        }
        Some(current) => {
            ensure_version(&current, params.version)?;
            let merged = AddressFields::from_entity(&current).merge(params.fields);
            write(&repo, &current, merged).await?;
        }
    }

    Ok(())
}

/// Writes `fields` unless they match what is stored
async fn write<C: ConnectionTrait>(
    repo: &AddressRepository<'_, C>,
    current: &entity::address::Model,
    fields: AddressFields,
) -> Result<(), AppError> {
    if AddressFields::from_entity(current) == fields {
        return Ok(());
    }

    repo.update(current.id, current.version, fields)
        .await?
        .ok_or_else(|| concurrent_modification(EntityKind::Address, current.id))?;

    Ok(())
}
