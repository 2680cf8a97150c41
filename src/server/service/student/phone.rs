//! Phone reconciliation for the student write paths.
//!
//! Incoming phones with an id must already belong to the student; phones
//! without an id are inserted. Neither PUT nor PATCH deletes phones that the
//! payload leaves out.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;

use crate::server::{
    data::phone::PhoneRepository,
    error::{
        domain::{DomainError, EntityKind},
        AppError,
    },
    model::phone::{PhoneFields, PhoneParams},
    util::version::{concurrent_modification, ensure_version},
};

/// Inserts every phone for a freshly created student. Payload ids are ignored.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    incoming: Vec<PhoneParams>,
) -> Result<(), AppError> {
    let repo = PhoneRepository::new(db);

    for params in incoming {
        repo.create(student_id, params.fields).await?;
    }

    Ok(())
}

/// Overwrites id-matched phones and inserts the rest.
pub async fn put<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    incoming: Vec<PhoneParams>,
) -> Result<(), AppError> {
    reconcile(db, student_id, incoming, |_, fields| fields).await
}

/// Merges id-matched phones field by field and inserts the rest.
pub async fn patch<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    incoming: Vec<PhoneParams>,
) -> Result<(), AppError> {
    reconcile(db, student_id, incoming, |current, fields| {
        current.merge(fields)
    })
    .await
}

async fn reconcile<C, F>(
    db: &C,
    student_id: i32,
    incoming: Vec<PhoneParams>,
    resolve: F,
) -> Result<(), AppError>
where
    C: ConnectionTrait,
    F: Fn(PhoneFields, PhoneFields) -> PhoneFields,
{
    let repo = PhoneRepository::new(db);

    let mut owned: HashMap<i32, entity::phone::Model> = repo
        .get_by_student(student_id)
        .await?
        .into_iter()
        .map(|phone| (phone.id, phone))
        .collect();

    for params in incoming {
        let Some(id) = params.id else {
            repo.create(student_id, params.fields).await?;
            continue;
        };

        let current = owned
            .get(&id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Phone, id))?;
        ensure_version(current, params.version)?;

        let stored = PhoneFields::from_entity(current);
        let fields = resolve(stored.clone(), params.fields);
        if fields == stored {
            continue;
        }

        let updated = repo
            .update(current.id, current.version, fields)
            .await?
            .ok_or_else(|| concurrent_modification(EntityKind::Phone, id))?;

        tracing::debug!(phone_id = id, version = updated.version, "Updated phone");
        owned.insert(id, updated);
    }

    Ok(())
}
