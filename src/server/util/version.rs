//! Optimistic concurrency check shared by every versioned entity.
//!
//! Students, addresses, phones and projects each carry their own `version`
//! column. A nested entity is checked against its own version only; the
//! student's version never vouches for its children.

use crate::server::error::domain::{DomainError, EntityKind};

/// A persisted row that participates in optimistic concurrency.
pub trait Versioned {
    const KIND: EntityKind;

    fn id(&self) -> i32;

    fn version(&self) -> i32;
}

/// Fails with `VersionConflict` when `supplied` differs from `current`.
///
/// # Arguments
/// - `kind` - Kind of entity being checked, used in the message
/// - `id` - Id of the entity being checked
/// - `current` - Version currently persisted
/// - `supplied` - Version the caller based its request on
///
/// # Returns
/// - `Ok(())` - Versions match
/// - `Err(DomainError::VersionConflict)` - Versions differ
pub fn check_version(
    kind: EntityKind,
    id: i32,
    current: i32,
    supplied: i32,
) -> Result<(), DomainError> {
    if current != supplied {
        return Err(DomainError::VersionConflict(format!(
            "{} {} has version {} but request used {}",
            kind, id, current, supplied
        )));
    }

    Ok(())
}

/// Checks `entity` against `supplied` when the caller provided a version.
///
/// A `None` version skips the check, which is how optional version checks on
/// nested entities and PATCH requests are expressed.
pub fn ensure_version<V: Versioned>(entity: &V, supplied: Option<i32>) -> Result<(), DomainError> {
    match supplied {
        Some(supplied) => check_version(V::KIND, entity.id(), entity.version(), supplied),
        None => Ok(()),
    }
}

/// Error for a conditional versioned write that matched no row.
///
/// Raised when another transaction bumped the version between the up-front
/// check and the write.
pub fn concurrent_modification(kind: EntityKind, id: i32) -> DomainError {
    DomainError::VersionConflict(format!("{} {} was modified concurrently", kind, id))
}

impl Versioned for entity::student::Model {
    const KIND: EntityKind = EntityKind::Student;

    fn id(&self) -> i32 {
        self.id
    }

    fn version(&self) -> i32 {
        self.version
    }
}

impl Versioned for entity::address::Model {
    const KIND: EntityKind = EntityKind::Address;

    fn id(&self) -> i32 {
        self.id
    }

    fn version(&self) -> i32 {
        self.version
    }
}

impl Versioned for entity::phone::Model {
    const KIND: EntityKind = EntityKind::Phone;

    fn id(&self) -> i32 {
        self.id
    }

    fn version(&self) -> i32 {
        self.version
    }
}

impl Versioned for entity::project::Model {
    const KIND: EntityKind = EntityKind::Project;

    fn id(&self) -> i32 {
        self.id
    }

    fn version(&self) -> i32 {
        self.version
    }
}
