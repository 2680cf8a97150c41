//! Project membership reconciliation for the student write paths.
//!
//! Projects are shared between students, so renaming one through a student
//! payload is visible to every member. Membership itself only ever touches
//! junction rows; projects are never deleted here.

use std::collections::{hash_map::Entry, HashMap, HashSet};

use sea_orm::ConnectionTrait;

use crate::server::{
    data::project::ProjectRepository,
    error::{
        domain::{DomainError, EntityKind},
        AppError,
    },
    model::project::ProjectParams,
    util::version::{concurrent_modification, ensure_version},
};

/// Links a freshly created student to its projects.
///
/// Entries with an id must name an existing project, which is linked as is.
/// Entries without an id create a new project.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    incoming: Vec<ProjectParams>,
) -> Result<(), AppError> {
    let repo = ProjectRepository::new(db);
    let mut linked = HashSet::new();

    for params in incoming {
        let project_id = match params.id {
            Some(id) => find(&repo, id).await?.id,
            None => repo.create(params.name).await?.id,
        };

        if linked.insert(project_id) {
            repo.link(student_id, project_id).await?;
        }
    }

    Ok(())
}

/// Rebuilds the student's memberships from the payload.
///
/// Every existing link is dropped first. Id-matched projects get their name
/// overwritten after an optional version check.
pub async fn put<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    incoming: Vec<ProjectParams>,
) -> Result<(), AppError> {
    let repo = ProjectRepository::new(db);
    repo.unlink_all(student_id).await?;

    for project_id in resolve(&repo, incoming, |_, name| name).await? {
        repo.link(student_id, project_id).await?;
    }

    Ok(())
}

/// Attaches the payload's projects without dropping existing memberships.
///
/// Id-matched projects only get renamed when the payload carries a name.
pub async fn patch<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    incoming: Vec<ProjectParams>,
) -> Result<(), AppError> {
    let repo = ProjectRepository::new(db);

    for project_id in resolve(&repo, incoming, |current, name| name.or(current)).await? {
        if !repo.is_linked(student_id, project_id).await? {
            repo.link(student_id, project_id).await?;
        }
    }

    Ok(())
}

/// Resolves payload entries to project ids in payload order, without repeats.
///
/// Entries without an id create a project. Every entry naming a stored project
/// is version-checked against the stored row, and the names of repeated
/// entries are folded with `pick` in payload order before a single write, so
/// the last entry wins.
async fn resolve<C, F>(
    repo: &ProjectRepository<'_, C>,
    incoming: Vec<ProjectParams>,
    pick: F,
) -> Result<Vec<i32>, AppError>
where
    C: ConnectionTrait,
    F: Fn(Option<String>, Option<String>) -> Option<String>,
{
    let mut ids = Vec::new();
    let mut pending: HashMap<i32, (entity::project::Model, Option<String>)> = HashMap::new();

    for params in incoming {
        let Some(id) = params.id else {
            ids.push(repo.create(params.name).await?.id);
            continue;
        };

        let (current, name) = match pending.entry(id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let current = find(repo, id).await?;
                let name = current.name.clone();
                ids.push(id);
                entry.insert((current, name))
            }
        };

        ensure_version(&*current, params.version)?;
        *name = pick(name.take(), params.name);
    }

    for (current, name) in pending.into_values() {
        rename(repo, &current, name).await?;
    }

    Ok(ids)
}

async fn find<C: ConnectionTrait>(
    repo: &ProjectRepository<'_, C>,
    id: i32,
) -> Result<entity::project::Model, AppError> {
    let project = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(EntityKind::Project, id))?;

    Ok(project)
}

async fn rename<C: ConnectionTrait>(
    repo: &ProjectRepository<'_, C>,
    current: &entity::project::Model,
    name: Option<String>,
) -> Result<(), AppError> {
    if current.name == name {
        return Ok(());
    }

    repo.update(current.id, current.version, name)
        .await?
        .ok_or_else(|| concurrent_modification(EntityKind::Project, current.id))?;

    Ok(())
}
