//! Project factory for creating test project entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating test projects.
///
/// Projects are shared entities and have no owner; link them to students with
/// [`crate::factory::helpers::link_project`].
pub struct ProjectFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    name: Option<String>,
    version: i32,
}

impl<'a, C: ConnectionTrait> ProjectFactory<'a, C> {
    /// Creates a new ProjectFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Project {id}"`
    /// - version: `0`
    pub fn new(db: &'a C) -> Self {
        let id = next_id();
        Self {
            db,
            name: Some(format!("Project {}", id)),
            version: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    /// Builds and inserts the project entity into the database.
    pub async fn build(self) -> Result<entity::project::Model, DbErr> {
        entity::project::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            version: ActiveValue::Set(self.version),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a project with default values.
pub async fn create_project<C: ConnectionTrait>(db: &C) -> Result<entity::project::Model, DbErr> {
    ProjectFactory::new(db).build().await
}
