use sea_orm::DatabaseConnection;

use crate::server::{data::project::ProjectRepository, error::AppError, model::project::Project};

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets projects with at least one student, ordered by id
    pub async fn with_students(&self) -> Result<Vec<Project>, AppError> {
        let projects = ProjectRepository::new(self.db).with_students().await?;

        Ok(projects.into_iter().map(Project::from_entity).collect())
    }

    /// Gets projects no student belongs to, ordered by id
    pub async fn without_students(&self) -> Result<Vec<Project>, AppError> {
        let projects = ProjectRepository::new(self.db).without_students().await?;

        Ok(projects.into_iter().map(Project::from_entity).collect())
    }
}
