//! Student service.
//!
//! Every operation runs inside a single database transaction. Repositories are
//! built on the transaction handle so all reads and writes of one request see
//! the same snapshot, and returning early with `?` drops the transaction,
//! rolling back anything already written.

mod address;
mod phone;
mod project;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{project::ProjectRepository, student::StudentRepository},
    error::{
        domain::{DomainError, EntityKind},
        AppError,
    },
    model::{
        project::Project,
        student::{
            CreateStudentParams, Student, StudentFields, StudentGraph, UpdateStudentParams,
        },
    },
    util::version::{check_version, concurrent_modification, ensure_version},
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a student together with its address, phones and projects
    ///
    /// # Returns
    /// - `Ok(StudentGraph)`: The created student with all associations
    /// - `Err(AppError::DomainErr(Validation))`: A required field is missing
    /// - `Err(AppError::DomainErr(NotFound))`: A referenced project does not exist
    pub async fn create(&self, params: CreateStudentParams) -> Result<StudentGraph, AppError> {
        let fields = StudentFields::require(params.first_name, params.last_name, params.email)?;

        let txn = self.db.begin().await?;

        let student = StudentRepository::new(&txn).create(fields).await?;

        address::create(&txn, student.id, params.address).await?;
        phone::create(&txn, student.id, params.phones).await?;
        project::create(&txn, student.id, params.projects).await?;

        let graph = load_graph(&txn, student.id).await?;
        txn.commit().await?;

        tracing::info!(student_id = graph.student.id, "Created student");

        Ok(graph)
    }

    /// Replaces a student and reconciles its associations with the payload
    ///
    /// The payload must carry the student's current version and all three
    /// required fields. A missing address deletes the stored one, phones not
    /// mentioned are kept, and project memberships are rebuilt from scratch.
    ///
    /// # Returns
    /// - `Ok(StudentGraph)`: The updated student with all associations
    /// - `Err(AppError::DomainErr(NotFound))`: Student, phone or project missing
    /// - `Err(AppError::DomainErr(VersionConflict))`: Missing or stale version
    /// - `Err(AppError::DomainErr(Validation))`: A required field is missing
    pub async fn update(&self, params: UpdateStudentParams) -> Result<StudentGraph, AppError> {
        let txn = self.db.begin().await?;
        let students = StudentRepository::new(&txn);

        let current = students
            .find_by_id(params.id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Student, params.id))?;

        let supplied = params
            .version
            .ok_or_else(|| DomainError::VersionConflict("version is required".to_string()))?;
        check_version(EntityKind::Student, current.id, current.version, supplied)?;

        let fields = StudentFields::require(params.first_name, params.last_name, params.email)?;

        students
            .update(current.id, current.version, fields)
            .await?
            .ok_or_else(|| concurrent_modification(EntityKind::Student, current.id))?;

        address::put(&txn, current.id, params.address).await?;
        if let Some(phones) = params.phones {
            phone::put(&txn, current.id, phones).await?;
        }
        project::put(&txn, current.id, params.projects.unwrap_or_default()).await?;

        let graph = load_graph(&txn, current.id).await?;
        txn.commit().await?;

        tracing::info!(
            student_id = graph.student.id,
            version = graph.student.version,
            "Replaced student"
        );

        Ok(graph)
    }

    /// Applies a partial update to a student and its associations
    ///
    /// Only the fields and associations present in the payload are touched.
    /// The student's version is checked only when the payload supplies one.
    ///
    /// # Returns
    /// - `Ok(StudentGraph)`: The updated student with all associations
    /// - `Err(AppError::DomainErr(NotFound))`: Student, phone or project missing
    /// - `Err(AppError::DomainErr(VersionConflict))`: Stale version supplied
    pub async fn patch(&self, params: UpdateStudentParams) -> Result<StudentGraph, AppError> {
        let txn = self.db.begin().await?;
        let students = StudentRepository::new(&txn);

        let current = students
            .find_by_id(params.id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Student, params.id))?;
        ensure_version(&current, params.version)?;

        let fields = StudentFields::from_entity(&current).merge(
            params.first_name,
            params.last_name,
            params.email,
        );

        students
            .update(current.id, current.version, fields)
            .await?
            .ok_or_else(|| concurrent_modification(EntityKind::Student, current.id))?;

        address::patch(&txn, current.id, params.address).await?;
        if let Some(phones) = params.phones {
            phone::patch(&txn, current.id, phones).await?;
        }
        if let Some(projects) = params.projects {
            project::patch(&txn, current.id, projects).await?;
        }

        let graph = load_graph(&txn, current.id).await?;
        txn.commit().await?;

        tracing::info!(
            student_id = graph.student.id,
            version = graph.student.version,
            "Patched student"
        );

        Ok(graph)
    }

    /// Gets a student without its associations
    pub async fn get_by_id(&self, id: i32) -> Result<Student, AppError> {
        tracing::debug!(student_id = id, "Fetching student");

        let student = StudentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Student, id))?;

        Ok(Student::from_entity(student))
    }

    /// Gets every student ordered by id, without associations
    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        let students = StudentRepository::new(self.db).get_all().await?;

        tracing::debug!(count = students.len(), "Fetched students");

        Ok(students.into_iter().map(Student::from_entity).collect())
    }

    /// Gets a student with its address, phones and projects
    pub async fn get_full(&self, id: i32) -> Result<StudentGraph, AppError> {
        tracing::debug!(student_id = id, "Fetching full student");

        let txn = self.db.begin().await?;
        let graph = load_graph(&txn, id).await?;
        txn.commit().await?;

        Ok(graph)
    }

    /// Deletes a student with its phones, address and project memberships
    ///
    /// The projects themselves are kept.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !StudentRepository::new(&txn).delete(id).await? {
            return Err(DomainError::not_found(EntityKind::Student, id).into());
        }

        txn.commit().await?;

        tracing::info!(student_id = id, "Deleted student");

        Ok(())
    }

    /// Gets students linked to a project with the given name
    pub async fn get_by_project(&self, name: &str) -> Result<Vec<Student>, AppError> {
        tracing::debug!(project_name = name, "Fetching students by project");

        let students = StudentRepository::new(self.db)
            .find_by_project_name(name)
            .await?;

        Ok(students.into_iter().map(Student::from_entity).collect())
    }

    pub async fn with_phones(&self) -> Result<Vec<Student>, AppError> {
        let students = StudentRepository::new(self.db).with_phones().await?;

        Ok(students.into_iter().map(Student::from_entity).collect())
    }

    pub async fn without_phones(&self) -> Result<Vec<Student>, AppError> {
        let students = StudentRepository::new(self.db).without_phones().await?;

        Ok(students.into_iter().map(Student::from_entity).collect())
    }

    pub async fn with_address(&self) -> Result<Vec<Student>, AppError> {
        let students = StudentRepository::new(self.db).with_address().await?;

        Ok(students.into_iter().map(Student::from_entity).collect())
    }

    pub async fn without_address(&self) -> Result<Vec<Student>, AppError> {
        let students = StudentRepository::new(self.db).without_address().await?;

        Ok(students.into_iter().map(Student::from_entity).collect())
    }

    /// Gets the projects a student belongs to, ordered by id
    ///
    /// # Returns
    /// - `Ok(Vec<Project>)`: The student's projects, possibly empty
    /// - `Err(AppError::DomainErr(NotFound))`: No student with that id
    pub async fn get_projects(&self, id: i32) -> Result<Vec<Project>, AppError> {
        tracing::debug!(student_id = id, "Fetching student projects");

        let txn = self.db.begin().await?;

        if StudentRepository::new(&txn).find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found(EntityKind::Student, id).into());
        }

        let projects = ProjectRepository::new(&txn).get_by_student(id).await?;
        txn.commit().await?;

        Ok(projects.into_iter().map(Project::from_entity).collect())
    }
}

/// Loads the full graph of a student, failing with `NotFound` if it is missing
async fn load_graph<C: ConnectionTrait>(db: &C, id: i32) -> Result<StudentGraph, AppError> {
    let result = StudentRepository::new(db)
        .get_with_relations(id)
        .await?
        .ok_or_else(|| DomainError::not_found(EntityKind::Student, id))?;

    Ok(StudentGraph::from_with_relations(result))
}
