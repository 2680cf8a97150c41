use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

pub struct ProjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a standalone project at version 0
    pub async fn create(&self, name: Option<String>) -> Result<entity::project::Model, DbErr> {
        entity::project::ActiveModel {
            name: ActiveValue::Set(name),
            version: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::project::Model>, DbErr> {
        entity::prelude::Project::find_by_id(id).one(self.db).await
    }

    /// Renames a project and bumps its version
    ///
    /// The project is shared, so the new name is seen by every linked student.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated project
    /// - `Ok(None)`: No row at `expected_version`
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        id: i32,
        expected_version: i32,
        name: Option<String>,
    ) -> Result<Option<entity::project::Model>, DbErr> {
        let result = entity::prelude::Project::update_many()
            .set(entity::project::ActiveModel {
                name: ActiveValue::Set(name),
                version: ActiveValue::Set(expected_version + 1),
                ..Default::default()
            })
            .filter(entity::project::Column::Id.eq(id))
            .filter(entity::project::Column::Version.eq(expected_version))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Inserts the junction row linking a student to a project
    pub async fn link(&self, student_id: i32, project_id: i32) -> Result<(), DbErr> {
        entity::student_project::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            project_id: ActiveValue::Set(project_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn is_linked(&self, student_id: i32, project_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::StudentProject::find()
            .filter(entity::student_project::Column::StudentId.eq(student_id))
            .filter(entity::student_project::Column::ProjectId.eq(project_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Removes every junction row of a student, leaving the projects in place
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of links removed
    /// - `Err(DbErr)`: Database error
    pub async fn unlink_all(&self, student_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::StudentProject::delete_many()
            .filter(entity::student_project::Column::StudentId.eq(student_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Projects linked to the given student, ordered by id
    pub async fn get_by_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<entity::project::Model>, DbErr> {
        entity::prelude::Project::find()
            .join(
                JoinType::InnerJoin,
                entity::project::Relation::StudentProject.def(),
            )
            .filter(entity::student_project::Column::StudentId.eq(student_id))
            .order_by_asc(entity::project::Column::Id)
            .all(self.db)
            .await
    }

    /// Projects linked to at least one student, each listed once
    pub async fn with_students(&self) -> Result<Vec<entity::project::Model>, DbErr> {
        entity::prelude::Project::find()
            .join(
                JoinType::InnerJoin,
                entity::project::Relation::StudentProject.def(),
            )
            .distinct()
            .order_by_asc(entity::project::Column::Id)
            .all(self.db)
            .await
    }

    /// Projects no student is linked to
    pub async fn without_students(&self) -> Result<Vec<entity::project::Model>, DbErr> {
        entity::prelude::Project::find()
            .join(
                JoinType::LeftJoin,
                entity::project::Relation::StudentProject.def(),
            )
            .filter(entity::student_project::Column::StudentId.is_null())
            .order_by_asc(entity::project::Column::Id)
            .all(self.db)
            .await
    }
}
