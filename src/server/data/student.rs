use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::student::{StudentFields, StudentWithRelations};

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new student at version 0
    pub async fn create(&self, fields: StudentFields) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            first_name: ActiveValue::Set(fields.first_name),
            last_name: ActiveValue::Set(fields.last_name),
            email: ActiveValue::Set(fields.email),
            version: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a student with its address, phones and projects
    ///
    /// Phones and projects are ordered by id.
    ///
    /// # Returns
    /// - `Ok(Some(StudentWithRelations))`: Student and its associations
    /// - `Ok(None)`: No student with that id
    /// - `Err(DbErr)`: Database error
    pub async fn get_with_relations(
        &self,
        id: i32,
    ) -> Result<Option<StudentWithRelations>, DbErr> {
        let Some(student) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let address = entity::prelude::Address::find()
            .filter(entity::address::Column::StudentId.eq(id))
            .one(self.db)
            .await?;

        let phones = entity::prelude::Phone::find()
            .filter(entity::phone::Column::StudentId.eq(id))
            .order_by_asc(entity::phone::Column::Id)
            .all(self.db)
            .await?;

        let projects = entity::prelude::Project::find()
            .join(
                JoinType::InnerJoin,
                entity::project::Relation::StudentProject.def(),
            )
            .filter(entity::student_project::Column::StudentId.eq(id))
            .order_by_asc(entity::project::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(StudentWithRelations {
            student,
            address,
            phones,
            projects,
        }))
    }

    /// Overwrites the student's columns and bumps its version
    ///
    /// The write only applies if the row is still at `expected_version`.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated student at `expected_version + 1`
    /// - `Ok(None)`: No row at `expected_version` (missing or modified concurrently)
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        id: i32,
        expected_version: i32,
        fields: StudentFields,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        let result = entity::prelude::Student::update_many()
            .set(entity::student::ActiveModel {
                first_name: ActiveValue::Set(fields.first_name),
                last_name: ActiveValue::Set(fields.last_name),
                email: ActiveValue::Set(fields.email),
                version: ActiveValue::Set(expected_version + 1),
                ..Default::default()
            })
            .filter(entity::student::Column::Id.eq(id))
            .filter(entity::student::Column::Version.eq(expected_version))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Deletes a student along with its phones, address and project links
    ///
    /// Linked projects themselves are kept.
    ///
    /// # Returns
    /// - `Ok(true)`: Student deleted
    /// - `Ok(false)`: No student with that id
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::Phone::delete_many()
            .filter(entity::phone::Column::StudentId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Address::delete_many()
            .filter(entity::address::Column::StudentId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::StudentProject::delete_many()
            .filter(entity::student_project::Column::StudentId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Students linked to at least one project with the given name
    pub async fn find_by_project_name(
        &self,
        name: &str,
    ) -> Result<Vec<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .join(
                JoinType::InnerJoin,
                entity::student::Relation::StudentProject.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::student_project::Relation::Project.def(),
            )
            .filter(entity::project::Column::Name.eq(name))
            .distinct()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await
    }

    /// Students owning at least one phone, each listed once
    pub async fn with_phones(&self) -> Result<Vec<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .join(JoinType::InnerJoin, entity::student::Relation::Phone.def())
            .distinct()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await
    }

    /// Students owning no phone
    pub async fn without_phones(&self) -> Result<Vec<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .join(JoinType::LeftJoin, entity::student::Relation::Phone.def())
            .filter(entity::phone::Column::Id.is_null())
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await
    }

    /// Students with an address
    pub async fn with_address(&self) -> Result<Vec<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .join(JoinType::InnerJoin, entity::student::Relation::Address.def())
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await
    }

    /// Students without an address
    pub async fn without_address(&self) -> Result<Vec<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .join(JoinType::LeftJoin, entity::student::Relation::Address.def())
            .filter(entity::address::Column::Id.is_null())
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await
    }
}
