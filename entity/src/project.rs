use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student_project::Entity")]
    StudentProject,
}

impl Related<super::student_project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentProject.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        super::student_project::Relation::Student.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::student_project::Relation::Project.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
