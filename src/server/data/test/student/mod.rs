use crate::server::{data::student::StudentRepository, model::student::StudentFields};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_project_name;
mod get_with_relations;
mod with_address;
mod with_phones;
