use crate::server::data::project::ProjectRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_by_student;
mod link;
mod update;
mod with_students;
