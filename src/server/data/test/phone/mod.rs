use crate::server::{data::phone::PhoneRepository, model::phone::PhoneFields};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_student;
mod update;
