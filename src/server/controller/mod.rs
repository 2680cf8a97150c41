//! HTTP request handlers.
//!
//! Controllers convert DTOs into service parameters, call the service layer and
//! convert the resulting domain models back into DTOs. Every handler carries a
//! `utoipa::path` annotation so it appears in the generated OpenAPI document.

pub mod project;
pub mod student;
