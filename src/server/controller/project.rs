use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, student::ProjectDto},
    server::{
        error::AppError, model::project::Project, service::project::ProjectService,
        state::AppState,
    },
};

/// Tag for grouping project endpoints in OpenAPI documentation
pub static PROJECT_TAG: &str = "project";

fn into_dtos(projects: Vec<Project>) -> Json<Vec<ProjectDto>> {
    Json(projects.into_iter().map(Project::into_dto).collect())
}

/// Get projects that at least one student belongs to.
#[utoipa::path(
    get,
    path = "/projects/with-students",
    tag = PROJECT_TAG,
    responses(
        (status = 200, description = "Projects with members", body = Vec<ProjectDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_projects_with_students(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let projects = ProjectService::new(&state.db).with_students().await?;

    Ok(into_dtos(projects))
}

/// Get projects no student belongs to.
#[utoipa::path(
    get,
    path = "/projects/without-students",
    tag = PROJECT_TAG,
    responses(
        (status = 200, description = "Projects without members", body = Vec<ProjectDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_projects_without_students(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let projects = ProjectService::new(&state.db).without_students().await?;

    Ok(into_dtos(projects))
}
