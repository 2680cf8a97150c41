use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{project, student},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Management API",
        description = "CRUD over students with nested address, phones and projects"
    ),
    tags(
        (name = "student", description = "Students and their nested associations"),
        (name = "project", description = "Project membership queries")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(student::get_students, student::create_student))
        .routes(routes!(student::get_students_with_phones))
        .routes(routes!(student::get_students_without_phones))
        .routes(routes!(student::get_students_with_address))
        .routes(routes!(student::get_students_without_address))
        .routes(routes!(student::get_students_by_project))
        .routes(routes!(
            student::get_student,
            student::update_student,
            student::patch_student,
            student::delete_student
        ))
        .routes(routes!(student::get_student_full))
        .routes(routes!(student::get_student_projects))
        .routes(routes!(project::get_projects_with_students))
        .routes(routes!(project::get_projects_without_students))
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
