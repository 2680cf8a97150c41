use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        student::{CreateStudentDto, ProjectDto, StudentDto, UpdateStudentDto},
    },
    server::{
        error::AppError,
        model::{
            project::Project,
            student::{CreateStudentParams, Student, UpdateStudentParams},
        },
        service::student::StudentService,
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

fn into_dtos(students: Vec<Student>) -> Json<Vec<StudentDto>> {
    Json(students.into_iter().map(Student::into_dto).collect())
}

/// Create a student with its address, phones and projects.
///
/// Phone ids in the payload are ignored. Projects with an id are linked as
/// they are, projects without one are created.
///
/// # Returns
/// - `201 Created` - The created student with all associations
/// - `400 Bad Request` - First name, last name or email missing
/// - `404 Not Found` - A referenced project does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 404, description = "Referenced project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let student = service.create(CreateStudentParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

/// Get all students ordered by id, without associations.
#[utoipa::path(
    get,
    path = "/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "All students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).get_all().await?;

    Ok(into_dtos(students))
}

/// Get a student by id, without associations.
#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "The student", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db).get_by_id(id).await?;

    Ok(Json(student.into_dto()))
}

/// Get a student with its address, phones and projects.
#[utoipa::path(
    get,
    path = "/students/{id}/full",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "The student with all associations", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_full(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db).get_full(id).await?;

    Ok(Json(student.into_dto()))
}

/// Replace a student and reconcile its associations.
///
/// The payload must carry the student's current version and every required
/// field. An absent address deletes the stored one. Phones left out of the
/// payload are kept. Project memberships are rebuilt from the payload.
///
/// # Returns
/// - `200 OK` - The updated student with all associations
/// - `400 Bad Request` - First name, last name or email missing
/// - `404 Not Found` - Student, phone or project not found
/// - `409 Conflict` - Version missing or stale
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Successfully replaced student", body = StudentDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 404, description = "Student, phone or project not found", body = ErrorDto),
        (status = 409, description = "Version missing or stale", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let student = service
        .update(UpdateStudentParams::from_dto(id, payload))
        .await?;

    Ok(Json(student.into_dto()))
}

/// Partially update a student and its associations.
///
/// Only fields present in the payload are written, and the version is only
/// checked when supplied.
///
/// # Returns
/// - `200 OK` - The updated student with all associations
/// - `404 Not Found` - Student, phone or project not found
/// - `409 Conflict` - Stale version
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Successfully patched student", body = StudentDto),
        (status = 404, description = "Student, phone or project not found", body = ErrorDto),
        (status = 409, description = "Stale version", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let student = service
        .patch(UpdateStudentParams::from_dto(id, payload))
        .await?;

    Ok(Json(student.into_dto()))
}

/// Delete a student with its phones, address and project memberships.
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    responses(
        (status = 204, description = "Successfully deleted student"),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    StudentService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the projects a student belongs to.
#[utoipa::path(
    get,
    path = "/students/{id}/projects",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "The student's projects", body = Vec<ProjectDto>),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_projects(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let projects = StudentService::new(&state.db).get_projects(id).await?;

    Ok(Json(
        projects
            .into_iter()
            .map(Project::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Get students linked to a project with the given name.
#[utoipa::path(
    get,
    path = "/students/project/{name}",
    tag = STUDENT_TAG,
    params(
        ("name" = String, Path, description = "Project name")
    ),
    responses(
        (status = 200, description = "Students in the project", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students_by_project(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db)
        .get_by_project(&name)
        .await?;

    Ok(into_dtos(students))
}

#[utoipa::path(
    get,
    path = "/students/with-phones",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Students owning at least one phone", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students_with_phones(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).with_phones().await?;

    Ok(into_dtos(students))
}

#[utoipa::path(
    get,
    path = "/students/without-phones",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Students owning no phone", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students_without_phones(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).without_phones().await?;

    Ok(into_dtos(students))
}

#[utoipa::path(
    get,
    path = "/students/with-address",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Students with an address", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students_with_address(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).with_address().await?;

    Ok(into_dtos(students))
}

#[utoipa::path(
    get,
    path = "/students/without-address",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Students without an address", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students_without_address(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).without_address().await?;

    Ok(into_dtos(students))
}
